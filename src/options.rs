use super::*;

#[derive(Debug, Clone)]
pub struct ReformatOptions {
  pub block_selector: String,
  pub class_prefix: String,
}

impl Default for ReformatOptions {
  fn default() -> Self {
    Self {
      block_selector: ".location".to_string(),
      class_prefix: "location".to_string(),
    }
  }
}

impl ReformatOptions {
  #[must_use]
  pub fn builder() -> ReformatOptionsBuilder {
    ReformatOptionsBuilder::default()
  }

  /// Full class name for `label`, e.g. `location-phone-link`.
  #[must_use]
  pub fn class(&self, label: Label) -> String {
    if self.class_prefix.is_empty() {
      label.to_string()
    } else {
      format!("{}-{label}", self.class_prefix)
    }
  }
}

#[derive(Default)]
pub struct ReformatOptionsBuilder {
  inner: ReformatOptions,
}

impl ReformatOptionsBuilder {
  #[must_use]
  pub fn block_selector(self, block_selector: impl Into<String>) -> Self {
    Self {
      inner: ReformatOptions {
        block_selector: block_selector.into(),
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn build(self) -> ReformatOptions {
    self.inner
  }

  #[must_use]
  pub fn class_prefix(self, class_prefix: impl Into<String>) -> Self {
    Self {
      inner: ReformatOptions {
        class_prefix: class_prefix.into(),
        ..self.inner
      },
    }
  }
}
