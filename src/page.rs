use super::*;

/// A parsed HTML page holding zero or more authored blocks.
pub struct Page {
  document: dom_query::Document,
}

impl Page {
  /// Every element matching `selector`, in document order.
  pub fn blocks(&self, selector: &str) -> Result<Vec<NodeRef<'_>>> {
    Ok(self.select(selector)?.nodes().to_vec())
  }

  #[must_use]
  pub fn html(&self) -> String {
    self.document.html().to_string()
  }

  #[must_use]
  pub fn parse(html: &str) -> Self {
    Self {
      document: dom_query::Document::from(html),
    }
  }

  pub fn select(&self, selector: &str) -> Result<Selection<'_>> {
    let matcher = Matcher::new(selector)
      .map_err(|_| Error::InvalidSelector(selector.to_string()))?;

    Ok(self.document.select_matcher(&matcher))
  }
}
