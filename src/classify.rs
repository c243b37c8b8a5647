use super::*;

const ADDRESS_HEADING_TAGS: &[&str] = &["h2", "h4"];

const ADDRESS_HEADING_TEXT: &str = "Address";

const CONTACT_PREFIXES: &[&str] = &["Phone:", "Fax:"];

const META_PREFIXES: &[&str] = &["Region:", "Country:"];

/// Where a child of the content wrapper ends up in the rewritten block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
  AddressHeading,
  AddressLine,
  Contact,
  Ignore,
  Meta,
  Note,
}

/// The facts about one child element that routing depends on.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Candidate<'a> {
  pub(crate) has_italic: bool,
  pub(crate) tag: &'a str,
  pub(crate) text: &'a str,
}

impl Candidate<'_> {
  fn is_address_heading(&self) -> bool {
    ADDRESS_HEADING_TAGS.contains(&self.tag) && self.text == ADDRESS_HEADING_TEXT
  }

  fn is_contact(&self) -> bool {
    self.is_paragraph() && Self::starts_with_any(self.text, CONTACT_PREFIXES)
  }

  fn is_meta(&self) -> bool {
    self.is_paragraph() && Self::starts_with_any(self.text, META_PREFIXES)
  }

  fn is_paragraph(&self) -> bool {
    self.tag == "p"
  }

  /// First matching rule wins; `text` is expected to be trimmed already.
  pub(crate) fn route(&self, state: AddressState) -> Route {
    if self.is_meta() {
      return Route::Meta;
    }

    if self.is_address_heading() {
      return Route::AddressHeading;
    }

    if state.is_inside() && self.is_paragraph() && !self.is_contact() {
      return if self.has_italic {
        Route::Note
      } else {
        Route::AddressLine
      };
    }

    if self.is_contact() {
      return Route::Contact;
    }

    if self.is_paragraph() && self.has_italic {
      return Route::Note;
    }

    Route::Ignore
  }

  fn starts_with_any(text: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|prefix| text.starts_with(prefix))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn route(tag: &str, text: &str, has_italic: bool, state: AddressState) -> Route {
    Candidate {
      has_italic,
      tag,
      text,
    }
    .route(state)
  }

  #[test]
  fn region_and_country_paragraphs_are_meta() {
    for state in [AddressState::Outside, AddressState::Inside] {
      assert_eq!(route("p", "Region: Americas", false, state), Route::Meta);
      assert_eq!(route("p", "Country: USA", false, state), Route::Meta);
    }
  }

  #[test]
  fn meta_wins_over_italic() {
    assert_eq!(
      route("p", "Region: EMEA", true, AddressState::Outside),
      Route::Meta
    );
  }

  #[test]
  fn meta_prefix_is_case_sensitive() {
    assert_eq!(
      route("p", "region: Americas", false, AddressState::Outside),
      Route::Ignore
    );
  }

  #[test]
  fn meta_requires_paragraph() {
    assert_eq!(
      route("div", "Region: Americas", false, AddressState::Outside),
      Route::Ignore
    );
  }

  #[test]
  fn address_heading_accepts_h2_and_h4_only() {
    assert_eq!(
      route("h2", "Address", false, AddressState::Outside),
      Route::AddressHeading
    );
    assert_eq!(
      route("h4", "Address", false, AddressState::Inside),
      Route::AddressHeading
    );
    assert_eq!(
      route("h3", "Address", false, AddressState::Outside),
      Route::Ignore
    );
  }

  #[test]
  fn address_heading_text_must_match_exactly() {
    assert_eq!(
      route("h4", "Addresses", false, AddressState::Outside),
      Route::Ignore
    );
    assert_eq!(
      route("h4", "address", false, AddressState::Outside),
      Route::Ignore
    );
  }

  #[test]
  fn plain_paragraph_inside_address_is_line() {
    assert_eq!(
      route("p", "123 Main St", false, AddressState::Inside),
      Route::AddressLine
    );
  }

  #[test]
  fn plain_paragraph_outside_address_is_ignored() {
    assert_eq!(
      route("p", "123 Main St", false, AddressState::Outside),
      Route::Ignore
    );
  }

  #[test]
  fn italic_paragraph_is_note_in_either_state() {
    assert_eq!(
      route("p", "By appointment", true, AddressState::Inside),
      Route::Note
    );
    assert_eq!(
      route("p", "By appointment", true, AddressState::Outside),
      Route::Note
    );
  }

  #[test]
  fn phone_and_fax_are_contact_in_either_state() {
    for state in [AddressState::Outside, AddressState::Inside] {
      assert_eq!(route("p", "Phone: 555-1234", false, state), Route::Contact);
      assert_eq!(route("p", "Fax: 555-9876", true, state), Route::Contact);
    }
  }

  #[test]
  fn non_paragraph_inside_address_is_ignored() {
    assert_eq!(
      route("ul", "Somewhere", false, AddressState::Inside),
      Route::Ignore
    );
  }
}
