use super::*;

/// A reformatted location block. Every entry is the outer HTML of one
/// element, in the order it appeared in the authored content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationCard {
  pub heading: Option<String>,
  pub meta: Vec<String>,
  pub address: Vec<String>,
  pub contact: Vec<String>,
  pub notes: Vec<String>,
}

impl LocationCard {
  pub(crate) fn push(&mut self, route: Route, html: String) {
    match route {
      Route::Meta => self.meta.push(html),
      Route::AddressHeading | Route::AddressLine => self.address.push(html),
      Route::Contact => self.contact.push(html),
      Route::Note => self.notes.push(html),
      Route::Ignore => {}
    }
  }

  /// Renders the container that replaces the block's content. Empty sections
  /// are left out.
  #[must_use]
  pub fn render(&self, options: &ReformatOptions) -> String {
    let mut html = format!(
      "<div class=\"{}\">",
      options.class(Label::Container)
    );

    if let Some(heading) = &self.heading {
      html.push_str(heading);
    }

    for (label, entries) in [
      (Label::Meta, &self.meta),
      (Label::Address, &self.address),
      (Label::Contact, &self.contact),
      (Label::Notes, &self.notes),
    ] {
      if entries.is_empty() {
        continue;
      }

      html.push_str(&format!("<div class=\"{}\">", options.class(label)));

      for entry in entries {
        html.push_str(entry);
      }

      html.push_str("</div>");
    }

    html.push_str("</div>");

    html
  }
}
