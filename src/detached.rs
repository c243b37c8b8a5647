use super::*;

/// A deep copy of an element parsed into its own document, so relabeling it
/// leaves the original node untouched.
pub(crate) struct DetachedCopy {
  document: dom_query::Document,
}

impl DetachedCopy {
  pub(crate) fn html(&self) -> String {
    self.root().html().to_string()
  }

  pub(crate) fn of(node: &NodeRef<'_>) -> Self {
    Self {
      document: dom_query::Document::from(node.html()),
    }
  }

  /// Replaces the class of the first descendant matching `selector`, if any.
  /// Returns whether a descendant was relabeled.
  pub(crate) fn relabel_descendant(&self, selector: &str, class: &str) -> bool {
    let matched = self.root().select(selector).first();

    if !matched.exists() {
      return false;
    }

    matched.set_attr("class", class);

    true
  }

  pub(crate) fn relabel_root(&self, class: &str) {
    self.root().set_attr("class", class);
  }

  fn root(&self) -> Selection<'_> {
    self.document.select("body > *").first()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn relabeling_copy_leaves_original() {
    let document = dom_query::Document::from(
      "<html><body><h4 class=\"authored\">Address</h4></body></html>",
    );

    let node = document.select("h4").nodes()[0].clone();

    let copy = DetachedCopy::of(&node);

    copy.relabel_root("location-section-heading");

    assert_eq!(
      copy.html(),
      "<h4 class=\"location-section-heading\">Address</h4>"
    );
    assert_eq!(node.attr("class").as_deref(), Some("authored"));
  }

  #[test]
  fn relabels_first_matching_descendant_only() {
    let document = dom_query::Document::from(
      "<html><body><p>Phone: <a href=\"mailto:a@b.c\">mail</a> <a href=\"tel:1\">1</a> <a href=\"tel:2\">2</a></p></body></html>",
    );

    let node = document.select("p").nodes()[0].clone();

    let copy = DetachedCopy::of(&node);

    assert!(copy.relabel_descendant("a[href^=\"tel:\"]", "phone"));

    assert_eq!(
      copy.html(),
      "<p>Phone: <a href=\"mailto:a@b.c\">mail</a> <a href=\"tel:1\" class=\"phone\">1</a> <a href=\"tel:2\">2</a></p>"
    );
  }

  #[test]
  fn missing_descendant_is_reported() {
    let document = dom_query::Document::from(
      "<html><body><p>Fax: <a href=\"https://example.com\">555</a></p></body></html>",
    );

    let node = document.select("p").nodes()[0].clone();

    let copy = DetachedCopy::of(&node);

    assert!(!copy.relabel_descendant("a[href^=\"tel:\"]", "phone"));

    assert_eq!(copy.html(), node.html().to_string());
  }
}
