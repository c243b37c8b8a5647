use super::*;

const TITLE_HEADING_TAGS: &[&str] = &["h1", "h2", "h3"];

pub(crate) struct Block<'a> {
  node: &'a NodeRef<'a>,
}

impl<'a> Block<'a> {
  fn has_tag(node: &NodeRef<'_>, tags: &[&str]) -> bool {
    node
      .node_name()
      .is_some_and(|name| tags.contains(&name.to_ascii_lowercase().as_str()))
  }

  /// Whether the block already holds a rendered container with `class`.
  pub(crate) fn is_reformatted(&self, class: &str) -> bool {
    self.node.children().iter().any(|child| {
      child
        .attr("class")
        .is_some_and(|value| value.split_whitespace().any(|name| name == class))
    })
  }

  pub(crate) fn new(node: &'a NodeRef<'a>) -> Self {
    Self { node }
  }

  pub(crate) fn replace_content(&self, html: &str) {
    Selection::from(self.node.clone()).set_html(html);
  }

  /// First `h1`, `h2` or `h3` anywhere below the block, in document order.
  pub(crate) fn title_heading(&self) -> Option<NodeRef<'a>> {
    self
      .node
      .descendants()
      .into_iter()
      .find(|node| Self::has_tag(node, TITLE_HEADING_TAGS))
  }

  /// The `div` grandchild of the block that holds the authored content.
  pub(crate) fn wrapper(&self) -> Option<NodeRef<'a>> {
    self
      .node
      .children()
      .into_iter()
      .filter(|child| Self::has_tag(child, &["div"]))
      .find_map(|row| {
        row
          .children()
          .into_iter()
          .find(|cell| Self::has_tag(cell, &["div"]))
      })
  }
}
