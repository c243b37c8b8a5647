use super::*;

pub(crate) struct Element<'a> {
  node: &'a NodeRef<'a>,
  tag: String,
  text: String,
}

impl<'a> Element<'a> {
  pub(crate) fn candidate(&self) -> Candidate<'_> {
    Candidate {
      has_italic: self.has_descendant("em"),
      tag: &self.tag,
      text: &self.text,
    }
  }

  fn has_descendant(&self, tag: &str) -> bool {
    self
      .node
      .descendants()
      .into_iter()
      .any(|node| node.node_name().as_deref() == Some(tag))
  }

  pub(crate) fn html(&self) -> String {
    self.node.html().to_string()
  }

  pub(crate) fn new(node: &'a NodeRef<'a>) -> Self {
    Self {
      node,
      tag: node
        .node_name()
        .map(|name| name.to_ascii_lowercase())
        .unwrap_or_default(),
      text: node.text().trim().to_string(),
    }
  }

  pub(crate) fn node(&self) -> &NodeRef<'a> {
    self.node
  }

  pub(crate) fn tag(&self) -> &str {
    &self.tag
  }
}
