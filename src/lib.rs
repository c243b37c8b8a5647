use {
  address_state::AddressState,
  block::Block,
  classify::Candidate,
  detached::DetachedCopy,
  dom_query::{Matcher, NodeRef, Selection},
  element::Element,
  serde::{Deserialize, Serialize},
  std::fmt::{self, Display, Formatter},
  tracing::{debug, trace},
};

pub use crate::{
  card::LocationCard,
  classify::Route,
  error::Error,
  label::Label,
  options::{ReformatOptions, ReformatOptionsBuilder},
  page::Page,
  reformatter::Reformatter,
};

#[cfg(test)]
macro_rules! case {
  (
    name: $name:ident,
    content: $content:expr,
    expected: $expected:expr $(,)?
  ) => {
    #[test]
    fn $name() {
      let page = Page::parse($content);

      let reformatter = Reformatter::default();

      for block in page.blocks(".location").unwrap() {
        reformatter.reformat(&block);
      }

      pretty_assertions::assert_eq!(
        page.select(".location").unwrap().html().to_string(),
        $expected
      );
    }
  };
}

mod address_state;
mod block;
mod card;
mod classify;
mod detached;
mod element;
mod error;
mod label;
mod options;
mod page;
mod reformatter;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
