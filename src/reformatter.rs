use super::*;

const PHONE_LINK_SELECTOR: &str = "a[href^=\"tel:\"]";

/// Rewrites authored location blocks into the fixed card layout.
#[derive(Debug, Clone, Default)]
pub struct Reformatter {
  options: ReformatOptions,
}

impl Reformatter {
  /// Extracts the card of every block on the page without rewriting it.
  pub fn cards(&self, html: &str) -> Result<Vec<LocationCard>> {
    let page = Page::parse(html);

    Ok(
      page
        .blocks(&self.options.block_selector)?
        .iter()
        .filter_map(|block| self.reformat(block))
        .collect(),
    )
  }

  fn copy(&self, element: &Element<'_>, route: Route) -> String {
    match route {
      Route::AddressHeading => {
        let copy = DetachedCopy::of(element.node());
        copy.relabel_root(&self.options.class(Label::SectionHeading));
        copy.html()
      }
      Route::Contact => {
        let copy = DetachedCopy::of(element.node());

        if !copy.relabel_descendant(
          PHONE_LINK_SELECTOR,
          &self.options.class(Label::PhoneLink),
        ) {
          trace!("contact paragraph has no telephone link");
        }

        copy.html()
      }
      _ => element.html(),
    }
  }

  #[must_use]
  pub fn new(options: ReformatOptions) -> Self {
    Self { options }
  }

  #[must_use]
  pub fn options(&self) -> &ReformatOptions {
    &self.options
  }

  /// Rewrites `block` in place and returns the card it was rewritten into.
  ///
  /// Returns `None`, leaving the block untouched, when it has no content
  /// wrapper (`block > div > div`) or already holds a rendered container, so
  /// a second call is a no-op.
  pub fn reformat(&self, block: &NodeRef<'_>) -> Option<LocationCard> {
    let block = Block::new(block);

    if block.is_reformatted(&self.options.class(Label::Container)) {
      debug!("block is already reformatted, leaving it unchanged");
      return None;
    }

    let Some(wrapper) = block.wrapper() else {
      debug!("block has no content wrapper, leaving it unchanged");
      return None;
    };

    let mut card = LocationCard::default();

    if let Some(heading) = block.title_heading() {
      heading.set_attr("class", &self.options.class(Label::Heading));
      card.heading = Some(heading.html().to_string());
    }

    let mut state = AddressState::default();

    for child in wrapper.children().iter().filter(|child| child.is_element()) {
      let element = Element::new(child);

      let route = element.candidate().route(state);

      debug!(tag = element.tag(), ?route, ?state, "routed block child");

      if route != Route::Ignore {
        card.push(route, self.copy(&element, route));
      }

      state = state.next(route);
    }

    block.replace_content(&card.render(&self.options));

    Some(card)
  }

  /// Rewrites every block on the page and returns the page's HTML.
  pub fn reformat_html(&self, html: &str) -> Result<String> {
    let page = Page::parse(html);

    let blocks = page.blocks(&self.options.block_selector)?;

    let rewritten = blocks
      .iter()
      .filter(|block| self.reformat(block).is_some())
      .count();

    debug!(blocks = blocks.len(), rewritten, "reformatted page");

    Ok(page.html())
  }
}
