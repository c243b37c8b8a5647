use super::*;

/// The fixed class names page styling keys on, before the configured prefix
/// is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
  Address,
  Contact,
  Container,
  Heading,
  Meta,
  Notes,
  PhoneLink,
  SectionHeading,
}

impl Label {
  #[must_use]
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Address => "address",
      Self::Contact => "contact",
      Self::Container => "container",
      Self::Heading => "heading",
      Self::Meta => "meta",
      Self::Notes => "notes",
      Self::PhoneLink => "phone-link",
      Self::SectionHeading => "section-heading",
    }
  }
}

impl Display for Label {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
