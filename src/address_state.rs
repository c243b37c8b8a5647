use super::*;

/// Whether the walk over the content wrapper is currently inside an address
/// run, i.e. past an "Address" heading and before a phone, fax or note
/// paragraph.
///
/// | route          | next state |
/// |----------------|------------|
/// | AddressHeading | Inside     |
/// | AddressLine    | Inside     |
/// | Contact        | Outside    |
/// | Note           | Outside    |
/// | Meta, Ignore   | unchanged  |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum AddressState {
  Inside,
  #[default]
  Outside,
}

impl AddressState {
  pub(crate) fn is_inside(self) -> bool {
    self == Self::Inside
  }

  pub(crate) fn next(self, route: Route) -> Self {
    match route {
      Route::AddressHeading | Route::AddressLine => Self::Inside,
      Route::Contact | Route::Note => Self::Outside,
      Route::Meta | Route::Ignore => self,
    }
  }
}
