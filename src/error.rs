#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("invalid selector: {0}")]
  InvalidSelector(String),
}
