#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("aborting transform; {found} elements found (limit: {limit})")]
  ElementLimitExceeded { found: usize, limit: usize },
  #[error(
    "empty container cleanup did not converge after {passes} passes (limit: {limit})"
  )]
  InvariantViolation { passes: usize, limit: usize },
  #[error("failed to parse document: {message}")]
  Parse { message: String },
}
