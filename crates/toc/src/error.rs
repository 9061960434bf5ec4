use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TocError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
