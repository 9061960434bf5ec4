use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnnotateError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Missing data: {0}")]
    MissingData(String),

    #[error("Malformed conversation log: {0}")]
    MalformedLog(String),
}
