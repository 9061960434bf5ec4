use storm_annotate::AnnotateError;
use storm_source::SourceError;
use storm_toc::TocError;
use storm_types::GenerationState;
use thiserror::Error;

/// A comprehensive error type for rendering an article end to end.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Table of contents failed: {0}")]
    Toc(#[from] TocError),

    #[error("Annotation failed: {0}")]
    Annotate(#[from] AnnotateError),

    #[error("Article source failed: {0}")]
    Source(#[from] SourceError),

    #[error("Configuration is invalid: {0}")]
    Config(String),

    #[error("Article is not ready to display (state: {0})")]
    NotReady(GenerationState),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
