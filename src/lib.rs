//! Display-ready rendering of STORM research articles.
//!
//! Composes the heading indexer (`storm-toc`) and the article annotator
//! (`storm-annotate`) into an [`ArticleRenderer`], reads stored runs through
//! `storm-source`, and renders the secondary panels in [`view`].

pub mod error;
pub mod pipeline;
pub mod view;

pub use error::RenderError;
pub use pipeline::{ArticleRenderer, RenderConfig, RenderInput, RenderedArticle, RendererBuilder, TocMode};
pub use view::{render_conversations, render_outline, render_references};
