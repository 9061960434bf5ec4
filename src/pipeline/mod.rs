//! Article rendering pipeline.
//!
//! - [`RendererBuilder`]: fluent builder, validates the [`RenderConfig`]
//! - [`ArticleRenderer`]: annotates an article and indexes its headings
//!
//! # Example
//!
//! ```
//! use storm_render::{RenderInput, RendererBuilder};
//! use storm_types::GenerationState;
//!
//! let renderer = RendererBuilder::new().with_link_style(false).build()?;
//! let rendered = renderer.render(
//!     GenerationState::default(),
//!     RenderInput::new("Intro.\n# Background\nDetails."),
//! )?;
//! assert_eq!(rendered.toc, "  - <a href=\"#background\" class=\"toc\">Background</a>");
//! # Ok::<(), storm_render::RenderError>(())
//! ```

mod builder;
pub mod config;
mod renderer;

pub use builder::RendererBuilder;
pub use config::{RenderConfig, TocMode};
pub use renderer::{ArticleRenderer, RenderInput, RenderedArticle};
