//! Heading extraction and table-of-contents rendering.
//!
//! ## Key Abstractions
//!
//! - **`HeadingIndexer`**: builds a [`TableOfContents`] from markdown text or
//!   from a knowledge tree
//! - **`TocStyle`**: pairs a [`SlugStrategy`] with a [`LevelConvention`];
//!   `ANCHORED` and `PLAIN` are the two conventions in use and are never mixed
//! - **line renderers**: plain markdown links, HTML list, anchor tagging
//!
//! ## Example
//!
//! ```
//! use storm_toc::HeadingIndexer;
//!
//! let toc = HeadingIndexer::new().build_from_markdown("# History\n## Origins", None);
//! assert_eq!(toc.len(), 2);
//! assert!(toc.render_markdown().contains("href=\"#origins\""));
//! ```

pub mod anchor;
pub mod error;
pub mod indexer;
pub mod parser;
pub mod render;
pub mod style;

pub use anchor::SlugStrategy;
pub use error::TocError;
pub use indexer::{HeadingIndexer, MAX_TREE_DEPTH, SUMMARY_MARKER, TOC_LINK_STYLE, TableOfContents};
pub use parser::{ParsedHeading, headings, parse_heading};
pub use render::{
    indent_outline, nest_under_heading, render_html_list, render_plain_links, render_plain_links_labeled,
    render_plain_links_with, tag_headings,
};
pub use style::{LevelConvention, TocStyle};
