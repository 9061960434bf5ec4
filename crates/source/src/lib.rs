//! Article storage for the rendering layer.
//!
//! The research pipeline writes one directory per article, named by the
//! article id, holding text and JSON files with fixed names (see
//! [`layout`]). This crate reads and writes that layout through the
//! [`ArticleSource`] trait.
//!
//! ## Available Sources
//!
//! - `FilesystemArticleSource`: the on-disk layout under a root directory
//! - `InMemoryArticleSource`: pre-populated in memory
//!
//! ## Example
//!
//! ```
//! use storm_source::{InMemoryArticleSource, assemble_article};
//! use storm_types::ArticleId;
//!
//! let source = InMemoryArticleSource::new()
//!     .with_file("Paris", "storm_gen_article.txt", "# Paris\nCapital of France.")
//!     .unwrap();
//! let article = assemble_article(&source, &ArticleId::from("Paris")).unwrap().unwrap();
//! assert!(article.citations.is_none());
//! ```

pub mod assemble;
pub mod error;
pub mod filesystem;
pub mod layout;
pub mod memory;
pub mod record;

pub use assemble::{ArticleFiles, assemble_article, read_co_storm_report};
pub use error::SourceError;
pub use filesystem::FilesystemArticleSource;
pub use layout::article_id_for_topic;
pub use memory::InMemoryArticleSource;
pub use record::{ArticleRecord, parse_iso_date};

use serde_json::Value;
use std::fmt::Debug;
use storm_types::ArticleId;

/// Read/write access to stored articles.
///
/// Files are addressed by article id and file name. Writes take `&self` so a
/// source can be shared; implementations handle their own synchronization.
pub trait ArticleSource: Send + Sync + Debug {
    /// Names of the files stored for `id`, sorted.
    ///
    /// Fails with `SourceError::NotFound` when the article does not exist.
    fn file_names(&self, id: &ArticleId) -> Result<Vec<String>, SourceError>;

    fn read_text(&self, id: &ArticleId, file: &str) -> Result<String, SourceError>;

    fn read_json(&self, id: &ArticleId, file: &str) -> Result<Value, SourceError> {
        Ok(serde_json::from_str(&self.read_text(id, file)?)?)
    }

    fn write_text(&self, id: &ArticleId, file: &str, contents: &str) -> Result<(), SourceError>;

    fn write_json(&self, id: &ArticleId, file: &str, value: &Value) -> Result<(), SourceError> {
        self.write_text(id, file, &serde_json::to_string_pretty(value)?)
    }

    /// All registered articles, in registry order. Empty when there is no registry.
    fn list_articles(&self) -> Result<Vec<ArticleRecord>, SourceError>;

    /// Adds `record` to the registry, replacing any record with the same id.
    fn register_article(&self, record: ArticleRecord) -> Result<(), SourceError>;

    /// Returns a human-readable name for this source (for logging/debugging).
    fn name(&self) -> &'static str;
}
