pub mod fixtures;

use std::path::Path;
use storm_source::layout::{CITATIONS_FILE, CONVERSATION_LOG_FILE, RAW_ARTICLE_FILE};
use storm_source::{ArticleRecord, ArticleSource, FilesystemArticleSource};
use storm_types::{ArticleId, CitationSource};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn sample_citations() -> CitationSource {
    serde_json::from_value(fixtures::citations_json()).expect("fixture citations are valid")
}

/// Writes a complete article run under `root` and registers it.
pub fn store_sample_article(root: &Path, id: &str) -> Result<FilesystemArticleSource, Box<dyn std::error::Error>> {
    let source = FilesystemArticleSource::new(root);
    let article_id = ArticleId::from(id);
    source.write_text(&article_id, RAW_ARTICLE_FILE, fixtures::RAW_ARTICLE)?;
    source.write_json(&article_id, CITATIONS_FILE, &fixtures::citations_json())?;
    source.write_json(&article_id, CONVERSATION_LOG_FILE, &fixtures::conversation_log_json())?;
    source.register_article(ArticleRecord::now(article_id, id.replace('_', " ")))?;
    Ok(source)
}
