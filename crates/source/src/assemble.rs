use crate::ArticleSource;
use crate::error::SourceError;
use crate::layout::{CITATIONS_FILE, CONVERSATION_LOG_FILE, CO_STORM_ARTICLE_FILE, POLISHED_ARTICLE_FILE, RAW_ARTICLE_FILE};
use log::debug;
use serde_json::Value;
use storm_types::{ArticleId, CitationSource};

/// The stored outputs of one article run.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleFiles {
    pub id: ArticleId,
    /// Which article file the text was read from.
    pub article_file: &'static str,
    pub article_text: String,
    pub citations: Option<CitationSource>,
    /// Raw conversation log, parsed later by the annotator.
    pub conversation_log: Option<Value>,
}

/// Collects the article text, citations and conversation log of `id`.
///
/// The polished article is preferred over the raw one. Returns `Ok(None)`
/// when the directory holds neither.
pub fn assemble_article(source: &dyn ArticleSource, id: &ArticleId) -> Result<Option<ArticleFiles>, SourceError> {
    let names = source.file_names(id)?;
    let has = |file: &str| names.iter().any(|n| n == file);

    let article_file = if has(POLISHED_ARTICLE_FILE) {
        POLISHED_ARTICLE_FILE
    } else if has(RAW_ARTICLE_FILE) {
        RAW_ARTICLE_FILE
    } else {
        debug!("No article text in '{}' ({} files)", id, names.len());
        return Ok(None);
    };

    let article_text = source.read_text(id, article_file)?;
    let citations = if has(CITATIONS_FILE) {
        Some(serde_json::from_value(source.read_json(id, CITATIONS_FILE)?)?)
    } else {
        None
    };
    let conversation_log = if has(CONVERSATION_LOG_FILE) {
        Some(source.read_json(id, CONVERSATION_LOG_FILE)?)
    } else {
        None
    };

    debug!(
        "Assembled '{}' from {} (citations: {}, conversation log: {})",
        id,
        article_file,
        citations.is_some(),
        conversation_log.is_some()
    );

    Ok(Some(ArticleFiles {
        id: id.clone(),
        article_file,
        article_text,
        citations,
        conversation_log,
    }))
}

/// Reads the report an interactive session wrote for `id`, if any.
pub fn read_co_storm_report(source: &dyn ArticleSource, id: &ArticleId) -> Result<Option<String>, SourceError> {
    if !source.file_names(id)?.iter().any(|n| n == CO_STORM_ARTICLE_FILE) {
        debug!("No co-storm report in '{}'", id);
        return Ok(None);
    }
    source.read_text(id, CO_STORM_ARTICLE_FILE).map(Some)
}
