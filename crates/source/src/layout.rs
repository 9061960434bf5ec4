//! File names and id rules of the article directory layout.

use crate::error::SourceError;
use storm_types::ArticleId;

pub const RAW_ARTICLE_FILE: &str = "storm_gen_article.txt";
pub const POLISHED_ARTICLE_FILE: &str = "storm_gen_article_polished.txt";
/// Report written by interactive (co-storm) sessions.
pub const CO_STORM_ARTICLE_FILE: &str = "article.txt";
pub const CITATIONS_FILE: &str = "url_to_info.json";
pub const CONVERSATION_LOG_FILE: &str = "conversation_log.json";
pub const OUTLINE_FILE: &str = "storm_gen_outline.txt";
/// The article registry, stored next to the article directories.
pub const REGISTRY_FILE: &str = "articles.json";

/// Article ids longer than this are truncated.
pub const MAX_ID_LEN: usize = 125;

/// Derives the article id (directory name) for a research topic.
///
/// Spaces and `/` become `_` and the result is cut to [`MAX_ID_LEN`]
/// characters. A blank topic is rejected.
pub fn article_id_for_topic(topic: &str) -> Result<ArticleId, SourceError> {
    if topic.trim().is_empty() {
        return Err(SourceError::InvalidTopic("topic must not be empty".to_string()));
    }
    let cleaned: String = topic
        .chars()
        .map(|c| if c == ' ' || c == '/' { '_' } else { c })
        .take(MAX_ID_LEN)
        .collect();
    Ok(ArticleId::from(cleaned))
}

/// Checks that `id` names a single directory entry.
pub fn validate_id(id: &ArticleId) -> Result<(), SourceError> {
    let s = id.as_str();
    if s.is_empty() || s == "." || s == ".." || s.contains(&['/', '\\'][..]) {
        return Err(SourceError::InvalidId(s.to_string()));
    }
    Ok(())
}
