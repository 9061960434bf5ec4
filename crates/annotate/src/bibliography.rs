//! The references section and per-citation details.

use crate::error::AnnotateError;
use crate::escape::escape_for_render;
use itertools::Itertools;
use serde::Serialize;
use storm_types::{CitationMap, CitationSource};

pub const REFERENCES_HEADING: &str = "# References";

/// Renders `[index]: [title](url)` per cited URL in ascending index order,
/// separated by blank lines, under a single "References" heading.
///
/// Fails with [`AnnotateError::MissingData`] when an indexed URL has no info.
pub fn build_bibliography(source: &CitationSource) -> Result<String, AnnotateError> {
    let lines: Vec<String> = source
        .url_to_unified_index
        .iter()
        .sorted_by(|(url_a, a), (url_b, b)| a.cmp(b).then_with(|| url_a.cmp(url_b)))
        .map(|(url, index)| -> Result<String, AnnotateError> {
            let info = source
                .url_to_info
                .get(url)
                .ok_or_else(|| AnnotateError::MissingData(format!("no info for cited url '{url}' [{index}]")))?;
            Ok(format!("[{}]: [{}]({})", index, info.title, url))
        })
        .collect::<Result<_, AnnotateError>>()?;

    Ok(format!("{}\n\n{}", REFERENCES_HEADING, lines.join("\n\n")))
}

/// One citation prepared for the reference browser, with `$` escaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceDetail {
    pub index: usize,
    pub title: String,
    pub url: String,
    /// Snippets joined by blank lines.
    pub highlights: String,
}

pub fn reference_detail(citations: &CitationMap, index: usize) -> Option<ReferenceDetail> {
    let entry = citations.get(&index)?;
    Some(ReferenceDetail {
        index,
        title: escape_for_render(&entry.title),
        url: entry.url.clone(),
        highlights: escape_for_render(&entry.snippets.join("\n\n")),
    })
}

impl ReferenceDetail {
    pub fn to_markdown(&self) -> String {
        format!(
            "**Title:** {}\n\n**Url:** {}\n\n**Highlights:**\n\n {}",
            self.title, self.url, self.highlights
        )
    }
}
