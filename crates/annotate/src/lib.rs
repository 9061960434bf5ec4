//! Citation-aware post-processing of generated articles.
//!
//! Turns raw pipeline output plus a citation index into text that a markdown
//! renderer can display as is:
//!
//! 1. [`strip_preamble`] removes the echoed prompt and the title line
//! 2. [`link_citations`] turns `[i]` markers into links to the cited URL
//! 3. [`escape_for_render`] escapes formula delimiters, always last
//!
//! It also builds the references section ([`build_bibliography`]) and
//! normalizes conversation logs ([`parse_conversation_log`]).
//!
//! Every operation is a pure function of its inputs.

pub mod bibliography;
pub mod citation;
pub mod conversation;
pub mod error;
pub mod escape;
pub mod preamble;
pub mod references;
mod scan;

pub use bibliography::{REFERENCES_HEADING, ReferenceDetail, build_bibliography, reference_detail};
pub use citation::{FALLBACK_TARGET, build_citation_map, link_citations, remove_citations};
pub use conversation::{parse_conversation_json, parse_conversation_log, parse_conversation_value, split_perspective};
pub use error::AnnotateError;
pub use escape::{FORMULA_DELIMITER, escape_for_render};
pub use preamble::{PREAMBLE_MARKER, strip_preamble, strip_preamble_with};
pub use references::normalize_reference_lines;

use storm_types::{CitationMap, CitationSource, ConversationEntry, PersonaConversation};

/// Applies the article post-processing steps with a fixed configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleAnnotator {
    preamble_marker: String,
    escape: bool,
}

impl Default for ArticleAnnotator {
    fn default() -> Self {
        Self {
            preamble_marker: PREAMBLE_MARKER.to_string(),
            escape: true,
        }
    }
}

impl ArticleAnnotator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `marker` instead of [`PREAMBLE_MARKER`]. An empty marker is
    /// rejected with [`AnnotateError::InvalidInput`].
    pub fn with_preamble_marker(mut self, marker: impl Into<String>) -> Result<Self, AnnotateError> {
        let marker = marker.into();
        if marker.is_empty() {
            return Err(AnnotateError::InvalidInput("preamble marker must not be empty".to_string()));
        }
        self.preamble_marker = marker;
        Ok(self)
    }

    /// Disables the final escaping step, for renderers without formula support.
    pub fn with_escaping(mut self, escape: bool) -> Self {
        self.escape = escape;
        self
    }

    pub fn strip_preamble(&self, text: &str) -> String {
        strip_preamble_with(text, &self.preamble_marker)
    }

    pub fn link_citations(&self, text: &str, citations: &CitationMap) -> String {
        link_citations(text, citations)
    }

    pub fn escape_for_render(&self, text: &str) -> String {
        if self.escape { escape_for_render(text) } else { text.to_string() }
    }

    pub fn build_bibliography(&self, source: &CitationSource) -> Result<String, AnnotateError> {
        build_bibliography(source)
    }

    pub fn parse_conversation_log(&self, entries: &[ConversationEntry]) -> Vec<PersonaConversation> {
        parse_conversation_log(entries)
    }

    /// Strip, link, then escape.
    pub fn annotate(&self, text: &str, citations: &CitationMap) -> String {
        let body = self.strip_preamble(text);
        let linked = self.link_citations(&body, citations);
        self.escape_for_render(&linked)
    }
}
