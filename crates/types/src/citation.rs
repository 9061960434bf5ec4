//! Citation data as produced by the research pipeline (`url_to_info.json`).

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// One cited source, keyed in a [`CitationMap`] by its 1-based index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationEntry {
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub snippets: Vec<String>,
}

impl CitationEntry {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            snippets: Vec::new(),
        }
    }

    pub fn with_snippets(mut self, snippets: Vec<String>) -> Self {
        self.snippets = snippets;
        self
    }
}

/// Citation index -> cited source. Ordered so iteration follows index order.
pub type CitationMap = BTreeMap<usize, CitationEntry>;

/// Title and highlighted snippets for one URL.
///
/// The pipeline writes more fields than these (description, meta, ...);
/// unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SourceInfo {
    pub title: String,
    #[serde(default)]
    pub snippets: Vec<String>,
}

/// The raw citation source: a URL -> index map plus a parallel URL -> info map.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CitationSource {
    #[serde(default)]
    pub url_to_unified_index: HashMap<String, usize>,
    #[serde(default)]
    pub url_to_info: HashMap<String, SourceInfo>,
}

impl CitationSource {
    pub fn is_empty(&self) -> bool {
        self.url_to_unified_index.is_empty()
    }

    /// Registers a source under `index`.
    pub fn insert(&mut self, url: impl Into<String>, index: usize, info: SourceInfo) {
        let url = url.into();
        self.url_to_unified_index.insert(url.clone(), index);
        self.url_to_info.insert(url, info);
    }
}
