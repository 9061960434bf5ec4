use crate::ids::AnchorId;
use serde::{Deserialize, Serialize};

/// A heading found in a document, in document order.
///
/// `level` reflects the source markup (1 = `#`, 2 = `##`, ...). No nesting
/// constraint is enforced: a level-3 entry may directly follow a level-1 one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingEntry {
    /// Heading level, always >= 1.
    pub level: u8,
    /// The heading text without markers or surrounding whitespace.
    pub title: String,
}

impl HeadingEntry {
    pub fn new(level: u8, title: impl Into<String>) -> Self {
        Self {
            level: level.max(1),
            title: title.into(),
        }
    }
}

/// An entry in a rendered table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    /// Heading level (1 = h1, 2 = h2, etc.)
    pub level: u8,
    /// The text content of the heading.
    pub text: String,
    /// The anchor ID to link to this heading.
    pub target_id: AnchorId,
}
