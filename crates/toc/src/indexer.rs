//! Builds an ordered list of headings from markdown or from a knowledge tree.

use crate::error::TocError;
use crate::parser::parse_heading;
use crate::style::TocStyle;
use log::{debug, trace};
use serde_json::Value;
use storm_types::{HeadingEntry, KnowledgeNode, TocEntry};

/// A first line equal to this is a document-level artifact, not a section.
pub const SUMMARY_MARKER: &str = "# summary";

/// Knowledge trees are modeled down to h3; deeper descendants are ignored.
pub const MAX_TREE_DEPTH: u8 = 3;

/// Style block that removes the underline from `class="toc"` links.
pub const TOC_LINK_STYLE: &str = r#"<style>
a.toc {
    color: inherit;
    text-decoration: none; /* no underline */
}
</style>"#;

/// Extracts headings into a [`TableOfContents`] rendered with a fixed style.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadingIndexer {
    style: TocStyle,
}

impl HeadingIndexer {
    /// An indexer producing anchored TOCs ([`TocStyle::ANCHORED`]).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(style: TocStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> TocStyle {
        self.style
    }

    /// Indexes every line of `text` that starts with a heading marker.
    ///
    /// With a `section_label`, every heading is pushed one level down and the
    /// label is inserted as a level-1 heading in front, so the document can be
    /// listed as a subsection of a larger TOC.
    pub fn build_from_markdown(&self, text: &str, section_label: Option<&str>) -> TableOfContents {
        let mut lines = text.lines().peekable();
        if lines.peek() == Some(&SUMMARY_MARKER) {
            lines.next();
        }

        let mut entries: Vec<HeadingEntry> = lines
            .filter_map(parse_heading)
            .map(|h| HeadingEntry::new(h.level(), h.text))
            .collect();

        if let Some(label) = section_label {
            for entry in &mut entries {
                entry.level = entry.level.saturating_add(1);
            }
            entries.insert(0, HeadingEntry::new(1, label));
        }

        debug!("Indexed {} headings from markdown", entries.len());
        TableOfContents::new(entries, self.style)
    }

    /// Indexes a knowledge tree depth-first in child order.
    ///
    /// The root's direct children become level-1 entries, their children
    /// level 2 and grandchildren level 3. Anything deeper is skipped.
    /// A node without a name, or with a children field that is not a list,
    /// is [`TocError::InvalidInput`].
    pub fn build_from_tree<N: KnowledgeNode>(&self, root: &N) -> Result<TableOfContents, TocError> {
        if root.has_malformed_children() {
            return Err(TocError::InvalidInput("knowledge tree root has malformed children".to_string()));
        }
        let mut entries = Vec::new();
        let mut stack: Vec<(&N, u8)> = root.children().iter().rev().map(|c| (c, 1)).collect();

        while let Some((node, level)) = stack.pop() {
            let name = node.name().ok_or_else(|| {
                TocError::InvalidInput(format!(
                    "knowledge node #{} at level {} has no name",
                    entries.len() + 1,
                    level
                ))
            })?;
            if node.has_malformed_children() {
                return Err(TocError::InvalidInput(format!("knowledge node '{name}' has malformed children")));
            }
            entries.push(HeadingEntry::new(level, name));

            let children = node.children();
            if level < MAX_TREE_DEPTH {
                stack.extend(children.iter().rev().map(|c| (c, level + 1)));
            } else if !children.is_empty() {
                trace!("Skipping {} nodes below '{}' (deeper than h{})", children.len(), name, MAX_TREE_DEPTH);
            }
        }

        debug!("Indexed {} headings from knowledge tree", entries.len());
        Ok(TableOfContents::new(entries, self.style))
    }

    /// Indexes a serialized knowledge tree (`{"name": .., "children": [..]}`).
    pub fn build_from_value(&self, root: &Value) -> Result<TableOfContents, TocError> {
        if !root.is_object() {
            return Err(TocError::InvalidInput(format!(
                "knowledge tree root must be an object, got {}",
                value_kind(root)
            )));
        }
        self.build_from_tree(root)
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// An ordered list of headings plus the style to render it with.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableOfContents {
    entries: Vec<HeadingEntry>,
    style: TocStyle,
}

impl TableOfContents {
    pub fn new(entries: Vec<HeadingEntry>, style: TocStyle) -> Self {
        Self { entries, style }
    }

    pub fn entries(&self) -> &[HeadingEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries paired with the anchor each one links to.
    pub fn toc_entries(&self) -> Vec<TocEntry> {
        self.entries
            .iter()
            .map(|e| TocEntry {
                level: e.level,
                text: e.title.clone(),
                target_id: self.style.slug.anchor(&e.title),
            })
            .collect()
    }

    /// Renders an indented bullet list, one `class="toc"` link per entry.
    ///
    /// Indentation is two spaces per depth step, so skipped levels indent
    /// by level rather than by nesting.
    pub fn render_markdown(&self) -> String {
        self.toc_entries()
            .iter()
            .map(|e| {
                format!(
                    "{}- <a href=\"{}\" class=\"toc\">{}</a>",
                    self.style.indent(e.level, 2),
                    e.target_id.href(),
                    e.text
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
