//! Knowledge-tree collaborator interface.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A node of a hierarchical knowledge tree: a name plus ordered children.
///
/// `name` is optional at this level so that serialized trees with missing
/// fields can be reported as invalid input instead of panicking.
pub trait KnowledgeNode: Sized {
    fn name(&self) -> Option<&str>;
    fn children(&self) -> &[Self];

    /// Whether the node carries a children field that is not a list.
    fn has_malformed_children(&self) -> bool {
        false
    }
}

/// An owned knowledge-tree node, matching the pipeline's serialized shape.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OutlineNode {
    pub name: String,
    #[serde(default)]
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: OutlineNode) -> Self {
        self.children.push(child);
        self
    }
}

impl KnowledgeNode for OutlineNode {
    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn children(&self) -> &[Self] {
        &self.children
    }
}

impl KnowledgeNode for Value {
    fn name(&self) -> Option<&str> {
        self.get("name").and_then(Value::as_str)
    }

    fn children(&self) -> &[Self] {
        self.get("children")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// A missing or `null` children field means a leaf; anything else that
    /// is not an array is malformed.
    fn has_malformed_children(&self) -> bool {
        self.get("children").is_some_and(|c| !c.is_array() && !c.is_null())
    }
}
