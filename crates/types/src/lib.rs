//! Shared data model for rendering STORM articles.
//!
//! Everything here is plain data with serde support, shaped to match the
//! files the research pipeline writes, so the algorithm crates can be fed
//! straight from deserialized JSON.

pub mod citation;
pub mod conversation;
pub mod document;
pub mod ids;
pub mod state;
pub mod tree;

pub use citation::{CitationEntry, CitationMap, CitationSource, SourceInfo};
pub use conversation::{ConversationEntry, DialogueTurn, Message, PersonaConversation, Role};
pub use document::{HeadingEntry, TocEntry};
pub use ids::{AnchorId, ArticleId};
pub use state::{CoStormState, GenerationState, WikiWriteState};
pub use tree::{KnowledgeNode, OutlineNode};
