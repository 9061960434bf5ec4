//! Markdown views of the secondary article panels: persona conversations,
//! the reference browser and the outline.

use storm_annotate::{escape_for_render, reference_detail};
use storm_toc::indent_outline;
use storm_types::{CitationMap, PersonaConversation, Role};

pub const NO_REFERENCES: &str = "**No references available**";

/// Renders every persona conversation as a markdown section.
///
/// Each section opens with the persona name as a heading and the persona
/// description as a quote. User turns are bold; all turns have `$` escaped.
/// Personas without a name are titled by their position.
pub fn render_conversations(conversations: &[PersonaConversation]) -> String {
    let mut out = String::new();
    for (i, persona) in conversations.iter().enumerate() {
        if i > 0 {
            out.push_str("\n\n");
        }
        if persona.name.is_empty() {
            out.push_str(&format!("## Persona {}", i + 1));
        } else {
            out.push_str(&format!("## {}", persona.name));
        }
        if !persona.description.is_empty() {
            out.push_str(&format!("\n\n> {}", persona.description));
        }
        for message in &persona.messages {
            let content = escape_for_render(&message.content);
            match message.role {
                Role::User => out.push_str(&format!("\n\n**{content}**")),
                Role::Assistant => out.push_str(&format!("\n\n{content}")),
            }
        }
    }
    out
}

/// Lists the references a reader can pick from, or shows one of them.
pub fn render_references(citations: &CitationMap, index: Option<usize>) -> String {
    if citations.is_empty() {
        return NO_REFERENCES.to_string();
    }
    match index {
        Some(i) => match reference_detail(citations, i) {
            Some(detail) => detail.to_markdown(),
            None => format!("**No reference [{i}]**"),
        },
        None => citations
            .iter()
            .map(|(i, entry)| format!("- reference [{}]: {}", i, escape_for_render(&entry.title)))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Shows an outline as nested text.
pub fn render_outline(outline: &str) -> String {
    indent_outline(outline.trim_end())
}
