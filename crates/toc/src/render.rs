//! TOC renderers that work directly on heading lines rather than on a
//! [`TableOfContents`](crate::TableOfContents).

use crate::parser::{HEADING_MARKER, parse_heading};
use crate::anchor::SlugStrategy;
use crate::style::{LevelConvention, TocStyle};

/// Pushes every heading of `text` one level down and prepends `label` as a
/// level-1 heading.
pub fn nest_under_heading(text: &str, label: &str) -> String {
    let mut out = format!("{HEADING_MARKER} {label}");
    for line in text.lines() {
        out.push('\n');
        if line.starts_with(HEADING_MARKER) {
            out.push(HEADING_MARKER);
        }
        out.push_str(line);
    }
    out
}

/// Emits `- [title](#slug)` for every heading line, using [`TocStyle::PLAIN`].
pub fn render_plain_links(markdown: &str) -> String {
    render_plain_links_with(markdown, TocStyle::PLAIN)
}

/// Like [`render_plain_links`], with the document nested under `label`.
pub fn render_plain_links_labeled(markdown: &str, label: &str) -> String {
    render_plain_links(&nest_under_heading(markdown, label))
}

pub fn render_plain_links_with(markdown: &str, style: TocStyle) -> String {
    markdown
        .lines()
        .filter_map(parse_heading)
        .map(|h| {
            format!(
                "{}- [{}](#{})",
                style.indent(h.level(), 2),
                h.text,
                style.slug.slugify(h.text)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders headings as an HTML list, indented 20px per level below the first.
pub fn render_html_list(markdown: &str) -> String {
    let items: String = markdown
        .lines()
        .filter_map(parse_heading)
        .map(|h| {
            format!(
                "<li style='margin-left: {}px;'><a href='#{}'>{}</a></li>",
                20 * LevelConvention::MarkerCountMinusOne.depth(h.level()),
                SlugStrategy::Minimal.slugify(h.text),
                h.text
            )
        })
        .collect();
    format!("<ul>{items}</ul>")
}

/// Appends an inline anchor with the `slug` id to every heading line.
///
/// Other lines, including line endings, are left exactly as they are.
/// Headings whose slug is empty are left untagged.
pub fn tag_headings(text: &str, slug: SlugStrategy) -> String {
    text.split('\n')
        .map(|line| match parse_heading(line) {
            Some(h) => {
                let id = slug.slugify(h.text);
                if id.is_empty() {
                    line.to_string()
                } else {
                    let (content, ending) = match line.strip_suffix('\r') {
                        Some(content) => (content, "\r"),
                        None => (line, ""),
                    };
                    format!("{} <a id=\"{}\"></a>{}", content.trim_end(), id, ending)
                }
            }
            None => line.to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Indents each line by four spaces per heading level below the first.
///
/// Used to show an outline as nested text. The output starts with an empty line.
pub fn indent_outline(text: &str) -> String {
    let mut out = String::new();
    for line in text.split('\n') {
        let markers = line.chars().take_while(|c| *c == HEADING_MARKER).count();
        out.push('\n');
        out.push_str(&" ".repeat(4 * markers.saturating_sub(1)));
        out.push_str(line);
    }
    out
}
