/// The lead-in the pipeline echoes before the actual article content.
pub const PREAMBLE_MARKER: &str = "Write the lead section:";

/// [`strip_preamble_with`] using [`PREAMBLE_MARKER`].
pub fn strip_preamble(text: &str) -> String {
    strip_preamble_with(text, PREAMBLE_MARKER)
}

/// Drops everything up to and including the last occurrence of `marker`
/// (plus the whitespace after it), then drops a leading top-level heading.
///
/// The leading heading is the article title and is dropped, with one
/// exception: when the next line is itself a top-level heading, the first
/// one is kept. `"# Paris\n# History\nbody"` therefore comes back
/// unchanged and its title stays visible. In exchange a second pass never
/// removes a real section, so applying this twice gives the same result as
/// applying it once.
pub fn strip_preamble_with(text: &str, marker: &str) -> String {
    let body = match text.rfind(marker) {
        Some(pos) if !marker.is_empty() => text[pos + marker.len()..].trim_start(),
        _ => text,
    };
    drop_title_line(body).to_string()
}

fn is_top_level_heading(line: &str) -> bool {
    line.starts_with('#') && !line.starts_with("##")
}

fn drop_title_line(text: &str) -> &str {
    let (first, rest) = match text.split_once('\n') {
        Some((first, rest)) => (first, rest),
        None => (text, ""),
    };
    if !is_top_level_heading(first) {
        return text;
    }
    if rest.lines().next().is_some_and(is_top_level_heading) {
        return text;
    }
    rest
}
