//! A `nom`-based recognizer for markdown heading lines.
use nom::{IResult, Parser, bytes::complete::take_while1};

/// The character that marks a heading line.
pub const HEADING_MARKER: char = '#';

/// A heading line split into its marker run and its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedHeading<'a> {
    /// Number of leading marker characters.
    pub markers: usize,
    /// Heading text with surrounding whitespace removed.
    pub text: &'a str,
}

impl ParsedHeading<'_> {
    /// The marker count as a heading level, saturating at `u8::MAX`.
    pub fn level(&self) -> u8 {
        u8::try_from(self.markers).unwrap_or(u8::MAX)
    }
}

fn markers(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c == HEADING_MARKER).parse(input)
}

/// Parses `line` as a heading: one or more leading markers followed by text.
///
/// Returns `None` for any line that does not start with a marker.
pub fn parse_heading(line: &str) -> Option<ParsedHeading<'_>> {
    let (rest, run) = markers(line).ok()?;
    Some(ParsedHeading {
        markers: run.len(),
        text: rest.trim(),
    })
}

/// Iterates over the heading lines of `text` in document order.
pub fn headings(text: &str) -> impl Iterator<Item = ParsedHeading<'_>> {
    text.lines().filter_map(parse_heading)
}
