//! Bracketed citation markers (`[3]`) in generated text.

use crate::error::AnnotateError;
use crate::scan::replace_matches;
use itertools::Itertools;
use log::{debug, warn};
use nom::{
    IResult, Parser,
    character::complete::{char, digit1, space0},
    combinator::{opt, recognize},
    multi::many0,
    sequence::delimited,
};
use std::collections::btree_map::Entry;
use storm_types::{CitationEntry, CitationMap, CitationSource};

/// Link target used when a marker has no matching citation.
pub const FALLBACK_TARGET: &str = "#";

// --- Combinators ---

/// `[12]`, yielding the digits.
fn marker(input: &str) -> IResult<&str, &str> {
    delimited(char('['), digit1, char(']')).parse(input)
}

/// `[12]` or a grouped `[1 | 4 | 7]`.
fn marker_group(input: &str) -> IResult<&str, &str> {
    recognize((
        char('['),
        digit1,
        many0((space0, char('|'), space0, digit1)),
        char(']'),
    ))
    .parse(input)
}

/// A pipe artifact left between or around markers.
fn pipe(input: &str) -> IResult<&str, &str> {
    recognize((space0, char('|'))).parse(input)
}

/// A run of adjacent markers with the space before it and any pipe artifacts.
fn citation_run(input: &str) -> IResult<&str, &str> {
    recognize((
        opt(pipe),
        opt(char(' ')),
        marker_group,
        many0((opt(pipe), space0, marker_group)),
        opt(pipe),
    ))
    .parse(input)
}

// --- Public API ---

/// Replaces every `[i]` with `[[i]](url)`, where `url` comes from `citations`
/// or is [`FALLBACK_TARGET`] when index `i` is unknown.
pub fn link_citations(text: &str, citations: &CitationMap) -> String {
    replace_matches(text, &['['], marker, |digits| {
        let url = digits
            .parse::<usize>()
            .ok()
            .and_then(|i| citations.get(&i))
            .map_or(FALLBACK_TARGET, |c| c.url.as_str());
        format!("[[{digits}]]({url})")
    })
}

/// Strips citation markers, grouped markers and the pipe artifacts next to
/// them. Other bracketed text and unrelated pipes are left alone.
pub fn remove_citations(text: &str) -> String {
    replace_matches(text, &['[', ' ', '|'], citation_run, |_| String::new())
}

/// Builds the index -> citation map from a URL-keyed citation source.
///
/// Fails with [`AnnotateError::MissingData`] when an indexed URL has no info.
/// When several URLs share an index, the lexicographically smallest URL
/// keeps it, matching the order [`build_bibliography`](crate::build_bibliography) lists them in.
pub fn build_citation_map(source: &CitationSource) -> Result<CitationMap, AnnotateError> {
    let mut map = CitationMap::new();
    let ordered = source
        .url_to_unified_index
        .iter()
        .sorted_by(|(url_a, a), (url_b, b)| a.cmp(b).then_with(|| url_a.cmp(url_b)));
    for (url, &index) in ordered {
        let info = source
            .url_to_info
            .get(url)
            .ok_or_else(|| AnnotateError::MissingData(format!("no info for cited url '{url}' [{index}]")))?;
        match map.entry(index) {
            Entry::Vacant(slot) => {
                slot.insert(CitationEntry::new(url.clone(), info.title.clone()).with_snippets(info.snippets.clone()));
            }
            Entry::Occupied(kept) => {
                warn!("Citation index {} is used by more than one url, keeping '{}' over '{}'", index, kept.get().url, url);
            }
        }
    }

    if let Some((&last, _)) = map.last_key_value() {
        if last != map.len() || !map.contains_key(&1) {
            warn!("Citation indices are not contiguous: {} entries, highest index {}", map.len(), last);
        }
    }
    debug!("Built citation map with {} entries", map.len());
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use storm_types::SourceInfo;

    fn map(urls: &[(usize, &str)]) -> CitationMap {
        urls.iter()
            .map(|&(i, url)| (i, CitationEntry::new(url, format!("title {i}"))))
            .collect()
    }

    #[test]
    fn test_link_citations() {
        let citations = map(&[(1, "http://a"), (2, "http://b")]);
        assert_eq!(
            link_citations("See [1] and [2].", &citations),
            "See [[1]](http://a) and [[2]](http://b)."
        );
    }

    #[test]
    fn test_link_repeated_and_unknown_indices() {
        let citations = map(&[(1, "http://a")]);
        assert_eq!(
            link_citations("[1][1] then [9]", &citations),
            "[[1]](http://a)[[1]](http://a) then [[9]](#)"
        );
    }

    #[test]
    fn test_link_ignores_non_numeric_brackets() {
        let citations = map(&[(1, "http://a")]);
        let text = "[note] [1a] [ 1] [[1]]";
        assert_eq!(link_citations(text, &citations), "[note] [1a] [ 1] [[[1]](http://a)]");
    }

    #[test]
    fn test_link_overflowing_index_falls_back() {
        let text = "[99999999999999999999999]";
        assert_eq!(
            link_citations(text, &CitationMap::new()),
            "[[99999999999999999999999]](#)"
        );
    }

    #[test]
    fn test_remove_citations() {
        assert_eq!(remove_citations("Hello [1]"), "Hello");
        assert_eq!(remove_citations("Paris [1][2] is big."), "Paris is big.");
        assert_eq!(remove_citations("Paris [1] | [2] is big."), "Paris is big.");
        assert_eq!(remove_citations("Paris [1 | 2] is big."), "Paris is big.");
        assert_eq!(remove_citations("Done. | [3]"), "Done.");
    }

    #[test]
    fn test_remove_citations_keeps_other_brackets_and_pipes() {
        assert_eq!(remove_citations("a | b [see above] c"), "a | b [see above] c");
        assert_eq!(remove_citations("array[i] = x[2a]"), "array[i] = x[2a]");
    }

    #[test]
    fn test_build_citation_map() {
        let mut source = CitationSource::default();
        source.insert(
            "http://b",
            2,
            SourceInfo {
                title: "B".into(),
                snippets: vec!["s".into()],
            },
        );
        source.insert("http://a", 1, SourceInfo { title: "A".into(), snippets: vec![] });

        let map = build_citation_map(&source).unwrap();
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(map[&2].snippets, vec!["s"]);
        assert_eq!(map[&1].url, "http://a");
    }

    #[test]
    fn test_shared_index_resolves_the_same_way_every_time() {
        let raw = serde_json::json!({
            "url_to_unified_index": { "http://c": 1, "http://a": 1, "http://d": 1, "http://b": 1 },
            "url_to_info": {
                "http://a": { "title": "A" },
                "http://b": { "title": "B" },
                "http://c": { "title": "C" },
                "http://d": { "title": "D" }
            }
        });

        for _ in 0..64 {
            // Every deserialization seeds new hash maps with their own iteration order.
            let source: CitationSource = serde_json::from_value(raw.clone()).unwrap();
            let map = build_citation_map(&source).unwrap();
            assert_eq!(map.len(), 1);
            assert_eq!(link_citations("x [1]", &map), "x [[1]](http://a)");
        }
    }

    #[test]
    fn test_build_citation_map_missing_info() {
        let mut source = CitationSource::default();
        source.url_to_unified_index.insert("http://a".into(), 1);
        let err = build_citation_map(&source).unwrap_err();
        assert!(matches!(err, AnnotateError::MissingData(_)));
    }
}
