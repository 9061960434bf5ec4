//! Scan-and-replace driven by a `nom` parser.
use nom::{IResult, Parser, error::Error};

/// Replaces every match of `parser` in `text` with the output of `replace`.
///
/// Matching is only attempted at characters listed in `triggers`; text
/// between them is copied as is. A parser that succeeds without consuming
/// input is treated as a non-match.
pub(crate) fn replace_matches<'a, O, P, F>(text: &'a str, triggers: &[char], mut parser: P, mut replace: F) -> String
where
    P: Parser<&'a str, Output = O, Error = Error<&'a str>>,
    F: FnMut(O) -> String,
{
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while !rest.is_empty() {
        let skip = rest.find(|c: char| triggers.contains(&c)).unwrap_or(rest.len());
        out.push_str(&rest[..skip]);
        rest = &rest[skip..];
        if rest.is_empty() {
            break;
        }

        let attempt: IResult<&'a str, O> = parser.parse(rest);
        match attempt {
            Ok((remaining, value)) if remaining.len() < rest.len() => {
                out.push_str(&replace(value));
                rest = remaining;
            }
            _ => {
                let mut chars = rest.chars();
                if let Some(c) = chars.next() {
                    out.push(c);
                }
                rest = chars.as_str();
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use nom::bytes::complete::tag;

    #[test]
    fn test_replaces_all_matches() {
        let out = replace_matches("a-b-c", &['-'], tag("-"), |_| "+".to_string());
        assert_eq!(out, "a+b+c");
    }

    #[test]
    fn test_multibyte_text_is_preserved() {
        let out = replace_matches("é-ü-", &['-', 'é'], tag("-"), |_| "_".to_string());
        assert_eq!(out, "é_ü_");
    }
}
