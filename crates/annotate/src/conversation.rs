//! Normalizes the pipeline's conversation log into per-persona message lists.

use crate::citation::remove_citations;
use crate::error::AnnotateError;
use log::debug;
use serde::Deserialize;
use serde_json::Value;
use storm_types::{ConversationEntry, Message, PersonaConversation};

/// Splits a perspective into `(name, description)`.
///
/// `": "` is tried before `"- "`; without either, the name is empty.
pub fn split_perspective(perspective: &str) -> (&str, &str) {
    perspective
        .split_once(": ")
        .or_else(|| perspective.split_once("- "))
        .unwrap_or(("", perspective))
}

/// One persona per entry; each dialogue turn becomes a user message followed
/// by an assistant message with citation markers removed.
pub fn parse_conversation_log(entries: &[ConversationEntry]) -> Vec<PersonaConversation> {
    entries
        .iter()
        .map(|entry| {
            let (name, description) = split_perspective(&entry.perspective);
            let messages = entry
                .dlg_turns
                .iter()
                .flat_map(|turn| {
                    [
                        Message::user(turn.user_utterance.clone()),
                        Message::assistant(remove_citations(&turn.agent_utterance)),
                    ]
                })
                .collect();
            PersonaConversation {
                name: name.to_string(),
                description: description.to_string(),
                messages,
            }
        })
        .collect()
}

/// Parses a conversation log straight from JSON.
///
/// `null` is treated as an empty log. Anything other than an array of
/// `{perspective, dlg_turns: [{user_utterance, agent_utterance}]}` objects is
/// [`AnnotateError::MalformedLog`].
pub fn parse_conversation_value(log: &Value) -> Result<Vec<PersonaConversation>, AnnotateError> {
    let items = match log {
        Value::Null => return Ok(Vec::new()),
        Value::Array(items) => items,
        _ => return Err(AnnotateError::MalformedLog("expected an array of conversations".to_string())),
    };

    let entries = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            ConversationEntry::deserialize(item).map_err(|e| AnnotateError::MalformedLog(format!("entry {i}: {e}")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Parsed conversation log with {} personas", entries.len());
    Ok(parse_conversation_log(&entries))
}

pub fn parse_conversation_json(json: &str) -> Result<Vec<PersonaConversation>, AnnotateError> {
    let value: Value = serde_json::from_str(json).map_err(|e| AnnotateError::MalformedLog(e.to_string()))?;
    parse_conversation_value(&value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use storm_types::Role;

    #[test]
    fn test_split_perspective() {
        assert_eq!(split_perspective("Nurse: cares for patients"), ("Nurse", "cares for patients"));
        assert_eq!(split_perspective("Historian- studies the past"), ("Historian", "studies the past"));
        assert_eq!(
            split_perspective("Basic fact writer - basic facts: history"),
            ("Basic fact writer - basic facts", "history")
        );
        assert_eq!(split_perspective("no delimiter"), ("", "no delimiter"));
    }

    #[test]
    fn test_parse_conversation_value() {
        let log = json!([{
            "perspective": "Nurse: cares for patients",
            "dlg_turns": [{ "user_utterance": "Hi", "agent_utterance": "Hello [1]", "search_queries": [] }]
        }]);

        let parsed = parse_conversation_value(&log).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].name, "Nurse");
        assert_eq!(parsed[0].description, "cares for patients");
        assert_eq!(parsed[0].messages, vec![Message::user("Hi"), Message::assistant("Hello")]);
        assert_eq!(parsed[0].messages[1].role, Role::Assistant);
    }

    #[test]
    fn test_turn_order_preserved() {
        let log = json!([{
            "perspective": "p",
            "dlg_turns": [
                { "user_utterance": "q1", "agent_utterance": "a1" },
                { "user_utterance": "q2", "agent_utterance": "a2 [3]" }
            ]
        }]);
        let parsed = parse_conversation_value(&log).unwrap();
        let contents: Vec<_> = parsed[0].messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["q1", "a1", "q2", "a2"]);
    }

    #[test]
    fn test_empty_and_null_logs() {
        assert!(parse_conversation_value(&json!([])).unwrap().is_empty());
        assert!(parse_conversation_value(&Value::Null).unwrap().is_empty());
    }

    #[test]
    fn test_missing_keys_are_malformed() {
        let log = json!([{ "perspective": "p" }]);
        let err = parse_conversation_value(&log).unwrap_err();
        assert!(matches!(err, AnnotateError::MalformedLog(ref msg) if msg.starts_with("entry 0")));

        assert!(matches!(
            parse_conversation_value(&json!({ "perspective": "p" })),
            Err(AnnotateError::MalformedLog(_))
        ));
        assert!(parse_conversation_json("not json").is_err());
    }
}
