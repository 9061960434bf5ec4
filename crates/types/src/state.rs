//! Article generation lifecycles.
//!
//! These are driven by the external pipeline; renderers only inspect them to
//! decide whether an article is ready to be displayed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of a one-shot (wiki mode) article.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WikiWriteState {
    #[default]
    #[serde(alias = "not started", alias = "initiated")]
    NotStarted,
    PreWriting,
    FinalWriting,
    Completed,
}

impl WikiWriteState {
    /// The state that follows this one. `Completed` is terminal.
    pub fn advance(self) -> Self {
        match self {
            WikiWriteState::NotStarted => WikiWriteState::PreWriting,
            WikiWriteState::PreWriting => WikiWriteState::FinalWriting,
            WikiWriteState::FinalWriting | WikiWriteState::Completed => WikiWriteState::Completed,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == WikiWriteState::Completed
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WikiWriteState::NotStarted => "not_started",
            WikiWriteState::PreWriting => "pre_writing",
            WikiWriteState::FinalWriting => "final_writing",
            WikiWriteState::Completed => "completed",
        }
    }
}

/// Lifecycle of an interactive (co-storm) session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoStormState {
    #[default]
    NotStarted,
    WarmStart,
    Conversation,
    TakingTurn,
}

impl CoStormState {
    pub fn begin_warm_start(self) -> Option<Self> {
        (self == CoStormState::NotStarted).then_some(CoStormState::WarmStart)
    }

    pub fn warm_start_complete(self) -> Option<Self> {
        (self == CoStormState::WarmStart).then_some(CoStormState::Conversation)
    }

    pub fn begin_turn(self) -> Option<Self> {
        (self == CoStormState::Conversation).then_some(CoStormState::TakingTurn)
    }

    pub fn complete_turn(self) -> Option<Self> {
        (self == CoStormState::TakingTurn).then_some(CoStormState::Conversation)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CoStormState::NotStarted => "not_started",
            CoStormState::WarmStart => "warm_start",
            CoStormState::Conversation => "conversation",
            CoStormState::TakingTurn => "taking_turn",
        }
    }
}

/// The generation state an article is rendered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationState {
    Wiki(WikiWriteState),
    CoStorm(CoStormState),
}

impl GenerationState {
    /// Whether article output exists and may be post-processed.
    ///
    /// A co-storm report is generated on demand between turns, so only the
    /// idle conversation state qualifies.
    pub fn is_displayable(&self) -> bool {
        match self {
            GenerationState::Wiki(state) => state.is_terminal(),
            GenerationState::CoStorm(state) => *state == CoStormState::Conversation,
        }
    }
}

impl Default for GenerationState {
    fn default() -> Self {
        GenerationState::Wiki(WikiWriteState::Completed)
    }
}

impl fmt::Display for GenerationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationState::Wiki(s) => write!(f, "wiki:{}", s.as_str()),
            GenerationState::CoStorm(s) => write!(f, "co-storm:{}", s.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wiki_lifecycle() {
        let mut state = WikiWriteState::default();
        let mut seen = vec![state];
        while !state.is_terminal() {
            state = state.advance();
            seen.push(state);
        }
        assert_eq!(
            seen,
            vec![
                WikiWriteState::NotStarted,
                WikiWriteState::PreWriting,
                WikiWriteState::FinalWriting,
                WikiWriteState::Completed
            ]
        );
        assert_eq!(WikiWriteState::Completed.advance(), WikiWriteState::Completed);
    }

    #[test]
    fn test_wiki_state_accepts_ui_spellings() {
        let s: WikiWriteState = serde_json::from_str("\"not started\"").unwrap();
        assert_eq!(s, WikiWriteState::NotStarted);
        let s: WikiWriteState = serde_json::from_str("\"initiated\"").unwrap();
        assert_eq!(s, WikiWriteState::NotStarted);
        let s: WikiWriteState = serde_json::from_str("\"final_writing\"").unwrap();
        assert_eq!(s, WikiWriteState::FinalWriting);
    }

    #[test]
    fn test_co_storm_transitions() {
        let state = CoStormState::NotStarted;
        let state = state.begin_warm_start().unwrap();
        assert_eq!(state.begin_turn(), None);
        let state = state.warm_start_complete().unwrap();
        let taking = state.begin_turn().unwrap();
        assert_eq!(taking, CoStormState::TakingTurn);
        assert_eq!(taking.begin_turn(), None);
        assert_eq!(taking.complete_turn(), Some(CoStormState::Conversation));
    }

    #[test]
    fn test_displayable_states() {
        assert!(GenerationState::Wiki(WikiWriteState::Completed).is_displayable());
        assert!(!GenerationState::Wiki(WikiWriteState::FinalWriting).is_displayable());
        assert!(GenerationState::CoStorm(CoStormState::Conversation).is_displayable());
        assert!(!GenerationState::CoStorm(CoStormState::TakingTurn).is_displayable());
        assert!(!GenerationState::CoStorm(CoStormState::WarmStart).is_displayable());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            GenerationState::Wiki(WikiWriteState::PreWriting).to_string(),
            "wiki:pre_writing"
        );
    }
}
