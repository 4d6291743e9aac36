//! Conversation state machine — tracks which stage the session is in.

use serde::{Deserialize, Serialize};

use super::profile::CandidateProfile;

/// The stages of the screening conversation.
///
/// Progresses linearly: Greeting → InfoCollection → TechQuestions → Closing.
/// There are no cycles; a session only moves forward (or resets entirely).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Greeting,
    InfoCollection,
    TechQuestions,
    Closing,
}

impl Stage {
    /// Check if a transition from `self` to `target` is valid.
    pub fn can_transition_to(&self, target: Stage) -> bool {
        use Stage::*;
        matches!(
            (self, target),
            (Greeting, InfoCollection) | (InfoCollection, TechQuestions) | (TechQuestions, Closing)
        )
    }

    /// Whether this stage is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Closing)
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::Greeting
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Greeting => "greeting",
            Self::InfoCollection => "info_collection",
            Self::TechQuestions => "tech_questions",
            Self::Closing => "closing",
        };
        write!(f, "{s}")
    }
}

/// Holds the state of the ongoing conversation.
///
/// Created once per session; the host keeps it alive for the session's
/// duration and discards it afterward.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversationState {
    pub stage: Stage,
    pub candidate: CandidateProfile,
    pub exit_flag: bool,
}

impl ConversationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the session is over and further input should be ignored.
    pub fn is_session_over(&self) -> bool {
        self.exit_flag
    }

    /// Reset the conversation to its initial values.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_transitions() {
        use Stage::*;
        let transitions = [
            (Greeting, InfoCollection),
            (InfoCollection, TechQuestions),
            (TechQuestions, Closing),
        ];
        for (from, to) in transitions {
            assert!(from.can_transition_to(to), "{from} should transition to {to}");
        }
    }

    #[test]
    fn invalid_transitions() {
        use Stage::*;
        // Skip stages
        assert!(!Greeting.can_transition_to(TechQuestions));
        assert!(!Greeting.can_transition_to(Closing));
        // Go backward
        assert!(!TechQuestions.can_transition_to(InfoCollection));
        // Terminal
        assert!(!Closing.can_transition_to(Greeting));
        // Self-transition
        assert!(!InfoCollection.can_transition_to(InfoCollection));
    }

    #[test]
    fn is_terminal() {
        assert!(Stage::Closing.is_terminal());
        assert!(!Stage::Greeting.is_terminal());
        assert!(!Stage::TechQuestions.is_terminal());
    }

    #[test]
    fn new_session_starts_at_greeting() {
        let state = ConversationState::new();
        assert_eq!(state.stage, Stage::Greeting);
        assert!(!state.exit_flag);
        assert!(!state.is_session_over());
        assert!(state.candidate.next_missing_field().is_some());
    }

    #[test]
    fn reset_restores_initial_values() {
        let mut state = ConversationState::new();
        state.stage = Stage::Closing;
        state.exit_flag = true;
        state.candidate.full_name = Some("John Smith".into());

        state.reset();
        assert_eq!(state.stage, Stage::Greeting);
        assert!(!state.exit_flag);
        assert!(state.candidate.full_name.is_none());
    }

    #[test]
    fn state_serde_roundtrip() {
        let mut state = ConversationState::new();
        state.stage = Stage::InfoCollection;
        state.candidate.full_name = Some("Ada Lovelace".into());

        let json = serde_json::to_string(&state).unwrap();
        let parsed: ConversationState = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.stage, Stage::InfoCollection);
        assert_eq!(parsed.candidate.full_name.as_deref(), Some("Ada Lovelace"));
        assert!(!parsed.exit_flag);
    }
}
