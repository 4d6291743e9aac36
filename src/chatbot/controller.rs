//! Stage controller — pure transition logic plus the global exit check.

use super::profile::CandidateProfile;
use super::state::{ConversationState, Stage};

/// Inputs that immediately end the conversation, at any stage.
pub const EXIT_KEYWORDS: [&str; 6] = ["exit", "quit", "bye", "goodbye", "stop", "end"];

/// Whether the trimmed, lower-cased input exactly matches an exit keyword.
pub fn is_exit_command(input: &str) -> bool {
    let normalized = input.trim().to_lowercase();
    EXIT_KEYWORDS.iter().any(|kw| *kw == normalized)
}

/// Check for an exit request and, if found, force the session to Closing.
///
/// Takes priority over normal stage routing for the turn.
pub fn check_exit(input: &str, state: &mut ConversationState) -> bool {
    if is_exit_command(input) {
        state.exit_flag = true;
        state.stage = Stage::Closing;
        return true;
    }
    false
}

/// Compute the next stage from the current stage and the collected profile.
///
/// Pure: InfoCollection only moves forward once the profile is complete;
/// Closing is terminal.
pub fn advance_stage(stage: Stage, candidate: &CandidateProfile) -> Stage {
    match stage {
        Stage::Greeting => Stage::InfoCollection,
        Stage::InfoCollection => {
            if candidate.is_complete() {
                Stage::TechQuestions
            } else {
                Stage::InfoCollection
            }
        }
        Stage::TechQuestions => Stage::Closing,
        Stage::Closing => Stage::Closing,
    }
}
