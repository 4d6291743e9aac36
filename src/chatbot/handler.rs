//! Turn handler — orchestrates one request/response cycle.
//!
//! `handle` is total: every failure degrades to fixed conversational text.
//! No error or stack trace ever reaches the candidate.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::error::Result;
use crate::llm::{ChatMessage, CompletionRequest, LlmProvider};
use crate::prompts;

use super::controller::{advance_stage, check_exit};
use super::extractor::Extractor;
use super::state::{ConversationState, Stage};

/// Temperature for tech-question generation.
const GENERATION_TEMPERATURE: f32 = 0.3;
/// Max tokens for tech-question generation.
const GENERATION_MAX_TOKENS: u32 = 1024;

/// Processes candidate input turn by turn against the conversation state.
///
/// The LLM collaborator is injected so tests can substitute a fake.
pub struct TurnHandler {
    extractor: Extractor,
    llm: Arc<dyn LlmProvider>,
}

impl TurnHandler {
    pub fn new(llm: Arc<dyn LlmProvider>) -> Self {
        Self {
            extractor: Extractor::new(),
            llm,
        }
    }

    /// Process one turn and return the assistant's response text.
    ///
    /// Never fails outward: unexpected internal faults are converted to a
    /// fixed apology, with the state left unchanged so the turn can be
    /// retried.
    pub async fn handle(&self, input: &str, state: &mut ConversationState) -> String {
        match self.route(input, state).await {
            Ok(response) => response,
            Err(e) => {
                error!(error = %e, stage = %state.stage, "Turn failed");
                prompts::APOLOGY.to_string()
            }
        }
    }

    async fn route(&self, input: &str, state: &mut ConversationState) -> Result<String> {
        // Global exit handling works at any stage and overrides routing.
        if check_exit(input, state) {
            debug!("Exit keyword received");
            return Ok(self.handle_closing(state));
        }

        let response = match state.stage {
            Stage::Greeting => self.handle_greeting(state),
            Stage::InfoCollection => self.handle_info_collection(input, state),
            Stage::TechQuestions => self.handle_tech_questions(state).await,
            Stage::Closing => self.handle_closing(state),
        };
        Ok(response)
    }

    fn handle_greeting(&self, state: &mut ConversationState) -> String {
        state.stage = advance_stage(state.stage, &state.candidate);
        prompts::WELCOME.to_string()
    }

    /// Structured slot filling with deterministic prompts (no LLM).
    fn handle_info_collection(&self, input: &str, state: &mut ConversationState) -> String {
        let extracted = self.extractor.extract(input, &state.candidate);
        if extracted.is_empty() {
            debug!(stage = %state.stage, "Input matched no field rule, re-asking");
        }
        extracted.apply_to(&mut state.candidate);

        if state.candidate.is_complete() {
            state.stage = advance_stage(state.stage, &state.candidate);
            info!("Candidate profile complete");
            return prompts::INFO_COMPLETE.to_string();
        }

        // Ask explicitly for the earliest missing field. Completeness was
        // checked above, so one must exist.
        match state.candidate.next_missing_field() {
            Some(field) => prompts::ask_for(field),
            None => prompts::INFO_COMPLETE.to_string(),
        }
    }

    /// The only stage that consults the LLM. Generation failure degrades to
    /// a fixed fallback; either way the session advances to Closing.
    async fn handle_tech_questions(&self, state: &mut ConversationState) -> String {
        let prompt = prompts::tech_question_prompt(&state.candidate);
        let request = CompletionRequest::new(vec![
            ChatMessage::system(prompts::SYSTEM_PROMPT),
            ChatMessage::user(prompt),
        ])
        .with_temperature(GENERATION_TEMPERATURE)
        .with_max_tokens(GENERATION_MAX_TOKENS);

        state.stage = advance_stage(state.stage, &state.candidate);

        match self.llm.complete(request).await {
            Ok(response) if !response.content.trim().is_empty() => {
                info!(model = %response.model, "Generated technical questions");
                response.content
            }
            Ok(_) => {
                warn!("LLM returned empty content, using fallback");
                prompts::GENERATION_FALLBACK.to_string()
            }
            Err(e) => {
                warn!(error = %e, "Question generation failed, using fallback");
                prompts::GENERATION_FALLBACK.to_string()
            }
        }
    }

    fn handle_closing(&self, state: &mut ConversationState) -> String {
        state.exit_flag = true;
        state.stage = Stage::Closing;
        prompts::CLOSING.to_string()
    }
}
