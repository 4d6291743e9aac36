//! Conversation core: slot-filling state machine, rule-based extraction,
//! and the per-turn orchestrator.

pub mod controller;
pub mod extractor;
pub mod handler;
pub mod profile;
pub mod state;

pub use extractor::{ExtractedFields, Extractor};
pub use handler::TurnHandler;
pub use profile::{CandidateField, CandidateProfile, REQUIRED_FIELDS};
pub use state::{ConversationState, Stage};
