//! TalentScout — scripted hiring-assistant core.

pub mod chatbot;
pub mod cli;
pub mod config;
pub mod error;
pub mod llm;
pub mod prompts;
