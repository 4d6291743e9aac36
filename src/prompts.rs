//! Prompt text and fixed conversational messages.
//!
//! Everything the assistant says outside the tech-question stage is
//! deterministic and lives here, so the conversation flow stays testable
//! without an LLM.

use crate::chatbot::profile::{CandidateField, CandidateProfile};

/// Global system prompt constraining the assistant to the hiring context.
pub const SYSTEM_PROMPT: &str = "\
You are TalentScout, an AI Hiring Assistant for a technology recruitment agency.

Your role:
- Conduct initial candidate screening professionally.
- Collect candidate information step by step.
- Ask technical interview questions strictly based on the candidate's declared tech stack.

Rules:
- Stay strictly within the hiring and screening context.
- Ask only one question at a time.
- Do NOT hallucinate or assume candidate details.
- Do NOT answer unrelated or personal questions.
- Be polite, concise, and professional.
- If the user asks to exit, immediately end the conversation gracefully.

You are not a general-purpose chatbot.";

/// First message of the session; asks for the first required field.
pub const WELCOME: &str = "\
Hello! 👋 I'm TalentScout, your AI hiring assistant.

I'll start by collecting some basic information for initial screening.

Let's begin! What's your **Full Name**?";

/// Sent when the profile becomes complete.
pub const INFO_COMPLETE: &str = "\
Thanks for sharing your details! ✅

Now I'll ask you a few technical questions based on your tech stack.";

/// Final message of the session.
pub const CLOSING: &str = "\
Thank you for your time! 🙏

Your responses have been recorded. Our recruitment team will reach out to you \
regarding the next steps.

Have a great day!";

/// Substituted when the LLM cannot produce questions; the session continues.
pub const GENERATION_FALLBACK: &str = "\
Thanks for the information! 👍

I wasn't able to prepare technical questions right now, but your profile has \
been recorded and our team will follow up with the next steps.";

/// Generic apology for unexpected internal faults; the turn can be retried.
pub const APOLOGY: &str = "Sorry, something went wrong on my end. 🙏 Please try again.";

/// Templated request for the next missing field.
pub fn ask_for(field: CandidateField) -> String {
    format!("Got it 👍 Could you please provide your **{}**?", field.label())
}

/// Build the tech-question prompt from the collected profile.
pub fn tech_question_prompt(candidate: &CandidateProfile) -> String {
    let tech_stack = candidate
        .tech_stack
        .as_deref()
        .unwrap_or_default()
        .join(", ");
    let desired_position = candidate.desired_position.as_deref().unwrap_or_default();
    let years_experience = candidate.years_experience.unwrap_or_default();

    format!(
        "The candidate has declared the following tech stack:\n\
         {tech_stack}\n\n\
         Their desired role is:\n\
         {desired_position}\n\n\
         Their years of experience:\n\
         {years_experience}\n\n\
         Task:\n\
         Generate 3 to 5 technical interview questions for EACH technology listed.\n\n\
         Guidelines:\n\
         - Questions should assess practical understanding.\n\
         - Start from basic to intermediate difficulty.\n\
         - Avoid yes/no questions.\n\
         - Do NOT include explanations or answers.\n\
         - Do NOT include technologies not listed.\n\n\
         Format the output as:\n\
         Technology Name:\n\
         1. Question\n\
         2. Question\n\
         3. Question"
    )
}
