//! Rule-based field extraction from free-text candidate input.
//!
//! Each field has an independent acceptance rule evaluated against an
//! immutable snapshot of the profile. A rule only fires for fields that are
//! currently unset, so re-running extraction never overwrites anything. A
//! single input line may satisfy several rules at once and populate several
//! fields in one turn — this mirrors the intended slot-filling behavior and
//! is covered by tests rather than "fixed".

use regex::Regex;
use tracing::debug;

use super::profile::CandidateProfile;

/// Role keywords that mark an input as a desired position.
const POSITION_KEYWORDS: [&str; 4] = ["developer", "engineer", "analyst", "scientist"];

/// Proposed values for currently-unset profile fields.
///
/// Produced by [`Extractor::extract`]; applied by [`ExtractedFields::apply_to`].
#[derive(Debug, Clone, Default)]
pub struct ExtractedFields {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub years_experience: Option<u8>,
    pub desired_position: Option<String>,
    pub current_location: Option<String>,
    pub tech_stack: Option<Vec<String>>,
}

impl ExtractedFields {
    /// Whether no rule fired.
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.years_experience.is_none()
            && self.desired_position.is_none()
            && self.current_location.is_none()
            && self.tech_stack.is_none()
    }

    /// Merge proposed values into the profile, filling only unset fields.
    pub fn apply_to(self, profile: &mut CandidateProfile) {
        if profile.full_name.is_none() {
            profile.full_name = self.full_name;
        }
        if profile.email.is_none() {
            profile.email = self.email;
        }
        if profile.phone.is_none() {
            profile.phone = self.phone;
        }
        if profile.years_experience.is_none() {
            profile.years_experience = self.years_experience;
        }
        if profile.desired_position.is_none() {
            profile.desired_position = self.desired_position;
        }
        if profile.current_location.is_none() {
            profile.current_location = self.current_location;
        }
        if profile.tech_stack.is_none() {
            profile.tech_stack = self.tech_stack;
        }
    }
}

/// Rule-based candidate-field extractor with pre-compiled patterns.
pub struct Extractor {
    email: Regex,
    phone: Regex,
    number: Regex,
}

impl Extractor {
    pub fn new() -> Self {
        Self {
            email: Regex::new(r"[\w.\-]+@[\w.\-]+\.\w+").expect("valid email pattern"),
            phone: Regex::new(r"\+?\d[\d\s\-]{8,15}").expect("valid phone pattern"),
            number: Regex::new(r"\d+").expect("valid number pattern"),
        }
    }

    /// Evaluate all rules against `input` and the current profile.
    ///
    /// Does not mutate either argument; the caller applies the merge.
    pub fn extract(&self, input: &str, candidate: &CandidateProfile) -> ExtractedFields {
        let text = input.trim();
        let mut extracted = ExtractedFields::default();

        if candidate.full_name.is_none() && text.split_whitespace().count() >= 2 {
            extracted.full_name = Some(text.to_string());
        }

        if candidate.email.is_none() {
            if let Some(m) = self.email.find(text) {
                extracted.email = Some(m.as_str().to_string());
            }
        }

        if candidate.phone.is_none() {
            if let Some(m) = self.phone.find(text) {
                extracted.phone = Some(m.as_str().to_string());
            }
        }

        if candidate.years_experience.is_none() {
            if let Some(m) = self.number.find(text) {
                // First digit run only; out-of-range values are dropped.
                if let Ok(years) = m.as_str().parse::<u8>() {
                    if years <= 60 {
                        extracted.years_experience = Some(years);
                    }
                }
            }
        }

        if candidate.desired_position.is_none() {
            let lowered = text.to_lowercase();
            if POSITION_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
                // The whole line is the value, keyword included.
                extracted.desired_position = Some(text.to_string());
            }
        }

        if candidate.current_location.is_none()
            && (text.contains(',') || text.split_whitespace().count() <= 4)
        {
            extracted.current_location = Some(text.to_string());
        }

        if candidate.tech_stack.is_none() && text.contains(',') {
            let techs: Vec<String> = text
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(String::from)
                .collect();
            if !techs.is_empty() {
                extracted.tech_stack = Some(techs);
            }
        }

        if extracted.is_empty() {
            debug!(input = text, "No extraction rule fired");
        }

        extracted
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}
