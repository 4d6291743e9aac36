//! Candidate profile — the slot-filled record built up over the session.

use serde::{Deserialize, Serialize};

/// The candidate fields collected during screening, as a closed enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateField {
    FullName,
    Email,
    Phone,
    YearsExperience,
    DesiredPosition,
    CurrentLocation,
    TechStack,
}

/// Fixed slot-filling order. Completion and "next missing" both follow it.
pub const REQUIRED_FIELDS: [CandidateField; 7] = [
    CandidateField::FullName,
    CandidateField::Email,
    CandidateField::Phone,
    CandidateField::YearsExperience,
    CandidateField::DesiredPosition,
    CandidateField::CurrentLocation,
    CandidateField::TechStack,
];

impl CandidateField {
    /// Human-readable label used when asking for the field.
    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Email => "Email Address",
            Self::Phone => "Phone Number",
            Self::YearsExperience => "Years of Experience",
            Self::DesiredPosition => "Desired Position",
            Self::CurrentLocation => "Current Location",
            Self::TechStack => "Tech Stack (languages, frameworks, tools)",
        }
    }
}

impl std::fmt::Display for CandidateField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::FullName => "full_name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::YearsExperience => "years_experience",
            Self::DesiredPosition => "desired_position",
            Self::CurrentLocation => "current_location",
            Self::TechStack => "tech_stack",
        };
        write!(f, "{s}")
    }
}

/// Structured candidate data collected during the conversation.
///
/// Fields start unset and are filled incrementally, one or more per turn.
/// A set field is never overwritten.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub years_experience: Option<u8>,
    pub desired_position: Option<String>,
    pub current_location: Option<String>,
    pub tech_stack: Option<Vec<String>>,
}

impl CandidateProfile {
    /// Whether a given field is set.
    pub fn has(&self, field: CandidateField) -> bool {
        match field {
            CandidateField::FullName => self.full_name.is_some(),
            CandidateField::Email => self.email.is_some(),
            CandidateField::Phone => self.phone.is_some(),
            CandidateField::YearsExperience => self.years_experience.is_some(),
            CandidateField::DesiredPosition => self.desired_position.is_some(),
            CandidateField::CurrentLocation => self.current_location.is_some(),
            CandidateField::TechStack => self.tech_stack.is_some(),
        }
    }

    /// Whether every required field is set.
    pub fn is_complete(&self) -> bool {
        REQUIRED_FIELDS.iter().all(|field| self.has(*field))
    }

    /// The earliest unset field in the fixed order, or `None` when complete.
    pub fn next_missing_field(&self) -> Option<CandidateField> {
        REQUIRED_FIELDS
            .iter()
            .copied()
            .find(|field| !self.has(*field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_profile() -> CandidateProfile {
        CandidateProfile {
            full_name: Some("John Smith".into()),
            email: Some("john@example.com".into()),
            phone: Some("+1 555-123-4567".into()),
            years_experience: Some(5),
            desired_position: Some("Backend Developer".into()),
            current_location: Some("Berlin, Germany".into()),
            tech_stack: Some(vec!["Python".into(), "Go".into()]),
        }
    }

    #[test]
    fn empty_profile_is_incomplete() {
        let profile = CandidateProfile::default();
        assert!(!profile.is_complete());
        assert_eq!(profile.next_missing_field(), Some(CandidateField::FullName));
    }

    #[test]
    fn complete_only_after_last_field() {
        let mut profile = CandidateProfile::default();
        profile.full_name = Some("John Smith".into());
        profile.email = Some("john@example.com".into());
        profile.phone = Some("+1 555-123-4567".into());
        profile.years_experience = Some(5);
        profile.desired_position = Some("Backend Developer".into());
        profile.current_location = Some("Berlin".into());
        assert!(!profile.is_complete());
        assert_eq!(profile.next_missing_field(), Some(CandidateField::TechStack));

        profile.tech_stack = Some(vec!["Python".into()]);
        assert!(profile.is_complete());
        assert_eq!(profile.next_missing_field(), None);
    }

    #[test]
    fn completion_is_order_independent() {
        // Fill in reverse order; completeness only depends on what is set.
        let mut profile = CandidateProfile::default();
        profile.tech_stack = Some(vec!["Rust".into()]);
        profile.current_location = Some("Oslo".into());
        profile.desired_position = Some("Engineer".into());
        profile.years_experience = Some(0);
        profile.phone = Some("+47 12345678".into());
        profile.email = Some("a@b.co".into());
        assert!(!profile.is_complete());
        assert_eq!(profile.next_missing_field(), Some(CandidateField::FullName));

        profile.full_name = Some("Ada Lovelace".into());
        assert!(profile.is_complete());
    }

    #[test]
    fn next_missing_skips_set_fields() {
        let mut profile = CandidateProfile::default();
        profile.full_name = Some("John Smith".into());
        profile.phone = Some("+1 555-123-4567".into());
        // Email is unset and earlier than phone in the fixed order.
        assert_eq!(profile.next_missing_field(), Some(CandidateField::Email));
    }

    #[test]
    fn full_profile_is_complete() {
        assert!(full_profile().is_complete());
    }

    #[test]
    fn field_labels() {
        assert_eq!(CandidateField::FullName.label(), "Full Name");
        assert_eq!(
            CandidateField::YearsExperience.label(),
            "Years of Experience"
        );
        assert_eq!(
            CandidateField::TechStack.label(),
            "Tech Stack (languages, frameworks, tools)"
        );
    }

    #[test]
    fn display_matches_serde() {
        for field in REQUIRED_FIELDS {
            let display = format!("{field}");
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(format!("\"{display}\""), json);
        }
    }
}
