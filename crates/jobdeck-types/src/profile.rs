//! Structured precondition errors from pipeline execution.
//!
//! The backend reports a missing user profile as a JSON-encoded error with a
//! discriminant field. `ExecuteFailure` is the typed union handed back at
//! the invocation boundary: a recognized structured error parses into
//! `ProfileRequired`, anything else falls through as an unstructured
//! `Message`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Id;

/// Discriminant value identifying a profile-required error.
pub const PROFILE_REQUIRED_TYPE: &str = "profile_required";

/// Structured failure: the pipeline needs a user profile that is missing or
/// was not selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRequiredError {
    /// Discriminant; always [`PROFILE_REQUIRED_TYPE`] for a valid parse.
    pub error_type: String,

    /// Human-readable message.
    pub message: String,

    /// Profiles the user may select to retry with. Empty when the user has
    /// no profiles at all.
    #[serde(default)]
    pub available_profiles: Vec<ProfileCandidate>,

    /// Where to go to create a new profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_url: Option<String>,
}

impl ProfileRequiredError {
    /// Attempt to parse a raw error message as a structured profile error.
    ///
    /// Returns `None` for anything that is not valid JSON carrying the
    /// `profile_required` discriminant — plain-string errors stay opaque.
    pub fn parse(message: &str) -> Option<Self> {
        let parsed: Self = serde_json::from_str(message).ok()?;
        (parsed.error_type == PROFILE_REQUIRED_TYPE).then_some(parsed)
    }

    /// Look up a candidate by id.
    pub fn candidate(&self, id: &str) -> Option<&ProfileCandidate> {
        self.available_profiles.iter().find(|c| c.id == id)
    }
}

/// One selectable remediation profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileCandidate {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub is_default: bool,
    /// Whether a resume is attached. Candidates without one can be selected
    /// but cannot be retried with.
    #[serde(default)]
    pub has_resume: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_name: Option<String>,
}

/// Typed failure union for a pipeline execution attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExecuteFailure {
    /// Recognized structured precondition error.
    ProfileRequired(ProfileRequiredError),
    /// Unstructured error (transport failure or opaque backend message).
    Message { message: String },
}

impl ExecuteFailure {
    /// Classify a raw error string, falling back to `Message` when the
    /// structured parse fails.
    pub fn from_error_string(raw: &str) -> Self {
        match ProfileRequiredError::parse(raw) {
            Some(err) => Self::ProfileRequired(err),
            None => Self::Message {
                message: raw.to_string(),
            },
        }
    }

    /// Human-readable message regardless of variant.
    pub fn message(&self) -> &str {
        match self {
            Self::ProfileRequired(err) => &err.message,
            Self::Message { message } => message,
        }
    }

    /// The structured profile error, if this failure is one.
    pub fn as_profile_required(&self) -> Option<&ProfileRequiredError> {
        match self {
            Self::ProfileRequired(err) => Some(err),
            Self::Message { .. } => None,
        }
    }
}

impl fmt::Display for ExecuteFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRUCTURED: &str = r#"{
        "error_type": "profile_required",
        "message": "Select a profile to run this pipeline",
        "available_profiles": [
            {"id": "p1", "name": "Default", "is_default": true, "has_resume": true, "resume_name": "resume.pdf"},
            {"id": "p2", "name": "Contract work", "has_resume": false}
        ],
        "create_url": "/settings/profiles/new"
    }"#;

    #[test]
    fn parse_recognizes_discriminant() {
        let err = ProfileRequiredError::parse(STRUCTURED).unwrap();
        assert_eq!(err.available_profiles.len(), 2);
        assert!(err.candidate("p1").unwrap().has_resume);
        assert!(!err.candidate("p2").unwrap().has_resume);
        assert_eq!(err.create_url.as_deref(), Some("/settings/profiles/new"));
    }

    #[test]
    fn parse_rejects_wrong_discriminant() {
        let raw = r#"{"error_type": "rate_limited", "message": "slow down"}"#;
        assert!(ProfileRequiredError::parse(raw).is_none());
    }

    #[test]
    fn parse_rejects_plain_string() {
        assert!(ProfileRequiredError::parse("connection refused").is_none());
    }

    #[test]
    fn from_error_string_falls_back_to_message() {
        let failure = ExecuteFailure::from_error_string("timed out after 30s");
        assert_eq!(failure.message(), "timed out after 30s");
        assert!(failure.as_profile_required().is_none());
    }

    #[test]
    fn from_error_string_classifies_structured() {
        let failure = ExecuteFailure::from_error_string(STRUCTURED);
        let err = failure.as_profile_required().unwrap();
        assert_eq!(err.error_type, PROFILE_REQUIRED_TYPE);
    }

    #[test]
    fn empty_profile_list_parses() {
        let raw = r#"{"error_type": "profile_required", "message": "No profiles found"}"#;
        let err = ProfileRequiredError::parse(raw).unwrap();
        assert!(err.available_profiles.is_empty());
        assert!(err.create_url.is_none());
    }
}
