//! Recovery protocol for `profile_required` failures.
//!
//! When an invocation fails because no usable profile was attached, the
//! backend hands back a structured error listing the profiles the user could
//! retry with. This module drives the remediation flow: pick a candidate (or
//! go create one), then re-invoke the original pipeline with the selection
//! merged into the original input.

use serde_json::{Map, Value};
use thiserror::Error;

use jobdeck_types::{ProfileCandidate, ProfileRequiredError};

use crate::error::PipelineError;
use crate::runner::PipelineRunner;
use crate::tracker::ExecutionState;

/// Errors in the recovery flow itself.
#[derive(Debug, Error)]
pub enum RecoveryError {
    /// No candidate with this id in the error's list.
    #[error("Unknown profile: {0}")]
    UnknownProfile(String),

    /// No profiles exist; the only remediation is creating one.
    #[error("No profiles available; create one first")]
    NoProfiles,

    /// Retry was requested without a selected candidate.
    #[error("No profile selected")]
    NothingSelected,

    /// The selected candidate has no resume attached and cannot be retried
    /// with.
    #[error("Profile '{0}' has no resume attached")]
    ProfileIncomplete(String),

    /// The re-invocation itself failed.
    #[error(transparent)]
    Invoke(#[from] PipelineError),
}

/// One in-progress remediation of a `profile_required` failure.
///
/// Holds the original invocation (name + input) so `retry` re-runs it
/// unchanged apart from the selected `profile_id`.
#[derive(Debug, Clone)]
pub struct ProfileRecovery {
    pipeline_name: String,
    original_input: Map<String, Value>,
    error: ProfileRequiredError,
    selected: Option<String>,
}

impl ProfileRecovery {
    /// Build a recovery from a failed execution state.
    ///
    /// Returns `None` unless the state carries a structured
    /// `profile_required` failure — unstructured errors pass through
    /// untouched and are not recoverable here.
    pub fn from_state(
        pipeline_name: &str,
        original_input: &Map<String, Value>,
        state: &ExecutionState,
    ) -> Option<Self> {
        let error = state.failure()?.as_profile_required()?.clone();
        Some(Self {
            pipeline_name: pipeline_name.to_string(),
            original_input: original_input.clone(),
            error,
            selected: None,
        })
    }

    /// Human-readable message from the backend.
    pub fn message(&self) -> &str {
        &self.error.message
    }

    /// Where to create a new profile.
    pub fn create_url(&self) -> Option<&str> {
        self.error.create_url.as_deref()
    }

    /// Candidate profiles the user may select.
    pub fn profiles(&self) -> &[ProfileCandidate] {
        &self.error.available_profiles
    }

    /// True when no profiles exist at all — the only remediation is the
    /// create path, and retry stays disabled.
    pub fn must_create(&self) -> bool {
        self.error.available_profiles.is_empty()
    }

    /// Select a candidate by id.
    ///
    /// Selecting a candidate without a resume is allowed (the UI shows it as
    /// selectable-but-blocked); it just leaves [`retry_enabled`] false.
    ///
    /// [`retry_enabled`]: Self::retry_enabled
    pub fn select(&mut self, profile_id: &str) -> std::result::Result<(), RecoveryError> {
        if self.error.candidate(profile_id).is_none() {
            return Err(RecoveryError::UnknownProfile(profile_id.to_string()));
        }
        self.selected = Some(profile_id.to_string());
        Ok(())
    }

    /// The currently selected candidate, if any.
    pub fn selected(&self) -> Option<&ProfileCandidate> {
        let id = self.selected.as_deref()?;
        self.error.candidate(id)
    }

    /// Whether retry is currently possible: a candidate is selected and has
    /// a resume attached.
    pub fn retry_enabled(&self) -> bool {
        self.selected().is_some_and(|c| c.has_resume)
    }

    /// Re-invoke the original pipeline with the selected profile merged into
    /// the original input (overriding any prior `profile_id`).
    ///
    /// Goes through the same runner, so the at-most-one policy applies and
    /// the previous terminal state is discarded by the new `start`.
    pub async fn retry(
        &self,
        runner: &PipelineRunner,
    ) -> std::result::Result<ExecutionState, RecoveryError> {
        if self.must_create() {
            return Err(RecoveryError::NoProfiles);
        }
        let candidate = self.selected().ok_or(RecoveryError::NothingSelected)?;
        if !candidate.has_resume {
            return Err(RecoveryError::ProfileIncomplete(candidate.name.clone()));
        }

        let mut input = self.original_input.clone();
        input.insert("profile_id".to_string(), Value::String(candidate.id.clone()));

        tracing::debug!(
            pipeline = %self.pipeline_name,
            profile = %candidate.id,
            "retrying with selected profile"
        );
        Ok(runner.invoke(&self.pipeline_name, input).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::{ExecutionStatus, RunResult};
    use jobdeck_types::ExecuteFailure;

    fn profile_error(candidates: Vec<ProfileCandidate>) -> ProfileRequiredError {
        ProfileRequiredError {
            error_type: jobdeck_types::PROFILE_REQUIRED_TYPE.to_string(),
            message: "Select a profile".to_string(),
            available_profiles: candidates,
            create_url: Some("/settings/profiles/new".to_string()),
        }
    }

    fn candidate(id: &str, has_resume: bool) -> ProfileCandidate {
        ProfileCandidate {
            id: id.to_string(),
            name: format!("Profile {id}"),
            is_default: false,
            has_resume,
            resume_name: has_resume.then(|| "resume.pdf".to_string()),
        }
    }

    fn errored_state(error: ExecuteFailure) -> ExecutionState {
        ExecutionState {
            status: ExecutionStatus::Error,
            result: Some(RunResult::Failure { error }),
            started_at: Some(jobdeck_types::now()),
            completed_at: Some(jobdeck_types::now()),
        }
    }

    #[test]
    fn from_state_ignores_unstructured_errors() {
        let state = errored_state(ExecuteFailure::Message {
            message: "connection refused".into(),
        });
        assert!(ProfileRecovery::from_state("job_search", &Map::new(), &state).is_none());
    }

    #[test]
    fn from_state_ignores_non_error_states() {
        let state = ExecutionState::idle();
        assert!(ProfileRecovery::from_state("job_search", &Map::new(), &state).is_none());
    }

    #[test]
    fn empty_candidate_list_exposes_only_create() {
        let state = errored_state(ExecuteFailure::ProfileRequired(profile_error(vec![])));
        let recovery = ProfileRecovery::from_state("job_search", &Map::new(), &state).unwrap();
        assert!(recovery.must_create());
        assert!(!recovery.retry_enabled());
        assert_eq!(recovery.create_url(), Some("/settings/profiles/new"));
    }

    #[test]
    fn selecting_unknown_profile_is_rejected() {
        let state = errored_state(ExecuteFailure::ProfileRequired(profile_error(vec![
            candidate("p1", true),
        ])));
        let mut recovery = ProfileRecovery::from_state("job_search", &Map::new(), &state).unwrap();
        assert!(matches!(
            recovery.select("nope"),
            Err(RecoveryError::UnknownProfile(_))
        ));
        assert!(recovery.selected().is_none());
    }

    #[test]
    fn candidate_without_resume_blocks_retry_but_is_selectable() {
        let state = errored_state(ExecuteFailure::ProfileRequired(profile_error(vec![
            candidate("p1", false),
            candidate("p2", true),
        ])));
        let mut recovery = ProfileRecovery::from_state("job_search", &Map::new(), &state).unwrap();

        recovery.select("p1").unwrap();
        assert!(!recovery.retry_enabled());

        recovery.select("p2").unwrap();
        assert!(recovery.retry_enabled());
    }
}
