//! In-process execution state, one slot per pipeline name.
//!
//! The tracker is the single writer of `ExecutionState`: callers go through
//! `start`/`complete`/`reset` and never mutate state directly. Each slot
//! carries an attempt counter so a completion that arrives after a `reset`
//! (or after a newer `start`) is discarded instead of clobbering the newer
//! state.

use std::collections::HashMap;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use jobdeck_types::{ExecuteFailure, Timestamp, now};

/// Lifecycle status of an in-process invocation slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionStatus {
    Idle,
    Running,
    Success,
    Error,
}

/// Terminal result of one invocation attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RunResult {
    Success {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        output: Option<Value>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        metadata: Option<Value>,
    },
    Failure {
        error: ExecuteFailure,
    },
}

/// Execution state for one pipeline name.
///
/// Invariants: `completed_at` is set iff the status is terminal
/// (`Success`/`Error`); `started_at` is set iff the status is not `Idle`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionState {
    pub status: ExecutionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<RunResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Timestamp>,
}

impl ExecutionState {
    /// The default never-started state.
    pub fn idle() -> Self {
        Self {
            status: ExecutionStatus::Idle,
            result: None,
            started_at: None,
            completed_at: None,
        }
    }

    /// Whether this attempt has finished (successfully or not).
    pub fn is_terminal(&self) -> bool {
        matches!(self.status, ExecutionStatus::Success | ExecutionStatus::Error)
    }

    /// The failure carried by an errored state, if any.
    pub fn failure(&self) -> Option<&ExecuteFailure> {
        match &self.result {
            Some(RunResult::Failure { error }) => Some(error),
            _ => None,
        }
    }
}

impl Default for ExecutionState {
    fn default() -> Self {
        Self::idle()
    }
}

/// Proof that a `start` call claimed a slot. Required by `complete`, so a
/// stale attempt cannot finish a newer one.
#[derive(Debug, Clone)]
pub struct AttemptToken {
    name: String,
    attempt: u64,
}

impl AttemptToken {
    /// Pipeline name this token belongs to.
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Default)]
struct Slot {
    state: ExecutionState,
    attempt: u64,
}

/// Per-pipeline execution state store.
///
/// Slots are created lazily on first `start` and live for the session.
#[derive(Debug, Default)]
pub struct ExecutionTracker {
    slots: Mutex<HashMap<String, Slot>>,
}

impl ExecutionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the slot for `name` and move it to `Running`, discarding any
    /// previous result.
    ///
    /// Returns `None` when an invocation is already in flight for this name
    /// (at-most-one policy); the existing attempt is left untouched.
    pub fn start(&self, name: &str) -> Option<AttemptToken> {
        let mut slots = self.slots.lock();
        let slot = slots.entry(name.to_string()).or_default();

        if slot.state.status == ExecutionStatus::Running {
            tracing::debug!(pipeline = name, "start rejected: already running");
            return None;
        }

        slot.attempt += 1;
        slot.state = ExecutionState {
            status: ExecutionStatus::Running,
            result: None,
            started_at: Some(now()),
            completed_at: None,
        };

        Some(AttemptToken {
            name: name.to_string(),
            attempt: slot.attempt,
        })
    }

    /// Record the terminal result for the attempt identified by `token`.
    ///
    /// Returns `false` (and changes nothing) when the token is stale: the
    /// slot was `reset` or a newer `start` superseded this attempt.
    pub fn complete(&self, token: &AttemptToken, result: RunResult) -> bool {
        let mut slots = self.slots.lock();
        let Some(slot) = slots.get_mut(&token.name) else {
            return false;
        };
        if slot.attempt != token.attempt || slot.state.status != ExecutionStatus::Running {
            tracing::debug!(pipeline = %token.name, "stale completion discarded");
            return false;
        }

        slot.state.status = match result {
            RunResult::Success { .. } => ExecutionStatus::Success,
            RunResult::Failure { .. } => ExecutionStatus::Error,
        };
        slot.state.completed_at = Some(now());
        slot.state.result = Some(result);
        true
    }

    /// Force the slot back to the idle default, regardless of its current
    /// status. Any in-flight attempt's eventual completion is discarded.
    pub fn reset(&self, name: &str) {
        let mut slots = self.slots.lock();
        if let Some(slot) = slots.get_mut(name) {
            slot.attempt += 1;
            slot.state = ExecutionState::idle();
        }
    }

    /// Current state for `name`; the idle default if never started.
    pub fn get(&self, name: &str) -> ExecutionState {
        self.slots
            .lock()
            .get(name)
            .map(|slot| slot.state.clone())
            .unwrap_or_default()
    }
}
