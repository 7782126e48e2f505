//! Persisted pipeline run records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Id, Timestamp};

/// One execution attempt of a pipeline, as persisted by the backend.
///
/// Runs transition to a terminal status exactly once and are never mutated
/// afterwards; this layer only reads them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineRun {
    pub id: Id,
    pub pipeline_name: String,
    pub status: RunStatus,
    pub trigger_type: TriggerType,
    #[serde(default)]
    pub input: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub created_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Timestamp>,
    /// Wall-clock duration, derived by the backend. Null until terminal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

/// Lifecycle status of a persisted run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Pending,
    Running,
    Success,
    Error,
    Cancelled,
}

impl RunStatus {
    /// Terminal statuses never change again.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success | Self::Error | Self::Cancelled)
    }

    /// Wire representation, for query parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Running => "running",
            Self::Success => "success",
            Self::Error => "error",
            Self::Cancelled => "cancelled",
        }
    }
}

/// How a run was triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerType {
    Api,
    Webhook,
    Agent,
    Cron,
    Manual,
}

impl TriggerType {
    /// Wire representation, for query parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Api => "api",
            Self::Webhook => "webhook",
            Self::Agent => "agent",
            Self::Cron => "cron",
            Self::Manual => "manual",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn terminal_statuses() {
        assert!(!RunStatus::Pending.is_terminal());
        assert!(!RunStatus::Running.is_terminal());
        assert!(RunStatus::Success.is_terminal());
        assert!(RunStatus::Error.is_terminal());
        assert!(RunStatus::Cancelled.is_terminal());
    }

    #[test]
    fn deserialize_wire_run() {
        let raw = json!({
            "id": "run-1",
            "pipeline_name": "job_search",
            "status": "success",
            "trigger_type": "cron",
            "input": {"query": "rust"},
            "output": {"found": 4},
            "created_at": "2025-06-01T12:00:00Z",
            "started_at": "2025-06-01T12:00:01Z",
            "completed_at": "2025-06-01T12:00:05Z",
            "duration_ms": 4000
        });
        let run: PipelineRun = serde_json::from_value(raw).unwrap();
        assert_eq!(run.status, RunStatus::Success);
        assert_eq!(run.trigger_type, TriggerType::Cron);
        assert_eq!(run.duration_ms, Some(4000));
        assert!(run.error.is_none());
    }
}
