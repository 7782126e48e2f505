//! Request and response types for the jobdeck backend API.
//!
//! These types mirror the server's API contract. Domain objects
//! (descriptors, runs, jobs, schedules) live in `jobdeck-types`; this module
//! holds the envelopes around them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use jobdeck_types::{CalendarOccurrence, JobStatus, PipelineRun, Timestamp};

// ─────────────────────────────────────────────────────────────────────────────
// Pipelines
// ─────────────────────────────────────────────────────────────────────────────

/// Response from `POST /pipelines/{name}/execute`.
///
/// Application-level failures come back as `success: false` with an error
/// string; the caller decides whether that string parses as a structured
/// error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecuteResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Pipeline runs
// ─────────────────────────────────────────────────────────────────────────────

/// Paginated page of run records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListRunsResponse {
    pub runs: Vec<PipelineRun>,
    pub total: u64,
    pub has_more: bool,
}

/// Aggregate counters from `GET /pipeline-runs/stats`.
///
/// `avg_duration_ms` is averaged server-side over records with a non-null
/// duration only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunStatsResponse {
    pub total: u64,
    pub success: u64,
    pub errors: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_duration_ms: Option<f64>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Schedules
// ─────────────────────────────────────────────────────────────────────────────

/// Request to create a schedule definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSchedule {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub pipeline_name: String,
    pub cron_expression: String,
    pub timezone: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub parameters: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

fn default_enabled() -> bool {
    true
}

/// Partial update for a schedule definition. Unset fields are left as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cron_expression: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Response from `GET /scheduled-tasks/occurrences`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OccurrencesResponse {
    pub occurrences: Vec<CalendarOccurrence>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Jobs
// ─────────────────────────────────────────────────────────────────────────────

/// Partial update for a job, sent as `PATCH /jobs/{id}`.
///
/// The server re-validates status transitions; the client-side legality
/// check is a UX optimization, not the sole guard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_letter_generated_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dismissed: Option<bool>,
}

/// Response from `POST /jobs/{id}/cover-letter/generate-pdf`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratePdfResponse {
    pub generated_at: Timestamp,
}

/// Request body for bulk dismissal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DismissByStatusRequest {
    pub status: JobStatus,
}

/// Response from bulk dismissal: how many jobs left the active view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DismissResponse {
    pub count: u64,
}
