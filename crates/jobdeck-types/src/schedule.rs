//! Recurring schedule definitions and projected calendar occurrences.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Id, Timestamp};

/// A recurring trigger: cron expression + timezone + fixed input parameters
/// merged into every invocation it fires.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleDefinition {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Pipeline this schedule triggers.
    pub pipeline_name: String,
    /// Classic 5-field cron expression.
    pub cron_expression: String,
    /// IANA timezone the expression is evaluated in.
    pub timezone: String,
    pub enabled: bool,
    /// Fixed input parameters for every triggered invocation.
    #[serde(default)]
    pub parameters: Map<String, Value>,
    /// Display color for calendar rendering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Next firing time, derived by the backend from cron + timezone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_run_at: Option<Timestamp>,
    /// Set after each trigger.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_run_at: Option<Timestamp>,
}

/// One concrete projected firing of a schedule within a queried window.
///
/// Carries a denormalized copy of the schedule's display fields so the
/// calendar can render without a second lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarOccurrence {
    pub schedule_id: Id,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub starts_at: Timestamp,
    pub ends_at: Timestamp,
}
