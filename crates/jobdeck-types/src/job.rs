//! Tracked job applications and their status graph.

use serde::{Deserialize, Serialize};

use crate::{Id, Timestamp};

/// A tracked job application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: Id,
    pub title: String,
    pub company: String,
    pub status: JobStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
    /// Set when the cover-letter document was last generated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_letter_generated_at: Option<Timestamp>,
    /// Dismissed jobs leave the active view but keep their record, so the
    /// same posting is not re-ingested from upstream sources.
    #[serde(default)]
    pub dismissed: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Workflow status of a job application.
///
/// The legality graph is fixed: `new → prepped → reviewed → applied →
/// interviewing`, with `rejected` reachable from `applied` or
/// `interviewing`. `new` is only an initial state, never a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    New,
    Prepped,
    Reviewed,
    Applied,
    Interviewing,
    Rejected,
}

impl JobStatus {
    /// Every status, in workflow order.
    pub const ALL: [JobStatus; 6] = [
        Self::New,
        Self::Prepped,
        Self::Reviewed,
        Self::Applied,
        Self::Interviewing,
        Self::Rejected,
    ];

    /// Statuses a job may legally arrive from.
    pub fn allowed_from(&self) -> &'static [JobStatus] {
        match self {
            Self::New => &[],
            Self::Prepped => &[Self::New],
            Self::Reviewed => &[Self::Prepped],
            Self::Applied => &[Self::Reviewed],
            Self::Interviewing => &[Self::Applied],
            Self::Rejected => &[Self::Applied, Self::Interviewing],
        }
    }

    /// Whether `from → to` is a legal transition.
    pub fn can_transition(from: JobStatus, to: JobStatus) -> bool {
        from != to && to.allowed_from().contains(&from)
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Prepped => "Prepped",
            Self::Reviewed => "Reviewed",
            Self::Applied => "Applied",
            Self::Interviewing => "Interviewing",
            Self::Rejected => "Rejected",
        }
    }

    /// Short description shown next to the status.
    pub fn description(&self) -> &'static str {
        match self {
            Self::New => "Freshly ingested, not yet worked on",
            Self::Prepped => "Cover letter drafted and materials gathered",
            Self::Reviewed => "Materials reviewed and documents generated",
            Self::Applied => "Application submitted",
            Self::Interviewing => "Interview process in progress",
            Self::Rejected => "Closed without an offer",
        }
    }

    /// Wire representation, for query parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Prepped => "prepped",
            Self::Reviewed => "reviewed",
            Self::Applied => "applied",
            Self::Interviewing => "interviewing",
            Self::Rejected => "rejected",
        }
    }
}
