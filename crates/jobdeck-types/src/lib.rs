//! Shared types for the jobdeck dashboard core.
//!
//! Pure data: pipeline descriptors and input schemas, run records, the job
//! status graph, schedule definitions, and the structured profile error.
//! No I/O lives here — behavior belongs to the client and engine crates.

pub mod job;
pub mod pipeline;
pub mod profile;
pub mod run;
pub mod schedule;

pub use job::{Job, JobStatus};
pub use pipeline::{FieldSchema, FieldType, PipelineDescriptor};
pub use profile::{
    ExecuteFailure, PROFILE_REQUIRED_TYPE, ProfileCandidate, ProfileRequiredError,
};
pub use run::{PipelineRun, RunStatus, TriggerType};
pub use schedule::{CalendarOccurrence, ScheduleDefinition};

/// Identifier type used across the system.
pub type Id = String;

/// Timestamp type used across the system (UTC).
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Current time in UTC.
pub fn now() -> Timestamp {
    chrono::Utc::now()
}
