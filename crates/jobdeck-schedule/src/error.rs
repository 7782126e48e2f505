//! Error types for schedule management.

use thiserror::Error;

/// Result type for schedule operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Errors that can occur managing schedules or projecting occurrences.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// Cron expression failed to parse.
    #[error("Invalid cron expression '{expression}': {message}")]
    InvalidCron { expression: String, message: String },

    /// Not a known IANA timezone.
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// Backend API error.
    #[error("API error: {0}")]
    Api(#[from] jobdeck_client::Error),
}
