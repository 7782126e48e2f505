//! Recurring schedules for jobdeck.
//!
//! Schedule definitions (cron + timezone + fixed input parameters) live in
//! the backend; this crate manages them and projects their concrete firing
//! times onto a calendar window. The projection is a pure function of the
//! definitions and the window — nothing is persisted and repeated calls
//! return identical results.

pub mod error;
pub mod manager;
pub mod occurrence;

pub use error::{Result, ScheduleError};
pub use manager::ScheduleManager;
pub use occurrence::{OCCURRENCE_MINUTES, next_run_at, parse_cron, parse_timezone, project_occurrences};
