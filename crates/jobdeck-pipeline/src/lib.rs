//! Pipeline execution core for jobdeck.
//!
//! This crate is the execution backbone of the dashboard: it submits typed,
//! schema-described pipelines for asynchronous execution, tracks their
//! lifecycle in process memory, recovers from structured precondition
//! failures, and maintains a queryable run history.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  PipelineRunner                                          │
//! │  - Validates input against the descriptor's required set │
//! │  - At-most-one in-flight invocation per pipeline name    │
//! │  - Typed failure union at the execution boundary         │
//! └──────────────┬───────────────────────────────────────────┘
//!                │ updates
//! ┌──────────────▼───────────────┐   ┌──────────────────────┐
//! │  ExecutionTracker            │◄──│  ProfileRecovery     │
//! │  idle → running →            │   │  select-or-create,   │
//! │  success | error             │   │  retry with profile  │
//! └──────────────────────────────┘   └──────────────────────┘
//! ```

pub mod error;
pub mod fields;
pub mod history;
pub mod recovery;
pub mod runner;
pub mod tracker;

pub use error::{PipelineError, Result};
pub use fields::{FieldControl, FieldResolverRegistry};
pub use history::{OutcomeFilter, RunFilters, RunHistory, RunStats};
pub use recovery::{ProfileRecovery, RecoveryError};
pub use runner::PipelineRunner;
pub use tracker::{AttemptToken, ExecutionState, ExecutionStatus, ExecutionTracker, RunResult};
