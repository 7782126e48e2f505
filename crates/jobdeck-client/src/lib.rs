//! HTTP client SDK for the jobdeck backend API.
//!
//! This crate provides a typed client for the backend that owns persistence:
//! the pipeline registry, run history, schedules, and tracked jobs.
//!
//! # Example
//!
//! ```no_run
//! use jobdeck_client::JobdeckClient;
//!
//! # async fn example() -> jobdeck_client::Result<()> {
//! let client = JobdeckClient::builder()
//!     .base_url("http://localhost:8080")
//!     .auth_token("secret")
//!     .build()?;
//!
//! let pipelines = client.pipelines().list().await?;
//! for p in &pipelines {
//!     println!("{}: {}", p.name, p.display_name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - **Pipelines**: list descriptors, execute by name
//! - **Runs**: paginated run history, aggregate stats
//! - **Schedules**: CRUD over schedule definitions, occurrence windows
//! - **Jobs**: fetch, update (PATCH), cover-letter generation, bulk dismissal

pub mod api;
pub mod client;
pub mod error;
pub mod types;

pub use client::{ClientBuilder, JobdeckClient};
pub use error::{Error, Result};
pub use types::*;

// Re-export query types commonly used with list methods
pub use api::{ListJobsQuery, ListRunsQuery, RunStatsQuery};
