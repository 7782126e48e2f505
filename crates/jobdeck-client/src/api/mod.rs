//! API endpoint implementations.

mod jobs;
mod pipelines;
mod runs;
mod schedules;

pub use jobs::{JobsApi, ListJobsQuery};
pub use pipelines::PipelinesApi;
pub use runs::{ListRunsQuery, RunStatsQuery, RunsApi};
pub use schedules::SchedulesApi;
