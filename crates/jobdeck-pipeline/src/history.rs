//! Queryable run history with accumulating pagination and statistics.

use serde::{Deserialize, Serialize};

use jobdeck_client::{JobdeckClient, ListRunsQuery, RunStatsQuery};
use jobdeck_types::{PipelineRun, RunStatus, TriggerType};

use crate::error::Result;

const DEFAULT_PAGE_SIZE: u32 = 25;

/// Outcome shortcut filters. A single optional value, so "errors only" and
/// "success only" cannot both be active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeFilter {
    ErrorsOnly,
    SuccessOnly,
}

/// Filters over the run history.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunFilters {
    pub pipeline_name: Option<String>,
    pub status: Option<RunStatus>,
    pub trigger_type: Option<TriggerType>,
    pub mine_only: bool,
    pub outcome: Option<OutcomeFilter>,
}

impl RunFilters {
    fn to_list_query(&self, page: u32, page_size: u32) -> ListRunsQuery {
        ListRunsQuery {
            pipeline_name: self.pipeline_name.clone(),
            status: self.status,
            trigger_type: self.trigger_type,
            mine_only: self.mine_only.then_some(true),
            errors_only: (self.outcome == Some(OutcomeFilter::ErrorsOnly)).then_some(true),
            success_only: (self.outcome == Some(OutcomeFilter::SuccessOnly)).then_some(true),
            page: Some(page),
            page_size: Some(page_size),
        }
    }

    fn to_stats_query(&self) -> RunStatsQuery {
        RunStatsQuery {
            pipeline_name: self.pipeline_name.clone(),
            status: self.status,
            trigger_type: self.trigger_type,
            mine_only: self.mine_only.then_some(true),
            errors_only: (self.outcome == Some(OutcomeFilter::ErrorsOnly)).then_some(true),
            success_only: (self.outcome == Some(OutcomeFilter::SuccessOnly)).then_some(true),
        }
    }
}

/// Aggregate statistics over a filtered set of runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunStats {
    pub total: u64,
    pub success: u64,
    pub errors: u64,
    /// Percentage in `[0, 100]`; 0 when there are no runs.
    pub success_rate: f64,
    /// Averaged over runs with a known duration only; `None` when no run
    /// has one.
    pub avg_duration_ms: Option<f64>,
}

impl RunStats {
    /// Derive the rate from raw counters.
    pub fn from_counts(total: u64, success: u64, errors: u64, avg_duration_ms: Option<f64>) -> Self {
        let success_rate = if total == 0 {
            0.0
        } else {
            success as f64 / total as f64 * 100.0
        };
        Self {
            total,
            success,
            errors,
            success_rate,
            avg_duration_ms,
        }
    }
}

/// Accumulating view over the persisted run history.
///
/// Pagination is append-only: each `load_more` call fetches the next page
/// and extends the local set until the backend reports no more. Changing
/// filters resets the accumulation.
pub struct RunHistory {
    client: JobdeckClient,
    filters: RunFilters,
    page_size: u32,
    next_page: u32,
    runs: Vec<PipelineRun>,
    total: u64,
    has_more: bool,
}

impl RunHistory {
    pub fn new(client: JobdeckClient) -> Self {
        Self::with_page_size(client, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(client: JobdeckClient, page_size: u32) -> Self {
        Self {
            client,
            filters: RunFilters::default(),
            page_size,
            next_page: 1,
            runs: Vec::new(),
            total: 0,
            has_more: true,
        }
    }

    /// Replace the filters and drop the accumulated pages.
    pub fn set_filters(&mut self, filters: RunFilters) {
        if self.filters != filters {
            self.filters = filters;
            self.clear();
        }
    }

    /// Toggle the errors-only shortcut. Enabling it clears success-only,
    /// and vice versa via [`success_only`].
    ///
    /// [`success_only`]: Self::success_only
    pub fn errors_only(&mut self, on: bool) {
        let mut filters = self.filters.clone();
        filters.outcome = on.then_some(OutcomeFilter::ErrorsOnly);
        self.set_filters(filters);
    }

    /// Toggle the success-only shortcut, clearing errors-only.
    pub fn success_only(&mut self, on: bool) {
        let mut filters = self.filters.clone();
        filters.outcome = on.then_some(OutcomeFilter::SuccessOnly);
        self.set_filters(filters);
    }

    /// Runs accumulated so far, reverse chronological.
    pub fn runs(&self) -> &[PipelineRun] {
        &self.runs
    }

    /// Total matching records reported by the backend.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Whether another page is available.
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Drop the accumulated pages and start over from page one.
    pub fn clear(&mut self) {
        self.runs.clear();
        self.total = 0;
        self.next_page = 1;
        self.has_more = true;
    }

    /// Fetch the next page and append it. Returns the number of records
    /// added; 0 when the history is exhausted.
    pub async fn load_more(&mut self) -> Result<usize> {
        if !self.has_more {
            return Ok(0);
        }

        let query = self.filters.to_list_query(self.next_page, self.page_size);
        let page = self.client.runs().list(&query).await?;

        let added = page.runs.len();
        self.runs.extend(page.runs);
        self.total = page.total;
        self.has_more = page.has_more;
        self.next_page += 1;

        tracing::debug!(
            added,
            accumulated = self.runs.len(),
            total = self.total,
            "run history page loaded"
        );
        Ok(added)
    }

    /// Aggregate statistics for the current filters.
    pub async fn stats(&self) -> Result<RunStats> {
        let raw = self.client.runs().stats(&self.filters.to_stats_query()).await?;
        Ok(RunStats::from_counts(
            raw.total,
            raw.success,
            raw.errors,
            raw.avg_duration_ms,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_rate_is_zero_for_empty_history() {
        let stats = RunStats::from_counts(0, 0, 0, None);
        assert_eq!(stats.success_rate, 0.0);
        assert!(stats.avg_duration_ms.is_none());
    }

    #[test]
    fn success_rate_formula() {
        let stats = RunStats::from_counts(8, 6, 2, Some(1500.0));
        assert_eq!(stats.success_rate, 75.0);

        let stats = RunStats::from_counts(3, 3, 0, Some(10.0));
        assert_eq!(stats.success_rate, 100.0);

        let stats = RunStats::from_counts(4, 1, 3, None);
        assert_eq!(stats.success_rate, 25.0);
    }

    #[test]
    fn outcome_filters_are_mutually_exclusive() {
        let client = JobdeckClient::builder()
            .base_url("http://localhost:1")
            .build()
            .unwrap();
        let mut history = RunHistory::new(client);

        history.errors_only(true);
        assert_eq!(history.filters.outcome, Some(OutcomeFilter::ErrorsOnly));

        history.success_only(true);
        assert_eq!(history.filters.outcome, Some(OutcomeFilter::SuccessOnly));

        history.success_only(false);
        assert_eq!(history.filters.outcome, None);
    }

    #[test]
    fn query_serializes_only_active_filters() {
        let filters = RunFilters {
            pipeline_name: Some("job_search".into()),
            mine_only: true,
            outcome: Some(OutcomeFilter::ErrorsOnly),
            ..Default::default()
        };
        let query = filters.to_list_query(2, 25);
        assert_eq!(query.errors_only, Some(true));
        assert_eq!(query.success_only, None);
        assert_eq!(query.mine_only, Some(true));
        assert_eq!(query.page, Some(2));
    }
}
