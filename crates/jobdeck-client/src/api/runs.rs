//! Pipeline-runs API.

use jobdeck_types::{RunStatus, TriggerType};

use crate::client::JobdeckClient;
use crate::error::Result;
use crate::types::{ListRunsResponse, RunStatsResponse};

/// Query parameters for listing runs.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct ListRunsQuery {
    /// Filter by pipeline name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipeline_name: Option<String>,
    /// Filter by run status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RunStatus>,
    /// Filter by trigger type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_type: Option<TriggerType>,
    /// Only runs triggered by the authenticated caller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mine_only: Option<bool>,
    /// Only failed runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors_only: Option<bool>,
    /// Only successful runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_only: Option<bool>,
    /// 1-based page number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// Query parameters for run statistics. Same filters as listing, minus
/// pagination.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct RunStatsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipeline_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RunStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_type: Option<TriggerType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mine_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_only: Option<bool>,
}

/// Pipeline-runs API client.
pub struct RunsApi {
    client: JobdeckClient,
}

impl RunsApi {
    pub(crate) fn new(client: JobdeckClient) -> Self {
        Self { client }
    }

    /// List runs, reverse chronological by creation time.
    pub async fn list(&self, query: &ListRunsQuery) -> Result<ListRunsResponse> {
        self.client.get_with_query("pipeline-runs", query).await
    }

    /// Aggregate statistics over runs matching the filters.
    pub async fn stats(&self, query: &RunStatsQuery) -> Result<RunStatsResponse> {
        self.client
            .get_with_query("pipeline-runs/stats", query)
            .await
    }
}
