//! Jobs API.

use jobdeck_types::{Job, JobStatus};

use crate::client::JobdeckClient;
use crate::error::Result;
use crate::types::{DismissByStatusRequest, DismissResponse, GeneratePdfResponse, JobUpdate};

/// Query parameters for listing jobs.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct ListJobsQuery {
    /// Filter by current status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,
    /// Include dismissed jobs (excluded from the active view by default).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_dismissed: Option<bool>,
}

/// Jobs API client.
pub struct JobsApi {
    client: JobdeckClient,
}

impl JobsApi {
    pub(crate) fn new(client: JobdeckClient) -> Self {
        Self { client }
    }

    /// List jobs in the active view.
    pub async fn list(&self, query: &ListJobsQuery) -> Result<Vec<Job>> {
        self.client.get_with_query("jobs", query).await
    }

    /// Get a job by id. Dismissed jobs stay resolvable here.
    pub async fn get(&self, id: &str) -> Result<Job> {
        self.client.get(&format!("jobs/{}", id)).await
    }

    /// Apply a partial update. The server enforces transition legality on
    /// status changes.
    pub async fn update(&self, id: &str, update: &JobUpdate) -> Result<Job> {
        self.client.patch(&format!("jobs/{}", id), update).await
    }

    /// Trigger cover-letter PDF generation for a job.
    pub async fn generate_cover_letter_pdf(&self, id: &str) -> Result<GeneratePdfResponse> {
        self.client
            .post(
                &format!("jobs/{}/cover-letter/generate-pdf", id),
                &serde_json::json!({}),
            )
            .await
    }

    /// Dismiss every job currently in the given status. Records are kept so
    /// upstream re-ingestion does not duplicate them.
    pub async fn dismiss_by_status(&self, status: JobStatus) -> Result<DismissResponse> {
        self.client
            .post("jobs/dismiss-by-status", &DismissByStatusRequest { status })
            .await
    }
}
