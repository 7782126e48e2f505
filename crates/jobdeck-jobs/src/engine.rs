//! Status transition engine.

use std::sync::Arc;

use tracing::{debug, info};

use jobdeck_client::{JobUpdate, JobdeckClient};
use jobdeck_types::{Job, JobStatus};

use crate::error::TransitionError;
use crate::generator::{DocumentGenerator, PdfGenerator};

/// Validates and applies job status changes.
///
/// The client-side legality check mirrors the server's; rejecting locally
/// keeps the failure synchronous and avoids a doomed round trip. The server
/// remains the authority.
pub struct StatusEngine {
    client: JobdeckClient,
    generator: Arc<dyn DocumentGenerator>,
}

impl StatusEngine {
    /// Engine with the production PDF generator.
    pub fn new(client: JobdeckClient) -> Self {
        let generator = Arc::new(PdfGenerator::new(client.clone()));
        Self { client, generator }
    }

    /// Engine with a custom document generator.
    pub fn with_generator(client: JobdeckClient, generator: Arc<dyn DocumentGenerator>) -> Self {
        Self { client, generator }
    }

    /// Whether `from → to` is a legal transition.
    pub fn can_transition(from: JobStatus, to: JobStatus) -> bool {
        JobStatus::can_transition(from, to)
    }

    /// Apply a status transition, running the document-generation side
    /// effect on the `prepped → reviewed` edge.
    ///
    /// Illegal transitions are rejected before any write. When generation
    /// fails, no write happens either — the job stays at `prepped` and the
    /// error is distinct from a plain rejection so the caller can offer
    /// "retry generation" instead of "pick a different status".
    pub async fn apply_transition(&self, job: &Job, to: JobStatus) -> Result<Job, TransitionError> {
        if !Self::can_transition(job.status, to) {
            return Err(TransitionError::Illegal {
                from: job.status,
                to,
            });
        }

        let mut update = JobUpdate {
            status: Some(to),
            ..Default::default()
        };

        if job.status == JobStatus::Prepped && to == JobStatus::Reviewed {
            debug!(job = %job.id, "generating cover letter before review");
            let generated_at = self.generator.generate_cover_letter(&job.id).await?;
            update.cover_letter_generated_at = Some(generated_at);
        }

        let updated = self.client.jobs().update(&job.id, &update).await?;
        info!(
            job = %job.id,
            from = job.status.label(),
            to = to.label(),
            "status transition applied"
        );
        Ok(updated)
    }

    /// Dismiss every job currently in `status` from the active view.
    ///
    /// Not a status transition: records are preserved server-side so the
    /// same postings are not re-ingested, and the count of affected jobs is
    /// returned. Confirmation is the caller's responsibility.
    pub async fn dismiss_by_status(&self, status: JobStatus) -> Result<u64, TransitionError> {
        let response = self.client.jobs().dismiss_by_status(status).await?;
        info!(status = status.label(), count = response.count, "jobs dismissed");
        Ok(response.count)
    }
}
