//! Document-generation collaborator seam.

use async_trait::async_trait;
use thiserror::Error;

use jobdeck_client::JobdeckClient;
use jobdeck_types::Timestamp;

/// Document generation failed; the transition that requested it must not
/// commit.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct GenerationError(pub String);

/// Generates the cover-letter document for a job.
///
/// A trait so the transition engine can be exercised without the backend;
/// production uses [`PdfGenerator`].
#[async_trait]
pub trait DocumentGenerator: Send + Sync {
    /// Generate the document and return the generation timestamp.
    async fn generate_cover_letter(&self, job_id: &str) -> Result<Timestamp, GenerationError>;
}

/// Backend-backed generator hitting `POST /jobs/{id}/cover-letter/generate-pdf`.
pub struct PdfGenerator {
    client: JobdeckClient,
}

impl PdfGenerator {
    pub fn new(client: JobdeckClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DocumentGenerator for PdfGenerator {
    async fn generate_cover_letter(&self, job_id: &str) -> Result<Timestamp, GenerationError> {
        self.client
            .jobs()
            .generate_cover_letter_pdf(job_id)
            .await
            .map(|response| response.generated_at)
            .map_err(|err| GenerationError(err.to_string()))
    }
}
