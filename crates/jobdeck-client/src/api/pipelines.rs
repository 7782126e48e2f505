//! Pipelines API.

use serde_json::{Map, Value};

use jobdeck_types::PipelineDescriptor;

use crate::client::JobdeckClient;
use crate::error::Result;
use crate::types::ExecuteResponse;

/// Pipelines API client.
pub struct PipelinesApi {
    client: JobdeckClient,
}

impl PipelinesApi {
    pub(crate) fn new(client: JobdeckClient) -> Self {
        Self { client }
    }

    /// List all registered pipeline descriptors.
    pub async fn list(&self) -> Result<Vec<PipelineDescriptor>> {
        self.client.get("pipelines").await
    }

    /// Execute a pipeline and await its result.
    ///
    /// This is a single submit-and-await round trip; it returns when the run
    /// reaches a terminal status. Application-level failures come back as
    /// `success: false`, not as an `Err`.
    pub async fn execute(&self, name: &str, input: &Map<String, Value>) -> Result<ExecuteResponse> {
        self.client
            .post_execute(&format!("pipelines/{}/execute", name), input)
            .await
    }
}
