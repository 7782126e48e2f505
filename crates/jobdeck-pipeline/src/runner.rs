//! Pipeline invocation: validate, submit, await, record.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use jobdeck_client::JobdeckClient;
use jobdeck_types::{ExecuteFailure, PipelineDescriptor};

use crate::error::{PipelineError, Result};
use crate::tracker::{ExecutionState, ExecutionTracker, RunResult};

/// Submits pipelines for execution against the backend and records their
/// lifecycle in an [`ExecutionTracker`].
///
/// Descriptors are cached from `GET /pipelines` and refreshed lazily when an
/// unknown name is invoked.
pub struct PipelineRunner {
    client: JobdeckClient,
    tracker: Arc<ExecutionTracker>,
    descriptors: RwLock<HashMap<String, PipelineDescriptor>>,
}

impl PipelineRunner {
    pub fn new(client: JobdeckClient) -> Self {
        Self {
            client,
            tracker: Arc::new(ExecutionTracker::new()),
            descriptors: RwLock::new(HashMap::new()),
        }
    }

    /// Shared handle to the execution state store.
    pub fn tracker(&self) -> Arc<ExecutionTracker> {
        Arc::clone(&self.tracker)
    }

    /// Fetch the pipeline catalog and replace the cached descriptors.
    pub async fn refresh_catalog(&self) -> Result<Vec<PipelineDescriptor>> {
        let pipelines = self.client.pipelines().list().await?;
        debug!(count = pipelines.len(), "pipeline catalog refreshed");
        let mut cache = self.descriptors.write();
        cache.clear();
        for p in &pipelines {
            cache.insert(p.name.clone(), p.clone());
        }
        Ok(pipelines)
    }

    /// Cached descriptor for `name`, if known.
    pub fn descriptor(&self, name: &str) -> Option<PipelineDescriptor> {
        self.descriptors.read().get(name).cloned()
    }

    /// Execution state for `name`; idle if never invoked.
    pub fn state(&self, name: &str) -> ExecutionState {
        self.tracker.get(name)
    }

    /// Clear the slot for `name` so it can be run again.
    pub fn reset(&self, name: &str) {
        self.tracker.reset(name);
    }

    /// Invoke a pipeline and await its terminal state.
    ///
    /// Fails fast — before any network call — when a required input field is
    /// absent, and rejects the call when an invocation for the same name is
    /// already in flight. Transport failures and application-level failures
    /// both land in the returned state as `status = Error`; the distinction
    /// lives in the typed [`ExecuteFailure`] carried by the result.
    pub async fn invoke(&self, name: &str, input: Map<String, Value>) -> Result<ExecutionState> {
        let descriptor = match self.descriptor(name) {
            Some(d) => d,
            None => {
                self.refresh_catalog().await?;
                self.descriptor(name)
                    .ok_or_else(|| PipelineError::UnknownPipeline(name.to_string()))?
            }
        };

        let missing = descriptor.missing_required(&input);
        if !missing.is_empty() {
            return Err(PipelineError::MissingFields {
                pipeline: name.to_string(),
                fields: missing,
            });
        }

        let token = self
            .tracker
            .start(name)
            .ok_or_else(|| PipelineError::AlreadyRunning(name.to_string()))?;
        debug!(pipeline = name, "invocation submitted");

        let result = match self.client.pipelines().execute(name, &input).await {
            Ok(response) if response.success => RunResult::Success {
                output: response.output,
                metadata: response.metadata,
            },
            Ok(response) => {
                let raw = response.error.as_deref().unwrap_or("pipeline failed");
                RunResult::Failure {
                    error: ExecuteFailure::from_error_string(raw),
                }
            }
            Err(err) => {
                warn!(pipeline = name, error = %err, "transport failure");
                RunResult::Failure {
                    error: ExecuteFailure::Message {
                        message: err.to_string(),
                    },
                }
            }
        };

        self.tracker.complete(&token, result);
        Ok(self.tracker.get(name))
    }
}
