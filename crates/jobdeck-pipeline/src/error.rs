//! Error types for the pipeline execution core.

use thiserror::Error;

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors that can occur when invoking a pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// No descriptor with this name in the registry.
    #[error("Unknown pipeline: {0}")]
    UnknownPipeline(String),

    /// Required input fields are missing. Raised before any network call.
    #[error("Missing required fields for '{pipeline}': {}", fields.join(", "))]
    MissingFields {
        pipeline: String,
        fields: Vec<String>,
    },

    /// An invocation for this pipeline is already in flight.
    #[error("Pipeline '{0}' already has a run in flight")]
    AlreadyRunning(String),

    /// Backend API error.
    #[error("API error: {0}")]
    Api(#[from] jobdeck_client::Error),
}
