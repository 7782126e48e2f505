//! Error types for the status workflow engine.

use thiserror::Error;

use jobdeck_types::JobStatus;

use crate::generator::GenerationError;

/// Errors from applying a status transition.
///
/// `Illegal` and `Generation` are deliberately distinct: the first means
/// "pick a different status", the second means "the status was fine but the
/// document step failed — retry generation".
#[derive(Debug, Error)]
pub enum TransitionError {
    /// The transition graph forbids this edge. Rejected before any write.
    #[error("Illegal transition: {} -> {}", from.label(), to.label())]
    Illegal { from: JobStatus, to: JobStatus },

    /// Document generation failed on the prepped → reviewed edge; the
    /// status write never happened.
    #[error("Cover letter generation failed: {0}")]
    Generation(#[from] GenerationError),

    /// Backend API error.
    #[error("API error: {0}")]
    Api(#[from] jobdeck_client::Error),
}
