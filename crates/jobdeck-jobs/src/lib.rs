//! Status workflow engine for tracked job applications.
//!
//! Job applications move through a fixed status graph (`new → prepped →
//! reviewed → applied → interviewing`, with `rejected` off the last two).
//! This crate validates transitions before any write, runs the
//! document-generation side effect on the `prepped → reviewed` edge, and
//! provides bulk dismissal that keeps records around to block duplicate
//! re-ingestion.

pub mod engine;
pub mod error;
pub mod generator;

pub use engine::StatusEngine;
pub use error::TransitionError;
pub use generator::{DocumentGenerator, GenerationError, PdfGenerator};
