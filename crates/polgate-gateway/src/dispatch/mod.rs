//! Dispatch stage exports.
//!
//! Re-exports the constraint stage and its axum middleware so the router can
//! mount it in front of the downstream pipeline.

pub mod stage;

pub use stage::{enforce, rejection_response, ConstraintStage, StageDecision};
