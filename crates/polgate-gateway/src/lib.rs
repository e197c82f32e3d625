//! polgate gateway library entry.
//!
//! Wires config, the container metadata collaborator, the validator catalog
//! and the constraint stage into an axum pipeline. It is consumed by the
//! binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod dispatch;
pub mod metadata;
pub mod obs;
pub mod ops;
pub mod router;
pub mod validators;
