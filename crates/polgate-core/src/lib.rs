//! polgate core: transport-free primitives for policy-aware constraint checks.
//!
//! This crate defines request-path decomposition, storage policy identifiers,
//! the validator contract, and the policy → validator registry. It carries no
//! runtime or server dependencies (only `http` types) so validators can be
//! written and tested without the gateway.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. All fallible paths
//! surface as `PolGateError`/`Result`, and every request-time lookup degrades
//! instead of failing.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod path;
pub mod policy;
pub mod registry;
pub mod validator;

/// Shared result type.
pub use error::{ErrorCode, PolGateError, Result};
pub use path::{Passthrough, RequestDescriptor};
pub use policy::{ContainerInfo, PolicyId, PolicyLookup};
pub use registry::{PolicyRegistry, Resolved, ValidatorCatalog, ValidatorRef};
pub use validator::{invoke, ObjectValidator, ObjectWrite, Rejection, ValidationOutcome};
