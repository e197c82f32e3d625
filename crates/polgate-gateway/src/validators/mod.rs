//! Built-in validators.
//!
//! These are the constraint checks this binary can dispatch to. Config refers
//! to them by the names registered in [`builtin_catalog`].

pub mod posix;
pub mod standard;

use std::sync::Arc;

use polgate_core::ValidatorCatalog;

pub use posix::PosixConstraints;
pub use standard::StandardConstraints;

pub const STANDARD: &str = "standard";
pub const POSIX: &str = "posix";

pub fn builtin_catalog() -> ValidatorCatalog {
    let mut catalog = ValidatorCatalog::new();
    catalog.register(STANDARD, Arc::new(StandardConstraints::default()));
    catalog.register(POSIX, Arc::new(PosixConstraints::default()));
    catalog
}
