//! Limits for policies whose objects land on a POSIX filesystem.
//!
//! Object names become paths, so every `/`-separated component must be a
//! legal file name. Size and framing checks are delegated to
//! [`StandardConstraints`].

use axum::http::StatusCode;

use polgate_core::{ObjectValidator, ObjectWrite, Rejection};

use super::StandardConstraints;

pub const MAX_COMPONENT_BYTES: usize = 255;

#[derive(Debug, Clone)]
pub struct PosixConstraints {
    pub max_component_bytes: usize,
    pub base: StandardConstraints,
}

impl Default for PosixConstraints {
    fn default() -> Self {
        Self {
            max_component_bytes: MAX_COMPONENT_BYTES,
            base: StandardConstraints::default(),
        }
    }
}

impl PosixConstraints {
    fn check_name(&self, object_name: &str) -> Option<String> {
        if object_name.ends_with('/') {
            return Some(format!("Object name cannot end with '/': {object_name}"));
        }
        for component in object_name.split('/') {
            match component {
                "" => return Some(format!("Object name contains an empty path component: {object_name}")),
                "." | ".." => {
                    return Some(format!("Object name cannot contain `{component}` components"))
                }
                c if c.len() > self.max_component_bytes => {
                    return Some(format!(
                        "Object name component of length {} longer than {}",
                        c.len(),
                        self.max_component_bytes
                    ))
                }
                _ => {}
            }
        }
        None
    }
}

impl ObjectValidator for PosixConstraints {
    fn check_object_creation(&self, req: &ObjectWrite<'_>, object_name: &str) -> Option<Rejection> {
        if let Some(msg) = self.check_name(object_name) {
            return Some(Rejection::new(StatusCode::BAD_REQUEST, msg));
        }
        self.base.check_object_creation(req, object_name)
    }
}
