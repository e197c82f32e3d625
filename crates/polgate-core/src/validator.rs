//! Validator contract and the invoker that interprets its verdict.

use bytes::Bytes;
use http::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use http::{HeaderMap, StatusCode, Uri};

use crate::path::RequestDescriptor;

/// Read-only view of an object write handed to validators.
#[derive(Debug, Clone, Copy)]
pub struct ObjectWrite<'a> {
    pub target: &'a RequestDescriptor,
    pub uri: &'a Uri,
    pub headers: &'a HeaderMap,
}

/// A response a validator wants emitted instead of the write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl Rejection {
    /// Plain-text rejection.
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain; charset=utf-8"));
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// Per-policy constraint check.
///
/// Returning `None` accepts the write. Implementations must not block on I/O.
pub trait ObjectValidator: Send + Sync {
    fn check_object_creation(&self, req: &ObjectWrite<'_>, object_name: &str) -> Option<Rejection>;
}

/// Verdict for one write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Allowed,
    Rejected(Rejection),
}

impl ValidationOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationOutcome::Allowed => "allowed",
            ValidationOutcome::Rejected(_) => "rejected",
        }
    }
}

/// Run `validator` once against `req`.
pub fn invoke(
    validator: &dyn ObjectValidator,
    req: &ObjectWrite<'_>,
    object_name: &str,
) -> ValidationOutcome {
    match validator.check_object_creation(req, object_name) {
        None => ValidationOutcome::Allowed,
        Some(rejection) => ValidationOutcome::Rejected(rejection),
    }
}
