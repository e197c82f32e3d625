//! Generic object-store limits: name length, declared size, framing.

use axum::http::header::{CONTENT_LENGTH, TRANSFER_ENCODING};
use axum::http::StatusCode;

use polgate_core::{ObjectValidator, ObjectWrite, Rejection};

pub const MAX_OBJECT_NAME_BYTES: usize = 1024;
/// 5 GiB.
pub const MAX_FILE_SIZE: u64 = 5 * 1024 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct StandardConstraints {
    pub max_object_name_bytes: usize,
    pub max_file_size: u64,
}

impl Default for StandardConstraints {
    fn default() -> Self {
        Self {
            max_object_name_bytes: MAX_OBJECT_NAME_BYTES,
            max_file_size: MAX_FILE_SIZE,
        }
    }
}

impl StandardConstraints {
    fn check_length(&self, req: &ObjectWrite<'_>) -> Option<Rejection> {
        let Some(raw) = req.headers.get(CONTENT_LENGTH) else {
            let chunked = req
                .headers
                .get(TRANSFER_ENCODING)
                .and_then(|v| v.to_str().ok())
                .is_some_and(|v| v.eq_ignore_ascii_case("chunked"));
            if chunked {
                return None;
            }
            return Some(Rejection::new(
                StatusCode::LENGTH_REQUIRED,
                "Missing Content-Length header.",
            ));
        };

        let len = raw.to_str().ok().and_then(|s| s.trim().parse::<u64>().ok());
        match len {
            None => Some(Rejection::new(
                StatusCode::BAD_REQUEST,
                "Invalid Content-Length header value",
            )),
            Some(n) if n > self.max_file_size => Some(Rejection::new(
                StatusCode::PAYLOAD_TOO_LARGE,
                "Your request is too large.",
            )),
            Some(_) => None,
        }
    }
}

impl ObjectValidator for StandardConstraints {
    fn check_object_creation(&self, req: &ObjectWrite<'_>, object_name: &str) -> Option<Rejection> {
        if let Some(r) = self.check_length(req) {
            return Some(r);
        }
        if object_name.len() > self.max_object_name_bytes {
            return Some(Rejection::new(
                StatusCode::BAD_REQUEST,
                format!(
                    "Object name length of {} longer than {}",
                    object_name.len(),
                    self.max_object_name_bytes
                ),
            ));
        }
        None
    }
}
