//! Shared error type across polgate crates.
//!
//! Nothing on the request path returns these: path, metadata and validator
//! problems all degrade into a pipeline decision. Errors surface at startup
//! (config, registry compilation) and from metadata collaborators before the
//! resolver absorbs them.

use thiserror::Error;

/// Stable machine-readable error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Configuration failed to parse or validate.
    ConfigInvalid,
    /// Unsupported config schema version.
    UnsupportedVersion,
    /// A configured validator name is not in the catalog.
    UnknownValidator,
    /// Container metadata could not be fetched.
    MetadataUnavailable,
    /// Internal error.
    Internal,
}

impl ErrorCode {
    /// String representation used in logs and tests.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::ConfigInvalid => "CONFIG_INVALID",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::UnknownValidator => "UNKNOWN_VALIDATOR",
            ErrorCode::MetadataUnavailable => "METADATA_UNAVAILABLE",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, PolGateError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum PolGateError {
    #[error("invalid config: {0}")]
    Config(String),
    #[error("unsupported config version: {0}")]
    UnsupportedVersion(u32),
    #[error("unknown validator `{name}` (configured for {option})")]
    UnknownValidator { option: String, name: String },
    #[error("container metadata unavailable: {0}")]
    Metadata(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl PolGateError {
    /// Map the error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            PolGateError::Config(_) => ErrorCode::ConfigInvalid,
            PolGateError::UnsupportedVersion(_) => ErrorCode::UnsupportedVersion,
            PolGateError::UnknownValidator { .. } => ErrorCode::UnknownValidator,
            PolGateError::Metadata(_) => ErrorCode::MetadataUnavailable,
            PolGateError::Internal(_) => ErrorCode::Internal,
        }
    }
}
