//! Storage policy identifiers and container metadata.

use std::fmt;

use serde::{Deserialize, Deserializer};

/// Opaque storage policy identifier (`"0"`, `"2"`, `"gold"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PolicyId(String);

impl PolicyId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PolicyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PolicyId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

// Policy indexes are usually written as bare integers in YAML.
impl<'de> Deserialize<'de> for PolicyId {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Index(u64),
            Name(String),
        }

        Ok(match Repr::deserialize(d)? {
            Repr::Index(n) => PolicyId(n.to_string()),
            Repr::Name(s) => PolicyId(s),
        })
    }
}

/// Container attributes as reported by a metadata collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerInfo {
    /// Governing storage policy; `None` when the collaborator does not know.
    pub storage_policy: Option<PolicyId>,
}

/// Outcome of resolving a container's policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyLookup {
    Known(PolicyId),
    /// Lookup failed, timed out, or reported no policy.
    Unknown,
}

impl PolicyLookup {
    pub fn policy(&self) -> Option<&PolicyId> {
        match self {
            PolicyLookup::Known(id) => Some(id),
            PolicyLookup::Unknown => None,
        }
    }

    /// Label for logs and metrics.
    pub fn label(&self) -> &str {
        match self {
            PolicyLookup::Known(id) => id.as_str(),
            PolicyLookup::Unknown => "unknown",
        }
    }
}

impl From<ContainerInfo> for PolicyLookup {
    fn from(info: ContainerInfo) -> Self {
        match info.storage_policy {
            Some(id) if !id.as_str().is_empty() => PolicyLookup::Known(id),
            _ => PolicyLookup::Unknown,
        }
    }
}
