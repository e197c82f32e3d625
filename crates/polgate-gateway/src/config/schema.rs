use std::collections::BTreeMap;
use std::net::SocketAddr;

use axum::http::Method;
use serde::Deserialize;
use serde_yaml::Value;

use polgate_core::error::{PolGateError, Result};
use polgate_core::registry::POLICY_OPTION_PREFIX;
use polgate_core::PolicyId;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default)]
    pub constraints: ConstraintsSection,

    #[serde(default)]
    pub containers: Vec<ContainerEntry>,
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(PolGateError::UnsupportedVersion(self.version));
        }

        self.gateway.validate()?;
        self.constraints.validate()?;

        for c in &self.containers {
            if c.account.is_empty() || c.container.is_empty() {
                return Err(PolGateError::Config(
                    "containers entries need a non-empty account and container".into(),
                ));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_metadata_timeout_ms")]
    pub metadata_timeout_ms: u64,

    #[serde(default = "default_write_methods")]
    pub write_methods: Vec<String>,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            metadata_timeout_ms: default_metadata_timeout_ms(),
            write_methods: default_write_methods(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        if !(50..=30000).contains(&self.metadata_timeout_ms) {
            return Err(PolGateError::Config(
                "gateway.metadata_timeout_ms must be between 50 and 30000".into(),
            ));
        }
        if self.write_methods.is_empty() {
            return Err(PolGateError::Config(
                "gateway.write_methods must not be empty".into(),
            ));
        }
        self.methods()?;
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            PolGateError::Config(format!("gateway.listen `{}` is not a socket address: {e}", self.listen))
        })
    }

    /// Parsed write methods (case-sensitive, as on the wire).
    pub fn methods(&self) -> Result<Vec<Method>> {
        self.write_methods
            .iter()
            .map(|m| {
                Method::from_bytes(m.as_bytes()).map_err(|_| {
                    PolGateError::Config(format!("gateway.write_methods: invalid method `{m}`"))
                })
            })
            .collect()
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_metadata_timeout_ms() -> u64 {
    2000
}
fn default_write_methods() -> Vec<String> {
    vec!["PUT".into()]
}

/// Filter options for the constraint stage.
///
/// Free-form on purpose: `default` and `policy_<id>` are recognized, anything
/// else is carried along unused.
#[derive(Debug, Deserialize)]
pub struct ConstraintsSection {
    #[serde(default = "default_validator")]
    pub default: String,

    #[serde(flatten)]
    pub options: BTreeMap<String, Value>,
}

impl Default for ConstraintsSection {
    fn default() -> Self {
        Self {
            default: default_validator(),
            options: BTreeMap::new(),
        }
    }
}

impl ConstraintsSection {
    pub fn validate(&self) -> Result<()> {
        if self.default.is_empty() {
            return Err(PolGateError::Config("constraints.default must not be empty".into()));
        }
        for (key, value) in &self.options {
            if !key.starts_with(POLICY_OPTION_PREFIX) {
                continue;
            }
            match value.as_str() {
                Some(name) if !name.is_empty() => {}
                _ => {
                    return Err(PolGateError::Config(format!(
                        "constraints.{key} must name a validator"
                    )))
                }
            }
        }
        Ok(())
    }

    /// String-valued options, in key order. Non-string values belong to
    /// unrecognized keys (validated above) and are skipped.
    pub fn string_options(&self) -> impl Iterator<Item = (&str, &str)> {
        self.options
            .iter()
            .filter_map(|(k, v)| v.as_str().map(|s| (k.as_str(), s)))
    }
}

fn default_validator() -> String {
    "standard".into()
}

/// A container known to the static metadata directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContainerEntry {
    pub account: String,
    pub container: String,
    #[serde(default)]
    pub storage_policy: Option<PolicyId>,
}
