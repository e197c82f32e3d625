//! Gateway config loader (strict parsing).

pub mod schema;

use std::fs;

use polgate_core::error::{PolGateError, Result};

pub use schema::{ConstraintsSection, ContainerEntry, GatewayConfig, GatewaySection};

/// Env var naming the config file; falls back to `polgate.yaml`.
pub const CONFIG_PATH_ENV: &str = "POLGATE_CONFIG";

pub fn config_path() -> String {
    std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| "polgate.yaml".to_string())
}

pub fn load_from_file(path: &str) -> Result<GatewayConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| PolGateError::Config(format!("read config {path} failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<GatewayConfig> {
    let cfg: GatewayConfig = serde_yaml::from_str(s)
        .map_err(|e| PolGateError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
