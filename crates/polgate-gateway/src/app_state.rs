//! Shared application state for the polgate gateway.
//!
//! Everything here is built once at startup and read-only afterwards: the
//! registry is compiled against the validator catalog before the listener
//! binds, so a bad validator name stops the process instead of a request.

use std::sync::Arc;
use std::time::Duration;

use polgate_core::error::Result;
use polgate_core::{PolicyRegistry, ValidatorCatalog};

use crate::config::GatewayConfig;
use crate::dispatch::ConstraintStage;
use crate::metadata::{ContainerInfoSource, PolicyResolver, StaticContainerDirectory};
use crate::obs::metrics::GatewayMetrics;
use crate::validators;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    stage: ConstraintStage,
    metrics: Arc<GatewayMetrics>,
}

impl AppState {
    /// Build state with the built-in validators and the config's container table.
    pub fn from_config(cfg: GatewayConfig) -> Result<Self> {
        let directory = StaticContainerDirectory::from_entries(&cfg.containers);
        Self::new(&cfg, &validators::builtin_catalog(), Arc::new(directory))
    }

    /// Build state with an explicit catalog and metadata source.
    pub fn new(
        cfg: &GatewayConfig,
        catalog: &ValidatorCatalog,
        source: Arc<dyn ContainerInfoSource>,
    ) -> Result<Self> {
        let registry = PolicyRegistry::compile(
            cfg.constraints.string_options(),
            &cfg.constraints.default,
            catalog,
        )?;

        tracing::info!(
            default = registry.default_validator().name(),
            policies = registry.len(),
            "constraint registry compiled"
        );
        for (policy, validator) in registry.bindings() {
            tracing::info!(%policy, validator = validator.name(), "policy bound");
        }

        let metrics = Arc::new(GatewayMetrics::default());
        let resolver = PolicyResolver::new(
            source,
            Duration::from_millis(cfg.gateway.metadata_timeout_ms),
            Arc::clone(&metrics),
        );
        let stage = ConstraintStage::new(
            cfg.gateway.methods()?,
            Arc::new(registry),
            resolver,
            Arc::clone(&metrics),
        );

        Ok(Self {
            inner: Arc::new(AppStateInner {
                stage,
                metrics,
            }),
        })
    }

    pub fn stage(&self) -> &ConstraintStage {
        &self.inner.stage
    }

    pub fn metrics(&self) -> &GatewayMetrics {
        &self.inner.metrics
    }
}
