//! Container metadata collaborator and the policy resolver on top of it.
//!
//! The resolver never fails: lookup errors, timeouts and containers without a
//! policy all come back as [`PolicyLookup::Unknown`], which the registry maps
//! to its default validator.

pub mod directory;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use polgate_core::error::Result;
use polgate_core::{ContainerInfo, PolicyLookup};

use crate::obs::metrics::GatewayMetrics;

pub use directory::StaticContainerDirectory;

/// Source of container attributes (a proxy cache, a backend HEAD, a table).
///
/// Caching and retries belong to implementations, not to callers.
#[async_trait]
pub trait ContainerInfoSource: Send + Sync {
    async fn container_info(&self, account: &str, container: &str) -> Result<ContainerInfo>;
}

/// Resolves the storage policy governing a container.
pub struct PolicyResolver {
    source: Arc<dyn ContainerInfoSource>,
    timeout: Duration,
    metrics: Arc<GatewayMetrics>,
}

impl PolicyResolver {
    pub fn new(
        source: Arc<dyn ContainerInfoSource>,
        timeout: Duration,
        metrics: Arc<GatewayMetrics>,
    ) -> Self {
        Self {
            source,
            timeout,
            metrics,
        }
    }

    /// One bounded lookup, no retries.
    pub async fn resolve_policy(&self, account: &str, container: &str) -> PolicyLookup {
        let lookup = tokio::time::timeout(self.timeout, self.source.container_info(account, container)).await;

        let reason = match lookup {
            Ok(Ok(info)) => match PolicyLookup::from(info) {
                PolicyLookup::Known(id) => return PolicyLookup::Known(id),
                PolicyLookup::Unknown => {
                    tracing::debug!(%account, %container, "container reports no storage policy");
                    "no_policy"
                }
            },
            Ok(Err(e)) => {
                tracing::warn!(%account, %container, error = %e, "container metadata lookup failed");
                "error"
            }
            Err(_) => {
                tracing::warn!(
                    %account,
                    %container,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "container metadata lookup timed out"
                );
                "timeout"
            }
        };

        self.metrics.metadata_fallbacks.inc(&[("reason", reason)]);
        PolicyLookup::Unknown
    }
}
