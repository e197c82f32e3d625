//! Config-backed container directory.

use std::collections::HashMap;

use async_trait::async_trait;

use polgate_core::error::Result;
use polgate_core::ContainerInfo;

use super::ContainerInfoSource;
use crate::config::ContainerEntry;

/// Fixed account/container → policy table loaded from config.
///
/// Containers that are not listed report no policy.
#[derive(Debug, Default)]
pub struct StaticContainerDirectory {
    containers: HashMap<(String, String), ContainerInfo>,
}

impl StaticContainerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: &[ContainerEntry]) -> Self {
        let mut dir = Self::new();
        for e in entries {
            dir.insert(
                &e.account,
                &e.container,
                ContainerInfo {
                    storage_policy: e.storage_policy.clone(),
                },
            );
        }
        dir
    }

    pub fn insert(&mut self, account: &str, container: &str, info: ContainerInfo) {
        self.containers
            .insert((account.to_string(), container.to_string()), info);
    }
}

#[async_trait]
impl ContainerInfoSource for StaticContainerDirectory {
    async fn container_info(&self, account: &str, container: &str) -> Result<ContainerInfo> {
        Ok(self
            .containers
            .get(&(account.to_string(), container.to_string()))
            .cloned()
            .unwrap_or_default())
    }
}
