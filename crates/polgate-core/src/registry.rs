//! Validator catalog and the policy → validator registry.
//!
//! Validators are compiled in and registered by name in a [`ValidatorCatalog`].
//! Configuration refers to them by name; [`PolicyRegistry::compile`] resolves
//! every name once at startup so that request-time dispatch is a plain map
//! lookup and a misconfigured name can never surface mid-request.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use crate::error::{PolGateError, Result};
use crate::policy::{PolicyId, PolicyLookup};
use crate::validator::ObjectValidator;

/// Config option prefix for per-policy validators (`policy_2: posix`).
pub const POLICY_OPTION_PREFIX: &str = "policy_";

/// A named, resolved validator handle.
#[derive(Clone)]
pub struct ValidatorRef {
    name: Arc<str>,
    handle: Arc<dyn ObjectValidator>,
}

impl ValidatorRef {
    pub fn new(name: &str, handle: Arc<dyn ObjectValidator>) -> Self {
        Self {
            name: Arc::from(name),
            handle,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn handle(&self) -> &dyn ObjectValidator {
        self.handle.as_ref()
    }
}

impl fmt::Debug for ValidatorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ValidatorRef").field(&self.name).finish()
    }
}

/// Name → validator table of everything the process can dispatch to.
#[derive(Default)]
pub struct ValidatorCatalog {
    validators: BTreeMap<String, ValidatorRef>,
}

impl ValidatorCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: &str, validator: Arc<dyn ObjectValidator>) {
        self.validators
            .insert(name.to_string(), ValidatorRef::new(name, validator));
    }

    pub fn get(&self, name: &str) -> Option<ValidatorRef> {
        self.validators.get(name).cloned()
    }

    pub fn names(&self) -> Vec<&str> {
        self.validators.keys().map(String::as_str).collect()
    }

    fn require(&self, option: &str, name: &str) -> Result<ValidatorRef> {
        self.get(name).ok_or_else(|| PolGateError::UnknownValidator {
            option: option.to_string(),
            name: name.to_string(),
        })
    }
}

/// Result of a registry lookup. Never absent: unmapped policies get the default.
#[derive(Debug, Clone, Copy)]
pub enum Resolved<'a> {
    Mapped(&'a ValidatorRef),
    Default(&'a ValidatorRef),
}

impl<'a> Resolved<'a> {
    pub fn validator(self) -> &'a ValidatorRef {
        match self {
            Resolved::Mapped(v) | Resolved::Default(v) => v,
        }
    }

    pub fn is_default(self) -> bool {
        matches!(self, Resolved::Default(_))
    }
}

/// Immutable policy → validator table. Build once, share via `Arc`.
#[derive(Debug, Clone)]
pub struct PolicyRegistry {
    entries: HashMap<PolicyId, ValidatorRef>,
    default: ValidatorRef,
}

impl PolicyRegistry {
    pub fn new(default: ValidatorRef) -> Self {
        Self {
            entries: HashMap::new(),
            default,
        }
    }

    /// Bind `policy` to `validator`, replacing any earlier binding.
    pub fn register(&mut self, policy: PolicyId, validator: ValidatorRef) {
        self.entries.insert(policy, validator);
    }

    /// Build from filter options.
    ///
    /// `policy_<id>` options bind policy `<id>`; every other key is ignored.
    /// Unknown validator names fail the whole build.
    pub fn compile<'a, I>(options: I, default_name: &str, catalog: &ValidatorCatalog) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let default = catalog.require("default", default_name)?;
        let mut registry = Self::new(default);

        for (key, name) in options {
            let Some(id) = key.strip_prefix(POLICY_OPTION_PREFIX) else {
                tracing::debug!(option = %key, "ignoring non-policy constraints option");
                continue;
            };
            if id.is_empty() {
                return Err(PolGateError::Config(format!(
                    "option `{key}` is missing a policy id"
                )));
            }
            let validator = catalog.require(key, name)?;
            registry.register(PolicyId::new(id), validator);
        }

        Ok(registry)
    }

    pub fn resolve(&self, lookup: &PolicyLookup) -> Resolved<'_> {
        lookup
            .policy()
            .and_then(|id| self.entries.get(id))
            .map_or(Resolved::Default(&self.default), Resolved::Mapped)
    }

    pub fn default_validator(&self) -> &ValidatorRef {
        &self.default
    }

    /// Explicit bindings, for startup logging.
    pub fn bindings(&self) -> impl Iterator<Item = (&PolicyId, &ValidatorRef)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
