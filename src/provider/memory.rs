//! Fixed in-memory provider.

use indexmap::IndexMap;

use crate::error::{CairnError, Result};
use crate::provider::ValueProvider;

/// Provider backed by owned plain and secret tables.
///
/// Useful as a source of defaults when no external backend is reachable,
/// and as the substitute implementation in tests.
///
/// # Example
///
/// ```
/// use cairn::provider::{MemoryProvider, ValueProvider};
///
/// let mut provider = MemoryProvider::new();
/// provider.set_plain("service/port", "8080");
/// provider.set_secret("service/api-key", "hunter2");
///
/// assert_eq!(provider.resolve_plain(&(), "service/port").unwrap(), "8080");
/// assert_eq!(provider.resolve_secret("service/api-key").unwrap(), "hunter2");
/// assert!(provider.resolve_plain(&(), "unknown").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryProvider {
    plain: IndexMap<String, String>,
    secrets: IndexMap<String, String>,
}

impl MemoryProvider {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a plain value under an external name.
    pub fn set_plain(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.plain.insert(name.into(), value.into());
    }

    /// Add a secret value under an external name.
    pub fn set_secret(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.secrets.insert(name.into(), value.into());
    }
}

impl ValueProvider for MemoryProvider {
    type Scope = ();
    type Value = String;

    fn resolve_plain(&self, _scope: &(), name: &str) -> Result<String> {
        self.plain
            .get(name)
            .cloned()
            .ok_or_else(|| CairnError::ResolveFailed {
                name: name.to_string(),
                message: "no such parameter".to_string(),
            })
    }

    fn resolve_secret(&self, name: &str) -> Result<String> {
        self.secrets
            .get(name)
            .cloned()
            .ok_or_else(|| CairnError::ResolveFailed {
                name: name.to_string(),
                message: "no such secret".to_string(),
            })
    }
}
