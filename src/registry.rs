//! Deferred value registry.
//!
//! [`ValueRegistry`] accumulates resolved value handles during a single
//! configuration-assembly pass and serves them back under two independent
//! identifiers:
//!
//! - the external **name** the backing provider knows the value by
//!   (typically a hierarchical path)
//! - a caller-chosen logical **key** used by the rest of the assembly code
//!
//! Every load delegates resolution to the injected [`ValueProvider`] and
//! records the returned handle in both maps. Loads never short-circuit on a
//! previously seen name; the provider is invoked again and the new handle
//! replaces the old one.

use indexmap::IndexMap;

use crate::descriptor::SecretSpec;
use crate::error::{CairnError, Result};
use crate::provider::ValueProvider;

/// Registry of resolved value handles, indexed by name and by key.
///
/// The registry borrows an opaque scope from the caller and forwards it
/// unchanged to every plain resolution. Both indices start empty and only
/// grow; there is no removal operation.
///
/// # Example
///
/// ```
/// use cairn::{MemoryProvider, ValueRegistry};
///
/// let mut provider = MemoryProvider::new();
/// provider.set_plain("service/database/url", "postgres://localhost/app");
///
/// let mut registry = ValueRegistry::new(provider, &());
/// let value = registry.load_plain("service/database/url", Some("databaseUrl")).unwrap();
///
/// assert_eq!(value, "postgres://localhost/app");
/// assert_eq!(registry.get_by_key("databaseUrl"), Some(&value));
/// assert_eq!(registry.get_by_name("service/database/url"), Some(&value));
/// ```
pub struct ValueRegistry<'s, P: ValueProvider> {
    provider: P,
    scope: &'s P::Scope,
    by_name: IndexMap<String, P::Value>,
    by_key: IndexMap<String, P::Value>,
}

impl<'s, P: ValueProvider> ValueRegistry<'s, P> {
    /// Create an empty registry over a provider and a caller-owned scope.
    pub fn new(provider: P, scope: &'s P::Scope) -> Self {
        Self {
            provider,
            scope,
            by_name: IndexMap::new(),
            by_key: IndexMap::new(),
        }
    }

    /// The scope this registry forwards to plain resolutions.
    pub fn scope(&self) -> &P::Scope {
        self.scope
    }

    /// Record a value handle under each non-empty identifier.
    ///
    /// Returns the handle unchanged, so loads can expose and hand back in
    /// one expression. Re-exposing an identifier overwrites the previous
    /// entry (last write wins).
    pub fn expose(&mut self, value: P::Value, name: Option<&str>, key: Option<&str>) -> P::Value {
        if let Some(name) = name.filter(|n| !n.is_empty()) {
            self.by_name.insert(name.to_string(), value.clone());
        }
        if let Some(key) = key.filter(|k| !k.is_empty()) {
            self.by_key.insert(key.to_string(), value.clone());
        }
        value
    }

    /// Resolve a plain value by external name and record it.
    pub fn load_plain(&mut self, name: &str, key: Option<&str>) -> Result<P::Value> {
        tracing::debug!("Resolving parameter '{}'", name);
        let value = self.provider.resolve_plain(self.scope, name)?;
        Ok(self.expose(value, Some(name), key))
    }

    /// Resolve a secret and record it.
    ///
    /// A descriptor with an empty name is rejected before the provider is
    /// consulted.
    pub fn load_secret(&mut self, spec: &SecretSpec, key: Option<&str>) -> Result<P::Value> {
        if spec.name.is_empty() {
            return Err(CairnError::EmptySecretName {
                key: key.unwrap_or_default().to_string(),
            });
        }
        tracing::debug!("Resolving secret '{}'", spec.name);
        let value = self.provider.resolve_secret(&spec.name)?;
        Ok(self.expose(value, Some(&spec.name), key))
    }

    /// Resolve every `(key, name)` entry in input order.
    ///
    /// Entries are processed strictly sequentially; the first failure aborts
    /// the batch and earlier entries stay recorded. Returns the live by-key
    /// index.
    pub fn load_plain_batch(
        &mut self,
        names: &IndexMap<String, String>,
    ) -> Result<&IndexMap<String, P::Value>> {
        for (key, name) in names {
            self.load_plain(name, Some(key.as_str()))?;
        }
        Ok(&self.by_key)
    }

    /// Resolve every `(key, descriptor)` entry in input order.
    ///
    /// Same sequencing and failure behavior as [`load_plain_batch`].
    ///
    /// [`load_plain_batch`]: ValueRegistry::load_plain_batch
    pub fn load_secret_batch(
        &mut self,
        specs: &IndexMap<String, SecretSpec>,
    ) -> Result<&IndexMap<String, P::Value>> {
        for (key, spec) in specs {
            self.load_secret(spec, Some(key.as_str()))?;
        }
        Ok(&self.by_key)
    }

    /// Look up a previously exposed value by logical key.
    pub fn get_by_key(&self, key: &str) -> Option<&P::Value> {
        self.by_key.get(key)
    }

    /// Look up a previously exposed value by external name.
    pub fn get_by_name(&self, name: &str) -> Option<&P::Value> {
        self.by_name.get(name)
    }

    /// All values recorded under a logical key, in exposure order.
    pub fn by_key(&self) -> &IndexMap<String, P::Value> {
        &self.by_key
    }

    /// All values recorded under an external name, in exposure order.
    pub fn by_name(&self) -> &IndexMap<String, P::Value> {
        &self.by_name
    }
}
