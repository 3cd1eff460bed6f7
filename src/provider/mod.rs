//! Value resolution providers.
//!
//! A provider is the capability that turns an external name into a value
//! handle. The registry never talks to a backend directly; it goes through
//! the [`ValueProvider`] trait, so the same assembly code can run against a
//! provisioning system, the process environment, an external command, or a
//! fixed table in tests.
//!
//! - [`ValueProvider`] - the resolution capability the registry is built on
//! - [`MemoryProvider`] - fixed in-memory tables, for tests and offline use
//! - [`EnvProvider`] - process environment variables
//! - [`ExecProvider`] - an external command per lookup
//!
//! # Example
//!
//! ```
//! use cairn::provider::{MemoryProvider, ValueProvider};
//!
//! let mut provider = MemoryProvider::new();
//! provider.set_plain("service/region", "eu-west-1");
//!
//! let value = provider.resolve_plain(&(), "service/region").unwrap();
//! assert_eq!(value, "eu-west-1");
//! ```

pub mod env;
pub mod exec;
pub mod memory;

pub use env::EnvProvider;
pub use exec::ExecProvider;
pub use memory::MemoryProvider;

use crate::error::Result;

/// Resolution capability consumed by the registry.
///
/// `Scope` is an opaque deployment context owned by the caller; the registry
/// borrows it at construction and forwards it unchanged to every plain
/// lookup. Each provider gives it a concrete meaning (a path prefix, a
/// working directory, or nothing at all).
///
/// `Value` is whatever handle the backend hands out. It may be a fully
/// materialized value or a lazy reference that only resolves during a later
/// deployment phase; the registry stores and returns it without inspecting
/// it.
pub trait ValueProvider {
    /// Deployment context forwarded to plain lookups.
    type Scope: ?Sized;

    /// Opaque resolution handle.
    type Value: Clone;

    /// Resolve a plain configuration value by external name.
    fn resolve_plain(&self, scope: &Self::Scope, name: &str) -> Result<Self::Value>;

    /// Resolve a secret by external name.
    ///
    /// Secret backends address values by name alone, so no scope is passed.
    fn resolve_secret(&self, name: &str) -> Result<Self::Value>;
}
