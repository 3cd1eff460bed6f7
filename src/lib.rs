//! Cairn - deferred configuration value registry.
//!
//! Cairn memoizes value handles resolved from an external provisioning
//! backend (parameters and secrets) during a configuration-assembly pass,
//! and serves them back under two independent identifiers: the external
//! name and a caller-chosen logical key.
//!
//! # Modules
//!
//! - [`descriptor`] - Structured secret references
//! - [`error`] - Error types and result aliases
//! - [`provider`] - The resolution capability and bundled backends
//! - [`registry`] - The two-index value registry
//!
//! # Example
//!
//! ```
//! use cairn::{indexmap, MemoryProvider, ValueRegistry};
//!
//! let mut provider = MemoryProvider::new();
//! provider.set_plain("service/db/url", "postgres://localhost/app");
//! provider.set_plain("service/db/pool", "16");
//!
//! let mut registry = ValueRegistry::new(provider, &());
//! let loaded = registry
//!     .load_plain_batch(&indexmap! {
//!         "databaseUrl".to_string() => "service/db/url".to_string(),
//!         "poolSize".to_string() => "service/db/pool".to_string(),
//!     })
//!     .unwrap();
//!
//! assert_eq!(loaded.get("poolSize").map(String::as_str), Some("16"));
//! ```

pub mod descriptor;
pub mod error;
pub mod provider;
pub mod registry;

pub use descriptor::SecretSpec;
pub use error::{CairnError, Result};
pub use provider::{EnvProvider, ExecProvider, MemoryProvider, ValueProvider};
pub use registry::ValueRegistry;

// Batch loads are keyed mappings with a stable order; re-export the map
// type so callers do not need a direct indexmap dependency.
pub use indexmap::{indexmap, IndexMap};
