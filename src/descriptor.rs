//! Secret reference descriptors.
//!
//! Batch secret loads take a mapping of logical keys to [`SecretSpec`]
//! records rather than bare strings, so the required `name` field is explicit
//! in the type instead of being an accident of the input shape.

use serde::{Deserialize, Serialize};

/// A reference to an externally managed secret.
///
/// The `name` is the external identifier (typically a hierarchical path)
/// under which the backing provider stores the secret. Descriptors usually
/// come straight out of configuration files, so the type derives serde
/// support; a descriptor without a `name` field fails to deserialize.
///
/// # Example
///
/// ```
/// use cairn::SecretSpec;
///
/// let spec = SecretSpec::new("service/database/password");
/// assert_eq!(spec.name, "service/database/password");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretSpec {
    /// External name of the secret.
    pub name: String,
}

impl SecretSpec {
    /// Create a descriptor for the given external name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl From<&str> for SecretSpec {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for SecretSpec {
    fn from(name: String) -> Self {
        Self { name }
    }
}
