//! Environment variable provider.
//!
//! Maps external names onto environment variable names: uppercase, with
//! every run of non-alphanumeric characters collapsed to a single `_`.
//! The registry scope acts as a variable prefix for plain lookups, so one
//! process can hold values for several deployments side by side.

use crate::error::{CairnError, Result};
use crate::provider::ValueProvider;

/// Provider backed by process environment variables.
///
/// Plain lookups prepend the scope (when non-empty) to the mangled name;
/// secret lookups use the provider's own prefix instead, since secret
/// resolution takes no scope.
///
/// # Example
///
/// ```
/// use cairn::provider::{EnvProvider, ValueProvider};
///
/// std::env::set_var("APP_SERVICE_DB_URL", "postgres://localhost/app");
///
/// let provider = EnvProvider::new();
/// let value = provider.resolve_plain("APP", "service/db/url").unwrap();
/// assert_eq!(value, "postgres://localhost/app");
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvProvider {
    secret_prefix: Option<String>,
}

impl EnvProvider {
    /// Create a provider with no secret prefix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider that prefixes secret variable names.
    pub fn with_secret_prefix(prefix: impl Into<String>) -> Self {
        Self {
            secret_prefix: Some(prefix.into()),
        }
    }

    fn read(&self, name: &str, var: &str) -> Result<String> {
        tracing::debug!("Reading '{}' from environment variable {}", name, var);
        std::env::var(var).map_err(|e| CairnError::ResolveFailed {
            name: name.to_string(),
            message: format!("environment variable {}: {}", var, e),
        })
    }
}

impl ValueProvider for EnvProvider {
    type Scope = str;
    type Value = String;

    fn resolve_plain(&self, scope: &str, name: &str) -> Result<String> {
        let var = if scope.is_empty() {
            mangle(name)
        } else {
            format!("{}_{}", scope, mangle(name))
        };
        self.read(name, &var)
    }

    fn resolve_secret(&self, name: &str) -> Result<String> {
        let var = match &self.secret_prefix {
            Some(prefix) => format!("{}_{}", prefix, mangle(name)),
            None => mangle(name),
        };
        self.read(name, &var)
    }
}

/// Turn an external name into an environment variable name.
fn mangle(name: &str) -> String {
    let mut var = String::with_capacity(name.len());
    let mut last_was_sep = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            var.push(c.to_ascii_uppercase());
            last_was_sep = false;
        } else if !last_was_sep && !var.is_empty() {
            var.push('_');
            last_was_sep = true;
        }
    }
    if var.ends_with('_') {
        var.pop();
    }
    var
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mangle_uppercases_and_replaces_separators() {
        assert_eq!(mangle("this/is/a/param"), "THIS_IS_A_PARAM");
        assert_eq!(mangle("this:is:another:param"), "THIS_IS_ANOTHER_PARAM");
        assert_eq!(mangle("lastParam"), "LASTPARAM");
    }

    #[test]
    fn mangle_collapses_runs_and_trims_edges() {
        assert_eq!(mangle("/leading//and--trailing/"), "LEADING_AND_TRAILING");
    }

    #[test]
    fn plain_lookup_uses_scope_prefix() {
        std::env::set_var("CAIRN_T1_SERVICE_PORT", "8080");
        let provider = EnvProvider::new();
        assert_eq!(
            provider.resolve_plain("CAIRN_T1", "service/port").unwrap(),
            "8080"
        );
    }

    #[test]
    fn plain_lookup_without_scope_uses_bare_name() {
        std::env::set_var("CAIRN_T2_BARE", "set");
        let provider = EnvProvider::new();
        assert_eq!(provider.resolve_plain("", "cairn/t2/bare").unwrap(), "set");
    }

    #[test]
    fn secret_lookup_uses_configured_prefix() {
        std::env::set_var("CAIRN_T3_SECRET_API_KEY", "shhh");
        let provider = EnvProvider::with_secret_prefix("CAIRN_T3_SECRET");
        assert_eq!(provider.resolve_secret("api/key").unwrap(), "shhh");
    }

    #[test]
    fn missing_variable_reports_variable_name() {
        let provider = EnvProvider::new();
        let err = provider
            .resolve_plain("CAIRN_T4", "definitely/not/set")
            .unwrap_err();
        assert!(err.to_string().contains("CAIRN_T4_DEFINITELY_NOT_SET"));
    }
}
