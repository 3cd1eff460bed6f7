//! External command provider.
//!
//! Resolves values by running a configured command with the external name
//! appended as the final argument and capturing trimmed stdout. This is the
//! common shape of CLI-based secret managers (`vault kv get`, `op read`,
//! `pass show`).

use std::path::Path;
use std::process::Command;

use crate::error::{CairnError, Result};
use crate::provider::ValueProvider;

/// Provider that shells out to a resolver command per lookup.
///
/// The scope is a working directory: plain lookups run the command inside
/// it, secret lookups inherit the process working directory.
///
/// # Example
///
/// ```no_run
/// use cairn::provider::{ExecProvider, ValueProvider};
///
/// let provider = ExecProvider::new("vault").arg("kv").arg("get").arg("-field=value");
/// let token = provider.resolve_secret("secret/service/api-key")?;
/// # let _ = token;
/// # Ok::<(), cairn::CairnError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ExecProvider {
    command: String,
    args: Vec<String>,
}

impl ExecProvider {
    /// Create a provider running the given command.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            args: Vec::new(),
        }
    }

    /// Append a fixed argument, placed before the name at invocation time.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    fn run(&self, name: &str, cwd: Option<&Path>) -> Result<String> {
        tracing::debug!("Resolving '{}' via command '{}'", name, self.command);

        let mut cmd = Command::new(&self.command);
        cmd.args(&self.args).arg(name);
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }

        let output = cmd.output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CairnError::ResolveFailed {
                name: name.to_string(),
                message: format!(
                    "command '{}' exited with {}: {}",
                    self.command,
                    output.status,
                    stderr.trim()
                ),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl ValueProvider for ExecProvider {
    type Scope = Path;
    type Value = String;

    fn resolve_plain(&self, scope: &Path, name: &str) -> Result<String> {
        self.run(name, Some(scope))
    }

    fn resolve_secret(&self, name: &str) -> Result<String> {
        self.run(name, None)
    }
}
