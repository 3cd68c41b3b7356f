//! Interactive multi-selection through an external fuzzy finder.
//!
//! The catalog is piped one identifier per line into `fzf`; whatever the
//! user confirms comes back on its stdout. This is the only point where the
//! process blocks on user input.

use crate::constants::{FZF_BIN, FZF_HEIGHT, FZF_LAYOUT, FZF_PROMPT};
use crate::error::{FontbrewError, Result};
use crate::packages::traits::PackageManager;
use crate::ui as output;
use std::io::Write;
use std::process::{Command, Stdio};

/// Seam over the interactive selector, mockable in tests.
pub trait Picker {
    fn is_available(&self) -> bool;

    /// Install the selector binary through the package manager if absent.
    /// Idempotent; fatal only when the install itself fails.
    fn ensure_installed(&self, manager: &dyn PackageManager) -> Result<()>;

    /// Run one interactive session over `items`. Aborting the session and
    /// confirming nothing are indistinguishable; both return an empty list.
    fn pick(&self, items: &[String]) -> Result<Vec<String>>;
}

/// Immutable selector session settings, fixed at construction
#[derive(Debug, Clone)]
pub struct FzfConfig {
    pub prompt: String,
    pub height: String,
    pub layout: String,
    pub multi: bool,
}

impl Default for FzfConfig {
    fn default() -> Self {
        Self {
            prompt: FZF_PROMPT.to_string(),
            height: FZF_HEIGHT.to_string(),
            layout: FZF_LAYOUT.to_string(),
            multi: true,
        }
    }
}

pub struct FzfSelector {
    config: FzfConfig,
}

impl FzfSelector {
    pub fn new(config: FzfConfig) -> Self {
        Self { config }
    }
}

impl Picker for FzfSelector {
    fn is_available(&self) -> bool {
        which::which(FZF_BIN).is_ok()
    }

    fn ensure_installed(&self, manager: &dyn PackageManager) -> Result<()> {
        if self.is_available() {
            return Ok(());
        }

        output::info(&format!(
            "'{}' not found, installing it via {}...",
            FZF_BIN,
            manager.name()
        ));
        manager.install_formula(FZF_BIN)?;

        if !self.is_available() {
            return Err(FontbrewError::DependencyMissing(FZF_BIN.to_string()));
        }

        output::success(&format!("Installed '{}'", FZF_BIN));
        Ok(())
    }

    fn pick(&self, items: &[String]) -> Result<Vec<String>> {
        let mut cmd = Command::new(FZF_BIN);
        if self.config.multi {
            cmd.arg("--multi");
        }
        cmd.arg(format!("--prompt={}", self.config.prompt))
            .arg(format!("--height={}", self.config.height))
            .arg(format!("--layout={}", self.config.layout));

        // fzf draws its UI on /dev/tty, so stdin/stdout stay ours for the
        // candidate list and the confirmed lines.
        let mut child = cmd
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| FontbrewError::SystemCommandFailed {
                command: FZF_BIN.into(),
                reason: e.to_string(),
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            let mut feed = items.join("\n");
            feed.push('\n');
            // An aborted session may close the pipe before the full
            // catalog is written; that is not an error.
            let _ = stdin.write_all(feed.as_bytes());
        }

        let result = child
            .wait_with_output()
            .map_err(|e| FontbrewError::SystemCommandFailed {
                command: FZF_BIN.into(),
                reason: e.to_string(),
            })?;

        // Non-zero covers both "no match" and an aborted session; either
        // way nothing was chosen.
        if !result.status.success() {
            return Ok(Vec::new());
        }

        let stdout = String::from_utf8_lossy(&result.stdout);
        Ok(stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_multi_select() {
        let config = FzfConfig::default();
        assert!(config.multi);
        assert_eq!(config.prompt, FZF_PROMPT);
        assert_eq!(config.height, FZF_HEIGHT);
        assert_eq!(config.layout, FZF_LAYOUT);
    }
}
