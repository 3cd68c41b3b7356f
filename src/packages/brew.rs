//! Homebrew package manager
//!
//! Shells out to `brew` for cask search, installed-state queries, and
//! installs.

use crate::constants::BREW_BIN;
use crate::error::{FontbrewError, Result};
use crate::packages::catalog;
use crate::packages::traits::PackageManager;
use crate::utils::sanitize;
use std::process::{Command, Stdio};

#[derive(Default)]
pub struct BrewManager;

impl BrewManager {
    pub fn new() -> Self {
        Self
    }
}

impl PackageManager for BrewManager {
    fn name(&self) -> &str {
        "Homebrew"
    }

    fn is_available(&self) -> bool {
        which::which(BREW_BIN).is_ok()
    }

    fn search_casks(&self, pattern: &str) -> Result<Vec<String>> {
        let output = Command::new(BREW_BIN)
            .args(["search", "--casks", pattern])
            .output()
            .map_err(|e| FontbrewError::SystemCommandFailed {
                command: format!("brew search --casks {}", pattern),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(FontbrewError::SystemCommandFailed {
                command: format!("brew search --casks {}", pattern),
                reason: output.status.to_string(),
            });
        }

        // One cask name per line when stdout is piped; annotated lines keep
        // their first token only.
        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(catalog::parse_search_output(&stdout))
    }

    fn is_installed(&self, name: &str) -> bool {
        if sanitize::validate_package_name(name).is_err() {
            return false;
        }

        Command::new(BREW_BIN)
            .args(["list", "--cask", name])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    fn install_cask(&self, name: &str) -> Result<()> {
        sanitize::validate_package_name(name)?;

        let status = Command::new(BREW_BIN)
            .args(["install", "--cask", name])
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .status()
            .map_err(|e| FontbrewError::SystemCommandFailed {
                command: "brew install --cask".into(),
                reason: e.to_string(),
            })?;

        if !status.success() {
            return Err(FontbrewError::PackageManagerError(format!(
                "brew install --cask {} failed",
                name
            )));
        }

        Ok(())
    }

    fn install_formula(&self, name: &str) -> Result<()> {
        sanitize::validate_package_name(name)?;

        let status = Command::new(BREW_BIN)
            .arg("install")
            .arg(name)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .status()
            .map_err(|e| FontbrewError::SystemCommandFailed {
                command: "brew install".into(),
                reason: e.to_string(),
            })?;

        if !status.success() {
            return Err(FontbrewError::PackageManagerError(format!(
                "brew install {} failed",
                name
            )));
        }

        Ok(())
    }
}
