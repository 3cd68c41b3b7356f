//! Error suggestions and helpful messages
//!
//! Provides actionable suggestions for common error scenarios

use crate::error::FontbrewError;
use colored::Colorize;

/// Extension trait to add suggestions to errors
pub trait ErrorSuggestions {
    /// Get a helpful suggestion for this error
    fn suggestion(&self) -> Option<String>;
}

impl ErrorSuggestions for FontbrewError {
    fn suggestion(&self) -> Option<String> {
        match self {
            FontbrewError::DependencyMissing(dep) if dep.contains("Homebrew") => Some(format!(
                "Install Homebrew first:\n  {}\nThen retry.",
                r#"/bin/bash -c "$(curl -fsSL https://raw.githubusercontent.com/Homebrew/install/HEAD/install.sh)""#
                    .cyan()
            )),
            FontbrewError::DependencyMissing(dep) => Some(format!(
                "Install '{}' first, then retry the operation",
                dep.cyan()
            )),
            FontbrewError::SystemCommandFailed { command, reason: _ }
                if command.starts_with("brew search") =>
            {
                Some(format!(
                    "Homebrew's index may be stale or corrupted. Try:\n  {}\nIf the problem persists, rebuild it:\n  {}\n  {}",
                    "brew update".cyan(),
                    r#"rm -rf "$(brew --cache)""#.cyan(),
                    "brew update --force".cyan()
                ))
            }
            FontbrewError::SystemCommandFailed { command, reason: _ } => Some(format!(
                "Check that '{}' is installed and in your PATH",
                command.split_whitespace().next().unwrap_or(command).cyan()
            )),
            FontbrewError::PackageManagerError(msg) if msg.contains("No Nerd Font casks") => {
                Some(format!(
                    "Refresh the cask index and retry:\n  {}",
                    "brew update".cyan()
                ))
            }
            _ => None,
        }
    }
}
