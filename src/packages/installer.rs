//! Best-effort install loop over selected casks.
//!
//! A single cask failing to install is a warning, never a run-level error;
//! the remaining casks are still attempted.

use crate::packages::traits::PackageManager;
use crate::ui as output;

/// Per-cask result of an install attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    Installed,
    AlreadyInstalled,
    Failed,
}

/// Install a single cask. Already-installed casks are skipped without
/// issuing an install command.
pub fn install_one(manager: &dyn PackageManager, name: &str) -> InstallOutcome {
    if manager.is_installed(name) {
        output::info(&format!("'{}' is already installed, skipping", name));
        return InstallOutcome::AlreadyInstalled;
    }

    output::info(&format!("Installing '{}'...", name));
    match manager.install_cask(name) {
        Ok(()) => {
            output::success(&format!("Installed '{}'", name));
            InstallOutcome::Installed
        }
        Err(e) => {
            output::warning(&format!("Failed to install '{}': {}", name, e));
            InstallOutcome::Failed
        }
    }
}

/// Install every cask in order. Best effort: outcomes are logged per item
/// and not aggregated.
pub fn install_many(manager: &dyn PackageManager, names: &[String]) {
    for name in names {
        install_one(manager, name);
    }
}
