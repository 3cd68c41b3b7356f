//! Toolchain checks run before anything talks to Homebrew.

use crate::error::{FontbrewError, Result};
use crate::packages::traits::PackageManager;
use crate::selector::Picker;

/// Verify both external tools are usable. The package manager is a hard
/// requirement; the selector is installed on demand through it. Safe to
/// call repeatedly.
pub fn ensure_toolchain(manager: &dyn PackageManager, picker: &dyn Picker) -> Result<()> {
    if !manager.is_available() {
        return Err(FontbrewError::DependencyMissing(format!(
            "{} is required but was not found on PATH",
            manager.name()
        )));
    }

    picker.ensure_installed(manager)
}
