use crate::error::Result;

/// Seam over the external package manager. The real implementation shells
/// out to Homebrew; tests substitute an in-memory double.
pub trait PackageManager {
    /// Human-facing name, used in logs and error messages
    fn name(&self) -> &str;

    /// Whether the manager's binary resolves on PATH
    fn is_available(&self) -> bool;

    /// Run the manager's cask search for `pattern`, returning one identifier
    /// per output line in search order
    fn search_casks(&self, pattern: &str) -> Result<Vec<String>>;

    /// Whether `name` is already listed as an installed cask. Absence and
    /// query failure are both normal negatives, never errors.
    fn is_installed(&self, name: &str) -> bool;

    fn install_cask(&self, name: &str) -> Result<()>;

    fn install_formula(&self, name: &str) -> Result<()>;
}
