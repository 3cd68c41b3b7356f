//! Input sanitization utilities for security
//!
//! Validates cask identifiers before they are placed on a subprocess argv,
//! preventing command injection through crafted search results.

use crate::error::{FontbrewError, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Safe characters for Homebrew cask/formula names
/// Allows: alphanumeric, dash, underscore, dot, plus, at sign, slash (for tap-qualified names)
static SAFE_PACKAGE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9@._+/-]+$").expect("Invalid regex pattern"));

/// Characters that could be dangerous in shell contexts
static SHELL_DANGEROUS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[;`$(){}|&<>\\'"\n\r\t]"#).expect("Invalid regex pattern"));

/// Validate a package name is safe to hand to the package manager
pub fn validate_package_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(FontbrewError::InvalidPackageName(
            "name cannot be empty".to_string(),
        ));
    }

    if name.len() > 256 {
        return Err(FontbrewError::InvalidPackageName(format!(
            "name too long (max 256 chars): {}",
            &name[..50]
        )));
    }

    if SHELL_DANGEROUS.is_match(name) {
        return Err(FontbrewError::InvalidPackageName(format!(
            "name contains unsafe characters: {}",
            name
        )));
    }

    if !SAFE_PACKAGE_NAME.is_match(name) {
        return Err(FontbrewError::InvalidPackageName(format!(
            "name contains invalid characters: {}",
            name
        )));
    }

    // Prevent path traversal through tap-qualified names
    if name.contains("..") {
        return Err(FontbrewError::InvalidPackageName(format!(
            "name cannot contain path traversal: {}",
            name
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_package_names() {
        assert!(validate_package_name("font-agave-nerd-font").is_ok());
        assert!(validate_package_name("font-3270-nerd-font").is_ok());
        assert!(validate_package_name("font-im-writing-nerd-font").is_ok());
        assert!(validate_package_name("homebrew/cask/font-hack-nerd-font").is_ok());
        assert!(validate_package_name("fzf").is_ok());
        assert!(validate_package_name("font-symbols-only-nerd-font").is_ok());
    }

    #[test]
    fn test_shell_injection_blocked() {
        // Semicolon injection
        assert!(validate_package_name("font-a; rm -rf /").is_err());
        // Pipe injection
        assert!(validate_package_name("font-a | cat").is_err());
        // Command substitution
        assert!(validate_package_name("font-a$(cat)").is_err());
        // Ampersand chaining
        assert!(validate_package_name("font-a && echo").is_err());
    }

    #[test]
    fn test_path_traversal_blocked() {
        assert!(validate_package_name("../../../etc/passwd").is_err());
        assert!(validate_package_name("homebrew/../cask").is_err());
    }

    #[test]
    fn test_empty_and_long_names() {
        assert!(validate_package_name("").is_err());
        let long_name = "a".repeat(300);
        assert!(validate_package_name(&long_name).is_err());
    }
}
