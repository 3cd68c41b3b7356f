//! Install Command
//!
//! The whole program flow: verify the toolchain, fetch the Nerd Font cask
//! catalog, pick targets (interactively or `--all`), then install them
//! best-effort.

use crate::constants::FONT_SEARCH_PATTERN;
use crate::doctor;
use crate::error::{FontbrewError, Result};
use crate::packages::brew::BrewManager;
use crate::packages::installer;
use crate::packages::traits::PackageManager;
use crate::selector::{FzfConfig, FzfSelector, Picker};
use crate::ui as output;

/// Options for the install command
#[derive(Debug)]
pub struct InstallOptions {
    /// Install the entire catalog, skipping interactive selection
    pub all: bool,
}

/// Run the install command against the real Homebrew/fzf toolchain
pub fn run(options: InstallOptions) -> Result<()> {
    let manager = BrewManager::new();
    let picker = FzfSelector::new(FzfConfig::default());
    run_with(&manager, &picker, options)
}

fn fetch_catalog(manager: &dyn PackageManager) -> Result<Vec<String>> {
    output::info(&format!(
        "Searching {} for Nerd Font casks...",
        manager.name()
    ));
    let catalog = manager.search_casks(FONT_SEARCH_PATTERN)?;

    if catalog.is_empty() {
        return Err(FontbrewError::PackageManagerError(format!(
            "No Nerd Font casks matched '{}'",
            FONT_SEARCH_PATTERN
        )));
    }

    output::info(&format!("Found {} casks", catalog.len()));
    Ok(catalog)
}

pub(crate) fn run_with(
    manager: &dyn PackageManager,
    picker: &dyn Picker,
    options: InstallOptions,
) -> Result<()> {
    doctor::ensure_toolchain(manager, picker)?;

    let catalog = fetch_catalog(manager)?;

    let targets = if options.all {
        catalog
    } else {
        let picked = picker.pick(&catalog)?;
        if picked.is_empty() {
            output::warning("No fonts selected. Nothing to do.");
            return Ok(());
        }
        picked
    };

    installer::install_many(manager, &targets);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakeManager {
        available: bool,
        catalog: Result<Vec<String>>,
        install_calls: RefCell<Vec<String>>,
        search_calls: RefCell<usize>,
    }

    impl FakeManager {
        fn with_catalog(names: &[&str]) -> Self {
            Self {
                available: true,
                catalog: Ok(names.iter().map(|s| s.to_string()).collect()),
                install_calls: RefCell::new(Vec::new()),
                search_calls: RefCell::new(0),
            }
        }
    }

    impl PackageManager for FakeManager {
        fn name(&self) -> &str {
            "fake"
        }

        fn is_available(&self) -> bool {
            self.available
        }

        fn search_casks(&self, _pattern: &str) -> Result<Vec<String>> {
            *self.search_calls.borrow_mut() += 1;
            match &self.catalog {
                Ok(names) => Ok(names.clone()),
                Err(_) => Err(FontbrewError::SystemCommandFailed {
                    command: "brew search --casks nerd-font".into(),
                    reason: "exit status: 1".into(),
                }),
            }
        }

        fn is_installed(&self, _name: &str) -> bool {
            false
        }

        fn install_cask(&self, name: &str) -> Result<()> {
            self.install_calls.borrow_mut().push(name.to_string());
            Ok(())
        }

        fn install_formula(&self, _name: &str) -> Result<()> {
            Ok(())
        }
    }

    struct FakePicker {
        picks: Vec<String>,
        pick_calls: RefCell<usize>,
    }

    impl FakePicker {
        fn picking(names: &[&str]) -> Self {
            Self {
                picks: names.iter().map(|s| s.to_string()).collect(),
                pick_calls: RefCell::new(0),
            }
        }
    }

    impl Picker for FakePicker {
        fn is_available(&self) -> bool {
            true
        }

        fn ensure_installed(&self, _manager: &dyn PackageManager) -> Result<()> {
            Ok(())
        }

        fn pick(&self, _items: &[String]) -> Result<Vec<String>> {
            *self.pick_calls.borrow_mut() += 1;
            Ok(self.picks.clone())
        }
    }

    #[test]
    fn bulk_mode_installs_full_catalog_in_order() {
        let manager = FakeManager::with_catalog(&["font-a-nerd-font", "font-b-nerd-font"]);
        let picker = FakePicker::picking(&[]);

        run_with(&manager, &picker, InstallOptions { all: true }).unwrap();

        assert_eq!(
            *manager.install_calls.borrow(),
            vec!["font-a-nerd-font", "font-b-nerd-font"]
        );
        assert_eq!(*picker.pick_calls.borrow(), 0);
    }

    #[test]
    fn interactive_mode_installs_only_picked_casks() {
        let manager = FakeManager::with_catalog(&[
            "font-a-nerd-font",
            "font-b-nerd-font",
            "font-c-nerd-font",
        ]);
        let picker = FakePicker::picking(&["font-c-nerd-font"]);

        run_with(&manager, &picker, InstallOptions { all: false }).unwrap();

        assert_eq!(*manager.install_calls.borrow(), vec!["font-c-nerd-font"]);
        assert_eq!(*picker.pick_calls.borrow(), 1);
    }

    #[test]
    fn empty_selection_is_a_successful_noop() {
        let manager = FakeManager::with_catalog(&["font-a-nerd-font"]);
        let picker = FakePicker::picking(&[]);

        run_with(&manager, &picker, InstallOptions { all: false }).unwrap();

        assert!(manager.install_calls.borrow().is_empty());
    }

    #[test]
    fn empty_catalog_is_fatal() {
        let manager = FakeManager::with_catalog(&[]);
        let picker = FakePicker::picking(&[]);

        let err = run_with(&manager, &picker, InstallOptions { all: false }).unwrap_err();

        assert!(matches!(err, FontbrewError::PackageManagerError(_)));
    }

    #[test]
    fn search_failure_skips_selector() {
        let manager = FakeManager {
            available: true,
            catalog: Err(FontbrewError::Other("unused".into())),
            install_calls: RefCell::new(Vec::new()),
            search_calls: RefCell::new(0),
        };
        let picker = FakePicker::picking(&["font-a-nerd-font"]);

        let err = run_with(&manager, &picker, InstallOptions { all: false }).unwrap_err();

        assert!(matches!(err, FontbrewError::SystemCommandFailed { .. }));
        assert_eq!(*picker.pick_calls.borrow(), 0);
        assert!(manager.install_calls.borrow().is_empty());
    }

    #[test]
    fn missing_manager_fails_before_search() {
        let manager = FakeManager {
            available: false,
            catalog: Ok(vec!["font-a-nerd-font".to_string()]),
            install_calls: RefCell::new(Vec::new()),
            search_calls: RefCell::new(0),
        };
        let picker = FakePicker::picking(&[]);

        let err = run_with(&manager, &picker, InstallOptions { all: true }).unwrap_err();

        assert!(matches!(err, FontbrewError::DependencyMissing(_)));
        assert_eq!(*manager.search_calls.borrow(), 0);
    }
}
