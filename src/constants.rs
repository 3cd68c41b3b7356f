// Process-scoped constants. Components receive these at construction
// rather than reading globals.

/// Package manager binary
pub const BREW_BIN: &str = "brew";

/// Fuzzy selector binary, installed on demand as a Homebrew formula
pub const FZF_BIN: &str = "fzf";

/// Fixed pattern handed to `brew search --casks`
pub const FONT_SEARCH_PATTERN: &str = "nerd-font";

/// Selector prompt
pub const FZF_PROMPT: &str = "Select fonts to install > ";

/// Selector window height ratio
pub const FZF_HEIGHT: &str = "40%";

/// Selector layout direction
pub const FZF_LAYOUT: &str = "reverse";
