use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "fontbrew",
    about = "Interactive Nerd Font installer for Homebrew",
    long_about = "Discovers Nerd Font casks through Homebrew and installs the ones you pick in an fzf multi-select session.",
    version,
    term_width = 80
)]
pub struct Cli {
    /// Install every Nerd Font cask without interactive selection
    #[arg(long)]
    pub all: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_invocation_is_interactive() {
        let cli = Cli::try_parse_from(["fontbrew"]).unwrap();
        assert!(!cli.all);
    }

    #[test]
    fn all_flag_enables_bulk_mode() {
        let cli = Cli::try_parse_from(["fontbrew", "--all"]).unwrap();
        assert!(cli.all);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let err = Cli::try_parse_from(["fontbrew", "--frobnicate"]).unwrap_err();
        assert!(err.to_string().contains("--frobnicate"));
    }

    #[test]
    fn positional_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["fontbrew", "font-hack-nerd-font"]).is_err());
    }
}
