//! Shared CLI definitions for litui.
//!
//! Used by the main application and by the build script (manpage), which
//! renders the manual without compiling the application crate.

use clap::Parser;

/// Command-line arguments for litui
#[derive(Clone, Parser, Debug)]
#[command(
    name = "litui",
    version,
    about = "SQLite Browsing in the Terminal",
    long_about = include_str!("../long_about.txt")
)]
pub struct Args {
    /// Path to the SQLite database file to open.
    /// When omitted, the file browser opens so a database can be picked interactively.
    #[arg(value_name = "PATH")]
    pub path: Option<std::path::PathBuf>,

    /// Enable debug mode to show operational information
    #[arg(long = "debug", action)]
    pub debug: bool,

    /// Show hidden files and directories in the file browser
    #[arg(long = "show-hidden", action)]
    pub show_hidden: bool,

    /// Generate default configuration file at ~/.config/litui/config.toml
    #[arg(long = "generate-config", action)]
    pub generate_config: bool,

    /// Force overwrite existing config file when using --generate-config
    #[arg(long = "force", requires = "generate_config", action)]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_is_optional() {
        let args = Args::try_parse_from(["litui"]).unwrap();
        assert!(args.path.is_none());
        assert!(!args.debug);
    }

    #[test]
    fn test_path_and_flags() {
        let args = Args::try_parse_from(["litui", "app.db", "--debug", "--show-hidden"]).unwrap();
        assert_eq!(args.path.as_deref(), Some(std::path::Path::new("app.db")));
        assert!(args.debug);
        assert!(args.show_hidden);
    }

    #[test]
    fn test_force_requires_generate_config() {
        assert!(Args::try_parse_from(["litui", "--force"]).is_err());
        let args = Args::try_parse_from(["litui", "--generate-config", "--force"]).unwrap();
        assert!(args.generate_config);
        assert!(args.force);
    }
}
