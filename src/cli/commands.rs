//! CLI definition using clap.
//!
//! `lapr` has no subcommands: running it starts a timer. Flags override the
//! matching config file settings.

use clap::Parser;
use lapr::timer::InterruptMode;
use std::path::PathBuf;

use crate::config::Config;

/// Lapr - a terminal lap timer. Enter records a lap, Ctrl-C pauses.
#[derive(Parser, Debug)]
#[command(name = "lapr")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Refresh interval in milliseconds
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval_ms: Option<u64>,

    /// What Ctrl-C does while the timer is running
    #[arg(long, value_enum)]
    pub on_interrupt: Option<InterruptMode>,

    /// Don't clear the screen between refreshes
    #[arg(long)]
    pub no_clear: bool,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Apply flag overrides on top of a loaded config.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(interval_ms) = self.interval_ms {
            config.timer.tick_interval_ms = interval_ms;
        }
        if let Some(mode) = self.on_interrupt {
            config.timer.on_interrupt = mode;
        }
        if self.no_clear {
            config.display.clear_screen = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::try_parse_from(["lapr"]).unwrap();
        assert!(!cli.verbose);
        assert!(cli.config.is_none());
        assert!(cli.interval_ms.is_none());
        assert!(cli.on_interrupt.is_none());
        assert!(!cli.no_clear);
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::try_parse_from(["lapr", "-v"]).unwrap();
        assert!(cli.is_verbose());
    }

    #[test]
    fn test_cli_config_option() {
        let cli = Cli::try_parse_from(["lapr", "-c", "/path/to/lapr.yml"]).unwrap();
        assert_eq!(cli.config.as_ref(), Some(&PathBuf::from("/path/to/lapr.yml")));
    }

    #[test]
    fn test_cli_interval() {
        let cli = Cli::try_parse_from(["lapr", "--interval-ms", "500"]).unwrap();
        assert_eq!(cli.interval_ms, Some(500));
    }

    #[test]
    fn test_cli_rejects_zero_interval() {
        assert!(Cli::try_parse_from(["lapr", "--interval-ms", "0"]).is_err());
    }

    #[test]
    fn test_cli_on_interrupt() {
        let cli = Cli::try_parse_from(["lapr", "--on-interrupt", "quit"]).unwrap();
        assert_eq!(cli.on_interrupt, Some(InterruptMode::Quit));
        assert!(Cli::try_parse_from(["lapr", "--on-interrupt", "later"]).is_err());
    }

    #[test]
    fn test_apply_overrides_config() {
        let cli = Cli::try_parse_from(["lapr", "-i", "200", "--on-interrupt", "quit", "--no-clear"]).unwrap();
        let mut config = Config::default();
        cli.apply_to(&mut config);
        assert_eq!(config.timer.tick_interval_ms, 200);
        assert_eq!(config.timer.on_interrupt, InterruptMode::Quit);
        assert!(!config.display.clear_screen);
    }

    #[test]
    fn test_apply_without_flags_keeps_config() {
        let cli = Cli::try_parse_from(["lapr"]).unwrap();
        let mut config = Config::default();
        config.timer.tick_interval_ms = 750;
        cli.apply_to(&mut config);
        assert_eq!(config.timer.tick_interval_ms, 750);
        assert!(config.display.clear_screen);
    }

    #[test]
    fn test_help_works() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_version_flag() {
        let result = Cli::try_parse_from(["lapr", "--version"]);
        // Version flag causes early exit with error (expected)
        assert!(result.is_err());
    }
}
