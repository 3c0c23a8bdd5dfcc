//! CLI argument definitions for `CourseAdvisor`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use course_advisor::config::ConfigOverrides;
use course_advisor::logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to
/// lowercase strings for config storage and to `logger::Level` for runtime
/// use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `max_credits`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Recommend one-term course schedules.
    ///
    /// Loads the catalog and student profile, generates every
    /// credit-feasible schedule from the currently eligible courses, and
    /// prints the top-ranked ones.
    Recommend {
        /// Course catalog CSV file (defaults to config `catalog`)
        #[arg(short, long, value_name = "FILE")]
        catalog: Option<PathBuf>,

        /// Student profile TOML file (defaults to config `profile`)
        #[arg(short, long, value_name = "FILE")]
        profile: Option<PathBuf>,

        /// Number of recommendations to show (defaults to config `top_n`)
        #[arg(long, value_name = "N")]
        top_n: Option<usize>,

        /// Per-term credit cap (defaults to config `max_credits`)
        #[arg(long, value_name = "CREDITS")]
        max_credits: Option<u32>,

        /// Refuse to enumerate above this many eligible courses
        /// (defaults to config `max_candidates`)
        #[arg(long, value_name = "N")]
        max_candidates: Option<usize>,
    },
    /// List the courses the student can take this term.
    Available {
        /// Course catalog CSV file (defaults to config `catalog`)
        #[arg(short, long, value_name = "FILE")]
        catalog: Option<PathBuf>,

        /// Student profile TOML file (defaults to config `profile`)
        #[arg(short, long, value_name = "FILE")]
        profile: Option<PathBuf>,
    },
    /// List every course in the catalog.
    Catalog {
        /// Course catalog CSV file (defaults to config `catalog`)
        #[arg(short, long, value_name = "FILE")]
        catalog: Option<PathBuf>,
    },
    /// Show the student's completed courses and interests.
    Progress {
        /// Course catalog CSV file (defaults to config `catalog`)
        #[arg(short, long, value_name = "FILE")]
        catalog: Option<PathBuf>,

        /// Student profile TOML file (defaults to config `profile`)
        #[arg(short, long, value_name = "FILE")]
        profile: Option<PathBuf>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "courseadvisor",
    about = "CourseAdvisor command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config default catalog file
    #[arg(long = "config-catalog", value_name = "FILE")]
    pub config_catalog: Option<PathBuf>,

    /// Override config default profile file
    #[arg(long = "config-profile", value_name = "FILE")]
    pub config_profile: Option<PathBuf>,

    /// Override config per-term credit cap
    #[arg(long = "config-max-credits", value_name = "CREDITS")]
    pub config_max_credits: Option<u32>,

    /// Override config recommendation count
    #[arg(long = "config-top-n", value_name = "N")]
    pub config_top_n: Option<usize>,

    /// Override config enumeration bound
    #[arg(long = "config-max-candidates", value_name = "N")]
    pub config_max_candidates: Option<usize>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Transforms CLI arguments into a `ConfigOverrides` struct that can be
    /// applied to the loaded configuration for this run, where `None` means
    /// no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            catalog: self
                .config_catalog
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            profile: self
                .config_profile
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            max_credits: self.config_max_credits,
            top_n: self.config_top_n,
            max_candidates: self.config_max_candidates,
        }
    }
}
