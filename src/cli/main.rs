//! Command-line interface entry point for `CourseAdvisor`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use commands::recommend::RecommendArgs;
use course_advisor::config::Config;
use course_advisor::info;
use course_advisor::logger::{
    enable_debug, enable_verbose, init_file_logging, set_level, Level,
};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // Effective runtime log level: CLI flag overrides config; fallback warn
    let effective_level = args
        .log_level
        .map(std::convert::Into::into)
        .or_else(|| parse_level(&config.logging.level))
        .unwrap_or(Level::Warn);

    let mut level = effective_level;
    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    // Verbose: enable if CLI flag OR config has verbose=true
    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // Initialize file logging: CLI flag wins, otherwise use config logging.file if set
    let config_log_path: Option<std::path::PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    // Handle subcommands
    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
        Command::Recommend {
            catalog,
            profile,
            top_n,
            max_credits,
            max_candidates,
        } => {
            commands::recommend::run(
                catalog.as_deref(),
                profile.as_deref(),
                RecommendArgs {
                    top_n,
                    max_credits,
                    max_candidates,
                },
                &config,
                verbose,
            );
        }
        Command::Available { catalog, profile } => {
            commands::available::run(catalog.as_deref(), profile.as_deref(), &config, verbose);
        }
        Command::Catalog { catalog } => {
            commands::catalog::run(catalog.as_deref(), &config, verbose);
        }
        Command::Progress { catalog, profile } => {
            commands::progress::run(catalog.as_deref(), profile.as_deref(), &config, verbose);
        }
    }
}

fn parse_level(val: &str) -> Option<Level> {
    match val.to_ascii_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        _ => None,
    }
}
