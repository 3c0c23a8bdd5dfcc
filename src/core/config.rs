//! Configuration module for `CourseAdvisor`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Default course catalog CSV file
    #[serde(default)]
    pub catalog: String,
    /// Default student profile TOML file
    #[serde(default)]
    pub profile: String,
}

/// Recommendation engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendSection {
    /// Per-term credit cap
    #[serde(default)]
    pub max_credits: u32,
    /// Number of recommendations to show
    #[serde(default)]
    pub top_n: usize,
    /// Available-course bound before a request is refused
    #[serde(default)]
    pub max_candidates: usize,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Recommendation settings
    #[serde(default)]
    pub recommend: RecommendSection,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override default catalog path
    pub catalog: Option<String>,
    /// Override default profile path
    pub profile: Option<String>,
    /// Override the per-term credit cap
    pub max_credits: Option<u32>,
    /// Override the number of recommendations shown
    pub top_n: Option<usize>,
    /// Override the enumeration bound
    pub max_candidates: Option<usize>,
}

impl Config {
    /// Get the `$COURSE_ADVISOR` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/courseadvisor`
    /// - macOS: `~/Library/Application Support/courseadvisor`
    /// - Windows: `%APPDATA%\courseadvisor`
    #[must_use]
    pub fn get_courseadvisor_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("courseadvisor")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Used when loading configuration so that newly added fields are
    /// populated with their default values. String fields are filled when
    /// empty; numeric fields are filled when zero (no valid setting is
    /// zero for any of them).
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.paths.catalog.is_empty() && !defaults.paths.catalog.is_empty() {
            self.paths.catalog.clone_from(&defaults.paths.catalog);
            changed = true;
        }
        if self.paths.profile.is_empty() && !defaults.paths.profile.is_empty() {
            self.paths.profile.clone_from(&defaults.paths.profile);
            changed = true;
        }

        if self.recommend.max_credits == 0 && defaults.recommend.max_credits != 0 {
            self.recommend.max_credits = defaults.recommend.max_credits;
            changed = true;
        }
        if self.recommend.top_n == 0 && defaults.recommend.top_n != 0 {
            self.recommend.top_n = defaults.recommend.top_n;
            changed = true;
        }
        if self.recommend.max_candidates == 0 && defaults.recommend.max_candidates != 0 {
            self.recommend.max_candidates = defaults.recommend.max_candidates;
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Allows command-line arguments to override configuration file values
    /// without modifying the persistent configuration file. Only non-`None`
    /// values in the overrides struct replace config values.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }

        if let Some(catalog) = &overrides.catalog {
            self.paths.catalog.clone_from(catalog);
        }
        if let Some(profile) = &overrides.profile {
            self.paths.profile.clone_from(profile);
        }

        if let Some(max_credits) = overrides.max_credits {
            self.recommend.max_credits = max_credits;
        }
        if let Some(top_n) = overrides.top_n {
            self.recommend.top_n = top_n;
        }
        if let Some(max_candidates) = overrides.max_candidates {
            self.recommend.max_candidates = max_candidates;
        }
    }

    /// Get the user config file path
    ///
    /// Returns the full path to the configuration file:
    /// - `config.toml` for release builds
    /// - `dconfig.toml` for debug builds (allows separate debug config)
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_courseadvisor_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$COURSE_ADVISOR` variable in a string
    ///
    /// Replaces occurrences of `$COURSE_ADVISOR` with the actual config
    /// directory path, so configuration values can reference it.
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains("$COURSE_ADVISOR") {
            let advisor_dir = Self::get_courseadvisor_dir();
            value.replace("$COURSE_ADVISOR", advisor_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Parses a TOML configuration string and expands any `$COURSE_ADVISOR`
    /// variables in path values. Missing fields use their serde defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the
    /// expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.catalog = Self::expand_variables(&config.paths.catalog);
        config.paths.profile = Self::expand_variables(&config.paths.profile);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// Loads the compiled-in default configuration bundled with the binary.
    /// The defaults differ between debug and release builds.
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. This
    /// should never happen in practice since the defaults are compiled into
    /// the binary.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// - If the config file exists: loads it, merges missing fields from
    ///   defaults, and saves the updated config.
    /// - If it doesn't (first run): creates the config directory, saves the
    ///   defaults, and returns them.
    ///
    /// Falls back to defaults if any error occurs during loading.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }

            let _ = defaults.save();

            return defaults;
        }

        defaults
    }

    /// Save configuration to file
    ///
    /// Serializes the current configuration to TOML and writes it to the
    /// platform-specific config file, creating the directory if needed.
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized, the directory
    /// cannot be created, or the file cannot be written
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `catalog`, `profile`,
    /// `max_credits`, `top_n`, `max_candidates`.
    ///
    /// # Returns
    /// - `Some(String)`: the configuration value as a string
    /// - `None`: if the key is not recognized
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "catalog" => Some(self.paths.catalog.clone()),
            "profile" => Some(self.paths.profile.clone()),
            "max_credits" | "max-credits" => Some(self.recommend.max_credits.to_string()),
            "top_n" | "top-n" => Some(self.recommend.top_n.to_string()),
            "max_candidates" | "max-candidates" => {
                Some(self.recommend.max_candidates.to_string())
            }
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// The value is validated and converted to the appropriate type. This
    /// updates the in-memory config; call [`save()`](Config::save) to
    /// persist changes.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized or the value cannot
    /// be parsed (e.g., a non-numeric credit cap)
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "catalog" => self.paths.catalog = value.to_string(),
            "profile" => self.paths.profile = value.to_string(),
            "max_credits" | "max-credits" => {
                self.recommend.max_credits = parse_positive(key, value)?;
            }
            "top_n" | "top-n" => {
                self.recommend.top_n = parse_positive(key, value)? as usize;
            }
            "max_candidates" | "max-candidates" => {
                self.recommend.max_candidates = parse_positive(key, value)? as usize;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// Resets a single configuration value to its default without losing
    /// other customizations. Updates the in-memory config; call
    /// [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "catalog" => self.paths.catalog.clone_from(&defaults.paths.catalog),
            "profile" => self.paths.profile.clone_from(&defaults.paths.profile),
            "max_credits" | "max-credits" => {
                self.recommend.max_credits = defaults.recommend.max_credits;
            }
            "top_n" | "top-n" => self.recommend.top_n = defaults.recommend.top_n,
            "max_candidates" | "max-candidates" => {
                self.recommend.max_candidates = defaults.recommend.max_candidates;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// Deletes the configuration file so the next [`load()`](Config::load)
    /// recreates it from defaults. Succeeds silently if the file does not
    /// exist. The CLI asks for confirmation before calling this.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

/// Parse a strictly positive integer config value
fn parse_positive(key: &str, value: &str) -> Result<u32, String> {
    let parsed = value
        .parse::<u32>()
        .map_err(|_| format!("Invalid numeric value for '{key}': '{value}'"))?;
    if parsed == 0 {
        return Err(format!("Value for '{key}' must be greater than zero"));
    }
    Ok(parsed)
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  catalog = \"{}\"", self.paths.catalog)?;
        writeln!(f, "  profile = \"{}\"", self.paths.profile)?;

        writeln!(f, "\n[recommend]")?;
        writeln!(f, "  max_credits = {}", self.recommend.max_credits)?;
        writeln!(f, "  top_n = {}", self.recommend.top_n)?;
        writeln!(f, "  max_candidates = {}", self.recommend.max_candidates)?;

        Ok(())
    }
}
