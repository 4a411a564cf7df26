//! Configuration management for md2pdf.
//!
//! Parses `md2pdf.toml` with serde and provides auto-discovery of the
//! config file in parent directories. CLI settings can be applied during
//! load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! Engine programs support `${VAR}` and `${VAR:-default}` references:
//!
//! - `engines.tectonic`
//! - `engines.weasyprint`

mod expand;
mod style;

use std::path::{Path, PathBuf};

use serde::Deserialize;

pub use style::{Style, StylePatterns, UnknownStyle};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "md2pdf.toml";

/// CLI settings that override configuration file values.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the LaTeX engine program.
    pub tectonic: Option<String>,
    /// Override the HTML-to-PDF engine program.
    pub weasyprint: Option<String>,
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input configuration (paths are relative strings from TOML).
    input: InputConfigRaw,
    /// External engine configuration.
    pub engines: EnginesConfig,
    /// File name patterns for style detection.
    pub styles: StylePatterns,

    /// Default input file resolved against the config directory.
    #[serde(skip)]
    pub default_input: Option<PathBuf>,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct InputConfigRaw {
    default: Option<String>,
}

/// External PDF engine configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct EnginesConfig {
    /// LaTeX engine program.
    pub tectonic: String,
    /// Extra arguments passed before the LaTeX source.
    pub tectonic_args: Vec<String>,
    /// HTML-to-PDF engine program.
    pub weasyprint: String,
    /// Extra arguments passed before the HTML source.
    pub weasyprint_args: Vec<String>,
}

impl Default for EnginesConfig {
    fn default() -> Self {
        Self {
            tectonic: "tectonic".to_owned(),
            tectonic_args: Vec::new(),
            weasyprint: "weasyprint".to_owned(),
            weasyprint_args: Vec::new(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`engines.tectonic`").
        field: String,
        /// Error message (e.g., "${`TECTONIC`} not set").
        message: String,
    },
}

fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

fn require_no_empty_patterns(patterns: &[String], field: &str) -> Result<(), ConfigError> {
    if patterns.iter().any(String::is_empty) {
        return Err(ConfigError::Validation(format!(
            "{field} cannot contain empty patterns"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise,
    /// searches for `md2pdf.toml` in the current directory and parents,
    /// falling back to defaults when none exists.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails
    /// or validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(tectonic) = &settings.tectonic {
            self.engines.tectonic.clone_from(tectonic);
        }
        if let Some(weasyprint) = &settings.weasyprint {
            self.engines.weasyprint.clone_from(weasyprint);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.engines.tectonic, "engines.tectonic")?;
        require_non_empty(&self.engines.weasyprint, "engines.weasyprint")?;
        require_no_empty_patterns(&self.styles.resume_patterns, "styles.resume_patterns")?;
        require_no_empty_patterns(&self.styles.notes_patterns, "styles.notes_patterns")?;
        Ok(())
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.engines.tectonic = expand::expand_env(&self.engines.tectonic, "engines.tectonic")?;
        self.engines.weasyprint =
            expand::expand_env(&self.engines.weasyprint, "engines.weasyprint")?;
        Ok(())
    }

    fn resolve_paths(&mut self, config_dir: &Path) {
        self.default_input = self.input.default.as_deref().map(|p| config_dir.join(p));
    }
}
