//! Configuration management for Quill.
//!
//! Parses `quill.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! ```toml
//! [site]
//! output_dir = "output"
//! index_filenames = ["index.html"]
//!
//! [plugins]
//! router = "default"
//! vcs = "git"
//! ```
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! `${VAR}` and `${VAR:-default}` are expanded in:
//! - `site.output_dir`
//! - `plugins.router`
//! - `plugins.vcs`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override output directory.
    pub output_dir: Option<String>,
    /// Override router identifier.
    pub router: Option<String>,
    /// Override VCS adapter identifier.
    pub vcs: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "quill.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output layout.
    pub site: SiteSection,
    /// Component selection.
    pub plugins: PluginsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site: SiteSection::default(),
            plugins: PluginsConfig::default(),
            config_path: None,
        }
    }
}

/// `[site]` section.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Directory generated files are written to. Relative paths are resolved
    /// against the config file's directory.
    pub output_dir: String,
    /// Filenames stripped from web paths, first match wins.
    pub index_filenames: Vec<String>,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            output_dir: "output".to_owned(),
            index_filenames: vec!["index.html".to_owned()],
        }
    }
}

/// `[plugins]` section.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PluginsConfig {
    /// Router identifier.
    pub router: String,
    /// VCS adapter identifier. No adapter is used when unset.
    pub vcs: Option<String>,
}

impl Default for PluginsConfig {
    fn default() -> Self {
        Self {
            router: "default".to_owned(),
            vcs: None,
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
        /// Config field path (e.g., "`site.output_dir`").
        field: String,
        /// Error message (e.g., "${`OUTPUT_DIR`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `quill.toml` in current directory and parents,
    /// falling back to defaults relative to the current directory.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails or
    /// the loaded values are invalid.
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
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(output_dir) = &settings.output_dir {
            self.site.output_dir.clone_from(output_dir);
        }
        if let Some(router) = &settings.router {
            self.plugins.router.clone_from(router);
        }
        if let Some(vcs) = &settings.vcs {
            self.plugins.vcs = Some(vcs.clone());
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

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        let mut config = Self::default();
        config.resolve_paths(base);
        config
    }

    /// Load configuration from a specific file.
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
        require_non_empty(&self.site.output_dir, "site.output_dir")?;
        if self.site.index_filenames.iter().any(String::is_empty) {
            return Err(ConfigError::Validation(
                "site.index_filenames cannot contain empty entries".to_owned(),
            ));
        }

        require_non_empty(&self.plugins.router, "plugins.router")?;
        if let Some(vcs) = &self.plugins.vcs {
            require_non_empty(vcs, "plugins.vcs")?;
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.output_dir = expand::expand_env(&self.site.output_dir, "site.output_dir")?;
        self.plugins.router = expand::expand_env(&self.plugins.router, "plugins.router")?;
        if let Some(ref vcs) = self.plugins.vcs {
            self.plugins.vcs = Some(expand::expand_env(vcs, "plugins.vcs")?);
        }
        Ok(())
    }

    /// Resolve a relative output directory against the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        if Path::new(&self.site.output_dir).is_relative() {
            self.site.output_dir = config_dir
                .join(&self.site.output_dir)
                .to_string_lossy()
                .into_owned();
        }
    }
}
