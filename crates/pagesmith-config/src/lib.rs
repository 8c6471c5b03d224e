use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Process settings for writing pages.
///
/// Built once at startup and passed by reference to the output layer. Fields
/// are read-only; a different configuration means constructing a new value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    output_dir: PathBuf,
    template_path: Option<PathBuf>,
    extension: String,
}

/// Values that replace loaded settings, typically from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    pub output_dir: Option<PathBuf>,
    pub template_path: Option<PathBuf>,
    pub extension: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            template_path: None,
            extension: "xhtml".to_string(),
        }
    }
}

impl Settings {
    pub fn new(output_dir: PathBuf, template_path: Option<PathBuf>, extension: String) -> Self {
        Self {
            output_dir,
            template_path,
            extension,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Template file, or `None` for the built-in template
    pub fn template_path(&self) -> Option<&Path> {
        self.template_path.as_deref()
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut settings: Settings =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded paths
        settings.output_dir =
            Self::expand_path(&settings.output_dir).unwrap_or(settings.output_dir);
        settings.template_path = settings
            .template_path
            .map(|path| Self::expand_path(&path).unwrap_or(path));

        Ok(Some(settings))
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/pagesmith");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Returns new settings with every provided override applied.
    pub fn with_overrides(self, overrides: SettingsOverrides) -> Self {
        Self {
            output_dir: overrides.output_dir.unwrap_or(self.output_dir),
            template_path: overrides.template_path.or(self.template_path),
            extension: overrides.extension.unwrap_or(self.extension),
        }
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
