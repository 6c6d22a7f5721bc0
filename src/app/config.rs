// Application configuration types
//
// This module contains:
// - Defaults for the export header timestamp
// - Settings loaded from an optional TOML file
// - Environment variable overrides
//
// Precedence, lowest to highest: built-in defaults, config file,
// environment, command-line flags (`Settings::apply_cli_overrides`).

use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::export::clock::{parse_locale, SystemClock, UnknownLocale};
use crate::export::ConfigFormat;

// ============================================================================
// Constants
// ============================================================================

/// Locale used for the "Generated on" timestamp
pub const DEFAULT_LOCALE: &str = "en_US";

/// strftime pattern for the "Generated on" timestamp ("05 March 2024, 14:07")
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%d %B %Y, %H:%M";

/// Overrides `locale`
pub const ENV_LOCALE: &str = "CRANESHELL_LOCALE";

/// Overrides `timestamp_format`
pub const ENV_TIMESTAMP_FORMAT: &str = "CRANESHELL_TIMESTAMP_FORMAT";

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Locale(#[from] UnknownLocale),
}

// ============================================================================
// Settings
// ============================================================================

/// Export settings
///
/// Every field has a default, so an empty file (or no file) is valid:
/// ```toml
/// locale = "ru_RU"
/// timestamp_format = "%d %B %Y, %H:%M"
/// format = "kitty"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Locale name for month names in the header timestamp
    pub locale: String,

    /// strftime pattern for the header timestamp
    pub timestamp_format: String,

    /// Output dialect
    pub format: ConfigFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            format: ConfigFormat::default(),
        }
    }
}

impl Settings {
    /// Check values that deserialization alone cannot
    pub fn validate(&self) -> Result<(), ConfigError> {
        parse_locale(&self.locale)?;
        Ok(())
    }

    /// Apply command-line flags, the last and strongest source
    pub fn apply_cli_overrides(
        &mut self,
        locale: Option<String>,
        format: Option<ConfigFormat>,
    ) -> Result<(), ConfigError> {
        if let Some(locale) = locale {
            debug!(flag = "--locale", value = %locale, "Command-line override");
            self.locale = locale;
        }
        if let Some(format) = format {
            debug!(flag = "--format", value = %format, "Command-line override");
            self.format = format;
        }
        self.validate()
    }

    /// Wall clock for export headers using these settings
    pub fn clock(&self) -> Result<SystemClock, ConfigError> {
        Ok(SystemClock::from_locale_name(
            &self.locale,
            self.timestamp_format.clone(),
        )?)
    }
}

/// Load settings from `path` (if any) and the process environment
pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    load_settings_from_sources(path, |p| std::fs::read_to_string(p), |name| {
        std::env::var(name).ok()
    })
}

pub(crate) fn load_settings_from_sources<FRead, FEnv>(
    path: Option<&Path>,
    read_file: FRead,
    env_lookup: FEnv,
) -> Result<Settings, ConfigError>
where
    FRead: Fn(&Path) -> io::Result<String>,
    FEnv: Fn(&str) -> Option<String>,
{
    let mut settings = match path {
        Some(path) => {
            let text = read_file(path).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            let parsed: Settings = toml::from_str(&text).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
            info!(path = %path.display(), "Loaded settings file");
            parsed
        }
        None => Settings::default(),
    };

    apply_env_overrides(&mut settings, &env_lookup);
    settings.validate()?;
    Ok(settings)
}

fn apply_env_overrides<FEnv>(settings: &mut Settings, env_lookup: &FEnv)
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(locale) = non_empty(env_lookup(ENV_LOCALE)) {
        debug!(var = ENV_LOCALE, value = %locale, "Environment override");
        settings.locale = locale;
    }
    if let Some(format) = non_empty(env_lookup(ENV_TIMESTAMP_FORMAT)) {
        debug!(var = ENV_TIMESTAMP_FORMAT, value = %format, "Environment override");
        settings.timestamp_format = format;
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::Clock;
    use std::collections::HashMap;

    fn no_file(_: &Path) -> io::Result<String> {
        Err(io::Error::new(io::ErrorKind::NotFound, "missing"))
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_defaults_without_file_or_env() {
        let settings = load_settings_from_sources(None, no_file, no_env).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.locale, "en_US");
        assert_eq!(settings.timestamp_format, "%d %B %Y, %H:%M");
        assert_eq!(settings.format, ConfigFormat::Kitty);
    }

    #[test]
    fn test_file_values_override_defaults() {
        let read = |_: &Path| Ok("locale = \"ru_RU\"\nformat = \"kitty\"\n".to_string());
        let settings =
            load_settings_from_sources(Some(Path::new("craneshell.toml")), read, no_env).unwrap();
        assert_eq!(settings.locale, "ru_RU");
        assert_eq!(settings.timestamp_format, DEFAULT_TIMESTAMP_FORMAT);
    }

    #[test]
    fn test_env_overrides_file() {
        let read = |_: &Path| Ok("locale = \"ru_RU\"\n".to_string());
        let env: HashMap<&str, &str> = [(ENV_LOCALE, "de_DE"), (ENV_TIMESTAMP_FORMAT, "%Y")]
            .into_iter()
            .collect();
        let settings = load_settings_from_sources(Some(Path::new("c.toml")), read, |name| {
            env.get(name).map(|v| v.to_string())
        })
        .unwrap();
        assert_eq!(settings.locale, "de_DE");
        assert_eq!(settings.timestamp_format, "%Y");
    }

    #[test]
    fn test_blank_env_is_ignored() {
        let settings =
            load_settings_from_sources(None, no_file, |_| Some("  ".to_string())).unwrap();
        assert_eq!(settings.locale, DEFAULT_LOCALE);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = load_settings_from_sources(Some(Path::new("nope.toml")), no_file, no_env)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let read = |_: &Path| Ok("colour = \"red\"\n".to_string());
        let err = load_settings_from_sources(Some(Path::new("c.toml")), read, no_env).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_unknown_locale_is_rejected() {
        let err =
            load_settings_from_sources(None, no_file, |_| Some("xx_YY".to_string())).unwrap_err();
        assert!(matches!(err, ConfigError::Locale(_)));
    }

    #[test]
    fn test_cli_flags_override_env_and_file() {
        let read = |_: &Path| Ok("locale = \"ru_RU\"\n".to_string());
        let mut settings = load_settings_from_sources(Some(Path::new("c.toml")), read, |name| {
            (name == ENV_LOCALE).then(|| "de_DE".to_string())
        })
        .unwrap();
        assert_eq!(settings.locale, "de_DE");

        settings
            .apply_cli_overrides(Some("fr_FR".to_string()), Some(ConfigFormat::Kitty))
            .unwrap();
        assert_eq!(settings.locale, "fr_FR");
        assert_eq!(settings.format, ConfigFormat::Kitty);
    }

    #[test]
    fn test_absent_cli_flags_keep_settings() {
        let mut settings =
            load_settings_from_sources(None, no_file, |_| Some("de_DE".to_string())).unwrap();
        settings.apply_cli_overrides(None, None).unwrap();
        assert_eq!(settings.locale, "de_DE");
    }

    #[test]
    fn test_unknown_cli_locale_is_rejected() {
        let mut settings = Settings::default();
        let err = settings
            .apply_cli_overrides(Some("xx_YY".to_string()), None)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Locale(_)));
    }

    #[test]
    fn test_clock_uses_settings() {
        let settings = Settings {
            timestamp_format: "fixed".to_string(),
            ..Settings::default()
        };
        assert_eq!(settings.clock().unwrap().timestamp(), "fixed");
    }
}
