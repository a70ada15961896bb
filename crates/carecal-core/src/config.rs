use anyhow::Result;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder};
use serde::Deserialize;

use crate::constants::{
    DEFAULT_DISPLAY_CAP, DEFAULT_LOCALE, DEFAULT_LOG_LEVEL, DEFAULT_TIMEZONE, ENV_PREFIX,
};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub calendar: CalendarConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    /// BCP-47 locale used for month labels and weekday headers.
    pub locale: String,
    /// IANA timezone that decides which calendar day is "today".
    pub timezone: String,
    /// Events rendered per day cell before the overflow indicator.
    pub display_cap: usize,
    /// Maximum entries in the upcoming list. Unset means unlimited.
    pub upcoming_limit: Option<usize>,
}

impl CalendarConfig {
    /// ## Summary
    /// Checks the values that deserialization alone cannot reject.
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` if the display cap is zero or the
    /// locale or timezone is blank.
    pub fn validate(&self) -> CoreResult<()> {
        if self.display_cap == 0 {
            return Err(CoreError::ConfigError(
                "calendar.display_cap must be at least 1".to_string(),
            ));
        }
        if self.locale.trim().is_empty() {
            return Err(CoreError::ConfigError(
                "calendar.locale must not be empty".to_string(),
            ));
        }
        if self.timezone.trim().is_empty() {
            return Err(CoreError::ConfigError(
                "calendar.timezone must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            timezone: DEFAULT_TIMEZONE.to_string(),
            display_cap: DEFAULT_DISPLAY_CAP,
            upcoming_limit: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Returns a config builder pre-populated with every default value.
    ///
    /// ## Errors
    /// Returns an error if a default cannot be registered.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        let display_cap = i64::try_from(DEFAULT_DISPLAY_CAP)?;

        Ok(Config::builder()
            .set_default("calendar.locale", DEFAULT_LOCALE)?
            .set_default("calendar.timezone", DEFAULT_TIMEZONE)?
            .set_default("calendar.display_cap", display_cap)?
            .set_default("logging.level", DEFAULT_LOG_LEVEL)?)
    }

    /// ## Summary
    /// Loads configuration from an optional `config.toml` and `CARECAL_*`
    /// environment variables into a `Settings`.
    /// Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building, deserializing or validating the
    /// configuration fails.
    pub fn load() -> Result<Self> {
        let settings = Self::defaults()?
            // TOML file
            .add_source(config::File::with_name("config").required(false))
            // Env vars, e.g. CARECAL_CALENDAR__DISPLAY_CAP=5
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        settings.calendar.validate()?;

        Ok(settings)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{File, FileFormat};

    fn settings_from_toml(toml: &str) -> Settings {
        Settings::defaults()
            .expect("defaults register")
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .expect("config builds")
            .try_deserialize()
            .expect("settings deserialize")
    }

    #[test]
    fn test_defaults_only() {
        let settings = settings_from_toml("");
        assert_eq!(settings.calendar.locale, "es-AR");
        assert_eq!(settings.calendar.timezone, "America/Argentina/Buenos_Aires");
        assert_eq!(settings.calendar.display_cap, 3);
        assert_eq!(settings.calendar.upcoming_limit, None);
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let settings = settings_from_toml(
            r#"
            [calendar]
            locale = "en-US"
            timezone = "America/New_York"
            display_cap = 5
            upcoming_limit = 10
            "#,
        );
        assert_eq!(settings.calendar.locale, "en-US");
        assert_eq!(settings.calendar.timezone, "America/New_York");
        assert_eq!(settings.calendar.display_cap, 5);
        assert_eq!(settings.calendar.upcoming_limit, Some(10));
    }

    #[test]
    fn test_validate_rejects_zero_cap() {
        let calendar = CalendarConfig {
            display_cap: 0,
            ..CalendarConfig::default()
        };
        assert!(matches!(
            calendar.validate(),
            Err(CoreError::ConfigError(_))
        ));
    }

    #[test]
    fn test_validate_rejects_blank_timezone() {
        let calendar = CalendarConfig {
            timezone: "  ".to_string(),
            ..CalendarConfig::default()
        };
        assert!(calendar.validate().is_err());
    }

    #[test]
    fn test_default_calendar_config_is_valid() {
        CalendarConfig::default()
            .validate()
            .expect("defaults should validate");
    }
}
