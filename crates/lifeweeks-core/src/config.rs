//! Application configuration and derived grid bounds.
//!
//! The birth date is sourced from the `LIFEWEEKS_BIRTH_DATE` environment
//! variable with a fixed fallback, or from a TOML file. Everything the
//! engine consumes downstream (`WeeksConfig`, `DerivedConfig`) is derived
//! once from this configuration and treated as read-only.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Fallback birth date when the environment variable is unset.
pub const DEFAULT_BIRTH_DATE: &str = "1991-06-05";

/// Environment variable holding the real birth date.
pub const BIRTH_DATE_ENV: &str = "LIFEWEEKS_BIRTH_DATE";

const DAYS_PER_YEAR: f64 = 365.25;

/// Application configuration.
///
/// Serializable to/from TOML; every field has a default so a partial
/// file (or none at all) still yields a usable configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Birth date in `YYYY-MM-DD` form.
    #[serde(default = "default_birth_date")]
    pub birth_date: String,
    /// Years past the birth year the grid extends to.
    #[serde(default = "default_horizon_years")]
    pub horizon_years: u32,
    /// Show the US life-expectancy marker.
    #[serde(default = "default_true")]
    pub show_life_expectancy: bool,
    /// Show the Japan life-expectancy marker.
    #[serde(default = "default_true")]
    pub show_japan_life_expectancy: bool,
    /// Initial state of the world-events filter.
    #[serde(default = "default_true")]
    pub default_show_world_events: bool,
    /// Initial state of the presidents sub-filter.
    #[serde(default = "default_true")]
    pub default_show_presidents: bool,
    /// US male life expectancy in years.
    #[serde(default = "default_us_life_expectancy")]
    pub us_life_expectancy_years: f64,
    /// Japan life expectancy in years.
    #[serde(default = "default_japan_life_expectancy")]
    pub japan_life_expectancy_years: f64,
}

fn default_birth_date() -> String {
    DEFAULT_BIRTH_DATE.to_string()
}
fn default_horizon_years() -> u32 {
    80
}
fn default_true() -> bool {
    true
}
fn default_us_life_expectancy() -> f64 {
    76.4
}
fn default_japan_life_expectancy() -> f64 {
    84.1
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            birth_date: default_birth_date(),
            horizon_years: default_horizon_years(),
            show_life_expectancy: true,
            show_japan_life_expectancy: true,
            default_show_world_events: true,
            default_show_presidents: true,
            us_life_expectancy_years: default_us_life_expectancy(),
            japan_life_expectancy_years: default_japan_life_expectancy(),
        }
    }
}

impl AppConfig {
    /// Build a configuration from the environment, falling back to
    /// [`DEFAULT_BIRTH_DATE`] when the variable is unset or empty.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(value) = std::env::var(BIRTH_DATE_ENV) {
            if !value.trim().is_empty() {
                config.birth_date = value;
            }
        }
        config
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&raw).map_err(|e| ConfigError::ParseFailed(e.to_string()))
    }

    /// Parse the configured birth date, failing fast on bad input.
    pub fn parse_birth_date(&self) -> Result<NaiveDate, ConfigError> {
        NaiveDate::parse_from_str(&self.birth_date, "%Y-%m-%d").map_err(|e| {
            ConfigError::InvalidBirthDate {
                value: self.birth_date.clone(),
                message: e.to_string(),
            }
        })
    }

    /// Derive the week-grid bounds from this configuration.
    pub fn weeks_config(&self) -> Result<WeeksConfig, ConfigError> {
        let start_date = self.parse_birth_date()?;
        let end_year = start_date.year() + self.horizon_years as i32;
        WeeksConfig::new(start_date, end_year)
    }

    /// Derive the read-only values consumed by the merger and the
    /// navigation layer.
    pub fn derived(&self) -> Result<DerivedConfig, ConfigError> {
        let birth = self.parse_birth_date()?;
        let end_year = birth.year() + self.horizon_years as i32;
        let life_expectancy_date = expectancy_date(birth, self.us_life_expectancy_years);
        let japan_life_expectancy_date = expectancy_date(birth, self.japan_life_expectancy_years);
        let derived = DerivedConfig {
            birth_year: birth.year(),
            end_year,
            life_expectancy_date,
            japan_life_expectancy_date,
            life_expectancy_label: format!(
                "🇺🇸 US life expectancy ({} years)",
                self.us_life_expectancy_years
            ),
            japan_life_expectancy_label: format!(
                "🇯🇵 Japan life expectancy ({} years)",
                self.japan_life_expectancy_years
            ),
            show_life_expectancy: self.show_life_expectancy,
            show_japan_life_expectancy: self.show_japan_life_expectancy,
        };
        tracing::debug!(
            birth_year = derived.birth_year,
            end_year = derived.end_year,
            %life_expectancy_date,
            "derived grid configuration"
        );
        Ok(derived)
    }
}

/// Project a birth date forward by a fractional number of years.
fn expectancy_date(birth: NaiveDate, years: f64) -> NaiveDate {
    birth + Duration::days((years * DAYS_PER_YEAR).round() as i64)
}

/// Bounds of the week grid.
///
/// `start_date` is the first day of week 0; the grid runs through the
/// end of `end_year`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeksConfig {
    pub start_date: NaiveDate,
    pub start_year: i32,
    pub start_month: u32,
    pub start_day: u32,
    pub end_year: i32,
}

impl WeeksConfig {
    /// Create grid bounds, rejecting a horizon that ends before it starts.
    pub fn new(start_date: NaiveDate, end_year: i32) -> Result<Self, ConfigError> {
        if end_year < start_date.year() {
            return Err(ConfigError::HorizonBeforeBirth {
                birth_year: start_date.year(),
                end_year,
            });
        }
        Ok(Self {
            start_date,
            start_year: start_date.year(),
            start_month: start_date.month(),
            start_day: start_date.day(),
            end_year,
        })
    }

    /// Parse bounds from a `YYYY-MM-DD` birth-date string.
    pub fn parse(birth_date: &str, end_year: i32) -> Result<Self, ConfigError> {
        let start_date = NaiveDate::parse_from_str(birth_date, "%Y-%m-%d").map_err(|e| {
            ConfigError::InvalidBirthDate {
                value: birth_date.to_string(),
                message: e.to_string(),
            }
        })?;
        Self::new(start_date, end_year)
    }
}

/// Values computed once from [`AppConfig`] and consumed read-only by the
/// Temporal Index, the Event Merger and the navigation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedConfig {
    pub birth_year: i32,
    pub end_year: i32,
    pub life_expectancy_date: NaiveDate,
    pub japan_life_expectancy_date: NaiveDate,
    pub life_expectancy_label: String,
    pub japan_life_expectancy_label: String,
    pub show_life_expectancy: bool,
    pub show_japan_life_expectancy: bool,
}
