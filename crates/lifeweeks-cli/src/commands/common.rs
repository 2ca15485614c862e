//! Shared argument handling for the grid-driven subcommands.

use clap::Args;
use lifeweeks_core::{AppConfig, EventFilters};

/// Flags shared by every command that evaluates the filter predicate.
#[derive(Args, Debug, Clone, Copy)]
pub struct FilterArgs {
    /// Hide personal events
    #[arg(long)]
    pub hide_personal: bool,
    /// Hide world events
    #[arg(long)]
    pub hide_world: bool,
    /// Hide presidential-inauguration world events
    #[arg(long)]
    pub hide_presidents: bool,
}

impl FilterArgs {
    pub fn filters(&self, config: &AppConfig) -> EventFilters {
        EventFilters::default()
            .with_personal_events(!self.hide_personal)
            .with_world_events(config.default_show_world_events && !self.hide_world)
            .with_presidents(config.default_show_presidents && !self.hide_presidents)
    }
}

/// Flags overriding the environment-derived configuration.
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Birth date override, YYYY-MM-DD
    #[arg(long)]
    pub birth_date: Option<String>,
    /// Horizon override in years past the birth year
    #[arg(long)]
    pub horizon_years: Option<u32>,
}

impl ConfigArgs {
    pub fn effective(&self) -> AppConfig {
        let mut config = AppConfig::from_env();
        if let Some(birth_date) = &self.birth_date {
            config.birth_date = birth_date.clone();
        }
        if let Some(horizon_years) = self.horizon_years {
            config.horizon_years = horizon_years;
        }
        config
    }
}
