//! Decade milestones: navigation anchors at 10-year age boundaries.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::WeeksConfig;

/// A navigation anchor corresponding to a 10-year age boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecadeMilestone {
    /// Anchor id, e.g. `decade-20`.
    pub id: String,
    /// Display label, e.g. `20s`.
    pub label: String,
    /// Age in years at the boundary.
    pub age_years: u32,
    /// Calendar date of the boundary birthday.
    pub target_date: NaiveDate,
}

/// Render the anchor id for a decade of age.
pub fn decade_id(decade: u32) -> String {
    format!("decade-{decade}")
}

/// One milestone per decade of age from 0 up to the horizon, ascending.
///
/// Always yields at least `decade-0`, even for a grid that ends in the
/// birth year.
pub fn decade_milestones(config: &WeeksConfig) -> Vec<DecadeMilestone> {
    let span = (config.end_year - config.start_year).max(0) as u32;
    (0..=span)
        .step_by(10)
        .map(|d| DecadeMilestone {
            id: decade_id(d),
            label: format!("{d}s"),
            age_years: d,
            target_date: add_years(config.start_date, d),
        })
        .collect()
}

/// Calendar-safe year addition: Feb 29 clamps to Feb 28 in non-leap
/// target years.
fn add_years(date: NaiveDate, years: u32) -> NaiveDate {
    let year = date.year() + years as i32;
    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
        .unwrap_or(date)
}
