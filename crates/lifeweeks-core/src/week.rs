//! Temporal index: the week sequence from birth to horizon.
//!
//! [`WeekIndex`] is a lazy, finite, restartable iterator over 7-day
//! periods starting at the configured birth date. Week arithmetic is
//! pure day arithmetic (`start + 7i days`), so leap-day birth dates
//! never hit invalid month/day combinations.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::WeeksConfig;

/// Days in a grid week.
pub const DAYS_PER_WEEK: i64 = 7;

/// Mean calendar year length used for age computation.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// One 7-day interval since birth, the atomic unit of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Week {
    /// Zero-based position in the sequence.
    pub index: usize,
    /// First day of the week.
    pub start: NaiveDate,
    /// Last day of the week (`start + 6 days`).
    pub end: NaiveDate,
    /// Whole years of age at the start of the week.
    pub age_years: u32,
    /// Decade of age this week belongs to (0, 10, 20, ...).
    pub decade: u32,
    /// True for the first week in which `age_years` incremented.
    pub birthday_week: bool,
}

impl Week {
    /// Whether `date` falls inside this week's closed interval.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Start date rendered the way cells display it, e.g. `Jun 5, 1991`.
    pub fn date_label(&self) -> String {
        self.start.format("%b %-d, %Y").to_string()
    }
}

/// Lazy iterator producing the week sequence for a grid.
///
/// Restartable: the index is `Clone`, and building a fresh one from the
/// same [`WeeksConfig`] yields the identical sequence.
#[derive(Debug, Clone)]
pub struct WeekIndex {
    start_date: NaiveDate,
    end_year: i32,
    horizon: Option<NaiveDate>,
    cursor: usize,
    prev_age: Option<u32>,
}

impl WeekIndex {
    /// Create a week index covering `start_date` through the end of the
    /// configured end year.
    pub fn new(config: &WeeksConfig) -> Self {
        Self {
            start_date: config.start_date,
            end_year: config.end_year,
            horizon: None,
            cursor: 0,
            prev_age: None,
        }
    }

    /// Stop before any week that would start after `horizon`.
    ///
    /// A horizon earlier than the start date yields an empty sequence.
    pub fn with_horizon(mut self, horizon: NaiveDate) -> Self {
        self.horizon = Some(horizon);
        self
    }

    fn age_at(&self, date: NaiveDate) -> u32 {
        let days = (date - self.start_date).num_days();
        (days as f64 / DAYS_PER_YEAR).floor() as u32
    }
}

impl Iterator for WeekIndex {
    type Item = Week;

    fn next(&mut self) -> Option<Week> {
        let start = self.start_date + Duration::days(DAYS_PER_WEEK * self.cursor as i64);
        if start.year() > self.end_year {
            return None;
        }
        if let Some(horizon) = self.horizon {
            if start > horizon {
                return None;
            }
        }

        let age_years = self.age_at(start);
        let birthday_week = match self.prev_age {
            Some(prev) => age_years > prev,
            None => false,
        };
        let week = Week {
            index: self.cursor,
            start,
            end: start + Duration::days(DAYS_PER_WEEK - 1),
            age_years,
            decade: age_years / 10 * 10,
            birthday_week,
        };
        self.prev_age = Some(age_years);
        self.cursor += 1;
        Some(week)
    }
}

/// Convenience constructor for the full week sequence of a grid.
pub fn weeks(config: &WeeksConfig) -> WeekIndex {
    WeekIndex::new(config)
}
