//! Event model: personal life events and world events, keyed by
//! calendar date.
//!
//! A date maps to zero or more events; insertion order within a date is
//! preserved, and `BTreeMap` keys give a deterministic chronological
//! iteration order. Maps round-trip through JSON with ISO `YYYY-MM-DD`
//! string keys.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::Result;

/// Category of a personal life event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonalCategory {
    Personal,
    Education,
    Work,
    Travel,
    Achievement,
}

impl PersonalCategory {
    pub const ALL: [PersonalCategory; 5] = [
        PersonalCategory::Personal,
        PersonalCategory::Education,
        PersonalCategory::Work,
        PersonalCategory::Travel,
        PersonalCategory::Achievement,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PersonalCategory::Personal => "personal",
            PersonalCategory::Education => "education",
            PersonalCategory::Work => "work",
            PersonalCategory::Travel => "travel",
            PersonalCategory::Achievement => "achievement",
        }
    }
}

/// Category of a world event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorldCategory {
    Politics,
    Technology,
    Disaster,
    Culture,
    Economy,
    War,
}

impl WorldCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorldCategory::Politics => "politics",
            WorldCategory::Technology => "technology",
            WorldCategory::Disaster => "disaster",
            WorldCategory::Culture => "culture",
            WorldCategory::Economy => "economy",
            WorldCategory::War => "war",
        }
    }
}

/// A personal life event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeEvent {
    /// Main text shown in cells and tooltips.
    pub headline: String,
    /// Additional details for rich tooltips.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Milestone events receive a distinct background color.
    #[serde(default)]
    pub milestone: bool,
    /// Category for filtering; events without one are always shown when
    /// personal events are enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<PersonalCategory>,
}

impl LifeEvent {
    pub fn new(headline: impl Into<String>) -> Self {
        Self {
            headline: headline.into(),
            description: None,
            milestone: false,
            category: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_category(mut self, category: PersonalCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn as_milestone(mut self) -> Self {
        self.milestone = true;
        self
    }
}

/// A world event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldEvent {
    pub headline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: WorldCategory,
    /// Presidential-inauguration records are additionally gated by the
    /// presidents sub-filter. Modeled as a per-event flag, never by
    /// matching headline text.
    #[serde(default)]
    pub presidential: bool,
}

impl WorldEvent {
    pub fn new(headline: impl Into<String>, category: WorldCategory) -> Self {
        Self {
            headline: headline.into(),
            description: None,
            category,
            presidential: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn as_presidential(mut self) -> Self {
        self.presidential = true;
        self
    }
}

/// Events keyed by calendar date. An empty map means "no events for
/// that source".
pub type EventMap<E> = BTreeMap<NaiveDate, Vec<E>>;

/// Load a date-keyed event map from JSON.
pub fn load_events_json<E: DeserializeOwned>(raw: &str) -> Result<EventMap<E>> {
    if raw.trim().is_empty() {
        return Ok(EventMap::new());
    }
    Ok(serde_json::from_str(raw)?)
}
