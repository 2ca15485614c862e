//! Event merger: joins the two event sources onto the week sequence.
//!
//! The merge is a pure function of its inputs — same weeks, datasets and
//! filter state produce an identical output sequence every time. Filter
//! state is injected per call; nothing here holds mutable state between
//! recomputations.
//!
//! Milestone colors are assigned over the canonical, unfiltered dataset
//! in chronological order, so toggling filters never reshuffles the
//! colors of events that remain visible.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::DerivedConfig;
use crate::events::{EventMap, LifeEvent, WorldEvent};
use crate::filters::EventFilters;
use crate::week::Week;

/// Background colors cycled through milestone events in chronological
/// order.
pub const MILESTONE_PALETTE: [&str; 8] = [
    "#f94144", "#f3722c", "#f9c74f", "#90be6d", "#43aa8b", "#4d908e", "#577590", "#9b5de5",
];

/// Which dataset an event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventSource {
    Personal,
    World,
}

/// One event as it appears on a rendered week cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekEvent {
    pub source: EventSource,
    pub headline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub milestone: bool,
    /// Deterministic palette color for milestone events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milestone_color: Option<String>,
    /// Category slug for styling hooks, when the event carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// A week together with the events that fall inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedWeek {
    pub week: Week,
    pub events: Vec<WeekEvent>,
}

impl MergedWeek {
    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }

    /// Tooltip text for the cell: `Turned <N> year(s) old` on birthday
    /// weeks, otherwise the week's start date.
    pub fn tooltip(&self) -> String {
        if self.week.birthday_week {
            let age = self.week.age_years;
            let unit = if age == 1 { "year" } else { "years" };
            format!("Turned {age} {unit} old")
        } else {
            self.week.date_label()
        }
    }
}

/// Personal event plus the merge-time metadata attached to it.
#[derive(Debug, Clone)]
struct CanonicalEvent {
    event: LifeEvent,
    /// Life-expectancy markers bypass the category filters.
    synthetic: bool,
    color: Option<String>,
}

/// Joins personal and world events onto a week sequence under a filter
/// predicate.
pub struct EventMerger<'a> {
    life_events: &'a EventMap<LifeEvent>,
    world_events: &'a EventMap<WorldEvent>,
    derived: &'a DerivedConfig,
    palette: &'static [&'static str],
}

impl<'a> EventMerger<'a> {
    pub fn new(
        life_events: &'a EventMap<LifeEvent>,
        world_events: &'a EventMap<WorldEvent>,
        derived: &'a DerivedConfig,
    ) -> Self {
        Self {
            life_events,
            world_events,
            derived,
            palette: &MILESTONE_PALETTE,
        }
    }

    /// Synthetic life-expectancy markers, controlled by their own
    /// top-level config flags.
    fn synthetic_markers(&self) -> Vec<(NaiveDate, LifeEvent)> {
        let mut markers = Vec::new();
        if self.derived.show_life_expectancy {
            markers.push((
                self.derived.life_expectancy_date,
                LifeEvent::new(self.derived.life_expectancy_label.clone())
                    .with_description("Based on US male life expectancy data")
                    .as_milestone(),
            ));
        }
        if self.derived.show_japan_life_expectancy {
            markers.push((
                self.derived.japan_life_expectancy_date,
                LifeEvent::new(self.derived.japan_life_expectancy_label.clone())
                    .with_description("Japan has one of the highest life expectancies globally")
                    .as_milestone(),
            ));
        }
        markers
    }

    /// The full personal dataset with markers injected and milestone
    /// colors assigned by chronological ordinal, independent of any
    /// filter state.
    fn canonical_life(&self) -> BTreeMap<NaiveDate, Vec<CanonicalEvent>> {
        let mut canonical: BTreeMap<NaiveDate, Vec<CanonicalEvent>> = BTreeMap::new();
        for (date, events) in self.life_events {
            canonical.insert(
                *date,
                events
                    .iter()
                    .map(|event| CanonicalEvent {
                        event: event.clone(),
                        synthetic: false,
                        color: None,
                    })
                    .collect(),
            );
        }
        for (date, event) in self.synthetic_markers() {
            canonical.entry(date).or_default().push(CanonicalEvent {
                event,
                synthetic: true,
                color: None,
            });
        }

        let mut ordinal = 0usize;
        for events in canonical.values_mut() {
            for entry in events.iter_mut() {
                if entry.event.milestone {
                    entry.color = Some(self.palette[ordinal % self.palette.len()].to_string());
                    ordinal += 1;
                }
            }
        }
        canonical
    }

    /// Merge the datasets onto `weeks` under `filters`.
    ///
    /// Events dated outside the generated week range are dropped with a
    /// warning; they never fail the merge.
    pub fn merge(&self, weeks: &[Week], filters: &EventFilters) -> Vec<MergedWeek> {
        let canonical = self.canonical_life();

        let (Some(first), Some(last)) = (weeks.first(), weeks.last()) else {
            for date in canonical.keys().chain(self.world_events.keys()) {
                tracing::warn!(%date, "event date outside generated week range, dropping");
            }
            return Vec::new();
        };

        for (date, events) in &canonical {
            if *date < first.start || *date > last.end {
                tracing::warn!(
                    %date,
                    count = events.len(),
                    "personal event date outside generated week range, dropping"
                );
            }
        }
        for (date, events) in self.world_events {
            if *date < first.start || *date > last.end {
                tracing::warn!(
                    %date,
                    count = events.len(),
                    "world event date outside generated week range, dropping"
                );
            }
        }

        weeks
            .iter()
            .map(|week| {
                let mut events = Vec::new();
                for entries in canonical.range(week.start..=week.end).map(|(_, v)| v) {
                    for entry in entries {
                        let included = entry.synthetic || filters.allows_life_event(&entry.event);
                        if included {
                            events.push(WeekEvent {
                                source: EventSource::Personal,
                                headline: entry.event.headline.clone(),
                                description: entry.event.description.clone(),
                                milestone: entry.event.milestone,
                                milestone_color: entry.color.clone(),
                                category: entry.event.category.map(|c| c.as_str().to_string()),
                            });
                        }
                    }
                }
                for entries in self.world_events.range(week.start..=week.end).map(|(_, v)| v) {
                    for event in entries {
                        if filters.allows_world_event(event) {
                            events.push(WeekEvent {
                                source: EventSource::World,
                                headline: event.headline.clone(),
                                description: event.description.clone(),
                                milestone: false,
                                milestone_color: None,
                                category: Some(event.category.as_str().to_string()),
                            });
                        }
                    }
                }
                MergedWeek { week: *week, events }
            })
            .collect()
    }
}

/// Convenience function to merge with a one-off merger.
pub fn merge_events(
    weeks: &[Week],
    life_events: &EventMap<LifeEvent>,
    world_events: &EventMap<WorldEvent>,
    derived: &DerivedConfig,
    filters: &EventFilters,
) -> Vec<MergedWeek> {
    EventMerger::new(life_events, world_events, derived).merge(weeks, filters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::events::{PersonalCategory, WorldCategory};
    use crate::week::weeks;
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn fixture() -> (Vec<Week>, EventMap<LifeEvent>, EventMap<WorldEvent>, DerivedConfig) {
        let config = AppConfig::default();
        let grid: Vec<Week> = weeks(&config.weeks_config().unwrap()).collect();
        let derived = config.derived().unwrap();

        let mut life = EventMap::new();
        life.insert(
            date(1991, 6, 5),
            vec![LifeEvent::new("🐣 Born").with_category(PersonalCategory::Personal)],
        );
        life.insert(
            date(2014, 5, 27),
            vec![LifeEvent::new("Graduated")
                .with_category(PersonalCategory::Education)
                .as_milestone()],
        );
        life.insert(
            date(2019, 6, 25),
            vec![LifeEvent::new("Moved")
                .with_category(PersonalCategory::Travel)
                .as_milestone()],
        );

        let mut world = EventMap::new();
        world.insert(
            date(2009, 1, 20),
            vec![WorldEvent::new("🇺🇸 Barack Obama Inaugurated", WorldCategory::Politics)
                .as_presidential()],
        );
        world.insert(
            date(2022, 11, 30),
            vec![WorldEvent::new("🤖 ChatGPT Launches", WorldCategory::Technology)],
        );

        (grid, life, world, derived)
    }

    #[test]
    fn born_event_lands_on_week_zero() {
        let (grid, life, world, derived) = fixture();
        let filters = EventFilters::default().with_world_events(false);
        let merged = merge_events(&grid, &life, &world, &derived, &filters);

        let week0 = &merged[0];
        let personal: Vec<_> = week0
            .events
            .iter()
            .filter(|e| e.source == EventSource::Personal && !e.milestone)
            .collect();
        assert_eq!(personal.len(), 1);
        assert_eq!(personal[0].headline, "🐣 Born");
        assert_eq!(personal[0].category.as_deref(), Some("personal"));
        assert!(!week0.events.iter().any(|e| e.source == EventSource::World));
    }

    #[test]
    fn merge_is_deterministic() {
        let (grid, life, world, derived) = fixture();
        let filters = EventFilters::default();
        let merger = EventMerger::new(&life, &world, &derived);
        let a = merger.merge(&grid, &filters);
        let b = merger.merge(&grid, &filters);
        assert_eq!(a, b);
    }

    #[test]
    fn toggling_world_events_restores_identical_output() {
        let (grid, life, world, derived) = fixture();
        let merger = EventMerger::new(&life, &world, &derived);
        let on = EventFilters::default();
        let before = merger.merge(&grid, &on);
        let _hidden = merger.merge(&grid, &on.with_world_events(false));
        let after = merger.merge(&grid, &on);
        assert_eq!(before, after);
    }

    #[test]
    fn milestone_colors_are_stable_under_filtering() {
        let (grid, life, world, derived) = fixture();
        let merger = EventMerger::new(&life, &world, &derived);

        let color_of = |merged: &[MergedWeek], headline: &str| -> Option<String> {
            merged
                .iter()
                .flat_map(|w| w.events.iter())
                .find(|e| e.headline == headline)
                .and_then(|e| e.milestone_color.clone())
        };

        let all = merger.merge(&grid, &EventFilters::default());
        let moved_color = color_of(&all, "Moved").unwrap();

        // Hide the education category; "Moved" keeps its color even
        // though the earlier milestone is no longer visible.
        let filtered = merger.merge(
            &grid,
            &EventFilters::default().with_category(PersonalCategory::Education, false),
        );
        assert!(color_of(&filtered, "Graduated").is_none());
        assert_eq!(color_of(&filtered, "Moved").unwrap(), moved_color);
    }

    #[test]
    fn milestones_cycle_through_palette_in_order() {
        let (grid, life, world, derived) = fixture();
        let merger = EventMerger::new(&life, &world, &derived);
        let merged = merger.merge(&grid, &EventFilters::default());

        let colors: Vec<String> = merged
            .iter()
            .flat_map(|w| w.events.iter())
            .filter(|e| e.milestone)
            .map(|e| e.milestone_color.clone().unwrap())
            .collect();
        // Two dataset milestones plus the US marker; the Japan marker
        // (84.1 years) falls past the 80-year grid and is dropped.
        assert_eq!(colors.len(), 3);
        for (i, color) in colors.iter().enumerate() {
            assert_eq!(color, MILESTONE_PALETTE[i % MILESTONE_PALETTE.len()]);
        }
    }

    #[test]
    fn synthetic_markers_bypass_filters() {
        let (grid, life, world, derived) = fixture();
        let merger = EventMerger::new(&life, &world, &derived);
        let nothing = EventFilters::default()
            .with_personal_events(false)
            .with_world_events(false);
        let merged = merger.merge(&grid, &nothing);

        let visible: Vec<_> = merged
            .iter()
            .flat_map(|w| w.events.iter())
            .collect();
        assert_eq!(visible.len(), 1);
        assert!(visible[0].milestone);
        assert!(visible[0].headline.contains("US life expectancy"));
    }

    #[test]
    fn markers_respect_their_own_flags() {
        let (grid, life, world, mut derived) = fixture();
        derived.show_life_expectancy = false;
        derived.show_japan_life_expectancy = false;
        let merger = EventMerger::new(&life, &world, &derived);
        let merged = merger.merge(&grid, &EventFilters::default());
        assert!(!merged
            .iter()
            .flat_map(|w| w.events.iter())
            .any(|e| e.headline.contains("life expectancy")));
    }

    #[test]
    fn out_of_range_events_are_dropped_silently() {
        let (grid, mut life, world, derived) = fixture();
        let horizon_end = grid.last().unwrap().end;
        life.insert(
            horizon_end + Duration::days(1),
            vec![LifeEvent::new("Past the horizon")],
        );
        life.insert(date(1980, 1, 1), vec![LifeEvent::new("Before birth")]);

        let merged = merge_events(&grid, &life, &world, &derived, &EventFilters::default());
        let headlines: Vec<_> = merged
            .iter()
            .flat_map(|w| w.events.iter())
            .map(|e| e.headline.as_str())
            .collect();
        assert!(!headlines.contains(&"Past the horizon"));
        assert!(!headlines.contains(&"Before birth"));
    }

    #[test]
    fn empty_week_slice_merges_to_nothing() {
        let (_, life, world, derived) = fixture();
        let merged = merge_events(&[], &life, &world, &derived, &EventFilters::default());
        assert!(merged.is_empty());
    }

    #[test]
    fn tooltip_matches_rendered_contract() {
        let (grid, life, world, derived) = fixture();
        let merged = merge_events(&grid, &life, &world, &derived, &EventFilters::default());

        assert_eq!(merged[0].tooltip(), "Jun 5, 1991");
        let first_birthday = merged.iter().find(|w| w.week.birthday_week).unwrap();
        assert_eq!(first_birthday.tooltip(), "Turned 1 year old");
        let later = merged
            .iter()
            .find(|w| w.week.birthday_week && w.week.age_years == 23)
            .unwrap();
        assert_eq!(later.tooltip(), "Turned 23 years old");
    }
}
