//! Built-in event datasets.
//!
//! A representative world-events timeline and a small sample personal
//! timeline, used by the CLI and as integration-test fixtures. Callers
//! with their own data build an [`EventMap`] directly or load one with
//! [`crate::events::load_events_json`].

use chrono::NaiveDate;

use crate::events::{EventMap, LifeEvent, PersonalCategory, WorldCategory, WorldEvent};

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date literal")
}

/// Major world events from 1989 onwards. Presidential inaugurations
/// carry the `presidential` flag; other politics events do not.
pub fn builtin_world_events() -> EventMap<WorldEvent> {
    let entries: [(NaiveDate, WorldEvent); 16] = [
        (
            ymd(1989, 3, 12),
            WorldEvent::new("🌐 World Wide Web Invented", WorldCategory::Technology)
                .with_description("Tim Berners-Lee creates the web at CERN"),
        ),
        (
            ymd(1989, 11, 9),
            WorldEvent::new("🧱 Berlin Wall Falls", WorldCategory::Politics)
                .with_description("End of Cold War symbol"),
        ),
        (
            ymd(1991, 12, 25),
            WorldEvent::new("🇷🇺 Soviet Union Dissolves", WorldCategory::Politics)
                .with_description("End of USSR"),
        ),
        (
            ymd(1998, 9, 4),
            WorldEvent::new("🔍 Google Founded", WorldCategory::Technology)
                .with_description("Larry Page and Sergey Brin start Google"),
        ),
        (
            ymd(2001, 9, 11),
            WorldEvent::new("🏢 9/11 Attacks", WorldCategory::War)
                .with_description("Twin Towers destroyed"),
        ),
        (
            ymd(2007, 1, 9),
            WorldEvent::new("📱 iPhone Announced", WorldCategory::Technology)
                .with_description("Apple revolutionizes smartphones"),
        ),
        (
            ymd(2008, 9, 15),
            WorldEvent::new("📉 Lehman Brothers Collapses", WorldCategory::Economy)
                .with_description("Global financial crisis"),
        ),
        (
            ymd(2009, 1, 20),
            WorldEvent::new("🇺🇸 Barack Obama Inaugurated", WorldCategory::Politics)
                .with_description("First Black US President takes office")
                .as_presidential(),
        ),
        (
            ymd(2012, 10, 29),
            WorldEvent::new("🌊 Hurricane Sandy", WorldCategory::Disaster)
                .with_description("Superstorm hits US East Coast"),
        ),
        (
            ymd(2015, 6, 26),
            WorldEvent::new("🏳️‍🌈 US Legalizes Same-Sex Marriage", WorldCategory::Culture)
                .with_description("Supreme Court ruling nationwide"),
        ),
        (
            ymd(2016, 6, 23),
            WorldEvent::new("🇬🇧 Brexit Vote", WorldCategory::Politics)
                .with_description("UK votes to leave European Union"),
        ),
        (
            ymd(2017, 1, 20),
            WorldEvent::new("🇺🇸 Donald Trump Inaugurated", WorldCategory::Politics)
                .as_presidential(),
        ),
        (
            ymd(2020, 1, 21),
            WorldEvent::new("🦠 First US COVID Case", WorldCategory::Disaster)
                .with_description("Pandemic begins"),
        ),
        (
            ymd(2021, 1, 20),
            WorldEvent::new("🇺🇸 Joe Biden Inaugurated", WorldCategory::Politics)
                .as_presidential(),
        ),
        (
            ymd(2022, 2, 24),
            WorldEvent::new("🇺🇦 Russia Invades Ukraine", WorldCategory::War)
                .with_description("Full-scale invasion begins"),
        ),
        (
            ymd(2022, 11, 30),
            WorldEvent::new("🤖 ChatGPT Launches", WorldCategory::Technology)
                .with_description("AI chatbot reaches 100M users in 2 months"),
        ),
    ];

    let mut map = EventMap::new();
    for (date, event) in entries {
        map.entry(date).or_insert_with(Vec::new).push(event);
    }
    map
}

/// A sample personal timeline matching the default birth date.
pub fn sample_life_events() -> EventMap<LifeEvent> {
    let entries: [(NaiveDate, LifeEvent); 6] = [
        (
            ymd(1991, 6, 5),
            LifeEvent::new("🐣 Born").with_category(PersonalCategory::Personal),
        ),
        (
            ymd(2009, 5, 30),
            LifeEvent::new("Graduated from high school")
                .with_category(PersonalCategory::Education),
        ),
        (
            ymd(2010, 4, 30),
            LifeEvent::new("Immigrated to the United States")
                .with_category(PersonalCategory::Travel)
                .as_milestone(),
        ),
        (
            ymd(2014, 5, 27),
            LifeEvent::new("Graduated from university")
                .with_description("B.S. in Computer Science")
                .with_category(PersonalCategory::Education)
                .as_milestone(),
        ),
        (
            ymd(2019, 6, 25),
            LifeEvent::new("Completed graduate school")
                .with_description("M.S. in Computer Science")
                .with_category(PersonalCategory::Education)
                .as_milestone(),
        ),
        (
            ymd(2021, 5, 1),
            LifeEvent::new("Award nomination")
                .with_category(PersonalCategory::Achievement),
        ),
    ];

    let mut map = EventMap::new();
    for (date, event) in entries {
        map.entry(date).or_insert_with(Vec::new).push(event);
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_events_have_valid_dates_and_flags() {
        let map = builtin_world_events();
        assert!(!map.is_empty());
        let presidential: Vec<_> = map
            .values()
            .flatten()
            .filter(|e| e.presidential)
            .collect();
        assert_eq!(presidential.len(), 3);
        assert!(presidential
            .iter()
            .all(|e| e.category == WorldCategory::Politics));
    }

    #[test]
    fn dataset_dates_never_collapse_to_epoch() {
        let world = builtin_world_events();
        let life = sample_life_events();
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        assert!(world.keys().chain(life.keys()).all(|d| *d != epoch));
    }

    #[test]
    fn sample_life_events_start_with_birth() {
        let map = sample_life_events();
        let (first_date, first_events) = map.iter().next().unwrap();
        assert_eq!(*first_date, ymd(1991, 6, 5));
        assert_eq!(first_events[0].headline, "🐣 Born");
    }
}
