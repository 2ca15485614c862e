//! End-to-end scenarios across the whole engine: configuration to week
//! sequence to merged output to scroll tracking.

use chrono::NaiveDate;
use lifeweeks_core::{
    decade_milestones, merge_events, weeks, AppConfig, DecadeTracker, EventFilters, EventMap,
    EventSource, GridGeometry, LifeEvent, NavState, PersonalCategory, VisibleCell, Week,
    WeeksConfig,
};

fn default_grid() -> (AppConfig, Vec<Week>) {
    let config = AppConfig::default();
    let grid = weeks(&config.weeks_config().unwrap()).collect();
    (config, grid)
}

#[test]
fn born_event_on_week_zero() {
    let (config, grid) = default_grid();
    let derived = config.derived().unwrap();

    let mut life = EventMap::new();
    life.insert(
        NaiveDate::from_ymd_opt(1991, 6, 5).unwrap(),
        vec![LifeEvent::new("Born").with_category(PersonalCategory::Personal)],
    );
    let world = EventMap::new();

    let filters = EventFilters::default().with_world_events(false);
    assert!(filters.personal_categories.all_enabled());

    let merged = merge_events(&grid, &life, &world, &derived, &filters);
    assert_eq!(merged.len(), grid.len());

    let week0 = &merged[0];
    assert_eq!(week0.week.index, 0);
    assert_eq!(week0.events.len(), 1);
    assert_eq!(week0.events[0].headline, "Born");
    assert_eq!(week0.events[0].source, EventSource::Personal);
    assert_eq!(week0.events[0].category.as_deref(), Some("personal"));
}

#[test]
fn default_config_yields_nine_decades() {
    let (config, _) = default_grid();
    let milestones = decade_milestones(&config.weeks_config().unwrap());
    let ids: Vec<&str> = milestones.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(
        ids,
        [
            "decade-0", "decade-10", "decade-20", "decade-30", "decade-40", "decade-50",
            "decade-60", "decade-70", "decade-80"
        ]
    );
}

#[test]
fn tracker_reads_merged_cells_without_string_parsing() {
    let (config, grid) = default_grid();
    let derived = config.derived().unwrap();
    let merged = merge_events(
        &grid,
        &EventMap::new(),
        &EventMap::new(),
        &derived,
        &EventFilters::default(),
    );

    // A cell from a week at age 23 sits in the viewport band.
    let at_23 = merged
        .iter()
        .find(|w| w.week.age_years == 23)
        .expect("grid covers age 23");
    let cell = VisibleCell::from_merged(at_23, 100.0, 120.0);
    assert_eq!(cell.decade, Some(20));

    let mut tracker = DecadeTracker::new(derived.birth_year);
    tracker.measure(Some(GridGeometry { grid_top_px: 800.0 }));
    let state = tracker.handle_scroll(850.0, &[cell]);
    assert_eq!(state.nav, NavState::Visible);
    assert_eq!(state.decade_id(), "decade-20");
}

#[test]
fn tooltip_contract_holds_for_every_week() {
    let (config, grid) = default_grid();
    let derived = config.derived().unwrap();
    let merged = merge_events(
        &grid,
        &EventMap::new(),
        &EventMap::new(),
        &derived,
        &EventFilters::default(),
    );

    // Every tooltip matches one of the two recognized forms, so a
    // tracker driven purely off tooltips still resolves each cell. The
    // date form derives age from the calendar year, which is the legacy
    // behavior; it only has to resolve, not agree with the typed decade.
    use chrono::Datelike;
    let mut tracker = DecadeTracker::new(derived.birth_year);
    for week in &merged {
        let cell = VisibleCell {
            top_px: 100.0,
            bottom_px: 120.0,
            decade: None,
            tooltip: Some(week.tooltip()),
        };
        let state = tracker.handle_scroll(0.0, &[cell]);
        let expected = if week.week.birthday_week {
            week.week.decade
        } else {
            let age = (week.week.start.year() - derived.birth_year).max(0) as u32;
            age / 10 * 10
        };
        assert_eq!(state.active_decade, expected, "week {}", week.week.index);
    }
}

#[test]
fn restart_produces_identical_grid() {
    let cfg = WeeksConfig::parse("1991-06-05", 2071).unwrap();
    let a: Vec<Week> = weeks(&cfg).collect();
    let b: Vec<Week> = weeks(&cfg).collect();
    assert_eq!(a, b);
    // ~52.18 weeks per year over 80 years.
    assert!(a.len() > 80 * 52 && a.len() < 81 * 53);
}
