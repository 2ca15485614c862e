//! # Lifeweeks Core Library
//!
//! This library is the temporal computation engine behind the Lifeweeks
//! grid: a person's lifespan rendered as one cell per week from birth to
//! a projected horizon, with life and world events overlaid on the weeks
//! they fall into.
//!
//! ## Architecture
//!
//! - **Temporal Index**: a lazy, restartable iterator over 7-day week
//!   descriptors with derived age/decade metadata
//! - **Decade Milestones**: navigation anchors at 10-year age boundaries
//! - **Event Merger**: a pure function joining the personal and world
//!   event datasets onto the week sequence under a filter predicate
//! - **Decade Tracker**: a caller-driven state machine deriving nav
//!   visibility and the active decade from live scroll position
//!
//! ## Key Components
//!
//! - [`WeekIndex`]: the week sequence generator
//! - [`EventMerger`]: filtered week+event merge with stable milestone colors
//! - [`DecadeTracker`]: scroll-position state machine
//! - [`AppConfig`]: environment/TOML configuration with derived bounds

pub mod config;
pub mod datasets;
pub mod decade;
pub mod error;
pub mod events;
pub mod filters;
pub mod merge;
pub mod tracker;
pub mod week;

pub use config::{AppConfig, DerivedConfig, WeeksConfig, BIRTH_DATE_ENV, DEFAULT_BIRTH_DATE};
pub use decade::{decade_id, decade_milestones, DecadeMilestone};
pub use error::{ConfigError, CoreError, Result};
pub use events::{
    load_events_json, EventMap, LifeEvent, PersonalCategory, WorldCategory, WorldEvent,
};
pub use filters::{CategoryToggles, EventFilters};
pub use merge::{merge_events, EventMerger, EventSource, MergedWeek, WeekEvent, MILESTONE_PALETTE};
pub use tracker::{
    DecadeTracker, FnNavObserver, GridGeometry, NavObserver, NavState, ObserverHandle,
    TrackerState, VisibleCell,
};
pub use week::{weeks, Week, WeekIndex};
