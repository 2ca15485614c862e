//! Scroll-decade tracker: sticky-nav visibility and the decade
//! currently in view.
//!
//! The tracker is a caller-driven state machine — no internal threads
//! and no listeners of its own. The host forwards geometry measurements
//! (`measure`) and scroll positions (`handle_scroll`); both handlers are
//! idempotent, so coalesced or re-entrant invocations with the same
//! inputs cannot corrupt state. Dropping the tracker (or unsubscribing
//! an [`ObserverHandle`]) detaches everything.
//!
//! Decade detection prefers the typed `decade` metadata attached to
//! cells at merge time. Parsing tooltip text is kept only as a fallback
//! for cells that carry no metadata.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::decade::decade_id;
use crate::merge::MergedWeek;

/// Buffer subtracted from the grid's top edge when computing the nav
/// threshold.
pub const NAV_BUFFER_PX: f64 = 10.0;

/// Lower clamp for the nav threshold.
pub const MIN_NAV_THRESHOLD_PX: f64 = 50.0;

/// Threshold used until a real geometry measurement succeeds.
pub const FALLBACK_NAV_THRESHOLD_PX: f64 = 150.0;

/// A cell is "in view" when its top edge is at or above this line and
/// its bottom edge at or below [`VIEW_BAND_BOTTOM_PX`].
pub const VIEW_BAND_TOP_PX: f64 = 150.0;

/// Lower edge of the in-view band.
pub const VIEW_BAND_BOTTOM_PX: f64 = 50.0;

static AGE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Turned (\d+) years? old").expect("age pattern compiles"));
static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\w{3} \d{1,2}, (\d{4})").expect("date pattern compiles"));

/// Visibility of the decade navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavState {
    Hidden,
    Visible,
}

/// The tracker's externally observable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerState {
    pub nav: NavState,
    /// Decade of age currently in view (0, 10, 20, ...).
    pub active_decade: u32,
}

impl TrackerState {
    /// Anchor id of the active decade, e.g. `decade-20`.
    pub fn decade_id(&self) -> String {
        decade_id(self.active_decade)
    }
}

/// Position of the grid's top edge, measured from the top of the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    pub grid_top_px: f64,
}

/// One rendered week cell near the viewport, in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleCell {
    /// Top edge relative to the viewport.
    pub top_px: f64,
    /// Bottom edge relative to the viewport.
    pub bottom_px: f64,
    /// Typed decade metadata attached at merge time.
    pub decade: Option<u32>,
    /// Tooltip text, for cells that predate typed metadata.
    pub tooltip: Option<String>,
}

impl VisibleCell {
    /// Build a cell from merged output; the decade travels as typed
    /// metadata, no string parsing needed downstream.
    pub fn from_merged(merged: &MergedWeek, top_px: f64, bottom_px: f64) -> Self {
        Self {
            top_px,
            bottom_px,
            decade: Some(merged.week.decade),
            tooltip: Some(merged.tooltip()),
        }
    }

    fn in_band(&self) -> bool {
        self.top_px <= VIEW_BAND_TOP_PX && self.bottom_px >= VIEW_BAND_BOTTOM_PX
    }
}

/// Observer notified when the tracker state changes.
pub trait NavObserver {
    fn on_change(&self, state: &TrackerState);
}

/// Function-based observer for simple cases.
pub struct FnNavObserver<F: Fn(&TrackerState)>(pub F);

impl<F: Fn(&TrackerState)> NavObserver for FnNavObserver<F> {
    fn on_change(&self, state: &TrackerState) {
        (self.0)(state);
    }
}

/// Handle returned by [`DecadeTracker::subscribe`]; pass it back to
/// [`DecadeTracker::unsubscribe`] to detach the observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObserverHandle(u64);

/// Tracks nav visibility and the active decade from scroll position.
pub struct DecadeTracker {
    birth_year: i32,
    threshold_px: f64,
    state: TrackerState,
    observers: Vec<(u64, Box<dyn NavObserver>)>,
    next_observer_id: u64,
}

impl DecadeTracker {
    /// Initial state: nav hidden, `decade-0` active, fallback threshold.
    pub fn new(birth_year: i32) -> Self {
        Self {
            birth_year,
            threshold_px: FALLBACK_NAV_THRESHOLD_PX,
            state: TrackerState {
                nav: NavState::Hidden,
                active_decade: 0,
            },
            observers: Vec::new(),
            next_observer_id: 0,
        }
    }

    pub fn state(&self) -> TrackerState {
        self.state
    }

    pub fn threshold_px(&self) -> f64 {
        self.threshold_px
    }

    /// Register an observer; it fires on every state change until
    /// unsubscribed.
    pub fn subscribe(&mut self, observer: Box<dyn NavObserver>) -> ObserverHandle {
        let id = self.next_observer_id;
        self.next_observer_id += 1;
        self.observers.push((id, observer));
        ObserverHandle(id)
    }

    pub fn unsubscribe(&mut self, handle: ObserverHandle) {
        self.observers.retain(|(id, _)| *id != handle.0);
    }

    /// Recompute the nav threshold from live grid geometry.
    ///
    /// Call whenever the viewport or grid layout can have changed. A
    /// `None` measurement (grid not mounted yet) keeps the current
    /// threshold, which starts at the fallback value.
    pub fn measure(&mut self, geometry: Option<GridGeometry>) {
        if let Some(geometry) = geometry {
            self.threshold_px = (geometry.grid_top_px - NAV_BUFFER_PX).max(MIN_NAV_THRESHOLD_PX);
            tracing::debug!(threshold_px = self.threshold_px, "nav threshold recomputed");
        }
    }

    /// Process a scroll position and the cells currently near the
    /// viewport, returning the (possibly unchanged) state.
    ///
    /// The first in-band cell that yields a decade wins; when none does,
    /// the previous decade is retained.
    pub fn handle_scroll(&mut self, scroll_y: f64, cells: &[VisibleCell]) -> TrackerState {
        let nav = if scroll_y > self.threshold_px {
            NavState::Visible
        } else {
            NavState::Hidden
        };

        let mut active_decade = self.state.active_decade;
        for cell in cells.iter().filter(|c| c.in_band()) {
            if let Some(decade) = self.cell_decade(cell) {
                active_decade = decade;
                break;
            }
        }

        let next = TrackerState { nav, active_decade };
        if next != self.state {
            self.state = next;
            for (_, observer) in &self.observers {
                observer.on_change(&self.state);
            }
        }
        self.state
    }

    fn cell_decade(&self, cell: &VisibleCell) -> Option<u32> {
        if let Some(decade) = cell.decade {
            return Some(decade);
        }
        let tooltip = cell.tooltip.as_deref()?;
        if let Some(captures) = AGE_PATTERN.captures(tooltip) {
            let age: u32 = captures[1].parse().ok()?;
            return Some(age / 10 * 10);
        }
        if let Some(captures) = DATE_PATTERN.captures(tooltip) {
            let year: i32 = captures[1].parse().ok()?;
            let age = (year - self.birth_year).max(0) as u32;
            return Some(age / 10 * 10);
        }
        None
    }
}
