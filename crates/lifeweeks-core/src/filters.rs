//! Event visibility filters.
//!
//! Filters are a pure predicate over already-computed data; updates
//! construct a new value from the old one plus a delta, never mutating
//! in place. The underlying event datasets are untouched.

use serde::{Deserialize, Serialize};

use crate::events::{LifeEvent, PersonalCategory, WorldEvent};

/// Per-category toggles for personal events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryToggles {
    pub personal: bool,
    pub education: bool,
    pub work: bool,
    pub travel: bool,
    pub achievement: bool,
}

impl CategoryToggles {
    /// All categories set to `enabled`.
    pub fn all(enabled: bool) -> Self {
        Self {
            personal: enabled,
            education: enabled,
            work: enabled,
            travel: enabled,
            achievement: enabled,
        }
    }

    pub fn get(&self, category: PersonalCategory) -> bool {
        match category {
            PersonalCategory::Personal => self.personal,
            PersonalCategory::Education => self.education,
            PersonalCategory::Work => self.work,
            PersonalCategory::Travel => self.travel,
            PersonalCategory::Achievement => self.achievement,
        }
    }

    /// A copy with one category toggled.
    pub fn with(self, category: PersonalCategory, enabled: bool) -> Self {
        let mut next = self;
        match category {
            PersonalCategory::Personal => next.personal = enabled,
            PersonalCategory::Education => next.education = enabled,
            PersonalCategory::Work => next.work = enabled,
            PersonalCategory::Travel => next.travel = enabled,
            PersonalCategory::Achievement => next.achievement = enabled,
        }
        next
    }

    pub fn all_enabled(&self) -> bool {
        PersonalCategory::ALL.iter().all(|c| self.get(*c))
    }
}

impl Default for CategoryToggles {
    fn default() -> Self {
        Self::all(true)
    }
}

/// Visibility state for the merged grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventFilters {
    pub show_personal_events: bool,
    pub show_world_events: bool,
    pub show_presidents: bool,
    pub personal_categories: CategoryToggles,
}

impl EventFilters {
    pub fn with_personal_events(self, enabled: bool) -> Self {
        Self {
            show_personal_events: enabled,
            ..self
        }
    }

    pub fn with_world_events(self, enabled: bool) -> Self {
        Self {
            show_world_events: enabled,
            ..self
        }
    }

    pub fn with_presidents(self, enabled: bool) -> Self {
        Self {
            show_presidents: enabled,
            ..self
        }
    }

    pub fn with_category(self, category: PersonalCategory, enabled: bool) -> Self {
        Self {
            personal_categories: self.personal_categories.with(category, enabled),
            ..self
        }
    }

    pub fn with_all_categories(self, enabled: bool) -> Self {
        Self {
            personal_categories: CategoryToggles::all(enabled),
            ..self
        }
    }

    /// A personal event is included iff personal events are on and its
    /// category (when present) is toggled on.
    pub fn allows_life_event(&self, event: &LifeEvent) -> bool {
        self.show_personal_events
            && event
                .category
                .map(|c| self.personal_categories.get(c))
                .unwrap_or(true)
    }

    /// A world event is included iff world events are on, with
    /// presidential records additionally gated by the presidents toggle.
    pub fn allows_world_event(&self, event: &WorldEvent) -> bool {
        self.show_world_events && (!event.presidential || self.show_presidents)
    }
}

impl Default for EventFilters {
    fn default() -> Self {
        Self {
            show_personal_events: true,
            show_world_events: true,
            show_presidents: true,
            personal_categories: CategoryToggles::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::WorldCategory;

    #[test]
    fn updates_are_immutable() {
        let base = EventFilters::default();
        let toggled = base.with_world_events(false);
        assert!(base.show_world_events);
        assert!(!toggled.show_world_events);
        // Re-applying the delta restores the original value.
        assert_eq!(toggled.with_world_events(true), base);
    }

    #[test]
    fn category_gating() {
        let filters = EventFilters::default().with_category(PersonalCategory::Work, false);
        let work = LifeEvent::new("New job").with_category(PersonalCategory::Work);
        let travel = LifeEvent::new("Trip").with_category(PersonalCategory::Travel);
        assert!(!filters.allows_life_event(&work));
        assert!(filters.allows_life_event(&travel));
    }

    #[test]
    fn uncategorized_events_pass_category_filters() {
        let filters = EventFilters::default().with_all_categories(false);
        let event = LifeEvent::new("Marker");
        assert!(filters.allows_life_event(&event));
        assert!(!filters.personal_categories.all_enabled());
    }

    #[test]
    fn personal_master_switch_wins() {
        let filters = EventFilters::default().with_personal_events(false);
        let event = LifeEvent::new("Born").with_category(PersonalCategory::Personal);
        assert!(!filters.allows_life_event(&event));
    }

    #[test]
    fn presidents_sub_filter() {
        let inauguration =
            WorldEvent::new("Inauguration", WorldCategory::Politics).as_presidential();
        let brexit = WorldEvent::new("Brexit Vote", WorldCategory::Politics);

        let filters = EventFilters::default().with_presidents(false);
        assert!(!filters.allows_world_event(&inauguration));
        // Non-presidential politics events are unaffected.
        assert!(filters.allows_world_event(&brexit));

        let world_off = filters.with_world_events(false);
        assert!(!world_off.allows_world_event(&brexit));
    }
}
