//! # Navigation State
//!
//! The only mutable entity in the system. A plain serde record with no
//! hidden fields: serializing and restoring it reproduces identical derived
//! views for any reachable state.

use serde::{Deserialize, Serialize};

use crate::view::View;

/// All mutable UI state, mutated only by the transition methods on
/// [`Navigator`](crate::Navigator).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationState {
    /// The active top-level view.
    pub view: View,
    /// Key of the active journey; meaningful only in the journey view.
    pub active_journey: Option<String>,
    /// Zero-based index into the active journey's steps. Invariant:
    /// `0 <= journey_step < steps.len()` whenever `active_journey` is set.
    pub journey_step: usize,
    /// Level number of the expanded floor panel, if any.
    pub selected_floor: Option<i32>,
    /// Key of the expanded smart-system card (the "hotspot"), if any.
    pub active_system: Option<String>,
    /// True for the debounce window of a step change. Drives the fade and
    /// suppresses the previous content's interactivity — a visual flag, not
    /// a lock.
    pub is_transitioning: bool,
    /// Mobile navigation menu; closed automatically on every view change.
    pub mobile_menu_open: bool,
    /// Viewport scroll progress in [0, 1], purely presentational.
    pub scroll_progress: f64,
}

impl NavigationState {
    /// The startup state: intro splash, nothing selected.
    pub fn new() -> Self {
        Self {
            view: View::Intro,
            active_journey: None,
            journey_step: 0,
            selected_floor: None,
            active_system: None,
            is_transitioning: false,
            mobile_menu_open: false,
            scroll_progress: 0.0,
        }
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = NavigationState::new();
        assert_eq!(state.view, View::Intro);
        assert!(state.active_journey.is_none());
        assert_eq!(state.journey_step, 0);
        assert!(state.selected_floor.is_none());
        assert!(state.active_system.is_none());
        assert!(!state.is_transitioning);
        assert!(!state.mobile_menu_open);
        assert_eq!(state.scroll_progress, 0.0);
    }

    #[test]
    fn test_serde_roundtrip() {
        let state = NavigationState {
            view: View::Journey,
            active_journey: Some("clinician".to_string()),
            journey_step: 3,
            selected_floor: Some(4),
            active_system: Some("wayfinding".to_string()),
            is_transitioning: false,
            mobile_menu_open: true,
            scroll_progress: 0.5,
        };
        let json = serde_json::to_string(&state).unwrap();
        let parsed: NavigationState = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, state);
    }

    #[test]
    fn test_serialized_field_names_are_plain() {
        let json = serde_json::to_value(NavigationState::new()).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 8);
        assert_eq!(object["view"], "intro");
    }
}
