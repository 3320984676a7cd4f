//! # Navigator
//!
//! Owns the [`NavigationState`] and translates user intents into state
//! changes against an injected, read-only [`ContentTable`].
//!
//! ## Timing model
//!
//! The navigator never reads a clock. The driver supplies elapsed time
//! (duration since application start) through [`Navigator::tick`], which
//! settles at most one pending debounced transition and the one-shot intro
//! timer. Step changes apply in two phases, preserving the original UX
//! contract:
//!
//! 1. the request immediately sets `is_transitioning = true` (fade-out,
//!    previous content loses interactivity),
//! 2. after the debounce window the target step commits and the flag clears.
//!
//! A request arriving during an open window overwrites the pending target
//! (last-writer-wins); the new target is computed from the committed step,
//! not the pending one.

use std::time::Duration;

use oriel_content::{ContentTable, Journey, JourneyStep};

use crate::announcer::LiveRegion;
use crate::state::NavigationState;
use crate::view::View;

/// How long the intro splash shows before auto-advancing to the overview.
pub const INTRO_DURATION: Duration = Duration::from_millis(3000);

/// Debounce window for step changes within a journey.
pub const STEP_DEBOUNCE: Duration = Duration::from_millis(300);

/// Debounce window when a journey starts (longer, covers the view change).
pub const JOURNEY_START_DEBOUNCE: Duration = Duration::from_millis(500);

/// Scroll distance (px) over which header scroll progress normalizes to 1.
pub const SCROLL_DISTANCE: f64 = 80.0;

// ─── Pending Transitions ─────────────────────────────────────────────

/// What happens when an open debounce window settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    /// Commit `target` as the journey step.
    Step { target: usize },
    /// Clear the transitioning flag only (journey start).
    Settle,
}

#[derive(Debug, Clone, Copy)]
struct Scheduled {
    due: Duration,
    pending: Pending,
}

// ─── Navigator ───────────────────────────────────────────────────────

/// The navigation state machine.
///
/// Created once at application start; discarded on unload. Dropping it
/// drops any pending transition with it — nothing can mutate state after
/// teardown.
#[derive(Debug, Clone)]
pub struct Navigator {
    table: ContentTable,
    state: NavigationState,
    live: LiveRegion,
    now: Duration,
    intro_due: Option<Duration>,
    scheduled: Option<Scheduled>,
    focus_requested: bool,
}

impl Navigator {
    /// Start a session on the intro splash.
    pub fn new(table: ContentTable) -> Self {
        Self {
            table,
            state: NavigationState::new(),
            live: LiveRegion::new(),
            now: Duration::ZERO,
            intro_due: Some(INTRO_DURATION),
            scheduled: None,
            focus_requested: false,
        }
    }

    /// Resume a session from a serialized [`NavigationState`].
    ///
    /// The intro timer is re-armed only if the restored state is still on
    /// the splash.
    pub fn from_state(table: ContentTable, state: NavigationState) -> Self {
        let intro_due = (state.view == View::Intro).then_some(INTRO_DURATION);
        Self {
            table,
            state,
            live: LiveRegion::new(),
            now: Duration::ZERO,
            intro_due,
            scheduled: None,
            focus_requested: false,
        }
    }

    /// The current state, for rendering or serialization.
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// The injected content table.
    pub fn content(&self) -> &ContentTable {
        &self.table
    }

    /// Whether a debounce window is currently open.
    pub fn has_pending_transition(&self) -> bool {
        self.scheduled.is_some()
    }

    // ── Time ─────────────────────────────────────────────────────────

    /// Advance virtual time and settle anything that has come due.
    pub fn tick(&mut self, now: Duration) {
        self.now = now;

        if let Some(due) = self.intro_due {
            if now >= due {
                self.intro_due = None;
                self.set_view(View::Overview);
            }
        }

        if let Some(scheduled) = self.scheduled {
            if now >= scheduled.due {
                self.scheduled = None;
                self.state.is_transitioning = false;
                if let Pending::Step { target } = scheduled.pending {
                    self.state.journey_step = target;
                    if let Some(step) = self.current_step() {
                        let title = step.title.clone();
                        self.live.announce(format!("Step {}: {title}", target + 1));
                    }
                }
            }
        }
    }

    fn intro_active(&self) -> bool {
        self.state.view == View::Intro
    }

    /// Change the view, closing the mobile menu and requesting main-content
    /// focus when the view actually changes.
    fn set_view(&mut self, view: View) {
        if self.state.view != view {
            self.state.mobile_menu_open = false;
            self.focus_requested = true;
        }
        self.state.view = view;
    }

    // ── User Intents ─────────────────────────────────────────────────

    /// Select one of the five navigable views.
    pub fn select_view(&mut self, view: View) {
        if self.intro_active() || view == View::Intro {
            return;
        }
        self.set_view(view);
        self.live.announce(format!("Navigated to {view} view"));
    }

    /// Select a view by its lowercase name; unrecognized names are no-ops.
    pub fn select_view_named(&mut self, name: &str) {
        if let Some(view) = View::parse(name) {
            self.select_view(view);
        }
    }

    /// Start a journey from the beginning. Unknown keys are no-ops.
    pub fn start_journey(&mut self, key: &str) {
        if self.intro_active() {
            return;
        }
        let Some(journey) = self.table.journey(key) else {
            return;
        };
        let announcement = format!("Started {} for {}", journey.title, journey.persona);
        self.state.active_journey = Some(key.to_string());
        self.state.journey_step = 0;
        self.state.is_transitioning = true;
        self.set_view(View::Journey);
        self.scheduled = Some(Scheduled {
            due: self.now + JOURNEY_START_DEBOUNCE,
            pending: Pending::Settle,
        });
        self.live.announce(announcement);
    }

    /// Move to the next step; a no-op at the last step.
    pub fn advance_step(&mut self) {
        let Some(journey) = self.active_journey() else {
            return;
        };
        if self.state.journey_step < journey.last_step() {
            self.schedule_step(self.state.journey_step + 1);
        }
    }

    /// Move to the previous step; a no-op at step 0.
    pub fn retreat_step(&mut self) {
        if self.active_journey().is_none() {
            return;
        }
        if self.state.journey_step > 0 {
            self.schedule_step(self.state.journey_step - 1);
        }
    }

    /// Jump straight to `index`; out-of-range indices are no-ops.
    pub fn jump_to_step(&mut self, index: usize) {
        let Some(journey) = self.active_journey() else {
            return;
        };
        if index < journey.steps.len() {
            self.schedule_step(index);
        }
    }

    fn schedule_step(&mut self, target: usize) {
        self.state.is_transitioning = true;
        // Overwrites any open window: last writer wins, no queueing.
        self.scheduled = Some(Scheduled {
            due: self.now + STEP_DEBOUNCE,
            pending: Pending::Step { target },
        });
    }

    /// Expand a floor's detail panel, or collapse it if already expanded.
    /// Unknown level numbers are no-ops.
    pub fn toggle_floor(&mut self, level: i32) {
        if self.intro_active() || self.table.level(level).is_none() {
            return;
        }
        self.state.selected_floor = match self.state.selected_floor {
            Some(current) if current == level => None,
            _ => Some(level),
        };
    }

    /// Expand a smart system's detail panel, or collapse it if already
    /// expanded. Unknown keys are no-ops.
    pub fn toggle_system(&mut self, key: &str) {
        if self.intro_active() || self.table.system(key).is_none() {
            return;
        }
        self.state.active_system = match self.state.active_system.as_deref() {
            Some(current) if current == key => None,
            _ => Some(key.to_string()),
        };
    }

    /// Flip the mobile navigation menu.
    pub fn toggle_mobile_menu(&mut self) {
        if self.intro_active() {
            return;
        }
        self.state.mobile_menu_open = !self.state.mobile_menu_open;
    }

    /// Record the viewport scroll offset, normalized over
    /// [`SCROLL_DISTANCE`] and clamped to 1. Offsets are non-negative by
    /// construction at the event source.
    pub fn update_scroll_progress(&mut self, offset: f64) {
        self.state.scroll_progress = (offset / SCROLL_DISTANCE).min(1.0);
    }

    // ── Derived Views (computed, never stored) ───────────────────────

    fn active_journey(&self) -> Option<&Journey> {
        self.state
            .active_journey
            .as_deref()
            .and_then(|key| self.table.journey(key))
    }

    /// The active journey record, if any.
    pub fn current_journey(&self) -> Option<&Journey> {
        self.active_journey()
    }

    /// The current step record; valid only while a journey is active.
    pub fn current_step(&self) -> Option<&JourneyStep> {
        self.active_journey()?.step(self.state.journey_step)
    }

    /// "Step n of m" for the active journey, 1-based.
    pub fn step_position(&self) -> Option<(usize, usize)> {
        let journey = self.active_journey()?;
        Some((self.state.journey_step + 1, journey.steps.len()))
    }

    /// Whether `item`'s nav button renders highlighted. The journeys item
    /// stays lit while a journey detail is open.
    pub fn is_nav_highlighted(&self, item: View) -> bool {
        self.state.view == item || (item == View::Journeys && self.state.view == View::Journey)
    }

    // ── Accessibility Glue ───────────────────────────────────────────

    /// Drain pending screen-reader announcements, in spoken order.
    pub fn drain_announcements(&mut self) -> Vec<String> {
        self.live.drain()
    }

    /// Take the "focus main content" request raised by a view change. The
    /// driver must move focus without scrolling the viewport.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const MS: fn(u64) -> Duration = Duration::from_millis;

    /// A navigator past the intro splash, sitting on the overview.
    fn ready() -> Navigator {
        let mut nav = Navigator::new(ContentTable::builtin());
        nav.tick(INTRO_DURATION);
        nav.drain_announcements();
        nav.take_focus_request();
        nav
    }

    /// A navigator on the given journey with the start window settled.
    fn on_journey(key: &str) -> Navigator {
        let mut nav = ready();
        nav.start_journey(key);
        nav.tick(INTRO_DURATION + JOURNEY_START_DEBOUNCE);
        nav.drain_announcements();
        nav
    }

    // ── Intro timer ──────────────────────────────────────────────────

    #[test]
    fn test_intro_exits_after_timer() {
        let mut nav = Navigator::new(ContentTable::builtin());
        assert_eq!(nav.state().view, View::Intro);
        nav.tick(MS(2999));
        assert_eq!(nav.state().view, View::Intro);
        nav.tick(MS(3000));
        assert_eq!(nav.state().view, View::Overview);
        assert!(nav.current_step().is_none());
    }

    #[test]
    fn test_intents_are_noops_during_intro() {
        let mut nav = Navigator::new(ContentTable::builtin());
        nav.select_view(View::Systems);
        nav.start_journey("outpatient");
        nav.toggle_floor(4);
        nav.toggle_system("signage");
        nav.toggle_mobile_menu();
        assert_eq!(nav.state().view, View::Intro);
        assert!(nav.state().active_journey.is_none());
        assert!(nav.state().selected_floor.is_none());
        assert!(nav.state().active_system.is_none());
        assert!(!nav.state().mobile_menu_open);
    }

    #[test]
    fn test_intro_exit_requests_focus() {
        let mut nav = Navigator::new(ContentTable::builtin());
        assert!(!nav.take_focus_request());
        nav.tick(INTRO_DURATION);
        assert!(nav.take_focus_request());
        assert!(!nav.take_focus_request());
    }

    // ── View selection ───────────────────────────────────────────────

    #[test]
    fn test_select_view_changes_view_and_closes_menu() {
        let mut nav = ready();
        nav.toggle_mobile_menu();
        assert!(nav.state().mobile_menu_open);
        nav.select_view(View::Building);
        assert_eq!(nav.state().view, View::Building);
        assert!(!nav.state().mobile_menu_open);
        assert!(nav.take_focus_request());
    }

    #[test]
    fn test_reselecting_same_view_keeps_menu_open() {
        let mut nav = ready();
        nav.select_view(View::Systems);
        nav.toggle_mobile_menu();
        nav.select_view(View::Systems);
        assert!(nav.state().mobile_menu_open);
    }

    #[test]
    fn test_select_view_named_unknown_is_noop() {
        let mut nav = ready();
        nav.select_view_named("dashboard");
        nav.select_view_named("intro");
        nav.select_view_named("");
        assert_eq!(nav.state().view, View::Overview);
    }

    #[test]
    fn test_select_view_announces() {
        let mut nav = ready();
        nav.select_view(View::Journeys);
        assert_eq!(nav.drain_announcements(), vec!["Navigated to journeys view"]);
    }

    #[test]
    fn test_nav_highlighting_covers_journey_detail() {
        let mut nav = ready();
        nav.start_journey("student");
        assert!(nav.is_nav_highlighted(View::Journeys));
        assert!(!nav.is_nav_highlighted(View::Overview));
        nav.select_view(View::Journeys);
        assert!(nav.is_nav_highlighted(View::Journeys));
    }

    // ── Journey start ────────────────────────────────────────────────

    #[test]
    fn test_start_journey_immediate_effects() {
        let mut nav = ready();
        nav.start_journey("clinician");
        assert_eq!(nav.state().view, View::Journey);
        assert_eq!(nav.state().active_journey.as_deref(), Some("clinician"));
        assert_eq!(nav.state().journey_step, 0);
        assert!(nav.state().is_transitioning);
        assert_eq!(
            nav.drain_announcements(),
            vec!["Started Clinician Workflow for Dr. James Chen"]
        );
    }

    #[test]
    fn test_start_journey_settles_after_500ms() {
        let mut nav = ready();
        nav.start_journey("clinician");
        nav.tick(INTRO_DURATION + MS(499));
        assert!(nav.state().is_transitioning);
        nav.tick(INTRO_DURATION + MS(500));
        assert!(!nav.state().is_transitioning);
        assert_eq!(nav.state().journey_step, 0);
    }

    #[test]
    fn test_start_journey_unknown_key_is_noop() {
        let mut nav = ready();
        nav.start_journey("inpatient");
        assert_eq!(nav.state().view, View::Overview);
        assert!(nav.state().active_journey.is_none());
        assert!(nav.drain_announcements().is_empty());
    }

    #[test]
    fn test_switching_journeys_resets_step() {
        let mut nav = on_journey("outpatient");
        nav.jump_to_step(5);
        nav.tick(INTRO_DURATION + JOURNEY_START_DEBOUNCE + STEP_DEBOUNCE);
        assert_eq!(nav.state().journey_step, 5);
        nav.start_journey("student");
        assert_eq!(nav.state().journey_step, 0);
        assert_eq!(nav.state().active_journey.as_deref(), Some("student"));
    }

    // ── Step transitions ─────────────────────────────────────────────

    #[test]
    fn test_advance_step_two_phase() {
        let mut nav = on_journey("outpatient");
        let base = INTRO_DURATION + JOURNEY_START_DEBOUNCE;
        nav.advance_step();
        // Phase one: flag up, step unchanged.
        assert!(nav.state().is_transitioning);
        assert_eq!(nav.state().journey_step, 0);
        nav.tick(base + MS(299));
        assert_eq!(nav.state().journey_step, 0);
        // Phase two: committed, flag down, announced.
        nav.tick(base + MS(300));
        assert_eq!(nav.state().journey_step, 1);
        assert!(!nav.state().is_transitioning);
        assert_eq!(
            nav.drain_announcements(),
            vec!["Step 2: Self-Service Check-in"]
        );
    }

    #[test]
    fn test_advance_at_last_step_is_noop() {
        let mut nav = on_journey("clinician");
        nav.jump_to_step(6);
        let settle = INTRO_DURATION + JOURNEY_START_DEBOUNCE + STEP_DEBOUNCE;
        nav.tick(settle);
        assert_eq!(nav.state().journey_step, 6);
        nav.advance_step();
        assert!(!nav.state().is_transitioning);
        assert!(!nav.has_pending_transition());
        nav.tick(settle + STEP_DEBOUNCE);
        assert_eq!(nav.state().journey_step, 6);
    }

    #[test]
    fn test_retreat_at_first_step_is_noop() {
        let mut nav = on_journey("surgical");
        nav.retreat_step();
        assert!(!nav.state().is_transitioning);
        assert!(!nav.has_pending_transition());
        assert_eq!(nav.state().journey_step, 0);
    }

    #[test]
    fn test_jump_out_of_range_is_noop() {
        let mut nav = on_journey("student");
        nav.jump_to_step(5);
        assert!(!nav.has_pending_transition());
        assert_eq!(nav.state().journey_step, 0);
    }

    #[test]
    fn test_step_ops_without_journey_are_noops() {
        let mut nav = ready();
        nav.advance_step();
        nav.retreat_step();
        nav.jump_to_step(0);
        assert!(!nav.has_pending_transition());
        assert!(!nav.state().is_transitioning);
    }

    #[test]
    fn test_double_advance_within_window_settles_once() {
        // Last-writer-wins: the second request re-targets from the
        // committed step, so two rapid "next" clicks land on step 1.
        let mut nav = on_journey("outpatient");
        let base = INTRO_DURATION + JOURNEY_START_DEBOUNCE;
        nav.advance_step();
        nav.tick(base + MS(100));
        nav.advance_step();
        nav.tick(base + MS(300));
        // First window's deadline passed, but it was overwritten.
        assert_eq!(nav.state().journey_step, 0);
        nav.tick(base + MS(400));
        assert_eq!(nav.state().journey_step, 1);
        assert_eq!(nav.drain_announcements().len(), 1);
    }

    #[test]
    fn test_jump_supersedes_pending_advance() {
        let mut nav = on_journey("outpatient");
        let base = INTRO_DURATION + JOURNEY_START_DEBOUNCE;
        nav.advance_step();
        nav.tick(base + MS(100));
        nav.jump_to_step(4);
        nav.tick(base + MS(400));
        assert_eq!(nav.state().journey_step, 4);
    }

    // ── Floor and system toggles ─────────────────────────────────────

    #[test]
    fn test_toggle_floor_involution() {
        let mut nav = ready();
        nav.toggle_floor(7);
        assert_eq!(nav.state().selected_floor, Some(7));
        nav.toggle_floor(7);
        assert_eq!(nav.state().selected_floor, None);
    }

    #[test]
    fn test_toggle_floor_switches_not_stacks() {
        let mut nav = ready();
        nav.toggle_floor(3);
        nav.toggle_floor(9);
        assert_eq!(nav.state().selected_floor, Some(9));
    }

    #[test]
    fn test_toggle_floor_unknown_level_is_noop() {
        let mut nav = ready();
        nav.toggle_floor(12);
        nav.toggle_floor(-1);
        assert_eq!(nav.state().selected_floor, None);
        nav.toggle_floor(5);
        nav.toggle_floor(12);
        assert_eq!(nav.state().selected_floor, Some(5));
    }

    #[test]
    fn test_toggle_system_switches() {
        let mut nav = ready();
        nav.toggle_system("wayfinding");
        nav.toggle_system("signage");
        assert_eq!(nav.state().active_system.as_deref(), Some("signage"));
        nav.toggle_system("signage");
        assert_eq!(nav.state().active_system, None);
    }

    #[test]
    fn test_toggle_system_unknown_key_is_noop() {
        let mut nav = ready();
        nav.toggle_system("hvac");
        assert_eq!(nav.state().active_system, None);
    }

    // ── Menu and scroll ──────────────────────────────────────────────

    #[test]
    fn test_toggle_mobile_menu_flips() {
        let mut nav = ready();
        nav.toggle_mobile_menu();
        assert!(nav.state().mobile_menu_open);
        nav.toggle_mobile_menu();
        assert!(!nav.state().mobile_menu_open);
    }

    #[test]
    fn test_scroll_progress_normalization() {
        let mut nav = ready();
        nav.update_scroll_progress(0.0);
        assert_eq!(nav.state().scroll_progress, 0.0);
        nav.update_scroll_progress(40.0);
        assert_eq!(nav.state().scroll_progress, 0.5);
        nav.update_scroll_progress(80.0);
        assert_eq!(nav.state().scroll_progress, 1.0);
        nav.update_scroll_progress(500.0);
        assert_eq!(nav.state().scroll_progress, 1.0);
    }

    // ── Derived views and round-trip ─────────────────────────────────

    #[test]
    fn test_current_step_and_position() {
        let mut nav = on_journey("surgical");
        nav.jump_to_step(3);
        nav.tick(INTRO_DURATION + JOURNEY_START_DEBOUNCE + STEP_DEBOUNCE);
        assert_eq!(nav.current_step().unwrap().id, "theatre");
        assert_eq!(nav.step_position(), Some((4, 6)));
        assert_eq!(nav.current_journey().unwrap().key, "surgical");
    }

    #[test]
    fn test_state_roundtrip_preserves_derived_views() {
        let mut nav = on_journey("clinician");
        nav.jump_to_step(2);
        nav.tick(INTRO_DURATION + JOURNEY_START_DEBOUNCE + STEP_DEBOUNCE);
        nav.toggle_floor(6);
        nav.toggle_system("room_booking");

        let json = serde_json::to_string(nav.state()).unwrap();
        let restored: NavigationState = serde_json::from_str(&json).unwrap();
        let twin = Navigator::from_state(ContentTable::builtin(), restored);

        assert_eq!(twin.state(), nav.state());
        assert_eq!(
            twin.current_step().map(|s| &s.id),
            nav.current_step().map(|s| &s.id)
        );
        assert_eq!(twin.step_position(), nav.step_position());
        assert_eq!(
            twin.is_nav_highlighted(View::Journeys),
            nav.is_nav_highlighted(View::Journeys)
        );
    }

    // ── Properties ───────────────────────────────────────────────────

    fn journey_keys() -> Vec<&'static str> {
        vec!["outpatient", "clinician", "surgical", "student"]
    }

    proptest! {
        /// For every journey and every in-range index, jumping after a
        /// start lands exactly on that index once the window settles.
        #[test]
        fn prop_jump_to_step_in_range(key_idx in 0usize..4, index in 0usize..16) {
            let key = journey_keys()[key_idx];
            let mut nav = on_journey(key);
            let steps = nav.current_journey().unwrap().steps.len();
            nav.jump_to_step(index);
            nav.tick(Duration::from_secs(60));
            if index < steps {
                prop_assert_eq!(nav.state().journey_step, index);
            } else {
                prop_assert_eq!(nav.state().journey_step, 0);
            }
        }

        /// Double-toggle of any floor is the identity on selection state.
        #[test]
        fn prop_floor_double_toggle_is_identity(level in -5i32..16) {
            let mut nav = ready();
            let before = nav.state().selected_floor;
            nav.toggle_floor(level);
            nav.toggle_floor(level);
            prop_assert_eq!(nav.state().selected_floor, before);
        }

        /// The committed step never leaves [0, steps.len()) under any
        /// sequence of step intents.
        #[test]
        fn prop_step_stays_in_range(ops in proptest::collection::vec(0u8..4, 0..40)) {
            let mut nav = on_journey("outpatient");
            let steps = nav.current_journey().unwrap().steps.len();
            let mut now = INTRO_DURATION + JOURNEY_START_DEBOUNCE;
            for op in ops {
                match op {
                    0 => nav.advance_step(),
                    1 => nav.retreat_step(),
                    2 => nav.jump_to_step(5),
                    _ => nav.jump_to_step(99),
                }
                now += STEP_DEBOUNCE;
                nav.tick(now);
                prop_assert!(nav.state().journey_step < steps);
            }
        }
    }
}
