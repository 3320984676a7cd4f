//! # oriel-nav — Navigation State Model
//!
//! The single source of truth for "what is currently shown" in the Oriel
//! infographic, and the only place user intents become state changes.
//!
//! ## Design
//!
//! - **Total transitions.** Every operation on [`Navigator`] is a total
//!   function: unknown keys, out-of-range indices, and wrong-view requests
//!   are silent no-ops, never errors. The inputs come from a closed UI
//!   surface, so rejecting at this boundary keeps the contract explicit and
//!   testable without an error taxonomy.
//!
//! - **Virtual time.** Debounced transitions (the 300 ms step fade and the
//!   500 ms journey-start window) and the 3 s intro timer are settled by
//!   [`Navigator::tick`] against caller-supplied elapsed time. There are no
//!   OS timers, so every timing scenario is deterministic under test and
//!   dropping the navigator cannot leak a callback that mutates state after
//!   teardown.
//!
//! - **Last-writer-wins.** A second transition request arriving inside a
//!   debounce window overwrites the pending target; rapid step requests are
//!   never queued.
//!
//! The two presentation flags orthogonal to navigation — the A/B layout
//! variant and the floating panel — live in [`ShellState`], deliberately
//! outside the main state machine.

pub mod announcer;
pub mod keys;
pub mod navigator;
pub mod shell;
pub mod state;
pub mod view;

pub use announcer::LiveRegion;
pub use keys::{handle_key, Key};
pub use navigator::{
    Navigator, INTRO_DURATION, JOURNEY_START_DEBOUNCE, SCROLL_DISTANCE, STEP_DEBOUNCE,
};
pub use shell::{ShellState, Variant};
pub use state::NavigationState;
pub use view::View;
