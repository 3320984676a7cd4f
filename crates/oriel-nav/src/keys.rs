//! # Keyboard Glue
//!
//! Routes raw key events to the navigator and shell. Deliberately thin:
//! every binding delegates to an operation that is also reachable by
//! pointer, so the keyboard adds no behavior of its own.

use crate::navigator::Navigator;
use crate::shell::ShellState;
use crate::view::View;

/// A key event, already decoded by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    /// Any printable character, case preserved.
    Char(char),
}

/// Dispatch one key event.
///
/// When `in_text_input` is true the event belongs to the focused field and
/// nothing here fires. Otherwise:
///
/// - `v`/`V` flips the layout variant, `m`/`M` the floating panel, in any
///   view;
/// - right/down and left/up arrows step through the active journey, only
///   while the journey view is showing.
///
/// Everything else passes through untouched.
pub fn handle_key(nav: &mut Navigator, shell: &mut ShellState, key: Key, in_text_input: bool) {
    if in_text_input {
        return;
    }
    let in_journey = nav.state().view == View::Journey;
    match key {
        Key::Char('v' | 'V') => shell.toggle_variant(),
        Key::Char('m' | 'M') => shell.toggle_panel(),
        Key::ArrowRight | Key::ArrowDown if in_journey => nav.advance_step(),
        Key::ArrowLeft | Key::ArrowUp if in_journey => nav.retreat_step(),
        _ => {}
    }
}
