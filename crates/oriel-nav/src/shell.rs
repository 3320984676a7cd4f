//! # Shell Flags
//!
//! Two presentation toggles that sit outside the navigation machine: the
//! A/B layout variant and the floating info panel. They never interact with
//! views, journeys, or timers, so they get their own record instead of two
//! more fields on [`NavigationState`](crate::NavigationState).

use serde::{Deserialize, Serialize};

/// The two selectable page layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// The original single-page layout.
    V1,
    /// The redesigned multi-view layout. The default.
    #[default]
    V2,
}

/// Presentation flags orthogonal to navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellState {
    /// Which layout renders.
    pub variant: Variant,
    /// Whether the floating info panel is collapsed to its button.
    pub panel_minimized: bool,
}

impl ShellState {
    /// V2 layout, panel collapsed.
    pub fn new() -> Self {
        Self {
            variant: Variant::V2,
            panel_minimized: true,
        }
    }

    /// Flip between the two layouts.
    pub fn toggle_variant(&mut self) {
        self.variant = match self.variant {
            Variant::V1 => Variant::V2,
            Variant::V2 => Variant::V1,
        };
    }

    /// Expand or collapse the floating panel.
    pub fn toggle_panel(&mut self) {
        self.panel_minimized = !self.panel_minimized;
    }
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new()
    }
}
