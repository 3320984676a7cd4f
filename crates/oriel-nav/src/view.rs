//! # Top-Level Views
//!
//! The six-state view machine:
//!
//! ```text
//! Intro ──(3 s timer, only edge)──▶ Overview ◀──▶ Journeys ◀──▶ Journey
//!                                      ▲              ▲
//!                                      └──▶ Systems ──┴──▶ Building
//! ```
//!
//! All non-intro states are mutually reachable via `select_view` and
//! `start_journey`; there is no terminal state — the machine runs for the
//! lifetime of the session.

use serde::{Deserialize, Serialize};

/// The active top-level view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Startup splash. Exits to [`View::Overview`] after the intro timer
    /// fires; no user input is accepted as an alternate transition.
    Intro,
    /// Landing page with hero, stats, and journey previews.
    Overview,
    /// Journey selection grid.
    Journeys,
    /// Step-by-step detail of the active journey.
    Journey,
    /// Smart systems cards.
    Systems,
    /// Building levels with expandable floor details.
    Building,
}

impl View {
    /// Parse a user-selectable view name.
    ///
    /// Accepts the five-member enumeration only — "intro" is a startup
    /// pseudo-state, not a navigation target, and unrecognized names return
    /// `None` so callers can treat them as no-ops.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "overview" => Some(Self::Overview),
            "journeys" => Some(Self::Journeys),
            "journey" => Some(Self::Journey),
            "systems" => Some(Self::Systems),
            "building" => Some(Self::Building),
            _ => None,
        }
    }

    /// The lowercase name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::Overview => "overview",
            Self::Journeys => "journeys",
            Self::Journey => "journey",
            Self::Systems => "systems",
            Self::Building => "building",
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
