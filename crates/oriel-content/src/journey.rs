//! # Journey Types
//!
//! A journey is a persona-driven path through the building: an ordered,
//! non-empty sequence of touchpoints from arrival to departure. The
//! navigation state model addresses steps by zero-based index and never
//! holds an index outside `[0, steps.len())`.

use serde::{Deserialize, Serialize};

/// One touchpoint in a journey.
///
/// Each step pairs a physical experience with the digital touchpoints the
/// visitor sees and the background systems working out of sight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JourneyStep {
    /// Stable identifier within the journey (e.g., "checkin").
    pub id: String,
    /// Display title (e.g., "Self-Service Check-in").
    pub title: String,
    /// Where in the building the step happens.
    pub location: String,
    /// Display time label — a clock time ("09:15"), a range, or a relative
    /// day ("Day -7"). Free text, never parsed.
    pub time: String,
    /// What the person physically experiences at this touchpoint.
    pub physical: String,
    /// Digital touchpoints visible to the person, in display order.
    pub digital: Vec<String>,
    /// Systems working behind the scenes, in display order.
    pub background: Vec<String>,
    /// Display icon token.
    pub icon: String,
}

/// A named persona-driven path through the facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journey {
    /// Stable key the state model references (e.g., "outpatient").
    pub key: String,
    /// Display title (e.g., "Outpatient Journey").
    pub title: String,
    /// Persona label (e.g., "Sarah, 58").
    pub persona: String,
    /// One-line description of the path.
    pub description: String,
    /// Display icon token.
    pub icon: String,
    /// Theme accent color (hex).
    pub color: String,
    /// Theme gradient token.
    pub gradient: String,
    /// Ordered, non-empty sequence of touchpoints.
    pub steps: Vec<JourneyStep>,
}

impl Journey {
    /// The step at `index`, if in range.
    pub fn step(&self, index: usize) -> Option<&JourneyStep> {
        self.steps.get(index)
    }

    /// Zero-based index of the last step.
    ///
    /// Steps are non-empty by the content invariant, so this saturates at 0
    /// rather than underflowing on a degenerate (invalid) journey.
    pub fn last_step(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}
