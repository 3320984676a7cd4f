//! # Content Table
//!
//! The three collections the presentation layer browses — journeys, smart
//! systems, building levels — with keyed lookup and the structural
//! invariants the navigation state model relies on.
//!
//! Collections are `Vec`s rather than maps: declaration order is display
//! order, the collections are small (4/6/11 in the builtin dataset), and a
//! linear scan keeps the lookup contract obvious.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::journey::Journey;
use crate::level::BuildingLevel;
use crate::system::SmartSystem;

// ─── Errors ──────────────────────────────────────────────────────────

/// Structural violations in a content table.
///
/// Only surfaced by [`ContentTable::validate()`] — lookups on an invalid
/// table still behave, they just cannot uphold the uniqueness contract.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ContentError {
    /// A journey has no steps.
    #[error("journey {key:?} has no steps")]
    EmptyJourney {
        /// The offending journey key.
        key: String,
    },

    /// Two journeys or two systems share a key.
    #[error("duplicate {kind} key {key:?}")]
    DuplicateKey {
        /// "journey" or "system".
        kind: &'static str,
        /// The duplicated key.
        key: String,
    },

    /// Two building levels share a level number.
    #[error("duplicate building level {level}")]
    DuplicateLevel {
        /// The duplicated level number.
        level: i32,
    },
}

// ─── Content Table ───────────────────────────────────────────────────

/// The immutable dataset the navigation state model consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentTable {
    /// Persona journeys, in display order.
    pub journeys: Vec<Journey>,
    /// Smart systems, in display order.
    pub systems: Vec<SmartSystem>,
    /// Building levels, top floor first.
    pub levels: Vec<BuildingLevel>,
}

impl ContentTable {
    /// Look up a journey by key.
    pub fn journey(&self, key: &str) -> Option<&Journey> {
        self.journeys.iter().find(|j| j.key == key)
    }

    /// Look up a smart system by key.
    pub fn system(&self, key: &str) -> Option<&SmartSystem> {
        self.systems.iter().find(|s| s.key == key)
    }

    /// Look up a building level by level number.
    pub fn level(&self, level: i32) -> Option<&BuildingLevel> {
        self.levels.iter().find(|f| f.level == level)
    }

    /// The remaining journeys in display order, starting after `key` and
    /// wrapping around.
    ///
    /// Drives the "explore another journey" panel shown on a journey's last
    /// step. Returns an empty list if `key` is unknown.
    pub fn other_journeys(&self, key: &str) -> Vec<&Journey> {
        let Some(current) = self.journeys.iter().position(|j| j.key == key) else {
            return Vec::new();
        };
        (1..self.journeys.len())
            .map(|offset| &self.journeys[(current + offset) % self.journeys.len()])
            .collect()
    }

    /// Check the structural invariants: every journey has at least one step,
    /// journey and system keys are unique, level numbers are unique.
    pub fn validate(&self) -> Result<(), ContentError> {
        for journey in &self.journeys {
            if journey.steps.is_empty() {
                return Err(ContentError::EmptyJourney {
                    key: journey.key.clone(),
                });
            }
        }
        for (i, journey) in self.journeys.iter().enumerate() {
            if self.journeys[..i].iter().any(|j| j.key == journey.key) {
                return Err(ContentError::DuplicateKey {
                    kind: "journey",
                    key: journey.key.clone(),
                });
            }
        }
        for (i, system) in self.systems.iter().enumerate() {
            if self.systems[..i].iter().any(|s| s.key == system.key) {
                return Err(ContentError::DuplicateKey {
                    kind: "system",
                    key: system.key.clone(),
                });
            }
        }
        for (i, floor) in self.levels.iter().enumerate() {
            if self.levels[..i].iter().any(|f| f.level == floor.level) {
                return Err(ContentError::DuplicateLevel { level: floor.level });
            }
        }
        Ok(())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
