//! # Smart System Types
//!
//! A smart system is a named building capability shown as a card in the
//! systems view. Systems have no relationships to other entities beyond
//! being listed together; the currently expanded card (the "hotspot") is
//! navigation state, not content.

use serde::{Deserialize, Serialize};

/// A named building capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmartSystem {
    /// Stable key the state model references (e.g., "wayfinding").
    pub key: String,
    /// Display title (e.g., "Digital Wayfinding").
    pub title: String,
    /// One-line description of the capability.
    pub description: String,
    /// Display icon token.
    pub icon: String,
    /// Accent color (hex).
    pub color: String,
    /// Feature strings shown in the expanded detail panel.
    pub features: Vec<String>,
    /// How this system integrates with the rest of the building.
    pub integration: String,
}
