//! # Building Level Types
//!
//! One record per physical floor. Levels are uniquely keyed by their level
//! number; the builtin dataset runs 0–10 top-down, but the numbering need
//! not be contiguous.

use serde::{Deserialize, Serialize};

/// A physical floor of the building.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingLevel {
    /// Level number — the unique key within the content table.
    pub level: i32,
    /// Floor name (e.g., "Outpatient Clinics").
    pub name: String,
    /// One-line description of the floor.
    pub description: String,
    /// Accent color (hex).
    pub color: String,
    /// Smart features present on this floor.
    pub smart_features: Vec<String>,
    /// Key areas on this floor.
    pub key_areas: Vec<String>,
    /// Primary user roles for this floor.
    pub users: Vec<String>,
}
