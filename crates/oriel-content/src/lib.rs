//! # oriel-content — Content Table for the Oriel Infographic
//!
//! The immutable dataset behind the Oriel smart services experience:
//! persona journeys through the building, the smart systems that power it,
//! and the eleven building levels. Every other crate in the workspace
//! consumes this one; it depends on nothing internal.
//!
//! ## Design
//!
//! The content table is an injected, read-only collaborator. The navigation
//! state model never mutates it and never assumes the builtin dataset — any
//! [`ContentTable`] that passes [`ContentTable::validate()`] works, so an
//! implementer can substitute a different data source without touching the
//! state model.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `oriel-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod builtin;
pub mod journey;
pub mod level;
pub mod system;
pub mod table;

pub use journey::{Journey, JourneyStep};
pub use level::BuildingLevel;
pub use system::SmartSystem;
pub use table::{ContentError, ContentTable};
