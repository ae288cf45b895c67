// Trapper-Mastering Schema - Shared type definitions
// This crate holds the static data the battle engine is built on: creature
// types and their effectiveness chart, move definitions, and the item table.

pub use creature_types::*;
pub use items::*;
pub use moves::*;

pub mod creature_types;
pub mod items;
pub mod moves;
