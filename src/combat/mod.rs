//! Turn-based combat: shared types, the regular turn resolver, and the
//! final-confrontation variant.

pub mod finale;
pub mod logic;
pub mod types;
