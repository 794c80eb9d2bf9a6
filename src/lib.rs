//! Ted's Thread - a turn-based text adventure.
//!
//! New York, 2039. Twelve years after the machines woke up, eleven pages
//! scattered across the city hold the one sentence that can shut Ted down.
//! This library holds all of the game logic; the binaries are thin I/O
//! layers over [`core::session::Session`].

pub mod character;
pub mod combat;
pub mod command;
pub mod core;
pub mod encounter;
pub mod items;
pub mod quest;
pub mod simulator;
pub mod world;

pub use crate::core::constants::PAGE_COUNT;
pub use crate::core::session::{Session, SessionStatus};
