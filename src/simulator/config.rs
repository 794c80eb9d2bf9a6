//! Simulation configuration.

use crate::character::Class;

/// Configuration for a simulation batch.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of sessions to play out.
    pub num_runs: u32,

    /// Base random seed (run N uses seed + N). None draws from entropy.
    pub seed: Option<u64>,

    /// Commands the bot may issue per session before the run is cut off.
    pub max_commands: u64,

    /// Class the bot plays.
    pub class: Class,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            max_commands: 600,
            class: Class::Warrior,
        }
    }
}
