//! Encounter generation: whether a hostile shows up on movement, and which.

use rand::Rng;

use crate::combat::types::Hostile;
use crate::core::constants::*;
use crate::world::Room;

/// A hostile archetype. Spawning applies hp jitter and resolves the `slow`
/// flag into a concrete hit chance.
pub struct HostileTemplate {
    pub name: &'static str,
    pub base_hp: u32,
    pub hp_jitter_min: i32,
    pub hp_jitter_max: i32,
    pub attack: u32,
    pub armor: u32,
    pub slow: bool,
}

impl HostileTemplate {
    pub fn spawn(&self, rng: &mut impl Rng) -> Hostile {
        let jitter = rng.gen_range(self.hp_jitter_min..=self.hp_jitter_max);
        Hostile {
            name: self.name,
            hp: (self.base_hp as i32 + jitter).max(1) as u32,
            attack: self.attack,
            armor: self.armor,
            hit_chance: if self.slow { HIT_CHANCE_SLOW } else { HIT_CHANCE },
        }
    }
}

pub static HOSTILE_TEMPLATES: [HostileTemplate; 5] = [
    HostileTemplate {
        name: "Scout Bot",
        base_hp: 25,
        hp_jitter_min: -5,
        hp_jitter_max: 5,
        attack: 8,
        armor: 3,
        slow: true,
    },
    HostileTemplate {
        name: "Wandering Bot",
        base_hp: 30,
        hp_jitter_min: -5,
        hp_jitter_max: 5,
        attack: 9,
        armor: 4,
        slow: true,
    },
    HostileTemplate {
        name: "Armored Bot",
        base_hp: 40,
        hp_jitter_min: -5,
        hp_jitter_max: 15,
        attack: 10,
        armor: 6,
        slow: true,
    },
    HostileTemplate {
        name: "Armored Drone",
        base_hp: 60,
        hp_jitter_min: -10,
        hp_jitter_max: 10,
        attack: 10,
        armor: 6,
        slow: false,
    },
    HostileTemplate {
        name: "Hunter Unit",
        base_hp: 80,
        hp_jitter_min: -10,
        hp_jitter_max: 10,
        attack: 14,
        armor: 4,
        slow: false,
    },
];

/// Encounter probability for the given turn count. The city grows more
/// dangerous the longer the mission runs, up to a cap.
pub fn encounter_chance(turns: u32) -> f64 {
    ENCOUNTER_BASE_CHANCE + (turns as f64 * ENCOUNTER_TURN_STEP).min(ENCOUNTER_ESCALATION_CAP)
}

/// Rolls for an encounter after moving into `room`. Safe rooms never spawn.
pub fn roll_encounter(room: &Room, turns: u32, rng: &mut impl Rng) -> Option<Hostile> {
    if room.safe {
        return None;
    }
    if rng.gen::<f64>() >= encounter_chance(turns) {
        return None;
    }
    let template = &HOSTILE_TEMPLATES[rng.gen_range(0..HOSTILE_TEMPLATES.len())];
    Some(template.spawn(rng))
}

/// A deliberately provoked fight always finds something.
pub fn provoke_encounter(room: &Room, turns: u32, rng: &mut impl Rng) -> Hostile {
    roll_encounter(room, turns, rng).unwrap_or_else(|| {
        let template = &HOSTILE_TEMPLATES[rng.gen_range(0..HOSTILE_TEMPLATES.len())];
        template.spawn(rng)
    })
}
