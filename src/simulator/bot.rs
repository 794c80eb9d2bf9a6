//! A scripted auto-player.
//!
//! The bot walks a fixed patrol that covers every page-bearing room and
//! passes back through the Sanctuary each lap, grabbing pages and gear as
//! it goes. In a fight it heals when low, shoots while ammo lasts, and
//! otherwise swings. Against Ted it speaks the pages the moment it has all
//! of them.

use crate::core::constants::PAGE_COUNT;
use crate::core::session::{Mode, Session};
use crate::items::{ItemId, WeaponId};
use crate::world;

/// Heal in combat below this much hp.
const HEAL_THRESHOLD: u32 = 35;

/// One full lap from the Subway Tunnel through every room and back,
/// passing the Sanctuary on the way. Issued as `go <dir>` commands.
const PATROL: [&str; 22] = [
    "north", "east", "north", // in to the Sanctuary
    "south", "west", "south", // back out to the tunnel
    "east", "north", "east", "north", "east", "north", "east", "north", // out to the lobby
    "south", "west", "south", "west", "south", "west", "south", "west", // and home again
];

#[derive(Debug, Default)]
pub struct BotPolicy {
    step: usize,
}

impl BotPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decides the next input line for the current session state.
    pub fn next_command(&mut self, session: &Session) -> String {
        match &session.mode {
            Mode::Fighting(_) => self.combat_command(session),
            Mode::Finale(_) => self.finale_command(session),
            Mode::Exploring => self.explore_command(session),
        }
    }

    fn combat_command(&self, session: &Session) -> String {
        let player = &session.player;
        if player.current_hp < HEAL_THRESHOLD && player.inventory.has(ItemId::Medkit) {
            return "use medkit".to_string();
        }
        if player.weapon == WeaponId::Pistol && player.ammo > 0 {
            return "shoot".to_string();
        }
        "attack".to_string()
    }

    fn finale_command(&self, session: &Session) -> String {
        let player = &session.player;
        if player.pages.len() == PAGE_COUNT {
            return "use pages".to_string();
        }
        if player.weapon == WeaponId::Pistol && player.ammo > 0 {
            return "shoot".to_string();
        }
        "attack".to_string()
    }

    fn explore_command(&mut self, session: &Session) -> String {
        let player = &session.player;
        let here = player.location;

        if session.pages.has_page(here) {
            return "take page".to_string();
        }
        if session.pistol_spotted == Some(here) {
            return "take pistol".to_string();
        }
        if player.inventory.has(ItemId::Pistol)
            && player.weapon != WeaponId::Pistol
            && player.ammo > 0
        {
            return "equip pistol".to_string();
        }
        if world::room(here).sanctuary && player.pages.len() == PAGE_COUNT {
            return "use pages".to_string();
        }

        let dir = PATROL[self.step % PATROL.len()];
        self.step += 1;
        format!("go {dir}")
    }
}
