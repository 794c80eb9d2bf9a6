//! The player character and their class.

use crate::core::constants::*;
use crate::items::{Inventory, ItemId, WeaponId};
use crate::world::{self, RoomId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    Warrior,
    Rogue,
    Engineer,
}

impl Class {
    pub fn all() -> [Class; 3] {
        [Class::Warrior, Class::Rogue, Class::Engineer]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Class::Warrior => "Warrior",
            Class::Rogue => "Rogue",
            Class::Engineer => "Engineer",
        }
    }

    pub fn parse(word: &str) -> Option<Class> {
        match word.trim().to_lowercase().as_str() {
            "warrior" => Some(Class::Warrior),
            "rogue" => Some(Class::Rogue),
            "engineer" => Some(Class::Engineer),
            _ => None,
        }
    }

    pub fn blurb(&self) -> &'static str {
        match self {
            Class::Warrior => "strong melee fighter",
            Class::Rogue => "agile and stealthy",
            Class::Engineer => "intelligent and resourceful",
        }
    }
}

/// The player. Created once at character creation and mutated for the rest
/// of the session by combat, healing, and page pickup.
#[derive(Debug, Clone)]
pub struct Player {
    pub name: String,
    pub class: Class,
    pub current_hp: u32,
    pub max_hp: u32,
    pub strength: u32,
    pub agility: u32,
    pub magic: u32,
    pub location: RoomId,
    pub inventory: Inventory,
    /// Collected page words, in the order they were found.
    pub pages: Vec<&'static str>,
    pub weapon: WeaponId,
    /// Rounds left for the pistol. Tracked even while the knife is equipped.
    pub ammo: u32,
}

impl Player {
    pub fn new(name: String, class: Class) -> Self {
        let mut inventory = Inventory::new();
        inventory.add(ItemId::Medkit, STARTING_MEDKITS);

        let max_hp = match class {
            Class::Warrior => WARRIOR_MAX_HP,
            _ => BASE_MAX_HP,
        };
        let (strength, agility, magic) = match class {
            Class::Warrior => (CLASS_STAT, BASE_STAT, BASE_STAT),
            Class::Rogue => (BASE_STAT, CLASS_STAT, BASE_STAT),
            Class::Engineer => (BASE_STAT, BASE_STAT, CLASS_STAT),
        };
        if class == Class::Engineer {
            inventory.add(ItemId::EnergyCell, 1);
        }

        Self {
            name,
            class,
            current_hp: max_hp,
            max_hp,
            strength,
            agility,
            magic,
            location: world::starting_room(),
            inventory,
            pages: Vec::new(),
            weapon: WeaponId::Knife,
            ammo: 0,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    /// Restores hp, clamped to the maximum. Returns the amount actually
    /// restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.current_hp;
        self.current_hp = self.max_hp.min(self.current_hp.saturating_add(amount));
        self.current_hp - before
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.current_hp = self.current_hp.saturating_sub(amount);
    }
}
