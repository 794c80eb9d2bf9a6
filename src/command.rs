//! Line-oriented command parsing.
//!
//! Raw input is lowercased and parsed into tagged command values once, at
//! the boundary; dispatch is an exhaustive match, and unknown words carry
//! the original text back for the error message.

use crate::items::{ItemId, WeaponId};
use crate::world::Direction;

/// Exploration commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Go(Direction),
    Look,
    TakePage,
    TakePistol,
    TakeUnknown(String),
    Pages,
    Inventory,
    Equip(WeaponId),
    EquipUnknown(String),
    UseItem(ItemId),
    UsePages,
    UseUnknown(String),
    Status,
    Map,
    Sneak,
    Fight,
    Shoot,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

/// Commands inside a regular fight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatCommand {
    Attack,
    Shoot,
    Defend,
    Ability,
    UseItem(ItemId),
    UseUnknown(String),
    Sneak,
    Run,
    Status,
    Help,
    Empty,
    Unknown(String),
}

/// Commands while facing Ted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinalCommand {
    Attack,
    Shoot,
    UsePages,
    Status,
    Help,
    Empty,
    Unknown(String),
}

pub fn parse(line: &str) -> Command {
    let cmd = line.trim().to_lowercase();
    if cmd.is_empty() {
        return Command::Empty;
    }

    match cmd.as_str() {
        "look" | "l" => return Command::Look,
        "take page" | "take pages" => return Command::TakePage,
        "take pistol" => return Command::TakePistol,
        "pages" => return Command::Pages,
        "inventory" | "inv" | "i" => return Command::Inventory,
        "use pages" | "use page" => return Command::UsePages,
        "status" | "st" => return Command::Status,
        "map" => return Command::Map,
        "sneak" => return Command::Sneak,
        "fight" => return Command::Fight,
        "shoot" => return Command::Shoot,
        "help" | "?" => return Command::Help,
        "quit" | "q" => return Command::Quit,
        _ => {}
    }

    if let Some(dir) = Direction::parse(cmd.as_str()) {
        return Command::Go(dir);
    }
    if let Some(rest) = cmd.strip_prefix("go ") {
        return match Direction::parse(rest.trim()) {
            Some(dir) => Command::Go(dir),
            None => Command::Unknown(cmd),
        };
    }
    if let Some(rest) = cmd.strip_prefix("take ") {
        return Command::TakeUnknown(rest.trim().to_string());
    }
    if let Some(rest) = cmd.strip_prefix("equip ") {
        return match WeaponId::parse(rest.trim()) {
            Some(weapon) => Command::Equip(weapon),
            None => Command::EquipUnknown(rest.trim().to_string()),
        };
    }
    if let Some(rest) = cmd.strip_prefix("use ") {
        return match ItemId::parse(rest.trim()) {
            Some(item) => Command::UseItem(item),
            None => Command::UseUnknown(rest.trim().to_string()),
        };
    }

    Command::Unknown(cmd)
}

pub fn parse_combat(line: &str) -> CombatCommand {
    let cmd = line.trim().to_lowercase();
    if cmd.is_empty() {
        return CombatCommand::Empty;
    }

    match cmd.as_str() {
        "attack" | "a" => return CombatCommand::Attack,
        "shoot" | "s" => return CombatCommand::Shoot,
        "defend" | "d" => return CombatCommand::Defend,
        "ability" => return CombatCommand::Ability,
        "sneak" => return CombatCommand::Sneak,
        "run" | "flee" => return CombatCommand::Run,
        "status" | "st" => return CombatCommand::Status,
        "help" | "?" => return CombatCommand::Help,
        _ => {}
    }

    if let Some(rest) = cmd.strip_prefix("use ") {
        return match ItemId::parse(rest.trim()) {
            Some(item) => CombatCommand::UseItem(item),
            None => CombatCommand::UseUnknown(rest.trim().to_string()),
        };
    }

    CombatCommand::Unknown(cmd)
}

pub fn parse_final(line: &str) -> FinalCommand {
    let cmd = line.trim().to_lowercase();
    if cmd.is_empty() {
        return FinalCommand::Empty;
    }

    match cmd.as_str() {
        "attack" | "a" => FinalCommand::Attack,
        "shoot" | "s" => FinalCommand::Shoot,
        "use pages" | "use page" | "pages" => FinalCommand::UsePages,
        "status" | "st" => FinalCommand::Status,
        "help" | "?" => FinalCommand::Help,
        _ => FinalCommand::Unknown(cmd),
    }
}
