//! One combat turn: the player's action, then the hostile's retaliation.
//!
//! Queries and unavailable actions (no ammo, no pistol, spent ability
//! resource, missing item) do not consume the turn: the hostile does not
//! retaliate and the caller re-prompts.

use rand::Rng;

use super::types::{CombatAction, CombatEvent, EscapeMethod, Hostile, TurnOutcome, TurnReport};
use crate::character::{Class, Player};
use crate::core::constants::*;
use crate::items::{weapon_spec, ItemId, WeaponId};

/// Melee damage: offense minus armor, with a small symmetric jitter,
/// floored at zero.
pub fn melee_damage(offense: u32, armor: u32, rng: &mut impl Rng) -> u32 {
    let jitter = rng.gen_range(MELEE_JITTER_MIN..=MELEE_JITTER_MAX);
    (offense as i32 - armor as i32 + jitter).max(0) as u32
}

/// Ranged damage draws from its own, higher base.
fn ranged_damage(armor: u32, rng: &mut impl Rng) -> u32 {
    let jitter = rng.gen_range(RANGED_JITTER_MIN..=RANGED_JITTER_MAX);
    (RANGED_BASE_DAMAGE as i32 - armor as i32 + jitter).max(0) as u32
}

pub fn flee_chance(player: &Player) -> f64 {
    FLEE_BASE_CHANCE + player.agility as f64 / FLEE_AGILITY_DIVISOR
}

pub fn sneak_chance(player: &Player) -> f64 {
    SNEAK_BASE_CHANCE + player.agility as f64 * SNEAK_AGILITY_STEP
}

/// The hostile's half of the turn. Defending lowers the hit chance and
/// halves the damage of a hit; a hit never lands for less than the floor.
pub fn resolve_retaliation(
    player: &mut Player,
    hostile: &Hostile,
    defended: bool,
    rng: &mut impl Rng,
) -> CombatEvent {
    let hit_chance = if defended {
        (hostile.hit_chance - DEFEND_HIT_PENALTY).max(0.0)
    } else {
        hostile.hit_chance
    };
    if rng.gen::<f64>() >= hit_chance {
        return CombatEvent::RetaliationMissed;
    }

    let reduction = rng.gen_range(0..=RETALIATION_REDUCTION_MAX);
    let mut damage = hostile
        .attack
        .saturating_sub(reduction)
        .max(MIN_RETALIATION_DAMAGE);
    if defended {
        damage = (damage / 2).max(MIN_RETALIATION_DAMAGE);
    }
    player.take_damage(damage);
    CombatEvent::Retaliation { damage }
}

/// Resolves one full combat turn.
pub fn resolve_turn(
    player: &mut Player,
    hostile: &mut Hostile,
    action: CombatAction,
    rng: &mut impl Rng,
) -> TurnReport {
    let mut events = Vec::new();
    let mut defended = false;
    let mut evaded = false;
    let mut consumed = true;

    match action {
        CombatAction::Attack => {
            let weapon = weapon_spec(player.weapon);
            let damage = melee_damage(weapon.attack, hostile.armor, rng);
            hostile.take_damage(damage);
            events.push(CombatEvent::MeleeHit {
                weapon: weapon.name,
                damage,
            });
        }
        CombatAction::Shoot => {
            if player.weapon != WeaponId::Pistol {
                events.push(CombatEvent::NoPistolEquipped);
                consumed = false;
            } else if player.ammo == 0 {
                events.push(CombatEvent::NoAmmo);
                consumed = false;
            } else {
                player.ammo -= 1;
                let damage = ranged_damage(hostile.armor, rng);
                hostile.take_damage(damage);
                events.push(CombatEvent::ShotFired {
                    damage,
                    ammo_left: player.ammo,
                });
            }
        }
        CombatAction::Defend => {
            defended = true;
            events.push(CombatEvent::Braced);
        }
        CombatAction::Ability => match player.class {
            Class::Warrior => {
                let damage = player.strength
                    + rng.gen_range(POWER_STRIKE_BONUS_MIN..=POWER_STRIKE_BONUS_MAX);
                hostile.take_damage(damage);
                events.push(CombatEvent::PowerStrike { damage });
            }
            Class::Rogue => {
                if rng.gen::<f64>() < VANISH_CHANCE {
                    evaded = true;
                    events.push(CombatEvent::VanishSuccess);
                } else {
                    events.push(CombatEvent::VanishFailed);
                }
            }
            Class::Engineer => {
                if player.inventory.remove_one(ItemId::EnergyCell) {
                    let damage = player.magic + EMP_BONUS;
                    hostile.take_damage(damage);
                    events.push(CombatEvent::EmpBlast { damage });
                } else {
                    events.push(CombatEvent::NoEnergyCell);
                    consumed = false;
                }
            }
        },
        CombatAction::UseItem(item) => match item {
            ItemId::Medkit => {
                if player.inventory.remove_one(ItemId::Medkit) {
                    let healed = player.heal(MEDKIT_HEAL);
                    events.push(CombatEvent::MedkitUsed { healed });
                } else {
                    events.push(CombatEvent::ItemMissing { item });
                    consumed = false;
                }
            }
            ItemId::EnergyCell | ItemId::Pistol => {
                events.push(CombatEvent::ItemNotUsable { item });
                consumed = false;
            }
        },
        CombatAction::Sneak => {
            if rng.gen::<f64>() < sneak_chance(player) {
                events.push(CombatEvent::SneakSuccess);
                return TurnReport::new(events, TurnOutcome::Escaped(EscapeMethod::Sneak));
            }
            events.push(CombatEvent::SneakFailed);
        }
        CombatAction::Run => {
            if rng.gen::<f64>() < flee_chance(player) {
                events.push(CombatEvent::FleeSuccess);
                return TurnReport::new(events, TurnOutcome::Escaped(EscapeMethod::Run));
            }
            events.push(CombatEvent::FleeFailed);
        }
    }

    if !hostile.is_alive() {
        events.push(CombatEvent::HostileDestroyed);
        return TurnReport::new(events, TurnOutcome::HostileDown);
    }

    if consumed {
        if evaded {
            events.push(CombatEvent::RetaliationEvaded);
        } else {
            events.push(resolve_retaliation(player, hostile, defended, rng));
        }
        if !player.is_alive() {
            events.push(CombatEvent::PlayerFell);
            return TurnReport::new(events, TurnOutcome::PlayerDown);
        }
    }

    TurnReport::new(events, TurnOutcome::Continue)
}
