//! The final confrontation with Ted.
//!
//! A dedicated combat variant: no escape, and speaking the collected pages
//! is a win condition alongside ordinary damage.

use rand::Rng;

use super::types::{CombatEvent, Hostile, TurnOutcome, TurnReport};
use crate::character::Player;
use crate::core::constants::*;
use crate::items::{weapon_spec, WeaponId};

/// Actions available against Ted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinalAction {
    Attack,
    Shoot,
    UsePages,
}

/// One manifestation of Ted. Every time he intercepts the player a fresh
/// construct forms at full strength.
#[derive(Debug, Clone)]
pub struct FinalBattle {
    pub ted: Hostile,
}

impl Default for FinalBattle {
    fn default() -> Self {
        Self::new()
    }
}

impl FinalBattle {
    pub fn new() -> Self {
        Self {
            ted: Hostile {
                name: "Ted",
                hp: TED_HP,
                attack: TED_ATTACK,
                armor: TED_ARMOR,
                hit_chance: TED_HIT_CHANCE,
            },
        }
    }
}

fn ted_retaliation(player: &mut Player, ted: &Hostile, rng: &mut impl Rng) -> CombatEvent {
    if rng.gen::<f64>() >= ted.hit_chance {
        return CombatEvent::RetaliationMissed;
    }
    let jitter = rng.gen_range(TED_SHOT_JITTER_MIN..=TED_SHOT_JITTER_MAX);
    let damage = (ted.attack as i32 + jitter).max(TED_MIN_DAMAGE as i32) as u32;
    player.take_damage(damage);
    CombatEvent::Retaliation { damage }
}

/// Resolves one turn of the final battle. `HostileDown` means victory,
/// whether Ted was battered down or the sentence was spoken.
pub fn resolve_final_turn(
    player: &mut Player,
    battle: &mut FinalBattle,
    action: FinalAction,
    rng: &mut impl Rng,
) -> TurnReport {
    let mut events = Vec::new();
    let mut consumed = true;

    match action {
        FinalAction::Attack => {
            let weapon = weapon_spec(player.weapon);
            let jitter = rng.gen_range(TED_MELEE_JITTER_MIN..=TED_MELEE_JITTER_MAX);
            let damage = (weapon.attack as i32 - battle.ted.armor as i32 + jitter).max(0) as u32;
            battle.ted.take_damage(damage);
            events.push(CombatEvent::MeleeHit {
                weapon: weapon.name,
                damage,
            });
        }
        FinalAction::Shoot => {
            if player.weapon != WeaponId::Pistol {
                events.push(CombatEvent::NoPistolEquipped);
                consumed = false;
            } else if player.ammo == 0 {
                events.push(CombatEvent::NoAmmo);
                consumed = false;
            } else {
                player.ammo -= 1;
                let jitter = rng.gen_range(TED_SHOT_JITTER_MIN..=TED_SHOT_JITTER_MAX);
                let damage = (TED_SHOT_BASE as i32 + jitter).max(0) as u32;
                battle.ted.take_damage(damage);
                events.push(CombatEvent::ShotFired {
                    damage,
                    ammo_left: player.ammo,
                });
            }
        }
        FinalAction::UsePages => {
            if player.pages.len() == PAGE_COUNT {
                events.push(CombatEvent::PagesSpoken);
                return TurnReport::new(events, TurnOutcome::HostileDown);
            }
            events.push(CombatEvent::PagesIncomplete {
                collected: player.pages.len(),
            });
            player.take_damage(TED_PAGE_PENALTY);
            if !player.is_alive() {
                events.push(CombatEvent::PlayerFell);
                return TurnReport::new(events, TurnOutcome::PlayerDown);
            }
        }
    }

    if !battle.ted.is_alive() {
        events.push(CombatEvent::HostileDestroyed);
        return TurnReport::new(events, TurnOutcome::HostileDown);
    }

    if consumed {
        events.push(ted_retaliation(player, &battle.ted, rng));
        if !player.is_alive() {
            events.push(CombatEvent::PlayerFell);
            return TurnReport::new(events, TurnOutcome::PlayerDown);
        }
    }

    TurnReport::new(events, TurnOutcome::Continue)
}
