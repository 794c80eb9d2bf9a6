// Player
pub const BASE_MAX_HP: u32 = 100;
pub const WARRIOR_MAX_HP: u32 = 120;
pub const BASE_STAT: u32 = 5;
pub const CLASS_STAT: u32 = 10;
pub const STARTING_MEDKITS: u32 = 2;

// Items
pub const MEDKIT_HEAL: u32 = 30;
pub const PISTOL_AMMO: u32 = 6;
pub const SCAVENGE_CHANCE: f64 = 0.3;
pub const PISTOL_SPOT_CHANCE: f64 = 0.05;

// Encounters: base chance rises with the turn counter up to a cap
pub const ENCOUNTER_BASE_CHANCE: f64 = 0.25;
pub const ENCOUNTER_TURN_STEP: f64 = 0.01;
pub const ENCOUNTER_ESCALATION_CAP: f64 = 0.25;

// Combat
pub const MELEE_JITTER_MIN: i32 = -2;
pub const MELEE_JITTER_MAX: i32 = 3;
pub const RANGED_BASE_DAMAGE: u32 = 20;
pub const RANGED_JITTER_MIN: i32 = -5;
pub const RANGED_JITTER_MAX: i32 = 5;
pub const HIT_CHANCE: f64 = 0.8;
pub const HIT_CHANCE_SLOW: f64 = 0.65;
pub const DEFEND_HIT_PENALTY: f64 = 0.15;
pub const RETALIATION_REDUCTION_MAX: u32 = 4;
pub const MIN_RETALIATION_DAMAGE: u32 = 1;
pub const FLEE_BASE_CHANCE: f64 = 0.5;
pub const FLEE_AGILITY_DIVISOR: f64 = 20.0;
pub const SNEAK_BASE_CHANCE: f64 = 0.4;
pub const SNEAK_AGILITY_STEP: f64 = 0.03;
pub const SNEAK_TRAVEL_BASE_CHANCE: f64 = 0.6;

// Class abilities
pub const POWER_STRIKE_BONUS_MIN: u32 = 8;
pub const POWER_STRIKE_BONUS_MAX: u32 = 15;
pub const VANISH_CHANCE: f64 = 0.6;
pub const EMP_BONUS: u32 = 20;

// Pages
pub const PAGE_COUNT: usize = 11;

// Final confrontation
pub const TED_HP: u32 = 250;
pub const TED_ATTACK: u32 = 18;
pub const TED_HIT_CHANCE: f64 = 0.85;
pub const TED_ARMOR: u32 = 2;
pub const TED_MELEE_JITTER_MIN: i32 = -3;
pub const TED_MELEE_JITTER_MAX: i32 = 4;
pub const TED_SHOT_BASE: u32 = 30;
pub const TED_SHOT_JITTER_MIN: i32 = -6;
pub const TED_SHOT_JITTER_MAX: i32 = 6;
pub const TED_MIN_DAMAGE: u32 = 5;
pub const TED_PAGE_PENALTY: u32 = 25;
pub const TED_WAKE_TURNS: u32 = 40;
pub const TED_MANIFEST_CHANCE: f64 = 0.08;

// Session
pub const TURN_LIMIT: u32 = 200;
