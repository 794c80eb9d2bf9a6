//! The session engine.
//!
//! `Session` owns the whole game state and exposes one entry point,
//! [`Session::handle_line`]: parse a line of player input, mutate state,
//! return the lines to print. The I/O layers (interactive REPL, simulator)
//! never touch game rules directly.
//!
//! Quest flow: `Exploring` is the only non-terminal phase. Encounters and
//! the final confrontation are modes layered on top of it; the session ends
//! through [`SessionStatus`], never through an error path.

use rand::Rng;

use crate::character::{Class, Player};
use crate::combat::finale::{resolve_final_turn, FinalAction, FinalBattle};
use crate::combat::logic::resolve_turn;
use crate::combat::types::{CombatAction, CombatEvent, EscapeMethod, Hostile, TurnOutcome};
use crate::command::{self, Command, CombatCommand, FinalCommand};
use crate::core::constants::*;
use crate::encounter;
use crate::items::{weapon_spec, ItemId, WeaponId};
use crate::quest::{self, FinaleAttempt, PageSpread};
use crate::world::{self, RoomId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Running,
    Won,
    Lost,
    Quit,
}

/// What the next line of input means.
#[derive(Debug, Clone)]
pub enum Mode {
    Exploring,
    Fighting(Hostile),
    Finale(FinalBattle),
}

pub struct Session {
    pub player: Player,
    pub pages: PageSpread,
    /// Movement counter; danger escalates with it.
    pub turns: u32,
    pub ted_awake: bool,
    /// Room where a scavengeable pistol has been spotted, if any.
    pub pistol_spotted: Option<RoomId>,
    pub hostiles_destroyed: u32,
    pub mode: Mode,
    pub status: SessionStatus,
}

impl Session {
    pub fn new(name: String, class: Class, rng: &mut impl Rng) -> Self {
        Self {
            player: Player::new(name, class),
            pages: PageSpread::place(rng),
            turns: 0,
            ted_awake: false,
            pistol_spotted: None,
            hostiles_destroyed: 0,
            mode: Mode::Exploring,
            status: SessionStatus::Running,
        }
    }

    pub fn is_over(&self) -> bool {
        self.status != SessionStatus::Running
    }

    /// Handles one line of player input and returns the lines to print.
    pub fn handle_line(&mut self, line: &str, rng: &mut impl Rng) -> Vec<String> {
        if self.is_over() {
            return vec!["The mission is over.".to_string()];
        }
        match self.mode {
            Mode::Exploring => self.handle_explore(command::parse(line), rng),
            Mode::Fighting(_) => self.handle_fight(command::parse_combat(line), rng),
            Mode::Finale(_) => self.handle_finale(command::parse_final(line), rng),
        }
    }

    // ------------------------------------------------------------------
    // Exploration
    // ------------------------------------------------------------------

    fn handle_explore(&mut self, cmd: Command, rng: &mut impl Rng) -> Vec<String> {
        let mut out = Vec::new();
        match cmd {
            Command::Go(dir) => self.travel(dir, rng, &mut out),
            Command::Look => self.describe_location(&mut out),
            Command::TakePage => self.take_page(&mut out),
            Command::TakePistol => self.take_pistol(&mut out),
            Command::TakeUnknown(word) => {
                out.push(format!("There is no {word} here to take."));
            }
            Command::Pages => self.list_pages(&mut out),
            Command::Inventory => self.show_inventory(&mut out),
            Command::Equip(weapon) => self.equip(weapon, &mut out),
            Command::EquipUnknown(word) => {
                out.push(format!("You can't equip a {word}."));
            }
            Command::UseItem(item) => self.use_item_exploring(item, &mut out),
            Command::UsePages => self.use_pages_exploring(&mut out),
            Command::UseUnknown(word) => {
                out.push(format!("You can't use the {word} right now."));
            }
            Command::Status => self.show_status(&mut out),
            Command::Map => {
                let names: Vec<&str> = world::ROOMS.iter().map(|r| r.name).collect();
                out.push(format!("Map (rough): {}", names.join(", ")));
            }
            Command::Sneak => self.sneak_move(rng, &mut out),
            Command::Fight => self.pick_fight(rng, &mut out),
            Command::Shoot => {
                out.push("Shoot who? Wait until something hostile finds you.".to_string());
            }
            Command::Help => self.show_help(&mut out),
            Command::Quit => {
                self.status = SessionStatus::Quit;
                out.push("You give up the mission. The city remains under AI control.".to_string());
            }
            Command::Empty => {}
            Command::Unknown(word) => {
                out.push(format!("Unknown command '{word}'. Type 'help' for commands."));
            }
        }
        if matches!(self.mode, Mode::Exploring) && self.status == SessionStatus::Running {
            self.maybe_manifest_ted(rng, &mut out);
        }
        out
    }

    fn travel(&mut self, dir: world::Direction, rng: &mut impl Rng, out: &mut Vec<String>) {
        let here = world::room(self.player.location);
        let Some(next) = here.exit(dir) else {
            out.push("You can't go that way.".to_string());
            return;
        };

        self.player.location = next;
        self.turns += 1;
        out.push(format!(
            "You move {} to {}.",
            dir.name(),
            world::room(next).name
        ));

        if self.turns > TURN_LIMIT {
            out.push(
                "The city is too hostile; your mission fails to complete in time.".to_string(),
            );
            self.status = SessionStatus::Lost;
            return;
        }

        // Ted takes notice of intruders near the facility once the mission
        // has dragged on.
        if self.turns > TED_WAKE_TURNS
            && matches!(next, RoomId::FacilityGates | RoomId::FacilityLobby)
        {
            self.ted_awake = true;
        }

        if let Some(hostile) = encounter::roll_encounter(world::room(next), self.turns, rng) {
            out.push(format!("A {} detects you! It is hostile.", hostile.name));
            self.push_combat_banner(&hostile, out);
            self.mode = Mode::Fighting(hostile);
            return;
        }

        self.scavenge(rng, out);
        self.describe_location(out);
    }

    fn scavenge(&mut self, rng: &mut impl Rng, out: &mut Vec<String>) {
        if rng.gen::<f64>() < SCAVENGE_CHANCE {
            let found = if rng.gen::<f64>() < 0.5 {
                ItemId::Medkit
            } else {
                ItemId::EnergyCell
            };
            self.player.inventory.add(found, 1);
            out.push(format!("You scavenge a {}!", found.name()));
        }
        if !self.player.inventory.has(ItemId::Pistol)
            && self.pistol_spotted.is_none()
            && rng.gen::<f64>() < PISTOL_SPOT_CHANCE
        {
            self.pistol_spotted = Some(self.player.location);
            out.push("You spot a pistol in the rubble.".to_string());
        }
    }

    fn describe_location(&self, out: &mut Vec<String>) {
        let room = world::room(self.player.location);
        out.push(format!("You are at: {}. {}", room.name, room.desc));
        let exits: Vec<&str> = room.exits.iter().map(|(dir, _)| dir.name()).collect();
        out.push(format!("Exits: {}.", exits.join(", ")));
        if room.safe {
            out.push(
                "This area is a human-safe zone. Robots cannot normally enter here.".to_string(),
            );
        }
        if self.pages.has_page(room.id) {
            out.push("There appears to be something on the ground here.".to_string());
        }
        if self.pistol_spotted == Some(room.id) {
            out.push("A pistol lies in the rubble here.".to_string());
        }
    }

    fn take_page(&mut self, out: &mut Vec<String>) {
        match self.pages.take_from(self.player.location) {
            Some(word) => {
                self.player.pages.push(word);
                out.push(format!(
                    "You pick up a page. It has a single word: '{word}'. Pages collected: {}/{PAGE_COUNT}",
                    self.player.pages.len()
                ));
            }
            None => out.push("There's no page here.".to_string()),
        }
    }

    fn take_pistol(&mut self, out: &mut Vec<String>) {
        if self.pistol_spotted == Some(self.player.location) {
            self.pistol_spotted = None;
            self.player.inventory.add(ItemId::Pistol, 1);
            self.player.ammo = PISTOL_AMMO;
            out.push(format!(
                "You scavenge a pistol ({PISTOL_AMMO} rounds). Equip it with 'equip pistol'."
            ));
        } else if self.player.inventory.has(ItemId::Pistol) {
            out.push("You already have a pistol.".to_string());
        } else {
            out.push("There's no pistol here.".to_string());
        }
    }

    fn list_pages(&self, out: &mut Vec<String>) {
        if self.player.pages.is_empty() {
            out.push("You have no pages yet.".to_string());
        } else {
            out.push("Pages collected (in order found):".to_string());
            out.push(self.player.pages.join(", "));
        }
    }

    fn show_inventory(&self, out: &mut Vec<String>) {
        if self.player.inventory.is_empty() {
            out.push("Your pack is empty.".to_string());
            return;
        }
        let mut entries: Vec<String> = self
            .player
            .inventory
            .iter()
            .map(|(item, count)| format!("{} x{count}", item.name()))
            .collect();
        if self.player.inventory.has(ItemId::Pistol) {
            entries.push(format!("pistol ammo: {}", self.player.ammo));
        }
        out.push(format!("Inventory: {}", entries.join(", ")));
    }

    fn equip(&mut self, weapon: WeaponId, out: &mut Vec<String>) {
        match weapon {
            WeaponId::Knife => {
                self.player.weapon = WeaponId::Knife;
                out.push("You equip the knife.".to_string());
            }
            WeaponId::Pistol => {
                if self.player.inventory.has(ItemId::Pistol) {
                    self.player.weapon = WeaponId::Pistol;
                    out.push(format!(
                        "You equip the pistol. Ammo: {}",
                        self.player.ammo
                    ));
                } else {
                    out.push("You don't have a pistol in your inventory.".to_string());
                }
            }
        }
    }

    fn use_item_exploring(&mut self, item: ItemId, out: &mut Vec<String>) {
        match item {
            ItemId::Medkit => {
                if self.player.inventory.remove_one(ItemId::Medkit) {
                    let healed = self.player.heal(MEDKIT_HEAL);
                    out.push(format!("You use a medkit and restore {healed} HP."));
                } else {
                    out.push("You don't have a medkit.".to_string());
                }
            }
            ItemId::EnergyCell => {
                if self.player.inventory.has(ItemId::EnergyCell) {
                    out.push("You keep the energy cell ready for an EMP burst.".to_string());
                } else {
                    out.push("You don't have an energy cell.".to_string());
                }
            }
            ItemId::Pistol => {
                out.push("The pistol is a weapon. Equip it with 'equip pistol'.".to_string());
            }
        }
    }

    fn use_pages_exploring(&mut self, out: &mut Vec<String>) {
        match quest::attempt_finale(&self.player) {
            FinaleAttempt::Victory => {
                out.push(
                    "You arrange the pages and speak the sentence aloud at the Sanctuary's console..."
                        .to_string(),
                );
                out.push(
                    "Silence sweeps the world as AI systems shudder and fall. You did it."
                        .to_string(),
                );
                self.status = SessionStatus::Won;
            }
            FinaleAttempt::MissingPages { collected } => {
                out.push(format!(
                    "You don't have all {PAGE_COUNT} pages yet ({collected}/{PAGE_COUNT})."
                ));
            }
            FinaleAttempt::WrongPlace => {
                out.push("Nowhere to safely use the pages here.".to_string());
            }
        }
    }

    fn show_status(&self, out: &mut Vec<String>) {
        let p = &self.player;
        out.push(format!(
            "{} the {} | HP: {}/{}",
            p.name,
            p.class.name(),
            p.current_hp,
            p.max_hp
        ));
        out.push(format!(
            "STR: {} | AGI: {} | MAG: {}",
            p.strength, p.agility, p.magic
        ));
        let weapon = weapon_spec(p.weapon);
        if p.weapon == WeaponId::Pistol {
            out.push(format!("Weapon: {} (ammo: {})", weapon.name, p.ammo));
        } else {
            out.push(format!("Weapon: {}", weapon.name));
        }
        out.push(format!(
            "Location: {} | Pages: {}/{PAGE_COUNT}",
            world::room(p.location).name,
            p.pages.len()
        ));
    }

    fn show_help(&self, out: &mut Vec<String>) {
        out.push(
            "Commands: look, go <dir>, take page, take pistol, pages, inventory, equip <weapon>, \
             use <item>, use pages, status, map, sneak, fight, help, quit"
                .to_string(),
        );
        out.push("Example: go north  |  take page  |  equip pistol".to_string());
    }

    fn sneak_move(&mut self, rng: &mut impl Rng, out: &mut Vec<String>) {
        let here = world::room(self.player.location);
        if here.exits.is_empty() {
            out.push("Nowhere to sneak to.".to_string());
            return;
        }
        let (dir, next) = here.exits[rng.gen_range(0..here.exits.len())];
        self.player.location = next;
        self.turns += 1;

        if self.turns > TURN_LIMIT {
            out.push(
                "The city is too hostile; your mission fails to complete in time.".to_string(),
            );
            self.status = SessionStatus::Lost;
            return;
        }

        let chance = SNEAK_TRAVEL_BASE_CHANCE + self.player.agility as f64 * SNEAK_AGILITY_STEP;
        if world::room(next).safe || rng.gen::<f64>() < chance {
            out.push(format!(
                "You sneak {} to {} undetected.",
                dir.name(),
                world::room(next).name
            ));
            self.describe_location(out);
        } else {
            let hostile = encounter::provoke_encounter(world::room(next), self.turns, rng);
            out.push(format!(
                "You try to sneak {} but trip something. A {} notices you!",
                dir.name(),
                hostile.name
            ));
            self.push_combat_banner(&hostile, out);
            self.mode = Mode::Fighting(hostile);
        }
    }

    fn pick_fight(&mut self, rng: &mut impl Rng, out: &mut Vec<String>) {
        let here = world::room(self.player.location);
        if here.safe {
            out.push("Nothing hostile comes near a safe zone.".to_string());
            return;
        }
        let hostile = encounter::provoke_encounter(here, self.turns, rng);
        out.push(format!("You go looking for trouble. A {} obliges.", hostile.name));
        self.push_combat_banner(&hostile, out);
        self.mode = Mode::Fighting(hostile);
    }

    fn maybe_manifest_ted(&mut self, rng: &mut impl Rng, out: &mut Vec<String>) {
        if !world::room(self.player.location).final_site {
            return;
        }
        if self.player.pages.len() == PAGE_COUNT {
            out.push(
                "You stand before the facility where everything began. The core hums above."
                    .to_string(),
            );
        }
        if self.ted_awake || rng.gen::<f64>() < TED_MANIFEST_CHANCE {
            self.ted_awake = true;
            let battle = FinalBattle::new();
            out.push("Ted manifests through the facility core, the very AI you seek.".to_string());
            out.push("Ted: 'You should have stayed dead.'".to_string());
            self.push_finale_banner(&battle, out);
            self.mode = Mode::Finale(battle);
        }
    }

    // ------------------------------------------------------------------
    // Regular combat
    // ------------------------------------------------------------------

    fn handle_fight(&mut self, cmd: CombatCommand, rng: &mut impl Rng) -> Vec<String> {
        let mut out = Vec::new();
        let action = match cmd {
            CombatCommand::Attack => CombatAction::Attack,
            CombatCommand::Shoot => CombatAction::Shoot,
            CombatCommand::Defend => CombatAction::Defend,
            CombatCommand::Ability => CombatAction::Ability,
            CombatCommand::UseItem(item) => CombatAction::UseItem(item),
            CombatCommand::UseUnknown(word) => {
                out.push(format!("You can't use the {word} right now."));
                return out;
            }
            CombatCommand::Sneak => CombatAction::Sneak,
            CombatCommand::Run => CombatAction::Run,
            CombatCommand::Status => {
                self.show_status(&mut out);
                return out;
            }
            CombatCommand::Help => {
                self.show_combat_help(&mut out);
                return out;
            }
            CombatCommand::Empty => return out,
            CombatCommand::Unknown(word) => {
                out.push(format!(
                    "Unknown combat option '{word}'. Type 'help' for combat commands."
                ));
                return out;
            }
        };

        let mut hostile = match std::mem::replace(&mut self.mode, Mode::Exploring) {
            Mode::Fighting(hostile) => hostile,
            other => {
                self.mode = other;
                return out;
            }
        };

        let report = resolve_turn(&mut self.player, &mut hostile, action, rng);
        for event in &report.events {
            out.push(render_event(event, hostile.name));
        }

        match report.outcome {
            TurnOutcome::Continue => {
                self.push_combat_banner(&hostile, &mut out);
                self.mode = Mode::Fighting(hostile);
            }
            TurnOutcome::HostileDown => {
                self.hostiles_destroyed += 1;
                self.describe_location(&mut out);
                self.maybe_manifest_ted(rng, &mut out);
            }
            TurnOutcome::PlayerDown => {
                self.status = SessionStatus::Lost;
            }
            TurnOutcome::Escaped(method) => {
                if method == EscapeMethod::Run {
                    let here = world::room(self.player.location);
                    if !here.exits.is_empty() {
                        let (_, next) = here.exits[rng.gen_range(0..here.exits.len())];
                        self.player.location = next;
                        out.push(format!(
                            "You retreat to {}.",
                            world::room(next).name
                        ));
                    }
                }
                self.describe_location(&mut out);
            }
        }
        out
    }

    fn push_combat_banner(&self, hostile: &Hostile, out: &mut Vec<String>) {
        out.push(format!(
            "Your HP: {} | {} HP: {}",
            self.player.current_hp, hostile.name, hostile.hp
        ));
        out.push(
            "Options: attack / shoot / defend / ability / use <item> / sneak / run / status / help"
                .to_string(),
        );
    }

    fn show_combat_help(&self, out: &mut Vec<String>) {
        out.push("Combat commands:".to_string());
        out.push(" - attack : melee attack with your equipped weapon".to_string());
        out.push(" - shoot  : fire the pistol (if equipped, while ammo lasts)".to_string());
        out.push(" - defend : brace and blunt the next blow".to_string());
        out.push(" - ability: your class move".to_string());
        out.push(" - use <item> : use a medkit mid-fight".to_string());
        out.push(" - sneak  : try to slip away unseen".to_string());
        out.push(" - run    : attempt to flee the fight".to_string());
        out.push(" - status : view your health and equipment".to_string());
    }

    // ------------------------------------------------------------------
    // Final confrontation
    // ------------------------------------------------------------------

    fn handle_finale(&mut self, cmd: FinalCommand, rng: &mut impl Rng) -> Vec<String> {
        let mut out = Vec::new();
        let action = match cmd {
            FinalCommand::Attack => FinalAction::Attack,
            FinalCommand::Shoot => FinalAction::Shoot,
            FinalCommand::UsePages => FinalAction::UsePages,
            FinalCommand::Status => {
                self.show_status(&mut out);
                return out;
            }
            FinalCommand::Help => {
                out.push("Options: attack / shoot / use pages / status".to_string());
                return out;
            }
            FinalCommand::Empty => return out,
            FinalCommand::Unknown(_) => {
                out.push("Ted's systems are efficient. That does nothing.".to_string());
                return out;
            }
        };

        let mut battle = match std::mem::replace(&mut self.mode, Mode::Exploring) {
            Mode::Finale(battle) => battle,
            other => {
                self.mode = other;
                return out;
            }
        };

        let report = resolve_final_turn(&mut self.player, &mut battle, action, rng);
        for event in &report.events {
            out.push(render_event(event, battle.ted.name));
        }

        match report.outcome {
            TurnOutcome::Continue => {
                self.push_finale_banner(&battle, &mut out);
                self.mode = Mode::Finale(battle);
            }
            TurnOutcome::HostileDown => {
                out.push(
                    "Ted's consciousness fractures. Machines around the city fall silent."
                        .to_string(),
                );
                out.push("YOU WIN. Humanity gets a chance.".to_string());
                self.status = SessionStatus::Won;
            }
            TurnOutcome::PlayerDown => {
                out.push("Ted eliminates you. The city remains under machine rule.".to_string());
                self.status = SessionStatus::Lost;
            }
            // There is no escape from Ted.
            TurnOutcome::Escaped(_) => {
                self.mode = Mode::Finale(battle);
            }
        }
        out
    }

    fn push_finale_banner(&self, battle: &FinalBattle, out: &mut Vec<String>) {
        out.push(format!(
            "Your HP: {} | Ted HP: {}",
            self.player.current_hp, battle.ted.hp
        ));
        out.push("Options: attack / shoot / use pages / status".to_string());
    }
}

/// Turns a combat event into a display line.
fn render_event(event: &CombatEvent, hostile_name: &str) -> String {
    match event {
        CombatEvent::MeleeHit { weapon, damage } => {
            format!("You strike with the {weapon} for {damage} damage.")
        }
        CombatEvent::ShotFired { damage, ammo_left } => {
            format!("You fire the pistol for {damage} damage. Ammo left: {ammo_left}")
        }
        CombatEvent::NoPistolEquipped => "You don't have a pistol equipped.".to_string(),
        CombatEvent::NoAmmo => "No ammo!".to_string(),
        CombatEvent::PowerStrike { damage } => {
            format!("You unleash a Power Strike! ({damage} damage)")
        }
        CombatEvent::VanishSuccess => "You vanish into the shadows.".to_string(),
        CombatEvent::VanishFailed => "Stealth failed!".to_string(),
        CombatEvent::EmpBlast { damage } => {
            format!("You discharge an EMP blast! ({damage} damage)")
        }
        CombatEvent::NoEnergyCell => "You lack an energy cell for the EMP.".to_string(),
        CombatEvent::Braced => "You brace for the next attack.".to_string(),
        CombatEvent::MedkitUsed { healed } => {
            format!("You use a medkit and restore {healed} HP.")
        }
        CombatEvent::ItemNotUsable { item } => {
            format!("You can't use the {} right now.", item.name())
        }
        CombatEvent::ItemMissing { item } => format!("You don't have a {}.", item.name()),
        CombatEvent::SneakSuccess => "You slip away silently.".to_string(),
        CombatEvent::SneakFailed => {
            format!("Sneak failed. The {hostile_name} notices you and attacks!")
        }
        CombatEvent::FleeSuccess => "You break away!".to_string(),
        CombatEvent::FleeFailed => "You fail to flee!".to_string(),
        CombatEvent::Retaliation { damage } => {
            format!("The {hostile_name} hits you for {damage} damage.")
        }
        CombatEvent::RetaliationMissed => format!("The {hostile_name} misses."),
        CombatEvent::RetaliationEvaded => {
            format!("The {hostile_name} strikes at empty air.")
        }
        CombatEvent::HostileDestroyed => format!("You destroyed the {hostile_name}!"),
        CombatEvent::PlayerFell => {
            "You collapse... the machines have claimed another life.".to_string()
        }
        CombatEvent::PagesSpoken => {
            "You speak the eleven-word sentence into the facility core...".to_string()
        }
        CombatEvent::PagesIncomplete { collected } => format!(
            "You don't have all {PAGE_COUNT} pages ({collected}/{PAGE_COUNT}). Ted scourges you for the attempt."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(21)
    }

    fn new_session(class: Class) -> (Session, ChaCha8Rng) {
        let mut rng = rng();
        let session = Session::new("Tester".to_string(), class, &mut rng);
        (session, rng)
    }

    #[test]
    fn test_unknown_command_changes_nothing() {
        let (mut session, mut rng) = new_session(Class::Warrior);
        let hp = session.player.current_hp;
        let turns = session.turns;

        let out = session.handle_line("dance", &mut rng);

        assert!(out[0].contains("Unknown command"));
        assert_eq!(session.player.current_hp, hp);
        assert_eq!(session.turns, turns);
        assert_eq!(session.status, SessionStatus::Running);
    }

    #[test]
    fn test_blocked_movement_does_not_advance_turns() {
        let (mut session, mut rng) = new_session(Class::Warrior);
        // The Subway Tunnel has no west exit.
        let out = session.handle_line("go west", &mut rng);
        assert_eq!(out[0], "You can't go that way.");
        assert_eq!(session.turns, 0);
    }

    #[test]
    fn test_quit_ends_the_session() {
        let (mut session, mut rng) = new_session(Class::Rogue);
        session.handle_line("quit", &mut rng);
        assert_eq!(session.status, SessionStatus::Quit);
        assert!(session.is_over());

        let out = session.handle_line("look", &mut rng);
        assert_eq!(out, vec!["The mission is over.".to_string()]);
    }

    #[test]
    fn test_take_page_with_none_present_reports_cleanly() {
        let (mut session, mut rng) = new_session(Class::Rogue);
        // The Sanctuary never holds a page.
        session.player.location = RoomId::CityParkSanctuary;
        let out = session.handle_line("take page", &mut rng);
        assert!(out.iter().any(|l| l == "There's no page here."));
        assert!(session.player.pages.is_empty());
    }

    #[test]
    fn test_use_pages_wins_only_with_all_eleven_at_sanctuary() {
        let (mut session, mut rng) = new_session(Class::Engineer);
        session.player.location = RoomId::CityParkSanctuary;

        session.player.pages = crate::quest::PAGE_WORDS.iter().take(10).copied().collect();
        session.handle_line("use pages", &mut rng);
        assert_eq!(session.status, SessionStatus::Running);

        session.player.pages = crate::quest::PAGE_WORDS.to_vec();
        session.handle_line("use pages", &mut rng);
        assert_eq!(session.status, SessionStatus::Won);
    }

    #[test]
    fn test_use_pages_away_from_sanctuary_never_wins() {
        let (mut session, mut rng) = new_session(Class::Engineer);
        session.player.location = RoomId::HarborDocks;
        session.player.pages = crate::quest::PAGE_WORDS.to_vec();

        let out = session.handle_line("use pages", &mut rng);
        assert!(out.iter().any(|l| l.contains("Nowhere to safely use")));
        assert_eq!(session.status, SessionStatus::Running);
    }

    #[test]
    fn test_defeat_stops_further_processing() {
        let (mut session, mut rng) = new_session(Class::Warrior);
        session.player.current_hp = 1;
        session.mode = Mode::Fighting(Hostile {
            name: "Executioner",
            hp: 10_000,
            attack: 50,
            armor: 200,
            hit_chance: 1.0,
        });

        let out = session.handle_line("attack", &mut rng);
        assert_eq!(session.status, SessionStatus::Lost);
        assert!(out.iter().any(|l| l.contains("You collapse")));

        let pages_before = session.player.pages.len();
        let out = session.handle_line("attack", &mut rng);
        assert_eq!(out, vec!["The mission is over.".to_string()]);
        assert_eq!(session.player.pages.len(), pages_before);
    }

    #[test]
    fn test_attack_spam_wins_a_seeded_fight() {
        let (mut session, mut rng) = new_session(Class::Warrior);
        session.mode = Mode::Fighting(Hostile {
            name: "Scrap Heap",
            hp: 30,
            attack: 0,
            armor: 0,
            hit_chance: 1.0,
        });

        let mut rounds = 0;
        while matches!(session.mode, Mode::Fighting(_)) {
            session.handle_line("attack", &mut rng);
            rounds += 1;
            assert!(rounds <= 10, "combat failed to terminate");
        }
        assert_eq!(session.hostiles_destroyed, 1);
        assert_eq!(session.status, SessionStatus::Running);
        assert!(session.player.is_alive());
    }

    #[test]
    fn test_combat_status_query_is_free() {
        let (mut session, mut rng) = new_session(Class::Rogue);
        session.mode = Mode::Fighting(Hostile {
            name: "Watcher",
            hp: 50,
            attack: 30,
            armor: 0,
            hit_chance: 1.0,
        });

        let hp = session.player.current_hp;
        session.handle_line("status", &mut rng);
        session.handle_line("help", &mut rng);
        session.handle_line("not-a-move", &mut rng);

        assert_eq!(session.player.current_hp, hp, "queries must not consume a turn");
        match &session.mode {
            Mode::Fighting(hostile) => assert_eq!(hostile.hp, 50),
            other => panic!("still fighting expected, got {other:?}"),
        }
    }

    #[test]
    fn test_equip_pistol_requires_owning_one() {
        let (mut session, mut rng) = new_session(Class::Warrior);
        let out = session.handle_line("equip pistol", &mut rng);
        assert!(out[0].contains("don't have a pistol"));
        assert_eq!(session.player.weapon, WeaponId::Knife);

        session.player.inventory.add(ItemId::Pistol, 1);
        session.player.ammo = PISTOL_AMMO;
        let out = session.handle_line("equip pistol", &mut rng);
        assert!(out[0].contains("You equip the pistol"));
        assert_eq!(session.player.weapon, WeaponId::Pistol);
    }

    #[test]
    fn test_take_pistol_only_where_spotted() {
        let (mut session, mut rng) = new_session(Class::Rogue);
        let out = session.handle_line("take pistol", &mut rng);
        assert!(out[0].contains("no pistol here"));

        session.pistol_spotted = Some(session.player.location);
        let out = session.handle_line("take pistol", &mut rng);
        assert!(out[0].contains("You scavenge a pistol"));
        assert!(session.player.inventory.has(ItemId::Pistol));
        assert_eq!(session.player.ammo, PISTOL_AMMO);
        assert_eq!(session.pistol_spotted, None);
    }

    #[test]
    fn test_awakened_ted_manifests_at_the_lobby() {
        let (mut session, mut rng) = new_session(Class::Warrior);
        session.player.location = RoomId::FacilityLobby;
        session.ted_awake = true;

        let out = session.handle_line("look", &mut rng);
        assert!(out.iter().any(|l| l.contains("Ted manifests")));
        assert!(matches!(session.mode, Mode::Finale(_)));
    }

    #[test]
    fn test_full_sentence_beats_ted() {
        let (mut session, mut rng) = new_session(Class::Warrior);
        session.player.pages = crate::quest::PAGE_WORDS.to_vec();
        session.mode = Mode::Finale(FinalBattle::new());

        let out = session.handle_line("use pages", &mut rng);
        assert_eq!(session.status, SessionStatus::Won);
        assert!(out.iter().any(|l| l.contains("YOU WIN")));
    }

    #[test]
    fn test_turn_limit_loses_the_mission() {
        let (mut session, mut rng) = new_session(Class::Rogue);
        session.turns = TURN_LIMIT;

        // Any successful move past the limit ends it.
        let out = session.handle_line("go north", &mut rng);
        assert_eq!(session.status, SessionStatus::Lost);
        assert!(out.iter().any(|l| l.contains("too hostile")));
    }
}
