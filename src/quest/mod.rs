//! Page placement and quest progress.
//!
//! Eleven one-word pages are dealt across the city at session start. The
//! player wins by speaking all eleven at the Sanctuary, or by forcing them
//! on Ted during the final confrontation.

use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::character::Player;
use crate::core::constants::PAGE_COUNT;
use crate::world::{self, RoomId};

/// The shutdown sentence, one word per page.
pub static PAGE_WORDS: [&str; PAGE_COUNT] = [
    "quiet", "iron", "thread", "sigma", "hollow", "twelve", "anchor", "morrow", "cipher", "wilt",
    "end",
];

/// Where the not-yet-collected pages currently lie.
#[derive(Debug, Clone, Default)]
pub struct PageSpread {
    by_room: BTreeMap<RoomId, Vec<&'static str>>,
}

impl PageSpread {
    /// Deals the shuffled words round-robin across the shuffled eligible
    /// rooms (everywhere but the Sanctuary). Every word is placed exactly
    /// once.
    pub fn place(rng: &mut impl Rng) -> Self {
        let mut words = PAGE_WORDS;
        words.shuffle(rng);

        let mut rooms: Vec<RoomId> = world::ROOMS
            .iter()
            .filter(|room| !room.sanctuary)
            .map(|room| room.id)
            .collect();
        rooms.shuffle(rng);

        let mut by_room: BTreeMap<RoomId, Vec<&'static str>> = BTreeMap::new();
        for (index, word) in words.iter().enumerate() {
            let room = rooms[index % rooms.len()];
            by_room.entry(room).or_default().push(word);
        }
        Self { by_room }
    }

    pub fn remaining_at(&self, room: RoomId) -> usize {
        self.by_room.get(&room).map_or(0, |pages| pages.len())
    }

    pub fn has_page(&self, room: RoomId) -> bool {
        self.remaining_at(room) > 0
    }

    pub fn total_remaining(&self) -> usize {
        self.by_room.values().map(|pages| pages.len()).sum()
    }

    /// Removes the oldest page at `room`, if any. Empty rooms report
    /// `None` with no side effect.
    pub fn take_from(&mut self, room: RoomId) -> Option<&'static str> {
        let pages = self.by_room.get_mut(&room)?;
        let word = pages.remove(0);
        if pages.is_empty() {
            self.by_room.remove(&room);
        }
        Some(word)
    }
}

/// Result of trying to speak the pages outside of combat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinaleAttempt {
    /// At the Sanctuary with the full sentence.
    Victory,
    /// At the Sanctuary, but the sentence is incomplete.
    MissingPages { collected: usize },
    /// Nowhere to safely use the pages here.
    WrongPlace,
}

pub fn attempt_finale(player: &Player) -> FinaleAttempt {
    if !world::room(player.location).sanctuary {
        return FinaleAttempt::WrongPlace;
    }
    if player.pages.len() == PAGE_COUNT {
        FinaleAttempt::Victory
    } else {
        FinaleAttempt::MissingPages {
            collected: player.pages.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Class;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::BTreeSet;

    #[test]
    fn test_placement_partitions_the_word_set_exactly() {
        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut spread = PageSpread::place(&mut rng);

            assert_eq!(spread.total_remaining(), PAGE_COUNT);
            assert_eq!(spread.remaining_at(RoomId::CityParkSanctuary), 0);

            let mut collected = Vec::new();
            for room in world::ROOMS.iter() {
                while let Some(word) = spread.take_from(room.id) {
                    collected.push(word);
                }
            }

            let collected: BTreeSet<&str> = collected.into_iter().collect();
            let expected: BTreeSet<&str> = PAGE_WORDS.iter().copied().collect();
            assert_eq!(collected, expected, "seed {seed}");
            assert_eq!(spread.total_remaining(), 0);
        }
    }

    #[test]
    fn test_take_from_is_fifo() {
        let mut spread = PageSpread::default();
        spread.by_room.insert(
            RoomId::HarborDocks,
            vec!["quiet", "iron", "thread"],
        );

        assert_eq!(spread.take_from(RoomId::HarborDocks), Some("quiet"));
        assert_eq!(spread.take_from(RoomId::HarborDocks), Some("iron"));
        assert_eq!(spread.take_from(RoomId::HarborDocks), Some("thread"));
        assert_eq!(spread.take_from(RoomId::HarborDocks), None);
    }

    #[test]
    fn test_taking_from_an_empty_room_has_no_side_effect() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut spread = PageSpread::place(&mut rng);
        let total = spread.total_remaining();

        // The Sanctuary never holds a page.
        assert_eq!(spread.take_from(RoomId::CityParkSanctuary), None);
        assert_eq!(spread.total_remaining(), total);
    }

    #[test]
    fn test_finale_requires_the_sanctuary() {
        let mut player = Player::new("Tester".to_string(), Class::Rogue);
        player.pages.extend(PAGE_WORDS.iter());

        player.location = RoomId::HarborDocks;
        assert_eq!(attempt_finale(&player), FinaleAttempt::WrongPlace);

        player.location = RoomId::CityParkSanctuary;
        assert_eq!(attempt_finale(&player), FinaleAttempt::Victory);
    }

    #[test]
    fn test_finale_requires_every_page() {
        let mut player = Player::new("Tester".to_string(), Class::Rogue);
        player.location = RoomId::CityParkSanctuary;

        for count in 0..PAGE_COUNT {
            player.pages = PAGE_WORDS.iter().take(count).copied().collect();
            assert_eq!(
                attempt_finale(&player),
                FinaleAttempt::MissingPages { collected: count }
            );
        }
    }
}
