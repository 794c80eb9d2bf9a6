//! The fixed location graph of ruined New York.
//!
//! Rooms and their exits are immutable `&'static` data, defined once in
//! [`data`] and looked up by [`RoomId`]. The graph is authored symmetric
//! (every north exit has a matching south exit and so on).

mod data;

pub use data::ROOMS;

/// Identifies a room. Doubles as the index into [`ROOMS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RoomId {
    SubwayTunnel,
    LowerManhattanRuins,
    AbandonedLibrary,
    CityParkSanctuary,
    UndergroundLab,
    RuinedMall,
    HarborDocks,
    IndustrialZone,
    UpperEastShelters,
    RooftopGarden,
    FacilityGates,
    FacilityLobby,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub fn parse(word: &str) -> Option<Direction> {
        match word {
            "north" | "n" => Some(Direction::North),
            "south" | "s" => Some(Direction::South),
            "east" | "e" => Some(Direction::East),
            "west" | "w" => Some(Direction::West),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }
}

/// A node in the location graph.
#[derive(Debug)]
pub struct Room {
    pub id: RoomId,
    pub name: &'static str,
    pub desc: &'static str,
    pub exits: &'static [(Direction, RoomId)],
    /// Robots do not enter safe rooms; no encounters fire here.
    pub safe: bool,
    /// The one room where the pages can be spoken in safety.
    pub sanctuary: bool,
    /// The one room where Ted can manifest.
    pub final_site: bool,
}

impl Room {
    pub fn exit(&self, dir: Direction) -> Option<RoomId> {
        self.exits
            .iter()
            .find(|(d, _)| *d == dir)
            .map(|(_, target)| *target)
    }
}

/// Looks up a room by id.
pub fn room(id: RoomId) -> &'static Room {
    &ROOMS[id as usize]
}

/// The room the player wakes up in.
pub fn starting_room() -> RoomId {
    RoomId::SubwayTunnel
}
