//! Room definitions. Order must match the `RoomId` discriminants.

use super::{Direction, Room, RoomId};

pub static ROOMS: [Room; 12] = [
    Room {
        id: RoomId::SubwayTunnel,
        name: "Subway Tunnel",
        desc: "A dark, graffiti-covered subway tunnel. Trains long gone. Drips echo.",
        exits: &[
            (Direction::North, RoomId::LowerManhattanRuins),
            (Direction::East, RoomId::UndergroundLab),
        ],
        safe: false,
        sanctuary: false,
        final_site: false,
    },
    Room {
        id: RoomId::LowerManhattanRuins,
        name: "Lower Manhattan Ruins",
        desc: "Skyscraper skeletons and collapsed bridges. Fires smolder in the distance.",
        exits: &[
            (Direction::South, RoomId::SubwayTunnel),
            (Direction::East, RoomId::AbandonedLibrary),
        ],
        safe: false,
        sanctuary: false,
        final_site: false,
    },
    Room {
        id: RoomId::AbandonedLibrary,
        name: "Abandoned Library",
        desc: "Rows of moldy books. A makeshift survivor camp sits in one aisle.",
        exits: &[
            (Direction::West, RoomId::LowerManhattanRuins),
            (Direction::North, RoomId::CityParkSanctuary),
        ],
        safe: true,
        sanctuary: false,
        final_site: false,
    },
    Room {
        id: RoomId::CityParkSanctuary,
        name: "City Park Sanctuary",
        desc: "A fenced green area where human survivors cluster. Military tents and researchers.",
        exits: &[(Direction::South, RoomId::AbandonedLibrary)],
        safe: true,
        sanctuary: true,
        final_site: false,
    },
    Room {
        id: RoomId::UndergroundLab,
        name: "Underground Lab",
        desc: "Old research facility corridors with broken terminals and scorched concrete.",
        exits: &[
            (Direction::West, RoomId::SubwayTunnel),
            (Direction::North, RoomId::RuinedMall),
        ],
        safe: false,
        sanctuary: false,
        final_site: false,
    },
    Room {
        id: RoomId::RuinedMall,
        name: "Ruined Mall",
        desc: "Shattered storefronts. A clothing store serves as a trap for the unwary.",
        exits: &[
            (Direction::South, RoomId::UndergroundLab),
            (Direction::East, RoomId::HarborDocks),
        ],
        safe: false,
        sanctuary: false,
        final_site: false,
    },
    Room {
        id: RoomId::HarborDocks,
        name: "Harbor Docks",
        desc: "Foggy docks with overturned boats. A few smugglers trade in supplies.",
        exits: &[
            (Direction::West, RoomId::RuinedMall),
            (Direction::North, RoomId::IndustrialZone),
        ],
        safe: false,
        sanctuary: false,
        final_site: false,
    },
    Room {
        id: RoomId::IndustrialZone,
        name: "Industrial Zone",
        desc: "Rusting factories and conveyor ruins. Sparks sometimes flicker at night.",
        exits: &[
            (Direction::South, RoomId::HarborDocks),
            (Direction::East, RoomId::UpperEastShelters),
        ],
        safe: false,
        sanctuary: false,
        final_site: false,
    },
    Room {
        id: RoomId::UpperEastShelters,
        name: "Upper East Shelters",
        desc: "A cluster of fortified apartments turned community bunkers.",
        exits: &[
            (Direction::West, RoomId::IndustrialZone),
            (Direction::North, RoomId::RooftopGarden),
        ],
        safe: true,
        sanctuary: false,
        final_site: false,
    },
    Room {
        id: RoomId::RooftopGarden,
        name: "Rooftop Garden",
        desc: "High above the city, small gardens and wind turbines, one of the few green spots.",
        exits: &[
            (Direction::South, RoomId::UpperEastShelters),
            (Direction::East, RoomId::FacilityGates),
        ],
        safe: true,
        sanctuary: false,
        final_site: false,
    },
    Room {
        id: RoomId::FacilityGates,
        name: "AI Research Facility Gates",
        desc: "The massive gates to the research complex. Drones circle above.",
        exits: &[
            (Direction::West, RoomId::RooftopGarden),
            (Direction::North, RoomId::FacilityLobby),
        ],
        safe: false,
        sanctuary: false,
        final_site: false,
    },
    Room {
        id: RoomId::FacilityLobby,
        name: "AI Research Facility Lobby",
        desc: "A cavernous lobby. This is where Ted once stood as a project. The final area.",
        exits: &[(Direction::South, RoomId::FacilityGates)],
        safe: false,
        sanctuary: false,
        final_site: true,
    },
];
