//! Generation parameters and the stock content pools.

use serde::{Deserialize, Serialize};

pub const START_ROOM_NAME: &str = "Starting Room";
pub const START_ROOM_DESC: &str =
    "You find yourself in a plain room with a single, sturdy door.";

pub const TREASURE_ROOM_NAME: &str = "Treasure Room";
pub const TREASURE_ROOM_DESC: &str =
    "You have found the treasure room! A large chest sits in the center.";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenConfig {
    /// Total rooms including the start room.
    pub room_count: usize,
    /// Minimum number of rooms on the start-to-treasure path, start included.
    pub min_path_to_treasure: usize,
    /// Flavor items scattered into otherwise empty rooms.
    pub extra_items: Vec<String>,
    /// Unique names for generated rooms; must hold at least `room_count - 1`
    /// entries since the start room's name is fixed.
    pub room_name_pool: Vec<String>,
    pub room_desc_pool: Vec<String>,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            room_count: 10,
            min_path_to_treasure: 4,
            extra_items: vec!["sword".to_string()],
            room_name_pool: [
                "Dank Cellar",
                "Dusty Armory",
                "Forgotten Library",
                "Echoing Cavern",
                "Drafty Corridor",
                "Sunken Grotto",
                "Crystal Chamber",
                "Shadowy Antechamber",
                "Musty Crawlspace",
                "Alchemist's Laboratory",
            ]
            .map(str::to_string)
            .to_vec(),
            room_desc_pool: [
                "You are in a small, damp room. A faint dripping sound echoes from a dark corner.",
                "The air is thick with the smell of old books and decaying paper. Shelves line the walls.",
                "A single torch flickers, casting long, dancing shadows across the cold stone floor.",
                "The ground is uneven and slick with moisture. Strange fungi glow with a soft, eerie light.",
                "You can feel a cold breeze, though you can't identify its source.",
                "This room is surprisingly ornate, with faded tapestries hanging on the walls.",
                "An old suit of armor stands in the corner, its helmet staring at you blankly.",
                "The ceiling is unusually high here, lost in the oppressive darkness above.",
            ]
            .map(str::to_string)
            .to_vec(),
        }
    }
}
