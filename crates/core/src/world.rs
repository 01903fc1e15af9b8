//! Room-graph arena shared by the generator and the game layer.
//! Rooms live in a slotmap and reference each other through `RoomId`, so
//! traversal and mutation never rely on pointer identity.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use slotmap::SlotMap;

use crate::types::{Direction, Pos, RoomId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub description: String,
}

impl Item {
    pub fn new(name: &str, description: &str) -> Self {
        Self { name: name.to_string(), description: description.to_string() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Exit {
    pub to: RoomId,
    pub locked: bool,
}

#[derive(Clone, Debug)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub description: String,
    pub pos: Pos,
    pub items: Vec<Item>,
    pub exits: BTreeMap<Direction, Exit>,
}

/// The full room graph. The start room is the player's entry point and the
/// root every reachability question is asked from.
#[derive(Clone, Debug)]
pub struct World {
    rooms: SlotMap<RoomId, Room>,
    pub start: RoomId,
}

impl World {
    pub fn with_start(name: &str, description: &str, pos: Pos) -> Self {
        let mut rooms = SlotMap::with_key();
        let start = rooms.insert(Room {
            id: RoomId::default(),
            name: name.to_string(),
            description: description.to_string(),
            pos,
            items: Vec::new(),
            exits: BTreeMap::new(),
        });
        rooms[start].id = start;
        Self { rooms, start }
    }

    pub fn add_room(&mut self, name: &str, description: &str, pos: Pos) -> RoomId {
        let id = self.rooms.insert(Room {
            id: RoomId::default(),
            name: name.to_string(),
            description: description.to_string(),
            pos,
            items: Vec::new(),
            exits: BTreeMap::new(),
        });
        self.rooms[id].id = id;
        id
    }

    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id]
    }

    pub fn room_mut(&mut self, id: RoomId) -> &mut Room {
        &mut self.rooms[id]
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Rooms in arena insertion order. This order is the deterministic
    /// tie-break for every scan whose result depends on iteration sequence.
    pub fn room_ids(&self) -> impl Iterator<Item = RoomId> + '_ {
        self.rooms.keys()
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    pub fn add_exit(&mut self, from: RoomId, dir: Direction, to: RoomId, locked: bool) {
        self.rooms[from].exits.insert(dir, Exit { to, locked });
    }

    /// Connects two rooms with an unlocked exit pair, one in each direction.
    pub fn link(&mut self, from: RoomId, dir: Direction, to: RoomId) {
        self.add_exit(from, dir, to, false);
        self.add_exit(to, dir.opposite(), from, false);
    }

    /// Every room reachable from `from`, each exactly once, in BFS discovery
    /// order. Rooms are marked visited before their exits are expanded, so
    /// cyclic graphs terminate.
    pub fn collect_from(&self, from: RoomId) -> Vec<RoomId> {
        let mut visited = BTreeSet::from([from]);
        let mut order = vec![from];
        let mut queue = VecDeque::from([from]);

        while let Some(current) = queue.pop_front() {
            for exit in self.rooms[current].exits.values() {
                if visited.insert(exit.to) {
                    order.push(exit.to);
                    queue.push_back(exit.to);
                }
            }
        }

        order
    }

    /// First room (in insertion order) holding an item with the given name.
    pub fn room_holding(&self, item_name: &str) -> Option<RoomId> {
        self.rooms
            .iter()
            .find(|(_, room)| room.items.iter().any(|item| item.name == item_name))
            .map(|(id, _)| id)
    }

    /// Stable byte encoding of the whole graph, used to fingerprint worlds in
    /// determinism checks. Rooms are encoded in insertion order; exit targets
    /// are encoded by room ordinal rather than key bits.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let ordinals: BTreeMap<RoomId, u32> = self
            .room_ids()
            .enumerate()
            .map(|(ordinal, id)| (id, ordinal as u32))
            .collect();

        let mut bytes = Vec::new();
        bytes.extend((self.rooms.len() as u32).to_le_bytes());
        bytes.extend(ordinals[&self.start].to_le_bytes());
        for room in self.rooms() {
            encode_str(&mut bytes, &room.name);
            encode_str(&mut bytes, &room.description);
            bytes.extend(room.pos.y.to_le_bytes());
            bytes.extend(room.pos.x.to_le_bytes());
            bytes.push(room.exits.len() as u8);
            for (dir, exit) in &room.exits {
                bytes.push(match dir {
                    Direction::North => 0,
                    Direction::South => 1,
                    Direction::East => 2,
                    Direction::West => 3,
                });
                bytes.extend(ordinals[&exit.to].to_le_bytes());
                bytes.push(u8::from(exit.locked));
            }
            bytes.push(room.items.len() as u8);
            for item in &room.items {
                encode_str(&mut bytes, &item.name);
            }
        }
        bytes
    }
}

fn encode_str(bytes: &mut Vec<u8>, s: &str) {
    bytes.extend((s.len() as u32).to_le_bytes());
    bytes.extend(s.as_bytes());
}
