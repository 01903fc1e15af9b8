//! Player-facing game state built on top of a generated world.
//! This module exists to turn parsed commands into world and inventory
//! mutations. It does not own rendering or the terminal loop.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write as _;

use crate::types::{Direction, RoomId};
use crate::world::{Item, World};
use crate::worldgen::config::TREASURE_ROOM_NAME;
use crate::worldgen::{GenConfig, GenerateError, generate_world};

pub mod parser;

const HELP_TEXT: &str = "Instant Commands: w,a,s,d (move), e (take), i (inventory), u (unlock), l (look), q (quit)\n\
     Typed Commands: go [dir], take [item], drop [item], unlock, score, help, quit";

/// The reply shown to the player, plus whether the session should end
/// (either the player quit or the game was just won).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandOutcome {
    pub reply: String,
    pub should_exit: bool,
}

pub struct Game {
    world: World,
    rooms_by_name: BTreeMap<String, RoomId>,
    player_location: RoomId,
    inventory: Vec<Item>,
    visited: BTreeSet<RoomId>,
    turns: u32,
    won: bool,
}

impl Game {
    pub fn new(seed: u64, config: &GenConfig) -> Result<Self, GenerateError> {
        Ok(Self::from_world(generate_world(seed, config)?))
    }

    /// Wraps an existing world, e.g. a handcrafted test fixture.
    pub fn from_world(world: World) -> Self {
        let rooms_by_name = world
            .collect_from(world.start)
            .into_iter()
            .map(|id| (world.room(id).name.clone(), id))
            .collect();
        let start = world.start;
        Self {
            world,
            rooms_by_name,
            player_location: start,
            inventory: Vec::new(),
            visited: BTreeSet::from([start]),
            turns: 0,
            won: false,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player_location(&self) -> RoomId {
        self.player_location
    }

    pub fn inventory(&self) -> &[Item] {
        &self.inventory
    }

    pub fn rooms_by_name(&self) -> &BTreeMap<String, RoomId> {
        &self.rooms_by_name
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    /// 10 points per carried item, 5 per room visited.
    pub fn score(&self) -> u32 {
        self.inventory.len() as u32 * 10 + self.visited.len() as u32 * 5
    }

    pub fn handle_command(&mut self, command: &str) -> CommandOutcome {
        let command = command.to_lowercase();
        let (verb, noun) = parser::parse_input(&command);

        let (reply, success, should_exit) = match verb {
            "quit" | "q" => return CommandOutcome { reply: "Goodbye!".into(), should_exit: true },
            "help" | "h" => (HELP_TEXT.to_string(), false, false),
            "look" | "l" => (self.look(), false, false),
            "inventory" | "i" => (self.inventory_text(), false, false),
            "score" => (format!("Score: {}", self.score()), false, false),
            "go" => {
                let (reply, success) = self.move_player(&noun);
                (reply, success, false)
            }
            "w" | "a" | "s" | "d" => {
                let dir = match verb {
                    "w" => "north",
                    "a" => "west",
                    "s" => "south",
                    _ => "east",
                };
                let (reply, success) = self.move_player(dir);
                (reply, success, false)
            }
            "take" => {
                let (reply, success) = self.take_item(&noun);
                (reply, success, false)
            }
            "e" => {
                let first = self.world.room(self.player_location).items.first().cloned();
                match first {
                    Some(item) => {
                        let (reply, success) = self.take_item(&item.name);
                        (reply, success, false)
                    }
                    None => ("There is nothing to take.".to_string(), false, false),
                }
            }
            "drop" => {
                let (reply, success) = self.drop_item(&noun);
                (reply, success, false)
            }
            "unlock" | "u" => self.unlock(),
            _ => ("I don't understand that command.".to_string(), false, false),
        };

        if success {
            self.turns += 1;
        }

        CommandOutcome { reply, should_exit: should_exit || self.won }
    }

    pub fn look(&self) -> String {
        let room = self.world.room(self.player_location);
        let mut text = room.description.clone();
        text.push('\n');
        if !room.items.is_empty() {
            text.push_str("You see the following items:\n");
            for item in &room.items {
                let _ = writeln!(text, "- {}", item.name);
            }
        }
        text.push_str("Exits:\n");
        for dir in room.exits.keys() {
            let _ = writeln!(text, "- {}", dir.label());
        }
        text
    }

    fn inventory_text(&self) -> String {
        if self.inventory.is_empty() {
            return "You are not carrying anything.".to_string();
        }
        let mut text = String::from("You have the following items:\n");
        for item in &self.inventory {
            let _ = writeln!(text, "- {}", item.name);
        }
        text
    }

    fn move_player(&mut self, direction: &str) -> (String, bool) {
        let Some(dir) = Direction::from_label(direction) else {
            return ("You can't go that way.".to_string(), false);
        };
        let Some(exit) = self.world.room(self.player_location).exits.get(&dir).copied() else {
            return ("You can't go that way.".to_string(), false);
        };
        if exit.locked {
            return ("The door is locked.".to_string(), false);
        }
        self.player_location = exit.to;
        self.visited.insert(exit.to);
        (String::new(), true)
    }

    fn take_item(&mut self, item_name: &str) -> (String, bool) {
        let room = self.world.room_mut(self.player_location);
        let item_name = if item_name.is_empty() {
            match &room.items[..] {
                [only] => only.name.clone(),
                _ => return ("What do you want to take?".to_string(), false),
            }
        } else {
            item_name.to_string()
        };

        let Some(index) =
            room.items.iter().position(|item| item.name.eq_ignore_ascii_case(&item_name))
        else {
            return ("You don't see that here.".to_string(), false);
        };
        let item = room.items.remove(index);
        let reply = if item.name == "treasure" {
            self.won = true;
            "You took the treasure. You win!".to_string()
        } else {
            format!("You took the {}.", item.name)
        };
        self.inventory.push(item);
        (reply, true)
    }

    fn drop_item(&mut self, item_name: &str) -> (String, bool) {
        if item_name.is_empty() {
            return ("What do you want to drop?".to_string(), false);
        }
        let Some(index) =
            self.inventory.iter().position(|item| item.name.eq_ignore_ascii_case(item_name))
        else {
            return ("You don't have that.".to_string(), false);
        };
        let item = self.inventory.remove(index);
        let reply = format!("You dropped the {}.", item.name);
        self.world.room_mut(self.player_location).items.push(item);
        (reply, true)
    }

    fn unlock(&mut self) -> (String, bool, bool) {
        let room = self.world.room(self.player_location);
        let Some((dir, exit)) =
            room.exits.iter().find(|(_, exit)| exit.locked).map(|(dir, exit)| (*dir, *exit))
        else {
            return ("There is nothing to unlock here.".to_string(), false, false);
        };

        if !self.inventory.iter().any(|item| item.name == "key") {
            return ("You don't have the key.".to_string(), false, false);
        }

        let location = self.player_location;
        self.world.room_mut(location).exits.get_mut(&dir).expect("exit still present").locked =
            false;
        if self.world.room(exit.to).name == TREASURE_ROOM_NAME {
            self.won = true;
            return ("You unlocked the door! You win!".to_string(), false, true);
        }
        ("You unlocked the door.".to_string(), true, false)
    }
}
