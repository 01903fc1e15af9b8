//! Plain-text views of a generated world for the inspection CLI.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use game_core::{RoomId, World};

/// Coarse grid map: one `[ ]` cell per room, `[@]` for the marked room.
pub fn map_string(world: &World, marked: Option<RoomId>) -> String {
    let min_y = world.rooms().map(|room| room.pos.y).min().unwrap_or(0);
    let max_y = world.rooms().map(|room| room.pos.y).max().unwrap_or(0);
    let min_x = world.rooms().map(|room| room.pos.x).min().unwrap_or(0);
    let max_x = world.rooms().map(|room| room.pos.x).max().unwrap_or(0);

    let cells: BTreeMap<(i32, i32), RoomId> =
        world.rooms().map(|room| ((room.pos.y, room.pos.x), room.id)).collect();

    let mut out = String::new();
    for y in min_y..=max_y {
        for x in min_x..=max_x {
            match cells.get(&(y, x)) {
                Some(id) if Some(*id) == marked => out.push_str("[@]"),
                Some(_) => out.push_str("[ ]"),
                None => out.push_str("   "),
            }
        }
        out.push('\n');
    }
    out
}

/// One line per room, sorted by name: exits with lock markers, then items.
pub fn describe_rooms(world: &World) -> String {
    let mut names: Vec<&str> = world.rooms().map(|room| room.name.as_str()).collect();
    names.sort_unstable();

    let mut out = String::new();
    for name in names {
        let room = world
            .rooms()
            .find(|room| room.name == name)
            .expect("room listed by name must exist");
        let exits: Vec<String> = room
            .exits
            .iter()
            .map(|(dir, exit)| {
                let target = &world.room(exit.to).name;
                if exit.locked {
                    format!("{}: {} (locked)", dir.label(), target)
                } else {
                    format!("{}: {}", dir.label(), target)
                }
            })
            .collect();
        let _ = writeln!(out, "{} -> {}", name, exits.join(", "));
        for item in &room.items {
            let _ = writeln!(out, "  item: {}", item.name);
        }
    }
    out
}
