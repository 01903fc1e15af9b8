//! Key, locked door, and treasure placement along the longest path.
//! This module exists to turn a plain connected graph into a puzzle; it
//! relies on the path finder and never touches grid positions.

use rand_chacha::ChaCha8Rng;

use super::config::{GenConfig, TREASURE_ROOM_DESC, TREASURE_ROOM_NAME};
use super::error::GenerateError;
use super::pathfind::longest_shortest_path;
use super::seed::pick_index;
use crate::types::RoomId;
use crate::world::{Item, World};

const ITEM_PLACEMENT_ATTEMPTS: u32 = 100;

/// Three rooms is the structural floor regardless of config: the door locks
/// the edge past the path midpoint, so the path needs a room on each side of
/// it plus the midpoint itself.
const MIN_PUZZLE_PATH_ROOMS: usize = 3;

/// Marks the far end of the longest shortest path as the treasure room,
/// locks the one exit at the path's midpoint, and plants the key strictly
/// before the lock so the canonical route stays solvable.
pub(super) fn place_puzzles(
    config: &GenConfig,
    world: &mut World,
    rng: &mut ChaCha8Rng,
) -> Result<(), GenerateError> {
    let required = config.min_path_to_treasure.max(MIN_PUZZLE_PATH_ROOMS);
    let path = longest_shortest_path(world, world.start).unwrap_or_default();
    if path.len() < required {
        return Err(GenerateError::PathTooShort { found: path.len(), required });
    }

    let treasure_room = world.room_mut(path[path.len() - 1]);
    treasure_room.name = TREASURE_ROOM_NAME.to_string();
    treasure_room.description = TREASURE_ROOM_DESC.to_string();
    treasure_room.items.push(Item::new("treasure", "A chest full of gold!"));

    // Lock only the forward direction; the way back stays open.
    let door_index = path.len() / 2;
    lock_exit_between(world, path[door_index], path[door_index + 1]);

    let key_index = pick_index(rng, door_index);
    world.room_mut(path[key_index]).items.push(Item::new("key", "A small, rusty key."));

    for item_name in &config.extra_items {
        place_extra_item(world, rng, item_name)?;
    }

    Ok(())
}

fn lock_exit_between(world: &mut World, from: RoomId, to: RoomId) {
    let exit = world
        .room_mut(from)
        .exits
        .values_mut()
        .find(|exit| exit.to == to)
        .expect("consecutive path rooms must share an exit");
    exit.locked = true;
}

fn place_extra_item(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    item_name: &str,
) -> Result<(), GenerateError> {
    let candidates: Vec<RoomId> = world.room_ids().collect();
    for _ in 0..ITEM_PLACEMENT_ATTEMPTS {
        let id = candidates[pick_index(rng, candidates.len())];
        if id == world.start || !world.room(id).items.is_empty() {
            continue;
        }
        world.room_mut(id).items.push(Item::new(item_name, "An extra item."));
        return Ok(());
    }

    Err(GenerateError::NoRoomAvailable {
        item: item_name.to_string(),
        attempts: ITEM_PLACEMENT_ATTEMPTS,
    })
}

#[cfg(test)]
mod tests {
    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;

    use super::super::builder::build_world;
    use super::super::pathfind::shortest_path;
    use super::*;
    use crate::types::{Direction, Pos};

    // A single build can draw a layout whose longest path is too short, so
    // walk forward to the next seed that places cleanly.
    fn placed_world(seed: u64, config: &GenConfig) -> World {
        for offset in 0..32 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed + offset);
            let mut world = build_world(config, &mut rng).unwrap();
            match place_puzzles(config, &mut world, &mut rng) {
                Ok(()) => return world,
                Err(GenerateError::PathTooShort { .. }) => continue,
                Err(err) => panic!("unexpected placement failure: {err}"),
            }
        }
        panic!("no seed near {seed} produced a placeable layout");
    }

    #[test]
    fn treasure_sits_at_the_end_of_the_longest_path() {
        let config = GenConfig::default();
        let world = placed_world(3, &config);
        let treasure = world.room_holding("treasure").unwrap();
        assert_eq!(world.room(treasure).name, TREASURE_ROOM_NAME);
        let path = shortest_path(&world, world.start, treasure, true).unwrap();
        assert!(path.len() >= config.min_path_to_treasure);
    }

    #[test]
    fn exactly_one_exit_is_locked_and_only_forward() {
        let world = placed_world(3, &GenConfig::default());
        let mut locked = Vec::new();
        for room in world.rooms() {
            for exit in room.exits.values() {
                if exit.locked {
                    locked.push((room.id, exit.to));
                }
            }
        }
        let [(from, to)] = locked[..] else {
            panic!("expected exactly one locked exit, found {}", locked.len());
        };
        let back = world.room(to).exits.values().find(|exit| exit.to == from).unwrap();
        assert!(!back.locked, "the reverse direction must stay open");
    }

    #[test]
    fn key_precedes_the_lock_on_the_canonical_path() {
        for seed in [1_u64, 2, 9, 77, 500] {
            let world = placed_world(seed, &GenConfig::default());
            let key_room = world.room_holding("key").unwrap();
            assert!(
                shortest_path(&world, world.start, key_room, false).is_some(),
                "key must stay reachable with locks respected (seed {seed})"
            );
        }
    }

    #[test]
    fn extra_items_land_in_distinct_empty_non_start_rooms() {
        let config = GenConfig {
            extra_items: vec!["sword".to_string(), "shield".to_string(), "rope".to_string()],
            ..GenConfig::default()
        };
        let world = placed_world(12, &config);
        for item_name in &config.extra_items {
            let id = world.room_holding(item_name).unwrap();
            assert_ne!(id, world.start);
            assert_eq!(world.room(id).items.len(), 1);
        }
    }

    #[test]
    fn too_strict_min_path_fails_with_path_too_short() {
        let config = GenConfig { min_path_to_treasure: 100, ..GenConfig::default() };
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut world = build_world(&config, &mut rng).unwrap();
        let err = place_puzzles(&config, &mut world, &mut rng).unwrap_err();
        assert!(matches!(err, GenerateError::PathTooShort { required: 100, .. }));
    }

    #[test]
    fn extra_item_with_no_free_room_fails_with_no_room_available() {
        // Three rooms: the treasure takes the far end, the key lands in the
        // start room, and the first extra item fills the only empty room.
        let mut world = World::with_start("start", "", Pos { y: 0, x: 0 });
        let middle = world.add_room("middle", "", Pos { y: 0, x: 1 });
        let far = world.add_room("far", "", Pos { y: 0, x: 2 });
        world.link(world.start, Direction::East, middle);
        world.link(middle, Direction::East, far);

        let config = GenConfig {
            min_path_to_treasure: 1,
            extra_items: vec!["sword".to_string(), "shield".to_string()],
            ..GenConfig::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let err = place_puzzles(&config, &mut world, &mut rng).unwrap_err();
        assert_eq!(
            err,
            GenerateError::NoRoomAvailable {
                item: "shield".to_string(),
                attempts: ITEM_PLACEMENT_ATTEMPTS,
            }
        );
    }

    #[test]
    fn two_room_world_cannot_host_the_puzzle() {
        let mut world = World::with_start("start", "", Pos { y: 0, x: 0 });
        let other = world.add_room("other", "", Pos { y: 0, x: 1 });
        world.link(world.start, Direction::East, other);

        let config = GenConfig { min_path_to_treasure: 1, ..GenConfig::default() };
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let err = place_puzzles(&config, &mut world, &mut rng).unwrap_err();
        assert_eq!(err, GenerateError::PathTooShort { found: 2, required: 3 });
    }
}
