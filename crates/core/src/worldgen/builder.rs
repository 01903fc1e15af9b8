//! Random-walk room placement on an integer grid.
//! This module exists to produce the raw connected graph; it knows nothing
//! about keys, locks, or treasure.

use std::collections::BTreeSet;

use rand_chacha::ChaCha8Rng;

use super::config::{GenConfig, START_ROOM_DESC, START_ROOM_NAME};
use super::error::GenerateError;
use super::seed::{pick_index, shuffle};
use crate::types::{Direction, Pos, RoomId};
use crate::world::World;

/// Grid-collision retries granted per room before the attempt is declared
/// stuck. The walk almost always places a room within a handful of draws;
/// the cap only exists so local grid saturation cannot stall forever.
const PLACEMENT_ATTEMPTS_PER_ROOM: u32 = 128;

/// Places `config.room_count` rooms one random-walk step at a time, linking
/// each new room to the existing room it branched off from. Every exit pair
/// starts unlocked, so the result is a connected, lock-free graph.
pub(super) fn build_world(
    config: &GenConfig,
    rng: &mut ChaCha8Rng,
) -> Result<World, GenerateError> {
    let needed = config.room_count.saturating_sub(1);
    if config.room_name_pool.len() < needed {
        return Err(GenerateError::InsufficientNamePool {
            needed,
            available: config.room_name_pool.len(),
        });
    }
    if config.room_desc_pool.is_empty() {
        return Err(GenerateError::EmptyDescriptionPool);
    }

    let mut world = World::with_start(START_ROOM_NAME, START_ROOM_DESC, Pos { y: 0, x: 0 });
    let mut occupied = BTreeSet::from([Pos { y: 0, x: 0 }]);
    let mut placed: Vec<RoomId> = vec![world.start];

    let mut names = config.room_name_pool.clone();
    shuffle(rng, &mut names);
    names.truncate(needed);

    for name in &names {
        let new_room = place_one_room(config, rng, &mut world, &mut occupied, &placed, name)?;
        placed.push(new_room);
    }

    Ok(world)
}

fn place_one_room(
    config: &GenConfig,
    rng: &mut ChaCha8Rng,
    world: &mut World,
    occupied: &mut BTreeSet<Pos>,
    placed: &[RoomId],
    name: &str,
) -> Result<RoomId, GenerateError> {
    for _ in 0..PLACEMENT_ATTEMPTS_PER_ROOM {
        let anchor = placed[pick_index(rng, placed.len())];
        let dir = Direction::ALL[pick_index(rng, Direction::ALL.len())];
        let pos = world.room(anchor).pos.step(dir);
        if occupied.contains(&pos) {
            continue;
        }

        let desc = &config.room_desc_pool[pick_index(rng, config.room_desc_pool.len())];
        let id = world.add_room(name, desc, pos);
        world.link(anchor, dir, id);
        occupied.insert(pos);
        return Ok(id);
    }

    Err(GenerateError::PlacementExhausted { attempts: PLACEMENT_ATTEMPTS_PER_ROOM })
}
