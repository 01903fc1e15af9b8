//! Solvability checks over a fully placed world.
//! Validation runs its own reachability queries rather than trusting the
//! placer's bookkeeping, so a placement bug cannot ship an unsolvable map.

use super::error::ValidateError;
use super::pathfind::shortest_path;
use crate::world::World;

/// Confirms the three properties that together prove the world is solvable
/// and non-trivial: the key is obtainable with locks respected, the treasure
/// room is physically connected, and the lock actually gates the treasure.
pub fn validate_world(world: &World) -> Result<(), ValidateError> {
    // First match wins; duplicate key or treasure items are not detected.
    let key_room = world.room_holding("key").ok_or(ValidateError::MissingKey)?;
    let treasure_room = world.room_holding("treasure").ok_or(ValidateError::MissingTreasure)?;

    if shortest_path(world, world.start, key_room, false).is_none() {
        return Err(ValidateError::KeyUnreachable);
    }

    if shortest_path(world, world.start, treasure_room, true).is_none() {
        return Err(ValidateError::GraphDisconnected);
    }

    if shortest_path(world, world.start, treasure_room, false).is_some() {
        return Err(ValidateError::TreasureReachableWithoutKey);
    }

    Ok(())
}
