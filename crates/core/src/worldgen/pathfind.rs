//! Shortest-path search over the room graph, optionally lock-aware.
//! This module exists so puzzle placement and validation share one notion of
//! reachability. It does not own any mutation of the graph.

use std::collections::{BTreeMap, VecDeque};

use crate::types::RoomId;
use crate::world::World;

/// Unweighted BFS from `start` to `goal`. The returned path includes both
/// endpoints; `start == goal` yields the single-element path. Exits with
/// `locked = true` are not traversable unless `ignore_locks` is set.
pub fn shortest_path(
    world: &World,
    start: RoomId,
    goal: RoomId,
    ignore_locks: bool,
) -> Option<Vec<RoomId>> {
    if start == goal {
        return Some(vec![start]);
    }

    let mut came_from: BTreeMap<RoomId, RoomId> = BTreeMap::new();
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        for exit in world.room(current).exits.values() {
            if exit.locked && !ignore_locks {
                continue;
            }
            if exit.to == start || came_from.contains_key(&exit.to) {
                continue;
            }
            came_from.insert(exit.to, current);
            if exit.to == goal {
                return Some(reconstruct_path(&came_from, start, goal));
            }
            queue.push_back(exit.to);
        }
    }

    None
}

/// Among all other rooms, the longest of their BFS-shortest paths from
/// `start`, ignoring locks. Rooms are scanned in arena insertion order so
/// ties always resolve the same way for a given seed. `None` when no other
/// room is reachable.
pub fn longest_shortest_path(world: &World, start: RoomId) -> Option<Vec<RoomId>> {
    let mut longest: Option<Vec<RoomId>> = None;

    for goal in world.room_ids() {
        if goal == start {
            continue;
        }
        let Some(path) = shortest_path(world, start, goal, true) else {
            continue;
        };
        if longest.as_ref().is_none_or(|best| path.len() > best.len()) {
            longest = Some(path);
        }
    }

    longest
}

fn reconstruct_path(came_from: &BTreeMap<RoomId, RoomId>, start: RoomId, goal: RoomId) -> Vec<RoomId> {
    let mut current = goal;
    let mut path = vec![current];
    while current != start {
        current = *came_from.get(&current).expect("every visited room must have a predecessor");
        path.push(current);
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Direction, Pos};
    use crate::world::World;

    fn chain_of_three() -> (World, RoomId, RoomId, RoomId) {
        let mut world = World::with_start("start", "", Pos { y: 0, x: 0 });
        let middle = world.add_room("middle", "", Pos { y: 0, x: 1 });
        let far = world.add_room("far", "", Pos { y: 0, x: 2 });
        world.link(world.start, Direction::East, middle);
        world.link(middle, Direction::East, far);
        let start = world.start;
        (world, start, middle, far)
    }

    #[test]
    fn path_to_self_is_the_single_element_path() {
        let (world, start, _, _) = chain_of_three();
        assert_eq!(shortest_path(&world, start, start, false), Some(vec![start]));
    }

    #[test]
    fn path_between_disconnected_rooms_is_none() {
        let (mut world, start, _, _) = chain_of_three();
        let island = world.add_room("island", "", Pos { y: 5, x: 5 });
        assert_eq!(shortest_path(&world, start, island, true), None);
    }

    #[test]
    fn locked_exit_blocks_unless_locks_are_ignored() {
        let (mut world, start, middle, far) = chain_of_three();
        world.room_mut(middle).exits.get_mut(&Direction::East).unwrap().locked = true;

        assert_eq!(shortest_path(&world, start, far, false), None);
        assert_eq!(shortest_path(&world, start, far, true), Some(vec![start, middle, far]));
        // The reverse direction stays unlocked; lock state is per edge.
        assert_eq!(shortest_path(&world, far, start, false), Some(vec![far, middle, start]));
    }

    #[test]
    fn bfs_prefers_the_shorter_of_two_routes() {
        // start -> far directly and via middle; BFS must take the direct hop.
        let (mut world, start, _, far) = chain_of_three();
        world.link(start, Direction::South, far);
        assert_eq!(shortest_path(&world, start, far, false), Some(vec![start, far]));
    }

    #[test]
    fn longest_shortest_path_reaches_the_chain_end() {
        let (world, start, middle, far) = chain_of_three();
        assert_eq!(longest_shortest_path(&world, start), Some(vec![start, middle, far]));
    }

    #[test]
    fn longest_shortest_path_is_none_for_a_singleton_graph() {
        let world = World::with_start("alone", "", Pos { y: 0, x: 0 });
        assert_eq!(longest_shortest_path(&world, world.start), None);
    }
}
