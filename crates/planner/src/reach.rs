//! Budgeted flood-fill reachability.
//!
//! Answers "which tiles can the active entity occupy this turn, and at
//! what action-point cost". The cost of a tile is its raw Manhattan
//! distance from the origin, recomputed from coordinates when the tile
//! is first reached; detours forced by blockers are deliberately not
//! reflected in the cost. The point-to-point check lives in
//! [`crate::path`].

use skirmish_core::{Board, Direction, Vertex};

/// A tile attainable from the fill origin, tagged with its cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReachableTile {
    pub vertex: Vertex,
    pub ap_cost: u32,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum FillState {
    Unvisited,
    Blocked,
    Reached,
}

/// Collects every tile reachable from `origin` within `budget` action
/// points.
///
/// Iterative 4-way flood fill with an explicit stack; each tile is
/// visited once. Tiles occupied by other entities are blocked, and a
/// neighbor is only pushed when its own Manhattan cost still fits the
/// budget, so no emitted tile ever exceeds it. The origin itself is
/// always reached at cost 0. Output order is fill order, which is
/// deterministic for a given board.
pub fn reachable_tiles(board: &Board, origin: Vertex, budget: u32) -> Vec<ReachableTile> {
    let dims = board.dims();
    if !dims.contains(origin) {
        return Vec::new();
    }

    let index = |v: Vertex| (v.y as u32 * dims.width + v.x as u32) as usize;
    let mut states = vec![FillState::Unvisited; (dims.width * dims.height) as usize];
    for y in 0..dims.height as i32 {
        for x in 0..dims.width as i32 {
            let v = Vertex::new(x, y);
            if v != origin && board.is_occupied(v) {
                states[index(v)] = FillState::Blocked;
            }
        }
    }

    let mut reached = Vec::new();
    let mut stack = vec![origin];

    while let Some(vertex) = stack.pop() {
        let slot = index(vertex);
        if states[slot] != FillState::Unvisited {
            continue;
        }
        states[slot] = FillState::Reached;
        reached.push(ReachableTile {
            vertex,
            ap_cost: origin.manhattan(vertex),
        });

        for dir in Direction::ALL {
            let (dx, dy) = dir.delta();
            let neighbor = Vertex::new(vertex.x + dx, vertex.y + dy);
            if !dims.contains(neighbor) {
                continue;
            }
            if states[index(neighbor)] != FillState::Unvisited {
                continue;
            }
            if origin.manhattan(neighbor) > budget {
                continue;
            }
            stack.push(neighbor);
        }
    }

    tracing::trace!(
        %origin,
        budget,
        tiles = reached.len(),
        "flood fill finished"
    );

    reached
}
