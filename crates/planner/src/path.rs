//! Best-first point-to-point pathfinding over the board grid.
//!
//! This is a standalone movement primitive, independent of the play
//! enumeration pipeline: it answers "can the active entity walk from
//! `start` to `goal` within its action-point budget, and along which
//! tiles". Search nodes live in a flat arena and link to their parents
//! by index, so path reconstruction is a read-only walk back to the
//! root.

use skirmish_core::{Board, Direction, GridDims, Vertex};

/// One search node in the arena.
///
/// `heuristic` stays unset until the node is discovered; the total
/// ordering key `f = g + h` is only defined once both halves are known.
#[derive(Clone, Debug)]
struct PathNode {
    vertex: Vertex,
    parent: Option<usize>,
    /// Accumulated movement cost from the start (`g`).
    cost: u32,
    /// Manhattan estimate to the goal (`h`).
    heuristic: Option<u32>,
    walkable: bool,
    /// Per-tile traversal weight.
    weight: u32,
}

impl PathNode {
    fn f(&self) -> Option<u32> {
        self.heuristic.map(|h| h + self.cost)
    }
}

/// Search grid built from one board snapshot.
///
/// Occupied tiles are unwalkable. The mover's own tile needs no
/// exception: the search only ever leaves the start, and walkability
/// is checked when stepping into a neighbor, never out of one. That
/// keeps walkability a pure function of the board, so one grid can
/// serve repeated queries.
pub struct PathGrid {
    dims: GridDims,
    nodes: Vec<PathNode>,
}

impl PathGrid {
    pub fn from_board(board: &Board) -> Self {
        let dims = board.dims();
        let mut nodes = Vec::with_capacity((dims.width * dims.height) as usize);
        for y in 0..dims.height as i32 {
            for x in 0..dims.width as i32 {
                let vertex = Vertex::new(x, y);
                nodes.push(PathNode {
                    vertex,
                    parent: None,
                    cost: 0,
                    heuristic: None,
                    walkable: !board.is_occupied(vertex),
                    weight: 1,
                });
            }
        }
        Self { dims, nodes }
    }

    fn index(&self, v: Vertex) -> Option<usize> {
        self.dims
            .contains(v)
            .then(|| (v.y as u32 * self.dims.width + v.x as u32) as usize)
    }

    /// Finds a path from `start` to `goal` affordable within `budget`
    /// action points.
    ///
    /// Returns the tile sequence ordered from the goal back to (but
    /// excluding) the start, or `None` when the goal is unreachable or
    /// only reachable beyond the budget. Never returns a partial route.
    pub fn find_path(&mut self, start: Vertex, goal: Vertex, budget: u32) -> Option<Vec<Vertex>> {
        let start_idx = self.index(start)?;
        let goal_idx = self.index(goal)?;

        // Reset per-query state left over from a previous search;
        // walkability stays as the board dictates.
        for node in &mut self.nodes {
            node.parent = None;
            node.cost = 0;
            node.heuristic = None;
        }

        self.nodes[start_idx].cost = 1;
        self.nodes[start_idx].heuristic = Some(start.manhattan(goal));

        let mut open: Vec<usize> = vec![start_idx];
        let mut closed = vec![false; self.nodes.len()];
        let mut in_open = vec![false; self.nodes.len()];
        in_open[start_idx] = true;

        while !open.is_empty() && !closed[goal_idx] {
            let current = open.remove(0);
            in_open[current] = false;
            closed[current] = true;

            let current_vertex = self.nodes[current].vertex;
            let current_cost = self.nodes[current].cost;

            for dir in Direction::ALL {
                let (dx, dy) = dir.delta();
                let neighbor_vertex =
                    Vertex::new(current_vertex.x + dx, current_vertex.y + dy);
                let Some(neighbor) = self.index(neighbor_vertex) else {
                    continue;
                };
                if closed[neighbor] || in_open[neighbor] || !self.nodes[neighbor].walkable {
                    continue;
                }

                let node = &mut self.nodes[neighbor];
                node.parent = Some(current);
                node.heuristic = Some(neighbor_vertex.manhattan(goal));
                node.cost = node.weight + current_cost;
                open.push(neighbor);
                in_open[neighbor] = true;

                // Stable sort keeps insertion order as the tie-break
                // between equal f values.
                open.sort_by_key(|&i| self.nodes[i].f());
            }
        }

        if !closed[goal_idx] {
            tracing::debug!(%start, %goal, "no path: open list exhausted");
            return None;
        }

        let mut path = Vec::new();
        let mut cursor = goal_idx;
        while cursor != start_idx {
            let node = &self.nodes[cursor];
            if node.cost > budget + 1 {
                tracing::debug!(%start, %goal, budget, "no path: budget exceeded");
                return None;
            }
            path.push(node.vertex);
            cursor = node.parent?;
        }

        Some(path)
    }
}
