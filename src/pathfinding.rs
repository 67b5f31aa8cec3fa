use crate::constants::{ASTAR_MAX_ITERATIONS, LOS_STEP};
use crate::grid::Grid;
use glam::Vec2;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
struct Node {
    x: i32,
    y: i32,
}

#[derive(Clone, Copy, PartialEq, Eq)]
struct ScoredNode {
    node: Node,
    f_score: i32, // g_score + heuristic
    order: u32,   // push counter, breaks f_score ties in favour of the earlier push
}

// BinaryHeap is a max-heap, so we reverse the ordering for min-heap behavior
impl Ord for ScoredNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f_score
            .cmp(&self.f_score)
            .then_with(|| other.order.cmp(&self.order))
    }
}

impl PartialOrd for ScoredNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find a path from start to goal using A*.
///
/// Returns the waypoints in travel order, excluding the start cell and
/// including the goal. An empty path means either the goal is unreachable,
/// the iteration budget ran out, or start and goal are the same cell.
pub fn find_path(
    grid: &Grid,
    start: (i32, i32),
    goal: (i32, i32),
    exit_unlocked: bool,
) -> Vec<(i32, i32)> {
    puffin::profile_function!();

    if start == goal {
        return Vec::new();
    }

    let start_node = Node { x: start.0, y: start.1 };
    let goal_node = Node { x: goal.0, y: goal.1 };

    let mut open_set = BinaryHeap::new();
    let mut came_from: HashMap<Node, Node> = HashMap::new();
    let mut g_score: HashMap<Node, i32> = HashMap::new();
    let mut order = 0u32;

    g_score.insert(start_node, 0);
    open_set.push(ScoredNode {
        node: start_node,
        f_score: heuristic(start, goal),
        order,
    });

    let mut iterations = 0;
    while let Some(current) = open_set.pop() {
        if iterations >= ASTAR_MAX_ITERATIONS {
            break;
        }
        iterations += 1;

        if current.node == goal_node {
            return reconstruct_path(&came_from, current.node);
        }

        let current_g = *g_score.get(&current.node).unwrap_or(&0);

        // Check all 4 neighbors
        for (dx, dy) in [(0, -1), (0, 1), (-1, 0), (1, 0)] {
            let nx = current.node.x + dx;
            let ny = current.node.y + dy;

            if grid.is_blocking(nx, ny, exit_unlocked) {
                continue;
            }

            let neighbor = Node { x: nx, y: ny };
            let tentative_g = current_g + 1;
            let neighbor_g = *g_score.get(&neighbor).unwrap_or(&i32::MAX);

            if tentative_g < neighbor_g {
                came_from.insert(neighbor, current.node);
                g_score.insert(neighbor, tentative_g);
                order += 1;
                open_set.push(ScoredNode {
                    node: neighbor,
                    f_score: tentative_g + heuristic((nx, ny), goal),
                    order,
                });
            }
        }
    }

    Vec::new()
}

/// Manhattan distance heuristic
fn heuristic(from: (i32, i32), to: (i32, i32)) -> i32 {
    (from.0 - to.0).abs() + (from.1 - to.1).abs()
}

/// Walk predecessor links back from the goal, then reverse. The start cell
/// has no predecessor, so it never enters the path.
fn reconstruct_path(came_from: &HashMap<Node, Node>, mut current: Node) -> Vec<(i32, i32)> {
    let mut path = Vec::new();

    while let Some(&prev) = came_from.get(&current) {
        path.push((current.x, current.y));
        current = prev;
    }

    path.reverse();
    path
}

/// Coarse visibility test between two world positions.
///
/// Samples the segment every [`LOS_STEP`] cells; blocked when any sample
/// lands in a wall. A locked exit does not block sight.
pub fn has_line_of_sight(grid: &Grid, from: Vec2, to: Vec2) -> bool {
    let delta = to - from;
    let dist = delta.length();
    if dist < 0.01 {
        return true;
    }

    let steps = (dist / LOS_STEP).ceil() as i32;
    let step = delta / steps as f32;
    let mut point = from;
    for _ in 0..steps {
        point += step;
        if grid.blocks_vision(point.x.floor() as i32, point.y.floor() as i32) {
            return false;
        }
    }
    true
}
