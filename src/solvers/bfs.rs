use std::collections::VecDeque;

use crate::{
    error::{MazeError, Result},
    maze::{Grid, PathCoord},
};

/// Breadth-first search over open walls from `start` to [`Grid::goal`].
///
/// Any earlier highlight is cleared first, so solving twice from the same
/// start leaves the same highlight set.
pub fn solve_bfs(grid: &mut Grid, start: PathCoord) -> Result<Vec<PathCoord>> {
    if !grid.is_generated() {
        return Err(MazeError::MazeNotGenerated);
    }
    grid.check_path_coord(start)?;

    grid.clear_highlights();
    grid.clear_search_state();

    let goal = grid.goal();
    let mut queue = VecDeque::from([start]);
    grid.set_visited(start);
    let mut reached = false;

    while let Some(current) = queue.pop_front() {
        if current == goal {
            reached = true;
            break;
        }

        // Visited here means already enqueued
        let candidates = grid.neighbors(current, false).collect::<Vec<_>>();
        for next in candidates {
            if grid.is_wall_open(current, next)? {
                grid.set_visited(next);
                grid.set_parent(next, current);
                queue.push_back(next);
            }
        }
    }

    // A perfect maze connects every pair of path cells
    assert!(reached, "goal {goal:?} unreachable from {start:?}");

    // Backtrack from the goal to mark the route
    let mut path = vec![goal];
    grid.highlight(Grid::to_lattice(goal));
    let mut child = goal;
    while child != start {
        let parent = grid.parent(child)?;
        let wall = grid.wall_between(child, parent)?;
        grid.highlight(wall);
        grid.highlight(Grid::to_lattice(parent));
        path.push(parent);
        child = parent;
    }
    path.reverse();

    tracing::debug!("[bfs] backtraced {} cells", path.len());
    Ok(path)
}
