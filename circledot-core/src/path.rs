//! Path engine: breadth-first search from the token to the nearest border
//!
//! The search reads a [`Board`] and never writes to it. Visited cells are
//! tracked in a scratch copy of the board's blocked flags, so one search can
//! never leave marks behind for the next.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use crate::board::{Board, TokenPosition};
use crate::grid::Coord;

/// The token's forced move for one turn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    /// Step to an on-board neighbour
    Step(Coord),
    /// Step off the board (only possible from a border cell)
    Exit,
    /// No route to the border exists
    Trapped,
}

/// Compute the token's next forced move
pub fn next_move(board: &Board) -> Advance {
    let start = match board.token() {
        TokenPosition::OnBoard(c) => c,
        TokenPosition::Exited => return Advance::Exit,
    };

    match search(board, start) {
        None => Advance::Trapped,
        Some(path) => {
            // A found path always has the start plus at least one step
            let step = path[1];
            if step.in_bounds(board.size()) {
                Advance::Step(step)
            } else {
                Advance::Exit
            }
        }
    }
}

/// Shortest path from the token to the border, start and end included.
///
/// Returns `None` if the token is trapped or has already exited.
pub fn shortest_path(board: &Board) -> Option<Vec<Coord>> {
    board.token().coord().and_then(|start| search(board, start))
}

/// Number of moves the token needs to reach the border, `None` if trapped
pub fn distance_to_border(board: &Board) -> Option<usize> {
    shortest_path(board).map(|path| path.len() - 1)
}

/// Check if the token can no longer reach the border
pub fn is_trapped(board: &Board) -> bool {
    next_move(board) == Advance::Trapped
}

/// BFS over the hex adjacency.
///
/// Neighbours are expanded in [`Coord::neighbors`] order and the first border
/// (or off-board) cell discovered ends the search, so ties between equally short
/// routes always resolve the same way.
fn search(board: &Board, start: Coord) -> Option<Vec<Coord>> {
    let size = board.size();
    let mut visited = board.blocked_mask();
    visited[start.index(size)] = true;

    let mut parents: FxHashMap<Coord, Coord> = FxHashMap::default();
    let mut frontier = VecDeque::from([start]);

    while let Some(current) = frontier.pop_front() {
        for next in current.neighbors() {
            if !next.in_bounds(size) {
                return Some(trace(&parents, start, current, next));
            }

            let idx = next.index(size);
            if visited[idx] {
                continue;
            }
            if next.is_border(size) {
                return Some(trace(&parents, start, current, next));
            }

            visited[idx] = true;
            parents.insert(next, current);
            frontier.push_back(next);
        }
    }

    None
}

/// Rebuild the path start -> .. -> last -> goal from predecessor links
fn trace(parents: &FxHashMap<Coord, Coord>, start: Coord, last: Coord, goal: Coord) -> Vec<Coord> {
    let mut path = vec![goal, last];
    let mut cursor = last;
    while cursor != start {
        cursor = parents[&cursor];
        path.push(cursor);
    }
    path.reverse();
    path
}
