//! Escape-path optimizer.
//!
//! Input is an `n`×`n` transit-cost matrix over `n` nodes: node 0 is the
//! start, node `n - 1` the exit, and the nodes in between are pickups
//! (`n - 2` of them, identified 0-based). Edge costs may be negative; a
//! negative edge refunds budget. [`optimize`] returns the pickup IDs of the
//! best walk from start to exit whose accumulated cost stays within the
//! budget: most pickups first, lexicographically smallest ID set on ties.
//!
//! The computation runs in three stages. A Bellman-Ford pass screens for a
//! negative cycle reachable from the start; with one present the walker can
//! loop it for arbitrary slack, so every pickup is collectable and the
//! search is skipped. Otherwise Floyd-Warshall precomputes all-pairs
//! shortest walk costs, and a breadth-first search over partial walks,
//! pruned against those tables, finds the best pickup set.

mod cycle;
mod search;
mod shortest;

use puzzle_core::{PuzzleError, SquareMatrix};

/// Start plus exit; a matrix with no pickups at all is still valid.
pub const MIN_NODES: usize = 2;
/// Start plus five pickups plus exit.
pub const MAX_NODES: usize = 7;
pub const MAX_BUDGET: i64 = 999;

/// Returns the ascending 0-based pickup IDs collected by the best
/// budget-feasible walk from start to exit.
pub fn optimize(times: &SquareMatrix, budget: i64) -> Result<Vec<usize>, PuzzleError> {
    let n = times.n();
    if !(MIN_NODES..=MAX_NODES).contains(&n) {
        return Err(PuzzleError::DimensionOutOfRange {
            n,
            min: MIN_NODES,
            max: MAX_NODES,
        });
    }
    if !(0..=MAX_BUDGET).contains(&budget) {
        return Err(PuzzleError::BudgetOutOfRange(budget));
    }

    if cycle::has_negative_cycle(times) {
        // Loop the cycle for as much slack as needed, then collect everyone.
        return Ok((0..n - 2).collect());
    }

    let tables = shortest::AllPairs::compute(times);
    Ok(search::best_pickup_set(times, &tables, budget))
}
