use std::cmp::Ordering;
use std::collections::VecDeque;

use puzzle_core::SquareMatrix;

use crate::shortest::AllPairs;

/// One frontier entry: the node sequence walked so far and its accumulated
/// cost. Extending copies the sequence, so sibling branches never alias.
#[derive(Clone, Debug)]
struct Walk {
    nodes: Vec<usize>,
    cost: i64,
}

impl Walk {
    fn start() -> Self {
        Walk {
            nodes: vec![0],
            cost: 0,
        }
    }

    #[inline]
    fn last(&self) -> usize {
        self.nodes[self.nodes.len() - 1]
    }

    fn extend(&self, next: usize, times: &SquareMatrix) -> Walk {
        let mut nodes = Vec::with_capacity(self.nodes.len() + 1);
        nodes.extend_from_slice(&self.nodes);
        nodes.push(next);
        Walk {
            nodes,
            cost: self.cost.saturating_add(times.get(self.last(), next)),
        }
    }

    /// Ascending pickup IDs visited so far (node `i` is pickup `i - 1`).
    fn pickups(&self, n: usize) -> Vec<usize> {
        let mut seen = vec![false; n];
        for &node in &self.nodes {
            seen[node] = true;
        }
        (1..n - 1).filter(|&node| seen[node]).map(|node| node - 1).collect()
    }

    /// True when the final node closes a cycle whose interior revisits only
    /// nodes that buy nothing new: the exit, or nodes already seen before
    /// the cycle began. With no negative cycle available such an excursion
    /// can only add cost.
    fn closes_wasted_cycle(&self, n: usize) -> bool {
        let last = self.last();
        let len = self.nodes.len();
        let Some(cycle_start) = self.nodes[..len - 1].iter().rposition(|&node| node == last)
        else {
            return false;
        };
        let before = &self.nodes[..=cycle_start];
        self.nodes[cycle_start + 1..]
            .iter()
            .all(|&node| node == n - 1 || before.contains(&node))
    }
}

/// Breadth-first search over walks from the start node, pruned against the
/// precomputed tables. Returns the pickup set of the best budget-feasible
/// walk ending at the exit: most pickups, then lexicographically smallest
/// ascending ID list. Discovery order alone does not guarantee the
/// tie-break, so every terminal walk is compared against the incumbent
/// explicitly.
pub(crate) fn best_pickup_set(times: &SquareMatrix, tables: &AllPairs, budget: i64) -> Vec<usize> {
    let n = times.n();
    let exit = n - 1;
    let pickup_count = n - 2;

    let mut best: Vec<usize> = Vec::new();
    let mut frontier = VecDeque::new();
    frontier.push_back(Walk::start());

    while let Some(walk) = frontier.pop_front() {
        let here = walk.last();
        for next in 0..n {
            if next == here {
                continue;
            }
            let extended = walk.extend(next, times);

            // Even an optimistic finish over shortest paths blows the budget.
            if extended.cost > budget.saturating_sub(tables.dist(next, exit)) {
                continue;
            }
            // The direct hop is beaten by an indirect route, so some other
            // walk covers everything this one could reach.
            if !tables.direct_is_shortest(here, next) {
                continue;
            }
            if extended.closes_wasted_cycle(n) {
                continue;
            }

            if next == exit && extended.cost <= budget {
                let candidate = extended.pickups(n);
                if beats(&candidate, &best) {
                    best = candidate;
                    if best.len() == pickup_count {
                        // Nothing can beat full collection.
                        return best;
                    }
                }
            }

            // Walks may pass through the exit and keep collecting.
            frontier.push_back(extended);
        }
    }
    best
}

/// Strictly more pickups wins; on equal counts the lexicographically
/// smaller ascending ID list wins.
fn beats(candidate: &[usize], incumbent: &[usize]) -> bool {
    match candidate.len().cmp(&incumbent.len()) {
        Ordering::Greater => true,
        Ordering::Less => false,
        Ordering::Equal => candidate < incumbent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: &[Vec<i64>]) -> SquareMatrix {
        SquareMatrix::from_rows(rows).unwrap()
    }

    fn run(rows: &[Vec<i64>], budget: i64) -> Vec<usize> {
        let times = matrix(rows);
        let tables = AllPairs::compute(&times);
        best_pickup_set(&times, &tables, budget)
    }

    #[test]
    fn beats_prefers_count_then_lexicographic() {
        assert!(beats(&[0, 2], &[1]));
        assert!(!beats(&[2], &[0, 1]));
        assert!(beats(&[0, 2], &[1, 2]));
        assert!(!beats(&[1, 2], &[0, 2]));
        assert!(!beats(&[0, 2], &[0, 2]));
    }

    #[test]
    fn wasted_cycle_detection() {
        let n = 4;
        let noop = Walk {
            nodes: vec![0, 1, 2, 1],
            cost: 0,
        };
        // The 1 -> 2 -> 1 loop revisits pickup 1 only: pickup 2 was new, so
        // the cycle is not wasted.
        assert!(!noop.closes_wasted_cycle(n));

        let wasted = Walk {
            nodes: vec![0, 1, 2, 3, 2],
            cost: 0,
        };
        // 2 -> 3 -> 2 touches only the exit and an old pickup.
        assert!(wasted.closes_wasted_cycle(n));

        let fresh = Walk {
            nodes: vec![0, 1, 3, 2],
            cost: 0,
        };
        assert!(!fresh.closes_wasted_cycle(n));
    }

    #[test]
    fn no_pickups_means_empty_result() {
        assert_eq!(run(&[vec![0, 1], vec![1, 0]], 1), Vec::<usize>::new());
    }

    #[test]
    fn infeasible_exit_means_empty_result() {
        assert_eq!(run(&[vec![0, 5], vec![5, 0]], 1), Vec::<usize>::new());
    }

    #[test]
    fn collects_what_fits() {
        // Budget 2 fits exactly one pickup round trip.
        let rows = vec![
            vec![0, 1, 1, 2],
            vec![1, 0, 9, 1],
            vec![1, 9, 0, 1],
            vec![2, 1, 1, 0],
        ];
        assert_eq!(run(&rows, 2), vec![0]);
        assert_eq!(run(&rows, 0), Vec::<usize>::new());
    }

    #[test]
    fn tie_broken_lexicographically_not_by_discovery_order() {
        // The direct 0 -> 1 edge is dominated (0 -> 3 -> 1 is cheaper), so
        // pickup 1 is discovered first via the two-edge walk 0 -> 2 -> 3.
        // Pickup 0 only terminates later, via 0 -> 3 -> 1 -> 3, yet must win
        // the tie because {0} < {1}.
        let rows = vec![
            vec![0, 5, 1, 1],
            vec![9, 0, 9, 1],
            vec![9, 9, 0, 1],
            vec![9, 1, 9, 0],
        ];
        assert_eq!(run(&rows, 3), vec![0]);
    }
}
