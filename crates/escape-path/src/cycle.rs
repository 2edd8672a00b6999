use puzzle_core::SquareMatrix;

/// Bellman-Ford negative-cycle screen from the start node.
///
/// Distance estimates are seeded from row 0 (the start's direct costs) and
/// relaxed `n - 1` rounds over every ordered edge; a round with no update is
/// a fixpoint and ends early. One further probe pass follows: any edge that
/// still admits improvement sits on a negative cycle reachable from the
/// start.
pub(crate) fn has_negative_cycle(times: &SquareMatrix) -> bool {
    let n = times.n();
    let mut dist: Vec<i64> = times.row(0).to_vec();

    for _ in 0..n - 1 {
        let mut updated = false;
        for u in 0..n {
            for v in 0..n {
                let candidate = dist[u].saturating_add(times.get(u, v));
                if candidate < dist[v] {
                    dist[v] = candidate;
                    updated = true;
                }
            }
        }
        if !updated {
            break;
        }
    }

    for u in 0..n {
        for v in 0..n {
            if dist[u].saturating_add(times.get(u, v)) < dist[v] {
                return true;
            }
        }
    }
    false
}
