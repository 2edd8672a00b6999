use puzzle_core::SquareMatrix;

/// All-pairs shortest walk costs, flattened like the source matrix, plus a
/// per-edge flag marking direct hops that no intermediate strictly improves.
/// A hop whose flag is false can always be replaced by an equal-or-cheaper
/// indirect route, so the walk search never extends through one.
pub(crate) struct AllPairs {
    n: usize,
    dist: Vec<i64>,
    direct_is_shortest: Vec<bool>,
}

impl AllPairs {
    /// Floyd-Warshall relaxation over every intermediate node. Only valid on
    /// matrices with no negative cycle; the caller screens for that first.
    pub(crate) fn compute(times: &SquareMatrix) -> Self {
        let n = times.n();
        let mut dist: Vec<i64> = (0..n * n).map(|idx| times.get(idx / n, idx % n)).collect();

        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    let via = dist[i * n + k].saturating_add(dist[k * n + j]);
                    if via < dist[i * n + j] {
                        dist[i * n + j] = via;
                    }
                }
            }
        }

        // Entries only ever decrease from the direct cost, so equality here
        // means the direct edge is itself a shortest path.
        let direct_is_shortest = (0..n * n)
            .map(|idx| dist[idx] == times.get(idx / n, idx % n))
            .collect();

        Self {
            n,
            dist,
            direct_is_shortest,
        }
    }

    #[inline]
    pub(crate) fn dist(&self, i: usize, j: usize) -> i64 {
        self.dist[i * self.n + j]
    }

    #[inline]
    pub(crate) fn direct_is_shortest(&self, i: usize, j: usize) -> bool {
        self.direct_is_shortest[i * self.n + j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literal() -> SquareMatrix {
        SquareMatrix::from_rows(&[
            vec![0, 2, 2, 2, -1],
            vec![9, 0, 2, 2, -1],
            vec![9, 3, 0, 2, -1],
            vec![9, 3, 2, 0, -1],
            vec![9, 3, 2, 2, 0],
        ])
        .unwrap()
    }

    #[test]
    fn known_distances() {
        let tables = AllPairs::compute(&literal());
        assert_eq!(tables.dist(0, 4), -1);
        // 1 -> 4 -> 0 beats the direct cost of 9.
        assert_eq!(tables.dist(1, 0), 8);
        assert_eq!(tables.dist(1, 4), -1);
    }

    #[test]
    fn triangle_inequality_and_diagonal() {
        let tables = AllPairs::compute(&literal());
        let n = 5;
        for i in 0..n {
            assert!(tables.dist(i, i) <= 0);
            for j in 0..n {
                for k in 0..n {
                    assert!(tables.dist(i, j) <= tables.dist(i, k) + tables.dist(k, j));
                }
            }
        }
    }

    #[test]
    fn dominated_edges_are_flagged() {
        let tables = AllPairs::compute(&literal());
        assert!(!tables.direct_is_shortest(1, 0));
        assert!(tables.direct_is_shortest(0, 4));
        assert!(tables.direct_is_shortest(0, 1));
    }
}
