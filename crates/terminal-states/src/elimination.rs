use puzzle_core::Ratio;

/// Gauss-Jordan elimination over exact rationals on an `m` x `(m + k)`
/// augmented system `[A | B]`. Returns the `m` x `k` solution of `A X = B`,
/// or `None` when `A` is singular.
pub(crate) fn solve(
    mut system: Vec<Vec<Ratio>>,
    m: usize,
    k: usize,
) -> Option<Vec<Vec<Ratio>>> {
    for col in 0..m {
        let pivot_row = (col..m).find(|&r| !system[r][col].is_zero())?;
        system.swap(col, pivot_row);

        let pivot = system[col][col];
        for entry in system[col].iter_mut() {
            *entry = *entry / pivot;
        }

        for row in 0..m {
            if row == col || system[row][col].is_zero() {
                continue;
            }
            let factor = system[row][col];
            for j in col..m + k {
                let delta = factor * system[col][j];
                system[row][j] = system[row][j] - delta;
            }
        }
    }

    Some(
        system
            .into_iter()
            .map(|row| row[m..].to_vec())
            .collect(),
    )
}
