//! Absorbing-chain puzzle.
//!
//! Input is a square matrix of per-state observation counts: row `i` holds
//! how often each destination was observed from state `i`, so transition
//! probabilities are the row entries over the row sum. A state whose row is
//! all zero is terminal (absorbing); state 0 is the initial state.
//!
//! [`absorption_odds`] returns, for each terminal state in index order, the
//! exact probability of ending there, as numerators over the least common
//! denominator, with that denominator appended as the final element.
//!
//! The probabilities come from the standard transient linear system: with
//! `Q` the transient-to-transient and `R` the transient-to-terminal
//! transition blocks, absorption probabilities satisfy `(I - Q) X = R`.
//! The system is solved exactly over [`Ratio`] by Gaussian elimination,
//! restricted to states reachable from state 0 so that unrelated closed
//! loops elsewhere in the matrix cannot make it singular.

mod elimination;

use std::collections::VecDeque;

use puzzle_core::ratio::lcm;
use puzzle_core::{PuzzleError, Ratio};

pub const MAX_STATES: usize = 10;

/// Returns one numerator per terminal state (index order), then the common
/// denominator.
pub fn absorption_odds(rows: &[Vec<u64>]) -> Result<Vec<u64>, PuzzleError> {
    let n = rows.len();
    if n == 0 {
        return Err(PuzzleError::EmptyMatrix);
    }
    if n > MAX_STATES {
        return Err(PuzzleError::DimensionOutOfRange {
            n,
            min: 1,
            max: MAX_STATES,
        });
    }
    for (i, row) in rows.iter().enumerate() {
        if row.len() != n {
            return Err(PuzzleError::NonSquareMatrix {
                row: i,
                len: row.len(),
                expected: n,
            });
        }
    }

    let is_terminal: Vec<bool> = rows.iter().map(|row| row.iter().all(|&c| c == 0)).collect();
    let terminals: Vec<usize> = (0..n).filter(|&s| is_terminal[s]).collect();
    if terminals.is_empty() {
        return Err(PuzzleError::NoTerminalState);
    }

    // The chain never moves.
    if is_terminal[0] {
        let mut out: Vec<u64> = terminals.iter().map(|&s| u64::from(s == 0)).collect();
        out.push(1);
        return Ok(out);
    }

    let transients = reachable_transients(rows, &is_terminal);
    let probs = solve_from_start(rows, &transients, &terminals)?;
    normalise(&probs)
}

/// Transient states reachable from state 0, in index order. State 0 itself
/// is always first.
fn reachable_transients(rows: &[Vec<u64>], is_terminal: &[bool]) -> Vec<usize> {
    let n = rows.len();
    let mut seen = vec![false; n];
    seen[0] = true;
    let mut queue = VecDeque::from([0usize]);
    while let Some(s) = queue.pop_front() {
        if is_terminal[s] {
            continue;
        }
        for t in 0..n {
            if rows[s][t] != 0 && !seen[t] {
                seen[t] = true;
                queue.push_back(t);
            }
        }
    }
    (0..n).filter(|&s| seen[s] && !is_terminal[s]).collect()
}

/// Builds the augmented system `(I - Q) X = R` over the reachable transient
/// states and returns the absorption probabilities out of state 0, one per
/// terminal state.
fn solve_from_start(
    rows: &[Vec<u64>],
    transients: &[usize],
    terminals: &[usize],
) -> Result<Vec<Ratio>, PuzzleError> {
    let m = transients.len();
    let k = terminals.len();

    let mut system = vec![vec![Ratio::ZERO; m + k]; m];
    for (ti, &s) in transients.iter().enumerate() {
        // Widen before summing: ten u64 counts can overflow a u64 total.
        let total: u128 = rows[s].iter().map(|&c| c as u128).sum();
        for (tj, &t) in transients.iter().enumerate() {
            let q = Ratio::new(rows[s][t] as i128, total as i128);
            system[ti][tj] = if ti == tj { Ratio::ONE - q } else { Ratio::ZERO - q };
        }
        for (aj, &a) in terminals.iter().enumerate() {
            system[ti][m + aj] = Ratio::new(rows[s][a] as i128, total as i128);
        }
    }

    let solution = elimination::solve(system, m, k).ok_or(PuzzleError::NonAbsorbingChain)?;
    // Transients are in index order and state 0 is transient here, so it is
    // row 0 of the solution.
    Ok(solution[0].clone())
}

/// Scales the probabilities onto their least common denominator and appends
/// that denominator.
fn normalise(probs: &[Ratio]) -> Result<Vec<u64>, PuzzleError> {
    let mut denom: u128 = 1;
    for p in probs {
        denom = lcm(denom, p.denom() as u128);
    }
    let mut out = Vec::with_capacity(probs.len() + 1);
    for p in probs {
        let scaled = p.numer() as u128 * (denom / p.denom() as u128);
        out.push(u64::try_from(scaled).map_err(|_| PuzzleError::ResultOverflow)?);
    }
    out.push(u64::try_from(denom).map_err(|_| PuzzleError::ResultOverflow)?);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_state_chain() {
        assert_eq!(absorption_odds(&[vec![0]]).unwrap(), vec![1, 1]);
    }

    #[test]
    fn initial_state_already_terminal() {
        // Both states terminal: all the mass stays on state 0.
        let rows = vec![vec![0, 0], vec![0, 0]];
        assert_eq!(absorption_odds(&rows).unwrap(), vec![1, 0, 1]);

        // State 1 is transient here, so state 0 is the only terminal slot.
        let rows = vec![vec![0, 0], vec![1, 0]];
        assert_eq!(absorption_odds(&rows).unwrap(), vec![1, 1]);
    }

    #[test]
    fn coin_flip_between_two_terminals() {
        let rows = vec![vec![0, 1, 1], vec![0, 0, 0], vec![0, 0, 0]];
        assert_eq!(absorption_odds(&rows).unwrap(), vec![1, 1, 2]);
    }

    #[test]
    fn transient_cycle_is_handled_exactly() {
        // States 0 and 1 bounce back and forth before absorbing; simple-path
        // enumeration undercounts here, the linear system does not.
        let rows = vec![
            vec![0, 2, 1, 0],
            vec![1, 0, 0, 1],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
        ];
        assert_eq!(absorption_odds(&rows).unwrap(), vec![1, 1, 2]);
    }

    #[test]
    fn unreachable_loop_does_not_poison_the_system() {
        // States 3 and 4 cycle forever but cannot be reached from state 0.
        let rows = vec![
            vec![0, 1, 1, 0, 0],
            vec![0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 1],
            vec![0, 0, 0, 1, 0],
        ];
        assert_eq!(absorption_odds(&rows).unwrap(), vec![1, 1, 2]);
    }

    #[test]
    fn maximal_observation_counts_do_not_overflow() {
        // Two u64::MAX counts would overflow a u64 row total; the widened
        // sum reduces them to clean halves.
        let rows = vec![
            vec![0, u64::MAX, u64::MAX],
            vec![0, 0, 0],
            vec![0, 0, 0],
        ];
        assert_eq!(absorption_odds(&rows).unwrap(), vec![1, 1, 2]);
    }

    #[test]
    fn rejects_chain_without_terminals() {
        let rows = vec![vec![0, 1], vec![1, 0]];
        assert_eq!(
            absorption_odds(&rows).unwrap_err(),
            PuzzleError::NoTerminalState
        );
    }

    #[test]
    fn rejects_reachable_inescapable_loop() {
        // State 0 can fall into the 1 <-> 2 loop, which never absorbs.
        let rows = vec![
            vec![0, 1, 0, 1],
            vec![0, 0, 1, 0],
            vec![0, 1, 0, 0],
            vec![0, 0, 0, 0],
        ];
        assert_eq!(
            absorption_odds(&rows).unwrap_err(),
            PuzzleError::NonAbsorbingChain
        );
    }

    #[test]
    fn rejects_malformed_shapes() {
        assert_eq!(
            absorption_odds(&[]).unwrap_err(),
            PuzzleError::EmptyMatrix
        );
        assert_eq!(
            absorption_odds(&[vec![0, 1], vec![0]]).unwrap_err(),
            PuzzleError::NonSquareMatrix {
                row: 1,
                len: 1,
                expected: 2
            }
        );
    }
}
