use thiserror::Error;

/// Invalid-argument kinds shared by all puzzle crates. Inputs that satisfy
/// the documented constraints never produce an error; anything malformed
/// fails fast instead of producing a wrong answer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("matrix has no rows")]
    EmptyMatrix,

    #[error("matrix is not square: row {row} has {len} entries, expected {expected}")]
    NonSquareMatrix {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("matrix has {n} nodes, supported range is {min}..={max}")]
    DimensionOutOfRange { n: usize, min: usize, max: usize },

    #[error("budget {0} is outside the supported range 0..=999")]
    BudgetOutOfRange(i64),

    #[error("holder count {0} is outside the supported range 1..=9")]
    HolderCountOutOfRange(usize),

    #[error("required count {required} exceeds holder count {holders}")]
    RequiredExceedsHolders { required: usize, holders: usize },

    #[error("chain has no terminal state")]
    NoTerminalState,

    #[error("chain never reaches a terminal state from state 0")]
    NonAbsorbingChain,

    #[error("result does not fit in 64 bits")]
    ResultOverflow,
}
