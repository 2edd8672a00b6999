//! Shared primitives for the puzzle crates.
//!
//! Every puzzle in this workspace consumes a small dense matrix and returns
//! a plain value, so the shared surface is deliberately thin: a validated
//! square integer matrix, an exact rational type, and the error enum that
//! covers every invalid input the workspace rejects.

pub mod error;
pub mod matrix;
pub mod ratio;

pub use error::PuzzleError;
pub use matrix::SquareMatrix;
pub use ratio::Ratio;
