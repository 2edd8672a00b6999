use serde::{Deserialize, Serialize};

use crate::PuzzleError;

/// Square matrix of signed integers, stored flattened for cache locality.
/// Construction goes through [`SquareMatrix::from_rows`], so a value of this
/// type is always square and non-empty.
///
/// Serialization uses the row-of-rows form, so JSON fixtures can be written
/// as plain nested arrays.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<i64>>", into = "Vec<Vec<i64>>")]
pub struct SquareMatrix {
    n: usize,
    data: Vec<i64>,
}

impl SquareMatrix {
    pub fn from_rows(rows: &[Vec<i64>]) -> Result<Self, PuzzleError> {
        let n = rows.len();
        if n == 0 {
            return Err(PuzzleError::EmptyMatrix);
        }
        let mut data = Vec::with_capacity(n * n);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(PuzzleError::NonSquareMatrix {
                    row: i,
                    len: row.len(),
                    expected: n,
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { n, data })
    }

    /// Number of rows (equivalently, columns).
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> i64 {
        self.data[i * self.n + j]
    }

    #[inline]
    pub fn row(&self, i: usize) -> &[i64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    pub fn to_rows(&self) -> Vec<Vec<i64>> {
        self.data.chunks(self.n).map(|c| c.to_vec()).collect()
    }
}

impl TryFrom<Vec<Vec<i64>>> for SquareMatrix {
    type Error = PuzzleError;

    fn try_from(rows: Vec<Vec<i64>>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}

impl From<SquareMatrix> for Vec<Vec<i64>> {
    fn from(m: SquareMatrix) -> Self {
        m.to_rows()
    }
}
