/*!
# Reductions to Maximum Flow

Two combinatorial problems solved by building a flow network and running [`MaxFlow`] on it:

- [`gold`]: pair up grid cells of different parity so that every cell is matched to one of its
  four orthogonal neighbors (a perfect domino tiling of the given cells).
- [`rounding`]: round every entry of an integer matrix to a multiple of 10 while keeping all
  row and column sums unchanged.

Both return [`NoSolution`] if the instance is infeasible. Infeasibility is an expected outcome
and never panics.
*/

use itertools::Itertools;
use log::debug;
use thiserror::Error;

use crate::{algo::*, prelude::*};

mod gold;
mod rounding;

pub use gold::*;
pub use rounding::*;

/// Reasons for a reduction to have no solution
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoSolution {
    #[error("{black} black cells cannot be matched to {white} white cells")]
    UnbalancedClasses { black: usize, white: usize },

    #[error("residual sum {residual} of row {row} is not a multiple of 10")]
    RowResidual { row: usize, residual: i64 },

    #[error("residual sum {residual} of column {column} is not a multiple of 10")]
    ColumnResidual { column: usize, residual: i64 },

    #[error("maximum flow {flow} does not saturate the source (requires {required})")]
    Unsaturated { flow: i64, required: i64 },

    #[error("row {row} has {found} entries, expected {expected}")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },
}
