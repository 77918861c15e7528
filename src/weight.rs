/*!
# Edge Weights

Every edge carries exactly one weight. Shortest path algorithms read it as a cost, flow
algorithms as a capacity. The [`Weight`] trait collects the arithmetic both need and is
implemented for all primitive integer and floating point types.
*/

use std::{
    fmt::Debug,
    ops::{Add, Sub},
};

use num::{One, Zero};

/// Numeric weight attached to an edge.
///
/// Only a partial order is required so that `f64` qualifies. Algorithms never produce `NaN`
/// themselves; feeding `NaN` weights is a precondition violation.
pub trait Weight:
    Copy + PartialOrd + Debug + Zero + One + Add<Output = Self> + Sub<Output = Self>
{
    /// Returns the smaller of both values
    #[inline]
    fn min_weight(self, other: Self) -> Self {
        if other < self { other } else { self }
    }

    /// Returns `self` if it is positive and zero otherwise
    #[inline]
    fn positive_part(self) -> Self {
        if self > Self::zero() {
            self
        } else {
            Self::zero()
        }
    }

    /// Returns *true* if `self > 0`
    #[inline]
    fn is_positive(&self) -> bool {
        *self > Self::zero()
    }
}

impl<W> Weight for W where
    W: Copy + PartialOrd + Debug + Zero + One + Add<Output = Self> + Sub<Output = Self>
{
}
