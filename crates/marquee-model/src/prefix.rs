// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.


//! Per-row cumulative weights.
//!
//! `PrefixSums` stores, for every row, `cols + 1` running totals of the
//! weight matrix so that the weight of any run of seats is a single
//! subtraction:
//!
//! ```text
//! prefix[r][0] = 0
//! prefix[r][c] = prefix[r][c - 1] + weight[r][c - 1]
//! sum(weight[r][a..b]) = prefix[r][b] - prefix[r][a]
//! ```

use crate::{
    index::RowIndex,
    policy::PolicyError,
    weights::WeightMatrix,
};
use marquee_core::{num::SeatWeight, span::ColumnSpan};

/// Cumulative row sums over a `WeightMatrix`, stored row-major with a stride of `cols + 1`.
#[derive(Clone, PartialEq, Eq)]
pub struct PrefixSums<T> {
    num_rows: usize,
    stride: usize,
    sums: Vec<T>, // len = rows * (cols + 1)
}

impl<T> PrefixSums<T>
where
    T: SeatWeight,
{
    /// Builds the prefix sums of every row.
    ///
    /// # Errors
    ///
    /// Returns `PolicyError::WeightOverflow` if a row total does not fit into `T`.
    pub fn build(weights: &WeightMatrix<T>) -> Result<Self, PolicyError> {
        let stride = weights.num_cols() + 1;
        let mut sums = Vec::with_capacity(weights.num_rows() * stride);

        for row in weights.rows() {
            let mut running = T::zero();
            sums.push(running);
            for &weight in row {
                running = running
                    .checked_add(&weight)
                    .ok_or_else(PolicyError::overflow::<T>)?;
                sums.push(running);
            }
        }

        Ok(Self {
            num_rows: weights.num_rows(),
            stride,
            sums,
        })
    }

    #[inline]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    #[inline]
    pub fn num_cols(&self) -> usize {
        self.stride - 1
    }

    /// Returns the cumulative sums of one row (`cols + 1` entries, starting with zero).
    #[inline]
    pub fn row(&self, row: RowIndex) -> &[T] {
        debug_assert!(
            row.get() < self.num_rows,
            "called `PrefixSums::row` with row out of bounds: the len is {} but the index is {}",
            self.num_rows,
            row.get()
        );
        let start = row.get() * self.stride;
        &self.sums[start..start + self.stride]
    }

    /// Returns the summed weight of the seats `[start, end)` of `row` in O(1).
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds or `end > cols`. In debug builds,
    /// also panics if `start > end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use marquee_model::{policy::{SeatingPolicy, VenueDimensions}, weights::WeightMatrix};
    /// # use marquee_model::{index::RowIndex, prefix::PrefixSums};
    /// let weights =
    ///     WeightMatrix::<u32>::compute(VenueDimensions::new(10, 20), &SeatingPolicy::default())
    ///         .unwrap();
    /// let prefix = PrefixSums::build(&weights).unwrap();
    /// // Seats 8, 9, 10 of the ideal row weigh 39 + 40 + 39.
    /// assert_eq!(prefix.range_sum(RowIndex::new(8), 8, 11), 118);
    /// assert_eq!(prefix.range_sum(RowIndex::new(8), 5, 5), 0);
    /// ```
    #[inline]
    pub fn range_sum(&self, row: RowIndex, start: usize, end: usize) -> T {
        debug_assert!(
            start <= end && end < self.stride,
            "called `PrefixSums::range_sum` with invalid bounds [{}, {}) for {} columns",
            start,
            end,
            self.num_cols()
        );
        let sums = self.row(row);
        sums[end] - sums[start]
    }

    /// Returns the summed weight of a column span of `row`.
    #[inline]
    pub fn span_sum(&self, row: RowIndex, span: ColumnSpan) -> T {
        self.range_sum(row, span.start(), span.end())
    }

    /// Returns the total weight of a row.
    #[inline]
    pub fn row_total(&self, row: RowIndex) -> T {
        self.range_sum(row, 0, self.num_cols())
    }
}

impl<T> std::fmt::Debug for PrefixSums<T>
where
    T: SeatWeight,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrefixSums")
            .field("num_rows", &self.num_rows)
            .field("num_cols", &self.num_cols())
            .finish()
    }
}
