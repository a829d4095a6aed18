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


//! Per-seat desirability.
//!
//! `WeightMatrix` scores every seat by its penalty-weighted Manhattan
//! distance to the ideal seat. Penalties are directional: rows in front of
//! the ideal row pay `up_penalty` per row, rows behind it pay `down_penalty`;
//! columns left of the ideal column pay `left_penalty` per column, the ideal
//! column and everything right of it pay `right_penalty`.
//!
//! Every weight is `base_weight - vertical_penalty - horizontal_penalty`
//! where
//!
//! ```text
//! base_weight = cols * max(left, right) + rows * max(up, down)
//! ```
//!
//! bounds any possible total penalty, so the subtraction never underflows
//! and the matrix stays non-negative by construction.

use crate::{
    index::{ColIndex, RowIndex},
    policy::{PolicyError, SeatingPolicy, VenueDimensions},
};
use marquee_core::num::SeatWeight;

#[inline]
fn to_weight<T>(value: usize) -> Result<T, PolicyError>
where
    T: SeatWeight,
{
    T::from_usize(value).ok_or_else(PolicyError::overflow::<T>)
}

#[inline]
fn scaled<T>(penalty: T, distance: usize) -> Result<T, PolicyError>
where
    T: SeatWeight,
{
    penalty
        .checked_mul(&to_weight(distance)?)
        .ok_or_else(PolicyError::overflow::<T>)
}

/// The largest total penalty any seat of the venue can accumulate.
fn base_weight<T>(dimensions: VenueDimensions, policy: &SeatingPolicy<T>) -> Result<T, PolicyError>
where
    T: SeatWeight,
{
    let horizontal = scaled(
        policy.left_penalty().max(policy.right_penalty()),
        dimensions.cols(),
    )?;
    let vertical = scaled(
        policy.up_penalty().max(policy.down_penalty()),
        dimensions.rows(),
    )?;
    horizontal
        .checked_add(&vertical)
        .ok_or_else(PolicyError::overflow::<T>)
}

/// The immutable desirability of every seat, stored row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct WeightMatrix<T> {
    dimensions: VenueDimensions,
    ideal_row: RowIndex,
    ideal_col: ColIndex,
    base_weight: T,
    weights: Vec<T>, // len = rows * cols
}

impl<T> WeightMatrix<T>
where
    T: SeatWeight,
{
    /// Derives the weight of every seat of the venue from the policy.
    ///
    /// # Errors
    ///
    /// Returns a `PolicyError` if the dimensions or the policy are invalid,
    /// or if the base weight does not fit into `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use marquee_model::{policy::{SeatingPolicy, VenueDimensions}, weights::WeightMatrix};
    /// # use marquee_model::index::{ColIndex, RowIndex};
    /// let weights =
    ///     WeightMatrix::<u32>::compute(VenueDimensions::new(10, 20), &SeatingPolicy::default())
    ///         .unwrap();
    /// assert_eq!(weights.base_weight(), 40);
    /// assert_eq!(weights.weight(RowIndex::new(8), ColIndex::new(9)), 40);
    /// assert_eq!(weights.weight(RowIndex::new(9), ColIndex::new(9)), 38);
    /// ```
    pub fn compute(
        dimensions: VenueDimensions,
        policy: &SeatingPolicy<T>,
    ) -> Result<Self, PolicyError> {
        dimensions.validate()?;
        policy.validate()?;

        let rows = dimensions.rows();
        let cols = dimensions.cols();
        let base_weight = base_weight(dimensions, policy)?;
        let (ideal_row, ideal_col) = policy.ideal_seat(dimensions);

        let mut weights = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            let vertical = if row < ideal_row.get() {
                scaled(policy.up_penalty(), ideal_row.get() - row)?
            } else {
                scaled(policy.down_penalty(), row - ideal_row.get())?
            };
            let row_base = base_weight
                .checked_sub(&vertical)
                .ok_or_else(PolicyError::overflow::<T>)?;

            for col in 0..cols {
                let horizontal = if col < ideal_col.get() {
                    scaled(policy.left_penalty(), ideal_col.get() - col)?
                } else {
                    scaled(policy.right_penalty(), col - ideal_col.get())?
                };
                let weight = row_base
                    .checked_sub(&horizontal)
                    .ok_or_else(PolicyError::overflow::<T>)?;
                weights.push(weight);
            }

            tracing::debug!(row, weights = ?&weights[row * cols..], "computed seat weights");
        }

        Ok(Self {
            dimensions,
            ideal_row,
            ideal_col,
            base_weight,
            weights,
        })
    }

    #[inline]
    pub fn dimensions(&self) -> VenueDimensions {
        self.dimensions
    }

    #[inline]
    pub fn num_rows(&self) -> usize {
        self.dimensions.rows()
    }

    #[inline]
    pub fn num_cols(&self) -> usize {
        self.dimensions.cols()
    }

    /// Returns the seat holding the maximum weight.
    #[inline]
    pub fn ideal_seat(&self) -> (RowIndex, ColIndex) {
        (self.ideal_row, self.ideal_col)
    }

    /// Returns the weight of the ideal seat; no subtraction is applied to it.
    #[inline]
    pub fn base_weight(&self) -> T {
        self.base_weight
    }

    /// Returns the weight of a single seat.
    ///
    /// # Panics
    ///
    /// Panics if the seat lies outside the venue.
    #[inline]
    pub fn weight(&self, row: RowIndex, col: ColIndex) -> T {
        debug_assert!(
            col.get() < self.num_cols(),
            "called `WeightMatrix::weight` with column out of bounds: the len is {} but the index is {}",
            self.num_cols(),
            col.get()
        );
        self.row(row)[col.get()]
    }

    /// Returns the weights of one row.
    ///
    /// # Panics
    ///
    /// Panics if `row` is not in `0..num_rows()`.
    #[inline]
    pub fn row(&self, row: RowIndex) -> &[T] {
        let cols = self.num_cols();
        let start = row.get() * cols;
        &self.weights[start..start + cols]
    }

    /// Iterates over the rows of the matrix.
    #[inline]
    pub fn rows(&self) -> std::slice::ChunksExact<'_, T> {
        self.weights.chunks_exact(self.num_cols())
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.weights
    }
}

impl<T> std::fmt::Debug for WeightMatrix<T>
where
    T: SeatWeight,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeightMatrix")
            .field("dimensions", &self.dimensions)
            .field("ideal_row", &self.ideal_row)
            .field("ideal_col", &self.ideal_col)
            .field("base_weight", &self.base_weight)
            .finish()
    }
}

impl<T> std::fmt::Display for WeightMatrix<T>
where
    T: SeatWeight,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self.base_weight.to_string().len();
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(|w| format!("{w:>width$}")).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
