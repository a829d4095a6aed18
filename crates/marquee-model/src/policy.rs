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


//! Allocation policy and venue dimensions.
//!
//! A `SeatingPolicy` bundles every constant the allocation engine consults:
//! where the ideal seat sits, how steeply desirability falls off in each
//! direction, how wide the horizontal social-distancing margin is, and the
//! largest party accepted. Policies are immutable once built. They can be
//! created from `Default`, through `SeatingPolicyBuilder`, or deserialized
//! with `serde` (missing fields fall back to the defaults); deserialized
//! policies must be checked with `SeatingPolicy::validate`.

use crate::index::{ColIndex, RowIndex};
use marquee_core::num::SeatWeight;
use serde::{Deserialize, Serialize};

/// Seat codes use one uppercase letter per row.
pub const MAX_ROWS: usize = 26;

/// Errors raised while validating a policy or deriving the weight model from it.
///
/// All of these are construction-time failures: an engine is never created
/// from a configuration that produces one.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PolicyError {
    /// The venue has no rows or no columns.
    #[error("venue dimensions must be positive, got {rows} rows x {cols} columns")]
    ZeroDimensions { rows: usize, cols: usize },
    /// The venue has more rows than seat codes can label.
    #[error("venue has {rows} rows but seat codes support at most {max}")]
    TooManyRows { rows: usize, max: usize },
    /// An ideal-seat fraction lies outside `(0, 1]`.
    #[error("{name} must lie in (0, 1], got {value}")]
    FractionOutOfRange { name: &'static str, value: f64 },
    /// The base weight or a row total does not fit the chosen weight type.
    #[error("seat weights overflow the weight type {type_name}")]
    WeightOverflow { type_name: &'static str },
}

impl PolicyError {
    #[inline]
    pub(crate) fn overflow<T>() -> Self {
        Self::WeightOverflow {
            type_name: std::any::type_name::<T>(),
        }
    }
}

/// The size of a rectangular venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VenueDimensions {
    rows: usize,
    cols: usize,
}

impl VenueDimensions {
    #[inline]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    #[inline]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub const fn num_seats(&self) -> usize {
        self.rows * self.cols
    }

    /// Checks that the venue is non-empty and its rows can be labelled.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(PolicyError::ZeroDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.rows > MAX_ROWS {
            return Err(PolicyError::TooManyRows {
                rows: self.rows,
                max: MAX_ROWS,
            });
        }
        Ok(())
    }
}

impl Default for VenueDimensions {
    /// A 10 x 20 auditorium.
    fn default() -> Self {
        Self::new(10, 20)
    }
}

impl std::fmt::Display for VenueDimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// The allocation policy consulted by the weight model and the engine.
///
/// # Defaults
///
/// | Field | Default | Meaning |
/// | :--- | :--- | :--- |
/// | `ideal_row_fraction` | `0.9` | The ideal row is `floor(rows * 0.9) - 1`. |
/// | `ideal_col_fraction` | `0.5` | The ideal column is `floor(cols * 0.5) - 1`. |
/// | `up_penalty` | `1` | Per row closer to the screen than the ideal row. |
/// | `down_penalty` | `2` | Per row further from the screen than the ideal row. |
/// | `left_penalty` | `1` | Per column left of the ideal column. |
/// | `right_penalty` | `1` | Per column right of the ideal column. |
/// | `col_buffer` | `3` | Buffer seats on each side of an assigned block. |
/// | `max_reservation_size` | `200` | Larger parties are rejected. |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    default,
    bound(serialize = "T: Serialize", deserialize = "T: SeatWeight + Deserialize<'de>")
)]
pub struct SeatingPolicy<T> {
    ideal_row_fraction: f64,
    ideal_col_fraction: f64,
    up_penalty: T,
    down_penalty: T,
    left_penalty: T,
    right_penalty: T,
    col_buffer: usize,
    max_reservation_size: usize,
}

impl<T> Default for SeatingPolicy<T>
where
    T: SeatWeight,
{
    fn default() -> Self {
        Self {
            ideal_row_fraction: 0.9,
            ideal_col_fraction: 0.5,
            up_penalty: T::one(),
            down_penalty: T::one() + T::one(),
            left_penalty: T::one(),
            right_penalty: T::one(),
            col_buffer: 3,
            max_reservation_size: 200,
        }
    }
}

/// Maps `floor(len * fraction) - 1` into `0..len`.
#[inline]
fn ideal_position(len: usize, fraction: f64) -> usize {
    debug_assert!(len > 0, "called `ideal_position` with an empty axis");
    let scaled = (len as f64 * fraction).floor() as usize;
    scaled.saturating_sub(1).min(len - 1)
}

impl<T> SeatingPolicy<T>
where
    T: SeatWeight,
{
    /// Returns a builder seeded with the default policy.
    #[inline]
    pub fn builder() -> SeatingPolicyBuilder<T> {
        SeatingPolicyBuilder::new()
    }

    #[inline]
    pub fn ideal_row_fraction(&self) -> f64 {
        self.ideal_row_fraction
    }

    #[inline]
    pub fn ideal_col_fraction(&self) -> f64 {
        self.ideal_col_fraction
    }

    #[inline]
    pub fn up_penalty(&self) -> T {
        self.up_penalty
    }

    #[inline]
    pub fn down_penalty(&self) -> T {
        self.down_penalty
    }

    #[inline]
    pub fn left_penalty(&self) -> T {
        self.left_penalty
    }

    #[inline]
    pub fn right_penalty(&self) -> T {
        self.right_penalty
    }

    #[inline]
    pub fn col_buffer(&self) -> usize {
        self.col_buffer
    }

    #[inline]
    pub fn max_reservation_size(&self) -> usize {
        self.max_reservation_size
    }

    /// Returns the coordinates of the ideal seat for a venue of the given size.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use marquee_model::policy::{SeatingPolicy, VenueDimensions};
    /// let policy = SeatingPolicy::<u32>::default();
    /// let (row, col) = policy.ideal_seat(VenueDimensions::new(10, 20));
    /// assert_eq!((row.get(), col.get()), (8, 9));
    /// ```
    pub fn ideal_seat(&self, dimensions: VenueDimensions) -> (RowIndex, ColIndex) {
        (
            RowIndex::new(ideal_position(dimensions.rows(), self.ideal_row_fraction)),
            ColIndex::new(ideal_position(dimensions.cols(), self.ideal_col_fraction)),
        )
    }

    /// Checks the fractions. Needed after deserialization; the builder calls it itself.
    pub fn validate(&self) -> Result<(), PolicyError> {
        check_fraction("ideal_row_fraction", self.ideal_row_fraction)?;
        check_fraction("ideal_col_fraction", self.ideal_col_fraction)
    }
}

#[inline]
fn check_fraction(name: &'static str, value: f64) -> Result<(), PolicyError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(PolicyError::FractionOutOfRange { name, value })
    }
}

impl<T> std::fmt::Display for SeatingPolicy<T>
where
    T: SeatWeight,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SeatingPolicy(ideal: {:.2}/{:.2}, penalties up/down/left/right: {}/{}/{}/{}, col_buffer: {}, max_party: {})",
            self.ideal_row_fraction,
            self.ideal_col_fraction,
            self.up_penalty,
            self.down_penalty,
            self.left_penalty,
            self.right_penalty,
            self.col_buffer,
            self.max_reservation_size
        )
    }
}

/// Fluent builder for `SeatingPolicy`, starting from the defaults.
///
/// ```rust
/// # use marquee_model::policy::SeatingPolicy;
/// let policy = SeatingPolicy::<u32>::builder()
///     .col_buffer(2)
///     .down_penalty(3)
///     .max_reservation_size(10)
///     .build()
///     .unwrap();
/// assert_eq!(policy.col_buffer(), 2);
/// assert_eq!(policy.down_penalty(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct SeatingPolicyBuilder<T> {
    policy: SeatingPolicy<T>,
}

impl<T> Default for SeatingPolicyBuilder<T>
where
    T: SeatWeight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SeatingPolicyBuilder<T>
where
    T: SeatWeight,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            policy: SeatingPolicy::default(),
        }
    }

    #[inline]
    pub fn ideal_row_fraction(mut self, fraction: f64) -> Self {
        self.policy.ideal_row_fraction = fraction;
        self
    }

    #[inline]
    pub fn ideal_col_fraction(mut self, fraction: f64) -> Self {
        self.policy.ideal_col_fraction = fraction;
        self
    }

    #[inline]
    pub fn up_penalty(mut self, penalty: T) -> Self {
        self.policy.up_penalty = penalty;
        self
    }

    #[inline]
    pub fn down_penalty(mut self, penalty: T) -> Self {
        self.policy.down_penalty = penalty;
        self
    }

    #[inline]
    pub fn left_penalty(mut self, penalty: T) -> Self {
        self.policy.left_penalty = penalty;
        self
    }

    #[inline]
    pub fn right_penalty(mut self, penalty: T) -> Self {
        self.policy.right_penalty = penalty;
        self
    }

    #[inline]
    pub fn col_buffer(mut self, width: usize) -> Self {
        self.policy.col_buffer = width;
        self
    }

    #[inline]
    pub fn max_reservation_size(mut self, size: usize) -> Self {
        self.policy.max_reservation_size = size;
        self
    }

    /// Validates and returns the policy.
    pub fn build(self) -> Result<SeatingPolicy<T>, PolicyError> {
        self.policy.validate()?;
        Ok(self.policy)
    }
}
