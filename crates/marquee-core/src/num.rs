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


//! # Seat Weight Numeric Trait
//!
//! `SeatWeight` collects the integer capabilities required by the weight
//! model, the prefix sums and both searches into a single bound. Weights are
//! unsigned: the weight model is constructed so that no seat ever drops below
//! zero, and the type system keeps it that way.
//!
//! Arithmetic that can overflow during construction (base weight, row totals)
//! goes through the checked operations provided by `PrimInt`, so an
//! oversized venue is reported as an error instead of wrapping.

use num_traits::{FromPrimitive, PrimInt, ToPrimitive, Unsigned};

/// A trait alias for unsigned integer types usable as seat weights.
/// In practice this is `u16`, `u32`, `u64` or `usize`.
pub trait SeatWeight:
    PrimInt
    + Unsigned
    + FromPrimitive
    + ToPrimitive
    + std::fmt::Debug
    + std::fmt::Display
    + std::hash::Hash
    + Send
    + Sync
    + 'static
{
}

impl<T> SeatWeight for T where
    T: PrimInt
        + Unsigned
        + FromPrimitive
        + ToPrimitive
        + std::fmt::Debug
        + std::fmt::Display
        + std::hash::Hash
        + Send
        + Sync
        + 'static
{
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total<T: SeatWeight>(values: &[T]) -> Option<T> {
        values
            .iter()
            .try_fold(T::zero(), |acc, &value| acc.checked_add(&value))
    }

    #[test]
    fn test_common_unsigned_types_qualify() {
        assert_eq!(total::<u16>(&[1, 2, 3]), Some(6));
        assert_eq!(total::<u32>(&[10, 20]), Some(30));
        assert_eq!(total::<u64>(&[]), Some(0));
        assert_eq!(total::<usize>(&[7]), Some(7));
    }

    #[test]
    fn test_checked_overflow_is_detected() {
        assert_eq!(total::<u8>(&[200, 100]), None);
    }
}
