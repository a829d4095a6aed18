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


use crate::index::{ColIndex, RowIndex};

/// The printable label of a seat: a row letter followed by the column index.
///
/// Row `0` is `A`, row `1` is `B`, and so on; the column is the model's
/// 0-based index, so the seat in the first column of the front row is `A0`.
///
/// # Examples
///
/// ```rust
/// # use marquee_model::code::SeatCode;
/// # use marquee_model::index::{ColIndex, RowIndex};
/// let code = SeatCode::new(RowIndex::new(8), ColIndex::new(7));
/// assert_eq!(code.to_string(), "I7");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct SeatCode {
    row: RowIndex,
    col: ColIndex,
}

impl SeatCode {
    /// Creates the code of a seat.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `row` has no letter (`row >= 26`).
    #[inline]
    pub fn new(row: RowIndex, col: ColIndex) -> Self {
        debug_assert!(
            row.get() < crate::policy::MAX_ROWS,
            "called `SeatCode::new` with row {} which has no row letter",
            row.get()
        );
        Self { row, col }
    }

    #[inline]
    pub fn row(&self) -> RowIndex {
        self.row
    }

    #[inline]
    pub fn col(&self) -> ColIndex {
        self.col
    }

    /// Returns the letter labelling the row.
    #[inline]
    pub fn row_letter(&self) -> char {
        char::from(b'A' + self.row.get() as u8)
    }
}

impl std::fmt::Display for SeatCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.row_letter(), self.col.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(row: usize, col: usize) -> SeatCode {
        SeatCode::new(RowIndex::new(row), ColIndex::new(col))
    }

    #[test]
    fn test_row_letters() {
        assert_eq!(code(0, 0).row_letter(), 'A');
        assert_eq!(code(1, 0).row_letter(), 'B');
        assert_eq!(code(25, 0).row_letter(), 'Z');
    }

    #[test]
    fn test_display_uses_zero_based_columns() {
        assert_eq!(code(0, 0).to_string(), "A0");
        assert_eq!(code(9, 19).to_string(), "J19");
    }

    #[test]
    fn test_ordering_is_row_major() {
        let mut codes = vec![code(1, 0), code(0, 5), code(0, 2)];
        codes.sort();
        assert_eq!(codes, vec![code(0, 2), code(0, 5), code(1, 0)]);
    }
}
