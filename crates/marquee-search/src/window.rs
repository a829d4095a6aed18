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


//! Best single-window search.
//!
//! For every row, a window of exactly `n` seats slides left to right. Its
//! left edge jumps past any seat that is not `Empty`, so every full-length
//! window consists of contiguous empty seats only. Each such window is scored
//! and the highest score over all rows wins.
//!
//! Ties go to the first window found: rows are scanned front to back and
//! columns left to right, and a later window replaces the incumbent only if
//! it scores strictly higher.

use crate::score::{RangeScorer, ScoredBlock};
use marquee_core::{num::SeatWeight, span::ColumnSpan};
use marquee_model::{
    grid::{SeatBlock, SeatGrid},
    index::RowIndex,
};

/// Finds the highest-scoring run of exactly `n` contiguous empty seats in a
/// single row.
///
/// Returns `None` if `n` is zero or no row holds `n` contiguous empty seats.
///
/// # Examples
///
/// ```rust
/// # use marquee_model::{grid::SeatGrid, policy::{SeatingPolicy, VenueDimensions}};
/// # use marquee_model::{prefix::PrefixSums, weights::WeightMatrix};
/// # use marquee_search::window::find_best_window;
/// let dims = VenueDimensions::new(10, 20);
/// let weights = WeightMatrix::<u32>::compute(dims, &SeatingPolicy::default()).unwrap();
/// let prefix = PrefixSums::build(&weights).unwrap();
/// let grid = SeatGrid::new(dims, 3);
///
/// let best = find_best_window(&grid, &prefix, 4).unwrap();
/// assert_eq!(best.block().row().get(), 8);
/// assert_eq!(best.block().start().get(), 7);
/// assert_eq!(best.score(), 156);
/// ```
pub fn find_best_window<T, S>(grid: &SeatGrid, scorer: &S, n: usize) -> Option<ScoredBlock<T>>
where
    T: SeatWeight,
    S: RangeScorer<T> + ?Sized,
{
    if n == 0 || n > grid.num_cols() {
        return None;
    }

    let mut best: Option<ScoredBlock<T>> = None;

    for (row_index, seats) in grid.rows().enumerate() {
        let row = RowIndex::new(row_index);
        let mut left = 0;

        for (col, status) in seats.iter().enumerate() {
            if !status.is_empty() {
                left = col + 1;
                continue;
            }
            if col + 1 - left > n {
                left += 1;
            }
            if col + 1 - left < n {
                continue;
            }

            let span = ColumnSpan::new(left, col + 1);
            let score = scorer.score(row, span);
            if best.is_none_or(|incumbent| score > incumbent.score()) {
                best = Some(ScoredBlock::new(SeatBlock::new(row, span), score));
            }
        }
    }

    if let Some(found) = &best {
        tracing::trace!(block = %found.block(), score = %found.score(), "best single window");
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_model::{
        grid::SeatStatus,
        index::ColIndex,
        policy::{SeatingPolicy, VenueDimensions},
        prefix::PrefixSums,
        weights::WeightMatrix,
    };
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn r(i: usize) -> RowIndex {
        RowIndex::new(i)
    }

    fn c(i: usize) -> ColIndex {
        ColIndex::new(i)
    }

    fn setup(rows: usize, cols: usize) -> (SeatGrid, PrefixSums<u32>) {
        let dims = VenueDimensions::new(rows, cols);
        let weights = WeightMatrix::compute(dims, &SeatingPolicy::default()).unwrap();
        (SeatGrid::new(dims, 3), PrefixSums::build(&weights).unwrap())
    }

    /// Brute force: every window of every row, first strictly-better wins.
    fn naive_best(grid: &SeatGrid, prefix: &PrefixSums<u32>, n: usize) -> Option<(usize, usize, u32)> {
        let mut best: Option<(usize, usize, u32)> = None;
        for row in 0..grid.num_rows() {
            for start in 0..=grid.num_cols().saturating_sub(n) {
                let all_empty = (start..start + n).all(|col| grid.is_empty_seat(r(row), c(col)));
                if !all_empty {
                    continue;
                }
                let score = prefix.range_sum(r(row), start, start + n);
                if best.is_none_or(|(_, _, s)| score > s) {
                    best = Some((row, start, score));
                }
            }
        }
        best
    }

    #[test]
    fn test_first_request_lands_near_ideal_seat() {
        let (grid, prefix) = setup(10, 20);
        let best = find_best_window(&grid, &prefix, 4).unwrap();
        assert_eq!(best.block(), SeatBlock::with_len(r(8), c(7), 4));
        assert_eq!(best.score(), 156);
    }

    #[test]
    fn test_tie_break_prefers_first_window() {
        // Windows starting at 7 and 8 of the ideal row both weigh 156.
        let (grid, prefix) = setup(10, 20);
        assert_eq!(prefix.range_sum(r(8), 7, 11), prefix.range_sum(r(8), 8, 12));
        let best = find_best_window(&grid, &prefix, 4).unwrap();
        assert_eq!(best.block().start(), c(7));
    }

    #[test]
    fn test_zero_and_oversized_requests() {
        let (grid, prefix) = setup(4, 6);
        assert!(find_best_window(&grid, &prefix, 0).is_none());
        assert!(find_best_window(&grid, &prefix, 7).is_none());
        let full = find_best_window(&grid, &prefix, 6).unwrap();
        assert_eq!(full.len(), 6);
    }

    #[test]
    fn test_skips_blocked_seats() {
        let (mut grid, prefix) = setup(1, 10);
        // Assigned 4..6 with buffer 3 blocks 1..9, leaving seats 0 and 9.
        grid.mark_assigned(SeatBlock::with_len(r(0), c(4), 2));
        assert!(find_best_window(&grid, &prefix, 2).is_none());
        let single = find_best_window(&grid, &prefix, 1).unwrap();
        assert_eq!(single.block().row(), r(0));
        assert!(single.block().start() == c(0) || single.block().start() == c(9));
    }

    #[test]
    fn test_window_never_covers_non_empty_seat() {
        let (mut grid, prefix) = setup(3, 12);
        grid.mark_assigned(SeatBlock::with_len(r(1), c(5), 1));
        let best = find_best_window(&grid, &prefix, 3).unwrap();
        for col in best.block().columns() {
            assert_eq!(grid.status(best.block().row(), c(col)), SeatStatus::Empty);
        }
    }

    #[test]
    fn test_matches_brute_force_on_random_grids() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x5EA7);
        for _ in 0..200 {
            let rows = rng.gen_range(1..=8);
            let cols = rng.gen_range(1..=16);
            let (mut grid, prefix) = setup(rows, cols);

            for _ in 0..rng.gen_range(0..6) {
                let row = rng.gen_range(0..rows);
                let start = rng.gen_range(0..cols);
                let len = rng.gen_range(1..=cols - start);
                let block = SeatBlock::with_len(r(row), c(start), len);
                if block.columns().iter().all(|col| grid.is_empty_seat(r(row), c(col))) {
                    grid.mark_assigned(block);
                }
            }

            for n in 1..=cols {
                let expected = naive_best(&grid, &prefix, n);
                let actual = find_best_window(&grid, &prefix, n)
                    .map(|b| (b.block().row().get(), b.block().start().get(), b.score()));
                assert_eq!(actual, expected, "n = {} on\n{}", n, grid);
            }
        }
    }
}
