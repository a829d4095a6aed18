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


//! Best multi-range decomposition.
//!
//! Fallback when no single row can seat the whole party. Every maximal run of
//! contiguous empty seats in the venue is a candidate, whatever its length.
//! Candidates are pushed into a min-heap keyed by score while a running total
//! tracks the seats they hold. After each push the cheapest candidates are
//! evicted for as long as the remaining ones still hold at least `n` seats,
//! so the heap only ever keeps the most valuable capacity that is actually
//! needed.
//!
//! Once the scan is done the heap is drained from the highest score down,
//! taking runs until exactly `n` seats are covered. The last run taken is cut
//! short (keeping its start column) if it would overshoot.
//!
//! Candidates with equal score are ordered by row, then start column; the
//! lower position counts as the smaller candidate.

use crate::score::{RangeScorer, ScoredBlock};
use marquee_core::{num::SeatWeight, span::ColumnSpan};
use marquee_model::{
    grid::{SeatBlock, SeatGrid},
    index::RowIndex,
};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// A maximal run of empty seats, as stored in the selection heap.
///
/// Field order drives the derived ordering: score, then row, then start.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
struct CandidateRun<T> {
    score: T,
    row: usize,
    start: usize,
    len: usize,
}

impl<T> CandidateRun<T>
where
    T: SeatWeight,
{
    #[inline]
    fn block(&self) -> SeatBlock {
        SeatBlock::new(RowIndex::new(self.row), ColumnSpan::with_len(self.start, self.len))
    }
}

/// Multi-range search with a reusable selection heap.
///
/// The heap is cleared at the start of every call, so one decomposer can
/// serve a whole session without reallocating.
#[derive(Debug, Clone)]
pub struct RangeDecomposer<T>
where
    T: SeatWeight,
{
    scratch_heap: BinaryHeap<Reverse<CandidateRun<T>>>,
}

impl<T> Default for RangeDecomposer<T>
where
    T: SeatWeight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RangeDecomposer<T>
where
    T: SeatWeight,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            scratch_heap: BinaryHeap::new(),
        }
    }

    /// Creates a decomposer whose heap can hold `capacity_runs` candidates
    /// without reallocating.
    #[inline]
    pub fn preallocated(capacity_runs: usize) -> Self {
        Self {
            scratch_heap: BinaryHeap::with_capacity(capacity_runs),
        }
    }

    #[inline]
    fn push_candidate(&mut self, run: CandidateRun<T>, seats_found: &mut usize, n: usize) {
        self.scratch_heap.push(Reverse(run));
        *seats_found += run.len;

        while let Some(&Reverse(cheapest)) = self.scratch_heap.peek() {
            if *seats_found - cheapest.len < n {
                break;
            }
            self.scratch_heap.pop();
            *seats_found -= cheapest.len;
        }
    }

    /// Returns disjoint blocks of empty seats covering exactly `n` seats, in
    /// descending score order.
    ///
    /// Returns an empty vector if `n` is zero or the grid holds fewer than
    /// `n` empty seats.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use marquee_model::{grid::{SeatBlock, SeatGrid}, index::{ColIndex, RowIndex}};
    /// # use marquee_model::{policy::{SeatingPolicy, VenueDimensions}};
    /// # use marquee_model::{prefix::PrefixSums, weights::WeightMatrix};
    /// # use marquee_search::decomposition::RangeDecomposer;
    /// let dims = VenueDimensions::new(1, 7);
    /// let weights = WeightMatrix::<u32>::compute(dims, &SeatingPolicy::default()).unwrap();
    /// let prefix = PrefixSums::build(&weights).unwrap();
    /// let mut grid = SeatGrid::new(dims, 1);
    /// grid.mark_assigned(SeatBlock::with_len(RowIndex::new(0), ColIndex::new(3), 1));
    ///
    /// // Seats 0..2 and 5..7 are left; three seats need both runs.
    /// let runs = RangeDecomposer::new().decompose(&grid, &prefix, 3);
    /// assert_eq!(runs.len(), 2);
    /// assert_eq!(runs.iter().map(|r| r.len()).sum::<usize>(), 3);
    /// ```
    pub fn decompose<S>(&mut self, grid: &SeatGrid, scorer: &S, n: usize) -> Vec<ScoredBlock<T>>
    where
        S: RangeScorer<T> + ?Sized,
    {
        self.scratch_heap.clear();
        if n == 0 {
            return Vec::new();
        }

        let mut seats_found = 0usize;
        for (row_index, seats) in grid.rows().enumerate() {
            let row = RowIndex::new(row_index);
            let mut run_start: Option<usize> = None;

            for col in 0..=seats.len() {
                let empty = seats.get(col).is_some_and(|s| s.is_empty());
                match (run_start, empty) {
                    (None, true) => run_start = Some(col),
                    (Some(start), false) => {
                        let span = ColumnSpan::new(start, col);
                        let run = CandidateRun {
                            score: scorer.score(row, span),
                            row: row_index,
                            start,
                            len: span.len(),
                        };
                        self.push_candidate(run, &mut seats_found, n);
                        run_start = None;
                    }
                    _ => {}
                }
            }
        }

        if seats_found < n {
            tracing::trace!(requested = n, seats_found, "no multi-range decomposition");
            self.scratch_heap.clear();
            return Vec::new();
        }

        let mut selected: Vec<CandidateRun<T>> =
            self.scratch_heap.drain().map(|Reverse(run)| run).collect();
        selected.sort_unstable_by(|a, b| b.cmp(a));

        let mut remaining = n;
        let mut blocks = Vec::with_capacity(selected.len());
        for run in selected {
            if remaining == 0 {
                break;
            }
            if run.len <= remaining {
                blocks.push(ScoredBlock::new(run.block(), run.score));
                remaining -= run.len;
            } else {
                let full = run.block();
                let block = SeatBlock::new(full.row(), full.columns().truncated(remaining));
                blocks.push(ScoredBlock::scored(block, scorer));
                remaining = 0;
            }
        }

        debug_assert_eq!(
            remaining, 0,
            "called `RangeDecomposer::decompose` but the selected runs do not cover {} seats",
            n
        );
        tracing::trace!(requested = n, runs = blocks.len(), "multi-range decomposition");
        blocks
    }
}

/// Convenience wrapper running a fresh `RangeDecomposer`.
#[inline]
pub fn find_range_decomposition<T, S>(grid: &SeatGrid, scorer: &S, n: usize) -> Vec<ScoredBlock<T>>
where
    T: SeatWeight,
    S: RangeScorer<T> + ?Sized,
{
    RangeDecomposer::new().decompose(grid, scorer, n)
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
    use std::collections::HashSet;

    fn r(i: usize) -> RowIndex {
        RowIndex::new(i)
    }

    fn c(i: usize) -> ColIndex {
        ColIndex::new(i)
    }

    fn setup(rows: usize, cols: usize, col_buffer: usize) -> (SeatGrid, PrefixSums<u32>) {
        let dims = VenueDimensions::new(rows, cols);
        let weights = WeightMatrix::compute(dims, &SeatingPolicy::default()).unwrap();
        (SeatGrid::new(dims, col_buffer), PrefixSums::build(&weights).unwrap())
    }

    /// One row of seven with seat 3 taken: runs [0, 2) (score 15) and [5, 7) (score 11).
    fn split_row() -> (SeatGrid, PrefixSums<u32>) {
        let (mut grid, prefix) = setup(1, 7, 1);
        grid.mark_assigned(SeatBlock::with_len(r(0), c(3), 1));
        (grid, prefix)
    }

    fn spans(blocks: &[ScoredBlock<u32>]) -> Vec<(usize, usize, usize, u32)> {
        blocks
            .iter()
            .map(|b| (b.block().row().get(), b.block().start().get(), b.len(), b.score()))
            .collect()
    }

    #[test]
    fn test_candidate_ordering() {
        let low = CandidateRun { score: 5u32, row: 3, start: 0, len: 9 };
        let high = CandidateRun { score: 6u32, row: 0, start: 0, len: 1 };
        let earlier = CandidateRun { score: 5u32, row: 2, start: 4, len: 1 };
        assert!(low < high);
        assert!(earlier < low);

        let mut heap = BinaryHeap::new();
        heap.extend([Reverse(low), Reverse(high), Reverse(earlier)]);
        assert_eq!(heap.pop().map(|Reverse(run)| run), Some(earlier));
    }

    #[test]
    fn test_combines_runs_and_truncates_last() {
        let (grid, prefix) = split_row();
        let blocks = find_range_decomposition(&grid, &prefix, 3);
        assert_eq!(spans(&blocks), vec![(0, 0, 2, 15), (0, 5, 1, 6)]);
    }

    #[test]
    fn test_evicts_unneeded_cheap_run() {
        let (grid, prefix) = split_row();
        let blocks = find_range_decomposition(&grid, &prefix, 2);
        assert_eq!(spans(&blocks), vec![(0, 0, 2, 15)]);
    }

    #[test]
    fn test_uses_every_seat_when_needed() {
        let (grid, prefix) = split_row();
        let blocks = find_range_decomposition(&grid, &prefix, 4);
        assert_eq!(spans(&blocks), vec![(0, 0, 2, 15), (0, 5, 2, 11)]);
    }

    #[test]
    fn test_insufficient_capacity_and_zero() {
        let (grid, prefix) = split_row();
        assert!(find_range_decomposition(&grid, &prefix, 5).is_empty());
        assert!(find_range_decomposition(&grid, &prefix, 0).is_empty());
    }

    #[test]
    fn test_decomposer_is_reusable() {
        let (grid, prefix) = split_row();
        let mut decomposer = RangeDecomposer::preallocated(4);
        assert!(decomposer.decompose(&grid, &prefix, 5).is_empty());
        let first = decomposer.decompose(&grid, &prefix, 3);
        let second = decomposer.decompose(&grid, &prefix, 3);
        assert_eq!(first, second);
    }

    #[test]
    fn test_random_grids_cover_exactly_n_empty_seats() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut decomposer = RangeDecomposer::new();

        for _ in 0..200 {
            let rows = rng.gen_range(1..=8);
            let cols = rng.gen_range(1..=16);
            let (mut grid, prefix) = setup(rows, cols, rng.gen_range(0..=3));

            for _ in 0..rng.gen_range(0..10) {
                let row = rng.gen_range(0..rows);
                let start = rng.gen_range(0..cols);
                let len = rng.gen_range(1..=(cols - start).min(4));
                let block = SeatBlock::with_len(r(row), c(start), len);
                if block.columns().iter().all(|col| grid.is_empty_seat(r(row), c(col))) {
                    grid.mark_assigned(block);
                }
            }

            let available = grid.empty_seats();
            for n in 1..=available + 1 {
                let blocks = decomposer.decompose(&grid, &prefix, n);
                if n > available {
                    assert!(blocks.is_empty());
                    continue;
                }

                assert_eq!(blocks.iter().map(|b| b.len()).sum::<usize>(), n);

                let mut seen = HashSet::new();
                for scored in &blocks {
                    let block = scored.block();
                    assert!(!block.is_empty());
                    assert_eq!(scored.score(), prefix.span_sum(block.row(), block.columns()));
                    for col in block.columns() {
                        assert_eq!(grid.status(block.row(), c(col)), SeatStatus::Empty);
                        assert!(seen.insert((block.row(), col)), "seat used twice");
                    }
                }

                let scores: Vec<u32> = blocks.iter().map(|b| b.score()).collect();
                let untruncated = &scores[..scores.len() - 1];
                assert!(untruncated.windows(2).all(|w| w[0] >= w[1]));
            }
        }
    }
}
