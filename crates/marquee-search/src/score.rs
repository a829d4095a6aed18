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


//! Scoring of candidate spans.
//!
//! The searches never look at weights directly; they ask a `RangeScorer` for
//! the summed weight of a span of one row. `PrefixSums` answers in O(1) and
//! is what the engine uses. `WeightMatrix` answers by summing the span, which
//! is slower but handy as an independent reference.

use marquee_core::{num::SeatWeight, span::ColumnSpan};
use marquee_model::{grid::SeatBlock, index::RowIndex, prefix::PrefixSums, weights::WeightMatrix};

/// Returns the summed weight of a span of seats within one row.
pub trait RangeScorer<T>
where
    T: SeatWeight,
{
    /// Returns the name of the scorer.
    fn name(&self) -> &str;
    /// Returns the summed weight of the seats `span` of `row`.
    fn score(&self, row: RowIndex, span: ColumnSpan) -> T;

    /// Returns the summed weight of a seat block.
    #[inline]
    fn score_block(&self, block: SeatBlock) -> T {
        self.score(block.row(), block.columns())
    }
}

impl<T> RangeScorer<T> for PrefixSums<T>
where
    T: SeatWeight,
{
    #[inline]
    fn name(&self) -> &str {
        "PrefixSums"
    }

    #[inline]
    fn score(&self, row: RowIndex, span: ColumnSpan) -> T {
        self.span_sum(row, span)
    }
}

impl<T> RangeScorer<T> for WeightMatrix<T>
where
    T: SeatWeight,
{
    #[inline]
    fn name(&self) -> &str {
        "WeightMatrix"
    }

    fn score(&self, row: RowIndex, span: ColumnSpan) -> T {
        self.row(row)[span.as_range()]
            .iter()
            .fold(T::zero(), |acc, &w| acc.saturating_add(w))
    }
}

impl<T> std::fmt::Debug for dyn RangeScorer<T> + '_
where
    T: SeatWeight,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RangeScorer({})", self.name())
    }
}

/// A seat block together with its summed weight.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ScoredBlock<T> {
    block: SeatBlock,
    score: T,
}

impl<T> ScoredBlock<T>
where
    T: SeatWeight,
{
    #[inline]
    pub fn new(block: SeatBlock, score: T) -> Self {
        Self { block, score }
    }

    /// Scores `block` with `scorer`.
    #[inline]
    pub fn scored<S>(block: SeatBlock, scorer: &S) -> Self
    where
        S: RangeScorer<T> + ?Sized,
    {
        Self::new(block, scorer.score_block(block))
    }

    #[inline]
    pub fn block(&self) -> SeatBlock {
        self.block
    }

    #[inline]
    pub fn score(&self) -> T {
        self.score
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.block.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.block.is_empty()
    }
}

impl<T> std::fmt::Display for ScoredBlock<T>
where
    T: SeatWeight,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (score {})", self.block, self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_model::{
        index::ColIndex,
        policy::{SeatingPolicy, VenueDimensions},
    };

    fn r(i: usize) -> RowIndex {
        RowIndex::new(i)
    }

    fn default_weights() -> WeightMatrix<u32> {
        WeightMatrix::compute(VenueDimensions::new(10, 20), &SeatingPolicy::default()).unwrap()
    }

    #[test]
    fn test_prefix_and_matrix_scorers_agree() {
        let weights = default_weights();
        let prefix = PrefixSums::build(&weights).unwrap();
        for row in 0..weights.num_rows() {
            for start in 0..=weights.num_cols() {
                for end in start..=weights.num_cols() {
                    let span = ColumnSpan::new(start, end);
                    assert_eq!(
                        RangeScorer::score(&prefix, r(row), span),
                        RangeScorer::score(&weights, r(row), span),
                        "row {} span {}",
                        row,
                        span
                    );
                }
            }
        }
    }

    #[test]
    fn test_empty_span_scores_zero() {
        let weights = default_weights();
        let prefix = PrefixSums::build(&weights).unwrap();
        assert_eq!(RangeScorer::score(&prefix, r(3), ColumnSpan::new(7, 7)), 0);
    }

    #[test]
    fn test_scored_block() {
        let weights = default_weights();
        let prefix = PrefixSums::build(&weights).unwrap();
        let block = SeatBlock::with_len(r(8), ColIndex::new(8), 3);
        let scored = ScoredBlock::scored(block, &prefix);
        assert_eq!(scored.score(), 39 + 40 + 39);
        assert_eq!(scored.len(), 3);
        assert!(!scored.is_empty());
        assert_eq!(scored.block(), block);
        assert_eq!(format!("{}", scored), "row 8 [8, 11) (score 118)");
    }

    #[test]
    fn test_scorer_debug_uses_name() {
        let weights = default_weights();
        let prefix = PrefixSums::build(&weights).unwrap();
        let scorer: &dyn RangeScorer<u32> = &prefix;
        assert_eq!(format!("{:?}", scorer), "RangeScorer(PrefixSums)");
    }
}
