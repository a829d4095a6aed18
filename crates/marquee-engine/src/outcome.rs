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


//! Outcomes of a reservation request.
//!
//! A request either produces an `Assignment` (possibly empty, for a party of
//! zero) or a `RejectionReason`. Rejections are never fatal: the grid is left
//! exactly as it was and the caller may carry on with the next request.

use marquee_core::num::SeatWeight;
use marquee_model::{code::SeatCode, grid::SeatBlock};
use marquee_search::score::ScoredBlock;

/// Why a reservation request was turned down.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, thiserror::Error)]
pub enum RejectionReason {
    /// The party is larger than the policy allows.
    #[error("party of {requested} exceeds the maximum reservation size of {max}")]
    TooLarge { requested: usize, max: usize },
    /// Not enough empty seats are left, in one row or combined.
    #[error("party of {requested} cannot be seated, only {available} seats are available")]
    InsufficientCapacity { requested: usize, available: usize },
}

impl RejectionReason {
    /// The party size of the rejected request.
    #[inline]
    pub fn requested(&self) -> usize {
        match self {
            Self::TooLarge { requested, .. } | Self::InsufficientCapacity { requested, .. } => {
                *requested
            }
        }
    }
}

/// How the seats of an assignment were found.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PlacementStrategy {
    /// One contiguous run of seats in a single row.
    SingleWindow,
    /// Several runs, possibly across rows.
    MultiRange,
    /// Nothing to place; the party was empty.
    Empty,
}

impl std::fmt::Display for PlacementStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlacementStrategy::SingleWindow => write!(f, "SingleWindow"),
            PlacementStrategy::MultiRange => write!(f, "MultiRange"),
            PlacementStrategy::Empty => write!(f, "Empty"),
        }
    }
}

/// The seats granted to a reservation, in the order they were applied.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Assignment<T> {
    strategy: PlacementStrategy,
    blocks: Vec<ScoredBlock<T>>,
    total_weight: T,
}

impl<T> Assignment<T>
where
    T: SeatWeight,
{
    /// Creates an assignment, summing the block scores into the total weight.
    pub fn new(strategy: PlacementStrategy, blocks: Vec<ScoredBlock<T>>) -> Self {
        let total_weight = blocks
            .iter()
            .fold(T::zero(), |acc, b| acc.saturating_add(b.score()));
        Self {
            strategy,
            blocks,
            total_weight,
        }
    }

    /// The assignment of an empty party.
    #[inline]
    pub fn empty() -> Self {
        Self::new(PlacementStrategy::Empty, Vec::new())
    }

    #[inline]
    pub fn strategy(&self) -> PlacementStrategy {
        self.strategy
    }

    #[inline]
    pub fn blocks(&self) -> &[ScoredBlock<T>] {
        &self.blocks
    }

    /// Iterates over the seat blocks, without their scores.
    #[inline]
    pub fn iter_blocks(&self) -> impl Iterator<Item = SeatBlock> + '_ {
        self.blocks.iter().map(|b| b.block())
    }

    /// The summed weight of every assigned seat.
    #[inline]
    pub fn total_weight(&self) -> T {
        self.total_weight
    }

    /// The number of seats granted.
    #[inline]
    pub fn num_seats(&self) -> usize {
        self.blocks.iter().map(|b| b.len()).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.num_seats() == 0
    }

    /// The seat codes, block by block, left to right within a block.
    pub fn seat_codes(&self) -> Vec<SeatCode> {
        self.iter_blocks().flat_map(SeatBlock::seat_codes).collect()
    }
}

impl<T> std::fmt::Display for Assignment<T>
where
    T: SeatWeight,
{
    /// Formats the seat codes separated by `", "`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, code) in self.iter_blocks().flat_map(SeatBlock::seat_codes).enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", code)?;
        }
        Ok(())
    }
}
