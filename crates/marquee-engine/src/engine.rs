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


//! The reservation engine.
//!
//! `ReservationEngine` ties the pieces of a venue together: the weight model
//! and its prefix sums are computed once at construction, and the seat grid
//! is the only state that changes afterwards. Each call to `reserve`:
//!
//! 1. rejects parties above the policy maximum without touching the grid,
//! 2. returns an empty assignment for a party of zero,
//! 3. applies the best single window if one exists,
//! 4. otherwise applies the best multi-range decomposition if one exists,
//! 5. otherwise rejects with the number of seats still available.
//!
//! Placements are applied block by block through `SeatGrid::mark_assigned`,
//! in the order they are returned to the caller.

use crate::{
    monitor::{no_op::NoOperationMonitor, reservation_monitor::ReservationMonitor},
    outcome::{Assignment, PlacementStrategy, RejectionReason},
    stats::EngineStatistics,
};
use marquee_core::num::SeatWeight;
use marquee_model::{
    grid::SeatGrid,
    policy::{PolicyError, SeatingPolicy, VenueDimensions},
    prefix::PrefixSums,
    weights::WeightMatrix,
};
use marquee_search::{decomposition::RangeDecomposer, window::find_best_window};

/// Seats parties in a single venue, one request at a time.
///
/// # Examples
///
/// ```rust
/// # use marquee_engine::engine::ReservationEngine;
/// # use marquee_model::policy::{SeatingPolicy, VenueDimensions};
/// let mut engine =
///     ReservationEngine::<u32>::new(VenueDimensions::new(10, 20), SeatingPolicy::default())
///         .unwrap();
///
/// let assignment = engine.reserve(4).unwrap();
/// assert_eq!(assignment.to_string(), "I7, I8, I9, I10");
/// ```
#[derive(Debug, Clone)]
pub struct ReservationEngine<T>
where
    T: SeatWeight,
{
    policy: SeatingPolicy<T>,
    weights: WeightMatrix<T>,
    prefix: PrefixSums<T>,
    grid: SeatGrid,
    decomposer: RangeDecomposer<T>,
    statistics: EngineStatistics,
}

impl<T> ReservationEngine<T>
where
    T: SeatWeight,
{
    /// Builds the weight model, the prefix sums and an empty grid.
    ///
    /// # Errors
    ///
    /// Returns a `PolicyError` if the venue or the policy is invalid, or if
    /// the weights do not fit `T`.
    pub fn new(dimensions: VenueDimensions, policy: SeatingPolicy<T>) -> Result<Self, PolicyError> {
        let weights = WeightMatrix::compute(dimensions, &policy)?;
        let prefix = PrefixSums::build(&weights)?;
        let grid = SeatGrid::new(dimensions, policy.col_buffer());
        let max_runs = dimensions.rows() * dimensions.cols().div_ceil(2);

        tracing::debug!(
            venue = %dimensions,
            base_weight = %weights.base_weight(),
            "reservation engine initialized"
        );

        Ok(Self {
            policy,
            weights,
            prefix,
            grid,
            decomposer: RangeDecomposer::preallocated(max_runs),
            statistics: EngineStatistics::default(),
        })
    }

    /// Returns a builder for a default 10 x 20 venue with the default policy.
    #[inline]
    pub fn builder() -> ReservationEngineBuilder<T> {
        ReservationEngineBuilder::new()
    }

    #[inline]
    pub fn policy(&self) -> &SeatingPolicy<T> {
        &self.policy
    }

    #[inline]
    pub fn dimensions(&self) -> VenueDimensions {
        self.grid.dimensions()
    }

    #[inline]
    pub fn weights(&self) -> &WeightMatrix<T> {
        &self.weights
    }

    #[inline]
    pub fn prefix_sums(&self) -> &PrefixSums<T> {
        &self.prefix
    }

    #[inline]
    pub fn grid(&self) -> &SeatGrid {
        &self.grid
    }

    #[inline]
    pub fn statistics(&self) -> &EngineStatistics {
        &self.statistics
    }

    /// Number of seats still available for assignment.
    #[inline]
    pub fn empty_seats(&self) -> usize {
        self.grid.empty_seats()
    }

    /// Seats a party of `party_size`.
    ///
    /// On success the grid already reflects the assignment and its buffers.
    /// On rejection the grid is unchanged.
    #[inline]
    pub fn reserve(&mut self, party_size: usize) -> Result<Assignment<T>, RejectionReason> {
        self.reserve_with_monitor(party_size, &mut NoOperationMonitor::new())
    }

    /// Seats a party of `party_size`, reporting the request to `monitor`.
    pub fn reserve_with_monitor<M>(
        &mut self,
        party_size: usize,
        monitor: &mut M,
    ) -> Result<Assignment<T>, RejectionReason>
    where
        M: ReservationMonitor<T> + ?Sized,
    {
        self.statistics.on_request();
        monitor.on_request(party_size, &self.statistics);

        match self.place(party_size) {
            Ok(assignment) => {
                self.statistics.on_assigned(&assignment);
                monitor.on_assigned(&assignment, &self.statistics);
                Ok(assignment)
            }
            Err(reason) => {
                self.statistics.on_rejected(&reason);
                monitor.on_rejected(&reason, &self.statistics);
                Err(reason)
            }
        }
    }

    fn place(&mut self, party_size: usize) -> Result<Assignment<T>, RejectionReason> {
        let max = self.policy.max_reservation_size();
        if party_size > max {
            return Err(RejectionReason::TooLarge {
                requested: party_size,
                max,
            });
        }
        if party_size == 0 {
            return Ok(Assignment::empty());
        }

        let assignment = if let Some(window) = find_best_window(&self.grid, &self.prefix, party_size)
        {
            tracing::debug!(block = %window.block(), score = %window.score(), "placing single window");
            Assignment::new(PlacementStrategy::SingleWindow, vec![window])
        } else {
            let runs = self.decomposer.decompose(&self.grid, &self.prefix, party_size);
            if runs.is_empty() {
                return Err(RejectionReason::InsufficientCapacity {
                    requested: party_size,
                    available: self.grid.empty_seats(),
                });
            }
            tracing::debug!(runs = runs.len(), "placing multi-range decomposition");
            Assignment::new(PlacementStrategy::MultiRange, runs)
        };

        for block in assignment.iter_blocks() {
            self.grid.mark_assigned(block);
        }

        debug_assert_eq!(
            assignment.num_seats(),
            party_size,
            "called `ReservationEngine::place` but the assignment does not cover the party"
        );
        Ok(assignment)
    }
}

/// A builder for `ReservationEngine`.
#[derive(Debug, Clone)]
pub struct ReservationEngineBuilder<T>
where
    T: SeatWeight,
{
    dimensions: VenueDimensions,
    policy: SeatingPolicy<T>,
}

impl<T> Default for ReservationEngineBuilder<T>
where
    T: SeatWeight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ReservationEngineBuilder<T>
where
    T: SeatWeight,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            dimensions: VenueDimensions::default(),
            policy: SeatingPolicy::default(),
        }
    }

    #[inline]
    pub fn dimensions(&mut self, dimensions: VenueDimensions) -> &mut Self {
        self.dimensions = dimensions;
        self
    }

    #[inline]
    pub fn rows(&mut self, rows: usize) -> &mut Self {
        self.dimensions = VenueDimensions::new(rows, self.dimensions.cols());
        self
    }

    #[inline]
    pub fn cols(&mut self, cols: usize) -> &mut Self {
        self.dimensions = VenueDimensions::new(self.dimensions.rows(), cols);
        self
    }

    #[inline]
    pub fn policy(&mut self, policy: SeatingPolicy<T>) -> &mut Self {
        self.policy = policy;
        self
    }

    /// Builds the engine.
    ///
    /// # Errors
    ///
    /// See `ReservationEngine::new`.
    #[inline]
    pub fn build(self) -> Result<ReservationEngine<T>, PolicyError> {
        ReservationEngine::new(self.dimensions, self.policy)
    }
}
