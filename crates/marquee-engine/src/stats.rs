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


use crate::outcome::{Assignment, PlacementStrategy, RejectionReason};

/// Counters collected by a `ReservationEngine` over its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineStatistics {
    /// Total requests received.
    pub requests: u64,
    /// Requests placed as one contiguous run.
    pub single_window_placements: u64,
    /// Requests placed across several runs.
    pub multi_range_placements: u64,
    /// Requests for zero seats.
    pub empty_placements: u64,
    /// Rejected because the party exceeded the policy maximum.
    pub rejected_too_large: u64,
    /// Rejected because too few empty seats were left.
    pub rejected_insufficient_capacity: u64,
    /// Seats assigned over all successful requests.
    pub seats_assigned: u64,
}

impl EngineStatistics {
    #[inline]
    pub fn on_request(&mut self) {
        self.requests = self.requests.saturating_add(1);
    }

    /// Records a successful placement.
    #[inline]
    pub fn on_assigned<T>(&mut self, assignment: &Assignment<T>)
    where
        T: marquee_core::num::SeatWeight,
    {
        let counter = match assignment.strategy() {
            PlacementStrategy::SingleWindow => &mut self.single_window_placements,
            PlacementStrategy::MultiRange => &mut self.multi_range_placements,
            PlacementStrategy::Empty => &mut self.empty_placements,
        };
        *counter = counter.saturating_add(1);
        self.seats_assigned = self
            .seats_assigned
            .saturating_add(assignment.num_seats() as u64);
    }

    #[inline]
    pub fn on_rejected(&mut self, reason: &RejectionReason) {
        let counter = match reason {
            RejectionReason::TooLarge { .. } => &mut self.rejected_too_large,
            RejectionReason::InsufficientCapacity { .. } => {
                &mut self.rejected_insufficient_capacity
            }
        };
        *counter = counter.saturating_add(1);
    }

    /// Successful requests, empty parties included.
    #[inline]
    pub fn successes(&self) -> u64 {
        self.single_window_placements
            .saturating_add(self.multi_range_placements)
            .saturating_add(self.empty_placements)
    }

    #[inline]
    pub fn rejections(&self) -> u64 {
        self.rejected_too_large
            .saturating_add(self.rejected_insufficient_capacity)
    }
}

impl std::fmt::Display for EngineStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Marquee Reservation Statistics:")?;
        writeln!(f, "  Requests:              {}", self.requests)?;
        writeln!(f, "  Single-window:         {}", self.single_window_placements)?;
        writeln!(f, "  Multi-range:           {}", self.multi_range_placements)?;
        writeln!(f, "  Empty parties:         {}", self.empty_placements)?;
        writeln!(f, "  Rejected (too large):  {}", self.rejected_too_large)?;
        writeln!(f, "  Rejected (capacity):   {}", self.rejected_insufficient_capacity)?;
        writeln!(f, "  Seats assigned:        {}", self.seats_assigned)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_model::{
        grid::SeatBlock,
        index::{ColIndex, RowIndex},
    };
    use marquee_search::score::ScoredBlock;

    #[test]
    fn test_counts_by_strategy_and_reason() {
        let mut stats = EngineStatistics::default();
        let window = Assignment::new(
            PlacementStrategy::SingleWindow,
            vec![ScoredBlock::new(
                SeatBlock::with_len(RowIndex::new(0), ColIndex::new(0), 4),
                10u32,
            )],
        );

        for _ in 0..4 {
            stats.on_request();
        }
        stats.on_assigned(&window);
        stats.on_assigned(&Assignment::<u32>::empty());
        stats.on_rejected(&RejectionReason::TooLarge {
            requested: 9,
            max: 8,
        });
        stats.on_rejected(&RejectionReason::InsufficientCapacity {
            requested: 3,
            available: 0,
        });

        assert_eq!(stats.requests, 4);
        assert_eq!(stats.single_window_placements, 1);
        assert_eq!(stats.empty_placements, 1);
        assert_eq!(stats.multi_range_placements, 0);
        assert_eq!(stats.seats_assigned, 4);
        assert_eq!(stats.successes(), 2);
        assert_eq!(stats.rejections(), 2);
    }

    #[test]
    fn test_display_lists_counters() {
        let stats = EngineStatistics {
            requests: 7,
            seats_assigned: 12,
            ..Default::default()
        };
        let text = stats.to_string();
        assert!(text.starts_with("Marquee Reservation Statistics:"));
        assert!(text.contains("Requests:              7"));
        assert!(text.contains("Seats assigned:        12"));
    }

    #[test]
    fn test_counters_saturate() {
        let mut stats = EngineStatistics {
            requests: u64::MAX,
            ..Default::default()
        };
        stats.on_request();
        assert_eq!(stats.requests, u64::MAX);
    }
}
