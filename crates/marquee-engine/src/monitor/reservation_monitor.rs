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


//! Reservation monitoring interface
//!
//! Every request passes through three callbacks at most: `on_request` when it
//! arrives, then exactly one of `on_assigned` or `on_rejected`. The engine's
//! statistics are passed along, already updated for the event.
//! `on_assigned` runs after the grid has been mutated.

use crate::{
    outcome::{Assignment, RejectionReason},
    stats::EngineStatistics,
};
use marquee_core::num::SeatWeight;

/// Trait for observing the requests handled by a `ReservationEngine`.
pub trait ReservationMonitor<T>
where
    T: SeatWeight,
{
    /// Returns the name of the monitor.
    fn name(&self) -> &str;
    /// Called when a request for `party_size` seats arrives.
    fn on_request(&mut self, party_size: usize, statistics: &EngineStatistics);
    /// Called after a request has been seated.
    fn on_assigned(&mut self, assignment: &Assignment<T>, statistics: &EngineStatistics);
    /// Called when a request has been turned down.
    fn on_rejected(&mut self, reason: &RejectionReason, statistics: &EngineStatistics);
}

impl<T> std::fmt::Debug for dyn ReservationMonitor<T> + '_
where
    T: SeatWeight,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ReservationMonitor({})", self.name())
    }
}

impl<T> std::fmt::Display for dyn ReservationMonitor<T> + '_
where
    T: SeatWeight,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ReservationMonitor({})", self.name())
    }
}

impl<T, M> ReservationMonitor<T> for &mut M
where
    T: SeatWeight,
    M: ReservationMonitor<T> + ?Sized,
{
    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline]
    fn on_request(&mut self, party_size: usize, statistics: &EngineStatistics) {
        (**self).on_request(party_size, statistics)
    }

    #[inline]
    fn on_assigned(&mut self, assignment: &Assignment<T>, statistics: &EngineStatistics) {
        (**self).on_assigned(assignment, statistics)
    }

    #[inline]
    fn on_rejected(&mut self, reason: &RejectionReason, statistics: &EngineStatistics) {
        (**self).on_rejected(reason, statistics)
    }
}
