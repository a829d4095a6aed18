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


//! Request logging through `tracing`.
//!
//! `TracingMonitor` emits one `debug` event per incoming request, one `info`
//! event per seated party and one `warn` event per rejection. Where the
//! events end up is decided by the subscriber the binary installs.

use crate::{
    monitor::reservation_monitor::ReservationMonitor,
    outcome::{Assignment, RejectionReason},
    stats::EngineStatistics,
};
use marquee_core::num::SeatWeight;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingMonitor<T>
where
    T: SeatWeight,
{
    include_seat_codes: bool,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> TracingMonitor<T>
where
    T: SeatWeight,
{
    /// Creates a monitor; `include_seat_codes` adds the granted seat codes to
    /// every assignment event.
    pub fn new(include_seat_codes: bool) -> Self {
        Self {
            include_seat_codes,
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<T> Default for TracingMonitor<T>
where
    T: SeatWeight,
{
    fn default() -> Self {
        Self::new(true)
    }
}

impl<T> std::fmt::Display for TracingMonitor<T>
where
    T: SeatWeight,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "TracingMonitor(include_seat_codes: {})",
            self.include_seat_codes
        )
    }
}

impl<T> ReservationMonitor<T> for TracingMonitor<T>
where
    T: SeatWeight,
{
    fn name(&self) -> &str {
        "TracingMonitor"
    }

    fn on_request(&mut self, party_size: usize, statistics: &EngineStatistics) {
        tracing::debug!(
            request = statistics.requests,
            party_size,
            "reservation requested"
        );
    }

    fn on_assigned(&mut self, assignment: &Assignment<T>, statistics: &EngineStatistics) {
        if self.include_seat_codes {
            tracing::info!(
                request = statistics.requests,
                seats = assignment.num_seats(),
                strategy = %assignment.strategy(),
                weight = %assignment.total_weight(),
                codes = %assignment,
                "reservation seated"
            );
        } else {
            tracing::info!(
                request = statistics.requests,
                seats = assignment.num_seats(),
                strategy = %assignment.strategy(),
                weight = %assignment.total_weight(),
                "reservation seated"
            );
        }
    }

    fn on_rejected(&mut self, reason: &RejectionReason, statistics: &EngineStatistics) {
        tracing::warn!(
            request = statistics.requests,
            party_size = reason.requested(),
            %reason,
            "reservation rejected"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_monitor_accepts_events_without_subscriber() {
        let mut monitor = TracingMonitor::<u32>::default();
        let stats = EngineStatistics::default();
        monitor.on_request(3, &stats);
        monitor.on_assigned(&Assignment::empty(), &stats);
        monitor.on_rejected(
            &RejectionReason::TooLarge {
                requested: 3,
                max: 2,
            },
            &stats,
        );
        assert_eq!(monitor.name(), "TracingMonitor");
        assert_eq!(
            monitor.to_string(),
            "TracingMonitor(include_seat_codes: true)"
        );
    }
}
