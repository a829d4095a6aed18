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


use crate::{
    monitor::reservation_monitor::ReservationMonitor,
    outcome::{Assignment, RejectionReason},
    stats::EngineStatistics,
};
use marquee_core::num::SeatWeight;

/// A monitor that ignores every event.
#[repr(transparent)]
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct NoOperationMonitor<T>
where
    T: SeatWeight,
{
    _phantom: std::marker::PhantomData<T>,
}

impl<T> NoOperationMonitor<T>
where
    T: SeatWeight,
{
    /// Creates a new `NoOperationMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<T> ReservationMonitor<T> for NoOperationMonitor<T>
where
    T: SeatWeight,
{
    #[inline(always)]
    fn name(&self) -> &str {
        "NoOperationMonitor"
    }

    #[inline(always)]
    fn on_request(&mut self, _party_size: usize, _statistics: &EngineStatistics) {}

    #[inline(always)]
    fn on_assigned(&mut self, _assignment: &Assignment<T>, _statistics: &EngineStatistics) {}

    #[inline(always)]
    fn on_rejected(&mut self, _reason: &RejectionReason, _statistics: &EngineStatistics) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_op_monitor_name() {
        let monitor = NoOperationMonitor::<u32>::new();
        assert_eq!(monitor.name(), "NoOperationMonitor");
        let boxed: Box<dyn ReservationMonitor<u32>> = Box::new(monitor);
        assert_eq!(format!("{:?}", boxed), "ReservationMonitor(NoOperationMonitor)");
    }
}
