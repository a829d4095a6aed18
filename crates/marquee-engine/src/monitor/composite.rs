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


//! Monitoring combinators
//!
//! `CompositeMonitor` forwards every event to its children in insertion
//! order, so logging and recording monitors can be combined without the
//! engine knowing about either.

use crate::{
    monitor::reservation_monitor::ReservationMonitor,
    outcome::{Assignment, RejectionReason},
    stats::EngineStatistics,
};
use marquee_core::num::SeatWeight;

/// A monitor that forwards every event to all of its children.
pub struct CompositeMonitor<'a, T>
where
    T: SeatWeight,
{
    monitors: Vec<Box<dyn ReservationMonitor<T> + 'a>>,
}

impl<'a, T> Default for CompositeMonitor<'a, T>
where
    T: SeatWeight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> CompositeMonitor<'a, T>
where
    T: SeatWeight,
{
    /// Creates a new empty `CompositeMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    /// Creates a new `CompositeMonitor` with room for `capacity` children.
    #[inline(always)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            monitors: Vec::with_capacity(capacity),
        }
    }

    /// Adds a monitor.
    #[inline(always)]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: ReservationMonitor<T> + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    /// Adds a boxed monitor.
    #[inline(always)]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn ReservationMonitor<T> + 'a>) {
        self.monitors.push(monitor);
    }

    #[inline(always)]
    pub fn monitors(&self) -> &[Box<dyn ReservationMonitor<T> + 'a>] {
        &self.monitors
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl<'a, T> FromIterator<Box<dyn ReservationMonitor<T> + 'a>> for CompositeMonitor<'a, T>
where
    T: SeatWeight,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn ReservationMonitor<T> + 'a>>,
    {
        Self {
            monitors: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> std::fmt::Debug for CompositeMonitor<'a, T>
where
    T: SeatWeight,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeMonitor")
            .field("monitors", &self.monitors)
            .finish()
    }
}

impl<'a, T> ReservationMonitor<T> for CompositeMonitor<'a, T>
where
    T: SeatWeight,
{
    fn name(&self) -> &str {
        "CompositeMonitor"
    }

    fn on_request(&mut self, party_size: usize, statistics: &EngineStatistics) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_request(party_size, statistics);
        }
    }

    fn on_assigned(&mut self, assignment: &Assignment<T>, statistics: &EngineStatistics) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_assigned(assignment, statistics);
        }
    }

    fn on_rejected(&mut self, reason: &RejectionReason, statistics: &EngineStatistics) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_rejected(reason, statistics);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::no_op::NoOperationMonitor;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recorder {
        label: &'static str,
        events: Rc<RefCell<Vec<String>>>,
    }

    impl ReservationMonitor<u32> for Recorder {
        fn name(&self) -> &str {
            self.label
        }

        fn on_request(&mut self, party_size: usize, _statistics: &EngineStatistics) {
            self.events
                .borrow_mut()
                .push(format!("{}:request:{}", self.label, party_size));
        }

        fn on_assigned(&mut self, assignment: &Assignment<u32>, _statistics: &EngineStatistics) {
            self.events
                .borrow_mut()
                .push(format!("{}:assigned:{}", self.label, assignment.num_seats()));
        }

        fn on_rejected(&mut self, reason: &RejectionReason, _statistics: &EngineStatistics) {
            self.events
                .borrow_mut()
                .push(format!("{}:rejected:{}", self.label, reason.requested()));
        }
    }

    #[test]
    fn test_forwards_in_insertion_order() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut composite = CompositeMonitor::with_capacity(2);
        composite.add_monitor(Recorder {
            label: "a",
            events: Rc::clone(&events),
        });
        composite.add_monitor(Recorder {
            label: "b",
            events: Rc::clone(&events),
        });
        assert_eq!(composite.len(), 2);

        let stats = EngineStatistics::default();
        composite.on_request(2, &stats);
        composite.on_assigned(&Assignment::empty(), &stats);
        composite.on_rejected(
            &RejectionReason::InsufficientCapacity {
                requested: 7,
                available: 1,
            },
            &stats,
        );

        assert_eq!(
            *events.borrow(),
            vec![
                "a:request:2",
                "b:request:2",
                "a:assigned:0",
                "b:assigned:0",
                "a:rejected:7",
                "b:rejected:7",
            ]
        );
    }

    #[test]
    fn test_from_iter_and_debug() {
        let composite: CompositeMonitor<'_, u32> = vec![
            Box::new(NoOperationMonitor::<u32>::new()) as Box<dyn ReservationMonitor<u32>>,
            Box::new(NoOperationMonitor::<u32>::new()),
        ]
        .into_iter()
        .collect();
        assert!(!composite.is_empty());
        assert_eq!(composite.monitors().len(), 2);
        assert_eq!(
            format!("{:?}", composite),
            "CompositeMonitor { monitors: [ReservationMonitor(NoOperationMonitor), ReservationMonitor(NoOperationMonitor)] }"
        );
    }
}
