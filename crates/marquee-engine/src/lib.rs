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


//! # Marquee Engine
//!
//! **Socially-distanced seat reservations, one request at a time.**
//!
//! `ReservationEngine` owns a venue's weight model, prefix sums and seat grid
//! and answers `reserve(n)` with either an `Assignment` or a
//! `RejectionReason`. It tries the best single window first and falls back to
//! a multi-range decomposition; whichever placement it picks is applied to
//! the grid before the call returns.
//!
//! ## Modules
//!
//! * **`engine`**: `ReservationEngine` and `ReservationEngineBuilder`.
//! * **`outcome`**: `Assignment`, `PlacementStrategy` and `RejectionReason`.
//! * **`monitor`**: the `ReservationMonitor` trait with no-op, tracing and
//!   composite implementations.
//! * **`stats`**: `EngineStatistics`, counters over a session.
//! * **`session`**: `ReservationSession`, which runs a list of loaded
//!   requests through an engine and writes the resulting records.
//!
//! ## Concurrency
//!
//! `reserve` takes `&mut self`; the search and the grid mutation of one
//! request complete before the next request can start. Callers who share an
//! engine across threads wrap it in their own lock.

pub mod engine;
pub mod monitor;
pub mod outcome;
pub mod session;
pub mod stats;
