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


//! # Marquee Model
//!
//! **The domain model of the marquee seating engine.**
//!
//! This crate describes a rectangular venue, how desirable each of its seats
//! is, and which seats are currently taken. It is the data layer between the
//! allocation policy (user input) and the searches in `marquee_search`.
//!
//! ## Architecture
//!
//! * **`index`**: strongly-typed `RowIndex` and `ColIndex`.
//! * **`policy`**: `SeatingPolicy` (penalties, buffer width, ideal-seat
//!   fractions, party size limit), `VenueDimensions`, and the fallible
//!   `SeatingPolicyBuilder`.
//! * **`weights`**: `WeightMatrix`, the per-seat desirability derived once from
//!   the policy.
//! * **`prefix`**: `PrefixSums`, per-row cumulative weights for O(1) range sums.
//! * **`grid`**: `SeatGrid`, the mutable `Empty`/`Assigned`/`Buffer` state and
//!   the single buffer-enforcing mutation `mark_assigned`.
//! * **`code`**: `SeatCode`, the `A0`-style label of a seat.
//! * **`loading`**: `RequestLoader`, turning `<id> <size>` lines into requests.
//!
//! ## Design Philosophy
//!
//! 1. **Type Safety**: rows and columns are distinct index types.
//! 2. **Memory Layout**: matrices are stored flattened in row-major order.
//! 3. **Fail-Fast**: the weight model and the prefix sums are validated at
//!    construction, so the searches never see an overflowing venue.

pub mod code;
pub mod grid;
pub mod index;
pub mod loading;
pub mod policy;
pub mod prefix;
pub mod weights;
