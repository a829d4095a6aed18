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


//! # Marquee Search
//!
//! **Placement searches over a seat grid.**
//!
//! Both searches are read-only: they inspect a `SeatGrid`, score candidate
//! spans through a `RangeScorer` and return the blocks they would assign.
//! Applying a placement is up to the caller (`marquee_engine`).
//!
//! * **`score`**: the `RangeScorer` seam and `ScoredBlock`, a block together
//!   with its summed weight.
//! * **`window`**: the primary strategy, the best single run of exactly `n`
//!   contiguous empty seats in any one row.
//! * **`decomposition`**: the fallback strategy, a set of disjoint runs across
//!   rows that together cover exactly `n` seats, picked greedily by score
//!   with a bounded min-heap.

pub mod decomposition;
pub mod score;
pub mod window;
