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


//! # Marquee Core
//!
//! Foundational primitives shared by every crate of the marquee seating
//! workspace.
//!
//! ## Modules
//!
//! - `index`: phantom-tagged, zero-cost indices (`TypedIndex<T>`) so a row
//!   can never be passed where a column is expected.
//! - `span`: `SeatSpan`, a closed-open run of columns `[start, end)` inside a
//!   single row. Window results, decomposition runs and buffer writes are all
//!   expressed as spans.
//! - `num`: the `SeatWeight` bound collecting the integer capabilities the
//!   weight model and the searches rely on.

pub mod index;
pub mod num;
pub mod span;
