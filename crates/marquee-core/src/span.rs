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


//! Closed-open column spans.
//!
//! `ColumnSpan` describes the seats `[start, end)` of a single row. Besides
//! plain measurement it knows how to compute the clipped margins on either
//! side of itself, which is exactly what social-distancing buffers need.

use std::iter::FusedIterator;
use std::ops::Range;

/// A half-open run of columns `[start, end)`.
///
/// # Invariants
///
/// `start <= end` always holds.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ColumnSpan {
    start: usize,
    end: usize,
}

impl ColumnSpan {
    /// Creates a new span.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    ///
    /// ```rust
    /// # use marquee_core::span::ColumnSpan;
    /// let span = ColumnSpan::new(2, 6);
    /// assert_eq!(span.len(), 4);
    /// ```
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        assert!(
            start <= end,
            "called `ColumnSpan::new` with start greater than end: {} > {}",
            start,
            end
        );
        Self { start, end }
    }

    /// Creates the span of `len` columns beginning at `start`.
    #[inline]
    pub fn with_len(start: usize, len: usize) -> Self {
        Self {
            start,
            end: start + len,
        }
    }

    #[inline]
    pub const fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub const fn end(&self) -> usize {
        self.end
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub const fn contains(&self, column: usize) -> bool {
        self.start <= column && column < self.end
    }

    /// Keeps the first `len` columns of the span.
    ///
    /// ```rust
    /// # use marquee_core::span::ColumnSpan;
    /// let span = ColumnSpan::new(4, 9).truncated(2);
    /// assert_eq!(span, ColumnSpan::new(4, 6));
    /// ```
    #[inline]
    pub fn truncated(&self, len: usize) -> Self {
        Self::with_len(self.start, len.min(self.len()))
    }

    /// Returns up to `width` columns directly left of the span, clipped at column zero.
    #[inline]
    pub fn left_margin(&self, width: usize) -> Self {
        Self::new(self.start.saturating_sub(width), self.start)
    }

    /// Returns up to `width` columns directly right of the span, clipped at `bound`.
    ///
    /// ```rust
    /// # use marquee_core::span::ColumnSpan;
    /// let span = ColumnSpan::new(1, 3);
    /// assert_eq!(span.left_margin(3), ColumnSpan::new(0, 1));
    /// assert_eq!(span.right_margin(3, 4), ColumnSpan::new(3, 4));
    /// ```
    #[inline]
    pub fn right_margin(&self, width: usize, bound: usize) -> Self {
        let end = self.end.saturating_add(width).min(bound);
        Self::new(self.end.min(end), end)
    }

    #[inline]
    pub fn iter(&self) -> ColumnSpanIter {
        ColumnSpanIter {
            current: self.start,
            end: self.end,
        }
    }

    #[inline]
    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl std::fmt::Debug for ColumnSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

impl std::fmt::Display for ColumnSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

impl From<Range<usize>> for ColumnSpan {
    #[inline]
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl From<ColumnSpan> for Range<usize> {
    #[inline]
    fn from(span: ColumnSpan) -> Self {
        span.as_range()
    }
}

impl IntoIterator for ColumnSpan {
    type Item = usize;
    type IntoIter = ColumnSpanIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the columns of a `ColumnSpan`.
#[derive(Clone, Debug)]
pub struct ColumnSpanIter {
    current: usize,
    end: usize,
}

impl Iterator for ColumnSpanIter {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.current < self.end {
            let column = self.current;
            self.current += 1;
            Some(column)
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.current;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for ColumnSpanIter {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.current < self.end {
            self.end -= 1;
            Some(self.end)
        } else {
            None
        }
    }
}

impl ExactSizeIterator for ColumnSpanIter {}

impl FusedIterator for ColumnSpanIter {}
