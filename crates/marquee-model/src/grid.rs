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


//! Mutable seat state.
//!
//! `SeatGrid` is the only mutable state of a reservation session. Every seat
//! is `Empty`, `Assigned` or `Buffer`, the grid starts all-`Empty`, and it
//! changes solely through `SeatGrid::mark_assigned`, which places a block of
//! seats and surrounds it with social-distancing buffers:
//!
//! - the same columns in the row in front and the row behind,
//! - `col_buffer` seats on either side within the same row.
//!
//! Buffer writes never overwrite an `Assigned` seat. A `Buffer` seat is not
//! assignable by the searches, but `mark_assigned` may turn it into
//! `Assigned`; that happens when several runs of one multi-range placement
//! sit next to each other.

use crate::{
    code::SeatCode,
    index::{ColIndex, RowIndex},
    policy::VenueDimensions,
};
use marquee_core::span::ColumnSpan;

/// The status of a single seat.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum SeatStatus {
    /// Available for assignment.
    #[default]
    Empty,
    /// Occupied by a confirmed reservation.
    Assigned,
    /// Blocked as a social-distancing margin.
    Buffer,
}

impl SeatStatus {
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, SeatStatus::Empty)
    }

    #[inline]
    pub const fn is_assigned(self) -> bool {
        matches!(self, SeatStatus::Assigned)
    }

    #[inline]
    pub const fn is_buffer(self) -> bool {
        matches!(self, SeatStatus::Buffer)
    }

    /// The digit used when rendering the grid.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            SeatStatus::Empty => '0',
            SeatStatus::Assigned => '1',
            SeatStatus::Buffer => '2',
        }
    }
}

impl std::fmt::Display for SeatStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeatStatus::Empty => write!(f, "Empty"),
            SeatStatus::Assigned => write!(f, "Assigned"),
            SeatStatus::Buffer => write!(f, "Buffer"),
        }
    }
}

/// A contiguous block of seats within one row.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct SeatBlock {
    row: RowIndex,
    columns: ColumnSpan,
}

impl SeatBlock {
    #[inline]
    pub fn new(row: RowIndex, columns: ColumnSpan) -> Self {
        Self { row, columns }
    }

    /// The block of `len` seats of `row` starting at column `start`.
    #[inline]
    pub fn with_len(row: RowIndex, start: ColIndex, len: usize) -> Self {
        Self::new(row, ColumnSpan::with_len(start.get(), len))
    }

    #[inline]
    pub fn row(&self) -> RowIndex {
        self.row
    }

    #[inline]
    pub fn columns(&self) -> ColumnSpan {
        self.columns
    }

    #[inline]
    pub fn start(&self) -> ColIndex {
        ColIndex::new(self.columns.start())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// The codes of the seats of the block, left to right.
    #[inline]
    pub fn seat_codes(self) -> impl Iterator<Item = SeatCode> {
        let row = self.row;
        self.columns
            .iter()
            .map(move |col| SeatCode::new(row, ColIndex::new(col)))
    }
}

impl std::fmt::Display for SeatBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "row {} {}", self.row.get(), self.columns)
    }
}

/// The rows x cols seat states of a venue, stored row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct SeatGrid {
    dimensions: VenueDimensions,
    col_buffer: usize,
    seats: Vec<SeatStatus>, // len = rows * cols
}

impl SeatGrid {
    /// Creates an all-`Empty` grid whose assignments keep `col_buffer`
    /// buffer seats on each side.
    pub fn new(dimensions: VenueDimensions, col_buffer: usize) -> Self {
        Self {
            dimensions,
            col_buffer,
            seats: vec![SeatStatus::Empty; dimensions.num_seats()],
        }
    }

    #[inline]
    pub fn dimensions(&self) -> VenueDimensions {
        self.dimensions
    }

    #[inline]
    pub fn num_rows(&self) -> usize {
        self.dimensions.rows()
    }

    #[inline]
    pub fn num_cols(&self) -> usize {
        self.dimensions.cols()
    }

    #[inline]
    pub fn col_buffer(&self) -> usize {
        self.col_buffer
    }

    #[inline(always)]
    fn flat_index(&self, row: usize, col: usize) -> usize {
        debug_assert!(
            row < self.num_rows() && col < self.num_cols(),
            "called `SeatGrid::flat_index` with seat ({}, {}) outside a {} venue",
            row,
            col,
            self.dimensions
        );
        row * self.num_cols() + col
    }

    /// Returns the status of a seat.
    ///
    /// # Panics
    ///
    /// Panics if the seat lies outside the venue.
    #[inline]
    pub fn status(&self, row: RowIndex, col: ColIndex) -> SeatStatus {
        self.seats[self.flat_index(row.get(), col.get())]
    }

    #[inline]
    pub fn is_empty_seat(&self, row: RowIndex, col: ColIndex) -> bool {
        self.status(row, col).is_empty()
    }

    /// Returns the statuses of one row.
    #[inline]
    pub fn row(&self, row: RowIndex) -> &[SeatStatus] {
        let start = self.flat_index(row.get(), 0);
        &self.seats[start..start + self.num_cols()]
    }

    /// Iterates over the rows of the grid, front to back.
    #[inline]
    pub fn rows(&self) -> std::slice::ChunksExact<'_, SeatStatus> {
        self.seats.chunks_exact(self.num_cols())
    }

    /// Counts the seats currently in `status`.
    #[inline]
    pub fn count(&self, status: SeatStatus) -> usize {
        self.seats.iter().filter(|&&s| s == status).count()
    }

    /// Number of seats still available for assignment.
    #[inline]
    pub fn empty_seats(&self) -> usize {
        self.count(SeatStatus::Empty)
    }

    /// Iterates over the coordinates of every assigned seat.
    pub fn iter_assigned(&self) -> impl Iterator<Item = (RowIndex, ColIndex)> + '_ {
        let cols = self.num_cols();
        self.seats
            .iter()
            .enumerate()
            .filter(|(_, status)| status.is_assigned())
            .map(move |(i, _)| (RowIndex::new(i / cols), ColIndex::new(i % cols)))
    }

    #[inline]
    fn buffer_unless_assigned(&mut self, row: usize, columns: ColumnSpan) {
        for col in columns {
            let index = self.flat_index(row, col);
            if !self.seats[index].is_assigned() {
                self.seats[index] = SeatStatus::Buffer;
            }
        }
    }

    /// Assigns the seats of `block` and writes the surrounding buffers.
    ///
    /// The block's seats become `Assigned`. The same columns of the rows in
    /// front and behind, and `col_buffer` seats left and right within the
    /// row (clipped at the row ends), become `Buffer` unless they are already
    /// `Assigned`.
    ///
    /// # Panics
    ///
    /// Panics if the block reaches outside the venue. In debug builds, also
    /// panics if one of its seats is already assigned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use marquee_model::grid::{SeatBlock, SeatGrid, SeatStatus};
    /// # use marquee_model::index::{ColIndex, RowIndex};
    /// # use marquee_model::policy::VenueDimensions;
    /// let mut grid = SeatGrid::new(VenueDimensions::new(3, 8), 2);
    /// grid.mark_assigned(SeatBlock::with_len(RowIndex::new(1), ColIndex::new(3), 2));
    /// assert_eq!(grid.status(RowIndex::new(1), ColIndex::new(3)), SeatStatus::Assigned);
    /// assert_eq!(grid.status(RowIndex::new(0), ColIndex::new(4)), SeatStatus::Buffer);
    /// assert_eq!(grid.status(RowIndex::new(1), ColIndex::new(1)), SeatStatus::Buffer);
    /// assert_eq!(grid.status(RowIndex::new(1), ColIndex::new(0)), SeatStatus::Empty);
    /// ```
    pub fn mark_assigned(&mut self, block: SeatBlock) {
        let row = block.row();
        let columns = block.columns();
        assert!(
            row.get() < self.num_rows() && columns.end() <= self.num_cols(),
            "called `SeatGrid::mark_assigned` with block {} outside a {} venue",
            block,
            self.dimensions
        );

        for col in columns {
            let index = self.flat_index(row.get(), col);
            debug_assert!(
                !self.seats[index].is_assigned(),
                "called `SeatGrid::mark_assigned` on already assigned seat ({}, {})",
                row.get(),
                col
            );
            self.seats[index] = SeatStatus::Assigned;
        }

        if let Some(front) = row.checked_prev() {
            self.buffer_unless_assigned(front.get(), columns);
        }
        if let Some(behind) = row.next_below(self.num_rows()) {
            self.buffer_unless_assigned(behind.get(), columns);
        }

        if !columns.is_empty() {
            let cols = self.num_cols();
            self.buffer_unless_assigned(row.get(), columns.left_margin(self.col_buffer));
            self.buffer_unless_assigned(row.get(), columns.right_margin(self.col_buffer, cols));
        }
    }
}

impl std::fmt::Debug for SeatGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeatGrid")
            .field("dimensions", &self.dimensions)
            .field("col_buffer", &self.col_buffer)
            .field("assigned", &self.count(SeatStatus::Assigned))
            .field("buffer", &self.count(SeatStatus::Buffer))
            .finish()
    }
}

impl std::fmt::Display for SeatGrid {
    /// Renders a `SCREEN` banner followed by one line per row, `0` for empty,
    /// `1` for assigned and `2` for buffer seats.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = (2 * self.num_cols()).saturating_sub(1);
        writeln!(f, "{:^width$}", "SCREEN")?;
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(|s| s.symbol().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(i: usize) -> RowIndex {
        RowIndex::new(i)
    }

    fn c(i: usize) -> ColIndex {
        ColIndex::new(i)
    }

    fn block(row: usize, start: usize, len: usize) -> SeatBlock {
        SeatBlock::with_len(r(row), c(start), len)
    }

    fn row_symbols(grid: &SeatGrid, row: usize) -> String {
        grid.row(r(row)).iter().map(|s| s.symbol()).collect()
    }

    #[test]
    fn test_new_grid_is_empty() {
        let grid = SeatGrid::new(VenueDimensions::new(4, 5), 3);
        assert_eq!(grid.empty_seats(), 20);
        assert_eq!(grid.count(SeatStatus::Assigned), 0);
        assert_eq!(grid.iter_assigned().count(), 0);
        assert_eq!(grid.col_buffer(), 3);
    }

    #[test]
    fn test_mark_assigned_writes_all_buffers() {
        let mut grid = SeatGrid::new(VenueDimensions::new(3, 12), 3);
        grid.mark_assigned(block(1, 5, 2));

        assert_eq!(row_symbols(&grid, 0), "000002200000");
        assert_eq!(row_symbols(&grid, 1), "002221122200");
        assert_eq!(row_symbols(&grid, 2), "000002200000");
    }

    #[test]
    fn test_margins_clip_at_venue_edges() {
        let mut grid = SeatGrid::new(VenueDimensions::new(2, 6), 3);
        grid.mark_assigned(block(0, 0, 2));

        assert_eq!(row_symbols(&grid, 0), "112220");
        assert_eq!(row_symbols(&grid, 1), "220000");
    }

    #[test]
    fn test_buffers_never_overwrite_assigned_seats() {
        let mut grid = SeatGrid::new(VenueDimensions::new(3, 10), 3);
        grid.mark_assigned(block(0, 0, 2));
        // Row 1 columns 0..2 became buffer; assigning row 1 turns them into seats.
        grid.mark_assigned(block(1, 0, 2));
        // The row-0 seats above must stay assigned.
        assert_eq!(grid.status(r(0), c(0)), SeatStatus::Assigned);
        assert_eq!(grid.status(r(0), c(1)), SeatStatus::Assigned);
        assert_eq!(grid.status(r(1), c(0)), SeatStatus::Assigned);

        // Neighbouring block in the same row keeps its seats as well.
        grid.mark_assigned(block(2, 5, 1));
        grid.mark_assigned(block(2, 6, 1));
        assert_eq!(grid.status(r(2), c(5)), SeatStatus::Assigned);
        assert_eq!(grid.status(r(2), c(6)), SeatStatus::Assigned);
        assert_eq!(grid.count(SeatStatus::Assigned), 6);
    }

    #[test]
    fn test_zero_col_buffer_only_buffers_vertically() {
        let mut grid = SeatGrid::new(VenueDimensions::new(3, 5), 0);
        grid.mark_assigned(block(1, 1, 3));
        assert_eq!(row_symbols(&grid, 0), "02220");
        assert_eq!(row_symbols(&grid, 1), "01110");
        assert_eq!(row_symbols(&grid, 2), "02220");
    }

    #[test]
    fn test_iter_assigned_reports_coordinates() {
        let mut grid = SeatGrid::new(VenueDimensions::new(3, 5), 1);
        grid.mark_assigned(block(2, 3, 2));
        let seats: Vec<(usize, usize)> = grid
            .iter_assigned()
            .map(|(row, col)| (row.get(), col.get()))
            .collect();
        assert_eq!(seats, vec![(2, 3), (2, 4)]);
    }

    #[test]
    #[should_panic(expected = "outside a 2x4 venue")]
    fn test_mark_assigned_outside_venue_panics() {
        let mut grid = SeatGrid::new(VenueDimensions::new(2, 4), 1);
        grid.mark_assigned(block(0, 3, 2));
    }

    #[test]
    fn test_display_renders_banner_and_rows() {
        let mut grid = SeatGrid::new(VenueDimensions::new(2, 4), 1);
        grid.mark_assigned(block(0, 0, 1));
        let rendered = grid.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0].trim(), "SCREEN");
        assert_eq!(lines[1], "1 2 0 0");
        assert_eq!(lines[2], "2 0 0 0");
    }

    #[test]
    fn test_block_seat_codes() {
        let codes: Vec<String> = block(2, 4, 3).seat_codes().map(|c| c.to_string()).collect();
        assert_eq!(codes, vec!["C4", "C5", "C6"]);
    }
}
