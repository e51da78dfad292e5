//! Card grid geometry in terminal cells.
//!
//! The grid occupies the rows between the header block and the footer. Cards
//! are laid out row-major, `columns` per row, each [`GridGeometry::card_height`]
//! lines tall. Scrolling is by whole card rows.

use super::{Point, Viewport};
use std::ops::Range;

/// Logical pixel size of one terminal cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSize {
    pub width: f32,
    pub height: f32,
}

impl Default for CellSize {
    fn default() -> Self {
        Self {
            width: 8.0,
            height: 16.0,
        }
    }
}

impl CellSize {
    /// Pixel position of the top-left corner of cell (`col`, `row`).
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn to_point(self, col: usize, row: usize) -> Point {
        Point::new(col as f32 * self.width, row as f32 * self.height)
    }

    /// Pixel size of a `cols` x `rows` terminal.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn viewport(self, cols: usize, rows: usize) -> Viewport {
        Viewport::new(cols as f32 * self.width, rows as f32 * self.height)
    }

    /// Converts a horizontal pixel distance to whole cells, rounding toward
    /// zero.
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn to_cols(self, px: f32) -> i32 {
        if self.width <= 0.0 {
            return 0;
        }
        (px / self.width) as i32
    }

    /// Converts a pixel length to whole columns, rounding up.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[must_use]
    pub fn ceil_cols(self, px: f32) -> usize {
        if self.width <= 0.0 || px <= 0.0 {
            return 0;
        }
        (px / self.width).ceil() as usize
    }

    /// Converts a pixel length to whole rows, rounding up.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[must_use]
    pub fn ceil_rows(self, px: f32) -> usize {
        if self.height <= 0.0 || px <= 0.0 {
            return 0;
        }
        (px / self.height).ceil() as usize
    }

    /// Cell containing the pixel `point`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[must_use]
    pub fn to_cell(self, point: Point) -> (usize, usize) {
        let col = if self.width > 0.0 { (point.x / self.width).max(0.0) } else { 0.0 };
        let row = if self.height > 0.0 { (point.y / self.height).max(0.0) } else { 0.0 };
        (col as usize, row as usize)
    }
}

/// A rectangle in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    #[must_use]
    pub const fn contains(&self, col: usize, row: usize) -> bool {
        col >= self.x && col < self.x + self.width && row >= self.y && row < self.y + self.height
    }
}

/// Placement of the card grid inside the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    /// Terminal width in cells.
    pub cols: usize,
    /// First terminal row of the grid area.
    pub top: usize,
    /// Number of terminal rows available to the grid.
    pub height: usize,
    /// Cards per row.
    pub columns: usize,
    /// Lines per card, borders included.
    pub card_height: usize,
    /// Blank columns between adjacent cards.
    pub gutter: usize,
}

impl GridGeometry {
    /// Default card height: border, name, title, contact line, links, border.
    pub const CARD_HEIGHT: usize = 6;
    pub const GUTTER: usize = 1;

    /// Builds the geometry for a `cols` x `rows` terminal whose grid starts
    /// at row `top` and leaves `bottom` rows for the footer.
    #[must_use]
    pub fn new(cols: usize, rows: usize, columns: u8, top: usize, bottom: usize) -> Self {
        Self {
            cols,
            top,
            height: rows.saturating_sub(top + bottom),
            columns: usize::from(columns.max(1)),
            card_height: Self::CARD_HEIGHT,
            gutter: Self::GUTTER,
        }
    }

    /// Width of one card in cells.
    #[must_use]
    pub fn card_width(&self) -> usize {
        let gutters = self.gutter * (self.columns - 1);
        self.cols.saturating_sub(gutters) / self.columns
    }

    /// Number of whole card rows that fit in the grid area (at least one).
    #[must_use]
    pub fn visible_rows(&self) -> usize {
        (self.height / self.card_height.max(1)).max(1)
    }

    /// Indices of the cards drawn when the grid is scrolled to `scroll_row`.
    #[must_use]
    pub fn visible_range(&self, scroll_row: usize, total: usize) -> Range<usize> {
        let start = (scroll_row * self.columns).min(total);
        let end = (start + self.visible_rows() * self.columns).min(total);
        start..end
    }

    /// Screen rectangle of card `index`, or `None` when it is scrolled out.
    #[must_use]
    pub fn card_rect(&self, index: usize, scroll_row: usize) -> Option<Rect> {
        let row = index / self.columns;
        if row < scroll_row || row >= scroll_row + self.visible_rows() {
            return None;
        }
        let col = index % self.columns;
        let width = self.card_width();

        Some(Rect {
            x: col * (width + self.gutter),
            y: self.top + (row - scroll_row) * self.card_height,
            width,
            height: self.card_height,
        })
    }

    /// Index of the card under cell (`col`, `row`).
    #[must_use]
    pub fn hit_test(&self, col: usize, row: usize, scroll_row: usize, total: usize) -> Option<usize> {
        self.visible_range(scroll_row, total)
            .find(|&index| self.card_rect(index, scroll_row).is_some_and(|r| r.contains(col, row)))
    }

    /// Scroll row that keeps card `selected` visible, moving as little as
    /// possible from `scroll_row`.
    #[must_use]
    pub fn scroll_to_show(&self, selected: usize, scroll_row: usize) -> usize {
        let row = selected / self.columns;
        let visible = self.visible_rows();

        if row < scroll_row {
            row
        } else if row >= scroll_row + visible {
            row + 1 - visible
        } else {
            scroll_row
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(columns: u8) -> GridGeometry {
        // 80x24 terminal, header block of 4 rows, footer of 2: 18 grid rows.
        GridGeometry::new(80, 24, columns, 4, 2)
    }

    #[test]
    fn cards_split_the_width() {
        assert_eq!(grid(1).card_width(), 80);
        assert_eq!(grid(2).card_width(), 39);
        assert_eq!(grid(3).card_width(), 26);
    }

    #[test]
    fn visible_range_covers_whole_rows() {
        let g = grid(2);
        assert_eq!(g.visible_rows(), 3);
        assert_eq!(g.visible_range(0, 5), 0..5);
        assert_eq!(g.visible_range(1, 10), 2..8);
        assert_eq!(g.visible_range(9, 5), 5..5);
    }

    #[test]
    fn card_rects_follow_row_major_order() {
        let g = grid(2);
        assert_eq!(g.card_rect(0, 0), Some(Rect { x: 0, y: 4, width: 39, height: 6 }));
        assert_eq!(g.card_rect(3, 0), Some(Rect { x: 40, y: 10, width: 39, height: 6 }));
        assert_eq!(g.card_rect(3, 1), Some(Rect { x: 40, y: 4, width: 39, height: 6 }));
        assert_eq!(g.card_rect(0, 1), None);
    }

    #[test]
    fn hit_test_finds_card_and_skips_gutter() {
        let g = grid(2);
        assert_eq!(g.hit_test(5, 5, 0, 5), Some(0));
        assert_eq!(g.hit_test(45, 11, 0, 5), Some(3));
        assert_eq!(g.hit_test(39, 5, 0, 5), None);
        assert_eq!(g.hit_test(45, 17, 0, 5), None);
        assert_eq!(g.hit_test(5, 1, 0, 5), None);
    }

    #[test]
    fn scrolling_keeps_selection_visible() {
        let g = grid(1);
        assert_eq!(g.scroll_to_show(0, 0), 0);
        assert_eq!(g.scroll_to_show(2, 0), 0);
        assert_eq!(g.scroll_to_show(3, 0), 1);
        assert_eq!(g.scroll_to_show(1, 2), 1);
    }

    #[test]
    fn cell_conversions() {
        let cell = CellSize::default();
        assert_eq!(cell.to_point(10, 2), Point::new(80.0, 32.0));
        assert_eq!(cell.viewport(80, 24), Viewport::new(640.0, 384.0));
        assert_eq!(cell.to_cols(-120.0), -15);
        assert_eq!(cell.ceil_cols(200.0), 25);
        assert_eq!(cell.ceil_rows(152.0), 10);
        assert_eq!(cell.to_cell(Point::new(83.0, 40.0)), (10, 2));
    }
}
