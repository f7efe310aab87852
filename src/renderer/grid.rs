//! Grid and drawing primitives.
//!
//! The Grid is a fixed-size 2D buffer of characters. Every component renders
//! into one, and parents compose their children by blitting child grids into a
//! larger grid.
//!
//! # Design Decisions
//!
//! - **Flat storage**: `Vec<char>` with row-major indexing, `index = y * width + x`.
//! - **Strict access**: [`Grid::get_char`] and [`Grid::set_char`] reject coordinates
//!   outside the grid. Callers use them to validate coordinates they computed.
//! - **Clamped drawing**: rectangle fills and blits clip to the grid. Negative
//!   origins are fine; negative extents are an error.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::merge::{CellMerge, Overwrite};
use crate::error::{LayoutError, Result};
use crate::layout::TextFormatter;
use crate::types::{BLANK, Edges};

// =============================================================================
// Grid
// =============================================================================

/// A 2D buffer of character cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Grid {
    /// Create a new grid filled with [`BLANK`].
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![BLANK; width * height],
        }
    }

    /// Create a new blank grid whose every cell has an `i32` coordinate.
    ///
    /// Components size their canvases from document values, so the size is
    /// checked here instead of failing inside the allocation.
    pub fn try_new(width: usize, height: usize) -> Result<Self> {
        let addressable = |n: usize| i32::try_from(n).is_ok();
        if !addressable(width) || !addressable(height) || width.checked_mul(height).is_none() {
            return Err(LayoutError::GridTooLarge { width, height });
        }
        Ok(Self::new(width, height))
    }

    /// Get grid width.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get grid height.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get both dimensions.
    #[inline]
    pub fn size(&self) -> taffy::geometry::Size<usize> {
        taffy::geometry::Size {
            width: self.width,
            height: self.height,
        }
    }

    /// Check if the grid has no cells at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Convert (x, y) to flat index. Coordinates must be in bounds.
    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Check if coordinates are in bounds.
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    fn check_bounds(&self, x: i32, y: i32) -> Result<usize> {
        if self.in_bounds(x, y) {
            Ok(self.index(x as usize, y as usize))
        } else {
            Err(LayoutError::OutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Raw cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    /// Iterate over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        // chunks() rejects a zero chunk size; a zero-width grid has no cells anyway.
        self.cells.chunks(self.width.max(1))
    }

    /// Get the character at (x, y).
    ///
    /// Fails with [`LayoutError::OutOfRange`] outside `[0, width) x [0, height)`.
    pub fn get_char(&self, x: i32, y: i32) -> Result<char> {
        let idx = self.check_bounds(x, y)?;
        Ok(self.cells[idx])
    }

    /// Set the character at (x, y).
    ///
    /// Fails with [`LayoutError::OutOfRange`] outside `[0, width) x [0, height)`.
    pub fn set_char(&mut self, c: char, x: i32, y: i32) -> Result<&mut Self> {
        let idx = self.check_bounds(x, y)?;
        self.cells[idx] = c;
        Ok(self)
    }

    // =========================================================================
    // Drawing Primitives
    // =========================================================================

    /// Fill a rectangle with `c`.
    ///
    /// The rectangle is clipped to the grid: negative origins and overflowing
    /// extents are silently cut off. A negative width or height is an error.
    pub fn fill_rectangle(&mut self, c: char, x: i32, y: i32, width: i32, height: i32) -> Result<&mut Self> {
        check_extent(width, height)?;

        let cols = clip_span(x, width, self.width);
        let rows = clip_span(y, height, self.height);

        for row in rows {
            let start = self.index(cols.start, row);
            let end = self.index(cols.end, row);
            self.cells[start..end].fill(c);
        }

        Ok(self)
    }

    /// Draw a 1-cell outline of a rectangle. The interior is untouched.
    ///
    /// Each edge is drawn only if it lies within the grid, so an outline that
    /// overflows the grid on one side loses that side entirely.
    pub fn draw_rectangle(&mut self, c: char, x: i32, y: i32, width: i32, height: i32) -> Result<&mut Self> {
        check_extent(width, height)?;
        if width == 0 || height == 0 {
            return Ok(self);
        }

        let right = x.saturating_add(width - 1);
        let bottom = y.saturating_add(height - 1);
        let edges = self.visible_edges(x, y, right, bottom);

        if edges.contains(Edges::LEFT) {
            self.fill_rectangle(c, x, y, 1, height)?;
        }
        if edges.contains(Edges::TOP) {
            self.fill_rectangle(c, x, y, width, 1)?;
        }
        if edges.contains(Edges::RIGHT) {
            self.fill_rectangle(c, right, y, 1, height)?;
        }
        if edges.contains(Edges::BOTTOM) {
            self.fill_rectangle(c, x, bottom, width, 1)?;
        }

        Ok(self)
    }

    /// Edges of the outline spanning columns `left..=right` and rows `top..=bottom`
    /// that fall inside the grid.
    fn visible_edges(&self, left: i32, top: i32, right: i32, bottom: i32) -> Edges {
        let mut edges = Edges::NONE;
        if left >= 0 {
            edges |= Edges::LEFT;
        }
        if top >= 0 {
            edges |= Edges::TOP;
        }
        if (right as i64) < self.width as i64 {
            edges |= Edges::RIGHT;
        }
        if (bottom as i64) < self.height as i64 {
            edges |= Edges::BOTTOM;
        }
        edges
    }

    /// Blit all of `source` onto this grid at (x, y), overwriting.
    pub fn draw_grid(&mut self, source: &Grid, x: i32, y: i32) -> Result<&mut Self> {
        let width = i32::try_from(source.width).unwrap_or(i32::MAX);
        let height = i32::try_from(source.height).unwrap_or(i32::MAX);
        self.draw_grid_with(source, &Overwrite, x, y, width, height)
    }

    /// Blit the top-left `width x height` region of `source` onto this grid at (x, y).
    ///
    /// The region is clipped the same way as [`Grid::fill_rectangle`], and also
    /// to the extent of `source`. Reading always starts at the source origin, so
    /// a blit whose destination begins off-grid shows the source's top-left corner.
    /// Each destination cell becomes `merge.merge(source_cell, destination_cell)`.
    pub fn draw_grid_with(
        &mut self,
        source: &Grid,
        merge: &dyn CellMerge,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> Result<&mut Self> {
        check_extent(width, height)?;

        let width = (width as usize).min(source.width) as i32;
        let height = (height as usize).min(source.height) as i32;

        let cols = clip_span(x, width, self.width);
        let rows = clip_span(y, height, self.height);

        for (origin_y, dest_y) in rows.enumerate() {
            for (origin_x, dest_x) in cols.clone().enumerate() {
                let src = source.cells[source.index(origin_x, origin_y)];
                let idx = self.index(dest_x, dest_y);
                self.cells[idx] = merge.merge(src, self.cells[idx]);
            }
        }

        Ok(self)
    }

    /// Format `text` into a `width x height` block and write it at (x, y).
    ///
    /// The formatter decides how many lines come out (at most `height`).
    /// Cells that land outside the grid are skipped.
    pub fn draw_string(
        &mut self,
        text: &str,
        formatter: &dyn TextFormatter,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> Result<&mut Self> {
        check_extent(width, height)?;
        if width == 0 {
            return Ok(self);
        }

        let block = formatter.format(text, width as usize, height as usize);
        let w = width as usize;

        for (i, c) in block.into_iter().enumerate() {
            let cx = x.saturating_add((i % w) as i32);
            let cy = y.saturating_add((i / w) as i32);
            if self.in_bounds(cx, cy) {
                let idx = self.index(cx as usize, cy as usize);
                self.cells[idx] = c;
            }
        }

        Ok(self)
    }

    /// Copy of the top-left `width x height` region (clamped to this grid).
    pub fn cropped(&self, width: usize, height: usize) -> Grid {
        let mut grid = Grid::new(width.min(self.width), height.min(self.height));
        for (y, row) in self.rows().take(grid.height).enumerate() {
            let start = grid.index(0, y);
            grid.cells[start..start + grid.width].copy_from_slice(&row[..grid.width]);
        }
        grid
    }

    // =========================================================================
    // Text form
    // =========================================================================

    /// Parse the canonical text form: one line per row, `\n` or `\r\n` separated.
    ///
    /// Every line must have the same number of characters; that number becomes
    /// the width, and the line count becomes the height.
    pub fn from_line_delimited_string(text: &str) -> Result<Grid> {
        let lines: Vec<&str> = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();

        let width = lines.first().map_or(0, |line| line.chars().count());
        let mut cells = Vec::with_capacity(width * lines.len());

        for (i, line) in lines.iter().enumerate() {
            let before = cells.len();
            cells.extend(line.chars());
            let found = cells.len() - before;
            if found != width {
                return Err(LayoutError::RaggedLines {
                    line: i,
                    expected: width,
                    found,
                });
            }
        }

        Ok(Grid {
            width,
            height: lines.len(),
            cells,
        })
    }
}

/// Reject negative rectangle extents.
fn check_extent(width: i32, height: i32) -> Result<()> {
    if width < 0 || height < 0 {
        return Err(LayoutError::NegativeExtent { width, height });
    }
    Ok(())
}

/// Clip `start..start + extent` to `0..limit`.
fn clip_span(start: i32, extent: i32, limit: usize) -> Range<usize> {
    let limit = limit as i64;
    let lo = (start as i64).clamp(0, limit);
    let hi = (start as i64 + extent as i64).clamp(0, limit);
    lo as usize..hi.max(lo) as usize
}

impl fmt::Display for Grid {
    /// Rows joined by `\n`, no trailing newline. An empty grid is an empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                f.write_str("\n")?;
            }
            for c in row {
                fmt::Write::write_char(f, *c)?;
            }
        }

        Ok(())
    }
}

impl FromStr for Grid {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self> {
        Grid::from_line_delimited_string(s)
    }
}

impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Grid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Grid::from_line_delimited_string(&text).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::layout::{TruncationFormatter, WordSplitFormatter};
    use crate::renderer::merge::{Preserve, Union};
    use crate::types::Alignment;

    const SIZES: [(usize, usize); 3] = [(15, 10), (10, 10), (10, 15)];

    fn count(grid: &Grid, c: char) -> usize {
        grid.cells().iter().filter(|&&cell| cell == c).count()
    }

    fn filled(c: char, width: usize, height: usize) -> Grid {
        let line: String = std::iter::repeat_n(c, width).collect();
        let text = vec![line; height].join("\n");
        Grid::from_line_delimited_string(&text).unwrap()
    }

    // -------------------------------------------------------------------------
    // Text form
    // -------------------------------------------------------------------------

    #[test]
    fn test_single_line_has_no_newline() {
        assert_eq!(Grid::new(10, 1).to_string().len(), 10);
    }

    #[test]
    fn test_degenerate_grids_are_empty_strings() {
        assert_eq!(Grid::new(10, 0).to_string(), "");
        assert_eq!(Grid::new(0, 10).to_string(), "");
        assert_eq!(Grid::new(0, 0).to_string(), "");
    }

    #[test]
    fn test_singleton_lines() {
        assert_eq!(Grid::new(1, 10).to_string().len(), 2 * 10 - 1);
    }

    #[test]
    fn test_try_new_rejects_unaddressable_sizes() {
        let grid = Grid::try_new(3, 2).unwrap();
        assert_eq!(grid, Grid::new(3, 2));

        for (width, height) in [(usize::MAX, 1), (1, usize::MAX), (i32::MAX as usize + 1, 0)] {
            assert!(matches!(
                Grid::try_new(width, height),
                Err(LayoutError::GridTooLarge { .. })
            ));
        }
    }

    #[test]
    fn test_from_line_delimited_string() {
        for text in ["abcdef", "abcdef\nghijkl\nmnopqr"] {
            assert_eq!(Grid::from_line_delimited_string(text).unwrap().to_string(), text);
        }
    }

    #[test]
    fn test_from_line_delimited_string_crlf() {
        let grid: Grid = "ab\r\ncd".parse().unwrap();
        assert_eq!((grid.width(), grid.height()), (2, 2));
        assert_eq!(grid.to_string(), "ab\ncd");
    }

    #[test]
    fn test_from_line_delimited_string_ragged_fails() {
        let err = Grid::from_line_delimited_string("abcd\nef").unwrap_err();
        assert!(matches!(
            err,
            LayoutError::RaggedLines {
                line: 1,
                expected: 4,
                found: 2
            }
        ));
    }

    #[test]
    fn test_from_empty_lines() {
        let grid = Grid::from_line_delimited_string("\n\n\n").unwrap();
        assert_eq!((grid.width(), grid.height()), (0, 4));
        assert_eq!(grid.to_string(), "");
    }

    // -------------------------------------------------------------------------
    // Strict access
    // -------------------------------------------------------------------------

    #[test]
    fn test_set_and_get_every_position() {
        for (width, height) in SIZES {
            let mut grid = Grid::new(width, height);
            for i in 0..width * height {
                let (x, y) = ((i % width) as i32, (i / width) as i32);
                grid.set_char('a', x, y).unwrap();
                assert_eq!(grid.get_char(x, y).unwrap(), 'a');
            }
            assert_eq!(count(&grid, 'a'), width * height);
        }
    }

    #[test]
    fn test_out_of_range_access_fails() {
        for (width, height) in SIZES {
            let mut grid = Grid::new(width, height);
            let (w, h) = (width as i32, height as i32);
            for (x, y) in [(-1, 0), (w, 0), (0, -1), (0, h)] {
                assert!(matches!(grid.get_char(x, y), Err(LayoutError::OutOfRange { .. })));
                assert!(matches!(grid.set_char('a', x, y), Err(LayoutError::OutOfRange { .. })));
            }
        }
    }

    // -------------------------------------------------------------------------
    // fill_rectangle
    // -------------------------------------------------------------------------

    #[test]
    fn test_fill_entire_grid() {
        for (width, height) in SIZES {
            let mut grid = Grid::new(width, height);
            grid.fill_rectangle('x', 0, 0, width as i32, height as i32).unwrap();
            assert_eq!(count(&grid, 'x'), width * height);
        }
    }

    #[test]
    fn test_fill_zero_extent_fills_nothing() {
        let mut grid = Grid::new(10, 10);
        grid.fill_rectangle('x', 0, 0, 0, 10).unwrap();
        grid.fill_rectangle('x', 0, 0, 10, 0).unwrap();
        assert_eq!(count(&grid, 'x'), 0);
    }

    #[test]
    fn test_fill_first_column_and_row() {
        for (width, height) in SIZES {
            let mut grid = Grid::new(width, height);
            grid.fill_rectangle('x', 0, 0, 1, height as i32).unwrap();
            assert_eq!(count(&grid, 'x'), height);
            for y in 0..height as i32 {
                assert_eq!(grid.get_char(0, y).unwrap(), 'x');
            }

            let mut grid = Grid::new(width, height);
            grid.fill_rectangle('x', 0, 0, width as i32, 1).unwrap();
            assert_eq!(count(&grid, 'x'), width);
        }
    }

    #[test]
    fn test_fill_centred_rectangle() {
        for (width, height) in SIZES {
            let border = 3;
            let (w, h) = (width as i32 - 2 * border, height as i32 - 2 * border);
            let mut grid = Grid::new(width, height);
            grid.fill_rectangle('x', border, border, w, h).unwrap();
            assert_eq!(count(&grid, 'x'), (w * h) as usize);
            assert_eq!(grid.get_char(border, border).unwrap(), 'x');
            assert_eq!(grid.get_char(border - 1, border).unwrap(), BLANK);
        }
    }

    #[test]
    fn test_fill_exceeding_boundaries_clamps() {
        for (width, height) in SIZES {
            let mut grid = Grid::new(width, height);
            grid.fill_rectangle('x', -1, -1, width as i32 + 2, height as i32 + 2).unwrap();
            assert_eq!(count(&grid, 'x'), width * height);
        }
    }

    #[test]
    fn test_fill_negative_extent_fails() {
        let mut grid = Grid::new(3, 3);
        assert!(matches!(
            grid.fill_rectangle('x', 0, 0, -1, 1),
            Err(LayoutError::NegativeExtent { width: -1, height: 1 })
        ));
        assert!(grid.fill_rectangle('x', 0, 0, 1, -1).is_err());
    }

    #[test]
    fn test_fill_chains() {
        let mut grid = Grid::new(3, 3);
        grid.fill_rectangle('#', 0, 0, 3, 3).unwrap().fill_rectangle(' ', 1, 1, 1, 1).unwrap();
        assert_eq!(grid.to_string(), "###\n# #\n###");
    }

    // -------------------------------------------------------------------------
    // draw_rectangle
    // -------------------------------------------------------------------------

    #[test]
    fn test_draw_rectangle_outline() {
        for (width, height) in SIZES {
            let mut grid = Grid::new(width, height);
            grid.draw_rectangle('x', 0, 0, width as i32, height as i32).unwrap();
            assert_eq!(count(&grid, 'x'), 2 * width + 2 * height - 4);
            for y in 1..height as i32 - 1 {
                for x in 1..width as i32 - 1 {
                    assert_eq!(grid.get_char(x, y).unwrap(), BLANK);
                }
            }
        }
    }

    #[test]
    fn test_draw_rectangle_exceeding_all_boundaries_draws_nothing() {
        for (width, height) in SIZES {
            let mut grid = Grid::new(width, height);
            grid.draw_rectangle('x', -1, -1, width as i32 + 2, height as i32 + 2).unwrap();
            assert_eq!(count(&grid, 'x'), 0);
        }
    }

    #[test]
    fn test_draw_rectangle_exceeding_one_side() {
        for (width, height) in SIZES {
            let (w, h) = (width as i32, height as i32);

            let mut grid = Grid::new(width, height);
            grid.draw_rectangle('x', -1, 0, w + 1, h).unwrap();
            assert_eq!(count(&grid, 'x'), 2 * width + height - 2, "left");

            let mut grid = Grid::new(width, height);
            grid.draw_rectangle('x', 0, -1, w, h + 1).unwrap();
            assert_eq!(count(&grid, 'x'), 2 * height + width - 2, "top");

            let mut grid = Grid::new(width, height);
            grid.draw_rectangle('x', 0, 0, w + 1, h).unwrap();
            assert_eq!(count(&grid, 'x'), 2 * width + height - 2, "right");

            let mut grid = Grid::new(width, height);
            grid.draw_rectangle('x', 0, 0, w, h + 1).unwrap();
            assert_eq!(count(&grid, 'x'), 2 * height + width - 2, "bottom");
        }
    }

    #[test]
    fn test_draw_centred_rectangle() {
        for (width, height) in SIZES {
            let border = 3;
            let (w, h) = (width as i32 - 2 * border, height as i32 - 2 * border);
            let mut grid = Grid::new(width, height);
            grid.draw_rectangle('x', border, border, w, h).unwrap();
            assert_eq!(count(&grid, 'x'), (2 * w + 2 * h - 4) as usize);
        }
    }

    #[test]
    fn test_draw_empty_rectangle() {
        let mut grid = Grid::new(4, 4);
        grid.draw_rectangle('x', 1, 1, 0, 3).unwrap();
        assert_eq!(count(&grid, 'x'), 0);
    }

    // -------------------------------------------------------------------------
    // draw_grid
    // -------------------------------------------------------------------------

    #[test]
    fn test_draw_grid_uncropped() {
        for (width, height) in SIZES {
            let source = filled('a', width, height);
            let mut target = Grid::new(width, height);
            target.draw_grid(&source, 0, 0).unwrap();
            assert_eq!(target, source);
        }
    }

    #[test]
    fn test_draw_grid_cropped_to_nothing() {
        let source = filled('a', 10, 10);
        let mut target = Grid::new(10, 10);
        target.draw_grid_with(&source, &Overwrite, 0, 0, 0, 10).unwrap();
        target.draw_grid_with(&source, &Overwrite, 0, 0, 10, 0).unwrap();
        assert_eq!(target, Grid::new(10, 10));
    }

    #[test]
    fn test_draw_grid_crop_half() {
        for (width, height) in SIZES {
            let source = filled('a', width, height);
            let (w, h) = (width as i32, height as i32);

            let cols = width / 2;
            let mut target = Grid::new(width, height);
            target.draw_grid_with(&source, &Overwrite, 0, 0, cols as i32, h).unwrap();
            assert_eq!(count(&target, 'a'), cols * height);
            assert_eq!(count(&target, BLANK), (width - cols) * height);

            let rows = height / 2;
            let mut target = Grid::new(width, height);
            target.draw_grid_with(&source, &Overwrite, 0, 0, w, rows as i32).unwrap();
            assert_eq!(count(&target, 'a'), rows * width);
        }
    }

    #[test]
    fn test_draw_grid_offset_half() {
        for (width, height) in SIZES {
            let source = filled('a', width, height);
            let (w, h) = (width as i32, height as i32);

            let cols = width / 2;
            let mut target = Grid::new(width, height);
            target.draw_grid_with(&source, &Overwrite, cols as i32, 0, w, h).unwrap();
            assert_eq!(count(&target, 'a'), (width - cols) * height);
            assert_eq!(count(&target, BLANK), cols * height);

            let rows = height / 2;
            let mut target = Grid::new(width, height);
            target.draw_grid_with(&source, &Overwrite, 0, rows as i32, w, h).unwrap();
            assert_eq!(count(&target, 'a'), (height - rows) * width);
        }
    }

    #[test]
    fn test_draw_grid_negative_origin_reads_source_origin() {
        let source = Grid::from_line_delimited_string("ab\ncd").unwrap();
        let mut target = Grid::new(1, 1);
        target.draw_grid(&source, -1, -1).unwrap();
        assert_eq!(target.to_string(), "a");
    }

    #[test]
    fn test_draw_grid_region_larger_than_source() {
        let source = Grid::from_line_delimited_string("ab").unwrap();
        let mut target = Grid::new(4, 2);
        target.draw_grid_with(&source, &Overwrite, 1, 0, 10, 10).unwrap();
        assert_eq!(target.to_string(), " ab \n    ");
    }

    #[test]
    fn test_draw_grid_with_union() {
        let source = Grid::from_line_delimited_string("a b").unwrap();
        let mut target = Grid::from_line_delimited_string("xyz").unwrap();
        let union = Union::new([' '], Preserve::Destination);
        target.draw_grid_with(&source, &union, 0, 0, 3, 1).unwrap();
        assert_eq!(target.to_string(), "xyz");

        let union = Union::new([' '], Preserve::Origin);
        target.draw_grid_with(&source, &union, 0, 0, 3, 1).unwrap();
        assert_eq!(target.to_string(), "ayb");
    }

    // -------------------------------------------------------------------------
    // draw_string / cropped
    // -------------------------------------------------------------------------

    #[test]
    fn test_draw_string() {
        let mut grid = Grid::new(7, 3);
        grid.draw_string("dog cat", &WordSplitFormatter::new(Alignment::Right), 1, 1, 5, 2)
            .unwrap();
        assert_eq!(grid.to_string(), "       \n   dog \n   cat ");
    }

    #[test]
    fn test_draw_string_clips_to_grid() {
        let mut grid = Grid::new(3, 1);
        grid.draw_string("hello", &TruncationFormatter::new(Alignment::Left), 1, 0, 5, 1)
            .unwrap();
        assert_eq!(grid.to_string(), " he");
    }

    #[test]
    fn test_cropped() {
        let grid = Grid::from_line_delimited_string("abc\ndef\nghi").unwrap();
        assert_eq!(grid.cropped(2, 2).to_string(), "ab\nde");
        assert_eq!(grid.cropped(5, 1).to_string(), "abc");
    }

    #[test]
    fn test_serde_uses_text_form() {
        let grid = Grid::from_line_delimited_string("ab\ncd").unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, "\"ab\\ncd\"");
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
        assert!(serde_json::from_str::<Grid>("\"ab\\nc\"").is_err());
    }

    // -------------------------------------------------------------------------
    // Properties
    // -------------------------------------------------------------------------

    proptest! {
        #[test]
        fn prop_blank_grid_text_length(width in 0usize..40, height in 0usize..40) {
            let text = Grid::new(width, height).to_string();
            let expected = if width == 0 || height == 0 { 0 } else { width * height + height - 1 };
            prop_assert_eq!(text.len(), expected);
            prop_assert!(text.chars().all(|c| c == BLANK || c == '\n'));
        }

        #[test]
        fn prop_text_round_trip(lines in (1usize..12, 1usize..8).prop_flat_map(|(width, height)| {
            proptest::collection::vec(
                proptest::collection::vec(proptest::char::range('!', '~'), width),
                height,
            )
        })) {
            let text = lines
                .iter()
                .map(|line| line.iter().collect::<String>())
                .collect::<Vec<_>>()
                .join("\n");
            let grid = Grid::from_line_delimited_string(&text).unwrap();
            let again = Grid::from_line_delimited_string(&grid.to_string()).unwrap();
            prop_assert_eq!(again, grid);
        }

        #[test]
        fn prop_fill_clamps(width in 0usize..30, height in 0usize..30) {
            let mut grid = Grid::new(width, height);
            grid.fill_rectangle('x', -1, -1, width as i32 + 2, height as i32 + 2).unwrap();
            prop_assert_eq!(count(&grid, 'x'), width * height);
        }
    }
}
