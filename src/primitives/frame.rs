//! Frame primitive - positions a single child inside a fixed canvas.
//!
//! The canvas is `max_width x max_height`, falling back to the child's own size
//! on an unconstrained axis. A smaller child is placed by the two alignments; a
//! larger child is cropped to its top-left region. When the canvas is exactly
//! the child's size the child's grid is returned untouched.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::{Component, align, is_zero};
use crate::error::{LayoutError, Result};
use crate::renderer::Grid;
use crate::types::Alignment;

fn default_alignment() -> Alignment {
    Alignment::Center
}

/// Aligns exactly one child.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub children: Vec<Component>,
    #[serde(default = "default_alignment")]
    pub horizontal_alignment: Alignment,
    #[serde(default = "default_alignment")]
    pub vertical_alignment: Alignment,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub max_width: usize,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub max_height: usize,
}

impl Frame {
    pub fn new(child: impl Into<Component>) -> Self {
        Self {
            children: vec![child.into()],
            horizontal_alignment: default_alignment(),
            vertical_alignment: default_alignment(),
            max_width: 0,
            max_height: 0,
        }
    }

    pub fn with_alignment(mut self, horizontal: Alignment, vertical: Alignment) -> Self {
        self.horizontal_alignment = horizontal;
        self.vertical_alignment = vertical;
        self
    }

    pub fn with_max_width(mut self, max_width: usize) -> Self {
        self.max_width = max_width;
        self
    }

    pub fn with_max_height(mut self, max_height: usize) -> Self {
        self.max_height = max_height;
        self
    }

    /// The framed child.
    pub fn child(&self) -> Result<&Component> {
        match self.children.as_slice() {
            [child] => Ok(child),
            children => Err(LayoutError::FrameChildCount(children.len())),
        }
    }

    pub fn render(&self) -> Result<Cow<'_, Grid>> {
        let child = self.child()?;
        for alignment in [self.horizontal_alignment, self.vertical_alignment] {
            if alignment == Alignment::Justify {
                return Err(LayoutError::InvalidAlignment {
                    alignment,
                    context: "frame",
                });
            }
        }

        let grid = child.render()?;
        let width = if self.max_width > 0 { self.max_width } else { grid.width() };
        let height = if self.max_height > 0 { self.max_height } else { grid.height() };

        if width == grid.width() && height == grid.height() {
            return Ok(grid);
        }

        if grid.width() > width || grid.height() > height {
            debug!(
                child_width = grid.width(),
                child_height = grid.height(),
                width,
                height,
                "cropping framed child"
            );
        }

        let x = align(self.horizontal_alignment, width, grid.width(), "frame")?.max(0);
        let y = align(self.vertical_alignment, height, grid.height(), "frame")?.max(0);

        let mut canvas = Grid::try_new(width, height)?;
        canvas.draw_grid(&grid, x, y)?;

        trace!(width, height, x, y, "rendered frame");
        Ok(Cow::Owned(canvas))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{Raw, Text};

    fn hash() -> Component {
        Raw::new(Grid::from_line_delimited_string("#").unwrap()).into()
    }

    fn framed(horizontal: Alignment, vertical: Alignment) -> String {
        Frame::new(hash())
            .with_alignment(horizontal, vertical)
            .with_max_width(3)
            .with_max_height(3)
            .render()
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_alignment_positions_child() {
        assert_eq!(framed(Alignment::Left, Alignment::Left), "#  \n   \n   ");
        assert_eq!(framed(Alignment::Center, Alignment::Center), "   \n # \n   ");
        assert_eq!(framed(Alignment::Right, Alignment::Right), "   \n   \n  #");
        assert_eq!(framed(Alignment::Right, Alignment::Left), "  #\n   \n   ");
    }

    #[test]
    fn test_larger_child_is_cropped() {
        let child = Raw::new(Grid::from_line_delimited_string("#.\n..").unwrap());
        for alignment in [Alignment::Left, Alignment::Center, Alignment::Right] {
            let frame = Frame::new(child.clone())
                .with_alignment(alignment, alignment)
                .with_max_width(1)
                .with_max_height(1);
            assert_eq!(frame.render().unwrap().to_string(), "#");
        }
    }

    #[test]
    fn test_passes_through_matching_size() {
        let child = Raw::new(Grid::from_line_delimited_string("ab\ncd").unwrap());
        let frame = Frame::new(child.clone()).with_max_width(2).with_max_height(2);
        assert!(matches!(frame.render().unwrap(), Cow::Borrowed(_)));

        let frame = Frame::new(child);
        let rendered = frame.render().unwrap();
        assert!(matches!(rendered, Cow::Borrowed(_)));
        assert_eq!(rendered.to_string(), "ab\ncd");
    }

    #[test]
    fn test_single_axis_constraint() {
        let frame = Frame::new(Text::new("ab")).with_max_height(3);
        assert_eq!(frame.render().unwrap().to_string(), "  \nab\n  ");
    }

    #[test]
    fn test_child_count_is_validated() {
        let mut frame = Frame::new(hash());
        frame.children.push(hash());
        assert!(matches!(frame.render().unwrap_err(), LayoutError::FrameChildCount(2)));

        frame.children.clear();
        assert!(matches!(frame.render().unwrap_err(), LayoutError::FrameChildCount(0)));
    }

    #[test]
    fn test_huge_frame_is_an_error() {
        let frame = Frame::new(hash()).with_max_width(usize::MAX);
        assert!(matches!(frame.render(), Err(LayoutError::GridTooLarge { .. })));

        let frame = Frame::new(hash()).with_max_height(i32::MAX as usize + 1);
        assert!(matches!(frame.render(), Err(LayoutError::GridTooLarge { .. })));
    }

    #[test]
    fn test_justify_is_rejected() {
        let frame = Frame::new(hash()).with_alignment(Alignment::Justify, Alignment::Left);
        assert!(matches!(
            frame.render().unwrap_err(),
            LayoutError::InvalidAlignment { context: "frame", .. }
        ));
    }
}
