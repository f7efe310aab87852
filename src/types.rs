//! Core types for spark-diagram.
//!
//! These types define the vocabulary every layer shares: how content is aligned,
//! which axis a flow runs along, how much padding a region carries, and which
//! edges of a rectangle are visible.

use serde::{Deserialize, Serialize};

// =============================================================================
// Cells
// =============================================================================

/// The blank cell. Every fresh [`Grid`](crate::Grid) is filled with it.
pub const BLANK: char = ' ';

// =============================================================================
// Alignment
// =============================================================================

/// Alignment of content along one axis.
///
/// `Left`/`Right` read as top/bottom when applied to a vertical axis.
/// `Justify` distributes free space between several items and is only
/// meaningful where there is more than one item to spread out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    /// Offset of an item of size `item` inside a span of size `outer`.
    ///
    /// Returns `None` for [`Alignment::Justify`], which has no single-item meaning.
    /// The result is negative when the item is larger than the span.
    pub const fn offset(self, outer: i32, item: i32) -> Option<i32> {
        match self {
            Self::Left => Some(0),
            Self::Center => Some((outer - item) / 2),
            Self::Right => Some(outer - item),
            Self::Justify => None,
        }
    }
}

impl std::fmt::Display for Alignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Justify => "justify",
        };
        f.write_str(name)
    }
}

// =============================================================================
// Direction
// =============================================================================

/// Primary axis of a [`Flow`](crate::Flow).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Items run left to right; rows stack downwards.
    #[default]
    Horizontal,
    /// Items run top to bottom; columns stack rightwards.
    Vertical,
}

impl Direction {
    /// Check if the primary axis is the x axis.
    pub const fn is_horizontal(&self) -> bool {
        matches!(self, Self::Horizontal)
    }

    /// Split a (width, height) pair into (primary, secondary).
    #[inline]
    pub const fn to_axes(&self, width: usize, height: usize) -> (usize, usize) {
        match self {
            Self::Horizontal => (width, height),
            Self::Vertical => (height, width),
        }
    }

    /// Map a (primary, secondary) position back to (x, y).
    #[inline]
    pub const fn to_xy(&self, primary: i32, secondary: i32) -> (i32, i32) {
        match self {
            Self::Horizontal => (primary, secondary),
            Self::Vertical => (secondary, primary),
        }
    }
}

// =============================================================================
// Padding
// =============================================================================

/// Padding around a region, in cells.
///
/// This is taffy's layout rectangle; `left`, `right`, `top` and `bottom` are
/// independent.
pub type Padding = taffy::geometry::Rect<usize>;

/// Build a [`Padding`] in CSS order: top, right, bottom, left.
pub const fn padding(top: usize, right: usize, bottom: usize, left: usize) -> Padding {
    Padding {
        left,
        right,
        top,
        bottom,
    }
}

/// Padding of zero on every side.
pub const fn no_padding() -> Padding {
    padding(0, 0, 0, 0)
}

// =============================================================================
// Rectangle edges (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Edges of a rectangle outline.
    ///
    /// Combine with bitwise OR: `Edges::LEFT | Edges::TOP`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Edges: u8 {
        const NONE = 0;
        const LEFT = 1 << 0;
        const TOP = 1 << 1;
        const RIGHT = 1 << 2;
        const BOTTOM = 1 << 3;
        const ALL = Self::LEFT.bits() | Self::TOP.bits() | Self::RIGHT.bits() | Self::BOTTOM.bits();
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_offsets() {
        assert_eq!(Alignment::Left.offset(10, 4), Some(0));
        assert_eq!(Alignment::Center.offset(10, 4), Some(3));
        assert_eq!(Alignment::Center.offset(10, 3), Some(3));
        assert_eq!(Alignment::Right.offset(10, 4), Some(6));
        assert_eq!(Alignment::Justify.offset(10, 4), None);
    }

    #[test]
    fn test_alignment_offset_oversized_item() {
        assert_eq!(Alignment::Right.offset(2, 5), Some(-3));
        assert_eq!(Alignment::Center.offset(2, 5), Some(-1));
    }

    #[test]
    fn test_direction_axes() {
        assert_eq!(Direction::Horizontal.to_axes(3, 7), (3, 7));
        assert_eq!(Direction::Vertical.to_axes(3, 7), (7, 3));
        assert_eq!(Direction::Vertical.to_xy(1, 2), (2, 1));
        assert!(Direction::default().is_horizontal());
    }

    #[test]
    fn test_padding_css_order() {
        let p = padding(1, 2, 3, 4);
        assert_eq!((p.top, p.right, p.bottom, p.left), (1, 2, 3, 4));
        assert_eq!(no_padding(), padding(0, 0, 0, 0));
    }

    #[test]
    fn test_alignment_serde_names() {
        let json = serde_json::to_string(&Alignment::Justify).unwrap();
        assert_eq!(json, "\"justify\"");
        let parsed: Direction = serde_json::from_str("\"vertical\"").unwrap();
        assert_eq!(parsed, Direction::Vertical);
    }
}
