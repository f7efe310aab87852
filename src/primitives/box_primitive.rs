//! Box primitive - a bordered box with an optional title and a message.
//!
//! ```text
//! ##########
//! # Title  #   title row, truncated to one line
//! #--------#   separator, only drawn with a title
//! #        #
//! # wrapped#   message, word-wrapped
//! # message#
//! #        #
//! ##########
//! ```
//!
//! # Sizing
//!
//! The box is always `max_width` wide. Its height shrinks to fit the message,
//! but never exceeds `max_height`; a message that does not fit loses its
//! trailing lines. A zero maximum means the box sizes to its content on that
//! axis.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{LayoutError, Result};
use crate::layout::text_measure::max_line_width;
use crate::layout::{TextFormatter, TruncationFormatter, WordSplitFormatter};
use crate::renderer::Grid;
use crate::types::{Alignment, BLANK, Padding, padding};

#[inline]
fn wide(n: usize) -> i128 {
    n as i128
}

#[inline]
fn narrow(n: i128) -> i32 {
    n.clamp(i128::from(i32::MIN), i128::from(i32::MAX)) as i32
}

fn too_large(width: i128, height: i128) -> LayoutError {
    let size = |n: i128| usize::try_from(n).unwrap_or(usize::MAX);
    LayoutError::GridTooLarge { width: size(width), height: size(height) }
}

fn default_max_width() -> usize {
    40
}

fn default_max_height() -> usize {
    30
}

fn default_border() -> usize {
    1
}

fn default_border_char() -> char {
    '#'
}

fn default_separator_char() -> char {
    '-'
}

fn default_title_padding() -> Padding {
    padding(0, 1, 0, 1)
}

fn default_message_padding() -> Padding {
    padding(1, 3, 1, 3)
}

fn default_title_alignment() -> Alignment {
    Alignment::Center
}

fn default_message_alignment() -> Alignment {
    Alignment::Justify
}

/// A bordered box.
///
/// Named `BoxComponent` to stay clear of `std::boxed::Box`; its document tag is `"box"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxComponent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub message: String,
    #[serde(default = "default_title_padding")]
    pub title_padding: Padding,
    #[serde(default = "default_message_padding")]
    pub message_padding: Padding,
    #[serde(default = "default_title_alignment")]
    pub title_alignment: Alignment,
    #[serde(default = "default_message_alignment")]
    pub message_alignment: Alignment,
    #[serde(default = "default_border")]
    pub border_width: usize,
    #[serde(default = "default_border")]
    pub border_height: usize,
    #[serde(default = "default_border_char")]
    pub border_char: char,
    #[serde(default = "default_separator_char")]
    pub separator_char: char,
    #[serde(default = "default_max_width")]
    pub max_width: usize,
    #[serde(default = "default_max_height")]
    pub max_height: usize,
}

/// Positions of every region, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BoxGeometry {
    width: i32,
    height: i32,
    border_width: i32,
    border_height: i32,
    title_left: i32,
    title_top: i32,
    title_width: i32,
    separator_top: i32,
    separator_width: i32,
    message_left: i32,
    message_top: i32,
    message_width: i32,
    message_height: i32,
}

impl BoxComponent {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            title: None,
            message: message.into(),
            title_padding: default_title_padding(),
            message_padding: default_message_padding(),
            title_alignment: default_title_alignment(),
            message_alignment: default_message_alignment(),
            border_width: default_border(),
            border_height: default_border(),
            border_char: default_border_char(),
            separator_char: default_separator_char(),
            max_width: default_max_width(),
            max_height: default_max_height(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_title_padding(mut self, padding: Padding) -> Self {
        self.title_padding = padding;
        self
    }

    pub fn with_message_padding(mut self, padding: Padding) -> Self {
        self.message_padding = padding;
        self
    }

    pub fn with_title_alignment(mut self, alignment: Alignment) -> Self {
        self.title_alignment = alignment;
        self
    }

    pub fn with_message_alignment(mut self, alignment: Alignment) -> Self {
        self.message_alignment = alignment;
        self
    }

    /// Border thickness: `width` cells on the left and right, `height` on top and bottom.
    pub fn with_border(mut self, width: usize, height: usize) -> Self {
        self.border_width = width;
        self.border_height = height;
        self
    }

    pub fn with_border_char(mut self, c: char) -> Self {
        self.border_char = c;
        self
    }

    pub fn with_separator_char(mut self, c: char) -> Self {
        self.separator_char = c;
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

    /// Width when `max_width` is unconstrained: the widest of title and message rows.
    fn content_width(&self) -> i128 {
        let (bw, tp, mp) = (wide(self.border_width), &self.title_padding, &self.message_padding);
        let message = wide(max_line_width(&self.message)) + wide(mp.left) + wide(mp.right) + 2 * bw;
        let title = self.title.as_deref().map_or(0, |title| {
            wide(max_line_width(title)) + wide(tp.left) + wide(tp.right) + 2 * bw
        });
        message.max(title)
    }

    // Every field is a usize, which i128 holds with room to spare, so the
    // sums below are exact. Results are narrowed once the size is known to fit.
    fn geometry(&self) -> Result<BoxGeometry> {
        let bw = wide(self.border_width);
        let bh = wide(self.border_height);
        let tp = &self.title_padding;
        let mp = &self.message_padding;
        let has_title = self.title.is_some();

        let width = match self.max_width {
            0 => self.content_width(),
            max => wide(max),
        };
        if width > i128::from(i32::MAX) {
            return Err(too_large(width, 0));
        }

        let title_left = wide(tp.left) + bw;
        let title_top = wide(tp.top) + bh;
        let title_width = width - title_left - (wide(tp.right) + bw);

        let separator_top = if has_title { title_top + wide(tp.bottom) + 1 } else { 0 };
        let separator_width = width - 2 * bw;

        let message_left = wide(mp.left) + bw;
        let message_top = wide(mp.top) + if has_title { separator_top + 1 } else { bh };
        let message_width = width - message_left - wide(mp.right) - bw;

        if message_width < 0 || (has_title && title_width < 0) {
            return Err(LayoutError::InsufficientSpace {
                component: "box",
                detail: format!("width {width} leaves no room inside the border and padding"),
            });
        }

        let formatter = WordSplitFormatter::new(self.message_alignment);
        let measured = wide(formatter.measure_height(&self.message, narrow(message_width) as usize));

        let message_height = match self.max_height {
            0 => measured,
            max => {
                let budget = wide(max) - message_top - wide(mp.bottom) - bh;
                if budget < 0 {
                    return Err(LayoutError::InsufficientSpace {
                        component: "box",
                        detail: format!("height {max} leaves no room for the message"),
                    });
                }
                if measured > budget {
                    debug!(%measured, %budget, "box message clamped to maximum height");
                }
                measured.min(budget)
            }
        };

        let height = message_top + message_height + wide(mp.bottom) + bh;
        if height > i128::from(i32::MAX) {
            return Err(too_large(width, height));
        }

        // Both borders and every region lie inside width x height, so each
        // narrowed value below is exact.
        Ok(BoxGeometry {
            width: narrow(width),
            height: narrow(height),
            border_width: narrow(bw),
            border_height: narrow(bh),
            title_left: narrow(title_left),
            title_top: narrow(title_top),
            title_width: narrow(title_width),
            separator_top: narrow(separator_top),
            separator_width: narrow(separator_width),
            message_left: narrow(message_left),
            message_top: narrow(message_top),
            message_width: narrow(message_width),
            message_height: narrow(message_height),
        })
    }

    pub fn render(&self) -> Result<Cow<'_, Grid>> {
        let geo = self.geometry()?;
        let (bw, bh) = (geo.border_width, geo.border_height);

        let mut grid = Grid::try_new(geo.width as usize, geo.height as usize)?;
        grid.fill_rectangle(self.border_char, 0, 0, geo.width, geo.height)?;
        grid.fill_rectangle(
            BLANK,
            bw,
            bh,
            (geo.width - 2 * bw).max(0),
            (geo.height - 2 * bh).max(0),
        )?;

        if let Some(title) = &self.title {
            grid.draw_string(
                title,
                &TruncationFormatter::new(self.title_alignment),
                geo.title_left,
                geo.title_top,
                geo.title_width,
                1,
            )?;
            grid.fill_rectangle(self.separator_char, bw, geo.separator_top, geo.separator_width, 1)?;
        }

        grid.draw_string(
            &self.message,
            &WordSplitFormatter::new(self.message_alignment),
            geo.message_left,
            geo.message_top,
            geo.message_width,
            geo.message_height,
        )?;

        trace!(width = geo.width, height = geo.height, "rendered box");
        Ok(Cow::Owned(grid))
    }
}
