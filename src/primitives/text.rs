//! Text primitive - word-wrapped text sized to its content.
//!
//! The natural width is the longest line. A maximum width narrows the block
//! and makes the text wrap; a maximum height drops the lines below it.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{cells, is_zero, limit};
use crate::error::Result;
use crate::layout::text_measure::max_line_width;
use crate::layout::{TextFormatter, WordSplitFormatter};
use crate::renderer::Grid;
use crate::types::Alignment;

/// A block of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    pub content: String,
    #[serde(default)]
    pub alignment: Alignment,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub max_width: usize,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub max_height: usize,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            alignment: Alignment::Left,
            max_width: 0,
            max_height: 0,
        }
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
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

    pub fn render(&self) -> Result<Cow<'_, Grid>> {
        let formatter = WordSplitFormatter::new(self.alignment);

        let width = limit(max_line_width(&self.content), self.max_width);
        let height = limit(formatter.measure_height(&self.content, width), self.max_height);

        let mut grid = Grid::new(width, height);
        grid.draw_string(&self.content, &formatter, 0, 0, cells(width), cells(height))?;

        trace!(width, height, "rendered text");
        Ok(Cow::Owned(grid))
    }
}
