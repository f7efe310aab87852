//! Raw primitive - a grid rendered ahead of time.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::{crop_to_max, is_zero};
use crate::error::Result;
use crate::renderer::Grid;

/// Wraps an existing grid. Rendering never copies it unless it must be cropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Raw {
    pub grid: Grid,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub max_width: usize,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub max_height: usize,
}

impl Raw {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            max_width: 0,
            max_height: 0,
        }
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
        Ok(crop_to_max(Cow::Borrowed(&self.grid), self.max_width, self.max_height, "raw"))
    }
}
