//! Include primitive - a component stored in another document.

use std::borrow::Cow;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::is_zero;
use crate::document;
use crate::error::Result;
use crate::renderer::Grid;

/// Loads and renders the document at `path` on every render.
///
/// Non-zero maximum sizes override the loaded root's own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Include {
    pub path: PathBuf,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub max_width: usize,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub max_height: usize,
}

impl Include {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
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
        let mut root = document::load(&self.path)?;
        debug!(path = %self.path.display(), kind = root.kind(), "rendering included document");

        let max_width = if self.max_width > 0 { self.max_width } else { root.max_width() };
        let max_height = if self.max_height > 0 { self.max_height } else { root.max_height() };
        root.set_max_size(max_width, max_height);

        let grid = root.render()?.into_owned();
        Ok(Cow::Owned(grid))
    }
}
