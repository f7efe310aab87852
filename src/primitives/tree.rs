//! Tree primitive - a node with its children hanging below it.
//!
//! ```text
//!      root
//!        |
//!   -----------
//!   |    |    |
//!  leaf leaf leaf
//! ```
//!
//! # Stems
//!
//! Every rendered grid is anchored at its centre column, `(width - 1) / 2`.
//! The node is placed so its own centre lands on the canvas anchor, the stem
//! below the node runs down that column, and each child's stem sits on the
//! child's anchor. A single child is placed with its anchor directly under the
//! parent's, so a chain of single-child trees renders as one unbroken column
//! of stems whatever the widths involved.
//!
//! Anchoring rounds differently from plain centring. An item of even width on
//! a canvas of odd width has two equally centred columns, and anchoring picks
//! the right one where `(W - w) / 2` picks the left:
//!
//! ```text
//! xxxxx
//!   |
//!   ab      not " ab  "
//! ```

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{Component, cells, crop_to_max, is_zero};
use crate::error::Result;
use crate::renderer::Grid;

fn default_spacing() -> usize {
    3
}

fn default_stem_char() -> char {
    '|'
}

fn default_connector_char() -> char {
    '-'
}

/// A node with zero or more child subtrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    pub node: Box<Component>,
    #[serde(default)]
    pub children: Vec<Component>,
    /// Horizontal gap between neighbouring children.
    #[serde(default = "default_spacing")]
    pub sibling_spacing: usize,
    /// Vertical gap between the node and its children.
    #[serde(default = "default_spacing")]
    pub parent_spacing: usize,
    #[serde(default = "default_stem_char")]
    pub stem_char: char,
    #[serde(default = "default_connector_char")]
    pub connector_char: char,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub max_width: usize,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub max_height: usize,
}

/// Column a parent connects to when it hangs a grid of `width` below itself.
#[inline]
fn anchor(width: usize) -> i32 {
    (cells(width) - 1).max(0) / 2
}

impl Tree {
    pub fn new(node: impl Into<Component>) -> Self {
        Self {
            node: Box::new(node.into()),
            children: Vec::new(),
            sibling_spacing: default_spacing(),
            parent_spacing: default_spacing(),
            stem_char: default_stem_char(),
            connector_char: default_connector_char(),
            max_width: 0,
            max_height: 0,
        }
    }

    pub fn with_child(mut self, child: impl Into<Component>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Component>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn with_sibling_spacing(mut self, spacing: usize) -> Self {
        self.sibling_spacing = spacing;
        self
    }

    pub fn with_parent_spacing(mut self, spacing: usize) -> Self {
        self.parent_spacing = spacing;
        self
    }

    pub fn with_stem_char(mut self, c: char) -> Self {
        self.stem_char = c;
        self
    }

    pub fn with_connector_char(mut self, c: char) -> Self {
        self.connector_char = c;
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
        let node = self.node.render()?;
        if self.children.is_empty() {
            return Ok(crop_to_max(node, self.max_width, self.max_height, "tree"));
        }

        let grids = self
            .children
            .iter()
            .map(Component::render)
            .collect::<Result<Vec<_>>>()?;

        let spacing = self.sibling_spacing.saturating_mul(grids.len() - 1);
        let breadth = grids
            .iter()
            .fold(spacing, |sum, grid| sum.saturating_add(grid.width()));
        let tallest = grids.iter().map(|grid| grid.height()).max().unwrap_or(0);

        let width = breadth.max(node.width());
        let height = node.height().saturating_add(self.parent_spacing).saturating_add(tallest);
        let mut canvas = Grid::try_new(width, height)?;

        let stem = anchor(width);
        let node_bottom = cells(node.height());
        let children_top = node_bottom + cells(self.parent_spacing);
        canvas.draw_grid(&node, stem - anchor(node.width()), 0)?;

        // Child placement: (left, stem column) per child.
        let placements: Vec<(i32, i32)> = if let [only] = grids.as_slice() {
            let left = stem - anchor(only.width());
            vec![(left, stem)]
        } else {
            let mut left = (cells(width) - cells(breadth)) / 2;
            grids
                .iter()
                .map(|grid| {
                    let placement = (left, left + anchor(grid.width()));
                    left = left
                        .saturating_add(cells(grid.width()))
                        .saturating_add(cells(self.sibling_spacing));
                    placement
                })
                .collect()
        };

        if self.parent_spacing > 0 {
            if placements.len() == 1 {
                canvas.fill_rectangle(self.stem_char, stem, node_bottom, 1, cells(self.parent_spacing))?;
            } else {
                let connector = node_bottom + cells(self.parent_spacing / 2);
                let first = placements.iter().map(|&(_, s)| s).min().unwrap_or(stem).min(stem);
                let last = placements.iter().map(|&(_, s)| s).max().unwrap_or(stem).max(stem);

                canvas.fill_rectangle(self.stem_char, stem, node_bottom, 1, connector - node_bottom)?;
                canvas.fill_rectangle(self.connector_char, first, connector, last - first + 1, 1)?;
                for &(_, child_stem) in &placements {
                    canvas.fill_rectangle(
                        self.stem_char,
                        child_stem,
                        connector + 1,
                        1,
                        children_top - connector - 1,
                    )?;
                }
            }
        }

        for (grid, &(left, _)) in grids.iter().zip(&placements) {
            canvas.draw_grid(grid, left, children_top)?;
        }

        trace!(width, height, children = grids.len(), "rendered tree");
        Ok(crop_to_max(Cow::Owned(canvas), self.max_width, self.max_height, "tree"))
    }
}
