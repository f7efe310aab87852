//! Flow primitive - wrapping row/column layout.
//!
//! Children are laid out along the primary axis (x for horizontal flows, y for
//! vertical ones) and wrap into a new row whenever the next child would pass
//! `max` on that axis. Rows stack along the secondary axis.
//!
//! # Algorithm
//!
//! 1. Render every child.
//! 2. Split children into rows; the item gap counts towards the primary maximum.
//! 3. Each row's span is its tallest item (secondary extent).
//! 4. Admit rows in order while the total span, row gaps included, fits the
//!    secondary maximum. Rows after the first that does not fit are dropped.
//! 5. Place each row along the primary axis by `alignment`, and each item
//!    inside its row's span by `row_alignment`.
//!
//! With `Alignment::Justify` on the primary axis, the configured gap only
//! decides wrapping; a justified row spreads its free space between items.

use std::borrow::Cow;
use std::ops::Range;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::{Component, align, cells, is_zero};
use crate::error::{LayoutError, Result};
use crate::layout::justify_spaces;
use crate::renderer::Grid;
use crate::types::{Alignment, Direction};

fn default_gap() -> usize {
    1
}

/// Wrapping layout of any number of children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flow {
    #[serde(default)]
    pub children: Vec<Component>,
    #[serde(default)]
    pub direction: Direction,
    /// Primary-axis gap between items.
    #[serde(default = "default_gap")]
    pub gap: usize,
    /// Secondary-axis gap between rows.
    #[serde(default = "default_gap")]
    pub row_gap: usize,
    /// Placement of each row along the primary axis.
    #[serde(default)]
    pub alignment: Alignment,
    /// Placement of each item across its row. Never `Justify`.
    #[serde(default)]
    pub row_alignment: Alignment,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub max_width: usize,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub max_height: usize,
}

/// One wrapped row (a column, for vertical flows).
#[derive(Debug, Clone, PartialEq, Eq)]
struct Row {
    items: Range<usize>,
    /// Sum of item extents along the primary axis, without gaps.
    content: usize,
    /// Largest item extent along the secondary axis.
    span: usize,
}

impl Row {
    fn len(&self) -> usize {
        self.items.len()
    }

    /// Primary-axis size with the configured gap between items.
    fn size(&self, gap: usize) -> usize {
        let gaps = gap.saturating_mul(self.len().saturating_sub(1));
        self.content.saturating_add(gaps)
    }
}

impl Default for Flow {
    fn default() -> Self {
        Self {
            children: Vec::new(),
            direction: Direction::Horizontal,
            gap: default_gap(),
            row_gap: default_gap(),
            alignment: Alignment::Left,
            row_alignment: Alignment::Left,
            max_width: 0,
            max_height: 0,
        }
    }
}

impl Flow {
    pub fn new(children: impl IntoIterator<Item = Component>) -> Self {
        Self {
            children: children.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn with_child(mut self, child: impl Into<Component>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_gap(mut self, gap: usize) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_row_gap(mut self, row_gap: usize) -> Self {
        self.row_gap = row_gap;
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_row_alignment(mut self, row_alignment: Alignment) -> Self {
        self.row_alignment = row_alignment;
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

    /// Group items into rows. `sizes` are (primary, secondary) extents.
    fn split_rows(&self, sizes: &[(usize, usize)], max_primary: usize) -> Vec<Row> {
        let mut rows = Vec::new();
        let mut start = 0;
        let mut offset: usize = 0;

        for (i, &(primary, _)) in sizes.iter().enumerate() {
            if max_primary > 0 && i > start && offset.saturating_add(primary) > max_primary {
                rows.push(Self::row(sizes, start..i));
                start = i;
                offset = 0;
            }
            offset = offset.saturating_add(primary).saturating_add(self.gap);
        }

        if start < sizes.len() {
            rows.push(Self::row(sizes, start..sizes.len()));
        }
        rows
    }

    fn row(sizes: &[(usize, usize)], items: Range<usize>) -> Row {
        let members = &sizes[items.clone()];
        Row {
            content: members.iter().fold(0, |sum: usize, &(primary, _)| sum.saturating_add(primary)),
            span: members.iter().map(|&(_, secondary)| secondary).max().unwrap_or(0),
            items,
        }
    }

    /// Keep the leading rows that fit `max_secondary`. Returns them with their total span.
    fn admit_rows(&self, mut rows: Vec<Row>, max_secondary: usize) -> (Vec<Row>, usize) {
        let mut total: usize = 0;
        let mut admitted = 0;

        for (i, row) in rows.iter().enumerate() {
            let needed = if i == 0 {
                row.span
            } else {
                total.saturating_add(self.row_gap).saturating_add(row.span)
            };
            if max_secondary > 0 && needed > max_secondary {
                debug!(
                    dropped = rows.len() - i,
                    needed,
                    max_secondary,
                    "flow rows overflow the secondary axis"
                );
                break;
            }
            total = needed;
            admitted += 1;
        }

        rows.truncate(admitted);
        (rows, total)
    }

    pub fn render(&self) -> Result<Cow<'_, Grid>> {
        if self.row_alignment == Alignment::Justify {
            return Err(LayoutError::InvalidAlignment {
                alignment: self.row_alignment,
                context: "flow row alignment",
            });
        }

        let grids = self
            .children
            .iter()
            .map(Component::render)
            .collect::<Result<Vec<_>>>()?;

        let direction = self.direction;
        let sizes: Vec<(usize, usize)> = grids
            .iter()
            .map(|grid| direction.to_axes(grid.width(), grid.height()))
            .collect();
        let (max_primary, max_secondary) = direction.to_axes(self.max_width, self.max_height);

        let rows = self.split_rows(&sizes, max_primary);
        let (rows, total_span) = self.admit_rows(rows, max_secondary);

        let extent = if max_primary > 0 {
            max_primary
        } else {
            rows.iter().map(|row| row.size(self.gap)).max().unwrap_or(0)
        };

        let (width, height) = match direction {
            Direction::Horizontal => (extent, total_span),
            Direction::Vertical => (total_span, extent),
        };
        let mut canvas = Grid::try_new(width, height)?;

        let mut secondary: i32 = 0;
        for row in &rows {
            let justified = self.alignment == Alignment::Justify && row.len() > 1;
            let gaps = if justified {
                justify_spaces(extent, row.content, row.len())
            } else {
                vec![self.gap; row.len().saturating_sub(1)]
            };

            let size = cells(row.size(self.gap));
            let mut primary = match self.alignment {
                Alignment::Left | Alignment::Justify => 0,
                Alignment::Center => cells(extent).saturating_sub(size).saturating_sub(1) / 2,
                Alignment::Right => cells(extent).saturating_sub(size),
            };

            for (n, i) in row.items.clone().enumerate() {
                let (item_primary, item_secondary) = sizes[i];
                let cross = align(self.row_alignment, row.span, item_secondary, "flow row alignment")?;

                let (x, y) = direction.to_xy(primary, secondary.saturating_add(cross));
                canvas.draw_grid(&grids[i], x, y)?;

                let gap = gaps.get(n).map_or(0, |&gap| cells(gap));
                primary = primary.saturating_add(cells(item_primary)).saturating_add(gap);
            }

            secondary = secondary.saturating_add(cells(row.span)).saturating_add(cells(self.row_gap));
        }

        trace!(width, height, rows = rows.len(), "rendered flow");
        Ok(Cow::Owned(canvas))
    }
}
