//! Diagram primitives - the components a diagram is built from.
//!
//! This module provides the closed set of layout components:
//! - [`Text`] - Word-wrapped text sized to its content
//! - [`Raw`] - A pre-rendered grid
//! - [`BoxComponent`] - Bordered box with optional title and a wrapped message
//! - [`Frame`] - Positions one child inside a fixed canvas
//! - [`Flow`] - Wrapping row/column layout of many children
//! - [`Tree`] - A node with children hanging below it, joined by stems
//! - [`Include`] - A document loaded from disk
//!
//! # Architecture
//!
//! Components are plain data. [`Component::render`] is a pure function of the
//! fields: every call renders the children depth-first into their own grids,
//! then composes them into a fresh grid. Nothing is cached.
//!
//! Rendering returns `Cow<'_, Grid>`. A component that needs no resizing hands
//! back its child's (or its wrapped) grid as `Cow::Borrowed`, which the borrow
//! checker keeps read-only for the caller.
//!
//! # Maximum Sizes
//!
//! Every component carries `max_width` and `max_height`. Zero means
//! unconstrained on that axis.

mod box_primitive;
mod flow;
mod frame;
mod include;
mod raw;
mod text;
mod tree;

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use box_primitive::BoxComponent;
pub use flow::Flow;
pub use frame::Frame;
pub use include::Include;
pub use raw::Raw;
pub use text::Text;
pub use tree::Tree;

use crate::error::{LayoutError, Result};
use crate::renderer::Grid;
use crate::types::Alignment;

// =============================================================================
// Component
// =============================================================================

/// Any diagram component.
///
/// Serialized as an internally tagged object: `{"type": "text", ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Component {
    Text(Text),
    Raw(Raw),
    Box(BoxComponent),
    Frame(Frame),
    Flow(Flow),
    Tree(Tree),
    Include(Include),
}

impl Component {
    /// Render this component and everything below it.
    pub fn render(&self) -> Result<Cow<'_, Grid>> {
        match self {
            Self::Text(text) => text.render(),
            Self::Raw(raw) => raw.render(),
            Self::Box(boxed) => boxed.render(),
            Self::Frame(frame) => frame.render(),
            Self::Flow(flow) => flow.render(),
            Self::Tree(tree) => tree.render(),
            Self::Include(include) => include.render(),
        }
    }

    /// Variant name, as used for the `"type"` tag.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Raw(_) => "raw",
            Self::Box(_) => "box",
            Self::Frame(_) => "frame",
            Self::Flow(_) => "flow",
            Self::Tree(_) => "tree",
            Self::Include(_) => "include",
        }
    }

    /// Ordered child components. Leaves have none; a tree's node is not a child.
    pub fn children(&self) -> &[Component] {
        match self {
            Self::Frame(frame) => &frame.children,
            Self::Flow(flow) => &flow.children,
            Self::Tree(tree) => &tree.children,
            Self::Text(_) | Self::Raw(_) | Self::Box(_) | Self::Include(_) => &[],
        }
    }

    pub fn max_width(&self) -> usize {
        self.max_size().0
    }

    pub fn max_height(&self) -> usize {
        self.max_size().1
    }

    fn max_size(&self) -> (usize, usize) {
        match self {
            Self::Text(c) => (c.max_width, c.max_height),
            Self::Raw(c) => (c.max_width, c.max_height),
            Self::Box(c) => (c.max_width, c.max_height),
            Self::Frame(c) => (c.max_width, c.max_height),
            Self::Flow(c) => (c.max_width, c.max_height),
            Self::Tree(c) => (c.max_width, c.max_height),
            Self::Include(c) => (c.max_width, c.max_height),
        }
    }

    /// Replace both maximum dimensions.
    pub fn set_max_size(&mut self, max_width: usize, max_height: usize) {
        let (w, h) = match self {
            Self::Text(c) => (&mut c.max_width, &mut c.max_height),
            Self::Raw(c) => (&mut c.max_width, &mut c.max_height),
            Self::Box(c) => (&mut c.max_width, &mut c.max_height),
            Self::Frame(c) => (&mut c.max_width, &mut c.max_height),
            Self::Flow(c) => (&mut c.max_width, &mut c.max_height),
            Self::Tree(c) => (&mut c.max_width, &mut c.max_height),
            Self::Include(c) => (&mut c.max_width, &mut c.max_height),
        };
        *w = max_width;
        *h = max_height;
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Component {
                fn from(component: $ty) -> Self {
                    Self::$variant(component)
                }
            }
        )*
    };
}

impl_from_variant! {
    Text(Text),
    Raw(Raw),
    Box(BoxComponent),
    Frame(Frame),
    Flow(Flow),
    Tree(Tree),
    Include(Include),
}

// =============================================================================
// Shared sizing helpers
// =============================================================================

/// Apply an optional maximum (0 = none) to a natural size.
#[inline]
pub(crate) fn limit(natural: usize, max: usize) -> usize {
    if max > 0 { natural.min(max) } else { natural }
}

/// A size as a signed cell coordinate for the drawing primitives.
#[inline]
pub(crate) fn cells(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

/// Offset of an item inside a span, rejecting JUSTIFY.
pub(crate) fn align(alignment: Alignment, outer: usize, item: usize, context: &'static str) -> Result<i32> {
    alignment
        .offset(cells(outer), cells(item))
        .ok_or(LayoutError::InvalidAlignment { alignment, context })
}

/// Crop a rendered grid to a maximum size, passing it through when it fits.
pub(crate) fn crop_to_max<'a>(
    grid: Cow<'a, Grid>,
    max_width: usize,
    max_height: usize,
    component: &'static str,
) -> Cow<'a, Grid> {
    let width = limit(grid.width(), max_width);
    let height = limit(grid.height(), max_height);

    if width == grid.width() && height == grid.height() {
        return grid;
    }

    debug!(
        component,
        from_width = grid.width(),
        from_height = grid.height(),
        width,
        height,
        "cropping to maximum size"
    );
    Cow::Owned(grid.cropped(width, height))
}

pub(crate) fn is_zero(n: &usize) -> bool {
    *n == 0
}
