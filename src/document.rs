//! Diagram documents.
//!
//! A document is a JSON serialization of one [`Component`] tree. Every object
//! names its variant in a `"type"` field; raw grids are written in their text
//! form.
//!
//! ```json
//! {
//!   "type": "flow",
//!   "max_width": 20,
//!   "children": [
//!     { "type": "text", "content": "hello" },
//!     { "type": "raw", "grid": "ab\ncd" }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use tracing::trace;

use crate::error::{LayoutError, Result};
use crate::primitives::Component;

/// Parse a document.
pub fn parse(markup: &str) -> Result<Component> {
    let component = serde_json::from_str(markup)?;
    Ok(component)
}

/// Serialize a component tree as a pretty-printed document.
pub fn to_markup(component: &Component) -> Result<String> {
    Ok(serde_json::to_string_pretty(component)?)
}

/// Read and parse the document at `path`.
pub fn load(path: impl AsRef<Path>) -> Result<Component> {
    let path = path.as_ref();
    let markup = fs::read_to_string(path).map_err(|source| LayoutError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    trace!(path = %path.display(), bytes = markup.len(), "loaded document");
    parse(&markup)
}

/// Parse a document, render it, and return the grid's text form.
pub fn render_markup(markup: &str) -> Result<String> {
    let component = parse(markup)?;
    let grid = component.render()?;
    Ok(grid.to_string())
}
