//! Layout error types.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::Alignment;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("cell ({x}, {y}) is outside a {width}x{height} grid")]
    OutOfRange {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },

    #[error("rectangle extent must not be negative (got {width}x{height})")]
    NegativeExtent { width: i32, height: i32 },

    #[error("line {line} has length {found}, expected {expected}: lines must all be of same length")]
    RaggedLines {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("frames take exactly one child, got {0}")]
    FrameChildCount(usize),

    #[error("{alignment} alignment is not supported for {context}")]
    InvalidAlignment {
        alignment: Alignment,
        context: &'static str,
    },

    #[error("a {width}x{height} grid is too large to address")]
    GridTooLarge { width: usize, height: usize },

    #[error("{component} does not fit its maximum size: {detail}")]
    InsufficientSpace {
        component: &'static str,
        detail: String,
    },

    #[error("io error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("document error: {0}")]
    Document(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
