//! # spark-diagram
//!
//! Text-mode diagram layout for Rust.
//!
//! Diagrams are trees of components (boxed text, wrapping flows, aligned
//! frames, parent/child trees, pre-rendered grids) that render into a
//! fixed-size character [`Grid`]. Think of a small box model working on
//! character cells instead of pixels.
//!
//! ## Architecture
//!
//! ```text
//! Component tree ──► render children ──► compose into Grid ──► text
//!        ▲
//!   JSON document
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Shared vocabulary (Alignment, Direction, Padding, Edges)
//! - [`renderer`] - The character grid and cell merge strategies
//! - [`layout`] - Text measurement, justification and formatters
//! - [`primitives`] - The components and their sizing algorithms
//! - [`document`] - JSON documents for component trees
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```
//! use spark_diagram::{Component, Flow, Text};
//!
//! let flow: Component = Flow::new([Text::new("hello").into(), Text::new("world").into()])
//!     .with_max_width(5)
//!     .into();
//! assert_eq!(flow.render().unwrap().to_string(), "hello\n     \nworld");
//! ```

pub mod document;
pub mod error;
pub mod layout;
pub mod primitives;
pub mod renderer;
pub mod types;

pub use types::*;

pub use error::{LayoutError, Result};

pub use layout::{
    TextFormatter, TruncationFormatter, WordSplitFormatter, justify, justify_spaces,
};

pub use renderer::{CellMerge, Grid, Overwrite, Preserve, Union};

pub use primitives::{BoxComponent, Component, Flow, Frame, Include, Raw, Text, Tree};
