//! Cell-level output layer.
//!
//! The renderer knows only about cells. It doesn't understand components or
//! layout. It provides the [`Grid`] every component draws into, and the
//! [`CellMerge`] strategies that decide what happens when one grid is blitted
//! over another.
//!
//! # Merge Strategies
//!
//! - **Overwrite** ([`Overwrite`]): the source cell always wins. Used by every
//!   layout component when composing children.
//!
//! - **Union** ([`Union`]): designated blank characters are transparent, so
//!   overlapping drawings combine. Ties are settled by [`Preserve`].

pub mod grid;
pub mod merge;

pub use grid::Grid;
pub use merge::{CellMerge, Overwrite, Preserve, Union};
