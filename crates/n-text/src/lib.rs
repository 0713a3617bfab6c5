//! # n-text — the text tree behind n-motion
//!
//! The motion engine never mutates text. It reads it through the narrow
//! interface in this crate:
//!
//! - **[`tree`]** — `TextTree`, a rope with POSIX line counting and grapheme
//!   cluster boundaries
//! - **[`direction`]** — `Direction`, the forward/backward read axis
//! - **[`column`]** — tab-aware visual column arithmetic
//! - **[`error`]** — `TreeError`, raised only while building a tree
//!
//! Positions everywhere are char offsets (Unicode scalar values), the unit
//! `ropey` indexes in. Cluster boundaries are computed on top of that.

pub mod column;
pub mod direction;
pub mod error;
pub mod tree;

pub use direction::Direction;
pub use error::TreeError;
pub use tree::TextTree;
