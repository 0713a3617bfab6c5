//! # n-motion — cursor-motion engine for n-nvim
//!
//! Every motion command (`h`, `l`, `j`, `k`, `0`, `$`, `gg`, `G`, ...)
//! computes a new cursor position from the current one and a read-only text
//! snapshot. This crate holds those computations:
//!
//! - **[`cursor`]** — `CursorState`, a position plus a remembered virtual
//!   column
//! - **[`state`]** — `BufferState`, the tree + cursor + tab width a motion
//!   reads
//! - **[`locator`]** — `Locator`, the closed set of motions and their
//!   [`locate`](Locator::locate) dispatch
//! - **[`config`]** — `Config`, the tab width setting loaded from TOML
//!
//! Locators are pure: they never mutate the tree, never fail, and clamp at
//! document boundaries instead of erroring. The caller builds a locator,
//! calls `locate` once, and commits the returned cursor.

pub mod config;
pub mod cursor;
pub mod locator;
pub mod state;

mod horizontal;
mod vertical;

pub use config::{Config, ConfigError};
pub use cursor::CursorState;
pub use locator::Locator;
pub use n_text::{Direction, TextTree};
pub use state::BufferState;
