//! Errors raised while building a [`TextTree`](crate::TextTree).
//!
//! Reading a tree never fails. Only turning raw input into one can.

use std::io;
use std::str::Utf8Error;

/// Failure to construct a text tree from raw input.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// The input bytes are not valid UTF-8.
    #[error("invalid UTF-8 at byte {}", .0.valid_up_to())]
    InvalidUtf8(#[from] Utf8Error),

    /// The underlying reader failed.
    #[error("failed to read text: {0}")]
    Io(#[from] io::Error),
}
