//! Error handling for the pbar library.
//!
//! Rendering itself never fails: narrow terminals, over-long labels and
//! misbehaving callbacks are resolved by truncation or omission. The errors
//! below only come from the edges of the crate, namely construction, the
//! output sink and the window backend's thread.

use std::io;
use thiserror::Error;

/// Errors that can happen when using pbar.
#[derive(Error, Debug)]
pub enum Error {
    /// A bar was constructed with a capacity of zero.
    ///
    /// Every fill and percentage computation divides by the capacity, so a
    /// zero capacity is refused up front instead of at render time.
    #[error("Capacity must be greater than zero")]
    ZeroCapacity,

    /// Error from an underlying system.
    ///
    /// Used when the window backend's thread panics before it can be joined.
    #[error("Internal error: {0}")]
    Internal(String),

    /// The window widget template could not be parsed.
    #[cfg(feature = "window")]
    #[error("Invalid widget template")]
    Template {
        #[from]
        source: indicatif::style::TemplateError,
    },

    /// I/O Error.
    ///
    /// Wraps failures to write or flush the output sink, and failures to spawn
    /// the window backend's thread or runtime.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },
}

/// Result type alias for operations that can fail with a pbar error.
pub type Result<T> = std::result::Result<T, Error>;
