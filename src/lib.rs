//! pbar is a crate drawing single-line progress bars that adapt to the
//! width of the terminal on every update.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pbar::{BarBuilder, Error};
//!
//! # fn main() -> Result<(), Error> {
//! let mut bar = BarBuilder::new(100).show_prefix(true).build()?;
//! for _ in 0..100 {
//!     bar.advance(1);
//! }
//! // Dropping the bar blanks its line.
//! # Ok(())
//! # }
//! ```
//!
//! A bar at 50% on a 20-column terminal is drawn as:
//!
//! ```text
//! [******[50.0%]     ]
//! ```
//!
//! # Module Organization
//!
//! The pbar crate is organized into several modules:
//!
//! - [`bar`] - The `BarBuilder` and the configuration and callback types
//! - [`error`] - Centralized error handling with the `Error` enum
//! - [`progress`] - Line layout, decorators and the in-place `Bar`
//! - [`state`] - The clamped value/capacity pair every bar owns
//! - [`terminal`] - Terminal width sources
//! - [`window`] - A widget refreshed from a background thread (feature `window`)

pub mod bar;
pub mod error;
mod indicator;
pub mod progress;
pub mod state;
pub mod terminal;
#[cfg(feature = "window")]
pub mod window;

pub use bar::{BarBuilder, BarConfig, Callbacks, DisplayConfig, PrefixCallback, ValueCallback};
pub use error::{Error, Result};
pub use indicator::ProgressIndicator;
pub use progress::{Bar, ColorBar, Colored, Decorator, Line, Plain, TextBar};
pub use state::ProgressState;
pub use terminal::{FixedWidth, FnWidth, TerminalWidth};
#[cfg(feature = "window")]
pub use window::{WindowBar, WindowOptions};
