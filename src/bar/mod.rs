//! Bar construction: configuration records, callback types and the builder.
//!
//! # Overview
//!
//! - `config` - Display flags, callback types and the options record
//! - `builder` - [`BarBuilder`] for configuring and creating bars
//!
//! # Examples
//!
//! ```rust
//! use pbar::{BarBuilder, DisplayConfig};
//!
//! # fn main() -> pbar::Result<()> {
//! let display = DisplayConfig {
//!     show_percentage: true,
//!     show_prefix: true,
//! };
//! let bar = BarBuilder::new(64).display(display).build()?;
//! assert!(bar.config().display.show_prefix);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;

pub use builder::BarBuilder;
pub use config::{BarConfig, Callbacks, DisplayConfig, PrefixCallback, ValueCallback};
