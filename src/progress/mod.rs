//! Progress module containing the text renderer.
//!
//! # Overview
//!
//! The progress module is organized into three components:
//!
//! - `layout` - Width arithmetic: prefix fallback, meter fill and label centering
//! - `style` - Decorators writing a composed line plainly or with a colored label
//! - `display` - The [`Bar`] that owns a sink and redraws its line in place
//!
//! # Examples
//!
//! ```rust
//! use pbar::progress::TextBar;
//! use pbar::BarBuilder;
//!
//! # fn main() -> pbar::Result<()> {
//! let mut bar: TextBar<Vec<u8>> = BarBuilder::new(3)
//!     .fixed_width(12)
//!     .target(Vec::new())
//!     .build()?;
//! bar.advance(3);
//! assert_eq!(bar.line().to_string(), "\r[*[100.0%]*]");
//! # Ok(())
//! # }
//! ```

pub(crate) mod display;
pub mod layout;
pub(crate) mod style;

pub use display::{Bar, ColorBar, TextBar};
pub use layout::{Line, Meter};
pub use style::{Colored, Decorator, Plain};
