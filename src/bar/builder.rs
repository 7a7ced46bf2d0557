//! Builder pattern implementation for creating bars.
//!
//! [`BarBuilder`] collects the capacity, display flags, callbacks, width source
//! and sink of a bar, validates them once, and produces either a plain
//! [`TextBar`] or a [`ColorBar`].
//!
//! # Examples
//!
//! ## Basic Builder Usage
//!
//! ```rust
//! use pbar::BarBuilder;
//!
//! # fn main() -> pbar::Result<()> {
//! let bar = BarBuilder::new(1024).show_prefix(true).build()?;
//! assert_eq!(bar.state().capacity(), 1024);
//! # Ok(())
//! # }
//! ```
//!
//! ## Callbacks and a Custom Sink
//!
//! ```rust
//! use pbar::BarBuilder;
//!
//! # fn main() -> pbar::Result<()> {
//! let mut bar = BarBuilder::new(10)
//!     .show_prefix(true)
//!     .prefix_callback(|_width| "copying ".to_string())
//!     .fixed_width(20)
//!     .target(Vec::new())
//!     .build()?;
//!
//! bar.advance(5);
//! assert!(bar.get_ref().starts_with(b"\rcopying ["));
//! # Ok(())
//! # }
//! ```

use super::config::{BarConfig, Callbacks, DisplayConfig};
use crate::error::{Error, Result};
use crate::progress::{Bar, ColorBar, Colored, Decorator, Plain, TextBar};
use crate::terminal::{FixedWidth, FnWidth, TerminalWidth};

use console::{Style, Term};
use std::io::{Stderr, Write};

/// A builder used to create a [`TextBar`] or a [`ColorBar`].
///
/// ```rust
/// # fn main() -> pbar::Result<()> {
/// use pbar::BarBuilder;
///
/// let bar = BarBuilder::new(100).show_percentage(false).build_color()?;
/// # Ok(())
/// # }
/// ```
pub struct BarBuilder<W = Stderr> {
    config: BarConfig,
    callbacks: Callbacks,
    width: Option<Box<dyn TerminalWidth + Send>>,
    target: W,
}

impl BarBuilder<Stderr> {
    /// Creates a builder writing to standard error with the default options.
    pub fn new(capacity: u64) -> Self {
        Self {
            config: BarConfig::new(capacity),
            callbacks: Callbacks::default(),
            width: None,
            target: std::io::stderr(),
        }
    }
}

impl<W: Write> BarBuilder<W> {
    /// Show or hide the centered percentage label.
    pub fn show_percentage(mut self, show: bool) -> Self {
        self.config.display.show_percentage = show;
        self
    }

    /// Show or hide the prefix before the meter.
    pub fn show_prefix(mut self, show: bool) -> Self {
        self.config.display.show_prefix = show;
        self
    }

    /// Set all display flags at once.
    pub fn display(mut self, display: DisplayConfig) -> Self {
        self.config.display = display;
        self
    }

    /// Set the callback producing the prefix.
    ///
    /// Only used when the prefix is shown.
    pub fn prefix_callback<F>(mut self, callback: F) -> Self
    where
        F: FnMut(usize) -> String + Send + 'static,
    {
        self.callbacks.prefix = Some(Box::new(callback));
        self
    }

    /// Set the callback formatting the meter body.
    ///
    /// Only used when the percentage is shown, in place of the default label.
    pub fn value_callback<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&mut String) + Send + 'static,
    {
        self.callbacks.value = Some(Box::new(callback));
        self
    }

    /// Set the style of the percentage label of color bars.
    pub fn label_style(mut self, style: Style) -> Self {
        self.config.label_style = style;
        self
    }

    /// Set where the current width is read from.
    ///
    /// Defaults to the terminal attached to standard error.
    pub fn width_source<T>(mut self, source: T) -> Self
    where
        T: TerminalWidth + Send + 'static,
    {
        self.width = Some(Box::new(source));
        self
    }

    /// Read the width from `columns` on every render and clear.
    pub fn width_fn<F>(self, columns: F) -> Self
    where
        F: Fn() -> usize + Send + 'static,
    {
        self.width_source(FnWidth(columns))
    }

    /// Pin the width to `columns`.
    pub fn fixed_width(self, columns: usize) -> Self {
        self.width_source(FixedWidth(columns))
    }

    /// Set the sink the bar is drawn on.
    pub fn target<T: Write>(self, target: T) -> BarBuilder<T> {
        BarBuilder {
            config: self.config,
            callbacks: self.callbacks,
            width: self.width,
            target,
        }
    }

    /// Create a plain [`TextBar`].
    pub fn build(self) -> Result<TextBar<W>> {
        self.finish(Plain)
    }

    /// Create a [`ColorBar`] using the configured label style.
    pub fn build_color(self) -> Result<ColorBar<W>> {
        let decorator = Colored::new(self.config.label_style.clone());
        self.finish(decorator)
    }

    fn finish<D: Decorator>(self, decorator: D) -> Result<Bar<W, D>> {
        if self.config.capacity == 0 {
            return Err(Error::ZeroCapacity);
        }

        let width = self
            .width
            .unwrap_or_else(|| Box::new(Term::stderr()) as Box<dyn TerminalWidth + Send>);

        Ok(Bar::from_parts(
            self.config,
            self.callbacks,
            decorator,
            width,
            self.target,
        ))
    }
}

impl<W> std::fmt::Debug for BarBuilder<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BarBuilder")
            .field("config", &self.config)
            .field("callbacks", &self.callbacks)
            .field("width", &self.width.is_some())
            .finish()
    }
}
