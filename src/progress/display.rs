//! Single-line progress bars drawn in place on a text sink.
//!
//! This module provides [`Bar`], which owns its [`ProgressState`], its output
//! sink and its width source. Each [`Bar::advance`] re-queries the width,
//! composes the line, decorates it and overwrites the previous line. Dropping
//! the bar blanks the line once.
//!
//! [`TextBar`] and [`ColorBar`] are the two decorations in use: the plain
//! one, and one highlighting the percentage label.
//!
//! # Examples
//!
//! ## Drawing to an In-Memory Sink
//!
//! ```rust
//! use pbar::BarBuilder;
//!
//! # fn main() -> pbar::Result<()> {
//! let mut bar = BarBuilder::new(100)
//!     .fixed_width(20)
//!     .target(Vec::new())
//!     .build()?;
//!
//! bar.advance(50);
//! assert!(bar.get_ref().ends_with(b"\r[******[50.0%]     ]"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Drawing to Standard Error
//!
//! ```rust,no_run
//! use pbar::ColorBar;
//!
//! # fn main() -> pbar::Result<()> {
//! let mut bar = ColorBar::new(250)?;
//! for _ in 0..250 {
//!     bar.advance(1);
//! }
//! # Ok(())
//! # }
//! ```

use crate::bar::config::{BarConfig, Callbacks, PrefixCallback, ValueCallback};
use crate::bar::BarBuilder;
use crate::progress::layout::{self, Line};
use crate::progress::style::{Colored, Decorator, Plain};
use crate::state::ProgressState;
use crate::terminal::TerminalWidth;
use crate::{ProgressIndicator, Result};

use std::io::{Stderr, Write};
use tracing::{trace, warn};

/// A progress bar owning one line of its sink.
///
/// A bar is move-only: two handles writing to the same line would garble it.
pub struct Bar<W: Write = Stderr, D: Decorator = Plain> {
    state: ProgressState,
    config: BarConfig,
    callbacks: Callbacks,
    decorator: D,
    width: Box<dyn TerminalWidth + Send>,
    target: W,
}

/// Bar drawn without escape sequences.
pub type TextBar<W = Stderr> = Bar<W, Plain>;

/// Bar whose percentage label is highlighted.
pub type ColorBar<W = Stderr> = Bar<W, Colored>;

impl TextBar<Stderr> {
    /// Create a plain bar on standard error with default options.
    pub fn new(capacity: u64) -> Result<Self> {
        BarBuilder::new(capacity).build()
    }
}

impl ColorBar<Stderr> {
    /// Create a color bar on standard error with default options.
    pub fn new(capacity: u64) -> Result<Self> {
        BarBuilder::new(capacity).build_color()
    }
}

impl<W: Write, D: Decorator> Bar<W, D> {
    pub(crate) fn from_parts(
        config: BarConfig,
        callbacks: Callbacks,
        decorator: D,
        width: Box<dyn TerminalWidth + Send>,
        target: W,
    ) -> Self {
        Self {
            state: ProgressState::new(config.capacity),
            config,
            callbacks,
            decorator,
            width,
            target,
        }
    }

    /// Add `n` units of progress and redraw.
    ///
    /// Write failures are logged and otherwise ignored so progress reporting
    /// never interrupts the work it reports on.
    pub fn advance(&mut self, n: u64) {
        self.state.advance(n);
        if let Err(e) = self.render() {
            warn!("Failed to render progress bar: {}", e);
        }
    }

    /// Compose the current line without writing it.
    pub fn line(&mut self) -> Line {
        let width = self.width.columns();
        layout::compose(&self.state, &self.config.display, width, &mut self.callbacks)
    }

    /// Redraw the line in place and flush.
    pub fn render(&mut self) -> Result<()> {
        let line = self.line();
        trace!(
            columns = line.columns(),
            value = self.state.value(),
            "Rendering progress line"
        );
        let painted = self.decorator.paint(&line);
        self.target.write_all(painted.as_bytes())?;
        self.target.flush()?;
        Ok(())
    }

    /// Blank the whole line and return the cursor to its start.
    pub fn clear(&mut self) -> Result<()> {
        let width = self.width.columns();
        let mut blank = String::with_capacity(width + 2);
        blank.push('\r');
        blank.extend(std::iter::repeat(' ').take(width));
        blank.push('\r');
        self.target.write_all(blank.as_bytes())?;
        self.target.flush()?;
        Ok(())
    }

    /// Replace the prefix callback.
    pub fn set_prefix_callback<F>(&mut self, callback: F)
    where
        F: FnMut(usize) -> String + Send + 'static,
    {
        self.callbacks.prefix = Some(Box::new(callback) as PrefixCallback);
    }

    /// Replace the value callback.
    pub fn set_value_callback<F>(&mut self, callback: F)
    where
        F: FnMut(&mut String) + Send + 'static,
    {
        self.callbacks.value = Some(Box::new(callback) as ValueCallback);
    }

    /// Get the progress state.
    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    /// Get the configuration the bar was built with.
    pub fn config(&self) -> &BarConfig {
        &self.config
    }

    /// Get a reference to the sink.
    pub fn get_ref(&self) -> &W {
        &self.target
    }
}

impl<W: Write, D: Decorator> ProgressIndicator for Bar<W, D> {
    fn advance(&mut self, n: u64) {
        Bar::advance(self, n);
    }

    fn refresh(&mut self) {
        if let Err(e) = self.render() {
            warn!("Failed to render progress bar: {}", e);
        }
    }

    fn value(&self) -> u64 {
        self.state.value()
    }

    fn capacity(&self) -> u64 {
        self.state.capacity()
    }
}

impl<W: Write, D: Decorator> Drop for Bar<W, D> {
    fn drop(&mut self) {
        if let Err(e) = self.clear() {
            warn!("Failed to clear progress bar: {}", e);
        }
    }
}

impl<W: Write, D: Decorator> std::fmt::Debug for Bar<W, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bar")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("callbacks", &self.callbacks)
            .finish()
    }
}
