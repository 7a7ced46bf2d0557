//! Terminal metrics consumed by the renderer.
//!
//! The renderer never asks the operating system directly; it asks a
//! [`TerminalWidth`] source on every render and every clear, so a resized
//! terminal is picked up on the next update. The real terminal is reached
//! through [`console::Term`], [`FixedWidth`] pins the width for tests or
//! for sinks that are not terminals at all, and [`FnWidth`] asks a closure.

use console::Term;
use tracing::debug;

/// Width used when the terminal size cannot be queried.
pub const FALLBACK_COLUMNS: usize = 80;

/// A source for the current output width in columns.
pub trait TerminalWidth {
    /// Return the current width. Implementations must return a positive,
    /// best-effort value instead of failing.
    fn columns(&self) -> usize;
}

impl TerminalWidth for Term {
    fn columns(&self) -> usize {
        match self.size_checked() {
            Some((_, cols)) if cols > 0 => usize::from(cols),
            _ => {
                debug!(
                    "Terminal size unavailable, falling back to {} columns",
                    FALLBACK_COLUMNS
                );
                FALLBACK_COLUMNS
            }
        }
    }
}

/// A width that never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWidth(pub usize);

impl TerminalWidth for FixedWidth {
    fn columns(&self) -> usize {
        self.0
    }
}

/// A width computed by a closure on every query.
///
/// ```rust
/// use pbar::{FnWidth, TerminalWidth};
///
/// let width = FnWidth(|| 30);
/// assert_eq!(width.columns(), 30);
/// ```
#[derive(Clone, Copy)]
pub struct FnWidth<F>(pub F);

impl<F: Fn() -> usize> TerminalWidth for FnWidth<F> {
    fn columns(&self) -> usize {
        (self.0)()
    }
}

impl<F> std::fmt::Debug for FnWidth<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FnWidth(..)")
    }
}

impl<T: TerminalWidth + ?Sized> TerminalWidth for Box<T> {
    fn columns(&self) -> usize {
        (**self).columns()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_width() {
        assert_eq!(FixedWidth(42).columns(), 42);
    }

    #[test]
    fn test_term_width_is_positive() {
        // Under a test harness stderr is usually not a terminal.
        assert!(Term::stderr().columns() > 0);
    }

    #[test]
    fn test_fn_width_is_queried_each_time() {
        let calls = std::cell::Cell::new(0);
        let width = FnWidth(|| {
            calls.set(calls.get() + 1);
            10 * calls.get()
        });
        assert_eq!(width.columns(), 10);
        assert_eq!(width.columns(), 20);
    }

    #[test]
    fn test_boxed_width_delegates() {
        let boxed: Box<dyn TerminalWidth> = Box::new(FixedWidth(7));
        assert_eq!(boxed.columns(), 7);
    }
}
