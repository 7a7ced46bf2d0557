//! Configuration structures and callback types for text bars.
//!
//! This module provides the immutable options record a bar is built from, the
//! display flags, and the optional hooks that replace the built-in prefix and
//! percentage formatting.
//!
//! # Examples
//!
//! ## Custom Prefix
//!
//! ```rust
//! use pbar::PrefixCallback;
//!
//! let mut calls = 0;
//! let prefix: PrefixCallback = Box::new(move |width| {
//!     calls += 1;
//!     let label = format!("pass {calls} ");
//!     if label.len() <= width { label } else { String::new() }
//! });
//! ```
//!
//! ## Custom Meter Formatting
//!
//! ```rust
//! use pbar::ValueCallback;
//!
//! // Mark the middle of the meter instead of printing a percentage.
//! let value: ValueCallback = Box::new(|meter: &mut String| {
//!     let mid = meter.len() / 2;
//!     if mid < meter.len() {
//!         meter.replace_range(mid..mid + 1, "|");
//!     }
//! });
//! ```

use console::Style;

use crate::progress::Colored;

/// Produces the prefix for a given terminal width.
///
/// The result should be no longer than the width it receives; longer results
/// are truncated to that width.
pub type PrefixCallback = Box<dyn FnMut(usize) -> String + Send>;

/// Rewrites the meter body in place.
///
/// The body must keep its length or shrink; a longer result is truncated back
/// to its previous length.
pub type ValueCallback = Box<dyn FnMut(&mut String) + Send>;

/// What a text bar shows besides the meter itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Show the `[NN.N%]` label centered in the meter.
    pub show_percentage: bool,
    /// Show the `(value/capacity)` count, or the custom prefix, before the meter.
    pub show_prefix: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_percentage: true,
            show_prefix: false,
        }
    }
}

/// Optional formatting hooks of a bar.
#[derive(Default)]
pub struct Callbacks {
    /// Replaces the default count prefix.
    pub(crate) prefix: Option<PrefixCallback>,
    /// Replaces the default percentage label.
    pub(crate) value: Option<ValueCallback>,
}

impl Callbacks {
    /// Create hooks from optional callbacks.
    pub fn new(prefix: Option<PrefixCallback>, value: Option<ValueCallback>) -> Self {
        Self { prefix, value }
    }

    /// Return `true` if a prefix callback is set.
    pub fn has_prefix(&self) -> bool {
        self.prefix.is_some()
    }

    /// Return `true` if a value callback is set.
    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }
}

impl std::fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callbacks")
            .field("prefix", &self.prefix.is_some())
            .field("value", &self.value.is_some())
            .finish()
    }
}

/// Configuration structure for a bar.
#[derive(Debug, Clone)]
pub struct BarConfig {
    /// Total units of work.
    pub capacity: u64,
    /// Display flags.
    pub display: DisplayConfig,
    /// Style of the percentage label, used by color bars only.
    pub label_style: Style,
}

impl BarConfig {
    /// Create a configuration with default display flags.
    pub fn new(capacity: u64) -> Self {
        Self {
            capacity,
            display: DisplayConfig::default(),
            label_style: Colored::default_style(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_config_default() {
        let display = DisplayConfig::default();
        assert!(display.show_percentage);
        assert!(!display.show_prefix);
    }

    #[test]
    fn test_callbacks_debug_hides_closures() {
        let callbacks = Callbacks::new(Some(Box::new(|_: usize| String::new())), None);
        assert!(callbacks.has_prefix());
        assert!(!callbacks.has_value());
        assert_eq!(
            format!("{:?}", callbacks),
            "Callbacks { prefix: true, value: false }"
        );
    }

    #[test]
    fn test_bar_config_new() {
        let config = BarConfig::new(12);
        assert_eq!(config.capacity, 12);
        assert_eq!(config.display, DisplayConfig::default());
    }
}
