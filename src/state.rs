//! Progress state shared by every bar variant.
//!
//! A [`ProgressState`] holds the current value and the capacity of one bar.
//! The value can only move forward through [`ProgressState::advance`] and is
//! clamped to the capacity instead of overflowing it.
//!
//! # Examples
//!
//! ```rust
//! use pbar::ProgressState;
//!
//! let mut state = ProgressState::new(10);
//! state.advance(4);
//! assert_eq!(state.value(), 4);
//!
//! state.advance(100);
//! assert_eq!(state.value(), 10);
//! assert!(state.is_complete());
//! ```

/// Current value and capacity of a single bar.
///
/// Invariant: `value <= capacity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressState {
    value: u64,
    capacity: u64,
}

impl ProgressState {
    /// Create a new state at zero.
    ///
    /// The capacity is not validated here; bars refuse a zero capacity when
    /// they are built.
    pub fn new(capacity: u64) -> Self {
        Self { value: 0, capacity }
    }

    /// Add `n` units of progress, clamping to the capacity.
    pub fn advance(&mut self, n: u64) {
        self.value = self.value.saturating_add(n).min(self.capacity);
    }

    /// Get the current value.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Get the capacity.
    #[must_use]
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Completed fraction in `0.0..=1.0`.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        self.value as f64 / self.capacity as f64
    }

    /// Completed percentage in `0.0..=100.0`.
    #[must_use]
    pub fn percentage(&self) -> f64 {
        100.0 * self.value as f64 / self.capacity as f64
    }

    /// Return `true` once the value reached the capacity.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.value == self.capacity
    }
}
