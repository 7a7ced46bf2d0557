//! The capability shared by every bar variant.

/// Something that reports progress towards a fixed capacity.
///
/// Implemented by [`TextBar`](crate::TextBar), [`ColorBar`](crate::ColorBar)
/// and, with the `window` feature, [`WindowBar`](crate::WindowBar).
///
/// ```rust
/// use pbar::{BarBuilder, ProgressIndicator};
///
/// fn work(indicator: &mut dyn ProgressIndicator) {
///     while indicator.value() < indicator.capacity() {
///         indicator.advance(1);
///     }
/// }
///
/// # fn main() -> pbar::Result<()> {
/// let mut bar = BarBuilder::new(8).target(Vec::new()).fixed_width(30).build()?;
/// work(&mut bar);
/// assert_eq!(bar.state().value(), 8);
/// # Ok(())
/// # }
/// ```
pub trait ProgressIndicator {
    /// Add `n` units of progress, clamped to the capacity, and show it.
    fn advance(&mut self, n: u64);

    /// Show the current progress again without changing it.
    fn refresh(&mut self);

    /// Get the current value.
    fn value(&self) -> u64;

    /// Get the capacity.
    fn capacity(&self) -> u64;
}
