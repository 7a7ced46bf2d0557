//! A progress widget refreshed from a background thread.
//!
//! [`WindowBar`] does not use the text renderer. The owning thread only
//! publishes `(value, capacity)` into an atomic snapshot; a dedicated thread
//! runs a small `tokio` runtime whose interval timer polls the snapshot and
//! redraws an [`indicatif`] bar with a `NN.N%` message. Dropping the
//! [`WindowBar`] stops the timer, joins the thread and clears the widget.
//!
//! # Examples
//!
//! ```rust
//! use pbar::{WindowBar, WindowOptions};
//!
//! # fn main() -> pbar::Result<()> {
//! let options = WindowOptions {
//!     hidden: true,
//!     ..WindowOptions::default()
//! };
//! let mut bar = WindowBar::with_options(10, options)?;
//! bar.advance(4);
//! assert_eq!(bar.value(), 4);
//! bar.close()?;
//! # Ok(())
//! # }
//! ```

use crate::error::{Error, Result};
use crate::state::ProgressState;
use crate::ProgressIndicator;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tokio::sync::oneshot;
use tracing::{debug, warn};

/// Options of the window widget.
#[derive(Debug, Clone)]
pub struct WindowOptions {
    /// How often the widget reads the snapshot.
    pub poll_interval: Duration,
    /// Width of the drawn bar, in columns.
    pub width: u16,
    /// Keep the widget off screen. It still tracks the snapshot.
    pub hidden: bool,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(100),
            width: 40,
            hidden: false,
        }
    }
}

/// Value and capacity shared with the polling thread.
#[derive(Debug)]
struct Snapshot {
    value: AtomicU64,
    capacity: AtomicU64,
}

impl Snapshot {
    fn new(state: &ProgressState) -> Self {
        Self {
            value: AtomicU64::new(state.value()),
            capacity: AtomicU64::new(state.capacity()),
        }
    }

    fn publish(&self, state: &ProgressState) {
        self.value.store(state.value(), Ordering::Release);
    }

    fn load(&self) -> (u64, u64) {
        (
            self.value.load(Ordering::Acquire),
            self.capacity.load(Ordering::Acquire),
        )
    }
}

/// A progress widget redrawn by its own thread.
pub struct WindowBar {
    state: ProgressState,
    snapshot: Arc<Snapshot>,
    widget: ProgressBar,
    shutdown: Option<oneshot::Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl WindowBar {
    /// Create a visible widget with the default options.
    pub fn new(capacity: u64) -> Result<Self> {
        Self::with_options(capacity, WindowOptions::default())
    }

    /// Create a widget and start its polling thread.
    pub fn with_options(capacity: u64, options: WindowOptions) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }

        let state = ProgressState::new(capacity);
        let snapshot = Arc::new(Snapshot::new(&state));

        let template = format!("{{bar:{}.cyan/blue}} {{msg}}", options.width);
        let style = ProgressStyle::with_template(&template)?;
        let target = match options.hidden {
            true => ProgressDrawTarget::hidden(),
            false => ProgressDrawTarget::stderr(),
        };
        let widget = ProgressBar::with_draw_target(Some(capacity), target).with_style(style);
        widget.set_message("0%");

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()?;
        let (shutdown, stop) = oneshot::channel();

        let thread = thread::Builder::new().name("pbar-window".into()).spawn({
            let snapshot = Arc::clone(&snapshot);
            let widget = widget.clone();
            let period = options.poll_interval;
            move || runtime.block_on(poll(snapshot, widget, period, stop))
        })?;
        debug!("Started window thread polling every {:?}", options.poll_interval);

        Ok(Self {
            state,
            snapshot,
            widget,
            shutdown: Some(shutdown),
            thread: Some(thread),
        })
    }

    /// Add `n` units of progress, clamped to the capacity.
    ///
    /// The widget picks the new value up on its next tick.
    pub fn advance(&mut self, n: u64) {
        self.state.advance(n);
        self.snapshot.publish(&self.state);
    }

    /// Get the current value.
    pub fn value(&self) -> u64 {
        self.state.value()
    }

    /// Get the capacity.
    pub fn capacity(&self) -> u64 {
        self.state.capacity()
    }

    /// Get a handle to the underlying widget.
    pub fn widget(&self) -> ProgressBar {
        self.widget.clone()
    }

    /// Stop the polling thread and clear the widget.
    pub fn close(mut self) -> Result<()> {
        self.stop()
    }

    fn stop(&mut self) -> Result<()> {
        if let Some(shutdown) = self.shutdown.take() {
            // The receiver is gone only if the thread already exited.
            let _ = shutdown.send(());
        }
        if let Some(thread) = self.thread.take() {
            thread
                .join()
                .map_err(|_| Error::Internal("window thread panicked".into()))?;
            debug!("Window thread stopped");
        }
        Ok(())
    }
}

impl ProgressIndicator for WindowBar {
    fn advance(&mut self, n: u64) {
        WindowBar::advance(self, n);
    }

    fn refresh(&mut self) {
        redraw(&self.snapshot, &self.widget);
    }

    fn value(&self) -> u64 {
        self.state.value()
    }

    fn capacity(&self) -> u64 {
        self.state.capacity()
    }
}

impl Drop for WindowBar {
    fn drop(&mut self) {
        if let Err(e) = self.stop() {
            warn!("Failed to stop window thread: {}", e);
        }
    }
}

impl std::fmt::Debug for WindowBar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowBar")
            .field("state", &self.state)
            .field("running", &self.thread.is_some())
            .finish()
    }
}

async fn poll(
    snapshot: Arc<Snapshot>,
    widget: ProgressBar,
    period: Duration,
    mut stop: oneshot::Receiver<()>,
) {
    let mut ticker = tokio::time::interval(period);
    loop {
        tokio::select! {
            _ = &mut stop => break,
            _ = ticker.tick() => redraw(&snapshot, &widget),
        }
    }
    redraw(&snapshot, &widget);
    widget.finish_and_clear();
}

fn redraw(snapshot: &Snapshot, widget: &ProgressBar) {
    let (value, capacity) = snapshot.load();
    let fraction = value as f64 / capacity as f64;
    widget.set_length(capacity);
    widget.set_position(value);
    widget.set_message(format!("{:.1}%", 100.0 * fraction));
}
