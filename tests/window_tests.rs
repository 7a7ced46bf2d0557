//! Tests for the window backend.
//!
//! The widget is kept hidden; the tests only observe it through its handle.

#![cfg(feature = "window")]

use pbar::{Error, ProgressIndicator, WindowBar, WindowOptions};
use std::time::{Duration, Instant};

fn hidden_options() -> WindowOptions {
    WindowOptions {
        poll_interval: Duration::from_millis(10),
        hidden: true,
        ..WindowOptions::default()
    }
}

/// Wait until `check` holds or a generous deadline passes
fn eventually(check: impl Fn() -> bool) -> bool {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        if check() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    check()
}

#[test]
fn test_window_options_default() {
    let options = WindowOptions::default();
    assert_eq!(options.poll_interval, Duration::from_millis(100));
    assert_eq!(options.width, 40);
    assert!(!options.hidden);
}

#[test]
fn test_timer_picks_up_snapshot() {
    let mut bar = WindowBar::with_options(80, hidden_options()).unwrap();
    let widget = bar.widget();

    bar.advance(20);
    assert!(eventually(|| widget.position() == 20));
    assert!(eventually(|| widget.message() == "25.0%"));

    bar.advance(100);
    assert_eq!(bar.value(), 80);
    assert!(eventually(|| widget.position() == 80));
}

#[test]
fn test_window_bar_as_indicator() {
    let mut bar = WindowBar::with_options(3, hidden_options()).unwrap();
    let widget = bar.widget();
    {
        let indicator: &mut dyn ProgressIndicator = &mut bar;
        indicator.advance(2);
        indicator.refresh();
        assert_eq!(indicator.value(), 2);
        assert_eq!(indicator.capacity(), 3);
    }
    assert_eq!(widget.position(), 2);
}

#[test]
fn test_drop_stops_and_clears_widget() {
    let bar = WindowBar::with_options(10, hidden_options()).unwrap();
    let widget = bar.widget();
    drop(bar);
    assert!(widget.is_finished());
}

#[test]
fn test_zero_capacity_window() {
    assert!(matches!(WindowBar::new(0), Err(Error::ZeroCapacity)));
}
