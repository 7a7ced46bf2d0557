#![allow(dead_code)]

use pbar::{BarBuilder, ColorBar, TerminalWidth, TextBar};
use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

// Common test constants
pub const TEST_WIDTH: usize = 20;
pub const TEST_CAPACITY: u64 = 100;

// === Sinks and Width Sources ===

/// An in-memory sink that can still be read after the bar owning it is gone
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).expect("Sink received invalid UTF-8")
    }

    /// The text written by the most recent render (after its carriage return)
    pub fn last_frame(&self) -> String {
        let contents = self.contents();
        contents.rsplit('\r').next().unwrap_or_default().to_string()
    }

    pub fn clear(&self) {
        self.0.lock().unwrap().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A sink refusing every write
pub struct BrokenSink;

impl Write for BrokenSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }
}

/// A width source that tests can resize between renders
#[derive(Clone)]
pub struct ResizableWidth(Arc<AtomicUsize>);

impl ResizableWidth {
    pub fn new(columns: usize) -> Self {
        Self(Arc::new(AtomicUsize::new(columns)))
    }

    pub fn resize(&self, columns: usize) {
        self.0.store(columns, Ordering::SeqCst);
    }
}

impl TerminalWidth for ResizableWidth {
    fn columns(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

// === Bar Creation Helpers ===

/// Creates a builder drawing on a shared buffer with a fixed width
pub fn create_test_builder(capacity: u64, width: usize) -> (BarBuilder<SharedBuffer>, SharedBuffer) {
    let sink = SharedBuffer::new();
    let builder = BarBuilder::new(capacity)
        .fixed_width(width)
        .target(sink.clone());
    (builder, sink)
}

/// Creates a plain bar with default display flags
pub fn create_text_bar(capacity: u64, width: usize) -> (TextBar<SharedBuffer>, SharedBuffer) {
    let (builder, sink) = create_test_builder(capacity, width);
    (builder.build().expect("Failed to build text bar"), sink)
}

/// Creates a color bar with default display flags
pub fn create_color_bar(capacity: u64, width: usize) -> (ColorBar<SharedBuffer>, SharedBuffer) {
    let (builder, sink) = create_test_builder(capacity, width);
    (builder.build_color().expect("Failed to build color bar"), sink)
}

/// Renders a single frame of a plain bar at `value`
pub fn plain_frame(capacity: u64, value: u64, width: usize, show_prefix: bool) -> String {
    let (builder, sink) = create_test_builder(capacity, width);
    let mut bar = builder.show_prefix(show_prefix).build().unwrap();
    bar.advance(value);
    sink.last_frame()
}

/// Renders a single frame of a color bar at `value`
pub fn color_frame(capacity: u64, value: u64, width: usize, show_prefix: bool) -> String {
    let (builder, sink) = create_test_builder(capacity, width);
    let mut bar = builder.show_prefix(show_prefix).build_color().unwrap();
    bar.advance(value);
    sink.last_frame()
}

// === Assertion Helpers ===

/// Asserts that a frame holds exactly one bracketed meter
pub fn assert_single_meter(frame: &str) {
    assert!(frame.ends_with(']'), "Frame should end with a meter: {:?}", frame);
    let opens = frame.matches('[').count();
    let closes = frame.matches(']').count();
    assert_eq!(opens, closes, "Unbalanced brackets in {:?}", frame);
}

/// Asserts that a frame holds no meter at all
pub fn assert_no_meter(frame: &str) {
    assert!(!frame.contains('['), "Frame should have no meter: {:?}", frame);
    assert!(!frame.contains(']'), "Frame should have no meter: {:?}", frame);
}

/// Extracts the meter body (between the outer brackets) of a frame
pub fn meter_body(frame: &str) -> &str {
    let start = frame.find('[').expect("Frame has no meter");
    &frame[start + 1..frame.len() - 1]
}
