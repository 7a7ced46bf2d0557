//! Tests for the color decorator.
//!
//! A color bar must occupy exactly the columns a plain bar occupies; only the
//! non-printing style sequences around the percentage label may differ.

use console::{measure_text_width, strip_ansi_codes, Style};

mod common;
use common::helpers::*;

#[test]
fn test_stripped_color_frame_matches_plain_frame() {
    for (value, width, prefix) in [
        (0, 20, false),
        (50, 20, false),
        (100, 20, false),
        (33, 47, true),
        (50, 9, false),
        (50, 10, false),
        (7, 2, true),
        (99, 120, true),
    ] {
        let plain = plain_frame(TEST_CAPACITY, value, width, prefix);
        let colored = color_frame(TEST_CAPACITY, value, width, prefix);
        assert_eq!(strip_ansi_codes(&colored), plain, "value {value}, width {width}");
        assert_eq!(measure_text_width(&colored), plain.len());
    }
}

#[test]
fn test_label_is_highlighted_then_reset() {
    let frame = color_frame(TEST_CAPACITY, 50, TEST_WIDTH, false);
    assert_ne!(frame, plain_frame(TEST_CAPACITY, 50, TEST_WIDTH, false));

    let label = frame.find("[50.0%]").expect("Label missing");
    assert!(frame[..label].contains("\x1b["), "No style before label: {frame:?}");
    assert!(frame[label..].starts_with("[50.0%]\x1b[0m"));
    assert!(frame.ends_with("\x1b[0m     ]"));
}

#[test]
fn test_custom_label_style() {
    let (builder, sink) = create_test_builder(TEST_CAPACITY, TEST_WIDTH);
    let mut bar = builder
        .label_style(Style::new().red())
        .build_color()
        .unwrap();
    bar.advance(50);
    assert!(sink.last_frame().contains("\x1b[31m[50.0%]\x1b[0m"));
}

#[test]
fn test_no_escapes_without_label() {
    let frame = color_frame(TEST_CAPACITY, 50, 9, false);
    assert_eq!(frame, "[***    ]");
}

#[test]
fn test_value_callback_is_left_unstyled() {
    let (builder, sink) = create_test_builder(TEST_CAPACITY, 12);
    let mut bar = builder
        .value_callback(|meter: &mut String| meter.replace_range(4..8, "(db)"))
        .build_color()
        .unwrap();
    bar.advance(20);
    assert_eq!(sink.last_frame(), "[**  (db)  ]");
}

#[test]
fn test_color_bar_clears_like_plain_bar() {
    let (mut bar, sink) = create_color_bar(TEST_CAPACITY, 6);
    bar.advance(50);
    sink.clear();
    drop(bar);
    assert_eq!(sink.contents(), "\r      \r");
}
