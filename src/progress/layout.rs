//! Line construction for the text renderer.
//!
//! Every render turns a [`ProgressState`], a [`DisplayConfig`], the current
//! terminal width and the optional callbacks into a [`Line`]: an optional
//! prefix followed by an optional bracketed meter. Decorators then turn the
//! [`Line`] into the bytes written to the sink.
//!
//! A line never occupies more columns than the width it was composed for:
//!
//! - the prefix is dropped to a bare count, then to nothing, when it does not fit;
//! - the meter is omitted when fewer than 3 columns (`"[*]"`) remain;
//! - the percentage label is omitted unless it is strictly shorter than the
//!   meter body;
//! - callback results that grow past their budget are truncated.
//!
//! # Examples
//!
//! ```rust
//! use pbar::progress::layout::compose;
//! use pbar::{Callbacks, DisplayConfig, ProgressState};
//!
//! let mut state = ProgressState::new(100);
//! state.advance(50);
//!
//! let line = compose(&state, &DisplayConfig::default(), 20, &mut Callbacks::default());
//! assert_eq!(line.to_string(), "\r[******[50.0%]     ]");
//! ```

use crate::bar::config::{Callbacks, DisplayConfig};
use crate::state::ProgressState;
use std::fmt;
use std::ops::Range;

/// Character used for the completed part of the meter.
pub const FILL: char = '*';
/// Character used for the remaining part of the meter.
pub const EMPTY: char = ' ';
/// Smallest meter that can be drawn, `"[*]"`.
pub const MIN_METER_WIDTH: usize = 3;

/// A composed progress line, ready to be decorated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    prefix: String,
    meter: Option<Meter>,
}

/// The bracketed part of a [`Line`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meter {
    body: String,
    label: Option<Range<usize>>,
}

impl Line {
    /// Get the prefix, empty when prefixes are disabled or did not fit.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Get the meter, `None` when there was no room for it.
    pub fn meter(&self) -> Option<&Meter> {
        self.meter.as_ref()
    }

    /// Number of columns the line occupies once written.
    pub fn columns(&self) -> usize {
        self.prefix.len() + self.meter.as_ref().map_or(0, |m| m.body.len() + 2)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\r{}", self.prefix)?;
        if let Some(meter) = &self.meter {
            write!(f, "[{}]", meter.body)?;
        }
        Ok(())
    }
}

impl Meter {
    /// Get the meter body, without brackets.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Byte range of the default percentage label within the body, if one was
    /// placed.
    pub fn label(&self) -> Option<Range<usize>> {
        self.label.clone()
    }
}

/// Compose the line for `state` on a terminal `width` columns wide.
pub fn compose(
    state: &ProgressState,
    display: &DisplayConfig,
    width: usize,
    callbacks: &mut Callbacks,
) -> Line {
    let mut remaining = width;
    let mut prefix = String::new();

    if display.show_prefix {
        prefix = match callbacks.prefix.as_mut() {
            Some(produce) => {
                let mut custom = produce(width);
                truncate_to(&mut custom, width);
                custom
            }
            None => format_count(state, width),
        };
        remaining -= prefix.len();
    }

    if remaining < MIN_METER_WIDTH {
        return Line {
            prefix,
            meter: None,
        };
    }

    let body_width = remaining - 2;
    let mut body = fill_meter(state, body_width);
    let mut label = None;

    if display.show_percentage {
        match callbacks.value.as_mut() {
            Some(rewrite) => {
                rewrite(&mut body);
                truncate_to(&mut body, body_width);
            }
            None => label = center_label(&mut body, &format_percentage(state)),
        }
    }

    Line {
        prefix,
        meter: Some(Meter { body, label }),
    }
}

/// Build the default count prefix, `"(value/capacity)"`.
///
/// Falls back to the bare value, then to an empty string, when the result
/// would be longer than `width`.
pub fn format_count(state: &ProgressState, width: usize) -> String {
    let full = format!("({}/{})", state.value(), state.capacity());
    if full.len() <= width {
        return full;
    }

    let bare = state.value().to_string();
    if bare.len() <= width {
        return bare;
    }

    String::new()
}

/// Build the default percentage label, e.g. `"[50.0%]"`.
pub fn format_percentage(state: &ProgressState) -> String {
    format!("[{:.1}%]", state.percentage())
}

/// Number of filled columns in a meter body of `width` columns.
///
/// Truncating division, in integer arithmetic.
pub fn fill_count(state: &ProgressState, width: usize) -> usize {
    let filled = u128::from(state.value()) * width as u128 / u128::from(state.capacity());
    filled as usize
}

/// Build a meter body of exactly `width` columns.
pub fn fill_meter(state: &ProgressState, width: usize) -> String {
    let filled = fill_count(state, width).min(width);
    let mut body = String::with_capacity(width);
    body.extend(std::iter::repeat(FILL).take(filled));
    body.extend(std::iter::repeat(EMPTY).take(width - filled));
    body
}

/// Overwrite the middle of `body` with `label`, keeping its length.
///
/// Returns the replaced range, or `None` when the label is not strictly
/// shorter than the body and was left out.
pub fn center_label(body: &mut String, label: &str) -> Option<Range<usize>> {
    let width = body.len();
    if label.len() >= width {
        return None;
    }

    let start = width / 2 - label.len() / 2;
    let range = start..start + label.len();
    body.replace_range(range.clone(), label);
    Some(range)
}

/// Cut `s` down to at most `max` bytes on a character boundary.
pub(crate) fn truncate_to(s: &mut String, max: usize) {
    if s.len() <= max {
        return;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    s.truncate(end);
}
