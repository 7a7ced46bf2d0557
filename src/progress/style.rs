//! Decorators turning a composed [`Line`] into the text written to the sink.
//!
//! [`Plain`] writes the line as is. [`Colored`] writes the same columns but
//! wraps the percentage label with terminal style sequences, followed by an
//! attribute reset so the rest of the meter is drawn unstyled. Escape
//! sequences never count toward the width of a line, so both decorators
//! occupy exactly the same columns for the same input.
//!
//! # Examples
//!
//! ```rust
//! use console::Style;
//! use pbar::progress::layout::compose;
//! use pbar::progress::{Colored, Decorator, Plain};
//! use pbar::{Callbacks, DisplayConfig, ProgressState};
//!
//! let mut state = ProgressState::new(100);
//! state.advance(50);
//! let line = compose(&state, &DisplayConfig::default(), 20, &mut Callbacks::default());
//!
//! let colored = Colored::new(Style::new().red().bold()).paint(&line);
//! assert_eq!(console::strip_ansi_codes(&colored), Plain.paint(&line));
//! ```

use super::layout::Line;
use console::Style;

/// Renders a [`Line`] into its final textual form.
pub trait Decorator {
    /// Produce the text for `line`, starting with the carriage return.
    fn paint(&self, line: &Line) -> String;
}

/// Writes the line without any escape sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct Plain;

impl Decorator for Plain {
    fn paint(&self, line: &Line) -> String {
        line.to_string()
    }
}

/// Highlights the percentage label with a [`Style`].
///
/// Styling is forced on, whether or not the sink is a terminal.
#[derive(Debug, Clone)]
pub struct Colored {
    style: Style,
}

impl Default for Colored {
    fn default() -> Self {
        Self::new(Self::default_style())
    }
}

impl Colored {
    /// Create a decorator painting labels with `style`.
    pub fn new(style: Style) -> Self {
        Self {
            style: style.force_styling(true),
        }
    }

    /// Bold blue, the style used when none is configured.
    pub fn default_style() -> Style {
        Style::new().blue().bold()
    }

    /// Get a reference to the label style.
    pub fn style(&self) -> &Style {
        &self.style
    }
}

impl Decorator for Colored {
    fn paint(&self, line: &Line) -> String {
        let mut out = String::with_capacity(line.columns() + 16);
        out.push('\r');
        out.push_str(line.prefix());

        if let Some(meter) = line.meter() {
            let body = meter.body();
            out.push('[');
            match meter.label() {
                Some(label) => {
                    out.push_str(&body[..label.start]);
                    // Styled objects append the reset sequence themselves.
                    out.push_str(&self.style.apply_to(&body[label.clone()]).to_string());
                    out.push_str(&body[label.end..]);
                }
                None => out.push_str(body),
            }
            out.push(']');
        }

        out
    }
}
