//! A read-only form field: a label on the left, plain text on the right.
//!
//! Not meant for collecting data; it displays key/value pairs in detail
//! panes. The value round-trips unchanged through `set_value`/`value`.
//!
//! # Examples
//!
//! ```rust
//! use bubbletea_extras::plainfield::Model;
//!
//! let mut field = Model::new("Author").with_value("Ada Lovelace");
//! assert_eq!(field.value(), "Ada Lovelace");
//!
//! field.set_value("Charles Babbage");
//! assert!(field.view().contains("Charles Babbage"));
//! ```

use crate::{display_width, Renderable};
use lipgloss_extras::prelude::*;

/// Styling for the plain field's label and value.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Style applied to the label.
    pub label: Style,
    /// Style applied to the value text.
    pub value: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            label: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#1a1a1a",
                    Dark: "#dddddd",
                })
                .bold(true),
            value: Style::new().foreground(AdaptiveColor {
                Light: "#4D4D4D",
                Dark: "#999999",
            }),
        }
    }
}

/// A read-only label/value display field.
#[derive(Debug, Clone)]
pub struct Model {
    /// The label shown on the left.
    pub label: String,
    /// Minimum display width of the label column; 0 means natural width.
    pub label_width: usize,
    /// Styling for label and value.
    pub styles: Styles,
    value: String,
}

impl Model {
    /// Creates a field with the given label and an empty value.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            label_width: 0,
            styles: Styles::default(),
            value: String::new(),
        }
    }

    /// Sets the initial value (builder style).
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Sets the label column width (builder style).
    ///
    /// Stacked fields given the same width render their values in a single
    /// aligned column.
    pub fn with_label_width(mut self, width: usize) -> Self {
        self.label_width = width;
        self
    }

    /// Replaces the displayed value.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Returns the current value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Renders the field as a single line.
    pub fn view(&self) -> String {
        let pad = self.label_width.saturating_sub(display_width(&self.label));
        format!(
            "{}{}  {}",
            self.styles.label.render(&self.label),
            " ".repeat(pad),
            self.styles.value.render(&self.value)
        )
    }
}

impl Renderable for Model {
    fn view(&self) -> String {
        Model::view(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_round_trip() {
        let mut field = Model::new("Size");
        assert_eq!(field.value(), "");

        field.set_value("42 KB");
        assert_eq!(field.value(), "42 KB");
    }

    #[test]
    fn test_view_contains_label_and_value() {
        let field = Model::new("Owner").with_value("root");
        let view = field.view();
        assert!(view.contains("Owner"));
        assert!(view.contains("root"));
    }

    #[test]
    fn test_label_width_aligns_columns() {
        let narrow = Model::new("Id").with_label_width(10).with_value("x");
        let wide = Model::new("Reporter").with_label_width(10).with_value("x");

        let value_col = |v: &str| v.rfind('x').unwrap();
        assert_eq!(value_col(&narrow.view()), value_col(&wide.view()));
    }
}
