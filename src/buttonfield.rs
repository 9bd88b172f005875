//! A tappable form field: a label (optionally with a leading glyph) and a
//! trailing detail value, with an arrow hinting at drill-down.
//!
//! Useful for numeric summaries that open a detail screen when pressed,
//! like "Followers  1,024 >". The centered variant drops the detail column and
//! centers the label, for standalone action rows.
//!
//! # Examples
//!
//! ```rust
//! use bubbletea_extras::buttonfield::Model;
//!
//! let mut field = Model::new("Followers").with_value("1,024");
//! let view = field.view();
//! assert!(view.contains("Followers"));
//! assert!(view.contains(">"));
//!
//! let action = Model::centered("Sign Out");
//! assert!(action.view().contains("Sign Out"));
//! ```

use crate::{display_width, next_widget_id, Renderable};
use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use lipgloss_extras::prelude::*;
use std::time::Duration;

/// Message emitted when a button field is pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PressMsg {
    /// Id of the field that was pressed.
    pub id: i64,
}

/// Styling for the button field.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Style applied to the label.
    pub label: Style,
    /// Style applied to the trailing detail value.
    pub value: Style,
    /// Style applied to the drill-down arrow.
    pub arrow: Style,
    /// Style applied to the label while pressed.
    pub pressed: Style,
    /// Style applied to the whole field when disabled.
    pub disabled: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            label: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            value: Style::new().foreground(AdaptiveColor {
                Light: "#9B9B9B",
                Dark: "#777777",
            }),
            arrow: Style::new().foreground(AdaptiveColor {
                Light: "#A49FA5",
                Dark: "#5C5C5C",
            }),
            pressed: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#EE6FF8",
                    Dark: "#EE6FF8",
                })
                .bold(true),
            disabled: Style::new().foreground(AdaptiveColor {
                Light: "#9B9B9B",
                Dark: "#5C5C5C",
            }),
        }
    }
}

/// A pressable field with a label, optional glyph, detail value, and arrow.
#[derive(Debug, Clone)]
pub struct Model {
    /// The label text.
    pub label: String,
    /// Optional glyph rendered before the label.
    pub glyph: Option<String>,
    /// Whether the drill-down arrow is rendered.
    pub arrow: bool,
    /// Total field width used to right-align the detail column; 0 disables
    /// alignment.
    pub width: usize,
    /// Whether presses are ignored.
    pub disabled: bool,
    /// Styling for the field.
    pub styles: Styles,
    id: i64,
    value: String,
    centered: bool,
    pressed: bool,
}

impl Model {
    /// Creates a button field with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            glyph: None,
            arrow: true,
            width: 0,
            disabled: false,
            styles: Styles::default(),
            id: next_widget_id(),
            value: String::new(),
            centered: false,
            pressed: false,
        }
    }

    /// Creates a centered button field: no detail column, no arrow, label
    /// centered within `width` when one is set.
    pub fn centered(label: impl Into<String>) -> Self {
        let mut model = Self::new(label);
        model.centered = true;
        model.arrow = false;
        model
    }

    /// Sets the detail value (builder style).
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Sets the leading glyph (builder style).
    pub fn with_glyph(mut self, glyph: impl Into<String>) -> Self {
        self.glyph = Some(glyph.into());
        self
    }

    /// Shows or hides the drill-down arrow (builder style).
    pub fn with_arrow(mut self, arrow: bool) -> Self {
        self.arrow = arrow;
        self
    }

    /// Sets the field width for detail alignment (builder style).
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Returns this field's instance id for matching [`PressMsg`] values.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Replaces the detail value.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Returns the current detail value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the leading glyph.
    pub fn set_glyph(&mut self, glyph: impl Into<String>) {
        self.glyph = Some(glyph.into());
    }

    /// Marks the field pressed for visual feedback. No-op when disabled.
    pub fn press_start(&mut self) {
        if !self.disabled {
            self.pressed = true;
        }
    }

    /// Clears the pressed state without firing the press.
    pub fn press_cancel(&mut self) {
        self.pressed = false;
    }

    /// Completes a press: clears the pressed state and returns a command that
    /// dispatches [`PressMsg`]. Returns `None` when the field is disabled.
    pub fn press(&mut self) -> Option<Cmd> {
        if self.disabled {
            return None;
        }
        self.pressed = false;
        let id = self.id;
        Some(bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(PressMsg { id }) as Msg
        }))
    }

    /// Returns true while the field is showing press feedback.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    fn label_text(&self) -> String {
        match &self.glyph {
            Some(glyph) => format!("{} {}", glyph, self.label),
            None => self.label.clone(),
        }
    }

    /// Renders the field as a single line.
    pub fn view(&self) -> String {
        if self.centered {
            return self.centered_view();
        }

        let label = self.label_text();
        let mut trailing = self.styles.value.render(&self.value);
        if self.arrow {
            trailing.push(' ');
            trailing.push_str(&self.styles.arrow.render(">"));
        }

        if self.disabled {
            let arrow = if self.arrow { " >" } else { "" };
            return self
                .styles
                .disabled
                .render(&format!("{}  {}{}", label, self.value, arrow));
        }

        let label_style = if self.pressed {
            &self.styles.pressed
        } else {
            &self.styles.label
        };

        let gap = if self.width > 0 {
            let used = display_width(&label) + display_width(&trailing);
            self.width.saturating_sub(used).max(2)
        } else {
            2
        };

        format!(
            "{}{}{}",
            label_style.render(&label),
            " ".repeat(gap),
            trailing
        )
    }

    fn centered_view(&self) -> String {
        let label = self.label_text();
        let style = if self.disabled {
            &self.styles.disabled
        } else if self.pressed {
            &self.styles.pressed
        } else {
            &self.styles.label
        };

        if self.width == 0 {
            return style.render(&label);
        }
        let slack = self.width.saturating_sub(display_width(&label));
        let left = slack / 2;
        format!(
            "{}{}{}",
            " ".repeat(left),
            style.render(&label),
            " ".repeat(slack - left)
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
        let mut field = Model::new("Posts");
        field.set_value("17");
        assert_eq!(field.value(), "17");
    }

    #[test]
    fn test_view_shows_parts() {
        let field = Model::new("Posts").with_value("17").with_glyph("✉");
        let view = field.view();
        assert!(view.contains("Posts"));
        assert!(view.contains("17"));
        assert!(view.contains("✉"));
        assert!(view.contains(">"));
    }

    #[test]
    fn test_arrow_can_be_hidden() {
        let field = Model::new("Posts").with_value("17").with_arrow(false);
        assert!(!field.view().contains('>'));
    }

    #[test]
    fn test_press_lifecycle() {
        let mut field = Model::new("Posts");
        field.press_start();
        assert!(field.is_pressed());
        assert!(field.press().is_some());
        assert!(!field.is_pressed());
    }

    #[test]
    fn test_disabled_field_ignores_presses() {
        let mut field = Model::new("Posts");
        field.disabled = true;
        field.press_start();
        assert!(!field.is_pressed());
        assert!(field.press().is_none());
    }

    #[test]
    fn test_centered_variant_has_no_arrow() {
        let field = Model::centered("Sign Out");
        assert!(!field.view().contains('>'));
        assert!(field.view().contains("Sign Out"));
    }

    #[test]
    fn test_centered_label_is_padded() {
        let field = Model::centered("Go").with_width(10);
        let view = field.view();
        assert!(view.starts_with("    "));
        assert_eq!(crate::display_width(&view), 10);
    }
}
