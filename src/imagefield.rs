//! A form field that displays an image by source path or URL.
//!
//! Terminals don't render raster images, so the field shows the source as a
//! bracketed token next to its label. The press lifecycle mirrors the other
//! tappable fields: hosts call `press_start`/`press_cancel` for visual
//! feedback and `press` to fire the [`PressMsg`] command, typically to let
//! the user replace the image.
//!
//! # Examples
//!
//! ```rust
//! use bubbletea_extras::imagefield::Model;
//!
//! let mut field = Model::new("Avatar").with_source("avatars/ada.png");
//! assert_eq!(field.value(), "avatars/ada.png");
//!
//! let cmd = field.press();
//! assert!(cmd.is_some());
//! ```

use crate::{next_widget_id, Renderable};
use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use lipgloss_extras::prelude::*;
use std::time::Duration;

/// Message emitted when an image field is pressed.
///
/// Carries the instance id so hosts with several fields can tell which one
/// fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PressMsg {
    /// Id of the field that was pressed.
    pub id: i64,
}

/// Styling for the image field.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Style applied to the label.
    pub label: Style,
    /// Style applied to the image token.
    pub image: Style,
    /// Style applied to the image token while pressed.
    pub pressed: Style,
    /// Style applied to the whole field when disabled.
    pub disabled: Style,
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
            image: Style::new().foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#ECFD65",
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

/// An image display field with press handling.
#[derive(Debug, Clone)]
pub struct Model {
    /// The label shown next to the image token.
    pub label: String,
    /// Whether presses are ignored.
    pub disabled: bool,
    /// Styling for the field.
    pub styles: Styles,
    id: i64,
    source: String,
    pressed: bool,
}

impl Model {
    /// Creates an image field with the given label and no source.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: false,
            styles: Styles::default(),
            id: next_widget_id(),
            source: String::new(),
            pressed: false,
        }
    }

    /// Sets the image source (builder style).
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Returns this field's instance id for matching [`PressMsg`] values.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Replaces the image source.
    pub fn set_value(&mut self, source: impl Into<String>) {
        self.source = source.into();
    }

    /// Returns the current image source.
    pub fn value(&self) -> &str {
        &self.source
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

    /// Renders the field as a single line.
    pub fn view(&self) -> String {
        let token = if self.source.is_empty() {
            "[no image]".to_string()
        } else {
            format!("[{}]", self.source)
        };

        if self.disabled {
            return self
                .styles
                .disabled
                .render(&format!("{}  {}", self.label, token));
        }

        let token_style = if self.pressed {
            &self.styles.pressed
        } else {
            &self.styles.image
        };
        format!(
            "{}  {}",
            self.styles.label.render(&self.label),
            token_style.render(&token)
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
    fn test_source_round_trip() {
        let mut field = Model::new("Photo");
        field.set_value("cats/kitten.jpg");
        assert_eq!(field.value(), "cats/kitten.jpg");
    }

    #[test]
    fn test_press_lifecycle() {
        let mut field = Model::new("Photo");
        field.press_start();
        assert!(field.is_pressed());

        let cmd = field.press();
        assert!(cmd.is_some());
        assert!(!field.is_pressed());
    }

    #[test]
    fn test_press_cancel_clears_feedback() {
        let mut field = Model::new("Photo");
        field.press_start();
        field.press_cancel();
        assert!(!field.is_pressed());
    }

    #[test]
    fn test_disabled_field_ignores_presses() {
        let mut field = Model::new("Photo");
        field.disabled = true;

        field.press_start();
        assert!(!field.is_pressed());
        assert!(field.press().is_none());
    }

    #[test]
    fn test_view_placeholder_without_source() {
        let field = Model::new("Photo");
        assert!(field.view().contains("[no image]"));
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Model::new("A");
        let b = Model::new("B");
        assert_ne!(a.id(), b.id());
    }
}
