//! An editable recipient line with a picker trigger.
//!
//! The field accepts typed input while focused, and its picker binding emits
//! a [`RecipientTapMsg`]. The host responds by presenting a chooser (a
//! contact list, a search sheet) and writing the selection back with
//! [`Model::set_value`]. Useful when composing a message.
//!
//! # Examples
//!
//! ```rust
//! use bubbletea_extras::recipientfield::Model;
//! use bubbletea_extras::Component;
//!
//! let mut field = Model::new("To").with_placeholder("Add a recipient");
//! field.focus();
//!
//! field.set_value("ada@example.com");
//! assert_eq!(field.value(), "ada@example.com");
//! ```

use crate::{key, next_widget_id, Component, Renderable};
use bubbletea_rs::{tick as bubbletea_tick, Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;
use std::time::Duration;
use unicode_segmentation::UnicodeSegmentation;

/// Message emitted when the picker trigger fires.
///
/// The host should respond by presenting its recipient chooser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipientTapMsg {
    /// Id of the field whose picker was triggered.
    pub id: i64,
}

/// Key bindings for the recipient field.
#[derive(Debug, Clone)]
pub struct RecipientKeyMap {
    /// Triggers the recipient picker. Default: `ctrl+p`.
    pub pick: key::Binding,
}

impl Default for RecipientKeyMap {
    fn default() -> Self {
        Self {
            pick: key::new_binding(vec![
                key::with_keys_str(&["ctrl+p"]),
                key::with_help("ctrl+p", "pick recipient"),
            ]),
        }
    }
}

impl key::KeyMap for RecipientKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.pick]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![vec![&self.pick]]
    }
}

/// Styling for the recipient field.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Style applied to the label.
    pub label: Style,
    /// Style applied to the entered value.
    pub value: Style,
    /// Style applied to the placeholder when the value is empty.
    pub placeholder: Style,
    /// Style applied to the picker glyph.
    pub picker: Style,
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
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            placeholder: Style::new().foreground(AdaptiveColor {
                Light: "#9B9B9B",
                Dark: "#5C5C5C",
            }),
            picker: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#04B575",
                    Dark: "#ECFD65",
                })
                .bold(true),
        }
    }
}

/// An editable recipient line with a picker trigger.
#[derive(Debug, Clone)]
pub struct Model {
    /// The label shown on the left.
    pub label: String,
    /// Placeholder shown while the value is empty.
    pub placeholder: String,
    /// Key bindings.
    pub keymap: RecipientKeyMap,
    /// Styling for the field.
    pub styles: Styles,
    id: i64,
    value: String,
    focus: bool,
}

impl Model {
    /// Creates a recipient field with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            placeholder: String::new(),
            keymap: RecipientKeyMap::default(),
            styles: Styles::default(),
            id: next_widget_id(),
            value: String::new(),
            focus: false,
        }
    }

    /// Sets the placeholder text (builder style).
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Returns this field's instance id for matching [`RecipientTapMsg`]
    /// values.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Replaces the entered value.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Returns the current value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns a command that dispatches [`RecipientTapMsg`], as if the
    /// picker trigger had been pressed.
    pub fn pick(&self) -> Cmd {
        let id = self.id;
        bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(RecipientTapMsg { id }) as Msg
        })
    }

    /// Handles key input while focused.
    ///
    /// Printable characters append to the value, backspace removes the last
    /// grapheme, and the picker binding returns the [`RecipientTapMsg`]
    /// command. Unfocused fields ignore all input.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if !self.focus {
            return None;
        }
        let key_msg = msg.downcast_ref::<KeyMsg>()?;

        if self.keymap.pick.matches(key_msg) {
            return Some(self.pick());
        }

        match key_msg.key {
            KeyCode::Backspace => {
                let cut = self.value.grapheme_indices(true).last().map(|(i, _)| i);
                if let Some(i) = cut {
                    self.value.truncate(i);
                }
            }
            KeyCode::Char(c)
                if !key_msg.modifiers.contains(KeyModifiers::CONTROL)
                    && !key_msg.modifiers.contains(KeyModifiers::ALT) =>
            {
                self.value.push(c);
            }
            _ => {}
        }
        None
    }

    /// Renders the field as a single line.
    pub fn view(&self) -> String {
        let body = if self.value.is_empty() {
            self.styles.placeholder.render(&self.placeholder)
        } else {
            self.styles.value.render(&self.value)
        };
        format!(
            "{}  {} {}",
            self.styles.label.render(&self.label),
            body,
            self.styles.picker.render("[+]")
        )
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
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

    fn key(code: KeyCode) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::empty(),
        })
    }

    #[test]
    fn test_typing_appends_while_focused() {
        let mut field = Model::new("To");
        field.focus();

        field.update(&key(KeyCode::Char('a')));
        field.update(&key(KeyCode::Char('b')));
        assert_eq!(field.value(), "ab");
    }

    #[test]
    fn test_unfocused_field_ignores_input() {
        let mut field = Model::new("To");
        field.update(&key(KeyCode::Char('a')));
        assert_eq!(field.value(), "");
    }

    #[test]
    fn test_backspace_removes_last_grapheme() {
        let mut field = Model::new("To");
        field.focus();
        field.set_value("héé");

        field.update(&key(KeyCode::Backspace));
        assert_eq!(field.value(), "hé");

        field.update(&key(KeyCode::Backspace));
        field.update(&key(KeyCode::Backspace));
        field.update(&key(KeyCode::Backspace));
        assert_eq!(field.value(), "");
    }

    #[test]
    fn test_pick_binding_emits_command() {
        let mut field = Model::new("To");
        field.focus();

        let msg: Msg = Box::new(KeyMsg {
            key: KeyCode::Char('p'),
            modifiers: KeyModifiers::CONTROL,
        });
        assert!(field.update(&msg).is_some());
        // The trigger must not leak the character into the value.
        assert_eq!(field.value(), "");
    }

    #[test]
    fn test_focus_round_trip() {
        let mut field = Model::new("To");
        assert!(!field.focused());
        field.focus();
        assert!(field.focused());
        field.blur();
        assert!(!field.focused());
    }

    #[test]
    fn test_placeholder_shown_when_empty() {
        let field = Model::new("To").with_placeholder("Add a recipient");
        assert!(field.view().contains("Add a recipient"));
    }
}
