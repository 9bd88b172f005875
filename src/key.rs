//! Type-safe key bindings for the interactive widgets.
//!
//! Bindings pair a set of key presses with help metadata, and widgets expose
//! their bindings through the [`KeyMap`] trait so hosts can assemble help
//! views without knowing each widget's internals.
//!
//! # Examples
//!
//! ```rust
//! use bubbletea_extras::key::{new_binding, with_help, with_keys_str};
//!
//! let load_more = new_binding(vec![
//!     with_keys_str(&["enter", "space"]),
//!     with_help("enter", "load more"),
//! ]);
//! assert!(!load_more.help.key.is_empty());
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Help metadata shown for a key binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// The key label, e.g. `"enter"` or `"ctrl+p"`.
    pub key: String,
    /// What the key does, e.g. `"load more"`.
    pub desc: String,
}

/// A single key press: a key code plus its modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key code.
    pub code: KeyCode,
    /// Modifier keys held with it.
    pub mods: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::empty(),
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, mods): (KeyCode, KeyModifiers)) -> Self {
        Self { code, mods }
    }
}

/// A key binding: the presses that trigger it, help text, and an enabled flag.
///
/// Disabled bindings never match and are skipped by help views.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    /// Key presses that trigger this binding.
    pub keys: Vec<KeyPress>,
    /// Help metadata for this binding.
    pub help: Help,
    /// When true the binding never matches.
    pub disabled: bool,
}

impl Binding {
    /// Creates a binding from the given key presses with empty help text.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Attaches help metadata (builder style).
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Returns true when this binding is enabled and has at least one key.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Returns true when the key message matches one of this binding's keys.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        !self.disabled
            && self
                .keys
                .iter()
                .any(|k| k.code == msg.key && k.mods == msg.modifiers)
    }
}

/// A configuration option for [`new_binding`].
pub struct BindingOpt(OptKind);

enum OptKind {
    Keys(Vec<KeyPress>),
    Help(Help),
    Disabled,
}

/// Builds a [`Binding`] from a list of options.
///
/// # Examples
///
/// ```rust
/// use bubbletea_extras::key::{new_binding, with_help, with_keys_str};
///
/// let pick = new_binding(vec![
///     with_keys_str(&["ctrl+p"]),
///     with_help("ctrl+p", "pick recipient"),
/// ]);
/// ```
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding::default();
    for opt in opts {
        match opt.0 {
            OptKind::Keys(keys) => binding.keys = keys,
            OptKind::Help(help) => binding.help = help,
            OptKind::Disabled => binding.disabled = true,
        }
    }
    binding
}

/// Option: sets the binding's keys from [`KeyPress`] values.
pub fn with_keys<K: Into<KeyPress>>(keys: Vec<K>) -> BindingOpt {
    BindingOpt(OptKind::Keys(keys.into_iter().map(Into::into).collect()))
}

/// Option: sets the binding's keys from key names.
///
/// Recognizes named keys (`"enter"`, `"space"`, `"esc"`, `"tab"`,
/// `"backspace"`, arrows, `"pgup"`/`"pgdown"`, `"home"`/`"end"`,
/// `"delete"`), single characters, and `"ctrl+<c>"` / `"alt+<c>"`
/// combinations. Unrecognized names are skipped.
pub fn with_keys_str(keys: &[&str]) -> BindingOpt {
    BindingOpt(OptKind::Keys(
        keys.iter().filter_map(|name| parse_key(name)).collect(),
    ))
}

/// Option: sets the binding's help metadata.
pub fn with_help(key: &str, desc: &str) -> BindingOpt {
    BindingOpt(OptKind::Help(Help {
        key: key.to_string(),
        desc: desc.to_string(),
    }))
}

/// Option: creates the binding disabled.
pub fn with_disabled() -> BindingOpt {
    BindingOpt(OptKind::Disabled)
}

static NAMED_KEYS: Lazy<HashMap<&'static str, KeyCode>> = Lazy::new(|| {
    HashMap::from([
        ("enter", KeyCode::Enter),
        ("space", KeyCode::Char(' ')),
        ("esc", KeyCode::Esc),
        ("tab", KeyCode::Tab),
        ("backspace", KeyCode::Backspace),
        ("up", KeyCode::Up),
        ("down", KeyCode::Down),
        ("left", KeyCode::Left),
        ("right", KeyCode::Right),
        ("pgup", KeyCode::PageUp),
        ("pgdown", KeyCode::PageDown),
        ("home", KeyCode::Home),
        ("end", KeyCode::End),
        ("delete", KeyCode::Delete),
    ])
});

fn parse_key(name: &str) -> Option<KeyPress> {
    if let Some(code) = NAMED_KEYS.get(name) {
        return Some(KeyPress::from(*code));
    }
    if let Some(rest) = name.strip_prefix("ctrl+") {
        let c = single_char(rest)?;
        return Some(KeyPress::from((KeyCode::Char(c), KeyModifiers::CONTROL)));
    }
    if let Some(rest) = name.strip_prefix("alt+") {
        let c = single_char(rest)?;
        return Some(KeyPress::from((KeyCode::Char(c), KeyModifiers::ALT)));
    }
    single_char(name).map(|c| KeyPress::from(KeyCode::Char(c)))
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Trait for widgets that expose their key bindings for help views.
pub trait KeyMap {
    /// Returns the bindings for the short help view.
    fn short_help(&self) -> Vec<&Binding>;

    /// Returns the bindings for the full help view, grouped in columns.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_keys() {
        assert_eq!(
            parse_key("enter"),
            Some(KeyPress::from(KeyCode::Enter))
        );
        assert_eq!(
            parse_key("space"),
            Some(KeyPress::from(KeyCode::Char(' ')))
        );
        assert_eq!(parse_key("bogus-key"), None);
    }

    #[test]
    fn test_parse_modified_keys() {
        assert_eq!(
            parse_key("ctrl+p"),
            Some(KeyPress::from((KeyCode::Char('p'), KeyModifiers::CONTROL)))
        );
        assert_eq!(
            parse_key("alt+x"),
            Some(KeyPress::from((KeyCode::Char('x'), KeyModifiers::ALT)))
        );
    }

    #[test]
    fn test_binding_matches() {
        let binding = new_binding(vec![
            with_keys_str(&["enter", "space"]),
            with_help("enter", "confirm"),
        ]);

        let enter = KeyMsg {
            key: KeyCode::Enter,
            modifiers: KeyModifiers::empty(),
        };
        assert!(binding.matches(&enter));

        let other = KeyMsg {
            key: KeyCode::Char('q'),
            modifiers: KeyModifiers::empty(),
        };
        assert!(!binding.matches(&other));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut binding = Binding::new(vec![KeyCode::Enter]);
        binding.set_enabled(false);

        let enter = KeyMsg {
            key: KeyCode::Enter,
            modifiers: KeyModifiers::empty(),
        };
        assert!(!binding.matches(&enter));
        assert!(!binding.enabled());
    }

    #[test]
    fn test_modifiers_must_match() {
        let binding = new_binding(vec![with_keys_str(&["ctrl+p"])]);

        let plain_p = KeyMsg {
            key: KeyCode::Char('p'),
            modifiers: KeyModifiers::empty(),
        };
        assert!(!binding.matches(&plain_p));

        let ctrl_p = KeyMsg {
            key: KeyCode::Char('p'),
            modifiers: KeyModifiers::CONTROL,
        };
        assert!(binding.matches(&ctrl_p));
    }
}
