#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-extras/")]

//! # bubbletea-extras
//!
//! Form field widgets and a load-more list paging helper for building terminal
//! applications with [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! ## Overview
//!
//! bubbletea-extras provides display-oriented form fields (plain text, image,
//! button-like and recipient fields) plus a cursor-based "load more" paging
//! plugin that attaches to a host list view. Each component follows the Elm
//! Architecture pattern with `update()` and `view()` methods, so it drops into
//! a bubbletea-rs model like any other widget.
//!
//! ## Components
//!
//! | Component | Description | Use Case |
//! |-----------|-------------|----------|
//! | `PlainField` | Read-only label/value display | Key/value detail panes |
//! | `ImageField` | Image source display with press handling | Avatars, attachments |
//! | `ButtonField` | Tappable field with detail text | Counts with drill-down |
//! | `RecipientField` | Editable line with a picker trigger | Message composition |
//! | `LoadMore` | Cursor-based list paging indicator | Infinite lists |
//!
//! The `format` module carries the presentation helpers the widgets' hosts
//! tend to need: relative durations, rating severity classes, and signed
//! rating strings.
//!
//! ## Load-more paging
//!
//! The paging plugin does not fetch or store records itself. It observes the
//! host view's load lifecycle and decides when to show its indicator and when
//! to ask the data source for another page:
//!
//! ```rust
//! use bubbletea_extras::loadmore::{self, DataSource, PageRequest, Paginated, Record};
//!
//! struct Row { id: String }
//!
//! impl Record for Row {
//!     fn sort_key(&self, _field: &str) -> String {
//!         self.id.clone()
//!     }
//! }
//!
//! struct Feed {
//!     rows: Vec<Row>,
//!     pending: Option<PageRequest>,
//! }
//!
//! impl DataSource for Feed {
//!     type Item = Row;
//!     fn current_count(&self) -> usize { self.rows.len() }
//!     fn total_count(&self) -> Option<usize> { None }
//!     fn last_record(&self) -> Option<&Row> { self.rows.last() }
//!     fn set_page_request(&mut self, request: PageRequest) { self.pending = Some(request); }
//!     fn fetch_next_page(&mut self) { /* kick off the async read */ }
//! }
//!
//! struct FeedView { feed: Option<Feed> }
//!
//! impl Paginated for FeedView {
//!     type Source = Feed;
//!     fn data_source(&self) -> Option<&Feed> { self.feed.as_ref() }
//!     fn data_source_mut(&mut self) -> Option<&mut Feed> { self.feed.as_mut() }
//! }
//!
//! let mut plugin = loadmore::Model::new();
//! let view = FeedView { feed: Some(Feed { rows: vec![], pending: None }) };
//! plugin.attach(&view).unwrap();
//! ```
//!
//! ## Registration
//!
//! Hosts that build screens from declarative descriptions can map kind tags to
//! constructors through [`registry::Registry`] instead of hard-coding each
//! widget type; [`registry::default_registry`] pre-populates the built-ins.

pub mod buttonfield;
pub mod format;
pub mod imagefield;
pub mod key;
pub mod loadmore;
pub mod plainfield;
pub mod recipientfield;
pub mod registry;

use bubbletea_rs::Cmd;
use std::sync::atomic::{AtomicI64, Ordering};
use unicode_width::UnicodeWidthStr;

// Instance ids for message routing; shared by every widget that emits
// messages, so ids are unique across widget kinds.
static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Generates the next unique widget instance id.
pub(crate) fn next_widget_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Measures the display width of `s` with any ANSI styling stripped first.
pub(crate) fn display_width(s: &str) -> usize {
    strip_ansi_escapes::strip_str(s).width()
}

/// Core trait for components that support focus management.
///
/// Focused components receive keyboard input; blurred components ignore it.
/// Only widgets that edit text implement this; display-only fields have no
/// focus state.
///
/// # Examples
///
/// ```rust
/// use bubbletea_extras::prelude::*;
///
/// let mut field = RecipientField::new("To");
/// assert!(!field.focused());
///
/// field.focus();
/// assert!(field.focused());
///
/// field.blur();
/// assert!(!field.focused());
/// ```
pub trait Component {
    /// Sets the component to focused state.
    ///
    /// May return a command for initialization tasks such as starting a
    /// cursor blink timer.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred (unfocused) state.
    fn blur(&mut self);

    /// Returns the current focus state of the component.
    fn focused(&self) -> bool;
}

/// Capability trait for anything that renders itself to a string.
///
/// This is the seam the widget registry builds on: a registered constructor
/// produces a `Box<dyn Renderable>`, and the host composes the resulting
/// views without knowing the concrete widget types.
///
/// # Examples
///
/// ```rust
/// use bubbletea_extras::{PlainField, Renderable};
///
/// fn render_all(widgets: &[Box<dyn Renderable>]) -> String {
///     widgets.iter().map(|w| w.view()).collect::<Vec<_>>().join("\n")
/// }
///
/// let field: Box<dyn Renderable> = Box::new(PlainField::new("Name").with_value("Ada"));
/// assert!(!field.view().is_empty());
/// ```
pub trait Renderable {
    /// Renders the component as a string.
    fn view(&self) -> String;
}

pub use buttonfield::Model as ButtonField;
pub use format::{format_rating, rating_class, relative_duration, RatingClass};
pub use imagefield::Model as ImageField;
pub use key::{new_binding, with_disabled, with_help, with_keys, with_keys_str, Binding, KeyMap};
pub use loadmore::Model as LoadMore;
pub use plainfield::Model as PlainField;
pub use recipientfield::Model as RecipientField;
pub use registry::{default_registry, Registry};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_extras::prelude::*;
/// ```
pub mod prelude {
    pub use crate::buttonfield::Model as ButtonField;
    pub use crate::format::{format_rating, rating_class, relative_duration, RatingClass};
    pub use crate::imagefield::Model as ImageField;
    pub use crate::key::{new_binding, with_help, with_keys_str, Binding, KeyMap};
    pub use crate::loadmore::{
        BeforeLoad, DataSource, ExhaustPolicy, Model as LoadMore, PageRequest, Paginated, Record,
    };
    pub use crate::plainfield::Model as PlainField;
    pub use crate::recipientfield::Model as RecipientField;
    pub use crate::registry::{default_registry, Registry};
    pub use crate::{Component, Renderable};
}
