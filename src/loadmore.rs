//! A "load more" paging plugin for list views backed by cursor-reading
//! data sources.
//!
//! The plugin does not implement pagination itself: it keeps the loading/idle
//! state for one list view, fills the data source's parameter channel with a
//! cursor before each load, and decides when its indicator is visible and
//! when the source should be asked for the next page. Sources that read from
//! key/value stores resume from the `last_item_key` cursor; sources that can
//! report a total let the plugin hide itself once everything is loaded, and
//! sources that can't are paged indefinitely until a fetch returns no new
//! records.
//!
//! Two trigger modes exist: **manual**, where the rendered indicator reads
//! "Load More..." and a tap (or the bound key) requests the next page, and
//! **automatic**, where reaching the trailing scroll boundary requests it.
//! Either way every trigger funnels through [`Model::request_next_page`], so
//! a request can never be issued while one is in flight.
//!
//! # Lifecycle
//!
//! The host wires three notifications:
//!
//! 1. [`Model::attach`] once, when the list view is set up (fails fast when
//!    the view has no data source).
//! 2. [`Model::on_before_load`] just before the source starts a load; this
//!    snapshots the record count and fills the parameter channel.
//! 3. [`Model::on_load_complete`] after records arrive; this decides
//!    indicator visibility and clears the loading flag.
//!
//! Fetch failures are reported with [`Model::on_fetch_failed`] (or by
//! dispatching the command from [`Model::fetch_failed`]); the indicator then
//! shows its error text and the next tap retries.
//!
//! # Examples
//!
//! ```rust
//! use bubbletea_extras::loadmore::{DataSource, Model, PageRequest, Paginated, Record};
//!
//! struct Message { id: String }
//!
//! impl Record for Message {
//!     fn sort_key(&self, _field: &str) -> String {
//!         self.id.clone()
//!     }
//! }
//!
//! struct Inbox {
//!     messages: Vec<Message>,
//!     request: Option<PageRequest>,
//! }
//!
//! impl DataSource for Inbox {
//!     type Item = Message;
//!     fn current_count(&self) -> usize { self.messages.len() }
//!     fn total_count(&self) -> Option<usize> { None }
//!     fn last_record(&self) -> Option<&Message> { self.messages.last() }
//!     fn set_page_request(&mut self, request: PageRequest) { self.request = Some(request); }
//!     fn fetch_next_page(&mut self) {}
//! }
//!
//! struct InboxView { inbox: Option<Inbox> }
//!
//! impl Paginated for InboxView {
//!     type Source = Inbox;
//!     fn data_source(&self) -> Option<&Inbox> { self.inbox.as_ref() }
//!     fn data_source_mut(&mut self) -> Option<&mut Inbox> { self.inbox.as_mut() }
//! }
//!
//! let mut plugin = Model::new();
//! let mut view = InboxView {
//!     inbox: Some(Inbox { messages: vec![], request: None }),
//! };
//!
//! plugin.attach(&view).unwrap();
//! plugin.on_before_load(&mut view);
//!
//! // An empty list still issues a first-page request with an empty cursor.
//! let request = view.inbox.as_ref().unwrap().request.clone().unwrap();
//! assert_eq!(request.last_item_key, "");
//! assert_eq!(request.item_count, 0);
//! ```

use crate::{key, next_widget_id, Renderable};
use bubbletea_rs::{tick as bubbletea_tick, Cmd, KeyMsg, Msg};
use lipgloss_extras::prelude::*;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, trace, warn};

const PREV_COUNT_RESET: i64 = -1;

/// Errors reported by the paging plugin.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The list view has no data source to page against.
    #[error("cannot attach: list view has no data source")]
    MisconfiguredView,
}

/// A record the data source can hand out a resume cursor for.
pub trait Record {
    /// Returns the value of the named sort field, used as the resume cursor.
    fn sort_key(&self, field: &str) -> String;
}

/// The external data source contract.
///
/// The plugin never stores or queries records; it only reads counts, derives
/// a cursor from the last held record, and asks for the next page. Fetches
/// are fire-and-forget: completion is observed through the host's
/// load-complete notification, and failures through
/// [`Model::on_fetch_failed`].
pub trait DataSource {
    /// The record type this source holds.
    type Item: Record;

    /// Number of records currently materialized.
    fn current_count(&self) -> usize;

    /// Total records available upstream, when the source can report one.
    ///
    /// Sources with an unknown total return `None`; the plugin then pages
    /// indefinitely and relies on the no-new-data guard to stop.
    fn total_count(&self) -> Option<usize>;

    /// The last currently-held record, if any.
    fn last_record(&self) -> Option<&Self::Item>;

    /// Receives the parameters for the next read (the parameter channel).
    fn set_page_request(&mut self, request: PageRequest);

    /// Starts fetching the next page. Must not block.
    fn fetch_next_page(&mut self);
}

/// Capability of a host list view the plugin can attach to.
pub trait Paginated {
    /// The view's data source type.
    type Source: DataSource;

    /// The view's data source, when configured.
    fn data_source(&self) -> Option<&Self::Source>;

    /// Mutable access to the view's data source, when configured.
    fn data_source_mut(&mut self) -> Option<&mut Self::Source>;

    /// Whether the view shows its own loading indicator during loads.
    ///
    /// When true, [`Model::on_before_load`] asks the host to suppress that
    /// indicator for loads the plugin itself triggered, so the user doesn't
    /// see two spinners.
    fn has_loading_indicator(&self) -> bool {
        false
    }
}

/// Parameters handed to the data source before each read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Sort-field value of the last currently-held record; empty when the
    /// list holds nothing yet.
    pub last_item_key: String,
    /// Number of records currently held.
    pub item_count: usize,
    /// Read direction hint for the source; 0 for the default direction.
    pub direction: i32,
}

/// Outcome of the before-load hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeforeLoad {
    /// Let the host's load proceed normally.
    Proceed,
    /// Proceed, but the host should suppress its own loading indicator;
    /// the plugin is already showing one for this load.
    SuppressIndicator,
}

/// What a no-new-data exhaustion means for later requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExhaustPolicy {
    /// Exhaustion is final: no further requests until the plugin is
    /// re-attached or [`Model::reset`] is called.
    #[default]
    Permanent,
    /// A later load that changes the record count (a host-driven refresh)
    /// clears the exhaustion latch.
    RetryAfterRefresh,
}

/// Message reporting a failed page fetch, routed by plugin instance id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailedMsg {
    /// Id of the plugin whose fetch failed.
    pub id: i64,
    /// Human-readable failure description.
    pub reason: String,
}

/// Key bindings for the paging indicator.
#[derive(Debug, Clone)]
pub struct LoadMoreKeyMap {
    /// Acts as the tap on the indicator. Default: `enter`, `space`.
    pub load_more: key::Binding,
}

impl Default for LoadMoreKeyMap {
    fn default() -> Self {
        Self {
            load_more: key::new_binding(vec![
                key::with_keys_str(&["enter", "space"]),
                key::with_help("enter", "load more"),
            ]),
        }
    }
}

impl key::KeyMap for LoadMoreKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.load_more]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![vec![&self.load_more]]
    }
}

/// Configuration for the paging plugin.
#[derive(Debug, Clone)]
pub struct Config {
    /// Automatic mode: request the next page when the scroll position
    /// reaches the trailing boundary instead of waiting for a tap.
    pub auto_paging: bool,
    /// Record field whose value is used as the resume cursor.
    pub sort_field: String,
    /// Indicator text in manual mode while idle.
    pub load_more_text: String,
    /// Indicator text while a load is in flight.
    pub loading_text: String,
    /// Indicator text after a failed fetch.
    pub error_text: String,
    /// Automatic mode: how many positions before the end of the scroll range
    /// the next page is requested.
    pub scroll_threshold: usize,
    /// What a no-new-data exhaustion means for later requests.
    pub exhaust_policy: ExhaustPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            auto_paging: false,
            sort_field: "id".to_string(),
            load_more_text: "Load More...".to_string(),
            loading_text: "Loading...".to_string(),
            error_text: "Load failed. Try again".to_string(),
            scroll_threshold: 0,
            exhaust_policy: ExhaustPolicy::default(),
        }
    }
}

/// Styling for the paging indicator.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Style for the idle "Load More..." message.
    pub message: Style,
    /// Style for the loading text.
    pub loading: Style,
    /// Style for the error text.
    pub error: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            message: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#04B575",
                    Dark: "#ECFD65",
                })
                .bold(true),
            loading: Style::new().foreground(AdaptiveColor {
                Light: "#8E8E8E",
                Dark: "#747373",
            }),
            error: Style::new().foreground(AdaptiveColor {
                Light: "#FF5F87",
                Dark: "#FF5F87",
            }),
        }
    }
}

/// The paging plugin for one list view.
///
/// One plugin instance serves one view; state never crosses instances. All
/// state transitions happen on the host's event callbacks. Nothing here
/// blocks, and there is no way to cancel a fetch once issued.
#[derive(Debug, Clone)]
pub struct Model {
    /// Configuration.
    pub config: Config,
    /// Key bindings.
    pub keymap: LoadMoreKeyMap,
    /// Styling for the indicator.
    pub styles: Styles,
    id: i64,
    loading: bool,
    failed: bool,
    exhausted: bool,
    rendered: bool,
    visible: bool,
    prev_record_count: i64,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            config: Config::default(),
            keymap: LoadMoreKeyMap::default(),
            styles: Styles::default(),
            id: next_widget_id(),
            loading: false,
            failed: false,
            exhausted: false,
            rendered: false,
            visible: false,
            prev_record_count: PREV_COUNT_RESET,
        }
    }
}

impl Model {
    /// Creates a plugin with default configuration (manual mode, cursor on
    /// `id`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole configuration (builder style).
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Switches between automatic and manual mode (builder style).
    pub fn with_auto_paging(mut self, auto_paging: bool) -> Self {
        self.config.auto_paging = auto_paging;
        self
    }

    /// Sets the cursor sort field (builder style).
    pub fn with_sort_field(mut self, field: impl Into<String>) -> Self {
        self.config.sort_field = field.into();
        self
    }

    /// Sets the idle indicator text (builder style).
    pub fn with_load_more_text(mut self, text: impl Into<String>) -> Self {
        self.config.load_more_text = text.into();
        self
    }

    /// Sets the automatic-mode trigger distance (builder style).
    pub fn with_scroll_threshold(mut self, threshold: usize) -> Self {
        self.config.scroll_threshold = threshold;
        self
    }

    /// Sets the exhaustion policy (builder style).
    pub fn with_exhaust_policy(mut self, policy: ExhaustPolicy) -> Self {
        self.config.exhaust_policy = policy;
        self
    }

    /// Returns this plugin's instance id for matching [`FetchFailedMsg`]
    /// values.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns true while a page fetch is in flight.
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Returns true when the indicator should be drawn.
    pub fn visible(&self) -> bool {
        self.rendered && self.visible
    }

    /// Returns true once the no-new-data (or all-loaded) guard has latched.
    pub fn exhausted(&self) -> bool {
        self.exhausted
    }

    /// Returns true after a fetch failure, until the next request or load.
    pub fn failed(&self) -> bool {
        self.failed
    }

    /// Attaches the plugin to a list view, resetting all paging state.
    ///
    /// Fails fast with [`Error::MisconfiguredView`] when the view has no
    /// data source, rather than silently never updating. Attaching again
    /// re-initializes the plugin for the same or another view.
    pub fn attach<V: Paginated>(&mut self, view: &V) -> Result<(), Error> {
        if view.data_source().is_none() {
            return Err(Error::MisconfiguredView);
        }
        self.prev_record_count = PREV_COUNT_RESET;
        self.loading = false;
        self.failed = false;
        self.exhausted = false;
        self.rendered = false;
        self.visible = false;
        debug!(auto_paging = self.config.auto_paging, "load-more attached");
        Ok(())
    }

    /// Detaches the plugin: the indicator disappears and paging state is
    /// cleared. Call on view teardown.
    pub fn detach(&mut self) {
        self.rendered = false;
        self.visible = false;
        self.loading = false;
        self.failed = false;
        debug!("load-more detached");
    }

    /// Clears the exhaustion and failure latches without re-attaching.
    ///
    /// Hosts call this from their refresh path when they want a previously
    /// exhausted list to page again.
    pub fn reset(&mut self) {
        self.loading = false;
        self.failed = false;
        self.exhausted = false;
    }

    /// The before-load hook: snapshots the record count and fills the data
    /// source's parameter channel with the resume cursor.
    ///
    /// An empty list issues a first-page request with an empty cursor.
    /// Returns [`BeforeLoad::SuppressIndicator`] when a plugin-triggered
    /// load is in flight over a non-empty list and the view has its own
    /// loading indicator; the host should then skip showing that indicator.
    pub fn on_before_load<V: Paginated>(&mut self, view: &mut V) -> BeforeLoad {
        let count = {
            let Some(source) = view.data_source_mut() else {
                return BeforeLoad::Proceed;
            };
            let count = source.current_count();
            let last_item_key = source
                .last_record()
                .map(|record| record.sort_key(&self.config.sort_field))
                .unwrap_or_default();
            source.set_page_request(PageRequest {
                last_item_key,
                item_count: count,
                direction: 0,
            });
            count
        };

        self.prev_record_count = count as i64;

        if self.loading && count > 0 && view.has_loading_indicator() {
            trace!("host loading indicator suppressed");
            BeforeLoad::SuppressIndicator
        } else {
            BeforeLoad::Proceed
        }
    }

    /// The load-complete hook: reads the source's counts and decides
    /// indicator visibility.
    ///
    /// The indicator hides when the source reports a total equal to the
    /// current count (all data loaded), or when the count is unchanged from
    /// the previous load (no new data; this guard works even when the total
    /// is unknown). Otherwise it shows. The loading flag is always cleared
    /// here: a load completion ends the in-flight window no matter what it
    /// delivered.
    pub fn on_load_complete<V: Paginated>(&mut self, view: &V) {
        let Some(source) = view.data_source() else {
            return;
        };
        let total = source.total_count();
        let count = source.current_count();

        // First completion renders the indicator; from here on the
        // mode-appropriate trigger (tap key or scroll boundary) is live.
        self.rendered = true;

        if self.exhausted
            && self.config.exhaust_policy == ExhaustPolicy::RetryAfterRefresh
            && count as i64 != self.prev_record_count
        {
            self.exhausted = false;
        }

        let all_loaded = total == Some(count);
        let no_new_data = self.prev_record_count == count as i64;

        if all_loaded || no_new_data || self.exhausted {
            self.visible = false;
            self.exhausted = true;
            debug!(count, total = ?total, all_loaded, "paging indicator hidden");
        } else {
            self.visible = true;
        }

        self.loading = false;
        self.failed = false;
    }

    /// The single next-page transition shared by every trigger.
    ///
    /// Tap, scroll, key message, and programmatic callers all funnel through
    /// here, so the loading guard lives in exactly one place. Returns true
    /// when a fetch was issued; false when one is already in flight, the
    /// data is exhausted, or the view has no source.
    pub fn request_next_page<V: Paginated>(&mut self, view: &mut V) -> bool {
        if self.loading {
            trace!("page request dropped: load in flight");
            return false;
        }
        if self.exhausted {
            trace!("page request dropped: data exhausted");
            return false;
        }
        let Some(source) = view.data_source_mut() else {
            return false;
        };
        self.loading = true;
        self.failed = false;
        source.fetch_next_page();
        debug!("next page requested");
        true
    }

    /// The tap signal (manual mode only). Returns true when a fetch was
    /// issued.
    pub fn on_paging_tap<V: Paginated>(&mut self, view: &mut V) -> bool {
        if self.config.auto_paging {
            return false;
        }
        self.request_next_page(view)
    }

    /// The scroll signal (automatic mode only).
    ///
    /// Requests the next page when `position` is within the configured
    /// threshold of `max_position`. Returns true when a fetch was issued.
    pub fn on_scroll<V: Paginated>(
        &mut self,
        view: &mut V,
        position: usize,
        max_position: usize,
    ) -> bool {
        if !self.config.auto_paging {
            return false;
        }
        if position + self.config.scroll_threshold >= max_position {
            self.request_next_page(view)
        } else {
            false
        }
    }

    /// Reports a failed page fetch: the in-flight window ends and the
    /// indicator re-shows in its error state. The next tap retries.
    pub fn on_fetch_failed(&mut self, reason: &str) {
        warn!(reason, "page fetch failed");
        self.loading = false;
        self.failed = true;
        self.visible = true;
    }

    /// Returns a command that reports a fetch failure for this plugin
    /// instance, for hosts that surface source errors through the message
    /// loop rather than calling [`Model::on_fetch_failed`] directly.
    pub fn fetch_failed(&self, reason: impl Into<String>) -> Cmd {
        let id = self.id;
        let reason = reason.into();
        bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(FetchFailedMsg {
                id,
                reason: reason.clone(),
            }) as Msg
        })
    }

    /// Handles messages: a key matching the load-more binding acts as the
    /// tap signal, and [`FetchFailedMsg`] values addressed to this instance
    /// apply the failure transition.
    pub fn update<V: Paginated>(&mut self, msg: &Msg, view: &mut V) {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.keymap.load_more.matches(key_msg) {
                self.on_paging_tap(view);
            }
        } else if let Some(failed) = msg.downcast_ref::<FetchFailedMsg>() {
            if failed.id == self.id {
                self.on_fetch_failed(&failed.reason);
            }
        }
    }

    /// Renders the indicator.
    ///
    /// Empty while hidden. Shows the error text after a failure, the loading
    /// text while a fetch is in flight (and whenever visible in automatic
    /// mode, where the indicator is a pure activity marker), and the
    /// "Load More..." message otherwise.
    pub fn view(&self) -> String {
        if !self.rendered || !self.visible {
            return String::new();
        }
        if self.failed {
            return self.styles.error.render(&self.config.error_text);
        }
        if self.loading || self.config.auto_paging {
            return self.styles.loading.render(&self.config.loading_text);
        }
        self.styles.message.render(&self.config.load_more_text)
    }
}

impl Renderable for Model {
    fn view(&self) -> String {
        Model::view(self)
    }
}
