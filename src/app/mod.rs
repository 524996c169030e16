//! Application state and logic for the TUI.
//!
//! - [`App`] owns the API handle, the message channel and the navigation stack
//! - [`Screen`] is a detail screen pushed above the conference list
//! - [`AppMessage`] carries background results back to the main loop

mod handlers;
mod messages;
mod navigation;
mod types;

pub use messages::AppMessage;
pub use types::{ActiveView, Screen};

use tokio::sync::mpsc;

use crate::conference::SharedApi;
use crate::view_state::ConferenceListView;

/// Opens a URL outside the terminal.
pub type UrlOpener = fn(&str) -> std::io::Result<()>;

/// Default [`UrlOpener`]: the system browser.
pub fn open_in_browser(url: &str) -> std::io::Result<()> {
    webbrowser::open(url)
}

/// Main application state.
pub struct App {
    /// Shared data access used by every view
    api: SharedApi,
    /// Root screen, never popped
    root: ConferenceListView,
    /// Detail screens above the root, topmost last
    stack: Vec<Screen>,
    /// Sender handed to every view for background results
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver taken by the main loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Flag to quit the application
    pub should_quit: bool,
    /// Set whenever visible state changes
    pub needs_redraw: bool,
    /// Animation counter for the loading spinner
    pub tick_count: u64,
    /// One-line feedback shown in the footer
    pub status: Option<String>,
    open_url: UrlOpener,
}

impl App {
    /// Build the app and start loading the conference list.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(api: SharedApi) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let root = ConferenceListView::new(api.clone(), message_tx.clone());
        Self {
            api,
            root,
            stack: Vec::new(),
            message_tx,
            message_rx: Some(message_rx),
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            status: None,
            open_url: open_in_browser,
        }
    }

    /// Replace how URLs are opened.
    pub fn with_url_opener(mut self, open_url: UrlOpener) -> Self {
        self.open_url = open_url;
        self
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance animations. Only a visible spinner needs a redraw.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.is_loading() {
            self.mark_dirty();
        }
    }

    /// Whether the screen in front is waiting on a fetch.
    pub fn is_loading(&self) -> bool {
        match self.stack.last() {
            Some(screen) => screen.is_loading(),
            None => self.root.state().is_loading(),
        }
    }

    pub fn root(&self) -> &ConferenceListView {
        &self.root
    }

    /// The screen in front.
    pub fn active_view(&self) -> ActiveView<'_> {
        match self.stack.last() {
            Some(Screen::Session(view)) => ActiveView::Session(view),
            Some(Screen::Speaker(view)) => ActiveView::Speaker(view),
            None => ActiveView::List(&self.root),
        }
    }

    /// Number of screens, including the root.
    pub fn depth(&self) -> usize {
        self.stack.len() + 1
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("root", &self.root)
            .field("stack", &self.stack)
            .field("should_quit", &self.should_quit)
            .finish()
    }
}
