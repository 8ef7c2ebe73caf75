//! Application state and its event handling.

mod handlers;
mod messages;
pub mod navigation;
pub mod search;
pub mod selection;

pub use messages::AppMessage;
pub use navigation::{NavAction, ViewController, ViewState};
pub use search::{spawn_search, RequestId, SearchSession, SearchSessionState};
pub use selection::{ScheduledCallback, SelectionNotice, SelectionPulse, SELECTION_TTL};

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::dataset::DatasetIndex;
use crate::input::{CommandRegistry, InputContext, Screen};
use crate::models::{CollectionSummary, SourceKind};
use crate::retrieval::SearchBackend;

/// Connectivity of the retrieval service as reported by the health probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceStatus {
    #[default]
    Unknown,
    Online,
    Offline,
}

/// Main application state
pub struct App {
    pub view: ViewController,
    pub selection: SelectionPulse,
    pub search: SearchSession,
    pub index: Arc<DatasetIndex>,
    backend: Arc<dyn SearchBackend>,
    registry: CommandRegistry,
    /// Query being typed on the home screen
    pub input: String,
    /// Cursor in the collection list
    pub list_cursor: usize,
    pub detail_scroll: u16,
    pub results_scroll: u16,
    pub service_status: ServiceStatus,
    /// Flag to track if app should quit
    pub should_quit: bool,
    /// Set on any state change; cleared after drawing
    pub needs_redraw: bool,
    /// Tick counter for the "Searching..." spinner
    pub tick_count: u64,
    /// Rows available to scrolled content, updated on resize
    pub viewport_height: u16,
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
}

impl App {
    pub fn new(index: Arc<DatasetIndex>, backend: Arc<dyn SearchBackend>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            view: ViewController::new(),
            selection: SelectionPulse::new(message_tx.clone()),
            search: SearchSession::new(),
            index,
            backend,
            registry: CommandRegistry::new(),
            input: String::new(),
            list_cursor: 0,
            detail_scroll: 0,
            results_scroll: 0,
            service_status: ServiceStatus::Unknown,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            viewport_height: 20,
            message_tx,
            message_rx: Some(message_rx),
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance the animation tick. Only dirties the frame while a search runs.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.search.is_searching() {
            self.mark_dirty();
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn update_terminal_dimensions(&mut self, _width: u16, height: u16) {
        self.viewport_height = height.saturating_sub(4).max(1);
        self.mark_dirty();
    }

    /// The results overlay is shown while a result or an error banner exists.
    pub fn overlay_open(&self) -> bool {
        self.search.displayed().is_some() || self.search.error_banner().is_some()
    }

    pub fn input_context(&self) -> InputContext {
        InputContext::new(Screen::from(self.view.state()), self.overlay_open())
    }

    /// Summaries of the corpus currently being browsed.
    pub fn current_summaries(&self) -> &[CollectionSummary] {
        match self.view.state().kind() {
            Some(kind) => self.index.summaries(kind),
            None => &[],
        }
    }

    /// Corpus pill highlighted on the home screen, if the live notice names one.
    pub fn highlighted_kind(&self) -> Option<SourceKind> {
        let label = self.selection.label()?;
        SourceKind::ALL.into_iter().find(|kind| kind.label() == label)
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }
}
