//! Input context for choosing the active key bindings.

use crate::app::ViewState;

/// Screen kinds, without their payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Home,
    CollectionList,
    CollectionDetail,
}

impl From<&ViewState> for Screen {
    fn from(state: &ViewState) -> Self {
        match state {
            ViewState::Home => Screen::Home,
            ViewState::CollectionList(_) => Screen::CollectionList,
            ViewState::CollectionDetail(..) => Screen::CollectionDetail,
        }
    }
}

/// What the dispatcher needs to know about the app.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputContext {
    pub screen: Screen,
    /// The search results overlay is showing and takes all input
    pub overlay_open: bool,
}

impl InputContext {
    pub fn new(screen: Screen, overlay_open: bool) -> Self {
        Self {
            screen,
            overlay_open,
        }
    }
}
