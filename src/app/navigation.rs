//! View navigation state machine.

use crate::models::{CollectionId, SourceKind};

/// The screen currently shown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Home,
    CollectionList(SourceKind),
    CollectionDetail(SourceKind, CollectionId),
}

impl ViewState {
    /// Source kind of the current screen, if any.
    pub fn kind(&self) -> Option<SourceKind> {
        match self {
            ViewState::Home => None,
            ViewState::CollectionList(kind) | ViewState::CollectionDetail(kind, _) => Some(*kind),
        }
    }
}

/// A navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    /// Open the collection list of a corpus
    Browse(SourceKind),
    /// Open one collection from the current list
    Select(CollectionId),
    Back,
}

/// Owns the current [`ViewState`] and applies [`NavAction`]s to it.
#[derive(Debug, Clone, Default)]
pub struct ViewController {
    state: ViewState,
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Apply `action`; returns `false` when the action does not apply to the
    /// current state, which is then left unchanged.
    pub fn apply(&mut self, action: NavAction) -> bool {
        let next = match (&self.state, action) {
            (_, NavAction::Browse(kind)) => ViewState::CollectionList(kind),
            (ViewState::CollectionList(kind), NavAction::Select(id)) => {
                ViewState::CollectionDetail(*kind, id)
            }
            (ViewState::CollectionDetail(kind, _), NavAction::Back) => {
                ViewState::CollectionList(*kind)
            }
            (ViewState::CollectionList(_), NavAction::Back) => ViewState::Home,
            (state, action) => {
                tracing::debug!(?state, ?action, "Navigation action ignored");
                return false;
            }
        };

        tracing::debug!(from = ?self.state, to = ?next, "View transition");
        self.state = next;
        true
    }
}
