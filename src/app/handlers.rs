//! Command execution and message handling for the App.

use std::sync::Arc;

use crossterm::event::KeyEvent;

use super::search::spawn_search;
use super::{App, AppMessage, NavAction, ServiceStatus, ViewState};
use crate::input::Command;
use crate::models::SourceKind;

impl App {
    /// Map a key press to a command and execute it.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let context = self.input_context();
        if let Some(cmd) = self.registry().dispatch(key, &context) {
            self.execute(cmd);
        }
    }

    pub fn execute(&mut self, cmd: Command) {
        if cmd.affects_view() {
            self.mark_dirty();
        }

        match cmd {
            Command::Quit => self.quit(),
            Command::Browse(kind) => self.browse(kind),
            Command::InsertChar(c) => self.input.push(c),
            Command::Backspace => {
                self.input.pop();
            }
            Command::ClearInput => self.input.clear(),
            Command::Submit => self.submit_search(),
            Command::MoveUp => self.move_cursor(-1),
            Command::MoveDown => self.move_cursor(1),
            Command::Select => self.select_current(),
            Command::Back => {
                self.view.apply(NavAction::Back);
            }
            Command::ScrollUp(lines) => self.scroll_by(-(lines as i32)),
            Command::ScrollDown(lines) => self.scroll_by(lines as i32),
            Command::ScrollPageUp => self.page(-1),
            Command::ScrollPageDown => self.page(1),
            Command::CloseResults => {
                self.search.close();
                self.results_scroll = 0;
            }
            Command::Noop => {}
        }
    }

    /// Handle a message from a background task.
    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::SearchCompleted {
                request_id,
                outcome,
            } => {
                let succeeded = outcome.is_ok();
                if self.search.complete(request_id, outcome) {
                    if succeeded {
                        self.results_scroll = 0;
                    }
                    self.mark_dirty();
                }
            }
            AppMessage::SelectionExpired { generation } => {
                if self.selection.expire(generation) {
                    self.mark_dirty();
                }
            }
            AppMessage::ServiceHealth { online } => {
                self.service_status = if online {
                    ServiceStatus::Online
                } else {
                    ServiceStatus::Offline
                };
                self.mark_dirty();
            }
        }
    }

    fn browse(&mut self, kind: SourceKind) {
        if self.view.apply(NavAction::Browse(kind)) {
            self.list_cursor = 0;
            self.selection.select(kind.label());
        }
    }

    fn submit_search(&mut self) {
        let Some((request_id, query)) = self.search.submit(&self.input) else {
            return;
        };
        spawn_search(
            Arc::clone(&self.backend),
            request_id,
            query,
            self.message_tx.clone(),
        );
    }

    fn select_current(&mut self) {
        let Some(summary) = self.current_summaries().get(self.list_cursor).cloned() else {
            return;
        };
        if self.view.apply(NavAction::Select(summary.id.clone())) {
            self.detail_scroll = 0;
            self.selection.select(summary.display_name());
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.current_summaries().len();
        if len == 0 {
            self.list_cursor = 0;
            return;
        }
        let next = self.list_cursor.saturating_add_signed(delta);
        self.list_cursor = next.min(len - 1);
    }

    fn scroll_by(&mut self, delta: i32) {
        let target = if self.overlay_open() {
            &mut self.results_scroll
        } else if matches!(self.view.state(), ViewState::CollectionDetail(..)) {
            &mut self.detail_scroll
        } else {
            return;
        };
        *target = (i32::from(*target) + delta).clamp(0, i32::from(u16::MAX)) as u16;
    }

    fn page(&mut self, direction: i32) {
        let page = i32::from(self.viewport_height.max(1));
        if !self.overlay_open() && matches!(self.view.state(), ViewState::CollectionList(_)) {
            self.move_cursor((direction * page) as isize);
        } else {
            self.scroll_by(direction * page);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::SearchSessionState;
    use crate::dataset::{DatasetIndex, RecordStore};
    use crate::error::RetrievalError;
    use crate::models::{CollectionId, Record, SearchQuery, SearchResult};
    use crate::retrieval::SearchBackend;
    use async_trait::async_trait;

    struct EchoBackend;

    #[async_trait]
    impl SearchBackend for EchoBackend {
        async fn search(&self, query: &SearchQuery) -> Result<SearchResult, RetrievalError> {
            Ok(SearchResult {
                query: query.text.clone(),
                processed_query: None,
                items: Vec::new(),
                explanation: None,
            })
        }
    }

    fn record(kind: SourceKind, collection: &str, name: &str) -> Record {
        Record {
            id: format!("{}-1", collection),
            collection_id: CollectionId::from(collection),
            collection_name_ar: name.to_string(),
            collection_name_en: String::new(),
            sequence_number: Some(1),
            arabic_text: "نص".to_string(),
            english_text: None,
            urdu_text: None,
            narrator: None,
            source_kind: kind,
        }
    }

    fn app() -> App {
        let store = RecordStore::from_records(
            vec![
                record(SourceKind::Verse, "1", "الفاتحة"),
                record(SourceKind::Verse, "2", "البقرة"),
            ],
            vec![record(SourceKind::Narration, "1", "بدء الوحي")],
        );
        App::new(Arc::new(DatasetIndex::new(store)), Arc::new(EchoBackend))
    }

    #[tokio::test]
    async fn test_browse_and_select_show_notice() {
        let mut app = app();
        app.execute(Command::Browse(SourceKind::Verse));
        assert_eq!(app.view.state(), &ViewState::CollectionList(SourceKind::Verse));
        assert_eq!(app.highlighted_kind(), Some(SourceKind::Verse));

        app.execute(Command::MoveDown);
        app.execute(Command::MoveDown);
        assert_eq!(app.list_cursor, 1);

        app.execute(Command::Select);
        assert_eq!(
            app.view.state(),
            &ViewState::CollectionDetail(SourceKind::Verse, CollectionId::from("2"))
        );
        assert_eq!(app.selection.label(), Some("البقرة"));
        assert_eq!(app.highlighted_kind(), None);
    }

    #[tokio::test]
    async fn test_blank_submit_spawns_nothing() {
        let mut app = app();
        app.input = "   ".to_string();
        app.execute(Command::Submit);
        assert!(matches!(app.search.state(), SearchSessionState::Idle));
    }

    #[tokio::test]
    async fn test_submit_round_trip_through_channel() {
        let mut app = app();
        let mut rx = app.message_rx.take().unwrap();
        "sabr".chars().for_each(|c| app.execute(Command::InsertChar(c)));
        app.execute(Command::Submit);
        assert!(app.search.is_searching());

        let msg = rx.recv().await.unwrap();
        app.handle_message(msg);
        assert_eq!(app.search.displayed().unwrap().query, "sabr");
        assert!(app.overlay_open());

        app.execute(Command::CloseResults);
        assert!(!app.overlay_open());
    }

    #[tokio::test]
    async fn test_scroll_and_back() {
        let mut app = app();
        app.execute(Command::Browse(SourceKind::Narration));
        app.execute(Command::Select);
        app.execute(Command::ScrollDown(3));
        app.execute(Command::ScrollUp(1));
        assert_eq!(app.detail_scroll, 2);
        app.execute(Command::ScrollUp(10));
        assert_eq!(app.detail_scroll, 0);

        app.execute(Command::Back);
        assert_eq!(app.view.state(), &ViewState::CollectionList(SourceKind::Narration));
        app.execute(Command::Back);
        assert_eq!(app.view.state(), &ViewState::Home);
    }

    #[tokio::test]
    async fn test_service_health_message() {
        let mut app = app();
        app.handle_message(AppMessage::ServiceHealth { online: false });
        assert_eq!(app.service_status, ServiceStatus::Offline);
    }
}
