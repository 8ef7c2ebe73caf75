//! Terminal UI rendering.
//!
//! Every screen shares a one-row header with the corpus navigation and a
//! one-row footer. The results overlay and the selection notice are drawn on
//! top of whatever screen is active.

mod collections;
mod helpers;
mod home;
mod notice;
mod results;
mod theme;

pub use helpers::{centered_rect, spinner_frame, truncate_to_width};
pub use home::{SUBTITLE, TITLE};
pub use results::results_lines;
pub use theme::{COLOR_ACCENT, COLOR_DIM, COLOR_ERROR, COLOR_HEADER};

use chrono::Datelike;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, ServiceStatus, ViewState};
use crate::models::SourceKind;
use theme::COLOR_ONLINE;

pub const APP_TITLE: &str = "Quran & Hadith";

/// Render the whole UI for the current state.
pub fn render(frame: &mut Frame, app: &mut App) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, header, app);

    let body_inner = Rect {
        x: body.x + 1,
        width: body.width.saturating_sub(2),
        ..body
    };
    match app.view.state().clone() {
        ViewState::Home => {
            home::render_home(frame, body_inner, app);
            render_footer(frame, footer);
        }
        ViewState::CollectionList(kind) => {
            collections::render_collection_list(frame, body_inner, app, kind);
            render_hints(frame, footer, "↑/↓ move  Enter open  Esc back  F1/F2 switch  Ctrl+C quit");
        }
        ViewState::CollectionDetail(kind, id) => {
            collections::render_collection_detail(frame, body_inner, app, kind, id.as_str());
            render_hints(frame, footer, "↑/↓ PgUp/PgDn scroll  Esc back  F1/F2 switch  Ctrl+C quit");
        }
    }

    if app.overlay_open() {
        results::render_results_overlay(frame, body, app);
    }

    if let Some(notice) = app.selection.notice() {
        notice::render_selection_notice(frame, body, notice);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let [nav, status] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(14)]).areas(area);
    let active = app.view.state().kind();
    let mut spans = vec![Span::styled(
        format!(" {} ", APP_TITLE),
        Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD),
    )];

    for (i, kind) in SourceKind::ALL.into_iter().enumerate() {
        let style = if active == Some(kind) {
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        spans.push(Span::raw("  "));
        spans.push(Span::styled(format!("F{} {}", i + 1, kind.label()), style));
    }
    spans.push(Span::styled("  Prayer Time", Style::default().fg(COLOR_DIM)));
    frame.render_widget(Paragraph::new(Line::from(spans)), nav);

    let (dot, label, color) = match app.service_status {
        ServiceStatus::Unknown => ("○", "connecting", COLOR_DIM),
        ServiceStatus::Online => ("●", "online", COLOR_ONLINE),
        ServiceStatus::Offline => ("●", "offline", COLOR_ERROR),
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("{} {} ", dot, label),
            Style::default().fg(color),
        )))
        .alignment(Alignment::Right),
        status,
    );
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let year = chrono::Local::now().year();
    let line = Line::from(vec![
        Span::styled("About  Contact  Privacy", Style::default().fg(COLOR_DIM)),
        Span::styled(
            format!("   © {} Quran_Hadit Retrieval system", year),
            Style::default().fg(COLOR_DIM),
        ),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_hints(frame: &mut Frame, area: Rect, hints: &str) {
    frame.render_widget(
        Paragraph::new(Span::styled(hints.to_string(), Style::default().fg(COLOR_DIM)))
            .alignment(Alignment::Center),
        area,
    );
}
