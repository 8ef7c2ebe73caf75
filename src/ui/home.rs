//! Home screen: search box and corpus pills.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::helpers::spinner_frame;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};
use crate::app::App;
use crate::models::SourceKind;

pub const TITLE: &str = "SEARCH QURAN & HADITH";
pub const SUBTITLE: &str = "authoritative collections with fast retrievals";
const PLACEHOLDER: &str = "Type to search, Enter to submit";

pub fn render_home(frame: &mut Frame, area: Rect, app: &App) {
    let [_, title, subtitle, _, input, status, _, pills, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            TITLE,
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        title,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(SUBTITLE, Style::default().fg(COLOR_DIM)))
            .alignment(Alignment::Center),
        subtitle,
    );

    render_search_box(frame, input, app);

    if app.search.is_searching() {
        let line = Line::from(vec![
            Span::styled(spinner_frame(app.tick_count), Style::default().fg(COLOR_ACCENT)),
            Span::styled(
                " Searching...",
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), status);
    }

    render_pills(frame, pills, app);
}

fn render_search_box(frame: &mut Frame, area: Rect, app: &App) {
    let width = area.width.min(70);
    let area = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    };

    let content = if app.input.is_empty() {
        Line::from(Span::styled(PLACEHOLDER, Style::default().fg(COLOR_DIM)))
    } else {
        Line::from(vec![
            Span::raw(app.input.as_str()),
            Span::styled("▏", Style::default().fg(COLOR_ACCENT)),
        ])
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" Search ");
    frame.render_widget(Paragraph::new(content).block(block), area);
}

fn render_pills(frame: &mut Frame, area: Rect, app: &App) {
    let highlighted = app.highlighted_kind();
    let mut spans = Vec::new();
    for (i, kind) in SourceKind::ALL.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        let style = if highlighted == Some(kind) {
            Style::default()
                .fg(ratatui::style::Color::Black)
                .bg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_ACCENT)
        };
        spans.push(Span::styled(format!(" {} ", kind.label()), style));
        spans.push(Span::styled(
            format!(" F{}", i + 1),
            Style::default().fg(COLOR_DIM),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}
