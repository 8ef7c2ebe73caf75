//! Collection list and collection detail screens.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::helpers::{truncate_to_width, window_start};
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_SECONDARY, COLOR_SELECTED_BG,
};
use crate::app::App;
use crate::models::{Record, SourceKind};
use crate::render::NARRATOR_LABEL;

pub fn render_collection_list(frame: &mut Frame, area: Rect, app: &App, kind: SourceKind) {
    let summaries = app.index.summaries(kind);
    let [heading, body] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(1)]).areas(area);

    let title = Line::from(vec![
        Span::styled(
            kind.list_heading(),
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {} ({})", kind.label(), summaries.len()),
            Style::default().fg(COLOR_DIM),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), heading);

    if summaries.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled("No collections", Style::default().fg(COLOR_DIM))),
            body,
        );
        return;
    }

    let height = body.height as usize;
    let start = window_start(app.list_cursor, height, summaries.len());
    let width = body.width as usize;

    let lines: Vec<Line> = summaries
        .iter()
        .enumerate()
        .skip(start)
        .take(height)
        .map(|(idx, summary)| {
            // Surahs show their own number; chapters are numbered by position.
            let number = match kind {
                SourceKind::Verse => summary.id.to_string(),
                SourceKind::Narration => (idx + 1).to_string(),
            };
            let selected = idx == app.list_cursor;
            let base = if selected {
                Style::default().bg(COLOR_SELECTED_BG)
            } else {
                Style::default()
            };
            let marker = if selected { "▸ " } else { "  " };
            let text = format!("{}{:>4}. {}", marker, number, summary.display_name());
            let mut spans = vec![Span::styled(
                truncate_to_width(&text, width),
                base.fg(COLOR_HEADER),
            )];
            if !summary.name_en.is_empty() && summary.name_en != summary.display_name() {
                spans.push(Span::styled(
                    format!("  {}", summary.name_en),
                    base.fg(COLOR_DIM),
                ));
            }
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), body);
}

fn record_lines(record: &Record, kind: SourceKind) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let number = record
        .sequence_number
        .map(|n| n.to_string())
        .unwrap_or_else(|| "-".to_string());
    let marker = match kind {
        SourceKind::Verse => format!("({}) ", number),
        SourceKind::Narration => format!("#{} ", number),
    };

    lines.push(Line::from(vec![
        Span::styled(marker, Style::default().fg(COLOR_ACCENT)),
        Span::styled(record.arabic_text.clone(), Style::default().fg(COLOR_HEADER)),
    ]));
    if let Some(urdu) = &record.urdu_text {
        lines.push(Line::from(Span::styled(
            urdu.clone(),
            Style::default().fg(COLOR_SECONDARY),
        )));
    }
    if let Some(english) = &record.english_text {
        lines.push(Line::from(Span::styled(
            english.clone(),
            Style::default().fg(COLOR_SECONDARY),
        )));
    }
    if let Some(narrator) = &record.narrator {
        lines.push(Line::from(Span::styled(
            format!("{} {}", NARRATOR_LABEL, narrator),
            Style::default().fg(COLOR_DIM),
        )));
    }
    lines.push(Line::default());
    lines
}

pub fn render_collection_detail(
    frame: &mut Frame,
    area: Rect,
    app: &mut App,
    kind: SourceKind,
    collection_id: &str,
) {
    let title = app.index.collection_title(kind, collection_id);
    let records = app.index.detail(kind, collection_id);

    let lines: Vec<Line> = if records.is_empty() {
        vec![Line::from(Span::styled(
            "No records in this collection",
            Style::default().fg(COLOR_DIM),
        ))]
    } else {
        records
            .iter()
            .flat_map(|record| record_lines(record, kind))
            .collect()
    };

    let max_scroll = lines.len().saturating_sub(1).min(u16::MAX as usize) as u16;
    app.detail_scroll = app.detail_scroll.min(max_scroll);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Span::styled(
            format!(" {} records ", records.len()),
            Style::default().fg(COLOR_DIM),
        ));

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((app.detail_scroll, 0)),
        area,
    );
}
