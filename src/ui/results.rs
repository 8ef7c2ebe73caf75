//! Search results overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::helpers::centered_rect;
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_EMPHASIS, COLOR_ERROR, COLOR_HEADER,
    COLOR_SECONDARY,
};
use crate::app::App;
use crate::render::{
    render_results, DisplayUnit, RenderedResults, Run, ENGLISH_LABEL, EXPLANATION_HEADING,
    NARRATOR_LABEL, SCORE_LABEL, URDU_LABEL,
};

fn unit_lines(unit: &DisplayUnit) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut header = vec![Span::styled(
        format!("[{}]", unit.source_label),
        Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD),
    )];
    if !unit.reference_label.is_empty() {
        header.push(Span::styled(
            format!(" {}", unit.reference_label),
            Style::default().fg(COLOR_HEADER),
        ));
    }
    lines.push(Line::from(header));
    lines.push(Line::from(Span::styled(
        unit.arabic_text.clone(),
        Style::default().fg(COLOR_HEADER),
    )));

    let labelled = [
        (URDU_LABEL, unit.urdu_text.as_ref()),
        (ENGLISH_LABEL, unit.english_text.as_ref()),
        (NARRATOR_LABEL, unit.narrator.as_ref()),
    ];
    for (label, value) in labelled {
        if let Some(value) = value {
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", label), Style::default().fg(COLOR_DIM)),
                Span::styled(value.clone(), Style::default().fg(COLOR_SECONDARY)),
            ]));
        }
    }

    lines.push(Line::from(Span::styled(
        format!("{} {}", SCORE_LABEL, unit.score_text),
        Style::default().fg(COLOR_DIM),
    )));
    lines.push(Line::default());
    lines
}

fn run_span(run: &Run) -> Span<'static> {
    match run {
        Run::Plain(text) => Span::raw(text.clone()),
        Run::Emphasis(text) => Span::styled(
            text.clone(),
            Style::default()
                .fg(COLOR_EMPHASIS)
                .add_modifier(Modifier::BOLD),
        ),
    }
}

/// All overlay lines for a rendered result.
pub fn results_lines(rendered: &RenderedResults) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            rendered.heading.clone(),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            rendered.summary.clone(),
            Style::default().fg(COLOR_DIM),
        )),
    ];
    if let Some(processed) = &rendered.processed_query {
        lines.push(Line::from(Span::styled(
            format!("Processed query: {}", processed),
            Style::default().fg(COLOR_DIM),
        )));
    }
    lines.push(Line::default());

    for unit in &rendered.units {
        lines.extend(unit_lines(unit));
    }

    if let Some(explanation) = &rendered.explanation {
        lines.push(Line::from(Span::styled(
            EXPLANATION_HEADING,
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )));
        lines.extend(
            explanation
                .iter()
                .map(|runs| Line::from(runs.iter().map(run_span).collect::<Vec<_>>())),
        );
    }
    lines
}

pub fn render_results_overlay(frame: &mut Frame, area: Rect, app: &mut App) {
    let area = centered_rect(90, 90, area);
    frame.render_widget(Clear, area);

    let mut lines = Vec::new();
    if let Some(banner) = app.search.error_banner() {
        lines.push(Line::from(Span::styled(
            format!("! {}", banner),
            Style::default()
                .fg(COLOR_ERROR)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::default());
    }
    if let Some(result) = app.search.displayed() {
        lines.extend(results_lines(&render_results(result)));
    }

    let max_scroll = lines.len().saturating_sub(1).min(u16::MAX as usize) as u16;
    app.results_scroll = app.results_scroll.min(max_scroll);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            " Results ",
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Span::styled(
            " Esc close  ↑/↓ PgUp/PgDn scroll ",
            Style::default().fg(COLOR_DIM),
        ));

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((app.results_scroll, 0)),
        area,
    );
}
