//! Floating "You selected" notice.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::theme::{COLOR_ACCENT, COLOR_HEADER};
use crate::app::SelectionNotice;

const PREFIX: &str = "You selected: ";

pub fn render_selection_notice(frame: &mut Frame, area: Rect, notice: &SelectionNotice) {
    let text_width = (PREFIX.width() + notice.label.width()) as u16;
    let width = (text_width + 4).min(area.width);
    let height = 3.min(area.height);
    let rect = Rect {
        x: area.x + area.width - width,
        y: area.y + area.height - height,
        width,
        height,
    };

    let line = Line::from(vec![
        Span::raw(PREFIX),
        Span::styled(
            notice.label.clone(),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(COLOR_ACCENT)),
        ),
        rect,
    );
}
