//! Layout and text helpers shared by the screens.

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

/// Spinner frames shown while a search is running
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Ticks per spinner frame (16ms ticks)
const TICKS_PER_FRAME: u64 = 5;

pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER_FRAMES[((tick / TICKS_PER_FRAME) % SPINNER_FRAMES.len() as u64) as usize]
}

/// A rect of `percent_x` by `percent_y` centered in `area`.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = scale(area.width, percent_x);
    let height = scale(area.height, percent_y);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn scale(length: u16, percent: u16) -> u16 {
    (u32::from(length) * u32::from(percent.min(100)) / 100) as u16
}

/// Truncate to `max_width` display columns, adding "..." when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    if max_width >= 3 {
        out.push_str("...");
    }
    out
}

/// First row index of a window of `height` rows that keeps `cursor` visible.
pub fn window_start(cursor: usize, height: usize, len: usize) -> usize {
    if height == 0 || len <= height {
        return 0;
    }
    let max_start = len - height;
    cursor.saturating_sub(height - 1).min(max_start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 50);
        let rect = centered_rect(80, 60, area);
        assert_eq!(rect, Rect::new(10, 10, 80, 30));
    }

    #[test]
    fn test_centered_rect_on_wide_terminal() {
        let rect = centered_rect(90, 90, Rect::new(0, 0, 800, 50));
        assert_eq!(rect, Rect::new(40, 2, 720, 45));
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("a long collection name", 10), "a long ...");
    }

    #[test]
    fn test_window_start_follows_cursor() {
        assert_eq!(window_start(0, 5, 20), 0);
        assert_eq!(window_start(4, 5, 20), 0);
        assert_eq!(window_start(5, 5, 20), 1);
        assert_eq!(window_start(19, 5, 20), 15);
        assert_eq!(window_start(3, 5, 3), 0);
    }

    #[test]
    fn test_spinner_cycles() {
        assert_eq!(spinner_frame(0), SPINNER_FRAMES[0]);
        assert_eq!(spinner_frame(TICKS_PER_FRAME), SPINNER_FRAMES[1]);
    }
}
