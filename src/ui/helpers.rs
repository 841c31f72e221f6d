use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Spacing between consecutive key hints in the footer.
const HINT_GAP: &str = "   ";

/// Render `[key] label` pairs as a single footer line, keys highlighted.
pub(crate) fn key_hints(hints: &[(&str, &str)]) -> Line<'static> {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (idx, (key, label)) in hints.iter().enumerate() {
        spans.push(Span::styled(key.to_string(), key_style));
        let gap = if idx + 1 < hints.len() { HINT_GAP } else { "" };
        spans.push(Span::raw(format!(" {label}{gap}")));
    }
    Line::from(spans)
}

/// Column of the text cursor after `prefix` and `typed`, kept inside `inner`.
pub(crate) fn prompt_cursor_x(inner: Rect, prefix: &str, typed: &str) -> u16 {
    let typed_width = prefix.chars().count().saturating_add(typed.chars().count());
    let offset = u16::try_from(typed_width).unwrap_or(u16::MAX);
    inner
        .x
        .saturating_add(offset)
        .min(inner.right().saturating_sub(1))
        .max(inner.x)
}

/// Produce a rectangle centered within `area` that spans the requested percent
/// of the width and height. Used for the find prompt.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(horizontal[1]);

    vertical[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn key_hints_pair_keys_with_labels() {
        let line = key_hints(&[("[r]", "Refresh"), ("[q]", "Quit")]);
        let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();
        assert_eq!(text, "[r] Refresh   [q] Quit");
    }

    #[test]
    fn prompt_cursor_follows_typed_text() {
        let inner = Rect::new(5, 2, 30, 1);
        assert_eq!(prompt_cursor_x(inner, "Title: ", ""), 12);
        assert_eq!(prompt_cursor_x(inner, "Title: ", "Dune"), 16);
    }

    #[test]
    fn prompt_cursor_is_clamped_for_huge_input() {
        let inner = Rect::new(5, 2, 30, 1);
        let typed = "x".repeat(usize::from(u16::MAX) + 10);
        assert_eq!(prompt_cursor_x(inner, "Title: ", &typed), 34);

        let edge = Rect::new(u16::MAX - 3, 0, 3, 1);
        assert_eq!(prompt_cursor_x(edge, "Title: ", "abc"), u16::MAX - 1);
    }

    #[test]
    fn centered_rect_stays_inside_area() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(60, 20, area);
        assert_eq!(popup.width, 60);
        assert_eq!(popup.height, 10);
        assert_eq!(popup.x, 20);
        assert_eq!(popup.y, 20);
    }
}
