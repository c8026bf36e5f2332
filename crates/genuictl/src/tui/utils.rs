//! Utilities - Palette conversion, centering, and the help overlay

use genui_common::{Palette, Rgb};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Palette entry as a terminal color
pub fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Key bindings listed in the help overlay
const KEY_HELP: [(&str, &str); 9] = [
    ("Tab", "Next example prompt"),
    ("Shift+Tab", "Previous example prompt"),
    ("←/→/↑/↓", "Move focus or slider"),
    ("Enter/Space", "Activate focused card or option"),
    ("1-3", "Pick quiz option"),
    ("0-6", "Set fractal depth"),
    ("r", "Reset memory game"),
    ("?", "Toggle help"),
    ("Esc/Ctrl+C", "Exit"),
];

/// Draw help overlay
pub fn draw_help_overlay(f: &mut Frame, area: Rect, palette: &Palette) {
    let mut help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default()
                .fg(color(palette.primary))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for (key, action) in KEY_HELP {
        help_text.push(Line::from(vec![
            Span::styled(format!("{:<12}", key), Style::default().fg(color(palette.primary_hover))),
            Span::raw(" - "),
            Span::styled(action, Style::default().fg(color(palette.foreground))),
        ]));
    }
    help_text.push(Line::from(""));
    help_text.push(Line::from(Span::styled(
        "Press ? to close",
        Style::default().fg(color(palette.muted)),
    )));

    let help_area = centered_rect(60, 60, area);

    let help_block = Paragraph::new(help_text)
        .block(
            Block::default()
                .title("Help")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color(palette.primary))),
        )
        .style(Style::default().bg(color(palette.card_bg)));

    f.render_widget(Clear, help_area);
    f.render_widget(help_block, help_area);
}

/// Create a centered rect
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Rect of `height` rows centered vertically inside `area`
pub fn vertically_centered(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    Rect::new(
        area.x,
        area.y + (area.height - height) / 2,
        area.width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 40);
        let inner = centered_rect(50, 50, outer);
        assert_eq!(inner.width, 50);
        assert_eq!(inner.height, 20);
        assert_eq!(inner.x, 25);
        assert_eq!(inner.y, 10);
    }

    #[test]
    fn test_vertically_centered_clamps_height() {
        let area = Rect::new(2, 3, 10, 4);
        assert_eq!(vertically_centered(area, 2), Rect::new(2, 4, 10, 2));
        assert_eq!(vertically_centered(area, 9), area);
    }

    #[test]
    fn test_palette_color_conversion() {
        assert_eq!(color(Rgb(1, 2, 3)), Color::Rgb(1, 2, 3));
    }
}
