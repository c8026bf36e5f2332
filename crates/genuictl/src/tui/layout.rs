//! Layout - Canonical TUI layout grid computation
//!
//! Header, example prompt bar, the comparison area split into a markdown
//! panel and a generative panel, and a status bar. Small terminals drop the
//! prompt bar first, then the markdown panel.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// TUI layout structure containing all panel rectangles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TuiLayout {
    /// Header bar (top)
    pub header: Rect,
    /// Example prompt tabs (zero height when the terminal is short)
    pub prompts: Rect,
    /// Whole comparison area (markdown + generative)
    pub comparison: Rect,
    /// Markdown answer (zero width when the terminal is narrow)
    pub markdown: Rect,
    /// Mounted mini-app
    pub generative: Rect,
    /// Status bar (bottom)
    pub status_bar: Rect,
}

const HEADER_HEIGHT: u16 = 1;
const STATUS_BAR_HEIGHT: u16 = 1;
const PROMPT_BAR_HEIGHT: u16 = 3;
const MIN_COMPARISON_HEIGHT: u16 = 8;

/// Below this width the markdown panel is hidden
pub const MIN_SPLIT_WIDTH: u16 = 60;

const MARKDOWN_PERCENT: u16 = 45;
const GENERATIVE_PERCENT: u16 = 55;

/// Compute canonical TUI layout grid
///
/// Takes the terminal area and returns non-overlapping rectangles.
/// Degrades in this order:
/// 1. Header and status bar (always shown, 1 line each)
/// 2. Generative panel (always shown)
/// 3. Prompt bar (omitted when the comparison would drop below 8 lines)
/// 4. Markdown panel (omitted below `MIN_SPLIT_WIDTH` columns)
pub fn compute_layout(frame_area: Rect) -> TuiLayout {
    let remaining_height = frame_area
        .height
        .saturating_sub(HEADER_HEIGHT + STATUS_BAR_HEIGHT);
    let show_prompts = remaining_height >= PROMPT_BAR_HEIGHT + MIN_COMPARISON_HEIGHT;
    let prompt_height = if show_prompts { PROMPT_BAR_HEIGHT } else { 0 };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(prompt_height),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(frame_area);

    let header = rows[0];
    let prompts = rows[1];
    let comparison = rows[2];
    let status_bar = rows[3];

    let (markdown, generative) = if comparison.width >= MIN_SPLIT_WIDTH {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(MARKDOWN_PERCENT),
                Constraint::Percentage(GENERATIVE_PERCENT),
            ])
            .split(comparison);
        (columns[0], columns[1])
    } else {
        (Rect::new(comparison.x, comparison.y, 0, 0), comparison)
    };

    TuiLayout {
        header,
        prompts,
        comparison,
        markdown,
        generative,
        status_bar,
    }
}

fn fit(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

fn display_len(text: &str) -> usize {
    text.chars().count()
}

/// Compose header text with truncation for narrow terminals
///
/// Priority order (rightmost truncates first):
/// 1. "Generative UI v{version}"
/// 2. "Markdown vs Generative UI"
/// 3. "theme: {theme}"
pub fn compose_header_text(width: u16, version: &str, theme: &str) -> String {
    let width = width as usize;
    let sep = " │ ";

    let name = format!("Generative UI v{}", version);
    if display_len(&name) + 3 > width {
        return fit(&name, width);
    }

    let full = format!("{}{}Markdown vs Generative UI{}theme: {}", name, sep, sep, theme);
    if display_len(&full) <= width {
        return full;
    }

    let without_theme = format!("{}{}Markdown vs Generative UI", name, sep);
    if display_len(&without_theme) <= width {
        return without_theme;
    }

    name
}

/// Compose status bar text with truncation for narrow terminals
///
/// Mode, time and phase are always shown; key hints only if they fit.
pub fn compose_status_bar_text(width: u16, time_str: &str, phase: &str) -> String {
    let width = width as usize;
    let sep = " │ ";

    let core = format!("Mode: TUI{}{}{}{}", sep, time_str, sep, phase);
    if display_len(&core) >= width {
        return fit(&core, width);
    }

    let hints = "Tab: next prompt  ?: help  Esc: quit";
    let with_hints = format!("{}{}{}", core, sep, hints);
    if display_len(&with_hints) <= width {
        return with_hints;
    }

    let short_hints = format!("{}{}?: help", core, sep);
    if display_len(&short_hints) <= width {
        return short_hints;
    }

    core
}
