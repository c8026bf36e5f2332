//! Rendering - Header, prompt bar, comparison panels and status bar
//!
//! The generative panel draws through `render_with_boundary`: a failing
//! mini-app view is replaced by a notice while the rest of the screen
//! keeps rendering.

use genui_common::{ComparisonPhase, GenUiError, Palette};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
    Frame,
};
use tracing::warn;

use super::apps::draw_app;
use super::layout;
use super::markdown::markdown_lines;
use super::state::TuiState;
use super::utils::{color, draw_help_overlay, vertically_centered};

/// Shown in place of a mini-app whose view failed
pub const RENDER_ERROR_NOTICE: &str = "컴포넌트 로드 중 오류가 발생했습니다.";

/// Shown while the comparison is generating
pub const GENERATING_MESSAGE: &str = "UI 생성 중...";

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_FRAME_MS: u128 = 80;

pub fn draw_ui(f: &mut Frame, state: &mut TuiState) {
    let size = f.area();
    let grid = layout::compute_layout(size);

    f.render_widget(
        Block::default().style(Style::default().bg(color(state.palette.background))),
        size,
    );

    draw_header(f, grid.header, state);
    if grid.prompts.height > 0 {
        draw_prompt_bar(f, grid.prompts, state);
    }

    match state.comparison.phase() {
        ComparisonPhase::Idle => draw_idle(f, grid.comparison, &state.palette),
        ComparisonPhase::Generating => draw_spinner(f, grid.comparison, state),
        ComparisonPhase::Showing => {
            if grid.markdown.width > 0 {
                draw_markdown_panel(f, grid.markdown, state);
            }
            draw_generative_panel(f, grid.generative, state);
        }
    }

    draw_status_bar(f, grid.status_bar, state);

    if state.show_help {
        draw_help_overlay(f, size, &state.palette);
    }
}

fn draw_header(f: &mut Frame, area: Rect, state: &TuiState) {
    let text = layout::compose_header_text(area.width, env!("CARGO_PKG_VERSION"), state.theme_label());
    let header = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default()
            .fg(color(state.palette.primary))
            .add_modifier(Modifier::BOLD),
    )))
    .style(Style::default().bg(color(state.palette.dark_bg)));
    f.render_widget(header, area);
}

fn draw_prompt_bar(f: &mut Frame, area: Rect, state: &TuiState) {
    let palette = &state.palette;
    let titles: Vec<Line> = state
        .comparison
        .prompts()
        .iter()
        .enumerate()
        .map(|(i, prompt)| {
            let mark = if state.comparison.is_visited(i) { "✓ " } else { "" };
            Line::from(format!("{}{}", mark, prompt.text))
        })
        .collect();

    let mut tabs = Tabs::new(titles)
        .block(
            Block::default()
                .title(" 예시 프롬프트 (Tab / Shift+Tab) ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color(palette.card_border))),
        )
        .style(Style::default().fg(color(palette.muted)))
        .highlight_style(
            Style::default()
                .fg(color(palette.primary))
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        );
    if let Some(index) = state.comparison.selected_index() {
        tabs = tabs.select(index);
    }
    f.render_widget(tabs, area);
}

fn draw_idle(f: &mut Frame, area: Rect, palette: &Palette) {
    let lines = vec![
        Line::from(Span::styled(
            "직접 체험해보세요",
            Style::default()
                .fg(color(palette.foreground))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "프롬프트를 선택하면 마크다운 응답과 Generative UI를 비교할 수 있습니다.",
            Style::default().fg(color(palette.muted)),
        )),
        Line::from(Span::styled(
            "Tab 키로 시작하세요",
            Style::default().fg(color(palette.primary)),
        )),
    ];
    let height = lines.len() as u16;
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        vertically_centered(area, height),
    );
}

fn draw_spinner(f: &mut Frame, area: Rect, state: &TuiState) {
    let frame = (state.elapsed.as_millis() / SPINNER_FRAME_MS) as usize % SPINNER_FRAMES.len();
    let line = Line::from(vec![
        Span::styled(
            SPINNER_FRAMES[frame],
            Style::default().fg(color(state.palette.primary)),
        ),
        Span::raw(" "),
        Span::styled(
            GENERATING_MESSAGE,
            Style::default().fg(color(state.palette.foreground)),
        ),
    ]);
    f.render_widget(
        Paragraph::new(line).alignment(Alignment::Center),
        vertically_centered(area, 1),
    );
}

fn panel_block<'a>(title: String, border: genui_common::Rgb) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color(border)))
}

fn draw_markdown_panel(f: &mut Frame, area: Rect, state: &TuiState) {
    let Some(prompt) = state.comparison.selected_prompt() else {
        return;
    };
    let block = panel_block(
        " Markdown · 기존 방식 · 정적 ".to_string(),
        state.palette.card_border,
    );
    let paragraph = Paragraph::new(markdown_lines(prompt.markdown, &state.palette))
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn draw_generative_panel(f: &mut Frame, area: Rect, state: &mut TuiState) {
    let title = match state.comparison.selected_component() {
        Some(kind) => format!(" Generative UI · {} ", kind.title()),
        None => " Generative UI ".to_string(),
    };
    let block = panel_block(title, state.palette.primary);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let failure = match state.comparison.app() {
        Some(app) => {
            let palette = state.palette;
            let view_state: &TuiState = state;
            render_with_boundary(f, inner, &palette, |f, area| {
                draw_app(f, area, app, view_state)
            })
        }
        None => None,
    };

    if failure != state.render_failure {
        if let Some(message) = &failure {
            warn!(
                component = ?state.comparison.selected_component(),
                error = %message,
                "mini-app failed to render"
            );
        }
        state.render_failure = failure;
    }
}

/// Run `view`; on error clear its area and show the notice instead
///
/// Returns the error message so the caller can log it.
pub fn render_with_boundary<F>(
    f: &mut Frame,
    area: Rect,
    palette: &Palette,
    view: F,
) -> Option<String>
where
    F: FnOnce(&mut Frame, Rect) -> Result<(), GenUiError>,
{
    match view(f, area) {
        Ok(()) => None,
        Err(e) => {
            f.render_widget(Clear, area);
            let notice = Paragraph::new(Line::from(Span::styled(
                RENDER_ERROR_NOTICE,
                Style::default().fg(color(palette.error)),
            )))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
            f.render_widget(notice, vertically_centered(area, 2));
            Some(e.to_string())
        }
    }
}

fn draw_status_bar(f: &mut Frame, area: Rect, state: &TuiState) {
    let time_str = chrono::Local::now().format("%H:%M:%S").to_string();
    let text = layout::compose_status_bar_text(area.width, &time_str, &state.phase_label());
    let status = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(color(state.palette.muted)),
    )))
    .style(Style::default().bg(color(state.palette.dark_bg)));
    f.render_widget(status, area);
}
