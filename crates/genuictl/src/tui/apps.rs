//! Mini-app views
//!
//! Each view draws one engine into the generative panel and fails with
//! `GenUiError::Render` when the area cannot hold it. Views never draw
//! before the size check, so a failure leaves the area untouched.

use genui_common::apps::clock::{ClockApp, HOME_LABEL};
use genui_common::apps::fractal::{
    FractalExplorer, CANVAS_HEIGHT, CANVAS_WIDTH, DEPTH_RANGE, HAUSDORFF_DIMENSION,
};
use genui_common::apps::math_quiz::MathQuiz;
use genui_common::apps::memory_game::{MemoryGame, CARD_COUNT, PAIR_COUNT};
use genui_common::apps::{Card, Feedback};
use genui_common::{GenUiError, MountedApp, Palette, Result};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Block, BorderType, Borders, Paragraph,
    },
    Frame,
};

use super::input::MEMORY_COLUMNS;
use super::state::TuiState;
use super::utils::{color, vertically_centered};

const CLOCK_MIN: (u16, u16) = (22, 6);
const FRACTAL_MIN: (u16, u16) = (28, 7);
const QUIZ_MIN: (u16, u16) = (26, 7);
const MEMORY_MIN: (u16, u16) = (24, 13);

const MEMORY_CARD_HEIGHT: u16 = 3;

fn ensure_fits(area: Rect, (width, height): (u16, u16), view: &str) -> Result<()> {
    if area.width < width || area.height < height {
        return Err(GenUiError::Render(format!(
            "{} needs {}x{}, panel is {}x{}",
            view, width, height, area.width, area.height
        )));
    }
    Ok(())
}

/// Draw whichever engine is mounted
pub fn draw_app(f: &mut Frame, area: Rect, app: &MountedApp, state: &TuiState) -> Result<()> {
    let palette = &state.palette;
    match app {
        MountedApp::Clock(clock) => draw_clock(f, area, clock, palette),
        MountedApp::Fractal(explorer) => draw_fractal(f, area, explorer, palette),
        MountedApp::MathQuiz(quiz) => draw_math_quiz(f, area, quiz, state.quiz_cursor, palette),
        MountedApp::Memory(game) => draw_memory(f, area, game, state.memory_cursor, palette),
    }
}

pub fn draw_clock(f: &mut Frame, area: Rect, clock: &ClockApp, palette: &Palette) -> Result<()> {
    ensure_fits(area, CLOCK_MIN, "clock")?;

    let muted = Style::default().fg(color(palette.muted));
    let mut lines = vec![
        Line::from(Span::styled(HOME_LABEL, muted)),
        Line::from(Span::styled(
            clock.reading().to_string(),
            Style::default()
                .fg(color(palette.primary))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for city in clock.cities() {
        lines.push(Line::from(vec![
            Span::styled(format!("{}  ", city.city), muted),
            Span::styled(city.hh_mm(), Style::default().fg(color(palette.foreground))),
        ]));
    }

    let height = lines.len() as u16;
    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        vertically_centered(area, height),
    );
    Ok(())
}

fn depth_slider(depth: u32) -> String {
    let max = *DEPTH_RANGE.end();
    format!(
        "[{}{}]",
        "■".repeat(depth as usize),
        "□".repeat(max.saturating_sub(depth) as usize)
    )
}

pub fn draw_fractal(
    f: &mut Frame,
    area: Rect,
    explorer: &FractalExplorer,
    palette: &Palette,
) -> Result<()> {
    ensure_fits(area, FRACTAL_MIN, "fractal explorer")?;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    let body = Style::default().fg(color(palette.foreground));
    let accent = Style::default().fg(color(palette.primary));
    let stats = vec![
        Line::from(vec![
            Span::styled(format!("반복 횟수: {} ", explorer.depth()), body),
            Span::styled(depth_slider(explorer.depth()), accent),
        ]),
        Line::from(vec![
            Span::styled("삼각형 개수 ", body),
            Span::styled(explorer.triangle_count().to_string(), accent),
            Span::styled("  하우스도르프 차원 ", body),
            Span::styled(format!("≈ {:.3}", HAUSDORFF_DIMENSION), accent),
        ]),
    ];
    f.render_widget(Paragraph::new(stats), rows[0]);

    let stroke = color(palette.primary);
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, CANVAS_WIDTH])
        .y_bounds([0.0, CANVAS_HEIGHT])
        .paint(|ctx| {
            // Engine coordinates grow downwards, canvas coordinates upwards
            for triangle in explorer.triangles() {
                for (a, b) in triangle.edges() {
                    ctx.draw(&CanvasLine::new(
                        a.x,
                        CANVAS_HEIGHT - a.y,
                        b.x,
                        CANVAS_HEIGHT - b.y,
                        stroke,
                    ));
                }
            }
        });
    f.render_widget(canvas, rows[1]);
    Ok(())
}

fn feedback_line(feedback: Feedback, palette: &Palette) -> Line<'static> {
    match feedback {
        Feedback::None => Line::from(""),
        Feedback::Correct => Line::from(Span::styled(
            "✓ 정답이에요!",
            Style::default()
                .fg(color(palette.success))
                .add_modifier(Modifier::BOLD),
        )),
        Feedback::Wrong => Line::from(Span::styled(
            "? 다시 생각해보세요!",
            Style::default().fg(color(palette.error)),
        )),
    }
}

pub fn draw_math_quiz(
    f: &mut Frame,
    area: Rect,
    quiz: &MathQuiz,
    cursor: usize,
    palette: &Palette,
) -> Result<()> {
    ensure_fits(area, QUIZ_MIN, "math quiz")?;

    let problem = quiz.problem();
    let body = Style::default().fg(color(palette.foreground));
    let muted = Style::default().fg(color(palette.muted));

    let apples = format!(
        "{} + {}",
        "🍎".repeat(problem.operand_a as usize),
        "🍎".repeat(problem.operand_b as usize)
    );

    let mut buttons = Vec::with_capacity(problem.options.len() * 2);
    for (i, option) in problem.options.iter().enumerate() {
        let style = if !quiz.options_enabled() {
            muted
        } else if i == cursor {
            Style::default()
                .fg(color(palette.background))
                .bg(color(palette.primary))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color(palette.primary))
        };
        if i > 0 {
            buttons.push(Span::raw("  "));
        }
        buttons.push(Span::styled(format!("[ {} ]", option), style));
    }

    let lines = vec![
        Line::from(Span::styled(format!("점수: {}점", quiz.score()), muted)),
        Line::from(""),
        Line::from(Span::styled(apples, body)),
        Line::from(Span::styled(
            format!("{} + {} = ?", problem.operand_a, problem.operand_b),
            body.add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(buttons),
        feedback_line(quiz.feedback(), palette),
    ];

    let height = lines.len() as u16;
    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        vertically_centered(area, height),
    );
    Ok(())
}

fn card_face(card: &Card) -> &'static str {
    if card.face_up || card.matched {
        card.symbol.emoji()
    } else {
        "?"
    }
}

pub fn draw_memory(
    f: &mut Frame,
    area: Rect,
    game: &MemoryGame,
    cursor: usize,
    palette: &Palette,
) -> Result<()> {
    ensure_fits(area, MEMORY_MIN, "memory game")?;

    let rows_count = (CARD_COUNT / MEMORY_COLUMNS) as u16;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(MEMORY_CARD_HEIGHT * rows_count),
            Constraint::Min(0),
        ])
        .split(area);

    let muted = Style::default().fg(color(palette.muted));
    let stats = Line::from(vec![
        Span::styled(format!("시도: {}", game.moves()), muted),
        Span::raw("   "),
        Span::styled(
            format!("매칭: {}/{}", game.matched_pairs(), PAIR_COUNT),
            muted,
        ),
        Span::raw("   "),
        Span::styled("[r] 리셋", Style::default().fg(color(palette.primary))),
    ]);
    f.render_widget(Paragraph::new(stats).alignment(Alignment::Center), rows[0]);

    let grid_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(MEMORY_CARD_HEIGHT); rows_count as usize])
        .split(rows[1]);

    for (row_index, row_area) in grid_rows.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, MEMORY_COLUMNS as u32); MEMORY_COLUMNS])
            .split(*row_area);

        for (column, cell) in cells.iter().enumerate() {
            let index = row_index * MEMORY_COLUMNS + column;
            let Some(card) = game.cards().get(index) else {
                continue;
            };

            let border_color = if card.matched {
                palette.success
            } else if card.face_up {
                palette.primary
            } else {
                palette.card_border
            };
            let mut block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color(border_color)));
            if index == cursor {
                block = block
                    .border_type(BorderType::Thick)
                    .border_style(Style::default().fg(color(palette.primary_hover)));
            }

            f.render_widget(
                Paragraph::new(card_face(card))
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(color(palette.foreground)))
                    .block(block),
                *cell,
            );
        }
    }

    if game.is_won() {
        let win = Line::from(Span::styled(
            format!("🎉 축하합니다! {}번 만에 완료!", game.moves()),
            Style::default()
                .fg(color(palette.success))
                .add_modifier(Modifier::BOLD),
        ));
        f.render_widget(Paragraph::new(win).alignment(Alignment::Center), rows[2]);
    }
    Ok(())
}
