//! Input - Key routing between the comparison shell and the mounted mini-app

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use genui_common::apps::fractal::FractalExplorer;
use genui_common::apps::math_quiz::MathQuiz;
use genui_common::apps::memory_game::{MemoryGame, CARD_COUNT};
use genui_common::MountedApp;

use super::state::TuiState;

/// Cards per row in the memory grid
pub const MEMORY_COLUMNS: usize = 4;

const QUIZ_OPTION_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Continue,
    Quit,
}

pub fn handle_key(state: &mut TuiState, key: KeyEvent) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::Continue;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => return KeyAction::Quit,
        (KeyCode::Esc, _) => {
            if state.show_help {
                state.show_help = false;
            } else {
                return KeyAction::Quit;
            }
        }
        (KeyCode::Char('?'), _) | (KeyCode::F(1), _) => state.show_help = !state.show_help,
        (KeyCode::Tab, _) => state.next_prompt(),
        (KeyCode::BackTab, _) => state.previous_prompt(),
        (code, _) => {
            if !state.show_help {
                handle_app_key(state, code);
            }
        }
    }
    KeyAction::Continue
}

fn handle_app_key(state: &mut TuiState, code: KeyCode) {
    let TuiState {
        comparison,
        memory_cursor,
        quiz_cursor,
        ..
    } = state;

    match comparison.app_mut() {
        Some(MountedApp::Clock(_)) | None => {}
        Some(MountedApp::Fractal(explorer)) => fractal_key(explorer, code),
        Some(MountedApp::MathQuiz(quiz)) => quiz_key(quiz, quiz_cursor, code),
        Some(MountedApp::Memory(game)) => memory_key(game, memory_cursor, code),
    }
}

fn fractal_key(explorer: &mut FractalExplorer, code: KeyCode) {
    match code {
        KeyCode::Left | KeyCode::Down | KeyCode::Char('-') => explorer.decrease(),
        KeyCode::Right | KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('=') => {
            explorer.increase()
        }
        KeyCode::Char(c) => {
            if let Some(depth) = c.to_digit(10) {
                explorer.set_depth(depth);
            }
        }
        _ => {}
    }
}

fn quiz_key(quiz: &mut MathQuiz, cursor: &mut usize, code: KeyCode) {
    match code {
        KeyCode::Left => *cursor = cursor.saturating_sub(1),
        KeyCode::Right => *cursor = (*cursor + 1).min(QUIZ_OPTION_COUNT - 1),
        KeyCode::Enter | KeyCode::Char(' ') => submit_option(quiz, *cursor),
        KeyCode::Char(c @ '1'..='3') => {
            let index = c as usize - '1' as usize;
            *cursor = index;
            submit_option(quiz, index);
        }
        _ => {}
    }
}

/// Buttons are inert while the "correct" feedback is showing
fn submit_option(quiz: &mut MathQuiz, index: usize) {
    if !quiz.options_enabled() {
        return;
    }
    if let Some(&value) = quiz.problem().options.get(index) {
        quiz.submit_answer(value);
    }
}

fn memory_key(game: &mut MemoryGame, cursor: &mut usize, code: KeyCode) {
    let column = *cursor % MEMORY_COLUMNS;
    match code {
        KeyCode::Left if column > 0 => *cursor -= 1,
        KeyCode::Right if column + 1 < MEMORY_COLUMNS => *cursor += 1,
        KeyCode::Up if *cursor >= MEMORY_COLUMNS => *cursor -= MEMORY_COLUMNS,
        KeyCode::Down if *cursor + MEMORY_COLUMNS < CARD_COUNT => *cursor += MEMORY_COLUMNS,
        KeyCode::Enter | KeyCode::Char(' ') => {
            game.click(*cursor);
        }
        KeyCode::Char('r') | KeyCode::Char('R') => game.reset(),
        _ => {}
    }
}
