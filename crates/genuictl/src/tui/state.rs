//! TUI state - Comparison orchestrator plus view-only cursors

use genui_common::prompts::EXAMPLE_PROMPTS;
use genui_common::{Comparison, ComparisonPhase, Palette, ThemeMode};
use std::time::Duration;
use tracing::info;

pub struct TuiState {
    pub comparison: Comparison,
    pub theme: ThemeMode,
    pub palette: Palette,
    pub show_help: bool,
    /// Time since the TUI started, as last passed to `tick`
    pub elapsed: Duration,
    /// Focused card in the 4x4 memory grid
    pub memory_cursor: usize,
    /// Focused answer button in the math quiz
    pub quiz_cursor: usize,
    /// Last mini-app render failure, kept so it is logged once
    pub render_failure: Option<String>,
}

impl TuiState {
    pub fn new(comparison: Comparison, theme: ThemeMode) -> Self {
        Self {
            comparison,
            theme,
            palette: Palette::resolve(theme),
            show_help: false,
            elapsed: Duration::ZERO,
            memory_cursor: 0,
            quiz_cursor: 0,
            render_failure: None,
        }
    }

    pub fn theme_label(&self) -> &'static str {
        match self.theme {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    pub fn select_prompt(&mut self, index: usize) {
        self.comparison.select(index);
        self.memory_cursor = 0;
        self.quiz_cursor = 0;
        self.render_failure = None;
    }

    pub fn next_prompt(&mut self) {
        let next = match self.comparison.selected_index() {
            Some(i) => (i + 1) % EXAMPLE_PROMPTS.len(),
            None => 0,
        };
        self.select_prompt(next);
    }

    pub fn previous_prompt(&mut self) {
        let count = EXAMPLE_PROMPTS.len();
        let previous = match self.comparison.selected_index() {
            Some(i) => (i + count - 1) % count,
            None => count - 1,
        };
        self.select_prompt(previous);
    }

    /// Forward wall time into the orchestrator
    pub fn tick(&mut self, elapsed: Duration) {
        self.elapsed = elapsed;
        self.comparison.advance(elapsed);
    }

    /// Short label for the status bar
    pub fn phase_label(&self) -> String {
        match (self.comparison.phase(), self.comparison.selected_component()) {
            (ComparisonPhase::Idle, _) => "Idle".to_string(),
            (ComparisonPhase::Generating, _) => "Generating".to_string(),
            (ComparisonPhase::Showing, Some(kind)) => format!("Showing {}", kind),
            (ComparisonPhase::Showing, None) => "Showing".to_string(),
        }
    }

    pub fn shutdown(&mut self) {
        self.comparison.shutdown();
        info!("TUI closed");
    }
}
