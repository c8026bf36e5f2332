//! Event Loop - TUI entry point and terminal lifecycle

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use genui_common::{Comparison, GenUiConfig, MountContext, ThemeMode};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use super::input::{handle_key, KeyAction};
use super::render::draw_ui;
use super::state::TuiState;

pub struct TuiOptions {
    pub theme: ThemeMode,
    /// Poll interval; also the redraw cadence for clocks and spinners
    pub tick: Duration,
    pub mount: MountContext,
}

impl TuiOptions {
    pub fn from_config(config: &GenUiConfig) -> Self {
        Self {
            theme: config.ui.theme,
            tick: Duration::from_millis(config.ui.tick_ms.max(10)),
            mount: MountContext {
                seed: config.random.seed,
                fractal_depth: config.fractal.default_depth,
                ..MountContext::default()
            },
        }
    }
}

/// Run the TUI until the user quits
pub async fn run(options: TuiOptions) -> Result<()> {
    enable_raw_mode()
        .context("Failed to enable raw mode. Ensure you're running in a real terminal (TTY)")?;

    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e).context("Failed to initialize terminal");
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(terminal) => terminal,
        Err(e) => {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            return Err(e).context("Failed to create terminal");
        }
    };

    info!(theme = ?options.theme, tick_ms = options.tick.as_millis() as u64, "TUI started");
    let mut state = TuiState::new(Comparison::new(options.mount), options.theme);

    let result = run_event_loop(&mut terminal, &mut state, options.tick).await;

    // Timers die with the apps even if the loop failed
    state.shutdown();
    let cleanup_result = restore_terminal(&mut terminal);

    result.and(cleanup_result)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut TuiState,
    tick: Duration,
) -> Result<()> {
    let started = Instant::now();

    loop {
        state.tick(started.elapsed());
        terminal.draw(|f| draw_ui(f, state))?;

        if event::poll(tick)? {
            match event::read()? {
                Event::Key(key) => {
                    if handle_key(state, key) == KeyAction::Quit {
                        debug!("quit requested");
                        break;
                    }
                }
                Event::Resize(width, height) => debug!(width, height, "terminal resized"),
                _ => {}
            }
        }

        tokio::task::yield_now().await;
    }

    Ok(())
}
