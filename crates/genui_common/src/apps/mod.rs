//! Mini-apps - Engines rendered in place of a markdown answer
//!
//! - clock: local time and world cities (recurring tick)
//! - fractal: Sierpinski generator and depth slider (no timers)
//! - math_quiz: addition quiz (one reset timer)
//! - memory_game: pair matching (one resolution timer)
//!
//! `MountedApp` is the fixed set of engines behind one tag. Each variant owns
//! its scheduler, so tearing one down cannot touch another.

pub mod clock;
pub mod fractal;
pub mod math_quiz;
pub mod memory_game;

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;
use tracing::info;

use crate::dispatcher::ComponentKind;
use clock::{ClockApp, SystemWallClock, WallClock};
use fractal::FractalExplorer;
use math_quiz::MathQuiz;
use memory_game::MemoryGame;

pub use clock::{CityTime, ClockReading};
pub use fractal::{Point, Triangle};
pub use math_quiz::{Feedback, MathProblem};
pub use memory_game::{Card, ClickOutcome, Phase, Symbol};

/// Everything an engine needs from its host when it is mounted
pub struct MountContext {
    /// Seed for the engine RNG; `None` draws from OS entropy
    pub seed: Option<u64>,
    /// Starting slider depth for the fractal explorer
    pub fractal_depth: u32,
    /// Time source for the clock
    pub wall_clock: fn() -> Box<dyn WallClock>,
}

impl Default for MountContext {
    fn default() -> Self {
        Self {
            seed: None,
            fractal_depth: fractal::DEFAULT_DEPTH,
            wall_clock: system_wall_clock,
        }
    }
}

fn system_wall_clock() -> Box<dyn WallClock> {
    Box::new(SystemWallClock)
}

impl MountContext {
    /// Fresh RNG per mount so remounting a seeded app replays the same game
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// A mounted mini-app
#[derive(Debug)]
pub enum MountedApp {
    Clock(ClockApp),
    Fractal(FractalExplorer),
    MathQuiz(MathQuiz),
    Memory(MemoryGame),
}

impl MountedApp {
    pub fn mount(kind: ComponentKind, ctx: &MountContext) -> Self {
        info!(component = %kind, "mounting mini-app");
        match kind {
            ComponentKind::Clock => MountedApp::Clock(ClockApp::new((ctx.wall_clock)())),
            ComponentKind::FractalExplorer => {
                MountedApp::Fractal(FractalExplorer::new(ctx.fractal_depth))
            }
            ComponentKind::MathQuiz => MountedApp::MathQuiz(MathQuiz::new(ctx.rng())),
            ComponentKind::MemoryGame => MountedApp::Memory(MemoryGame::new(ctx.rng())),
        }
    }

    pub fn kind(&self) -> ComponentKind {
        match self {
            MountedApp::Clock(_) => ComponentKind::Clock,
            MountedApp::Fractal(_) => ComponentKind::FractalExplorer,
            MountedApp::MathQuiz(_) => ComponentKind::MathQuiz,
            MountedApp::Memory(_) => ComponentKind::MemoryGame,
        }
    }

    /// Forward time; `elapsed` is measured from mount
    pub fn advance(&mut self, elapsed: Duration) {
        match self {
            MountedApp::Clock(app) => app.advance(elapsed),
            MountedApp::Fractal(_) => {}
            MountedApp::MathQuiz(app) => app.advance(elapsed),
            MountedApp::Memory(app) => app.advance(elapsed),
        }
    }

    /// Cancel every pending timer. Safe to call more than once.
    pub fn teardown(&mut self) {
        match self {
            MountedApp::Clock(app) => app.teardown(),
            MountedApp::Fractal(_) => {}
            MountedApp::MathQuiz(app) => app.teardown(),
            MountedApp::Memory(app) => app.teardown(),
        }
    }

    /// Whether any timer is still armed
    pub fn has_pending_timer(&self) -> bool {
        match self {
            MountedApp::Clock(app) => app.is_ticking(),
            MountedApp::Fractal(_) => false,
            MountedApp::MathQuiz(app) => app.has_pending_reset(),
            MountedApp::Memory(app) => app.has_pending_resolution(),
        }
    }
}

impl Drop for MountedApp {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use clock::FixedWallClock;

    fn ten_am() -> Box<dyn WallClock> {
        let t = NaiveDate::from_ymd_opt(2026, 1, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        Box::new(FixedWallClock(t))
    }

    fn ctx() -> MountContext {
        MountContext {
            seed: Some(99),
            fractal_depth: 4,
            wall_clock: ten_am,
        }
    }

    #[test]
    fn test_mount_matches_kind() {
        for kind in ComponentKind::ALL {
            let app = MountedApp::mount(kind, &ctx());
            assert_eq!(app.kind(), kind);
        }
    }

    #[test]
    fn test_fractal_uses_context_depth() {
        match &MountedApp::mount(ComponentKind::FractalExplorer, &ctx()) {
            MountedApp::Fractal(f) => assert_eq!(f.depth(), 4),
            other => panic!("unexpected app {:?}", other.kind()),
        }
    }

    #[test]
    fn test_seeded_mount_replays_same_deck() {
        let deck = |app: &MountedApp| match app {
            MountedApp::Memory(game) => game.cards().iter().map(|c| c.symbol).collect::<Vec<_>>(),
            _ => unreachable!(),
        };
        let a = MountedApp::mount(ComponentKind::MemoryGame, &ctx());
        let b = MountedApp::mount(ComponentKind::MemoryGame, &ctx());
        assert_eq!(deck(&a), deck(&b));
    }

    #[test]
    fn test_teardown_clears_clock_ticker() {
        let mut app = MountedApp::mount(ComponentKind::Clock, &ctx());
        assert!(app.has_pending_timer());
        app.teardown();
        assert!(!app.has_pending_timer());
        app.teardown();
    }
}
