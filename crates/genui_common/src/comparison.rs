//! Comparison - Prompt selection flow driving the side-by-side view
//!
//! Selecting a prompt for the first time shows a short "generating" phase
//! before the mini-app is mounted; prompts seen before are shown at once.
//! Only one app is mounted at a time and it is torn down on every new
//! selection.

use std::collections::HashSet;
use std::time::Duration;
use tracing::{debug, info};

use crate::apps::{MountContext, MountedApp};
use crate::dispatcher::{resolve_component, ComponentKind};
use crate::prompts::{ExamplePrompt, EXAMPLE_PROMPTS};
use crate::scheduler::{Scheduler, TimerId};

/// Cosmetic pause before the first reveal of a prompt
pub const GENERATING_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonPhase {
    /// Nothing selected yet
    Idle,
    /// Prompt selected, reveal timer armed
    Generating,
    /// Markdown and mini-app visible
    Showing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Reveal(usize);

pub struct Comparison {
    ctx: MountContext,
    selected: Option<usize>,
    phase: ComparisonPhase,
    visited: HashSet<usize>,
    timers: Scheduler<Reveal>,
    pending_reveal: Option<TimerId>,
    app: Option<MountedApp>,
    /// Orchestrator time when the current app was mounted
    mounted_at: Duration,
}

impl Comparison {
    pub fn new(ctx: MountContext) -> Self {
        Self {
            ctx,
            selected: None,
            phase: ComparisonPhase::Idle,
            visited: HashSet::new(),
            timers: Scheduler::new(),
            pending_reveal: None,
            app: None,
            mounted_at: Duration::ZERO,
        }
    }

    pub fn prompts(&self) -> &'static [ExamplePrompt] {
        &EXAMPLE_PROMPTS
    }

    pub fn phase(&self) -> ComparisonPhase {
        self.phase
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_prompt(&self) -> Option<&'static ExamplePrompt> {
        self.selected.map(|i| &EXAMPLE_PROMPTS[i])
    }

    /// Component the selected prompt resolves to (known before it is mounted)
    pub fn selected_component(&self) -> Option<ComponentKind> {
        self.selected_prompt().and_then(|p| resolve_component(p.text))
    }

    pub fn app(&self) -> Option<&MountedApp> {
        self.app.as_ref()
    }

    pub fn app_mut(&mut self) -> Option<&mut MountedApp> {
        self.app.as_mut()
    }

    pub fn is_visited(&self, index: usize) -> bool {
        self.visited.contains(&index)
    }

    /// Select an example prompt. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index >= EXAMPLE_PROMPTS.len() {
            return;
        }

        self.unmount();
        if let Some(id) = self.pending_reveal.take() {
            self.timers.cancel(id);
        }
        self.selected = Some(index);
        info!(prompt = EXAMPLE_PROMPTS[index].text, "prompt selected");

        if self.visited.contains(&index) {
            self.reveal(index);
        } else {
            self.phase = ComparisonPhase::Generating;
            self.pending_reveal = Some(self.timers.after(GENERATING_DELAY, Reveal(index)));
            debug!(index, "generating");
        }
    }

    /// Forward time for the orchestrator and the mounted app
    pub fn advance(&mut self, elapsed: Duration) {
        for Reveal(index) in self.timers.advance_to(elapsed) {
            self.pending_reveal = None;
            self.reveal(index);
        }
        let since_mount = self.timers.now().saturating_sub(self.mounted_at);
        if let Some(app) = self.app.as_mut() {
            app.advance(since_mount);
        }
    }

    fn reveal(&mut self, index: usize) {
        self.visited.insert(index);
        self.phase = ComparisonPhase::Showing;
        self.mounted_at = self.timers.now();
        self.app = resolve_component(EXAMPLE_PROMPTS[index].text)
            .map(|kind| MountedApp::mount(kind, &self.ctx));
    }

    fn unmount(&mut self) {
        if let Some(mut app) = self.app.take() {
            app.teardown();
            info!(component = %app.kind(), "unmounted mini-app");
        }
    }

    /// Tear everything down (host is shutting down)
    pub fn shutdown(&mut self) {
        self.unmount();
        self.timers.cancel_all();
        self.pending_reveal = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn comparison() -> Comparison {
        Comparison::new(MountContext {
            seed: Some(1),
            ..MountContext::default()
        })
    }

    #[test]
    fn test_first_selection_generates_then_shows() {
        let mut c = comparison();
        assert_eq!(c.phase(), ComparisonPhase::Idle);

        c.select(1);
        assert_eq!(c.phase(), ComparisonPhase::Generating);
        assert!(c.app().is_none());
        assert_eq!(c.selected_component(), Some(ComponentKind::FractalExplorer));

        c.advance(ms(999));
        assert_eq!(c.phase(), ComparisonPhase::Generating);

        c.advance(ms(1_000));
        assert_eq!(c.phase(), ComparisonPhase::Showing);
        assert_eq!(c.app().map(|a| a.kind()), Some(ComponentKind::FractalExplorer));
        assert!(c.is_visited(1));
    }

    #[test]
    fn test_revisit_shows_immediately() {
        let mut c = comparison();
        c.select(2);
        c.advance(ms(1_000));
        c.select(3);
        c.advance(ms(2_000));
        c.select(2);

        assert_eq!(c.phase(), ComparisonPhase::Showing);
        assert_eq!(c.app().map(|a| a.kind()), Some(ComponentKind::MathQuiz));
    }

    #[test]
    fn test_switching_during_generation_cancels_old_reveal() {
        let mut c = comparison();
        c.select(0);
        c.advance(ms(500));
        c.select(3);

        c.advance(ms(1_000));
        assert_eq!(c.phase(), ComparisonPhase::Generating, "old reveal must not fire");
        assert!(!c.is_visited(0));

        c.advance(ms(1_500));
        assert_eq!(c.app().map(|a| a.kind()), Some(ComponentKind::MemoryGame));
    }

    #[test]
    fn test_app_time_starts_at_mount() {
        let mut c = comparison();
        c.select(2);
        c.advance(ms(1_000));

        let Some(MountedApp::MathQuiz(quiz)) = c.app_mut() else {
            panic!("math quiz expected");
        };
        let answer = quiz.problem().correct_answer();
        quiz.submit_answer(answer);

        // 1500 ms after the answer, measured on the orchestrator clock
        c.advance(ms(2_499));
        let Some(MountedApp::MathQuiz(quiz)) = c.app() else { unreachable!() };
        assert_eq!(quiz.feedback(), crate::apps::Feedback::Correct);

        c.advance(ms(2_500));
        let Some(MountedApp::MathQuiz(quiz)) = c.app() else { unreachable!() };
        assert_eq!(quiz.feedback(), crate::apps::Feedback::None);
    }

    #[test]
    fn test_out_of_range_selection_is_ignored() {
        let mut c = comparison();
        c.select(42);
        assert_eq!(c.phase(), ComparisonPhase::Idle);
        assert_eq!(c.selected_index(), None);
    }

    #[test]
    fn test_shutdown_clears_everything() {
        let mut c = comparison();
        c.select(0);
        c.advance(ms(1_000));
        c.shutdown();
        assert!(c.app().is_none());
        assert_eq!(c.timers.pending_count(), 0);
    }
}
