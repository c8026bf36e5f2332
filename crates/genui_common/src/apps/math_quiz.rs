//! Math Quiz - Addition problems with three answer options
//!
//! A correct answer bumps the score and arms a 1500 ms timer that swaps in a
//! fresh problem. Wrong answers only change the feedback; the problem stays
//! so the user can try another option.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use std::ops::RangeInclusive;
use std::time::Duration;
use tracing::debug;

use crate::scheduler::{Scheduler, TimerId};

/// Operands are drawn uniformly from this range
pub const OPERAND_RANGE: RangeInclusive<u32> = 1..=5;

/// Pause between a correct answer and the next problem
pub const NEXT_PROBLEM_DELAY: Duration = Duration::from_millis(1500);

/// Operands shown before the first random problem
pub const INITIAL_OPERANDS: (u32, u32) = (2, 3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    None,
    Correct,
    Wrong,
}

/// One addition problem. Replaced wholesale, never edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MathProblem {
    pub operand_a: u32,
    pub operand_b: u32,
    pub options: [u32; 3],
}

impl MathProblem {
    /// Draw both operands from `OPERAND_RANGE`
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let a = rng.gen_range(OPERAND_RANGE);
        let b = rng.gen_range(OPERAND_RANGE);
        Self::with_operands(a, b, rng)
    }

    /// Build the option set for fixed operands; only the order is random
    pub fn with_operands<R: Rng + ?Sized>(operand_a: u32, operand_b: u32, rng: &mut R) -> Self {
        let correct = operand_a + operand_b;
        let lower = if correct > 1 { correct - 1 } else { correct + 2 };
        let mut options = [correct, correct + 1, lower];
        options.shuffle(rng);
        Self {
            operand_a,
            operand_b,
            options,
        }
    }

    pub fn correct_answer(&self) -> u32 {
        self.operand_a + self.operand_b
    }

    pub fn is_correct(&self, value: u32) -> bool {
        value == self.correct_answer()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuizTimer {
    NextProblem,
}

/// Math quiz engine state
#[derive(Debug)]
pub struct MathQuiz {
    score: u32,
    problem: MathProblem,
    feedback: Feedback,
    rng: StdRng,
    timers: Scheduler<QuizTimer>,
    pending_reset: Option<TimerId>,
}

impl MathQuiz {
    /// Start with the fixed opening problem (2 + 3)
    pub fn new(rng: StdRng) -> Self {
        let (a, b) = INITIAL_OPERANDS;
        Self::with_operands(a, b, rng)
    }

    /// Start with a forced first problem
    pub fn with_operands(operand_a: u32, operand_b: u32, mut rng: StdRng) -> Self {
        let problem = MathProblem::with_operands(operand_a, operand_b, &mut rng);
        Self {
            score: 0,
            problem,
            feedback: Feedback::None,
            rng,
            timers: Scheduler::new(),
            pending_reset: None,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn problem(&self) -> &MathProblem {
        &self.problem
    }

    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    /// Answer buttons are disabled between a correct answer and the next problem
    pub fn options_enabled(&self) -> bool {
        self.feedback != Feedback::Correct
    }

    pub fn has_pending_reset(&self) -> bool {
        self.pending_reset
            .is_some_and(|id| self.timers.is_pending(id))
    }

    /// Replace the problem with a random one and clear feedback
    pub fn new_problem(&mut self) {
        self.problem = MathProblem::random(&mut self.rng);
        self.feedback = Feedback::None;
        debug!(
            a = self.problem.operand_a,
            b = self.problem.operand_b,
            options = ?self.problem.options,
            "math quiz: new problem"
        );
    }

    pub fn submit_answer(&mut self, value: u32) -> Feedback {
        if self.problem.is_correct(value) {
            self.score += 1;
            self.feedback = Feedback::Correct;
            self.cancel_pending();
            self.pending_reset = Some(self.timers.after(NEXT_PROBLEM_DELAY, QuizTimer::NextProblem));
            debug!(score = self.score, "math quiz: correct answer");
        } else {
            self.feedback = Feedback::Wrong;
            debug!(value, "math quiz: wrong answer");
        }
        self.feedback
    }

    /// Forward time; `elapsed` is measured from mount
    pub fn advance(&mut self, elapsed: Duration) {
        for timer in self.timers.advance_to(elapsed) {
            match timer {
                QuizTimer::NextProblem => {
                    self.pending_reset = None;
                    self.new_problem();
                }
            }
        }
    }

    /// Cancel the pending reset so nothing fires after unmount
    pub fn teardown(&mut self) {
        self.cancel_pending();
    }

    fn cancel_pending(&mut self) {
        if let Some(id) = self.pending_reset.take() {
            if self.timers.cancel(id) {
                debug!("math quiz: cancelled pending reset");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_problem_options_invariant() {
        let mut rng = rng(7);
        for _ in 0..500 {
            let p = MathProblem::random(&mut rng);
            assert!(OPERAND_RANGE.contains(&p.operand_a));
            assert!(OPERAND_RANGE.contains(&p.operand_b));

            let correct = p.correct_answer();
            assert_eq!(p.options.iter().filter(|&&o| o == correct).count(), 1);

            let others: Vec<u32> = p.options.iter().copied().filter(|&o| o != correct).collect();
            assert_eq!(others.len(), 2);
            assert_ne!(others[0], others[1]);
            assert!(others.iter().all(|&o| o > 0));
            assert!(others.contains(&(correct + 1)));
        }
    }

    #[test]
    fn test_low_sum_uses_plus_two_distractor() {
        let p = MathProblem::with_operands(1, 0, &mut rng(1));
        let mut sorted = p.options;
        sorted.sort_unstable();
        assert_eq!(sorted, [1, 2, 3]);
    }

    #[test]
    fn test_initial_problem_is_two_plus_three() {
        let quiz = MathQuiz::new(rng(3));
        assert_eq!(quiz.problem().operand_a, 2);
        assert_eq!(quiz.problem().operand_b, 3);
        assert_eq!(quiz.feedback(), Feedback::None);
        assert_eq!(quiz.score(), 0);
    }

    #[test]
    fn test_correct_answer_scores_and_schedules_one_reset() {
        let mut quiz = MathQuiz::with_operands(2, 3, rng(11));
        assert_eq!(quiz.submit_answer(5), Feedback::Correct);
        assert_eq!(quiz.score(), 1);
        assert!(quiz.has_pending_reset());
        assert!(!quiz.options_enabled());

        quiz.advance(ms(1_499));
        assert_eq!(quiz.feedback(), Feedback::Correct);

        quiz.advance(ms(1_500));
        assert_eq!(quiz.feedback(), Feedback::None);
        assert!(!quiz.has_pending_reset());
        assert!(quiz.options_enabled());
    }

    #[test]
    fn test_wrong_answer_keeps_problem_and_score() {
        let mut quiz = MathQuiz::with_operands(4, 1, rng(5));
        let before = quiz.problem().clone();

        assert_eq!(quiz.submit_answer(6), Feedback::Wrong);
        assert_eq!(quiz.score(), 0);
        assert!(!quiz.has_pending_reset());

        quiz.advance(ms(10_000));
        assert_eq!(quiz.problem(), &before);
        assert_eq!(quiz.feedback(), Feedback::Wrong);

        // Retry with the right option
        assert_eq!(quiz.submit_answer(5), Feedback::Correct);
        assert_eq!(quiz.score(), 1);
    }

    #[test]
    fn test_reentrant_correct_answer_rearms_single_timer() {
        let mut quiz = MathQuiz::with_operands(1, 1, rng(9));
        quiz.submit_answer(2);
        quiz.advance(ms(1_000));
        quiz.submit_answer(2);

        assert_eq!(quiz.score(), 2);
        assert_eq!(quiz.timers.pending_count(), 1);

        // Old deadline (1500) passes without a reset; new one is at 2500
        quiz.advance(ms(1_600));
        assert_eq!(quiz.feedback(), Feedback::Correct);
        quiz.advance(ms(2_500));
        assert_eq!(quiz.feedback(), Feedback::None);
    }

    #[test]
    fn test_teardown_cancels_pending_reset() {
        let mut quiz = MathQuiz::with_operands(2, 2, rng(2));
        quiz.submit_answer(4);
        quiz.teardown();

        assert!(!quiz.has_pending_reset());
        quiz.advance(ms(5_000));
        assert_eq!(quiz.feedback(), Feedback::Correct);
        assert_eq!(quiz.problem().operand_a, 2);
    }
}
