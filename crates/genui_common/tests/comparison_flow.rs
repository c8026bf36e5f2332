//! Comparison flow: prompt selection, generating delay, remounting

use std::time::Duration;

use genui_common::apps::Feedback;
use genui_common::comparison::GENERATING_DELAY;
use genui_common::prompts::EXAMPLE_PROMPTS;
use genui_common::{Comparison, ComparisonPhase, ComponentKind, MountContext, MountedApp};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn seeded() -> Comparison {
    Comparison::new(MountContext {
        seed: Some(2024),
        ..MountContext::default()
    })
}

#[test]
fn test_walk_through_every_prompt() {
    let mut comparison = seeded();
    let mut now = Duration::ZERO;

    for (index, prompt) in EXAMPLE_PROMPTS.iter().enumerate() {
        comparison.select(index);
        assert_eq!(comparison.phase(), ComparisonPhase::Generating);
        assert_eq!(comparison.selected_prompt(), Some(prompt));

        now += GENERATING_DELAY;
        comparison.advance(now);

        assert_eq!(comparison.phase(), ComparisonPhase::Showing);
        assert_eq!(
            comparison.app().map(MountedApp::kind),
            Some(ComponentKind::ALL[index])
        );
    }

    for index in 0..EXAMPLE_PROMPTS.len() {
        assert!(comparison.is_visited(index));
    }
}

#[test]
fn test_reselecting_remounts_a_fresh_app() {
    let mut comparison = seeded();
    comparison.select(2);
    comparison.advance(ms(1_000));

    if let Some(MountedApp::MathQuiz(quiz)) = comparison.app_mut() {
        let answer = quiz.problem().correct_answer();
        quiz.submit_answer(answer);
        assert_eq!(quiz.score(), 1);
    } else {
        panic!("math quiz expected");
    }

    comparison.select(2);
    assert_eq!(comparison.phase(), ComparisonPhase::Showing);
    match comparison.app() {
        Some(MountedApp::MathQuiz(quiz)) => {
            assert_eq!(quiz.score(), 0, "remount starts a new session");
            assert_eq!(quiz.feedback(), Feedback::None);
        }
        _ => panic!("math quiz expected"),
    }
}

#[test]
fn test_pending_quiz_reset_dies_with_the_app() {
    let mut comparison = seeded();
    comparison.select(2);
    comparison.advance(ms(1_000));

    if let Some(MountedApp::MathQuiz(quiz)) = comparison.app_mut() {
        let answer = quiz.problem().correct_answer();
        quiz.submit_answer(answer);
        assert!(quiz.has_pending_reset());
    }

    comparison.select(1);
    comparison.advance(ms(5_000));

    assert_eq!(
        comparison.app().map(MountedApp::kind),
        Some(ComponentKind::FractalExplorer)
    );
    assert!(!comparison.app().is_some_and(MountedApp::has_pending_timer));
}

#[test]
fn test_memory_resolution_runs_on_comparison_time() {
    let mut comparison = seeded();
    comparison.select(3);
    comparison.advance(ms(1_000));

    let (first, second) = match comparison.app_mut() {
        Some(MountedApp::Memory(game)) => {
            let symbol = game.cards()[0].symbol;
            let partner = game
                .cards()
                .iter()
                .skip(1)
                .position(|c| c.symbol == symbol)
                .map(|p| p + 1)
                .unwrap();
            game.click(0);
            game.click(partner);
            (0, partner)
        }
        _ => panic!("memory game expected"),
    };

    comparison.advance(ms(1_499));
    let Some(MountedApp::Memory(game)) = comparison.app() else {
        panic!("memory game expected");
    };
    assert!(!game.cards()[first].matched);

    comparison.advance(ms(1_500));
    let Some(MountedApp::Memory(game)) = comparison.app() else {
        panic!("memory game expected");
    };
    assert!(game.cards()[first].matched && game.cards()[second].matched);
    assert_eq!(game.matched_pairs(), 1);
}
