//! Prompt Dispatcher - Prompt text to mini-app mapping
//!
//! Deliberate keyword lookup, not language understanding. Rules are checked
//! in table order and the first rule with any keyword contained in the
//! prompt wins, so a prompt mentioning both "시간" and "프랙탈" gets the clock.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Mini-app selected for a prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    /// Local time plus three world cities
    Clock,
    /// Sierpinski triangle with a depth slider
    FractalExplorer,
    /// Addition quiz with three answer buttons
    MathQuiz,
    /// 16-card pair matching game
    MemoryGame,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 4] = [
        ComponentKind::Clock,
        ComponentKind::FractalExplorer,
        ComponentKind::MathQuiz,
        ComponentKind::MemoryGame,
    ];

    /// Stable identifier used by the CLI and in logs
    pub fn id(self) -> &'static str {
        match self {
            ComponentKind::Clock => "clock",
            ComponentKind::FractalExplorer => "fractal_explorer",
            ComponentKind::MathQuiz => "math_quiz",
            ComponentKind::MemoryGame => "memory_game",
        }
    }

    /// Title shown above the mini-app
    pub fn title(self) -> &'static str {
        match self {
            ComponentKind::Clock => "세계 시계",
            ComponentKind::FractalExplorer => "프랙탈 탐험기",
            ComponentKind::MathQuiz => "덧셈 놀이터",
            ComponentKind::MemoryGame => "메모리 게임",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// One row of the dispatch table
#[derive(Debug, Clone, Copy)]
pub struct PromptRule {
    pub keywords: &'static [&'static str],
    pub component: ComponentKind,
}

impl PromptRule {
    /// Case-sensitive substring test against every keyword
    pub fn matches(&self, prompt: &str) -> bool {
        contains_any(prompt, self.keywords)
    }
}

/// Dispatch table. Order is the tie-break.
pub const PROMPT_RULES: [PromptRule; 4] = [
    PromptRule {
        keywords: &["시간"],
        component: ComponentKind::Clock,
    },
    PromptRule {
        keywords: &["프랙탈"],
        component: ComponentKind::FractalExplorer,
    },
    PromptRule {
        keywords: &["덧셈", "가르쳐"],
        component: ComponentKind::MathQuiz,
    },
    PromptRule {
        keywords: &["메모리", "게임"],
        component: ComponentKind::MemoryGame,
    },
];

/// Route a prompt to the mini-app that should replace the markdown answer
///
/// `None` means "render nothing"; it is not an error.
pub fn resolve_component(prompt: &str) -> Option<ComponentKind> {
    PROMPT_RULES
        .iter()
        .find(|rule| rule.matches(prompt))
        .map(|rule| rule.component)
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}
