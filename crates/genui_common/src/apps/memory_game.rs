//! Memory Game - 16-card pair matching state machine
//!
//! Phases follow the number of pending (face up, unmatched) cards:
//! 0 = idle, 1 = one selected, 2 = resolving. A second pick counts a move
//! and arms a single resolution timer; clicks are ignored until it fires.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::time::Duration;
use tracing::{debug, info};

use crate::scheduler::{Scheduler, TimerId};

/// Number of distinct symbols; the deck holds each twice
pub const PAIR_COUNT: usize = 8;
pub const CARD_COUNT: usize = PAIR_COUNT * 2;

/// Delay before an equal pair is marked matched
pub const MATCH_DELAY: Duration = Duration::from_millis(500);

/// Delay before an unequal pair flips back
pub const MISMATCH_DELAY: Duration = Duration::from_millis(1000);

/// Card faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    Dog,
    Cat,
    Mouse,
    Hamster,
    Rabbit,
    Fox,
    Bear,
    Panda,
}

impl Symbol {
    pub const ALL: [Symbol; PAIR_COUNT] = [
        Symbol::Dog,
        Symbol::Cat,
        Symbol::Mouse,
        Symbol::Hamster,
        Symbol::Rabbit,
        Symbol::Fox,
        Symbol::Bear,
        Symbol::Panda,
    ];

    pub fn emoji(self) -> &'static str {
        match self {
            Symbol::Dog => "🐶",
            Symbol::Cat => "🐱",
            Symbol::Mouse => "🐭",
            Symbol::Hamster => "🐹",
            Symbol::Rabbit => "🐰",
            Symbol::Fox => "🦊",
            Symbol::Bear => "🐻",
            Symbol::Panda => "🐼",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: usize,
    pub symbol: Symbol,
    pub face_up: bool,
    pub matched: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    OneSelected,
    Resolving,
}

/// Result of a card click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Out of range, already face up, already matched, or two cards pending
    Ignored,
    /// First card of a pair turned over
    Flipped,
    /// Second card turned over; resolution is scheduled
    PairSelected { is_match: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Resolution {
    Match(usize, usize),
    Mismatch(usize, usize),
}

/// Memory game session
#[derive(Debug)]
pub struct MemoryGame {
    cards: Vec<Card>,
    pending: Vec<usize>,
    moves: u32,
    matched_pairs: u32,
    rng: StdRng,
    timers: Scheduler<Resolution>,
    pending_resolution: Option<TimerId>,
}

/// Fresh deck: every symbol twice, uniformly shuffled (Fisher-Yates)
pub fn shuffled_deck(rng: &mut StdRng) -> Vec<Card> {
    let mut symbols: Vec<Symbol> = Symbol::ALL.iter().chain(Symbol::ALL.iter()).copied().collect();
    symbols.shuffle(rng);
    deck_from_symbols(&symbols)
}

fn deck_from_symbols(symbols: &[Symbol]) -> Vec<Card> {
    symbols
        .iter()
        .enumerate()
        .map(|(id, &symbol)| Card {
            id,
            symbol,
            face_up: false,
            matched: false,
        })
        .collect()
}

impl MemoryGame {
    pub fn new(mut rng: StdRng) -> Self {
        let cards = shuffled_deck(&mut rng);
        Self::from_cards(cards, rng)
    }

    /// Lay out cards in a known order. Returns `None` unless every symbol
    /// appears exactly twice.
    pub fn with_layout(symbols: &[Symbol], rng: StdRng) -> Option<Self> {
        if symbols.len() != CARD_COUNT {
            return None;
        }
        let every_symbol_twice = Symbol::ALL
            .iter()
            .all(|s| symbols.iter().filter(|&x| x == s).count() == 2);
        if !every_symbol_twice {
            return None;
        }
        Some(Self::from_cards(deck_from_symbols(symbols), rng))
    }

    fn from_cards(cards: Vec<Card>, rng: StdRng) -> Self {
        Self {
            cards,
            pending: Vec::with_capacity(2),
            moves: 0,
            matched_pairs: 0,
            rng,
            timers: Scheduler::new(),
            pending_resolution: None,
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn matched_pairs(&self) -> u32 {
        self.matched_pairs
    }

    pub fn phase(&self) -> Phase {
        match self.pending.len() {
            0 => Phase::Idle,
            1 => Phase::OneSelected,
            _ => Phase::Resolving,
        }
    }

    pub fn is_won(&self) -> bool {
        self.matched_pairs as usize == PAIR_COUNT
    }

    /// Cards turned over but not yet matched
    pub fn face_up_unmatched(&self) -> usize {
        self.cards.iter().filter(|c| c.face_up && !c.matched).count()
    }

    pub fn has_pending_resolution(&self) -> bool {
        self.pending_resolution
            .is_some_and(|id| self.timers.is_pending(id))
    }

    pub fn click(&mut self, index: usize) -> ClickOutcome {
        if self.pending.len() >= 2 {
            return ClickOutcome::Ignored;
        }
        let Some(card) = self.cards.get_mut(index) else {
            return ClickOutcome::Ignored;
        };
        if card.face_up || card.matched {
            return ClickOutcome::Ignored;
        }

        card.face_up = true;
        self.pending.push(index);
        debug!(index, symbol = ?card.symbol, "memory: card flipped");

        if self.pending.len() < 2 {
            return ClickOutcome::Flipped;
        }

        self.moves += 1;
        let (first, second) = (self.pending[0], self.pending[1]);
        let is_match = self.cards[first].symbol == self.cards[second].symbol;

        self.cancel_pending();
        let id = if is_match {
            self.timers.after(MATCH_DELAY, Resolution::Match(first, second))
        } else {
            self.timers.after(MISMATCH_DELAY, Resolution::Mismatch(first, second))
        };
        self.pending_resolution = Some(id);
        debug!(first, second, is_match, moves = self.moves, "memory: pair selected");

        ClickOutcome::PairSelected { is_match }
    }

    /// Forward time; `elapsed` is measured from mount (not from the last reset)
    pub fn advance(&mut self, elapsed: Duration) {
        for resolution in self.timers.advance_to(elapsed) {
            self.pending_resolution = None;
            self.apply(resolution);
        }
    }

    fn apply(&mut self, resolution: Resolution) {
        match resolution {
            Resolution::Match(a, b) => {
                self.cards[a].matched = true;
                self.cards[b].matched = true;
                self.matched_pairs += 1;
                debug!(a, b, matched_pairs = self.matched_pairs, "memory: pair matched");
                if self.is_won() {
                    info!(moves = self.moves, "memory: all pairs matched");
                }
            }
            Resolution::Mismatch(a, b) => {
                self.cards[a].face_up = false;
                self.cards[b].face_up = false;
                debug!(a, b, "memory: pair flipped back");
            }
        }
        self.pending.clear();
    }

    /// Reshuffle and zero the counters; a pending resolution is dropped
    pub fn reset(&mut self) {
        self.cancel_pending();
        self.cards = shuffled_deck(&mut self.rng);
        self.pending.clear();
        self.moves = 0;
        self.matched_pairs = 0;
        debug!("memory: reset");
    }

    pub fn teardown(&mut self) {
        self.cancel_pending();
    }

    fn cancel_pending(&mut self) {
        if let Some(id) = self.pending_resolution.take() {
            if self.timers.cancel(id) {
                debug!("memory: cancelled pending resolution");
            }
        }
    }
}
