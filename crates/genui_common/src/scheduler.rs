//! Scheduler - Deterministic timer queue for mini-app state machines
//!
//! Every mini-app owns one `Scheduler` and advances it with the time elapsed
//! since it was mounted. Nothing here reads the system clock, so tests drive
//! timers by calling `advance_by` instead of sleeping.
//!
//! Timers fire in due order; ties fire in the order they were armed.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

/// Cancellation handle for an armed timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
enum Repeat {
    Once,
    Every(Duration),
}

#[derive(Debug, Clone)]
struct Entry<E> {
    event: E,
    repeat: Repeat,
}

/// Single-threaded timer queue with a virtual clock
#[derive(Debug, Clone)]
pub struct Scheduler<E> {
    now: Duration,
    next_id: u64,
    queue: BTreeMap<(Duration, u64), Entry<E>>,
    due_by_id: HashMap<u64, Duration>,
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Scheduler<E> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            queue: BTreeMap::new(),
            due_by_id: HashMap::new(),
        }
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Arm a one-shot timer firing `delay` from now
    pub fn after(&mut self, delay: Duration, event: E) -> TimerId {
        self.arm(self.now + delay, event, Repeat::Once)
    }

    /// Arm a recurring timer firing every `period`
    ///
    /// A zero period is bumped to one millisecond so `advance_to` always
    /// terminates.
    pub fn every(&mut self, period: Duration, event: E) -> TimerId {
        let period = period.max(Duration::from_millis(1));
        self.arm(self.now + period, event, Repeat::Every(period))
    }

    fn arm(&mut self, due: Duration, event: E, repeat: Repeat) -> TimerId {
        let id = self.next_id;
        self.next_id += 1;
        self.queue.insert((due, id), Entry { event, repeat });
        self.due_by_id.insert(id, due);
        TimerId(id)
    }

    /// Cancel a pending timer. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.due_by_id.remove(&id.0) {
            Some(due) => self.queue.remove(&(due, id.0)).is_some(),
            None => false,
        }
    }

    /// Drop every pending timer
    pub fn cancel_all(&mut self) -> usize {
        let count = self.queue.len();
        self.queue.clear();
        self.due_by_id.clear();
        count
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.due_by_id.contains_key(&id.0)
    }

    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    /// Time remaining until `id` fires, if it is still pending
    pub fn remaining(&self, id: TimerId) -> Option<Duration> {
        self.due_by_id
            .get(&id.0)
            .map(|due| due.saturating_sub(self.now))
    }
}

impl<E: Clone> Scheduler<E> {
    /// Move the clock forward to `now` and return every event that came due
    ///
    /// Recurring timers fire at most once per call; missed periods are skipped.
    /// A `now` earlier than the current time is ignored.
    pub fn advance_to(&mut self, now: Duration) -> Vec<E> {
        if now > self.now {
            self.now = now;
        }

        let mut fired = Vec::new();
        loop {
            let key = match self.queue.keys().next() {
                Some(&(due, id)) if due <= self.now => (due, id),
                _ => break,
            };
            let Some(entry) = self.queue.remove(&key) else {
                break;
            };
            let (due, id) = key;

            match entry.repeat {
                Repeat::Once => {
                    self.due_by_id.remove(&id);
                }
                Repeat::Every(period) => {
                    let mut next = due + period;
                    while next <= self.now {
                        next += period;
                    }
                    self.due_by_id.insert(id, next);
                    self.queue.insert(
                        (next, id),
                        Entry {
                            event: entry.event.clone(),
                            repeat: Repeat::Every(period),
                        },
                    );
                }
            }
            fired.push(entry.event);
        }
        fired
    }

    pub fn advance_by(&mut self, delta: Duration) -> Vec<E> {
        self.advance_to(self.now + delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_one_shot_fires_once_when_due() {
        let mut sched = Scheduler::new();
        let id = sched.after(ms(500), "reveal");

        assert!(sched.advance_to(ms(499)).is_empty());
        assert!(sched.is_pending(id));

        assert_eq!(sched.advance_to(ms(500)), vec!["reveal"]);
        assert!(!sched.is_pending(id));
        assert!(sched.advance_by(ms(10_000)).is_empty());
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let mut sched = Scheduler::new();
        let id = sched.after(ms(100), 1);

        assert!(sched.cancel(id));
        assert!(!sched.cancel(id), "second cancel is a no-op");
        assert!(sched.advance_by(ms(1_000)).is_empty());
        assert_eq!(sched.pending_count(), 0);
    }

    #[test]
    fn test_due_order_and_ties() {
        let mut sched = Scheduler::new();
        sched.after(ms(300), 'c');
        sched.after(ms(100), 'a');
        sched.after(ms(300), 'd');
        sched.after(ms(200), 'b');

        assert_eq!(sched.advance_to(ms(1_000)), vec!['a', 'b', 'c', 'd']);
    }

    #[test]
    fn test_every_rearms_and_coalesces_missed_periods() {
        let mut sched = Scheduler::new();
        let id = sched.every(ms(1_000), "tick");

        assert!(sched.advance_to(ms(999)).is_empty());
        assert_eq!(sched.advance_to(ms(1_000)), vec!["tick"]);
        assert!(sched.is_pending(id));

        // Five periods pass in one step: one firing, next due at 7000
        assert_eq!(sched.advance_to(ms(6_500)), vec!["tick"]);
        assert_eq!(sched.remaining(id), Some(ms(500)));

        assert!(sched.cancel(id));
        assert!(sched.advance_by(ms(5_000)).is_empty());
    }

    #[test]
    fn test_time_never_moves_backwards() {
        let mut sched: Scheduler<()> = Scheduler::new();
        sched.advance_to(ms(2_000));
        sched.advance_to(ms(1_000));
        assert_eq!(sched.now(), ms(2_000));
    }

    #[test]
    fn test_delay_is_relative_to_current_time() {
        let mut sched = Scheduler::new();
        sched.advance_to(ms(1_000));
        sched.after(ms(1_500), "new problem");

        assert!(sched.advance_to(ms(2_499)).is_empty());
        assert_eq!(sched.advance_to(ms(2_500)), vec!["new problem"]);
    }

    #[test]
    fn test_cancel_all() {
        let mut sched = Scheduler::new();
        sched.after(ms(10), 1);
        sched.every(ms(10), 2);

        assert_eq!(sched.cancel_all(), 2);
        assert!(sched.advance_by(ms(100)).is_empty());
    }
}
