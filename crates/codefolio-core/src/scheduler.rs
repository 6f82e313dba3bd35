//! Deferred tasks on a logical clock
//!
//! Fade-ins, the fake contact round trip and similar effects are queued here
//! instead of on wall-clock timers. The owner advances the clock; tasks come
//! back out in due order (ties in scheduling order) and can be cancelled at
//! any point before they fire.

use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TimerId(u64);

pub struct Scheduler<T> {
    now: Duration,
    next_id: u64,
    queue: BTreeMap<(Duration, TimerId), T>,
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            queue: BTreeMap::new(),
        }
    }

    /// Time elapsed on the logical clock.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn schedule(&mut self, delay: Duration, task: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.queue.insert((self.now + delay, id), task);
        id
    }

    /// Cancel a pending task, handing it back if it had not fired yet.
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        let key = self.queue.keys().find(|(_, queued)| *queued == id).copied()?;
        self.queue.remove(&key)
    }

    /// Pop the earliest task due at or before `until`, moving the clock to
    /// its due time.
    pub fn pop_due(&mut self, until: Duration) -> Option<T> {
        let (&(due, id), _) = self.queue.iter().next()?;
        if due > until {
            return None;
        }
        self.now = self.now.max(due);
        self.queue.remove(&(due, id))
    }

    /// Move the clock forward without firing anything.
    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    /// Drop every pending task.
    pub fn clear(&mut self) -> usize {
        let dropped = self.queue.len();
        self.queue.clear();
        dropped
    }
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}
