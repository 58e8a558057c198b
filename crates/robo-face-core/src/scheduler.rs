//! Deadline-keyed timers fired from the main loop.
//!
//! There is no hardware timer interrupt behind this: the main loop asks for
//! due entries once per iteration, so resolution is bounded by the loop
//! slice.

use embassy_time::Instant;
use heapless::Vec;

use crate::config::TIMER_SLOTS;

/// Timed behaviors of the face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimedTask {
    BuzzerToggle,
}

/// Scheduler sized for the face's timed tasks.
pub type Timers = Scheduler<TimedTask, TIMER_SLOTS>;

/// Fixed-capacity set of `(deadline, key)` entries, at most one per key.
#[derive(Debug)]
pub struct Scheduler<K, const N: usize> {
    entries: Vec<(Instant, K), N>,
}

impl<K, const N: usize> Scheduler<K, N> {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, const N: usize> Default for Scheduler<K, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + PartialEq, const N: usize> Scheduler<K, N> {
    /// Schedule `key` at `at`, replacing any earlier deadline of the same key.
    ///
    /// Returns the key back when every slot is taken.
    pub fn schedule(&mut self, key: K, at: Instant) -> Result<(), K> {
        if let Some(entry) = self.entries.iter_mut().find(|(_, k)| *k == key) {
            entry.0 = at;
            return Ok(());
        }
        self.entries.push((at, key)).map_err(|(_, key)| key)
    }

    /// Drop the deadline of `key`. Returns whether one was scheduled.
    pub fn cancel(&mut self, key: K) -> bool {
        match self.entries.iter().position(|(_, k)| *k == key) {
            Some(index) => {
                self.entries.swap_remove(index);
                true
            }
            None => false,
        }
    }

    pub fn deadline(&self, key: K) -> Option<Instant> {
        self.entries
            .iter()
            .find(|(_, k)| *k == key)
            .map(|(at, _)| *at)
    }

    /// Remove and return the earliest entry whose deadline is not after `now`.
    pub fn pop_due(&mut self, now: Instant) -> Option<K> {
        let index = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, (at, _))| *at <= now)
            .min_by_key(|(_, (at, _))| *at)
            .map(|(index, _)| index)?;
        Some(self.entries.swap_remove(index).1)
    }
}
