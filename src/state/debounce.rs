//! Trailing-edge debouncer for viewport resize signals.
//!
//! Each signal restarts the quiet period; only the last signal of a burst
//! leads to a recompute. Time is passed in by the caller so the state machine
//! never reads a clock itself.

use std::time::{Duration, Instant};
use tracing::debug;

/// A scheduled recompute: generation id plus deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerHandle {
    id: u64,
    deadline: Instant,
}

impl TimerHandle {
    /// Generation id; every (re)schedule gets a new one.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Instant at which the recompute becomes due.
    pub fn deadline(&self) -> Instant {
        self.deadline
    }
}

/// Debouncer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebounceState {
    /// No recompute scheduled.
    Idle,
    /// A recompute is scheduled and will fire unless another signal arrives.
    PendingRecompute(TimerHandle),
}

/// Collapses bursts of resize signals into a single recompute.
#[derive(Debug, Clone)]
pub struct ResizeDebouncer {
    quiet_period: Duration,
    state: DebounceState,
    next_id: u64,
}

impl ResizeDebouncer {
    /// Debouncer waiting `quiet_period` after the last signal.
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            state: DebounceState::Idle,
            next_id: 0,
        }
    }

    /// Record a resize signal at `now`.
    ///
    /// From `Idle` this schedules a timer; from `PendingRecompute` it cancels
    /// the existing timer and schedules a new one.
    pub fn signal(&mut self, now: Instant) -> TimerHandle {
        if let DebounceState::PendingRecompute(previous) = self.state {
            debug!(timer = previous.id, "Resize burst continues, restarting quiet period");
        }
        let handle = TimerHandle {
            id: self.next_id,
            deadline: now + self.quiet_period,
        };
        self.next_id += 1;
        self.state = DebounceState::PendingRecompute(handle);
        handle
    }

    /// Fire the pending timer if its deadline has passed.
    ///
    /// Returns the fired handle and moves back to `Idle`. A fired timer is
    /// never retried.
    pub fn poll(&mut self, now: Instant) -> Option<TimerHandle> {
        match self.state {
            DebounceState::PendingRecompute(handle) if now >= handle.deadline => {
                self.state = DebounceState::Idle;
                Some(handle)
            }
            _ => None,
        }
    }

    /// Current state.
    pub fn state(&self) -> DebounceState {
        self.state
    }

    /// Deadline of the pending timer, for hosts sizing their poll timeout.
    pub fn next_deadline(&self) -> Option<Instant> {
        match self.state {
            DebounceState::PendingRecompute(handle) => Some(handle.deadline),
            DebounceState::Idle => None,
        }
    }
}
