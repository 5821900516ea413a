//! Debounce timer for window resize notifications.
//!
//! A burst of resize notifications collapses into a single surface resize:
//! every notification cancels the pending timer (if any) and arms a new one,
//! so only the last notification of a burst ever fires.
//!
//! ```text
//!            schedule              schedule
//!   Idle ───────────────▶ Pending ◀─────────┐
//!    ▲                      │  └────────────┘
//!    └──────── poll ────────┘
//!         (deadline reached)
//! ```
//!
//! Deadlines are absolute [`WorldTime::elapsed`](crate::resources::worldtime::WorldTime)
//! values, so the timer never needs to be ticked while idle.

use bevy_ecs::prelude::Resource;
use std::time::Duration;

/// State of the debounce timer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DebounceState {
    /// No resize is scheduled.
    #[default]
    Idle,
    /// A resize is scheduled for when the world clock reaches `deadline`.
    Pending { deadline: Duration },
}

/// Single-slot debounce timer. Holds at most one pending deadline.
#[derive(Resource, Clone, Debug)]
pub struct ResizeDebounce {
    delay: Duration,
    state: DebounceState,
    superseded: u64,
}

impl ResizeDebounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            state: DebounceState::Idle,
            superseded: 0,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn state(&self) -> DebounceState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, DebounceState::Pending { .. })
    }

    /// Number of timers cancelled by a later notification so far.
    pub fn superseded(&self) -> u64 {
        self.superseded
    }

    /// Cancel any pending timer and arm a new one at `now + delay`.
    ///
    /// Returns `true` if a pending timer was replaced.
    pub fn schedule(&mut self, now: Duration) -> bool {
        let replaced = self.is_pending();
        if replaced {
            self.superseded += 1;
        }
        self.state = DebounceState::Pending {
            deadline: now + self.delay,
        };
        replaced
    }

    /// Fire the pending timer if `now` has reached its deadline.
    ///
    /// Returns `true` exactly once per armed timer; the state is back to
    /// [`DebounceState::Idle`] afterwards.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.state {
            DebounceState::Pending { deadline } if now >= deadline => {
                self.state = DebounceState::Idle;
                true
            }
            _ => false,
        }
    }
}
