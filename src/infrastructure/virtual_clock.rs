// SPDX-License-Identifier: MPL-2.0
//! Deterministic scheduler driven by a virtual clock.
//!
//! Time only moves when the host asks for the next due event. Events due at
//! the same instant are delivered in the order they were scheduled.
//!
//! # Example
//!
//! ```
//! use folio_fx::application::port::Scheduler;
//! use folio_fx::infrastructure::VirtualScheduler;
//! use std::time::Duration;
//!
//! let mut scheduler = VirtualScheduler::new();
//! scheduler.after(Duration::from_millis(300), "late");
//! scheduler.after(Duration::from_millis(100), "early");
//!
//! let horizon = Duration::from_secs(1);
//! assert_eq!(scheduler.next_due(horizon), Some("early"));
//! assert_eq!(scheduler.elapsed(), Duration::from_millis(100));
//! assert_eq!(scheduler.next_due(horizon), Some("late"));
//! assert_eq!(scheduler.next_due(horizon), None);
//! ```

use crate::application::port::{Scheduler, TimerToken};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct VirtualScheduler<E> {
    origin: Instant,
    elapsed: Duration,
    next_token: u64,
    /// Keyed by (deadline, token) so iteration order is delivery order.
    pending: BTreeMap<(Duration, u64), E>,
}

impl<E> Default for VirtualScheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> VirtualScheduler<E> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            elapsed: Duration::ZERO,
            next_token: 0,
            pending: BTreeMap::new(),
        }
    }

    /// Virtual time elapsed since creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Number of deliveries still pending.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Deadline of the earliest pending delivery.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.keys().next().map(|(deadline, _)| *deadline)
    }

    /// Pops the earliest event due at or before `horizon`, moving the clock
    /// to its deadline.
    pub fn next_due(&mut self, horizon: Duration) -> Option<E> {
        let (&(deadline, token), _) = self.pending.iter().next()?;
        if deadline > horizon {
            return None;
        }
        self.elapsed = self.elapsed.max(deadline);
        self.pending.remove(&(deadline, token))
    }

    /// Moves the clock forward to `horizon` without delivering anything.
    ///
    /// Call after draining [`next_due`](Self::next_due) for the same horizon.
    pub fn settle_at(&mut self, horizon: Duration) {
        self.elapsed = self.elapsed.max(horizon);
    }
}

impl<E> Scheduler for VirtualScheduler<E> {
    type Event = E;

    fn now(&self) -> Instant {
        self.origin + self.elapsed
    }

    fn after(&mut self, delay: Duration, event: E) -> TimerToken {
        let token = self.next_token;
        self.next_token += 1;
        self.pending.insert((self.elapsed + delay, token), event);
        TimerToken::from_raw(token)
    }

    fn cancel(&mut self, token: TimerToken) -> bool {
        let before = self.pending.len();
        self.pending.retain(|&(_, raw), _| raw != token.raw());
        self.pending.len() < before
    }
}
