// SPDX-License-Identifier: MPL-2.0
//! Delayed event delivery port.
//!
//! Components never run callbacks themselves. They hand the scheduler an
//! event and the host feeds that event back into the component once the
//! delay has elapsed, on the same thread that runs every other update.

use std::time::{Duration, Instant};

/// Identifies one scheduled delivery so it can be cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

impl TimerToken {
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Delivers an event back to the host no earlier than a given delay.
///
/// Implementations make no ordering promise between timers beyond "not
/// before the deadline". A cancelled timer may still have been delivered
/// already, so receivers must validate events against their current state.
pub trait Scheduler {
    /// Event type routed back to the host.
    type Event;

    /// Current monotonic time as seen by this scheduler.
    fn now(&self) -> Instant;

    /// Schedules `event` for delivery after `delay`.
    fn after(&mut self, delay: Duration, event: Self::Event) -> TimerToken;

    /// Cancels a pending delivery.
    ///
    /// Returns `true` if the timer was still pending.
    fn cancel(&mut self, token: TimerToken) -> bool;
}
