// SPDX-License-Identifier: MPL-2.0
//! Wall-clock scheduler backed by tokio timers.
//!
//! Every delivery is a spawned sleep that pushes the event into an unbounded
//! channel. The host owns the receiving end and applies events one at a
//! time, so component state is only ever touched from the host loop.

use crate::application::port::{Scheduler, TimerToken};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::task::AbortHandle;

#[derive(Debug)]
pub struct TokioScheduler<E> {
    sender: mpsc::UnboundedSender<E>,
    timers: HashMap<u64, AbortHandle>,
    next_token: u64,
}

impl<E: Send + 'static> TokioScheduler<E> {
    /// Creates a scheduler and the receiver its events arrive on.
    ///
    /// Must be used from within a tokio runtime.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<E>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let scheduler = Self {
            sender,
            timers: HashMap::new(),
            next_token: 0,
        };
        (scheduler, receiver)
    }

    /// Sender for events produced outside the scheduler, such as the result
    /// of an async submission.
    #[must_use]
    pub fn sender(&self) -> mpsc::UnboundedSender<E> {
        self.sender.clone()
    }

    /// Number of timers that have not fired or been cancelled yet.
    #[must_use]
    pub fn active_timers(&self) -> usize {
        self.timers.values().filter(|handle| !handle.is_finished()).count()
    }
}

impl<E: Send + 'static> Scheduler for TokioScheduler<E> {
    type Event = E;

    fn now(&self) -> Instant {
        tokio::time::Instant::now().into_std()
    }

    fn after(&mut self, delay: Duration, event: E) -> TimerToken {
        self.timers.retain(|_, handle| !handle.is_finished());

        let token = self.next_token;
        self.next_token += 1;

        let sender = self.sender.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // The host may already be shutting down.
            let _ = sender.send(event);
        });
        self.timers.insert(token, task.abort_handle());

        TimerToken::from_raw(token)
    }

    fn cancel(&mut self, token: TimerToken) -> bool {
        match self.timers.remove(&token.raw()) {
            Some(handle) => {
                let pending = !handle.is_finished();
                handle.abort();
                pending
            }
            None => false,
        }
    }
}
