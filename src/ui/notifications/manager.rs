// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the single live toast. A new toast replaces the
//! current one on the spot, without an exit transition. Every timer the
//! manager schedules carries the id of the toast it was scheduled for, and
//! is ignored unless that toast is still current and in the expected phase.

use super::notification::{Notification, NotificationId, Phase, Severity};
use super::toast::ToastView;
use crate::application::port::{ElementId, Scheduler, Surface, TimerToken};
use crate::config::{
    DEFAULT_TOAST_AUTO_DISMISS_MS, DEFAULT_TOAST_EXIT_MS, DEFAULT_TOAST_REVEAL_MS,
};
use std::time::Duration;

/// Messages for notification state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The user clicked the close button.
    Dismiss(NotificationId),
    /// Slide an entering toast into view.
    Reveal(NotificationId),
    /// The auto-dismiss delay elapsed.
    AutoDismiss(NotificationId),
    /// The exit transition finished.
    Detach(NotificationId),
}

/// Toast timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Delay between attaching off-screen and sliding in.
    pub reveal: Duration,
    /// Delay from creation until the toast leaves on its own.
    pub auto_dismiss: Duration,
    /// Exit transition length.
    pub exit: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            reveal: Duration::from_millis(DEFAULT_TOAST_REVEAL_MS),
            auto_dismiss: Duration::from_millis(DEFAULT_TOAST_AUTO_DISMISS_MS),
            exit: Duration::from_millis(DEFAULT_TOAST_EXIT_MS),
        }
    }
}

#[derive(Debug)]
struct Active {
    notification: Notification,
    element: ElementId,
    auto_dismiss: Option<TimerToken>,
    /// Pending reveal while entering, pending detach while exiting.
    transition: Option<TimerToken>,
}

impl Active {
    fn cancel_timers<S: Scheduler>(&mut self, scheduler: &mut S) {
        for token in [self.auto_dismiss.take(), self.transition.take()]
            .into_iter()
            .flatten()
        {
            scheduler.cancel(token);
        }
    }

    fn redraw<R: Surface<ToastView>>(&self, surface: &mut R) {
        surface.update(self.element, &ToastView::of(&self.notification));
    }

    fn begin_exit<S, R>(&mut self, exit: Duration, scheduler: &mut S, surface: &mut R) -> bool
    where
        S: Scheduler,
        S::Event: From<Message>,
        R: Surface<ToastView>,
    {
        if !self
            .notification
            .transition(&[Phase::Entering, Phase::Visible], Phase::Exiting)
        {
            return false;
        }
        if let Some(token) = self.transition.take() {
            scheduler.cancel(token);
        }

        self.redraw(surface);
        let id = self.notification.id();
        self.transition = Some(scheduler.after(exit, Message::Detach(id).into()));
        true
    }
}

/// Owns the visible toast and its timers.
#[derive(Debug, Default)]
pub struct Manager {
    current: Option<Active>,
    next_id: u64,
    timings: Timings,
}

impl Manager {
    /// Creates a manager with the default timings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timings(timings: Timings) -> Self {
        Self {
            timings,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn timings(&self) -> Timings {
        self.timings
    }

    /// Shows a toast, replacing whichever toast is currently attached.
    ///
    /// The new toast is attached off-screen and slides in after the reveal
    /// delay. It starts leaving after the auto-dismiss delay unless it is
    /// dismissed or replaced first.
    pub fn notify<S, R>(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        scheduler: &mut S,
        surface: &mut R,
    ) -> NotificationId
    where
        S: Scheduler,
        S::Event: From<Message>,
        R: Surface<ToastView>,
    {
        self.discard_current(scheduler, surface);

        let id = NotificationId::from_raw(self.next_id);
        self.next_id += 1;

        let notification = Notification::new(id, severity, message.into(), scheduler.now());
        let element = surface.render(&ToastView::of(&notification));
        let transition = scheduler.after(self.timings.reveal, Message::Reveal(id).into());
        let auto_dismiss =
            scheduler.after(self.timings.auto_dismiss, Message::AutoDismiss(id).into());

        tracing::debug!(
            id = id.raw(),
            severity = severity.as_str(),
            "toast attached"
        );

        self.current = Some(Active {
            notification,
            element,
            auto_dismiss: Some(auto_dismiss),
            transition: Some(transition),
        });
        id
    }

    /// Starts the exit transition of a toast the user closed.
    ///
    /// Returns `true` if the toast was current and not already leaving.
    pub fn dismiss<S, R>(&mut self, id: NotificationId, scheduler: &mut S, surface: &mut R) -> bool
    where
        S: Scheduler,
        S::Event: From<Message>,
        R: Surface<ToastView>,
    {
        let exit = self.timings.exit;
        let Some(active) = self.live_mut(id) else {
            return false;
        };
        if !active.notification.phase().can_dismiss() {
            return false;
        }

        if let Some(token) = active.auto_dismiss.take() {
            scheduler.cancel(token);
        }
        let started = active.begin_exit(exit, scheduler, surface);
        if started {
            tracing::debug!(id = id.raw(), "toast dismissed");
        }
        started
    }

    /// Handles a notification message.
    pub fn handle_message<S, R>(&mut self, message: &Message, scheduler: &mut S, surface: &mut R)
    where
        S: Scheduler,
        S::Event: From<Message>,
        R: Surface<ToastView>,
    {
        match *message {
            Message::Dismiss(id) => {
                self.dismiss(id, scheduler, surface);
            }
            Message::Reveal(id) => self.reveal(id, surface),
            Message::AutoDismiss(id) => self.expire(id, scheduler, surface),
            Message::Detach(id) => self.detach(id, surface),
        }
    }

    /// Detaches the current toast immediately, cancelling its timers.
    pub fn clear<S, R>(&mut self, scheduler: &mut S, surface: &mut R)
    where
        S: Scheduler,
        R: Surface<ToastView>,
    {
        self.discard_current(scheduler, surface);
    }

    /// The toast currently attached to the surface, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref().map(|active| &active.notification)
    }

    /// Whether a toast is attached.
    #[must_use]
    pub fn is_showing(&self) -> bool {
        self.current.is_some()
    }

    /// Phase of any toast this manager issued.
    ///
    /// Returns `None` for ids this manager never issued.
    #[must_use]
    pub fn phase(&self, id: NotificationId) -> Option<Phase> {
        match &self.current {
            Some(active) if active.notification.id() == id => Some(active.notification.phase()),
            _ if id.raw() < self.next_id => Some(Phase::Removed),
            _ => None,
        }
    }

    fn live_mut(&mut self, id: NotificationId) -> Option<&mut Active> {
        self.current
            .as_mut()
            .filter(|active| active.notification.id() == id)
    }

    fn discard_current<S, R>(&mut self, scheduler: &mut S, surface: &mut R)
    where
        S: Scheduler,
        R: Surface<ToastView>,
    {
        if let Some(mut active) = self.current.take() {
            active.cancel_timers(scheduler);
            active.notification.transition(
                &[Phase::Entering, Phase::Visible, Phase::Exiting],
                Phase::Removed,
            );
            surface.remove(active.element);
            tracing::debug!(id = active.notification.id().raw(), "toast replaced");
        }
    }

    fn reveal<R: Surface<ToastView>>(&mut self, id: NotificationId, surface: &mut R) {
        let Some(active) = self.live_mut(id) else {
            tracing::trace!(id = id.raw(), "stale reveal ignored");
            return;
        };
        if active
            .notification
            .transition(&[Phase::Entering], Phase::Visible)
        {
            active.transition = None;
            active.redraw(surface);
        }
    }

    fn expire<S, R>(&mut self, id: NotificationId, scheduler: &mut S, surface: &mut R)
    where
        S: Scheduler,
        S::Event: From<Message>,
        R: Surface<ToastView>,
    {
        let exit = self.timings.exit;
        let Some(active) = self.live_mut(id) else {
            tracing::trace!(id = id.raw(), "stale auto-dismiss ignored");
            return;
        };
        active.auto_dismiss = None;
        if active.begin_exit(exit, scheduler, surface) {
            tracing::debug!(id = id.raw(), "toast expired");
        }
    }

    fn detach<R: Surface<ToastView>>(&mut self, id: NotificationId, surface: &mut R) {
        let exiting = self
            .current
            .as_ref()
            .is_some_and(|active| {
                active.notification.id() == id && active.notification.phase() == Phase::Exiting
            });
        if !exiting {
            tracing::trace!(id = id.raw(), "stale detach ignored");
            return;
        }

        if let Some(mut active) = self.current.take() {
            active.notification.transition(&[Phase::Exiting], Phase::Removed);
            surface.remove(active.element);
            tracing::debug!(id = id.raw(), "toast detached");
        }
    }
}
