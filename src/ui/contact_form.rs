// SPDX-License-Identifier: MPL-2.0
//! Contact form submit button and payload handling.
//!
//! The form itself only tracks its fields and the submit button phase.
//! Delivery happens through a [`FormSubmitter`](crate::application::port::FormSubmitter)
//! driven by the host; its outcome comes back as [`Message::Completed`].

use crate::application::port::{ContactMessage, Scheduler, SubmissionError};
use crate::config::CONTACT_BUTTON_RESET_MS;
use crate::ui::notifications::Severity;
use std::time::Duration;

pub const SENT_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
pub const FAILED_MESSAGE: &str = "Failed to send message. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed,
}

impl SubmitPhase {
    /// Submit button caption for this phase.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SubmitPhase::Idle => "Send Message",
            SubmitPhase::Sending => "Sending...",
            SubmitPhase::Sent => "Message Sent!",
            SubmitPhase::Failed => "Failed to Send",
        }
    }

    /// Whether the submit button accepts clicks.
    #[must_use]
    pub fn is_enabled(self) -> bool {
        self == SubmitPhase::Idle
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Completed(Result<(), SubmissionError>),
    /// Returns the button to idle after the completion with this sequence number.
    ResetButton(u64),
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    fields: ContactMessage,
    phase: SubmitPhase,
    completions: u64,
}

impl ContactForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn fields(&self) -> &ContactMessage {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut ContactMessage {
        &mut self.fields
    }

    #[must_use]
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Moves to `Sending` and returns the payload to deliver.
    ///
    /// Returns `None` while the button is disabled.
    pub fn begin_submit(&mut self) -> Option<ContactMessage> {
        if !self.phase.is_enabled() {
            return None;
        }
        self.phase = SubmitPhase::Sending;
        tracing::debug!("contact form submitting");
        Some(self.fields.clone())
    }

    /// Applies a delivery outcome.
    ///
    /// Returns the toast text and severity to show, or `None` if no
    /// submission was in flight.
    pub fn complete<S>(
        &mut self,
        result: &Result<(), SubmissionError>,
        scheduler: &mut S,
    ) -> Option<(&'static str, Severity)>
    where
        S: Scheduler,
        S::Event: From<Message>,
    {
        if self.phase != SubmitPhase::Sending {
            return None;
        }

        let outcome = match result {
            Ok(()) => {
                self.phase = SubmitPhase::Sent;
                self.fields = ContactMessage::default();
                (SENT_MESSAGE, Severity::Success)
            }
            Err(err) => {
                tracing::warn!(error = %err, "contact form submission failed");
                self.phase = SubmitPhase::Failed;
                (FAILED_MESSAGE, Severity::Error)
            }
        };

        self.completions += 1;
        scheduler.after(
            Duration::from_millis(CONTACT_BUTTON_RESET_MS),
            Message::ResetButton(self.completions).into(),
        );
        Some(outcome)
    }

    /// Handles the button reset. `Completed` is applied through
    /// [`complete`](Self::complete) because it needs a scheduler.
    pub fn handle_reset(&mut self, completion: u64) {
        if completion == self.completions
            && matches!(self.phase, SubmitPhase::Sent | SubmitPhase::Failed)
        {
            self.phase = SubmitPhase::Idle;
        }
    }
}
