// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct, its lifecycle `Phase`,
//! and the `Severity` enum used throughout the notification system.

use std::time::{Duration, Instant};

/// Unique identifier for a notification.
///
/// Issued by the [`Manager`](super::Manager) in strictly increasing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    pub(super) const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub(super) const fn raw(self) -> u64 {
        self.0
    }
}

/// Severity level determines the icon and accent of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Neutral information (blue).
    #[default]
    Info,
    /// Operation completed successfully (green).
    Success,
    /// Operation failed (red).
    Error,
}

impl Severity {
    /// Parses a severity name, falling back to [`Severity::Info`] for
    /// anything unrecognized.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "success" => Severity::Success,
            "error" => Severity::Error,
            _ => Severity::Info,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }

    /// Icon shown next to the message.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Severity::Info => "info-circle",
            Severity::Success => "check-circle",
            Severity::Error => "exclamation-circle",
        }
    }

    /// Accent color of the toast border.
    #[must_use]
    pub fn accent(self) -> &'static str {
        match self {
            Severity::Info => "#3b82f6",
            Severity::Success => "#10b981",
            Severity::Error => "#ef4444",
        }
    }
}

/// Lifecycle of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Attached off-screen, waiting to slide in.
    Entering,
    /// On screen.
    Visible,
    /// Sliding out; detached once the exit transition ends.
    Exiting,
    /// Detached from the surface. Terminal.
    Removed,
}

impl Phase {
    /// Whether the toast is still attached to the surface.
    #[must_use]
    pub fn is_live(self) -> bool {
        !matches!(self, Phase::Removed)
    }

    /// Whether the toast may still start leaving.
    #[must_use]
    pub fn can_dismiss(self) -> bool {
        matches!(self, Phase::Entering | Phase::Visible)
    }
}

/// A message to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message: String,
    created_at: Instant,
    phase: Phase,
}

impl Notification {
    pub(super) fn new(
        id: NotificationId,
        severity: Severity,
        message: String,
        created_at: Instant,
    ) -> Self {
        Self {
            id,
            severity,
            message,
            created_at,
            phase: Phase::Entering,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Age of this notification relative to `now`.
    #[must_use]
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    /// Moves to `next` only if the notification is currently in `expected`.
    ///
    /// Returns whether the transition happened.
    pub(super) fn transition(&mut self, expected: &[Phase], next: Phase) -> bool {
        if expected.contains(&self.phase) {
            self.phase = next;
            true
        } else {
            false
        }
    }
}
