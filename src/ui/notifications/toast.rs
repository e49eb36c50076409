// SPDX-License-Identifier: MPL-2.0
//! View model handed to the rendering surface for a single toast.
//!
//! The surface decides what "off-screen" looks like. On the page the card
//! slides in from the right edge.

use super::notification::{Notification, NotificationId, Phase, Severity};

/// Where the toast card sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Attached but translated out of view.
    Offscreen,
    /// Fully in view.
    Onscreen,
}

/// Everything a surface needs to draw a toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastView {
    /// Sent back with a dismiss click.
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    pub icon: &'static str,
    pub accent: &'static str,
    pub placement: Placement,
    /// Whether the close button accepts clicks.
    pub dismissible: bool,
}

impl ToastView {
    /// Builds the view for a notification in its current phase.
    #[must_use]
    pub fn of(notification: &Notification) -> Self {
        let severity = notification.severity();
        let phase = notification.phase();

        Self {
            id: notification.id(),
            message: notification.message().to_string(),
            severity,
            icon: severity.icon(),
            accent: severity.accent(),
            placement: if phase == Phase::Visible {
                Placement::Onscreen
            } else {
                Placement::Offscreen
            },
            dismissible: phase.can_dismiss(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn entering_toast_is_offscreen_and_dismissible() {
        let notification = Notification::new(
            NotificationId::from_raw(1),
            Severity::Error,
            "boom".to_string(),
            Instant::now(),
        );
        let view = ToastView::of(&notification);

        assert_eq!(view.placement, Placement::Offscreen);
        assert!(view.dismissible);
        assert_eq!(view.icon, "exclamation-circle");
        assert_eq!(view.accent, Severity::Error.accent());
    }

    #[test]
    fn visible_toast_is_onscreen() {
        let mut notification = Notification::new(
            NotificationId::from_raw(2),
            Severity::Info,
            "hello".to_string(),
            Instant::now(),
        );
        notification.transition(&[Phase::Entering], Phase::Visible);
        assert_eq!(ToastView::of(&notification).placement, Placement::Onscreen);

        notification.transition(&[Phase::Visible], Phase::Exiting);
        let view = ToastView::of(&notification);
        assert_eq!(view.placement, Placement::Offscreen);
        assert!(!view.dismissible);
    }
}
