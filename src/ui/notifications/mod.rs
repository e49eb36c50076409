// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Toasts are short status messages sliding in from the edge of the page.
//! Exactly one toast is shown at a time: a new toast replaces the current
//! one immediately.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct, `Phase` and `Severity`
//! - [`manager`] - `Manager` for lifecycle and timer management
//! - [`toast`] - `ToastView` handed to the rendering surface
//!
//! # Usage
//!
//! ```
//! use folio_fx::infrastructure::{MemorySurface, VirtualScheduler};
//! use folio_fx::ui::notifications::{Manager, NotificationMessage, Phase, Severity};
//! use std::time::Duration;
//!
//! let mut manager = Manager::new();
//! let mut scheduler = VirtualScheduler::<NotificationMessage>::new();
//! let mut surface = MemorySurface::new();
//!
//! let id = manager.notify("Saved", Severity::Success, &mut scheduler, &mut surface);
//!
//! let horizon = Duration::from_millis(100);
//! while let Some(message) = scheduler.next_due(horizon) {
//!     manager.handle_message(&message, &mut scheduler, &mut surface);
//! }
//! assert_eq!(manager.phase(id), Some(Phase::Visible));
//! ```
//!
//! # Timing
//!
//! - Reveal: 100 ms after attaching
//! - Auto-dismiss: 5 s after creation
//! - Exit transition: 300 ms, then the element is detached

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, Timings};
pub use notification::{Notification, NotificationId, Phase, Severity};
pub use toast::{Placement, ToastView};
