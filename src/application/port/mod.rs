// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines the capabilities the page components need from their
//! host. Infrastructure adapters implement them for tokio, the terminal and
//! the filesystem; tests use the deterministic virtual clock.
//!
//! # Available Ports
//!
//! - [`scheduler`]: Delayed event delivery with cancellation
//! - [`surface`]: Element rendering and text sinks
//! - [`preferences`]: Persisted key-value preferences
//! - [`submission`]: Contact form delivery
//!
//! # Design Notes
//!
//! - Timers deliver events, not closures, so every callback can be validated
//!   against the receiving component's current state
//! - Surfaces receive view models only

pub mod preferences;
pub mod scheduler;
pub mod submission;
pub mod surface;

pub use preferences::PreferenceStore;
pub use scheduler::{Scheduler, TimerToken};
pub use submission::{ContactMessage, FormSubmitter, SubmissionError};
pub use surface::{ElementId, Surface, TextSink};
