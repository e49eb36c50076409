// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`virtual_clock`]: deterministic [`Scheduler`] for tests and simulation
//! - [`tokio_scheduler`]: wall-clock [`Scheduler`] on tokio timers
//! - [`memory_surface`]: retained in-memory [`Surface`]
//! - [`terminal`]: stdout [`Surface`] and [`TextSink`] for the demo binary
//! - [`preferences`]: TOML-file and in-memory [`PreferenceStore`]
//! - [`submitter`]: simulated [`FormSubmitter`]
//!
//! [`Scheduler`]: crate::application::port::Scheduler
//! [`Surface`]: crate::application::port::Surface
//! [`TextSink`]: crate::application::port::TextSink
//! [`PreferenceStore`]: crate::application::port::PreferenceStore
//! [`FormSubmitter`]: crate::application::port::FormSubmitter

pub mod memory_surface;
pub mod preferences;
pub mod submitter;
pub mod terminal;
pub mod tokio_scheduler;
pub mod virtual_clock;

pub use memory_surface::{MemorySurface, SurfaceOp};
pub use preferences::{FilePreferences, MemoryPreferences};
pub use submitter::SimulatedSubmitter;
pub use terminal::{TerminalLine, TerminalSurface};
pub use tokio_scheduler::TokioScheduler;
pub use virtual_clock::VirtualScheduler;
