// SPDX-License-Identifier: MPL-2.0
//! `folio_fx` drives the interactive parts of a personal portfolio page.
//!
//! It provides toast notifications and a cycling typewriter title, plus a
//! theme toggle, navigation highlighting, a contact form, a resume download
//! and an easter egg. Components are timer-driven state machines behind
//! scheduler and surface ports, so the same logic runs under a tokio
//! runtime or a deterministic virtual clock.

#![doc(html_root_url = "https://docs.rs/folio_fx/0.3.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod ui;
