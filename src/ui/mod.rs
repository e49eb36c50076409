// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! owns its state, schedules its own timer messages, and applies them in
//! `handle_message`. Nothing here draws; rendering goes through the
//! surface and sink ports.
//!
//! # Components
//!
//! - [`analytics`] - Click classification and tracking
//! - [`notifications`] - Toast notification system for user feedback
//! - [`typewriter`] - Cycling typed/erased hero title
//! - [`theming`] - Light/Dark theme toggle
//! - [`navigation`] - Mobile menu, scrolled navbar and section highlighting
//! - [`contact_form`] - Contact form submit button
//! - [`konami`] - Konami code easter egg
//! - [`resume`] - Resume download

pub mod analytics;
pub mod contact_form;
pub mod konami;
pub mod navigation;
pub mod notifications;
pub mod resume;
pub mod theming;
pub mod typewriter;
