// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page components.
//!
//! The `App` struct wires together the page components and turns their
//! outcomes into toasts. Scroll offsets and clicks reported by the host also
//! come through here, for the navbar and click tracking.
//! Every timer event comes back through [`App::update`], which routes it to
//! the component that scheduled it.

mod message;
pub mod paths;

pub use message::{Flags, Message};

use crate::application::port::{ContactMessage, PreferenceStore, Scheduler, Surface, TextSink};
use crate::config::Config;
use crate::ui::analytics::{self, ClickTarget};
use crate::ui::contact_form::{self, ContactForm};
use crate::ui::konami::{self, Konami};
use crate::ui::navigation::{NavMenu, ScrollState, Section};
use crate::ui::notifications::{self, NotificationId, Severity, ToastView};
use crate::ui::resume::{self, ResumeSource};
use crate::ui::theming::ThemeToggle;
use crate::ui::typewriter::{RunHandle, Typewriter};
use std::fmt;
use std::path::{Path, PathBuf};

/// Root page state.
pub struct App<T, P> {
    config: Config,
    notifications: notifications::Manager,
    typewriter: Typewriter<T>,
    typewriter_run: Option<RunHandle>,
    theme: ThemeToggle,
    preferences: P,
    konami: Konami,
    contact: ContactForm,
    nav_menu: NavMenu,
    scroll: ScrollState,
}

impl<T, P> fmt::Debug for App<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme", &self.theme.mode())
            .field("toast", &self.notifications.current().map(|n| n.id()))
            .field("typewriter_run", &self.typewriter_run)
            .field("contact", &self.contact.phase())
            .field("nav_menu_open", &self.nav_menu.is_open())
            .finish_non_exhaustive()
    }
}

impl<T: TextSink, P: PreferenceStore> App<T, P> {
    /// Builds the page state from loaded configuration and preferences.
    pub fn new(config: Config, preferences: P, sink: T) -> Self {
        let typewriter = Typewriter::with_timings(
            config.typewriter.phrases(),
            sink,
            config.typewriter.timings(),
        );
        Self {
            notifications: notifications::Manager::with_timings(config.toast.timings()),
            typewriter,
            typewriter_run: None,
            theme: ThemeToggle::load(&preferences),
            preferences,
            konami: Konami::new(),
            contact: ContactForm::new(),
            nav_menu: NavMenu::new(),
            scroll: ScrollState::at(&[], 0.0),
            config,
        }
    }

    /// Starts the page's timers and reports startup warnings.
    ///
    /// Only one toast is visible at a time, so the last warning wins.
    pub fn boot<S, R>(&mut self, warnings: &[String], scheduler: &mut S, surface: &mut R)
    where
        S: Scheduler<Event = Message>,
        R: Surface<ToastView>,
    {
        self.typewriter_run = self.typewriter.start(scheduler);
        for key in warnings {
            self.notifications
                .notify(warning_text(key), Severity::Error, scheduler, surface);
        }
    }

    /// Applies a scheduled or externally produced message.
    pub fn update<S, R>(&mut self, message: Message, scheduler: &mut S, surface: &mut R)
    where
        S: Scheduler<Event = Message>,
        R: Surface<ToastView>,
    {
        match message {
            Message::Notification(msg) => {
                self.notifications.handle_message(&msg, scheduler, surface);
            }
            Message::Typewriter(msg) => self.typewriter.handle_message(&msg, scheduler),
            Message::Theme(msg) => self.theme.handle_message(&msg),
            Message::Konami(msg) => self.konami.handle_message(&msg),
            Message::ContactForm(contact_form::Message::Completed(result)) => {
                if let Some((text, severity)) = self.contact.complete(&result, scheduler) {
                    self.notifications.notify(text, severity, scheduler, surface);
                }
            }
            Message::ContactForm(contact_form::Message::ResetButton(completion)) => {
                self.contact.handle_reset(completion);
            }
        }
    }

    /// Shows a toast. Returns its id so the host can offer a close control.
    pub fn notify<S, R>(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        scheduler: &mut S,
        surface: &mut R,
    ) -> NotificationId
    where
        S: Scheduler<Event = Message>,
        R: Surface<ToastView>,
    {
        self.notifications.notify(message, severity, scheduler, surface)
    }

    /// The visitor clicked a toast's close control.
    pub fn dismiss_toast<S, R>(&mut self, id: NotificationId, scheduler: &mut S, surface: &mut R)
    where
        S: Scheduler<Event = Message>,
        R: Surface<ToastView>,
    {
        self.notifications.dismiss(id, scheduler, surface);
    }

    /// Feeds a key press to the easter egg detector.
    pub fn key_pressed<S, R>(&mut self, key_code: u32, scheduler: &mut S, surface: &mut R)
    where
        S: Scheduler<Event = Message>,
        R: Surface<ToastView>,
    {
        if self.konami.press(key_code, scheduler) {
            self.notifications
                .notify(konami::UNLOCKED_MESSAGE, Severity::Success, scheduler, surface);
        }
    }

    /// Flips the theme. A failed save is reported but the new theme stays.
    pub fn toggle_theme<S, R>(&mut self, scheduler: &mut S, surface: &mut R)
    where
        S: Scheduler<Event = Message>,
        R: Surface<ToastView>,
    {
        if let Err(err) = self.theme.toggle(&mut self.preferences, scheduler) {
            tracing::warn!(error = %err, "theme preference not saved");
            self.notifications.notify(
                "Theme preference could not be saved.",
                Severity::Error,
                scheduler,
                surface,
            );
        }
    }

    /// Starts a contact form submission.
    ///
    /// Returns the payload for the host to hand to its
    /// [`FormSubmitter`](crate::application::port::FormSubmitter); the result
    /// must come back as [`contact_form::Message::Completed`].
    pub fn submit_contact(&mut self) -> Option<ContactMessage> {
        self.contact.begin_submit()
    }

    /// Saves the resume into `download_dir` and reports the outcome as a toast.
    pub fn download_resume<S, R>(
        &mut self,
        asset_dir: &Path,
        download_dir: &Path,
        scheduler: &mut S,
        surface: &mut R,
    ) -> Option<PathBuf>
    where
        S: Scheduler<Event = Message>,
        R: Surface<ToastView>,
    {
        let source = ResumeSource::resolve(asset_dir);
        match resume::download(&source, download_dir, &self.config.profile) {
            Ok(path) => {
                self.notifications
                    .notify(source.success_message(), Severity::Success, scheduler, surface);
                Some(path)
            }
            Err(err) => {
                tracing::warn!(error = %err, "resume download failed");
                self.notifications
                    .notify(resume::FAILED_MESSAGE, Severity::Error, scheduler, surface);
                None
            }
        }
    }

    /// The mobile menu control was clicked. Returns whether the menu is open.
    pub fn toggle_nav_menu(&mut self) -> bool {
        self.nav_menu.toggle()
    }

    /// A click anywhere on the page.
    ///
    /// Nav links and clicks outside the navbar close the mobile menu.
    /// Returns the tracked event, if the target is one worth tracking.
    pub fn clicked(
        &mut self,
        target: &ClickTarget,
        inside_navbar: bool,
    ) -> Option<analytics::Event> {
        if target.is_nav_link() {
            self.nav_menu.link_clicked();
        } else {
            self.nav_menu.clicked_outside(inside_navbar);
        }
        analytics::track(target)
    }

    /// The page scrolled to `scroll_y`.
    pub fn scrolled(&mut self, sections: &[Section], scroll_y: f64) -> &ScrollState {
        let state = ScrollState::at(sections, scroll_y);
        if state.active_section != self.scroll.active_section {
            tracing::debug!(section = ?state.active_section, "active section changed");
        }
        self.scroll = state;
        &self.scroll
    }

    /// Stops the typewriter, leaving its text as it is.
    pub fn stop_typewriter<S: Scheduler<Event = Message>>(&mut self, scheduler: &mut S) -> bool {
        match self.typewriter_run.take() {
            Some(handle) => self.typewriter.stop(handle, scheduler),
            None => false,
        }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    #[must_use]
    pub fn typewriter(&self) -> &Typewriter<T> {
        &self.typewriter
    }

    #[must_use]
    pub fn theme(&self) -> &ThemeToggle {
        &self.theme
    }

    #[must_use]
    pub fn preferences(&self) -> &P {
        &self.preferences
    }

    #[must_use]
    pub fn konami(&self) -> &Konami {
        &self.konami
    }

    #[must_use]
    pub fn contact_form(&self) -> &ContactForm {
        &self.contact
    }

    pub fn contact_form_mut(&mut self) -> &mut ContactForm {
        &mut self.contact
    }

    #[must_use]
    pub fn nav_menu(&self) -> &NavMenu {
        &self.nav_menu
    }

    #[must_use]
    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }
}

/// Human-readable text for a startup warning key.
fn warning_text(key: &str) -> String {
    match key {
        "notification-config-load-error" => {
            "Settings could not be read. Defaults are in use.".to_string()
        }
        "notification-preferences-load-error" => {
            "Saved preferences could not be read and were reset.".to_string()
        }
        other => other.to_string(),
    }
}
