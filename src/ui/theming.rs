// SPDX-License-Identifier: MPL-2.0
//! Light/dark theme toggle persisted through a [`PreferenceStore`].

use crate::application::port::{PreferenceStore, Scheduler};
use crate::config::THEME_PRESS_FEEDBACK_MS;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Preference key holding the theme name.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Parses a stored theme name. Unknown values yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Icon on the toggle button: it shows the mode a click switches to.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            ThemeMode::Light => "moon",
            ThemeMode::Dark => "sun",
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// End of the press feedback started by the toggle with this sequence number.
    Release(u64),
}

/// Theme toggle button state.
#[derive(Debug, Clone, Default)]
pub struct ThemeToggle {
    mode: ThemeMode,
    pressed: bool,
    presses: u64,
}

impl ThemeToggle {
    /// Reads the saved theme, defaulting to light.
    #[must_use]
    pub fn load(store: &impl PreferenceStore) -> Self {
        let mode = store
            .get(THEME_KEY)
            .and_then(|raw| ThemeMode::parse(&raw))
            .unwrap_or_default();
        Self {
            mode,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Whether the button is showing press feedback.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Flips the theme and saves it.
    ///
    /// The new mode is applied even if saving fails; the error is returned
    /// so the caller can tell the user the choice will not survive a reload.
    pub fn toggle<S>(&mut self, store: &mut impl PreferenceStore, scheduler: &mut S) -> Result<ThemeMode>
    where
        S: Scheduler,
        S::Event: From<Message>,
    {
        self.mode = self.mode.toggled();
        self.pressed = true;
        self.presses += 1;
        scheduler.after(
            Duration::from_millis(THEME_PRESS_FEEDBACK_MS),
            Message::Release(self.presses).into(),
        );

        tracing::info!(theme = self.mode.as_str(), "theme toggled");
        store.set(THEME_KEY, self.mode.as_str())?;
        Ok(self.mode)
    }

    pub fn handle_message(&mut self, message: &Message) {
        let Message::Release(press) = *message;
        // Only the latest press releases the button.
        if press == self.presses {
            self.pressed = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{MemoryPreferences, VirtualScheduler};

    #[test]
    fn missing_preference_defaults_to_light() {
        let store = MemoryPreferences::new();
        assert_eq!(ThemeToggle::load(&store).mode(), ThemeMode::Light);
    }

    #[test]
    fn unknown_preference_defaults_to_light() {
        let mut store = MemoryPreferences::new();
        store.set(THEME_KEY, "sepia").unwrap();
        assert_eq!(ThemeToggle::load(&store).mode(), ThemeMode::Light);
    }

    #[test]
    fn toggle_persists_new_mode() {
        let mut store = MemoryPreferences::new();
        let mut scheduler = VirtualScheduler::<Message>::new();
        let mut toggle = ThemeToggle::load(&store);

        assert_eq!(toggle.toggle(&mut store, &mut scheduler).unwrap(), ThemeMode::Dark);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(ThemeToggle::load(&store).mode(), ThemeMode::Dark);

        assert_eq!(toggle.toggle(&mut store, &mut scheduler).unwrap(), ThemeMode::Light);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn press_feedback_releases_after_delay() {
        let mut store = MemoryPreferences::new();
        let mut scheduler = VirtualScheduler::<Message>::new();
        let mut toggle = ThemeToggle::default();

        toggle.toggle(&mut store, &mut scheduler).unwrap();
        assert!(toggle.is_pressed());

        let horizon = Duration::from_millis(THEME_PRESS_FEEDBACK_MS);
        while let Some(message) = scheduler.next_due(horizon) {
            toggle.handle_message(&message);
        }
        assert!(!toggle.is_pressed());
    }

    #[test]
    fn earlier_release_does_not_cut_later_press_short() {
        let mut store = MemoryPreferences::new();
        let mut scheduler = VirtualScheduler::<Message>::new();
        let mut toggle = ThemeToggle::default();

        toggle.toggle(&mut store, &mut scheduler).unwrap();
        scheduler.settle_at(Duration::from_millis(100));
        toggle.toggle(&mut store, &mut scheduler).unwrap();

        let first_release = Duration::from_millis(THEME_PRESS_FEEDBACK_MS);
        while let Some(message) = scheduler.next_due(first_release) {
            toggle.handle_message(&message);
        }
        assert!(toggle.is_pressed());
    }

    #[test]
    fn icons_point_at_the_other_mode() {
        assert_eq!(ThemeMode::Light.icon(), "moon");
        assert_eq!(ThemeMode::Dark.icon(), "sun");
        assert!(ThemeMode::Dark.is_dark());
    }
}
