// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::contact_form;
use crate::ui::konami;
use crate::ui::notifications;
use crate::ui::theming;
use crate::ui::typewriter;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Notification(notifications::NotificationMessage),
    Typewriter(typewriter::Message),
    Theme(theming::Message),
    Konami(konami::Message),
    ContactForm(contact_form::Message),
}

impl From<notifications::NotificationMessage> for Message {
    fn from(message: notifications::NotificationMessage) -> Self {
        Message::Notification(message)
    }
}

impl From<typewriter::Message> for Message {
    fn from(message: typewriter::Message) -> Self {
        Message::Typewriter(message)
    }
}

impl From<theming::Message> for Message {
    fn from(message: theming::Message) -> Self {
        Message::Theme(message)
    }
}

impl From<konami::Message> for Message {
    fn from(message: konami::Message) -> Self {
        Message::Konami(message)
    }
}

impl From<contact_form::Message> for Message {
    fn from(message: contact_form::Message) -> Self {
        Message::ContactForm(message)
    }
}

/// Runtime flags passed from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Drive timers from a virtual clock instead of tokio.
    pub simulate: bool,
    /// How long the demo runs, in seconds.
    pub seconds: Option<u64>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `FOLIO_FX_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional data directory override (for preferences and downloads).
    /// Takes precedence over `FOLIO_FX_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
}
