// SPDX-License-Identifier: MPL-2.0
//! Konami code easter egg.
//!
//! Watches key presses for ↑ ↑ ↓ ↓ ← → ← → B A. A match turns on a
//! temporary "rainbow" mode for the page.

use crate::application::port::Scheduler;
use crate::config::EASTER_EGG_DURATION_MS;
use std::collections::VecDeque;
use std::time::Duration;

/// Key codes of the sequence, in order.
pub const SEQUENCE: [u32; 10] = [38, 38, 40, 40, 37, 39, 37, 39, 66, 65];

/// Toast text shown when the sequence is entered.
pub const UNLOCKED_MESSAGE: &str = "🎉 Konami Code activated! You found the easter egg!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Ends the rainbow mode started by activation number `n`.
    RainbowEnd(u64),
}

#[derive(Debug, Clone, Default)]
pub struct Konami {
    recent: VecDeque<u32>,
    activations: u64,
    rainbow: bool,
}

impl Konami {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a key press. Returns `true` when it completes the sequence.
    pub fn press<S>(&mut self, key_code: u32, scheduler: &mut S) -> bool
    where
        S: Scheduler,
        S::Event: From<Message>,
    {
        self.recent.push_back(key_code);
        if self.recent.len() > SEQUENCE.len() {
            self.recent.pop_front();
        }
        if !self.recent.iter().eq(SEQUENCE.iter()) {
            return false;
        }

        self.recent.clear();
        self.activations += 1;
        self.rainbow = true;
        scheduler.after(
            Duration::from_millis(EASTER_EGG_DURATION_MS),
            Message::RainbowEnd(self.activations).into(),
        );
        tracing::info!("konami code entered");
        true
    }

    pub fn handle_message(&mut self, message: &Message) {
        let Message::RainbowEnd(activation) = *message;
        if activation == self.activations {
            self.rainbow = false;
        }
    }

    #[must_use]
    pub fn is_rainbow(&self) -> bool {
        self.rainbow
    }
}
