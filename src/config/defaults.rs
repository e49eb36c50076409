// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Toast**: Reveal, auto-dismiss and exit transition delays
//! - **Typewriter**: Per-character and pause delays of the headline effect
//! - **Feedback**: Short-lived control feedback (theme button, contact button, easter egg)

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Delay between attaching a toast off-screen and sliding it in.
pub const DEFAULT_TOAST_REVEAL_MS: u64 = 100;

/// Time from creation until a toast starts leaving on its own.
pub const DEFAULT_TOAST_AUTO_DISMISS_MS: u64 = 5000;

/// Length of the exit transition before the element is detached.
pub const DEFAULT_TOAST_EXIT_MS: u64 = 300;

/// Lower bound for any toast delay.
pub const MIN_TOAST_DELAY_MS: u64 = 0;

/// Upper bound for the auto-dismiss delay.
pub const MAX_TOAST_AUTO_DISMISS_MS: u64 = 60_000;

/// Upper bound for the reveal and exit transitions.
pub const MAX_TOAST_TRANSITION_MS: u64 = 5000;

// ==========================================================================
// Typewriter Defaults
// ==========================================================================

/// Delay before the first character is typed.
pub const DEFAULT_TYPEWRITER_START_DELAY_MS: u64 = 1000;

/// Delay between typed characters.
pub const DEFAULT_TYPEWRITER_TYPE_MS: u64 = 100;

/// Pause once a phrase is fully typed.
pub const DEFAULT_TYPEWRITER_HOLD_MS: u64 = 2000;

/// Delay between erased characters.
pub const DEFAULT_TYPEWRITER_ERASE_MS: u64 = 50;

/// Pause once a phrase is fully erased, before typing the next one.
pub const DEFAULT_TYPEWRITER_NEXT_PHRASE_MS: u64 = 500;

/// Smallest delay a typewriter step may use.
pub const MIN_TYPEWRITER_STEP_MS: u64 = 1;

/// Largest delay a typewriter step may use.
pub const MAX_TYPEWRITER_STEP_MS: u64 = 30_000;

/// Headline phrases cycled by the typewriter.
pub const DEFAULT_TYPEWRITER_PHRASES: [&str; 5] = [
    "Solutions Architect & AI Engineer",
    "Cloud Solutions Specialist",
    "AI/ML Engineering Enthusiast",
    "Full-Stack Developer",
    "AWS Certified Professional",
];

// ==========================================================================
// Feedback Defaults
// ==========================================================================

/// How long the theme button stays pressed after a click.
pub const THEME_PRESS_FEEDBACK_MS: u64 = 150;

/// How long the contact button shows the submission outcome.
pub const CONTACT_BUTTON_RESET_MS: u64 = 3000;

/// How long the logo animates after the easter egg fires.
pub const EASTER_EGG_DURATION_MS: u64 = 10_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_TOAST_AUTO_DISMISS_MS <= MAX_TOAST_AUTO_DISMISS_MS);
    assert!(DEFAULT_TOAST_REVEAL_MS <= MAX_TOAST_TRANSITION_MS);
    assert!(DEFAULT_TOAST_EXIT_MS <= MAX_TOAST_TRANSITION_MS);
    assert!(DEFAULT_TOAST_REVEAL_MS < DEFAULT_TOAST_AUTO_DISMISS_MS);

    assert!(MIN_TYPEWRITER_STEP_MS > 0);
    assert!(DEFAULT_TYPEWRITER_TYPE_MS >= MIN_TYPEWRITER_STEP_MS);
    assert!(DEFAULT_TYPEWRITER_ERASE_MS >= MIN_TYPEWRITER_STEP_MS);
    assert!(DEFAULT_TYPEWRITER_HOLD_MS <= MAX_TYPEWRITER_STEP_MS);
    assert!(DEFAULT_TYPEWRITER_START_DELAY_MS <= MAX_TYPEWRITER_STEP_MS);
    assert!(DEFAULT_TYPEWRITER_NEXT_PHRASE_MS <= MAX_TYPEWRITER_STEP_MS);
};
