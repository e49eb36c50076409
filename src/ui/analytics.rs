// SPDX-License-Identifier: MPL-2.0
//! Click tracking.
//!
//! Page clicks are classified into a (category, action, label) triple and
//! recorded as structured `tracing` events under the `analytics` target.
//! Clicks on anything else are not tracked.

/// The element a visitor clicked, as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    /// A navbar link, with its visible text.
    NavLink(String),
    /// A primary call-to-action button, with its visible text.
    PrimaryButton(String),
    /// A social profile link, with its accessible label if it has one.
    Social(Option<String>),
    ProjectLink,
    /// Anything else on the page.
    Other,
}

impl ClickTarget {
    #[must_use]
    pub fn is_nav_link(&self) -> bool {
        matches!(self, ClickTarget::NavLink(_))
    }
}

/// One tracked interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub category: &'static str,
    pub action: &'static str,
    pub label: String,
}

const CLICK: &str = "Click";

#[must_use]
pub fn classify(target: &ClickTarget) -> Option<Event> {
    let (category, label) = match target {
        ClickTarget::NavLink(text) => ("Navigation", text.clone()),
        ClickTarget::PrimaryButton(text) => ("CTA", text.clone()),
        ClickTarget::Social(label) => (
            "Social",
            label.clone().unwrap_or_else(|| "Social Link".to_string()),
        ),
        ClickTarget::ProjectLink => ("Project", "Project Link".to_string()),
        ClickTarget::Other => return None,
    };
    Some(Event {
        category,
        action: CLICK,
        label,
    })
}

/// Classifies and records a click. Returns the recorded event, if any.
pub fn track(target: &ClickTarget) -> Option<Event> {
    let event = classify(target)?;
    tracing::info!(
        target: "analytics",
        category = event.category,
        action = event.action,
        label = %event.label,
        "interaction"
    );
    Some(event)
}
