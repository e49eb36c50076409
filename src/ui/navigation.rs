// SPDX-License-Identifier: MPL-2.0
//! Navigation state: the mobile menu, which section link is active, whether
//! the navbar is in its compact "scrolled" style, and where a link click
//! should scroll to.
//!
//! The host reports scroll offsets and clicks through `App`, which keeps a
//! [`NavMenu`] and the latest [`ScrollState`]. The free functions are also
//! usable on their own.

/// Scroll offset past which the navbar switches to its scrolled style.
const NAVBAR_SCROLLED_AFTER: f64 = 100.0;

/// How far below the viewport top a section counts as "being read".
const ACTIVE_SECTION_PROBE: f64 = 200.0;

/// Height of the fixed navbar, kept clear when scrolling to a section.
const NAVBAR_HEIGHT: f64 = 80.0;

/// Scroll offset past which the hero scroll indicator fades out.
const SCROLL_INDICATOR_HIDE_AFTER: f64 = 200.0;

/// A page section with its vertical extent in document coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

#[must_use]
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLLED_AFTER
}

/// Id of the section whose link should be highlighted.
///
/// Later sections win when extents overlap.
#[must_use]
pub fn active_section(sections: &[Section], scroll_y: f64) -> Option<&str> {
    let probe = scroll_y + ACTIVE_SECTION_PROBE;
    sections
        .iter()
        .rev()
        .find(|section| section.contains(probe))
        .map(|section| section.id.as_str())
}

/// Scroll offset that brings `section` just below the navbar.
#[must_use]
pub fn scroll_target(section: &Section) -> f64 {
    (section.top - NAVBAR_HEIGHT).max(0.0)
}

#[must_use]
pub fn scroll_indicator_visible(scroll_y: f64) -> bool {
    scroll_y <= SCROLL_INDICATOR_HIDE_AFTER
}

/// Navbar appearance derived from one scroll offset.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScrollState {
    pub scrolled: bool,
    pub active_section: Option<String>,
    pub indicator_visible: bool,
}

impl ScrollState {
    #[must_use]
    pub fn at(sections: &[Section], scroll_y: f64) -> Self {
        Self {
            scrolled: is_scrolled(scroll_y),
            active_section: active_section(sections, scroll_y).map(str::to_string),
            indicator_visible: scroll_indicator_visible(scroll_y),
        }
    }
}

/// Collapsible menu shown on narrow screens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The hamburger control was clicked. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Following a link always closes the menu.
    pub fn link_clicked(&mut self) {
        self.open = false;
    }

    /// Any click on the page; only clicks outside the navbar close the menu.
    pub fn clicked_outside(&mut self, inside_navbar: bool) {
        if !inside_navbar {
            self.open = false;
        }
    }
}
