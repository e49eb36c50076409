// SPDX-License-Identifier: MPL-2.0
//! Rendering ports.
//!
//! The core hands view models to these traits and never touches styles or
//! markup itself.

/// Handle to an element attached to a [`Surface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(u64);

impl ElementId {
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// A place where elements described by `C` can be attached, redrawn and detached.
pub trait Surface<C> {
    /// Attaches a new element and returns its handle.
    fn render(&mut self, content: &C) -> ElementId;

    /// Redraws an attached element. Unknown handles are ignored.
    fn update(&mut self, element: ElementId, content: &C);

    /// Detaches an element. Unknown handles are ignored.
    fn remove(&mut self, element: ElementId);
}

/// A single mutable text slot, such as the hero subtitle.
pub trait TextSink {
    fn write(&mut self, text: &str);
}

impl TextSink for String {
    fn write(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}
