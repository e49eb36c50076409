// SPDX-License-Identifier: MPL-2.0
//! Retained in-memory surface.
//!
//! Keeps the latest content of every attached element plus a log of the
//! operations applied, which makes it the surface of choice for headless
//! hosts and tests.

use crate::application::port::{ElementId, Surface};
use std::collections::BTreeMap;

/// One call made against the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceOp {
    Render(ElementId),
    Update(ElementId),
    Remove(ElementId),
}

#[derive(Debug, Clone)]
pub struct MemorySurface<C> {
    elements: BTreeMap<u64, C>,
    next_element: u64,
    ops: Vec<SurfaceOp>,
}

impl<C> Default for MemorySurface<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> MemorySurface<C> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: BTreeMap::new(),
            next_element: 0,
            ops: Vec::new(),
        }
    }

    /// Number of attached elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[must_use]
    pub fn get(&self, element: ElementId) -> Option<&C> {
        self.elements.get(&element.raw())
    }

    /// Attached elements in attach order.
    pub fn elements(&self) -> impl Iterator<Item = (ElementId, &C)> {
        self.elements
            .iter()
            .map(|(raw, content)| (ElementId::from_raw(*raw), content))
    }

    /// Every operation applied so far, oldest first.
    #[must_use]
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }
}

impl<C: Clone> Surface<C> for MemorySurface<C> {
    fn render(&mut self, content: &C) -> ElementId {
        let element = ElementId::from_raw(self.next_element);
        self.next_element += 1;
        self.elements.insert(element.raw(), content.clone());
        self.ops.push(SurfaceOp::Render(element));
        element
    }

    fn update(&mut self, element: ElementId, content: &C) {
        if let Some(slot) = self.elements.get_mut(&element.raw()) {
            *slot = content.clone();
            self.ops.push(SurfaceOp::Update(element));
        }
    }

    fn remove(&mut self, element: ElementId) {
        if self.elements.remove(&element.raw()).is_some() {
            self.ops.push(SurfaceOp::Remove(element));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_update_remove_cycle() {
        let mut surface = MemorySurface::new();
        let element = surface.render(&"a".to_string());
        surface.update(element, &"b".to_string());
        assert_eq!(surface.get(element).map(String::as_str), Some("b"));

        surface.remove(element);
        assert!(surface.is_empty());
        assert_eq!(
            surface.ops(),
            &[
                SurfaceOp::Render(element),
                SurfaceOp::Update(element),
                SurfaceOp::Remove(element)
            ]
        );
    }

    #[test]
    fn unknown_handles_are_ignored() {
        let mut surface: MemorySurface<u8> = MemorySurface::new();
        surface.update(ElementId::from_raw(9), &1);
        surface.remove(ElementId::from_raw(9));
        assert!(surface.ops().is_empty());
    }
}
