//! Rendering capability consumed by menu items.
//!
//! The state machine never touches host elements. Reading the disabled marker,
//! toggling the selected class and synthesizing clicks all go through the
//! [`Renderer`] trait, which the host implements for its element model.

use crate::domain::ElementId;
use std::collections::{BTreeSet, HashMap};

/// Marker the host puts on an element to disable its item.
pub const DISABLED_MARKER: &str = "disabled";

/// Host capability to inspect and mutate the elements backing items.
pub trait Renderer {
    /// Returns `true` if `element` currently carries the `marker` class.
    fn has_marker(&self, element: ElementId, marker: &str) -> bool;

    /// Adds (`present == true`) or removes `class` on `element`.
    fn set_class(&mut self, element: ElementId, class: &str, present: bool);

    /// Fires a primary activation on `element`, as if the user clicked it.
    fn synthesize_click(&mut self, element: ElementId);
}

/// In-memory element store implementing [`Renderer`].
///
/// Keeps a class set per element and queues synthesized clicks until the host
/// drains them with [`MemoryRenderer::take_clicks`]. The plugin host renders
/// from this store; tests use it to observe what the state machine did.
#[derive(Debug, Clone, Default)]
pub struct MemoryRenderer {
    classes: HashMap<ElementId, BTreeSet<String>>,
    clicks: Vec<ElementId>,
}

impl MemoryRenderer {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `element` currently has `class`.
    #[must_use]
    pub fn has_class(&self, element: ElementId, class: &str) -> bool {
        self.classes
            .get(&element)
            .is_some_and(|set| set.contains(class))
    }

    /// Marks `element` as disabled or enabled.
    pub fn set_disabled(&mut self, element: ElementId, disabled: bool) {
        self.set_class(element, DISABLED_MARKER, disabled);
    }

    /// Drains the clicks synthesized since the last call, oldest first.
    pub fn take_clicks(&mut self) -> Vec<ElementId> {
        std::mem::take(&mut self.clicks)
    }

    /// Clicks synthesized and not yet drained.
    #[must_use]
    pub fn pending_clicks(&self) -> &[ElementId] {
        &self.clicks
    }
}

impl Renderer for MemoryRenderer {
    fn has_marker(&self, element: ElementId, marker: &str) -> bool {
        self.has_class(element, marker)
    }

    fn set_class(&mut self, element: ElementId, class: &str, present: bool) {
        if present {
            self.classes
                .entry(element)
                .or_default()
                .insert(class.to_string());
        } else if let Some(set) = self.classes.get_mut(&element) {
            set.remove(class);
        }
    }

    fn synthesize_click(&mut self, element: ElementId) {
        self.clicks.push(element);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_classes_per_element() {
        let mut r = MemoryRenderer::new();
        r.set_class(ElementId(1), "selected", true);
        assert!(r.has_class(ElementId(1), "selected"));
        assert!(!r.has_class(ElementId(2), "selected"));

        r.set_class(ElementId(1), "selected", false);
        assert!(!r.has_class(ElementId(1), "selected"));
    }

    #[test]
    fn disabled_marker_is_a_class() {
        let mut r = MemoryRenderer::new();
        r.set_disabled(ElementId(3), true);
        assert!(r.has_marker(ElementId(3), DISABLED_MARKER));
        r.set_disabled(ElementId(3), false);
        assert!(!r.has_marker(ElementId(3), DISABLED_MARKER));
    }

    #[test]
    fn clicks_are_drained_in_order() {
        let mut r = MemoryRenderer::new();
        r.synthesize_click(ElementId(2));
        r.synthesize_click(ElementId(1));
        assert_eq!(r.take_clicks(), vec![ElementId(2), ElementId(1)]);
        assert!(r.pending_clicks().is_empty());
    }
}
