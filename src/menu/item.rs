//! A single selectable menu entry.

use super::render::{Renderer, DISABLED_MARKER};
use crate::domain::{ElementId, MenuId};

/// Class applied to selected items until the owning menu says otherwise.
pub const DEFAULT_SELECTED_CLASS: &str = "selected";

/// Leaf wrapper around one host element.
///
/// The selected flag is only ever written by the owning menu. Writing it also
/// toggles the selected class on the element through the [`Renderer`].
#[derive(Debug, Clone)]
pub struct Item {
    element: ElementId,
    selected: bool,
    selected_class: String,
    pub(crate) owner: Option<MenuId>,
    pub(crate) child_menu: Option<MenuId>,
}

impl Item {
    pub(crate) fn new(element: ElementId) -> Self {
        Self {
            element,
            selected: false,
            selected_class: DEFAULT_SELECTED_CLASS.to_string(),
            owner: None,
            child_menu: None,
        }
    }

    /// Host element backing this item.
    #[must_use]
    pub const fn element(&self) -> ElementId {
        self.element
    }

    /// Menu whose content lists this item, if it has been placed yet.
    #[must_use]
    pub const fn owner(&self) -> Option<MenuId> {
        self.owner
    }

    /// Nested menu hosted by this item.
    #[must_use]
    pub const fn child_menu(&self) -> Option<MenuId> {
        self.child_menu
    }

    /// `true` iff this item hosts a nested menu.
    #[must_use]
    pub const fn has_child_menu(&self) -> bool {
        self.child_menu.is_some()
    }

    /// Reads the disabled marker from the element. Never cached.
    pub fn is_disabled<R: Renderer + ?Sized>(&self, renderer: &R) -> bool {
        renderer.has_marker(self.element, DISABLED_MARKER)
    }

    /// Whether the owning menu currently has this item selected.
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.selected
    }

    /// Class toggled on the element when the item is selected.
    #[must_use]
    pub fn selected_class(&self) -> &str {
        &self.selected_class
    }

    pub(crate) fn set_selected<R: Renderer + ?Sized>(&mut self, value: bool, renderer: &mut R) {
        self.selected = value;
        renderer.set_class(self.element, &self.selected_class, value);
    }

    /// Switches the selected class, taking it off the element first if the
    /// name changes so no stale class is left behind.
    pub(crate) fn set_selected_class<R: Renderer + ?Sized>(&mut self, class: &str, renderer: &mut R) {
        if self.selected_class == class {
            return;
        }
        renderer.set_class(self.element, &self.selected_class, false);
        self.selected_class = class.to_string();
    }

    /// Activates the element through the renderer.
    pub fn perform_click<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        renderer.synthesize_click(self.element);
    }
}
