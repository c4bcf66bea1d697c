//! Identifiers for menus, items and host elements.
//!
//! Menus and items live in a single arena ([`crate::menu::MenuTree`]). The
//! links between them (item → nested menu, menu → parent item, item → owning
//! menu) are stored as keys so the tree never holds owning cycles.

use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    /// Key of a menu inside a [`crate::menu::MenuTree`].
    pub struct MenuId;

    /// Key of an item inside a [`crate::menu::MenuTree`].
    pub struct ItemId;
}

/// Opaque handle to the host element backing an item.
///
/// Chosen by the host when it composes items. The core only hands it back to
/// the [`crate::menu::Renderer`]; it never looks inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(pub u64);

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
