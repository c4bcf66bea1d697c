//! View model types representing renderable UI state.
//!
//! View models are computed from `AppState` by `compute_viewmodel()` and
//! consumed by the renderer. They hold display-ready data only: every open
//! menu has already been flattened into rows, with nesting expressed as depth.
//!
//! # Example
//!
//! ```rust
//! use dropdown_menu::ui::viewmodel::{FooterInfo, HeaderInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     rows: vec![],
//!     header: HeaderInfo { title: " Menu ".to_string() },
//!     footer: FooterInfo { keybindings: "q: quit".to_string(), status: None },
//! };
//! assert!(vm.rows.is_empty());
//! ```

use crate::domain::{ElementId, ItemId};

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Rows of every open menu, in screen order.
    pub rows: Vec<MenuRow>,

    /// Header information (title, navigation phase).
    pub header: HeaderInfo,

    /// Footer information (keybindings, last activation).
    pub footer: FooterInfo,
}

/// One item as it appears on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuRow {
    /// Item backing the row.
    pub item: ItemId,

    /// Element of the item.
    pub element: ElementId,

    /// Display label.
    pub label: String,

    /// Nesting level; 0 for items of the root menu.
    pub depth: usize,

    /// Whether the item carries its menu's selected class.
    pub is_selected: bool,

    /// Whether the item carries the disabled marker.
    pub is_disabled: bool,

    /// Whether the item hosts a nested menu.
    pub has_child_menu: bool,

    /// Whether that nested menu is currently open.
    pub child_open: bool,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,

    /// Label of the last activated item, if any.
    pub status: Option<String>,
}
