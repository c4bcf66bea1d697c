//! Policy enums and the navigation phase of a menu.
//!
//! # State Machine
//!
//! A dropdown is always in one of three phases:
//! - **Closed**: nothing is selected, the selection stack is empty
//! - **Open, nothing selected**: the menu is showing, no cursor yet
//! - **Open, selected at depth d**: the stack holds a path of `d` items from the
//!   root menu down through the nested menus that are drilled into
//!
//! Open-state changes move between closed and open; key presses move between the
//! open phases.

use serde::{Deserialize, Serialize};

/// Which interactions close a dropdown automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AutoCloseMode {
    /// Clicking an item closes the dropdown and every menu above it. Clicking
    /// outside closes it as well.
    #[default]
    ItemClick,
    /// Only clicking outside closes the dropdown.
    OutsideClick,
    /// The dropdown is only closed explicitly (Escape or the host).
    Disabled,
}

impl AutoCloseMode {
    /// Whether a click on one of this menu's items closes the dropdown.
    #[must_use]
    pub const fn closes_on_item_click(self) -> bool {
        matches!(self, Self::ItemClick)
    }

    /// Whether a document click outside the menu closes the dropdown.
    #[must_use]
    pub const fn closes_on_outside_click(self) -> bool {
        matches!(self, Self::ItemClick | Self::OutsideClick)
    }
}

/// Which item Up selects when nothing is selected yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UpArrowEntry {
    /// Up from no selection selects the first item, like Down does.
    #[default]
    First,
    /// Up from no selection selects the last item.
    Last,
}

/// Phase of a dropdown, derived from its open state and selection stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationPhase {
    /// The dropdown is closed.
    Closed,
    /// The dropdown is open but nothing is selected.
    OpenNoSelection,
    /// The dropdown is open with `depth` items on the selection stack.
    OpenWithSelection {
        /// Number of items on the selection stack (at least 1).
        depth: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outside_click_policy() {
        assert!(AutoCloseMode::ItemClick.closes_on_outside_click());
        assert!(AutoCloseMode::OutsideClick.closes_on_outside_click());
        assert!(!AutoCloseMode::Disabled.closes_on_outside_click());
    }

    #[test]
    fn item_click_policy() {
        assert!(AutoCloseMode::ItemClick.closes_on_item_click());
        assert!(!AutoCloseMode::OutsideClick.closes_on_item_click());
        assert!(!AutoCloseMode::Disabled.closes_on_item_click());
    }

    #[test]
    fn modes_deserialize_from_kebab_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            auto_close: AutoCloseMode,
            up: UpArrowEntry,
        }
        let w: Wrapper = toml::from_str("auto_close = \"outside-click\"\nup = \"last\"").unwrap();
        assert_eq!(w.auto_close, AutoCloseMode::OutsideClick);
        assert_eq!(w.up, UpArrowEntry::Last);
    }
}
