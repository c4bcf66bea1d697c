//! Error types for the dropdown menu.
//!
//! This module defines the centralized error type [`DropdownError`] and a type
//! alias [`Result`]. Navigation itself never fails: "nothing selected" and
//! "already at the last item" are ordinary states. Errors only come from
//! addressing menus or items that are not in the tree, from malformed nesting,
//! and from loading configuration.

use crate::domain::ids::{ItemId, MenuId};
use thiserror::Error;

/// The main error type for dropdown menu operations.
///
/// # Examples
///
/// ```
/// use dropdown_menu::domain::DropdownError;
///
/// let err = DropdownError::Config("menu_file is empty".to_string());
/// assert_eq!(err.to_string(), "Configuration error: menu_file is empty");
/// ```
#[derive(Debug, Error)]
pub enum DropdownError {
    /// A menu id does not (or no longer) refer to a menu in the tree.
    #[error("Unknown menu: {0:?}")]
    UnknownMenu(MenuId),

    /// An item id does not (or no longer) refer to an item in the tree.
    #[error("Unknown item: {0:?}")]
    UnknownItem(ItemId),

    /// The item already hosts a nested menu.
    ///
    /// The item → child menu link is set once, when the composition layer
    /// discovers that the item's content contains a menu.
    #[error("Item {item:?} already hosts menu {existing:?}")]
    ChildMenuAlreadyLinked {
        /// Item that was being linked.
        item: ItemId,
        /// Menu it already hosts.
        existing: MenuId,
    },

    /// Linking the menu would make it (transitively) contain itself.
    #[error("Linking menu {child:?} under item {item:?} would create a nesting cycle")]
    CyclicNesting {
        /// Item the menu was being linked under.
        item: ItemId,
        /// Menu that was being linked.
        child: MenuId,
    },

    /// A key name did not match any navigation key.
    #[error("Unknown key: {0}")]
    UnknownKey(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A menu definition file could not be parsed.
    #[error("Menu definition error: {0}")]
    Definition(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for dropdown menu operations.
pub type Result<T> = std::result::Result<T, DropdownError>;
