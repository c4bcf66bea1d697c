//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! plugin shim executes them in order; the library itself never calls into
//! Zellij.
//!
//! # Example
//!
//! ```rust
//! use dropdown_menu::app::Action;
//! use dropdown_menu::domain::ElementId;
//!
//! let actions = vec![
//!     Action::ItemActivated { element: ElementId(3), label: "Save".to_string() },
//!     Action::CloseFocus,
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

use crate::domain::ElementId;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A leaf item was activated, by click or by Enter.
    ItemActivated {
        /// Element of the activated item.
        element: ElementId,
        /// Label of the activated item.
        label: String,
    },

    /// The root menu closed; hide the plugin pane.
    CloseFocus,
}
