//! Domain layer for the dropdown menu.
//!
//! This module contains the plain types shared by the menu state machine, the
//! host application and the configuration loader. Nothing in here knows about
//! Zellij, rendering or the arena that owns menus and items.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`ids`]: Arena keys for menus and items, host element handles
//! - [`key`]: Symbolic navigation keys
//! - [`modes`]: Auto-close policy, Up-arrow entry policy, navigation phase
//!
//! # Examples
//!
//! ```
//! use dropdown_menu::domain::{MenuKey, Result};
//!
//! fn parse() -> Result<MenuKey> {
//!     "ArrowDown".parse()
//! }
//! assert_eq!(parse().unwrap(), MenuKey::Down);
//! ```

pub mod error;
pub mod ids;
pub mod key;
pub mod modes;

pub use error::{DropdownError, Result};
pub use ids::{ElementId, ItemId, MenuId};
pub use key::MenuKey;
pub use modes::{AutoCloseMode, NavigationPhase, UpArrowEntry};
