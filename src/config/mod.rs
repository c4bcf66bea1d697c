//! Menu configuration and menu definition files.
//!
//! - [`menu`]: Per-menu settings fixed at composition time
//! - [`definition`]: Nested menu definitions loaded from TOML or JSON and
//!   composed into a [`crate::menu::MenuTree`]

pub mod definition;
pub mod menu;

pub use definition::{ComposedMenu, ItemDefinition, MenuDefinition};
pub use menu::MenuConfig;
