//! Application layer hosting one dropdown inside the plugin.
//!
//! This module sits between the plugin runtime (main.rs) and the menu state
//! machine. It owns the composed menu tree, translates host input into menu
//! operations and reports side effects back as actions.
//!
//! # Architecture
//!
//! ```text
//! User Input → Events → Event Handler → MenuTree → Actions → Side Effects
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event routing and click bubbling
//! - [`state`]: Composed menu tree, labels and view model computation
//!
//! # Example
//!
//! ```rust
//! use dropdown_menu::app::{handle_event, AppState, Event};
//! use dropdown_menu::config::MenuDefinition;
//! use dropdown_menu::domain::MenuKey;
//! use dropdown_menu::ui::Theme;
//!
//! let definition = MenuDefinition::from_toml_str("[[items]]\nlabel = \"Save\"\n")?;
//! let mut state = AppState::new(&definition, Theme::default())?;
//! handle_event(&mut state, &Event::Toggle)?;
//! let (render, _actions) = handle_event(&mut state, &Event::Key(MenuKey::Down))?;
//! assert!(render);
//! # Ok::<(), dropdown_menu::domain::DropdownError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, ClickTarget, Event};
pub use state::{AppState, FOOTER_ROWS, HEADER_ROWS};
