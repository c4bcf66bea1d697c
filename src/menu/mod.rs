//! Dropdown menu state machine.
//!
//! This module owns the selection and navigation logic. It tracks which item is
//! selected across an arbitrarily deep stack of nested menus, turns key presses
//! into stack transitions, and keeps selection and transitions in step with
//! open-state changes.
//!
//! # Collaborators
//!
//! The host supplies two capabilities:
//! - [`Renderer`]: reads the disabled marker, toggles the selected class and
//!   synthesizes clicks on item elements
//! - [`TransitionController`]: stops and starts open/close transitions
//!
//! # Modules
//!
//! - [`tree`]: Arena, composition and open-state propagation
//! - [`selection`]: Reset, auto-select and cursor movement within one menu
//! - [`keyboard`]: Key handling across nested menus
//! - [`mouse`]: Surface clicks and outside-click closing
//! - [`dispatch`]: Document-level event routing
//! - [`item`], [`state`], [`channel`]: Item, menu and open-state data
//! - [`render`], [`transition`]: Host capability contracts
//!
//! # Example
//!
//! ```rust
//! use dropdown_menu::config::MenuConfig;
//! use dropdown_menu::domain::{ElementId, MenuKey};
//! use dropdown_menu::menu::{DocumentEvent, MemoryRenderer, MenuTree, TransitionLog};
//!
//! let mut tree = MenuTree::new(MemoryRenderer::new(), TransitionLog::new());
//! let root = tree.add_menu(MenuConfig::default());
//! let items = vec![tree.add_item(ElementId(1)), tree.add_item(ElementId(2))];
//! tree.set_content(root, items.clone())?;
//!
//! tree.set_open_state(root, true, false)?;
//! tree.dispatch(DocumentEvent::KeyDown(MenuKey::Down));
//! assert_eq!(tree.selection(root), &[items[0]]);
//! # Ok::<(), dropdown_menu::domain::DropdownError>(())
//! ```

pub mod channel;
pub mod dispatch;
pub mod item;
pub mod keyboard;
pub mod mouse;
pub mod render;
pub mod selection;
pub mod state;
pub mod transition;
pub mod tree;

pub use channel::{OpenChange, OpenStateChannel};
pub use dispatch::DocumentEvent;
pub use item::Item;
pub use render::{MemoryRenderer, Renderer, DISABLED_MARKER};
pub use state::Menu;
pub use transition::{Transition, TransitionCall, TransitionController, TransitionLog};
pub use tree::MenuTree;
