//! Terminal rendering of the open menus.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render_lines → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Line rendering and printing
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_lines};
pub use theme::{Theme, ThemeColors};
pub use viewmodel::{FooterInfo, HeaderInfo, MenuRow, UIViewModel};
