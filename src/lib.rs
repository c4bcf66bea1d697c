//! Dropdown Menu: nested dropdown menus with keyboard navigation for Zellij.
//!
//! The crate provides:
//! - A menu tree where any item may host a nested menu, to any depth
//! - A selection-stack state machine driving Up/Down/Left/Right/Enter/Escape
//!   across the open menus
//! - Open/close coordination between nested menus, with transitions stopped
//!   and restarted on every change
//! - Auto-close on item clicks and on clicks outside the dropdown

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Event routing
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Menu Core     │   │ Config Layer  │
//! │ (ui/)         │   │ (menu/)       │   │ (config/)     │
//! │ - Rendering   │   │ - Menu tree   │   │ - Settings    │
//! │ - Theming     │   │ - Selection   │   │ - Definitions │
//! │               │   │ - Keys, mouse │   │   (TOML/JSON) │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Ids, keys, modes                                 │
//! │  - Error types                                      │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing-subscriber to the plugin log             │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state with the event/action model
//! - [`config`]: Menu settings and nested menu definitions
//! - [`domain`]: Core domain types (ids, keys, modes, errors)
//! - [`menu`]: The menu tree and its navigation state machine
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: Tracing setup
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/dropdown-menu.wasm" {
//!         menu_file "/path/to/menu.toml"
//!         theme_file "/path/to/theme.toml"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use dropdown_menu::{handle_event, initialize, Action, Config, Event, MenuKey};
//!
//! let mut state = initialize(&Config::default())?;
//! handle_event(&mut state, &Event::Toggle)?;
//! handle_event(&mut state, &Event::Key(MenuKey::Down))?;
//! let (_, actions) = handle_event(&mut state, &Event::Key(MenuKey::Enter))?;
//! assert!(matches!(actions[0], Action::ItemActivated { .. }));
//! # Ok::<(), dropdown_menu::DropdownError>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Arena Ownership
//!
//! Menus and items live in `slotmap` arenas inside one [`menu::MenuTree`].
//! Parent/child links are keys, so the tree has no reference cycles and no
//! interior mutability.
//!
//! ## Queued Open-State Changes
//!
//! Open-state changes are queued and delivered in order once the operation
//! that caused them has finished. A menu reacting to its own change may
//! change other menus; those changes join the same queue.
//!
//! ## Host Capabilities as Traits
//!
//! Element markers, classes and synthesized clicks go through
//! [`menu::Renderer`]; animations go through [`menu::TransitionController`].
//! The plugin uses in-memory implementations and draws the terminal UI from
//! them.

pub mod app;
pub mod config;
pub mod domain;
pub mod menu;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, ClickTarget, Event};
pub use config::{MenuConfig, MenuDefinition};
pub use domain::{AutoCloseMode, DropdownError, ElementId, ItemId, MenuId, MenuKey, Result};
pub use menu::MenuTree;
pub use ui::Theme;

use std::collections::BTreeMap;

/// Menu shown when no `menu_file` is configured.
pub const DEFAULT_MENU: &str = r#"
[settings]
auto_select_first = false

[[items]]
label = "New Tab"

[[items]]
label = "Layouts"

[[items.menu.items]]
label = "compact"

[[items.menu.items]]
label = "default"

[[items.menu.items]]
label = "strider"
disabled = true

[[items]]
label = "Session"

[[items.menu.items]]
label = "Rename"

[[items.menu.items]]
label = "Detach"

[[items]]
label = "Quit"
"#;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/dropdown-menu.wasm" {
///     menu_file "/path/to/menu.toml"
///     theme_file "/path/to/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Path to a TOML or JSON menu definition.
    ///
    /// Falls back to [`DEFAULT_MENU`] when unset.
    pub menu_file: Option<String>,

    /// Path to a custom TOML theme file. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Tracing level or `EnvFilter` directive. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Empty values count as unset.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use dropdown_menu::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("menu_file".to_string(), "/tmp/menu.toml".to_string());
    /// map.insert("trace_level".to_string(), " ".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.menu_file.as_deref(), Some("/tmp/menu.toml"));
    /// assert_eq!(config.trace_level, None);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        Self {
            menu_file: get("menu_file"),
            theme_file: get("theme_file"),
            trace_level: get("trace_level"),
        }
    }
}

/// Initializes the plugin with configuration.
///
/// Loads the menu definition (configured file or [`DEFAULT_MENU`]) and the
/// theme, then composes the dropdown. A theme that fails to load falls back
/// to the default; a menu file that fails to load is an error, since showing
/// a different menu than the one configured would be misleading.
///
/// # Errors
///
/// Returns an error if the configured menu file cannot be read, parsed or
/// validated.
pub fn initialize(config: &Config) -> Result<AppState> {
    tracing::debug!("initializing dropdown menu plugin");

    let definition = match &config.menu_file {
        Some(path) => MenuDefinition::from_file(path)?,
        None => MenuDefinition::from_toml_str(DEFAULT_MENU)?,
    };

    let theme = config.theme_file.as_ref().map_or_else(Theme::default, |theme_file| {
        Theme::from_file(theme_file).unwrap_or_else(|e| {
            tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
            Theme::default()
        })
    });

    AppState::new(&definition, theme)
}
