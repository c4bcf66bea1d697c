//! Zellij plugin wrapper and entry point.
//!
//! This module is the thin integration layer between the dropdown library and
//! the Zellij plugin system: it maps Zellij input to library events, executes
//! the resulting actions and delegates rendering.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, compose the dropdown
//! 2. **Subscribe**: Register for `Key`, `Mouse` and `Visible` events
//! 3. **Update**: Translate events, delegate to `handle_event`
//! 4. **Render**: Call library render function
//!
//! # Event Mapping
//!
//! - `Key(Up | k)`, `Key(Down | j)`, `Key(Left | h)`, `Key(Right | l)`,
//!   `Key(Enter)`, `Key(Esc)` → `Event::Key(..)`
//! - `Key(Space)` → `Event::Toggle`
//! - `Key(q)` → close the plugin
//! - `Mouse(LeftClick)` → `Event::MouseDown` followed by `Event::Click(..)`
//!   on the row under the pointer, the header, or outside
//! - `Visible(true)` → reopen the root menu

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use dropdown_menu::app::{AppState, HEADER_ROWS};
use dropdown_menu::{handle_event, Action, ClickTarget, Config, Event, MenuKey};

register_plugin!(State);

/// Plugin state wrapper.
#[derive(Default)]
struct State {
    /// Core application state; `None` until loaded or if loading failed.
    app: Option<AppState>,

    /// Load error shown instead of the menu.
    load_error: Option<String>,

    /// Pane height at the last render, for mapping clicks to rows.
    pane_rows: usize,
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// Parses configuration, composes the dropdown and subscribes to input.
    /// The root menu starts open so the pane shows something when launched.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        dropdown_menu::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();
        tracing::debug!(menu_file = ?config.menu_file, "parsed configuration");

        match dropdown_menu::initialize(&config) {
            Ok(app) => {
                self.app = Some(app);
                self.dispatch(&Event::Toggle);
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to initialize dropdown");
                self.load_error = Some(e.to_string());
            }
        }

        subscribe(&[EventType::Key, EventType::Mouse, EventType::Visible]);
        tracing::debug!("plugin load complete");
    }

    /// Handles incoming Zellij events. Returns `true` if the UI should
    /// re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let _guard = tracing::debug_span!("plugin_update", event = %Self::get_event_name(&event)).entered();

        match event {
            zellij_tile::prelude::Event::Key(key) => {
                if key.bare_key == BareKey::Char('q') && key.has_no_modifiers() {
                    close_self();
                    return false;
                }
                self.map_key_event(&key).is_some_and(|event| self.dispatch(&event))
            }
            zellij_tile::prelude::Event::Mouse(Mouse::LeftClick(line, _col)) => {
                let target = self.click_target(line);
                self.dispatch(&Event::MouseDown);
                self.dispatch(&Event::Click(target))
            }
            zellij_tile::prelude::Event::Visible(true) => {
                let Some(root) = self.app.as_ref().map(|app| app.root) else {
                    return false;
                };
                self.dispatch(&Event::SetOpen { menu: root, open: true })
            }
            _ => false,
        }
    }

    /// Renders the plugin UI.
    fn render(&mut self, rows: usize, cols: usize) {
        self.pane_rows = rows;
        match (&self.app, &self.load_error) {
            (Some(app), _) => dropdown_menu::ui::render(app, rows, cols),
            (None, Some(error)) => println!("dropdown-menu: {error}"),
            (None, None) => {}
        }
    }
}

impl State {
    /// Runs an event through the library and executes the resulting actions.
    fn dispatch(&mut self, event: &Event) -> bool {
        let Some(app) = self.app.as_mut() else {
            return false;
        };

        match handle_event(app, event) {
            Ok((should_render, actions)) => {
                for action in &actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Mouse(mouse) => format!("Mouse({mouse:?})"),
            zellij_tile::prelude::Event::Visible(visible) => format!("Visible({visible})"),
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if !key.has_no_modifiers() {
            return None;
        }

        Some(match key.bare_key {
            BareKey::Up | BareKey::Char('k') => Event::Key(MenuKey::Up),
            BareKey::Down | BareKey::Char('j') => Event::Key(MenuKey::Down),
            BareKey::Left | BareKey::Char('h') => Event::Key(MenuKey::Left),
            BareKey::Right | BareKey::Char('l') => Event::Key(MenuKey::Right),
            BareKey::Enter => Event::Key(MenuKey::Enter),
            BareKey::Esc => Event::Key(MenuKey::Escape),
            BareKey::Char(' ') => Event::Toggle,
            _ => return None,
        })
    }

    /// Resolves the screen line of a click to what it landed on.
    ///
    /// The header belongs to the root menu's surface; the rows map to their
    /// items; everything else is outside the dropdown.
    fn click_target(&self, line: isize) -> ClickTarget {
        let (Some(app), Ok(line)) = (&self.app, usize::try_from(line)) else {
            return ClickTarget::Outside;
        };

        if let Some(row) = app.row_at(line, self.pane_rows) {
            return ClickTarget::Item(row.item);
        }
        if line < HEADER_ROWS && app.tree.is_open(app.root) {
            return ClickTarget::Menu(app.root);
        }
        ClickTarget::Outside
    }

    /// Translates library actions to Zellij API calls.
    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::ItemActivated { element, label } => {
                tracing::info!(%element, label = %label, "menu item activated");
            }
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
        }
    }
}
