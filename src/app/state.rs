//! Application state: one composed dropdown plus what the UI needs to show it.
//!
//! `AppState` keeps the menu tree, the root menu and the item labels. The view
//! model flattens every open menu into display rows: the root's items, each
//! immediately followed by the items of its nested menu when that menu is open.

use crate::config::MenuDefinition;
use crate::domain::{ElementId, ItemId, MenuId, NavigationPhase, Result};
use crate::menu::{MemoryRenderer, MenuTree, TransitionLog};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FooterInfo, HeaderInfo, MenuRow, UIViewModel};
use std::collections::HashMap;

/// Rows taken by the header above the first menu row.
pub const HEADER_ROWS: usize = 2;

/// Rows reserved below the last menu row (separator, keybindings, status).
pub const FOOTER_ROWS: usize = 3;

/// Central application state container.
pub struct AppState {
    /// Menus and items of the dropdown.
    pub tree: MenuTree<MemoryRenderer, TransitionLog>,

    /// Menu built from the top-level definition.
    pub root: MenuId,

    /// Display label of every item element.
    pub labels: HashMap<ElementId, String>,

    /// Item backing every element, for routing clicks back into the tree.
    pub elements: HashMap<ElementId, ItemId>,

    /// Label of the most recently activated item.
    pub last_activated: Option<String>,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Composes `definition` into a fresh tree. The dropdown starts closed.
    ///
    /// # Errors
    ///
    /// Propagates composition errors from the menu tree.
    pub fn new(definition: &MenuDefinition, theme: Theme) -> Result<Self> {
        let mut tree = MenuTree::new(MemoryRenderer::new(), TransitionLog::new());
        let mut next_element = 1;
        let composed = definition.compose(&mut tree, &mut next_element)?;

        tracing::debug!(items = composed.items.len(), "app state initialized");

        Ok(Self {
            tree,
            root: composed.root,
            labels: composed.labels,
            elements: composed.items,
            last_activated: None,
            theme,
        })
    }

    /// Label of `element`, or an empty string for unknown elements.
    #[must_use]
    pub fn label(&self, element: ElementId) -> &str {
        self.labels.get(&element).map_or("", String::as_str)
    }

    /// Item backing `element`.
    #[must_use]
    pub fn item_for(&self, element: ElementId) -> Option<ItemId> {
        self.elements.get(&element).copied()
    }

    /// Display rows of every open menu, in screen order.
    #[must_use]
    pub fn rows(&self) -> Vec<MenuRow> {
        let mut rows = vec![];
        if self.tree.is_open(self.root) {
            self.collect_rows(self.root, 0, &mut rows);
        }
        rows
    }

    fn collect_rows(&self, menu: MenuId, depth: usize, rows: &mut Vec<MenuRow>) {
        let Some(m) = self.tree.menu(menu) else {
            return;
        };
        let renderer = self.tree.renderer();

        for id in m.content() {
            let Some(item) = self.tree.item(*id) else {
                continue;
            };
            let child_open = item.child_menu().is_some_and(|child| self.tree.is_open(child));
            rows.push(MenuRow {
                item: *id,
                element: item.element(),
                label: self.label(item.element()).to_string(),
                depth,
                is_selected: item.is_selected(),
                is_disabled: item.is_disabled(renderer),
                has_child_menu: item.has_child_menu(),
                child_open,
            });
            if let (Some(child), true) = (item.child_menu(), child_open) {
                self.collect_rows(child, depth + 1, rows);
            }
        }
    }

    /// Rows that fit in a pane of `pane_rows` lines.
    ///
    /// The window scrolls just far enough to keep the keyboard cursor (the top
    /// of the root's selection stack) on screen.
    #[must_use]
    pub fn visible_rows(&self, pane_rows: usize) -> Vec<MenuRow> {
        let available = pane_rows.saturating_sub(HEADER_ROWS + FOOTER_ROWS);
        let rows = self.rows();
        let cursor = self
            .tree
            .selected(self.root)
            .and_then(|item| rows.iter().position(|row| row.item == item));
        let offset = cursor.map_or(0, |index| (index + 1).saturating_sub(available));

        rows.into_iter().skip(offset).take(available).collect()
    }

    /// Row under screen line `line` (0-based, header included) in a pane of
    /// `pane_rows` lines.
    #[must_use]
    pub fn row_at(&self, line: usize, pane_rows: usize) -> Option<MenuRow> {
        line.checked_sub(HEADER_ROWS)
            .and_then(|index| self.visible_rows(pane_rows).into_iter().nth(index))
    }

    /// Computes a renderable view model for a pane of `rows` lines.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, _cols: usize) -> UIViewModel {
        let menu_rows = self.visible_rows(rows);

        let title = match self.tree.phase(self.root) {
            NavigationPhase::Closed => " Menu (closed) ".to_string(),
            NavigationPhase::OpenNoSelection => " Menu ".to_string(),
            NavigationPhase::OpenWithSelection { depth } => format!(" Menu (level {depth}) "),
        };

        let keybindings = if self.tree.is_open(self.root) {
            "↑/↓: move  →/Enter: open  ←: back  Esc: close".to_string()
        } else {
            "Space: open  q: quit".to_string()
        };

        UIViewModel {
            rows: menu_rows,
            header: HeaderInfo { title },
            footer: FooterInfo {
                keybindings,
                status: self.last_activated.clone(),
            },
        }
    }
}
