//! Keyboard navigation across nested menus.
//!
//! Only the root menu tracks keyboard focus. Its selection stack holds the path
//! from its own selected item down into however many nested menus are open;
//! the top of the stack is the cursor. Nested menus never touch the stack,
//! they only answer [`MenuTree::update_selection`] for their own items.
//!
//! | Key   | Effect                                                          |
//! |-------|-----------------------------------------------------------------|
//! | Esc   | close the root (and with it every nested menu)                  |
//! | Up    | move the cursor up within the innermost open menu               |
//! | Down  | move the cursor down within the innermost open menu             |
//! | Enter | click the cursor item, or drill in if it hosts a menu           |
//! | Right | open the cursor item's menu and select its first item           |
//! | Left  | close the innermost nested menu and return to its host item     |

use super::item::Item;
use super::render::Renderer;
use super::transition::TransitionController;
use super::tree::MenuTree;
use crate::domain::{ItemId, MenuId, MenuKey};

impl<R: Renderer, T: TransitionController> MenuTree<R, T> {
    /// Document-level keydown as seen by `menu`.
    ///
    /// Ignored unless `menu` is open and not nested.
    pub(crate) fn on_document_keydown(&mut self, menu: MenuId, key: MenuKey) {
        let Some(m) = self.menus.get(menu) else {
            return;
        };
        if !m.is_open() || m.is_nested() {
            return;
        }

        let _span = tracing::debug_span!("keydown", ?menu, ?key, depth = m.selected_items.len()).entered();

        let selected = m.selected_items.last().copied();
        let container = match m.selected_items.len() {
            depth if depth >= 2 => self
                .items
                .get(m.selected_items[depth - 2])
                .and_then(Item::child_menu)
                .unwrap_or(menu),
            _ => menu,
        };

        match key {
            MenuKey::Escape => self.request_open_state(menu, false, false),
            MenuKey::Up | MenuKey::Down => {
                self.pop_selection(menu);
                // an emptied menu keeps the old cursor so Left can still back out
                if let Some(next) = self.step_selection(container, selected, key).or(selected) {
                    self.push_selection(menu, next);
                }
            }
            MenuKey::Enter => match selected {
                Some(item) if !self.hosts_menu(item) => {
                    if let Some(item) = self.items.get(item) {
                        tracing::debug!(element = %item.element(), "activating item");
                        item.perform_click(&mut self.renderer);
                    }
                }
                _ => self.drill_in(menu, selected, key),
            },
            MenuKey::Right => self.drill_in(menu, selected, key),
            MenuKey::Left => self.back_out(menu),
        }
    }

    /// Opens the nested menu of `selected` and moves the cursor into it.
    fn drill_in(&mut self, menu: MenuId, selected: Option<ItemId>, key: MenuKey) {
        let Some(selected) = selected else {
            return;
        };
        let Some(child) = self.items.get(selected).and_then(Item::child_menu) else {
            return;
        };

        self.request_open_state(child, true, false);
        match self.step_selection(child, Some(selected), key) {
            Some(first) => self.push_selection(menu, first),
            None => {
                tracing::debug!(?child, "nested menu has no enabled items");
                self.mark_selected(selected, true);
            }
        }
    }

    /// Closes the innermost nested menu and restores focus to its host item.
    fn back_out(&mut self, menu: MenuId) {
        if self.selection(menu).len() < 2 {
            return;
        }
        self.pop_selection(menu);
        let Some(parent) = self.selected(menu) else {
            return;
        };

        if let Some(child) = self.items.get(parent).and_then(Item::child_menu) {
            self.request_open_state(child, false, false);
        }
        self.mark_selected(parent, true);
    }

    fn hosts_menu(&self, item: ItemId) -> bool {
        self.items.get(item).is_some_and(Item::has_child_menu)
    }

    fn pop_selection(&mut self, menu: MenuId) {
        if let Some(m) = self.menus.get_mut(menu) {
            m.selected_items.pop();
        }
    }

    fn push_selection(&mut self, menu: MenuId, item: ItemId) {
        if let Some(m) = self.menus.get_mut(menu) {
            m.selected_items.push(item);
        }
    }
}
