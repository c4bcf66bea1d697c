//! Selection bookkeeping: resetting, auto-selecting and moving the cursor
//! within one menu.

use super::render::Renderer;
use super::transition::TransitionController;
use super::tree::MenuTree;
use crate::domain::{ItemId, MenuId, MenuKey, Result, UpArrowEntry};

impl<R: Renderer, T: TransitionController> MenuTree<R, T> {
    /// Enabled items of `menu`, in document order.
    ///
    /// Disabled items are filtered out on every call since the host may toggle
    /// the marker at any time.
    #[must_use]
    pub fn items(&self, menu: MenuId) -> Vec<ItemId> {
        let Some(m) = self.menus.get(menu) else {
            return vec![];
        };
        m.content
            .iter()
            .copied()
            .filter(|id| {
                self.items
                    .get(*id)
                    .is_some_and(|item| !item.is_disabled(&self.renderer))
            })
            .collect()
    }

    /// Clears the selection stack of `menu` and deselects its enabled items.
    ///
    /// # Errors
    ///
    /// Returns an error if `menu` is not in the tree.
    pub fn reset_selection(&mut self, menu: MenuId) -> Result<()> {
        self.require_menu(menu)?;
        self.clear_selection(menu);
        Ok(())
    }

    /// Moves the cursor of `menu` away from `selected` according to `key`.
    ///
    /// Down, Right and Enter step forward (nothing selected, or a selection
    /// from another menu, means the first item). Up steps back; with nothing
    /// selected it picks the item named by the menu's [`UpArrowEntry`].
    /// Stepping past either end keeps the previous selection. The returned
    /// item is always one of the menu's enabled items and is marked selected.
    ///
    /// # Errors
    ///
    /// Returns an error if `menu` is not in the tree.
    pub fn update_selection(
        &mut self,
        menu: MenuId,
        selected: Option<ItemId>,
        key: MenuKey,
    ) -> Result<Option<ItemId>> {
        self.require_menu(menu)?;
        Ok(self.step_selection(menu, selected, key))
    }

    pub(crate) fn clear_selection(&mut self, menu: MenuId) {
        let enabled = self.items(menu);
        let Some(m) = self.menus.get_mut(menu) else {
            return;
        };
        m.selected_items.clear();
        let class = m.config.selected_item_class.clone();

        for id in enabled {
            if let Some(item) = self.items.get_mut(id) {
                item.set_selected_class(&class, &mut self.renderer);
                item.set_selected(false, &mut self.renderer);
            }
        }
        tracing::trace!(?menu, "selection reset");
    }

    /// Reaction to a change of `menu`'s content.
    pub(crate) fn items_changed(&mut self, menu: MenuId) {
        self.clear_selection(menu);

        let Some(auto_select_first) = self.menus.get(menu).map(|m| m.config.auto_select_first) else {
            return;
        };
        if !auto_select_first {
            return;
        }
        if let Some(first) = self.items(menu).first().copied() {
            self.mark_selected(first, true);
            if let Some(m) = self.menus.get_mut(menu) {
                m.selected_items.push(first);
            }
            tracing::debug!(?menu, item = ?first, "first item auto-selected");
        }
    }

    pub(crate) fn step_selection(
        &mut self,
        menu: MenuId,
        selected: Option<ItemId>,
        key: MenuKey,
    ) -> Option<ItemId> {
        if let Some(previous) = selected {
            self.mark_selected(previous, false);
        }

        let items = self.items(menu);
        let index = selected.and_then(|s| items.iter().position(|id| *id == s));
        let entry = self
            .menus
            .get(menu)
            .map_or(UpArrowEntry::First, |m| m.config.up_arrow_entry);

        let target = match key {
            MenuKey::Enter | MenuKey::Right | MenuKey::Down => Some(index.map_or(0, |i| i + 1)),
            MenuKey::Up => match (index, entry) {
                (Some(i), _) => i.checked_sub(1),
                (None, UpArrowEntry::First) => Some(0),
                (None, UpArrowEntry::Last) => items.len().checked_sub(1),
            },
            MenuKey::Escape | MenuKey::Left => index,
        };

        let new_selection = target
            .and_then(|i| items.get(i))
            .or_else(|| index.and_then(|i| items.get(i)))
            .copied();

        if let Some(id) = new_selection {
            self.mark_selected(id, true);
        }
        tracing::trace!(?menu, ?key, ?selected, ?new_selection, "selection updated");
        new_selection
    }

    pub(crate) fn mark_selected(&mut self, item: ItemId, value: bool) {
        if let Some(item) = self.items.get_mut(item) {
            item.set_selected(value, &mut self.renderer);
        }
    }
}
