//! Arena holding every menu and item of a dropdown, plus the host capabilities.
//!
//! # Composition
//!
//! The host builds the tree bottom-up or top-down, in any order:
//!
//! 1. [`MenuTree::add_menu`] for each menu
//! 2. [`MenuTree::add_item`] for each item element
//! 3. [`MenuTree::set_content`] to place items in a menu (runs the
//!    content-change reaction)
//! 4. [`MenuTree::link_child_menu`] for every item whose content holds a menu
//!
//! # Open-state delivery
//!
//! Open-state requests are applied to the channels immediately and queued as
//! [`OpenChange`] notifications. Every public operation ends by draining the
//! queue, delivering each notification exactly once and in order to the menu's
//! open-state reaction. Nothing delivered re-enters the reaction.

use super::channel::{OpenChange, OpenStateChannel};
use super::item::Item;
use super::render::Renderer;
use super::state::Menu;
use super::transition::{Transition, TransitionController};
use crate::config::MenuConfig;
use crate::domain::{
    AutoCloseMode, DropdownError, ElementId, ItemId, MenuId, NavigationPhase, Result,
};
use slotmap::SlotMap;
use std::collections::{HashSet, VecDeque};

/// Owner of all menus and items of one dropdown hierarchy.
pub struct MenuTree<R, T> {
    pub(crate) menus: SlotMap<MenuId, Menu>,
    pub(crate) items: SlotMap<ItemId, Item>,
    pub(crate) renderer: R,
    pub(crate) transitions: T,
    /// Menus receiving document-level events, in mount order.
    pub(crate) mounted: Vec<MenuId>,
    pending: VecDeque<OpenChange>,
}

impl<R: Renderer, T: TransitionController> MenuTree<R, T> {
    /// Creates an empty tree around the host capabilities.
    pub fn new(renderer: R, transitions: T) -> Self {
        Self {
            menus: SlotMap::with_key(),
            items: SlotMap::with_key(),
            renderer,
            transitions,
            mounted: Vec::new(),
            pending: VecDeque::new(),
        }
    }

    /// Adds a closed, empty menu and mounts it for document events.
    pub fn add_menu(&mut self, config: MenuConfig) -> MenuId {
        let id = self.menus.insert(Menu::new(config));
        self.mounted.push(id);
        tracing::debug!(menu = ?id, "menu mounted");
        id
    }

    /// Adds an item backed by `element`. It belongs to no menu until placed
    /// with [`MenuTree::set_content`].
    pub fn add_item(&mut self, element: ElementId) -> ItemId {
        self.items.insert(Item::new(element))
    }

    /// Replaces the content of `menu` with `items`, in document order, then
    /// resets the selection (and auto-selects the first item if configured).
    ///
    /// # Errors
    ///
    /// Returns an error if `menu` or any of `items` is not in the tree.
    pub fn set_content(&mut self, menu: MenuId, items: Vec<ItemId>) -> Result<()> {
        self.require_menu(menu)?;
        if let Some(missing) = items.iter().find(|id| !self.items.contains_key(**id)) {
            return Err(DropdownError::UnknownItem(*missing));
        }

        for id in &items {
            if let Some(item) = self.items.get_mut(*id) {
                item.owner = Some(menu);
            }
        }
        if let Some(m) = self.menus.get_mut(menu) {
            m.content = items;
        }

        self.items_changed(menu);
        self.flush();
        Ok(())
    }

    /// Re-runs the content-change reaction, e.g. after items were enabled or
    /// disabled on the host side.
    ///
    /// # Errors
    ///
    /// Returns an error if `menu` is not in the tree.
    pub fn content_changed(&mut self, menu: MenuId) -> Result<()> {
        self.require_menu(menu)?;
        self.items_changed(menu);
        self.flush();
        Ok(())
    }

    /// Records that `item`'s content contains `child`.
    ///
    /// The child becomes nested: it stops reacting to the keyboard and its
    /// channel reflects close requests into the menu owning `item`.
    ///
    /// # Errors
    ///
    /// - `UnknownItem` / `UnknownMenu` for ids not in the tree
    /// - `ChildMenuAlreadyLinked` if `item` already hosts a menu
    /// - `CyclicNesting` if `child` is `item`'s menu or one of its ancestors
    pub fn link_child_menu(&mut self, item: ItemId, child: MenuId) -> Result<()> {
        let host = self.items.get(item).ok_or(DropdownError::UnknownItem(item))?;
        self.require_menu(child)?;
        if let Some(existing) = host.child_menu {
            return Err(DropdownError::ChildMenuAlreadyLinked { item, existing });
        }

        let mut ancestor = host.owner;
        while let Some(menu) = ancestor {
            if menu == child {
                return Err(DropdownError::CyclicNesting { item, child });
            }
            ancestor = self.parent_menu(menu);
        }

        if let Some(host) = self.items.get_mut(item) {
            host.child_menu = Some(child);
        }
        if let Some(m) = self.menus.get_mut(child) {
            m.parent_item = Some(item);
            m.channel.set_nested(true);
        }
        tracing::debug!(?item, menu = ?child, "nested menu linked");
        Ok(())
    }

    /// Destroys `menu`, its items and every menu nested beneath them.
    ///
    /// # Errors
    ///
    /// Returns an error if `menu` is not in the tree.
    pub fn destroy_menu(&mut self, menu: MenuId) -> Result<()> {
        self.require_menu(menu)?;

        let mut doomed_menus = vec![];
        let mut doomed_items = HashSet::new();
        let mut queue = vec![menu];
        while let Some(current) = queue.pop() {
            doomed_menus.push(current);
            if let Some(m) = self.menus.get(current) {
                for id in &m.content {
                    doomed_items.insert(*id);
                    if let Some(child) = self.items.get(*id).and_then(Item::child_menu) {
                        queue.push(child);
                    }
                }
            }
        }

        if let Some(parent) = self.menus.get(menu).and_then(Menu::parent_item) {
            if let Some(host) = self.items.get_mut(parent) {
                host.child_menu = None;
            }
        }
        for id in &doomed_menus {
            self.menus.remove(*id);
        }
        for id in &doomed_items {
            self.items.remove(*id);
        }
        for m in self.menus.values_mut() {
            m.selected_items.retain(|id| !doomed_items.contains(id));
            m.content.retain(|id| !doomed_items.contains(id));
        }
        self.mounted.retain(|id| !doomed_menus.contains(id));
        self.pending.retain(|change| !doomed_menus.contains(&change.menu));

        tracing::debug!(?menu, menus = doomed_menus.len(), items = doomed_items.len(), "menu destroyed");
        Ok(())
    }

    /// Sets the open state of `menu`.
    ///
    /// Closing also closes every nested menu. With `reflect_in_parent`, the
    /// same request is repeated on the enclosing menus up to the root.
    ///
    /// # Errors
    ///
    /// Returns an error if `menu` is not in the tree.
    pub fn set_open_state(&mut self, menu: MenuId, open: bool, reflect_in_parent: bool) -> Result<()> {
        self.require_menu(menu)?;
        self.request_open_state(menu, open, reflect_in_parent);
        self.flush();
        Ok(())
    }

    /// Flips the open state of `menu`.
    ///
    /// # Errors
    ///
    /// Returns an error if `menu` is not in the tree.
    pub fn toggle_open_state(&mut self, menu: MenuId) -> Result<()> {
        let open = self.require_menu(menu)?.is_open();
        self.set_open_state(menu, !open, false)
    }

    /// Enables or disables the channel of `menu`. A disabled channel ignores
    /// every open-state request.
    ///
    /// # Errors
    ///
    /// Returns an error if `menu` is not in the tree.
    pub fn set_disabled(&mut self, menu: MenuId, disabled: bool) -> Result<()> {
        self.menus
            .get_mut(menu)
            .ok_or(DropdownError::UnknownMenu(menu))?
            .channel
            .set_disabled(disabled);
        Ok(())
    }

    /// Changes the auto-close policy of `menu`.
    ///
    /// # Errors
    ///
    /// Returns an error if `menu` is not in the tree.
    pub fn set_auto_close(&mut self, menu: MenuId, mode: AutoCloseMode) -> Result<()> {
        let m = self.menus.get_mut(menu).ok_or(DropdownError::UnknownMenu(menu))?;
        m.config.auto_close = mode;
        m.channel.set_auto_close(mode);
        Ok(())
    }

    /// Looks up a menu.
    #[must_use]
    pub fn menu(&self, menu: MenuId) -> Option<&Menu> {
        self.menus.get(menu)
    }

    /// Looks up an item.
    #[must_use]
    pub fn item(&self, item: ItemId) -> Option<&Item> {
        self.items.get(item)
    }

    /// Open-state channel of `menu`.
    #[must_use]
    pub fn channel(&self, menu: MenuId) -> Option<&OpenStateChannel> {
        self.menus.get(menu).map(Menu::channel)
    }

    /// `true` if `menu` exists and is open.
    #[must_use]
    pub fn is_open(&self, menu: MenuId) -> bool {
        self.menus.get(menu).is_some_and(Menu::is_open)
    }

    /// Selection stack of `menu`, bottom first. Empty for unknown menus.
    #[must_use]
    pub fn selection(&self, menu: MenuId) -> &[ItemId] {
        self.menus
            .get(menu)
            .map(Menu::selected_items)
            .unwrap_or_default()
    }

    /// Top of `menu`'s selection stack.
    #[must_use]
    pub fn selected(&self, menu: MenuId) -> Option<ItemId> {
        self.selection(menu).last().copied()
    }

    /// Navigation phase of `menu`.
    #[must_use]
    pub fn phase(&self, menu: MenuId) -> NavigationPhase {
        if !self.is_open(menu) {
            return NavigationPhase::Closed;
        }
        match self.selection(menu).len() {
            0 => NavigationPhase::OpenNoSelection,
            depth => NavigationPhase::OpenWithSelection { depth },
        }
    }

    /// Menus that receive document-level events, in mount order.
    #[must_use]
    pub fn mounted(&self) -> &[MenuId] {
        &self.mounted
    }

    /// Menus that are not nested in any item.
    pub fn roots(&self) -> impl Iterator<Item = MenuId> + '_ {
        self.menus
            .iter()
            .filter(|(_, m)| m.parent_item.is_none())
            .map(|(id, _)| id)
    }

    /// Menu containing the item that hosts `menu`.
    #[must_use]
    pub fn parent_menu(&self, menu: MenuId) -> Option<MenuId> {
        self.menus
            .get(menu)
            .and_then(Menu::parent_item)
            .and_then(|item| self.items.get(item))
            .and_then(Item::owner)
    }

    /// Host element store.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Mutable host element store, e.g. to toggle disabled markers.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Transition controller.
    pub fn transitions(&self) -> &T {
        &self.transitions
    }

    /// Mutable transition controller.
    pub fn transitions_mut(&mut self) -> &mut T {
        &mut self.transitions
    }

    pub(crate) fn require_menu(&self, menu: MenuId) -> Result<&Menu> {
        self.menus.get(menu).ok_or(DropdownError::UnknownMenu(menu))
    }

    /// Applies an open-state request and queues its notifications.
    pub(crate) fn request_open_state(&mut self, menu: MenuId, open: bool, reflect_in_parent: bool) {
        let Some(m) = self.menus.get_mut(menu) else {
            return;
        };
        if !m.channel.apply(open) {
            return;
        }
        tracing::debug!(?menu, open, reflect_in_parent, "open state changed");
        self.pending.push_back(OpenChange { menu, open });

        if !open {
            let children: Vec<MenuId> = m
                .content
                .iter()
                .filter_map(|id| self.items.get(*id).and_then(Item::child_menu))
                .collect();
            for child in children {
                self.request_open_state(child, false, false);
            }
        }

        if reflect_in_parent {
            if let Some(parent) = self.parent_menu(menu) {
                self.request_open_state(parent, open, true);
            }
        }
    }

    /// Delivers queued open-state notifications in order.
    pub(crate) fn flush(&mut self) {
        while let Some(change) = self.pending.pop_front() {
            self.open_state_changed(change.menu, change.open);
        }
    }

    /// Reaction to one open-state notification.
    fn open_state_changed(&mut self, menu: MenuId, is_open: bool) {
        let _span = tracing::debug_span!("open_state_changed", ?menu, is_open).entered();

        let Some(m) = self.menus.get(menu) else {
            return;
        };
        if is_open != m.previous_is_open {
            let transition = Transition::new(m.config.transition.clone());
            self.transitions.stop_all(menu);
            self.transitions.animate(menu, transition);
        }

        if !is_open {
            self.clear_selection(menu);
        }

        if let Some(m) = self.menus.get_mut(menu) {
            m.previous_is_open = is_open;
        }
    }
}
