//! Mouse interaction: surface clicks, and the document mousedown/click pair
//! that implements close-on-outside-click.

use super::render::Renderer;
use super::transition::TransitionController;
use super::tree::MenuTree;
use crate::domain::{ItemId, MenuId, Result};

impl<R: Renderer, T: TransitionController> MenuTree<R, T> {
    /// Primary click on the surface of `menu`.
    ///
    /// `origin` is the item the click landed on, if any. Surface clicks stop
    /// propagating here: neither ancestor menus nor the document see them. With
    /// the item-click policy, a click on an item closes this menu and every
    /// menu above it.
    ///
    /// # Errors
    ///
    /// Returns an error if `menu` is not in the tree.
    pub fn click_menu(&mut self, menu: MenuId, origin: Option<ItemId>) -> Result<()> {
        let m = self.require_menu(menu)?;
        let closes = m.channel.auto_close().closes_on_item_click();
        tracing::debug!(?menu, ?origin, closes, "menu surface clicked");

        if closes && origin.is_some() {
            self.request_open_state(menu, false, true);
        }
        self.flush();
        Ok(())
    }

    /// Document mousedown: remember whether `menu` was open before the click
    /// that follows, so a menu opened in between is not closed by it.
    pub(crate) fn on_document_mousedown(&mut self, menu: MenuId) {
        if let Some(m) = self.menus.get_mut(menu) {
            m.is_open_on_mousedown = m.channel.is_open();
        }
    }

    /// Document click, i.e. a click that no menu surface stopped.
    ///
    /// Only this menu is closed: every ancestor receives the same document
    /// click and decides for itself.
    pub(crate) fn on_document_click(&mut self, menu: MenuId) {
        let Some(m) = self.menus.get(menu) else {
            return;
        };
        if m.is_open_on_mousedown && m.channel.auto_close().closes_on_outside_click() {
            tracing::debug!(?menu, "closing on outside click");
            self.request_open_state(menu, false, false);
        }
    }
}
