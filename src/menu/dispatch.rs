//! Routing of document-level input to mounted menus.
//!
//! Every mounted menu sees every document event, in mount order, and decides on
//! its own whether to act. Open-state notifications raised while routing are
//! delivered once all menus have seen the event.

use super::render::Renderer;
use super::transition::TransitionController;
use super::tree::MenuTree;
use crate::domain::MenuKey;

/// An input event not stopped by any menu surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentEvent {
    /// Primary button pressed anywhere.
    MouseDown,
    /// Primary click that reached the document.
    Click,
    /// Key pressed.
    KeyDown(MenuKey),
}

impl<R: Renderer, T: TransitionController> MenuTree<R, T> {
    /// Delivers `event` to every mounted menu.
    pub fn dispatch(&mut self, event: DocumentEvent) {
        let _span = tracing::debug_span!("dispatch", ?event, menus = self.mounted.len()).entered();

        for menu in self.mounted.clone() {
            match event {
                DocumentEvent::MouseDown => self.on_document_mousedown(menu),
                DocumentEvent::Click => self.on_document_click(menu),
                DocumentEvent::KeyDown(key) => self.on_document_keydown(menu, key),
            }
        }
        self.flush();
    }
}
