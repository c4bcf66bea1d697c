//! Per-menu state held in the tree.

use super::channel::OpenStateChannel;
use crate::config::MenuConfig;
use crate::domain::ItemId;

/// A container of items and its navigation state.
///
/// Owned by [`crate::menu::MenuTree`]; all mutation goes through the tree,
/// which has access to the items and the host capabilities.
#[derive(Debug, Clone)]
pub struct Menu {
    pub(crate) config: MenuConfig,
    pub(crate) channel: OpenStateChannel,
    /// All content items in document order, disabled ones included.
    pub(crate) content: Vec<ItemId>,
    /// Path of selected items. Element `i` lives in the nested menu of element
    /// `i - 1`. Only the root menu's stack is driven by the keyboard.
    pub(crate) selected_items: Vec<ItemId>,
    pub(crate) parent_item: Option<ItemId>,
    /// Last open value delivered to this menu.
    pub(crate) previous_is_open: bool,
    /// Open state captured at the last document mousedown, so a menu opened
    /// between mousedown and click is not closed by that same click.
    pub(crate) is_open_on_mousedown: bool,
}

impl Menu {
    pub(crate) fn new(config: MenuConfig) -> Self {
        let channel = OpenStateChannel::new(config.auto_close);
        let previous_is_open = channel.is_open();
        Self {
            config,
            channel,
            content: Vec::new(),
            selected_items: Vec::new(),
            parent_item: None,
            previous_is_open,
            is_open_on_mousedown: false,
        }
    }

    /// Settings the menu was composed with.
    #[must_use]
    pub const fn config(&self) -> &MenuConfig {
        &self.config
    }

    /// Open-state channel.
    #[must_use]
    pub const fn channel(&self) -> &OpenStateChannel {
        &self.channel
    }

    /// Mirrors the channel's open state.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.channel.is_open()
    }

    /// Only non-nested menus react to keyboard input.
    #[must_use]
    pub const fn is_nested(&self) -> bool {
        self.channel.is_nested()
    }

    /// Raw content, disabled items included.
    #[must_use]
    pub fn content(&self) -> &[ItemId] {
        &self.content
    }

    /// Selection stack, bottom first.
    #[must_use]
    pub fn selected_items(&self) -> &[ItemId] {
        &self.selected_items
    }

    /// Item whose nested menu this is.
    #[must_use]
    pub const fn parent_item(&self) -> Option<ItemId> {
        self.parent_item
    }
}
