//! Open-state channel of a single menu.
//!
//! Holds the authoritative open flag, the auto-close policy and whether the
//! menu is nested. Propagation between channels (closing children, reflecting
//! into the parent) and delivery of change notifications are done by
//! [`crate::menu::MenuTree`], which knows how menus are linked.

use crate::domain::{AutoCloseMode, MenuId};

/// Open/closed state plus the policy flags the menu consults.
#[derive(Debug, Clone, Default)]
pub struct OpenStateChannel {
    is_open: bool,
    is_disabled: bool,
    is_nested: bool,
    auto_close: AutoCloseMode,
}

impl OpenStateChannel {
    /// Creates a closed, enabled, non-nested channel.
    #[must_use]
    pub fn new(auto_close: AutoCloseMode) -> Self {
        Self {
            auto_close,
            ..Self::default()
        }
    }

    /// Current open state.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    /// A disabled channel ignores open-state requests.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.is_disabled
    }

    /// `true` if the menu is the nested menu of some item.
    #[must_use]
    pub const fn is_nested(&self) -> bool {
        self.is_nested
    }

    /// Auto-close policy.
    #[must_use]
    pub const fn auto_close(&self) -> AutoCloseMode {
        self.auto_close
    }

    pub(crate) fn set_auto_close(&mut self, mode: AutoCloseMode) {
        self.auto_close = mode;
    }

    pub(crate) fn set_disabled(&mut self, disabled: bool) {
        self.is_disabled = disabled;
    }

    pub(crate) fn set_nested(&mut self, nested: bool) {
        self.is_nested = nested;
    }

    /// Applies a requested state. Returns `true` if the state changed.
    pub(crate) fn apply(&mut self, open: bool) -> bool {
        if self.is_open == open || self.is_disabled {
            return false;
        }
        self.is_open = open;
        true
    }
}

/// One notification from a channel: `menu` is now `open`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenChange {
    /// Menu whose channel changed.
    pub menu: MenuId,
    /// New open state.
    pub open: bool,
}
