//! Per-menu settings.

use crate::domain::{AutoCloseMode, UpArrowEntry};
use crate::menu::item::DEFAULT_SELECTED_CLASS;
use crate::menu::transition::DEFAULT_TRANSITION;
use serde::{Deserialize, Serialize};

/// Settings of one menu, fixed when the menu is composed.
///
/// Every field has a default, so a definition file only needs to list what it
/// overrides:
///
/// ```toml
/// auto_select_first = true
/// selected_item_class = "active"
/// transition = "fade"
/// auto_close = "outside-click"
/// up_arrow_entry = "last"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Select the first enabled item whenever the content changes.
    pub auto_select_first: bool,
    /// Class toggled on the selected item's element.
    pub selected_item_class: String,
    /// Name of the transition played on open and close.
    pub transition: String,
    /// Which clicks close the menu.
    pub auto_close: AutoCloseMode,
    /// Which item Up picks when nothing is selected.
    pub up_arrow_entry: UpArrowEntry,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            auto_select_first: false,
            selected_item_class: DEFAULT_SELECTED_CLASS.to_string(),
            transition: DEFAULT_TRANSITION.to_string(),
            auto_close: AutoCloseMode::default(),
            up_arrow_entry: UpArrowEntry::default(),
        }
    }
}

impl MenuConfig {
    /// Returns the config with `auto_select_first` set.
    #[must_use]
    pub fn with_auto_select_first(mut self, value: bool) -> Self {
        self.auto_select_first = value;
        self
    }

    /// Returns the config with the given auto-close policy.
    #[must_use]
    pub fn with_auto_close(mut self, mode: AutoCloseMode) -> Self {
        self.auto_close = mode;
        self
    }

    /// Returns the config with the given selected class.
    #[must_use]
    pub fn with_selected_item_class(mut self, class: impl Into<String>) -> Self {
        self.selected_item_class = class.into();
        self
    }

    /// Returns the config with the given Up-arrow entry policy.
    #[must_use]
    pub fn with_up_arrow_entry(mut self, entry: UpArrowEntry) -> Self {
        self.up_arrow_entry = entry;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_gives_defaults() {
        let config: MenuConfig = toml::from_str("").unwrap();
        assert_eq!(config, MenuConfig::default());
        assert_eq!(config.selected_item_class, "selected");
        assert_eq!(config.transition, "slide down");
        assert!(!config.auto_select_first);
    }

    #[test]
    fn overrides_are_read() {
        let config: MenuConfig =
            toml::from_str("auto_select_first = true\nauto_close = \"disabled\"").unwrap();
        assert!(config.auto_select_first);
        assert_eq!(config.auto_close, AutoCloseMode::Disabled);
    }
}
