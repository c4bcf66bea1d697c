//! Nested menu definitions and their composition into a tree.
//!
//! A definition describes a menu's settings and its items; an item may carry
//! a nested menu definition of its own. Definitions are loaded from TOML or
//! JSON and composed into a [`MenuTree`], which sets every item → nested menu
//! link explicitly.
//!
//! # TOML Format
//!
//! ```toml
//! [settings]
//! auto_select_first = true
//!
//! [[items]]
//! label = "New File"
//!
//! [[items]]
//! label = "Open Recent"
//!
//! [[items.menu.items]]
//! label = "notes.md"
//!
//! [[items.menu.items]]
//! label = "todo.md"
//! disabled = true
//!
//! [[items]]
//! label = "Quit"
//! ```

use super::menu::MenuConfig;
use crate::domain::{DropdownError, ElementId, ItemId, MenuId, Result};
use crate::menu::{MemoryRenderer, MenuTree, TransitionController};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// A menu and its items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuDefinition {
    /// Settings of this menu.
    #[serde(default)]
    pub settings: MenuConfig,
    /// Items in display order.
    #[serde(default)]
    pub items: Vec<ItemDefinition>,
}

/// One entry of a [`MenuDefinition`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDefinition {
    /// Text shown for the item.
    pub label: String,
    /// Whether the item starts out disabled.
    #[serde(default)]
    pub disabled: bool,
    /// Nested menu opened from this item.
    #[serde(default)]
    pub menu: Option<MenuDefinition>,
}

/// Result of composing a definition into a tree.
#[derive(Debug, Clone, Default)]
pub struct ComposedMenu {
    /// Menu built from the top-level definition.
    pub root: MenuId,
    /// Label of every composed item, keyed by element.
    pub labels: HashMap<ElementId, String>,
    /// Item created for every element.
    pub items: HashMap<ElementId, ItemId>,
}

impl MenuDefinition {
    /// Loads a definition file, choosing the format by extension (`.json` is
    /// JSON, anything else TOML).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        tracing::debug!(path = %path.display(), is_json, "loading menu definition");
        if is_json {
            Self::from_json_str(&contents)
        } else {
            Self::from_toml_str(&contents)
        }
    }

    /// Parses a TOML definition.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or fails validation.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let definition: Self =
            toml::from_str(contents).map_err(|e| DropdownError::Definition(e.to_string()))?;
        definition.validate()?;
        Ok(definition)
    }

    /// Parses a JSON definition.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or fails validation.
    pub fn from_json_str(contents: &str) -> Result<Self> {
        let definition: Self =
            serde_json::from_str(contents).map_err(|e| DropdownError::Definition(e.to_string()))?;
        definition.validate()?;
        Ok(definition)
    }

    /// Checks that every item at every depth has a label.
    ///
    /// # Errors
    ///
    /// Returns `Definition` naming the first unlabeled item.
    pub fn validate(&self) -> Result<()> {
        for (index, item) in self.items.iter().enumerate() {
            if item.label.trim().is_empty() {
                return Err(DropdownError::Definition(format!(
                    "item {index} has an empty label"
                )));
            }
            if let Some(menu) = &item.menu {
                menu.validate()?;
            }
        }
        Ok(())
    }

    /// Builds this definition into `tree`.
    ///
    /// Element ids are allocated from `next_element`, which is left pointing
    /// past the last id used. Disabled markers are applied before each menu's
    /// content is set, so auto-select never lands on a disabled item.
    ///
    /// # Errors
    ///
    /// Propagates tree errors; a freshly built definition cannot produce any.
    pub fn compose<T: TransitionController>(
        &self,
        tree: &mut MenuTree<MemoryRenderer, T>,
        next_element: &mut u64,
    ) -> Result<ComposedMenu> {
        let mut composed = ComposedMenu::default();
        composed.root = self.compose_into(tree, next_element, &mut composed)?;
        tracing::debug!(items = composed.items.len(), "menu definition composed");
        Ok(composed)
    }

    fn compose_into<T: TransitionController>(
        &self,
        tree: &mut MenuTree<MemoryRenderer, T>,
        next_element: &mut u64,
        composed: &mut ComposedMenu,
    ) -> Result<MenuId> {
        let menu = tree.add_menu(self.settings.clone());
        let mut content = Vec::with_capacity(self.items.len());
        let mut nested = vec![];

        for definition in &self.items {
            let element = ElementId(*next_element);
            *next_element += 1;

            let item = tree.add_item(element);
            tree.renderer_mut().set_disabled(element, definition.disabled);
            composed.labels.insert(element, definition.label.clone());
            composed.items.insert(element, item);
            content.push(item);

            if let Some(child) = &definition.menu {
                nested.push((item, child));
            }
        }

        tree.set_content(menu, content)?;
        for (item, child) in nested {
            let child_menu = child.compose_into(tree, next_element, composed)?;
            tree.link_child_menu(item, child_menu)?;
        }
        Ok(menu)
    }
}
