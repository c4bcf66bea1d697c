//! Event handling for the hosted dropdown.
//!
//! # Event Flow
//!
//! 1. The plugin shim maps Zellij input to an [`Event`]
//! 2. [`handle_event`] routes it into the menu tree: key presses and
//!    mousedowns go to every mounted menu, clicks go to the surface of the
//!    innermost menu under the pointer (or to the document when outside)
//! 3. Clicks synthesized by Enter are fed back as item clicks, the way a real
//!    click on the element would bubble to its menu
//! 4. Side effects are collected as [`Action`]s
//!
//! # Example
//!
//! ```rust
//! use dropdown_menu::app::{handle_event, AppState, Event};
//! use dropdown_menu::config::MenuDefinition;
//! use dropdown_menu::ui::Theme;
//!
//! let definition = MenuDefinition::from_toml_str("[[items]]\nlabel = \"Save\"\n")?;
//! let mut state = AppState::new(&definition, Theme::default())?;
//! let (render, actions) = handle_event(&mut state, &Event::Toggle)?;
//! assert!(render);
//! assert!(actions.is_empty());
//! # Ok::<(), dropdown_menu::domain::DropdownError>(())
//! ```

use crate::app::{Action, AppState};
use crate::domain::{DropdownError, ElementId, ItemId, MenuId, MenuKey, Result};
use crate::menu::DocumentEvent;

/// What a primary click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// An item element.
    Item(ItemId),
    /// The surface of a menu, between items.
    Menu(MenuId),
    /// Anywhere outside every menu.
    Outside,
}

/// Events delivered by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A navigation key was pressed.
    Key(MenuKey),
    /// The primary button went down.
    MouseDown,
    /// A primary click completed.
    Click(ClickTarget),
    /// The dropdown trigger was activated: flip the root open state.
    Toggle,
    /// The content of a menu changed on the host side.
    ContentChanged(MenuId),
    /// Open or close a menu from outside the dropdown.
    SetOpen {
        /// Menu to change.
        menu: MenuId,
        /// Requested state.
        open: bool,
    },
    /// Enable or disable an item element.
    SetDisabled {
        /// Element to change.
        element: ElementId,
        /// Whether it is disabled.
        disabled: bool,
    },
}

/// Processes an event, mutates the dropdown and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`. `should_render` is `false` only for events
/// that cannot change what is on screen.
///
/// # Errors
///
/// Returns errors for events naming menus or items that are not in the tree.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    let was_open = state.tree.is_open(state.root);
    let mut actions = vec![];
    let mut should_render = true;

    match event {
        Event::Key(key) => state.tree.dispatch(DocumentEvent::KeyDown(*key)),
        Event::MouseDown => {
            state.tree.dispatch(DocumentEvent::MouseDown);
            should_render = false;
        }
        Event::Click(target) => click(state, *target, &mut actions)?,
        Event::Toggle => state.tree.toggle_open_state(state.root)?,
        Event::ContentChanged(menu) => state.tree.content_changed(*menu)?,
        Event::SetOpen { menu, open } => state.tree.set_open_state(*menu, *open, false)?,
        Event::SetDisabled { element, disabled } => {
            let item = state
                .item_for(*element)
                .ok_or_else(|| DropdownError::Config(format!("no item for element {element}")))?;
            state.tree.renderer_mut().set_disabled(*element, *disabled);
            if let Some(owner) = state.tree.item(item).and_then(|i| i.owner()) {
                state.tree.content_changed(owner)?;
            }
        }
    }

    let synthesized = state.tree.renderer_mut().take_clicks();
    for element in synthesized {
        match state.item_for(element) {
            Some(item) => click(state, ClickTarget::Item(item), &mut actions)?,
            None => tracing::debug!(%element, "synthesized click on unknown element"),
        }
    }

    if was_open && !state.tree.is_open(state.root) {
        tracing::debug!("root menu closed");
        actions.push(Action::CloseFocus);
    }

    // nothing animates in a terminal; the log only needs to live for one event
    state.tree.transitions_mut().clear();

    Ok((should_render, actions))
}

/// Routes a click. Clicks inside a menu stop at that menu's surface; only
/// outside clicks reach the document.
fn click(state: &mut AppState, target: ClickTarget, actions: &mut Vec<Action>) -> Result<()> {
    match target {
        ClickTarget::Item(item) => {
            let (owner, element, is_leaf, is_disabled) = {
                let it = state.tree.item(item).ok_or(DropdownError::UnknownItem(item))?;
                (
                    it.owner(),
                    it.element(),
                    !it.has_child_menu(),
                    it.is_disabled(state.tree.renderer()),
                )
            };

            if is_leaf && !is_disabled {
                let label = state.label(element).to_string();
                tracing::debug!(%element, label = %label, "item activated");
                state.last_activated = Some(label.clone());
                actions.push(Action::ItemActivated { element, label });
            }

            match owner {
                Some(menu) => state.tree.click_menu(menu, Some(item))?,
                None => state.tree.dispatch(DocumentEvent::Click),
            }
        }
        ClickTarget::Menu(menu) => state.tree.click_menu(menu, None)?,
        ClickTarget::Outside => state.tree.dispatch(DocumentEvent::Click),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MenuDefinition;
    use crate::ui::Theme;

    const FILE_MENU: &str = r#"
[settings]
auto_select_first = true

[[items]]
label = "Save"

[[items]]
label = "Export"

[[items.menu.items]]
label = "PDF"

[[items.menu.items]]
label = "HTML"
"#;

    fn state() -> AppState {
        let def = MenuDefinition::from_toml_str(FILE_MENU).unwrap();
        AppState::new(&def, Theme::default()).unwrap()
    }

    #[test]
    fn enter_activates_and_closes() {
        let mut state = state();
        handle_event(&mut state, &Event::Toggle).unwrap();

        let (_, actions) = handle_event(&mut state, &Event::Key(MenuKey::Enter)).unwrap();

        assert_eq!(
            actions,
            vec![
                Action::ItemActivated {
                    element: ElementId(1),
                    label: "Save".to_string()
                },
                Action::CloseFocus,
            ]
        );
        assert!(!state.tree.is_open(state.root));
        assert_eq!(state.last_activated.as_deref(), Some("Save"));
    }

    #[test]
    fn nested_rows_appear_when_drilled_in() {
        let mut state = state();
        handle_event(&mut state, &Event::Toggle).unwrap();
        assert_eq!(state.rows().len(), 2);

        handle_event(&mut state, &Event::Key(MenuKey::Down)).unwrap();
        handle_event(&mut state, &Event::Key(MenuKey::Right)).unwrap();

        let rows = state.rows();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[2].label, "PDF");
        assert_eq!(rows[2].depth, 1);
        assert!(rows[2].is_selected);
        assert!(rows[1].child_open);
    }

    #[test]
    fn outside_click_closes_after_mousedown() {
        let mut state = state();
        handle_event(&mut state, &Event::Toggle).unwrap();
        let (render, _) = handle_event(&mut state, &Event::MouseDown).unwrap();
        assert!(!render);

        let (_, actions) = handle_event(&mut state, &Event::Click(ClickTarget::Outside)).unwrap();
        assert_eq!(actions, vec![Action::CloseFocus]);
    }

    #[test]
    fn clicking_a_parent_item_does_not_activate_it() {
        let mut state = state();
        handle_event(&mut state, &Event::Toggle).unwrap();
        let export = state.item_for(ElementId(2)).unwrap();

        let (_, actions) = handle_event(&mut state, &Event::Click(ClickTarget::Item(export))).unwrap();
        assert_eq!(actions, vec![Action::CloseFocus]);
    }

    #[test]
    fn disabling_the_selected_item_moves_auto_selection() {
        let mut state = state();
        handle_event(
            &mut state,
            &Event::SetDisabled {
                element: ElementId(1),
                disabled: true,
            },
        )
        .unwrap();
        let export = state.item_for(ElementId(2)).unwrap();
        assert_eq!(state.tree.selection(state.root), &[export]);
    }

    #[test]
    fn transition_log_does_not_grow_across_events() {
        let mut state = state();
        for _ in 0..1000 {
            handle_event(&mut state, &Event::Toggle).unwrap();
        }
        assert!(state.tree.transitions().calls().is_empty());
    }

    #[test]
    fn unknown_element_is_an_error() {
        let mut state = state();
        let err = handle_event(
            &mut state,
            &Event::SetDisabled {
                element: ElementId(99),
                disabled: true,
            },
        )
        .unwrap_err();
        assert!(matches!(err, DropdownError::Config(_)));
    }
}
