//! Property tests for the selection invariants.

use dropdown_menu::config::MenuConfig;
use dropdown_menu::domain::{ElementId, ItemId, MenuId, MenuKey};
use dropdown_menu::menu::{DocumentEvent, MemoryRenderer, MenuTree, TransitionLog};
use proptest::prelude::*;

type Tree = MenuTree<MemoryRenderer, TransitionLog>;

/// Open root menu with one item per flag; `true` flags are disabled.
fn menu(disabled: &[bool], auto_select_first: bool) -> (Tree, MenuId, Vec<ItemId>) {
    let mut tree = MenuTree::new(MemoryRenderer::new(), TransitionLog::new());
    let root = tree.add_menu(MenuConfig::default().with_auto_select_first(auto_select_first));
    let mut items = vec![];
    for (n, flag) in disabled.iter().enumerate() {
        let element = ElementId(n as u64);
        tree.renderer_mut().set_disabled(element, *flag);
        items.push(tree.add_item(element));
    }
    tree.set_content(root, items.clone()).unwrap();
    tree.set_open_state(root, true, false).unwrap();
    (tree, root, items)
}

fn key() -> impl Strategy<Value = MenuKey> {
    prop_oneof![
        Just(MenuKey::Up),
        Just(MenuKey::Down),
        Just(MenuKey::Left),
        Just(MenuKey::Right),
    ]
}

proptest! {
    #[test]
    fn prop_update_selection_stays_within_enabled_items(
        disabled in prop::collection::vec(any::<bool>(), 0..8),
        keys in prop::collection::vec(key(), 1..24),
    ) {
        let (mut tree, root, _) = menu(&disabled, false);
        let enabled = tree.items(root);
        let mut current = None;

        for key in keys {
            let next = tree.update_selection(root, current, key).unwrap();
            match next {
                Some(item) => prop_assert!(enabled.contains(&item)),
                // Left keeps the cursor, so it keeps an absent one absent
                None => prop_assert!(enabled.is_empty() || current.is_none()),
            }
            current = next;
        }
    }

    #[test]
    fn prop_movement_never_wraps(
        disabled in prop::collection::vec(any::<bool>(), 1..8),
        presses in 1usize..10,
    ) {
        let (mut tree, root, _) = menu(&disabled, false);
        let enabled = tree.items(root);
        prop_assume!(!enabled.is_empty());

        let first = enabled[0];
        let last = enabled[enabled.len() - 1];

        let mut current = Some(last);
        for _ in 0..presses {
            current = tree.update_selection(root, current, MenuKey::Down).unwrap();
            prop_assert_eq!(current, Some(last));
        }
        for _ in 0..presses {
            current = tree.update_selection(root, Some(first), MenuKey::Up).unwrap();
            prop_assert_eq!(current, Some(first));
        }
    }

    #[test]
    fn prop_disabled_items_are_never_selected(
        disabled in prop::collection::vec(any::<bool>(), 0..8),
        auto_select_first in any::<bool>(),
        keys in prop::collection::vec(key(), 0..24),
    ) {
        let (mut tree, root, items) = menu(&disabled, auto_select_first);

        for key in keys {
            tree.dispatch(DocumentEvent::KeyDown(key));
            for (item, flag) in items.iter().zip(&disabled) {
                if *flag {
                    prop_assert!(!tree.item(*item).unwrap().is_selected());
                    prop_assert!(!tree.selection(root).contains(item));
                }
            }
        }
    }

    #[test]
    fn prop_closing_clears_every_selection(
        disabled in prop::collection::vec(any::<bool>(), 0..8),
        auto_select_first in any::<bool>(),
        keys in prop::collection::vec(key(), 0..24),
    ) {
        let (mut tree, root, items) = menu(&disabled, auto_select_first);
        for key in keys {
            tree.dispatch(DocumentEvent::KeyDown(key));
        }

        tree.dispatch(DocumentEvent::KeyDown(MenuKey::Escape));

        prop_assert!(!tree.is_open(root));
        prop_assert!(tree.selection(root).is_empty());
        for item in &items {
            prop_assert!(!tree.item(*item).unwrap().is_selected());
        }
    }

    #[test]
    fn prop_auto_select_picks_the_first_enabled_item(
        disabled in prop::collection::vec(any::<bool>(), 0..8),
    ) {
        let (tree, root, items) = menu(&disabled, true);
        let expected: Vec<ItemId> = items
            .iter()
            .zip(&disabled)
            .find(|(_, flag)| !**flag)
            .map(|(item, _)| *item)
            .into_iter()
            .collect();

        prop_assert_eq!(tree.selection(root), expected.as_slice());
    }
}
