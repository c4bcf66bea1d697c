//! Integration tests for keyboard navigation across nested menus.
//!
//! These drive the public `MenuTree` API with the in-memory renderer and the
//! recording transition controller.

use dropdown_menu::config::MenuConfig;
use dropdown_menu::domain::{ElementId, ItemId, MenuId, MenuKey, NavigationPhase, UpArrowEntry};
use dropdown_menu::menu::{DocumentEvent, MemoryRenderer, MenuTree, TransitionLog};

type Tree = MenuTree<MemoryRenderer, TransitionLog>;

/// Root menu `[a, parent, z]`, where `parent` hosts a menu `[b, c]`.
struct Fixture {
    tree: Tree,
    root: MenuId,
    child: MenuId,
    a: ItemId,
    parent: ItemId,
    z: ItemId,
    b: ItemId,
    c: ItemId,
}

fn fixture(config: MenuConfig) -> Fixture {
    let mut tree = MenuTree::new(MemoryRenderer::new(), TransitionLog::new());
    let root = tree.add_menu(config);
    let child = tree.add_menu(MenuConfig::default());

    let a = tree.add_item(ElementId(1));
    let parent = tree.add_item(ElementId(2));
    let z = tree.add_item(ElementId(3));
    let b = tree.add_item(ElementId(4));
    let c = tree.add_item(ElementId(5));

    tree.set_content(root, vec![a, parent, z]).unwrap();
    tree.set_content(child, vec![b, c]).unwrap();
    tree.link_child_menu(parent, child).unwrap();

    Fixture { tree, root, child, a, parent, z, b, c }
}

fn open(f: &mut Fixture) {
    f.tree.set_open_state(f.root, true, false).unwrap();
}

fn press(f: &mut Fixture, key: MenuKey) {
    f.tree.dispatch(DocumentEvent::KeyDown(key));
}

fn selected(f: &Fixture, item: ItemId) -> bool {
    f.tree.item(item).unwrap().is_selected()
}

// =============================================================================
// Auto-select
// =============================================================================

#[test]
fn test_auto_select_first_gives_depth_one_on_open() {
    let mut f = fixture(MenuConfig::default().with_auto_select_first(true));
    open(&mut f);

    assert_eq!(f.tree.selection(f.root), &[f.a]);
    assert!(selected(&f, f.a));
    assert_eq!(f.tree.phase(f.root), NavigationPhase::OpenWithSelection { depth: 1 });
}

#[test]
fn test_auto_select_skips_disabled_items() {
    let mut tree = MenuTree::new(MemoryRenderer::new(), TransitionLog::new());
    let root = tree.add_menu(MenuConfig::default().with_auto_select_first(true));
    let a = tree.add_item(ElementId(1));
    let b = tree.add_item(ElementId(2));
    tree.renderer_mut().set_disabled(ElementId(1), true);
    tree.set_content(root, vec![a, b]).unwrap();

    assert_eq!(tree.selection(root), &[b]);
}

// =============================================================================
// Up / Down
// =============================================================================

#[test]
fn test_down_visits_each_item_then_stays_at_the_end() {
    let mut f = fixture(MenuConfig::default());
    open(&mut f);
    assert_eq!(f.tree.phase(f.root), NavigationPhase::OpenNoSelection);

    let mut visited = vec![];
    for _ in 0..5 {
        press(&mut f, MenuKey::Down);
        visited.push(f.tree.selected(f.root).unwrap());
        assert_eq!(f.tree.selection(f.root).len(), 1);
    }

    assert_eq!(visited, vec![f.a, f.parent, f.z, f.z, f.z]);
    assert!(selected(&f, f.z));
    assert!(!selected(&f, f.a));
    assert!(!selected(&f, f.parent));
}

#[test]
fn test_up_stays_at_the_first_item() {
    let mut f = fixture(MenuConfig::default());
    open(&mut f);
    press(&mut f, MenuKey::Down);
    press(&mut f, MenuKey::Up);
    press(&mut f, MenuKey::Up);

    assert_eq!(f.tree.selection(f.root), &[f.a]);
}

#[test]
fn test_up_from_nothing_selects_first_by_default() {
    let mut f = fixture(MenuConfig::default());
    open(&mut f);
    press(&mut f, MenuKey::Up);
    assert_eq!(f.tree.selection(f.root), &[f.a]);
}

#[test]
fn test_up_from_nothing_selects_last_when_configured() {
    let mut f = fixture(MenuConfig::default().with_up_arrow_entry(UpArrowEntry::Last));
    open(&mut f);
    press(&mut f, MenuKey::Up);
    assert_eq!(f.tree.selection(f.root), &[f.z]);
}

#[test]
fn test_down_skips_disabled_items() {
    let mut f = fixture(MenuConfig::default());
    f.tree.renderer_mut().set_disabled(ElementId(2), true);
    open(&mut f);

    press(&mut f, MenuKey::Down);
    press(&mut f, MenuKey::Down);
    assert_eq!(f.tree.selection(f.root), &[f.z]);
    assert!(!selected(&f, f.parent));
}

#[test]
fn test_keys_are_ignored_while_closed() {
    let mut f = fixture(MenuConfig::default());
    press(&mut f, MenuKey::Down);
    assert!(f.tree.selection(f.root).is_empty());
}

#[test]
fn test_nested_menus_ignore_the_keyboard() {
    let mut f = fixture(MenuConfig::default());
    f.tree.set_open_state(f.child, true, false).unwrap();

    press(&mut f, MenuKey::Down);
    assert!(f.tree.selection(f.child).is_empty());
    assert!(!selected(&f, f.b));
}

// =============================================================================
// Enter
// =============================================================================

#[test]
fn test_enter_on_leaf_clicks_once_without_touching_the_stack() {
    let mut f = fixture(MenuConfig::default().with_auto_select_first(true));
    open(&mut f);

    press(&mut f, MenuKey::Enter);

    assert_eq!(f.tree.renderer().pending_clicks(), &[ElementId(1)]);
    assert_eq!(f.tree.selection(f.root), &[f.a]);
    assert!(f.tree.is_open(f.root));
}

#[test]
fn test_enter_on_parent_drills_in() {
    let mut f = fixture(MenuConfig::default());
    open(&mut f);
    press(&mut f, MenuKey::Down);
    press(&mut f, MenuKey::Down);

    press(&mut f, MenuKey::Enter);

    assert_eq!(f.tree.selection(f.root), &[f.parent, f.b]);
    assert!(f.tree.is_open(f.child));
    assert!(f.tree.renderer().pending_clicks().is_empty());
}

#[test]
fn test_enter_and_right_without_selection_do_nothing() {
    let mut f = fixture(MenuConfig::default());
    open(&mut f);
    press(&mut f, MenuKey::Enter);
    press(&mut f, MenuKey::Right);

    assert!(f.tree.selection(f.root).is_empty());
    assert!(f.tree.renderer().pending_clicks().is_empty());
}

// =============================================================================
// Right / Left
// =============================================================================

#[test]
fn test_right_then_left_round_trip() {
    let mut f = fixture(MenuConfig::default());
    open(&mut f);
    press(&mut f, MenuKey::Down);
    press(&mut f, MenuKey::Down);

    press(&mut f, MenuKey::Right);
    assert_eq!(f.tree.selection(f.root), &[f.parent, f.b]);
    assert!(selected(&f, f.b));
    assert!(f.tree.is_open(f.child));
    assert_eq!(f.tree.phase(f.root), NavigationPhase::OpenWithSelection { depth: 2 });

    press(&mut f, MenuKey::Left);
    assert_eq!(f.tree.selection(f.root), &[f.parent]);
    assert!(selected(&f, f.parent));
    assert!(!selected(&f, f.b));
    assert!(!f.tree.is_open(f.child));
}

#[test]
fn test_down_inside_nested_menu_moves_within_it() {
    let mut f = fixture(MenuConfig::default());
    open(&mut f);
    press(&mut f, MenuKey::Down);
    press(&mut f, MenuKey::Down);
    press(&mut f, MenuKey::Right);

    press(&mut f, MenuKey::Down);
    press(&mut f, MenuKey::Down);

    assert_eq!(f.tree.selection(f.root), &[f.parent, f.c]);
    assert!(selected(&f, f.c));
    assert!(!selected(&f, f.b));
}

#[test]
fn test_right_on_leaf_changes_nothing() {
    let mut f = fixture(MenuConfig::default());
    open(&mut f);
    press(&mut f, MenuKey::Down);
    press(&mut f, MenuKey::Right);

    assert_eq!(f.tree.selection(f.root), &[f.a]);
    assert!(selected(&f, f.a));
}

#[test]
fn test_right_into_menu_without_enabled_items_keeps_the_parent() {
    let mut f = fixture(MenuConfig::default());
    f.tree.renderer_mut().set_disabled(ElementId(4), true);
    f.tree.renderer_mut().set_disabled(ElementId(5), true);
    open(&mut f);
    press(&mut f, MenuKey::Down);
    press(&mut f, MenuKey::Down);

    press(&mut f, MenuKey::Right);

    assert_eq!(f.tree.selection(f.root), &[f.parent]);
    assert!(selected(&f, f.parent));
    assert!(f.tree.is_open(f.child));
}

#[test]
fn test_moving_in_an_emptied_menu_keeps_the_stack_depth() {
    let mut f = fixture(MenuConfig::default());
    open(&mut f);
    press(&mut f, MenuKey::Down);
    press(&mut f, MenuKey::Down);
    press(&mut f, MenuKey::Right);
    assert_eq!(f.tree.selection(f.root), &[f.parent, f.b]);

    f.tree.renderer_mut().set_disabled(ElementId(4), true);
    f.tree.renderer_mut().set_disabled(ElementId(5), true);
    f.tree.content_changed(f.child).unwrap();

    press(&mut f, MenuKey::Down);
    assert_eq!(f.tree.selection(f.root), &[f.parent, f.b]);
    assert!(!selected(&f, f.b));

    press(&mut f, MenuKey::Left);
    assert_eq!(f.tree.selection(f.root), &[f.parent]);
    assert!(selected(&f, f.parent));
    assert!(!f.tree.is_open(f.child));
}

#[test]
fn test_left_at_depth_one_does_nothing() {
    let mut f = fixture(MenuConfig::default());
    open(&mut f);
    press(&mut f, MenuKey::Down);
    press(&mut f, MenuKey::Left);

    assert_eq!(f.tree.selection(f.root), &[f.a]);
}

// =============================================================================
// Escape and closing
// =============================================================================

#[test]
fn test_escape_closes_everything_and_clears_selection() {
    let mut f = fixture(MenuConfig::default());
    open(&mut f);
    press(&mut f, MenuKey::Down);
    press(&mut f, MenuKey::Down);
    press(&mut f, MenuKey::Right);

    press(&mut f, MenuKey::Escape);

    assert!(!f.tree.is_open(f.root));
    assert!(!f.tree.is_open(f.child));
    assert!(f.tree.selection(f.root).is_empty());
    for item in [f.a, f.parent, f.z, f.b, f.c] {
        assert!(!selected(&f, item));
    }
    assert_eq!(f.tree.phase(f.root), NavigationPhase::Closed);
}

#[test]
fn test_reopening_starts_without_selection() {
    let mut f = fixture(MenuConfig::default());
    open(&mut f);
    press(&mut f, MenuKey::Down);
    f.tree.toggle_open_state(f.root).unwrap();
    f.tree.toggle_open_state(f.root).unwrap();

    assert_eq!(f.tree.phase(f.root), NavigationPhase::OpenNoSelection);
}
