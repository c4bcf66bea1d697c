//! Integration tests for loading menu definitions and plugin initialization
//! from files.

use dropdown_menu::app::{handle_event, Event};
use dropdown_menu::config::MenuDefinition;
use dropdown_menu::domain::{AutoCloseMode, DropdownError, MenuKey, UpArrowEntry};
use dropdown_menu::{initialize, Action, Config};
use std::io::Write;
use tempfile::Builder;

const TOML_MENU: &str = r#"
[settings]
auto_select_first = true
auto_close = "outside-click"
up_arrow_entry = "last"

[[items]]
label = "Open"

[[items]]
label = "Recent"

[items.menu.settings]
selected_item_class = "active"

[[items.menu.items]]
label = "notes.md"
"#;

const JSON_MENU: &str = r#"{
  "items": [
    { "label": "Copy" },
    { "label": "Paste", "disabled": true }
  ]
}"#;

fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_toml_file_keeps_settings_per_menu() {
    let file = write_temp(".toml", TOML_MENU);
    let def = MenuDefinition::from_file(file.path()).unwrap();

    assert_eq!(def.settings.auto_close, AutoCloseMode::OutsideClick);
    assert_eq!(def.settings.up_arrow_entry, UpArrowEntry::Last);
    let nested = def.items[1].menu.as_ref().unwrap();
    assert_eq!(nested.settings.selected_item_class, "active");
    assert_eq!(nested.settings.auto_close, AutoCloseMode::ItemClick);
}

#[test]
fn test_json_extension_selects_json() {
    let file = write_temp(".json", JSON_MENU);
    let def = MenuDefinition::from_file(file.path()).unwrap();

    assert_eq!(def.items.len(), 2);
    assert!(def.items[1].disabled);
}

#[test]
fn test_json_contents_in_toml_file_is_a_definition_error() {
    let file = write_temp(".toml", JSON_MENU);
    let err = MenuDefinition::from_file(file.path()).unwrap_err();
    assert!(matches!(err, DropdownError::Definition(_)));
}

#[test]
fn test_unknown_auto_close_mode_is_rejected() {
    let err = MenuDefinition::from_toml_str("[settings]\nauto_close = \"sometimes\"\n").unwrap_err();
    assert!(matches!(err, DropdownError::Definition(_)));
}

#[test]
fn test_initialize_uses_the_configured_menu_file() {
    let file = write_temp(".json", JSON_MENU);
    let config = Config {
        menu_file: Some(file.path().display().to_string()),
        ..Config::default()
    };

    let mut state = initialize(&config).unwrap();
    handle_event(&mut state, &Event::Toggle).unwrap();
    handle_event(&mut state, &Event::Key(MenuKey::Down)).unwrap();
    handle_event(&mut state, &Event::Key(MenuKey::Down)).unwrap();
    let (_, actions) = handle_event(&mut state, &Event::Key(MenuKey::Enter)).unwrap();

    assert_eq!(actions.len(), 2);
    assert!(matches!(&actions[0], Action::ItemActivated { label, .. } if label == "Copy"));
    assert_eq!(actions[1], Action::CloseFocus);
}

#[test]
fn test_initialize_applies_a_theme_file() {
    let theme = write_temp(
        ".toml",
        r##"
name = "plain"

[colors]
header_fg = "#ffffff"
selection_fg = "#000000"
selection_bg = "#ffffff"
text_normal = "#dddddd"
text_dim = "#888888"
text_disabled = "#555555"
border = "#444444"
submenu_marker = "#00aaff"
status_fg = "#00ff00"
"##,
    );
    let config = Config {
        theme_file: Some(theme.path().display().to_string()),
        ..Config::default()
    };

    let state = initialize(&config).unwrap();
    assert_eq!(state.theme.name, "plain");
    assert_eq!(state.theme.colors.header_bg, None);
}
