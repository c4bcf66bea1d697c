//! Symbolic navigation keys.
//!
//! Platform key codes are the host's business. The state machine only sees
//! these six keys; everything else is dropped before it reaches the menu.

use crate::domain::error::DropdownError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A key the dropdown reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuKey {
    /// Closes the whole dropdown.
    Escape,
    /// Moves the cursor up within the innermost active menu.
    Up,
    /// Moves the cursor down within the innermost active menu.
    Down,
    /// Leaves the innermost nested menu.
    Left,
    /// Drills into the nested menu of the selected item.
    Right,
    /// Activates the selected item, or drills in if it hosts a menu.
    Enter,
}

impl MenuKey {
    /// Symbolic name, matching the DOM `KeyboardEvent.key` values.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Escape => "Escape",
            Self::Up => "ArrowUp",
            Self::Down => "ArrowDown",
            Self::Left => "ArrowLeft",
            Self::Right => "ArrowRight",
            Self::Enter => "Enter",
        }
    }
}

impl FromStr for MenuKey {
    type Err = DropdownError;

    /// Parses a symbolic key name.
    ///
    /// Accepts the DOM names (`ArrowDown`) as well as the short forms
    /// (`Down`, `Esc`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "escape" | "esc" => Ok(Self::Escape),
            "arrowup" | "up" => Ok(Self::Up),
            "arrowdown" | "down" => Ok(Self::Down),
            "arrowleft" | "left" => Ok(Self::Left),
            "arrowright" | "right" => Ok(Self::Right),
            "enter" | "return" => Ok(Self::Enter),
            _ => Err(DropdownError::UnknownKey(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dom_and_short_names() {
        assert_eq!("ArrowUp".parse::<MenuKey>().unwrap(), MenuKey::Up);
        assert_eq!("esc".parse::<MenuKey>().unwrap(), MenuKey::Escape);
        assert_eq!(" Right ".parse::<MenuKey>().unwrap(), MenuKey::Right);
        assert_eq!("Return".parse::<MenuKey>().unwrap(), MenuKey::Enter);
    }

    #[test]
    fn name_round_trips_through_parse() {
        for key in [
            MenuKey::Escape,
            MenuKey::Up,
            MenuKey::Down,
            MenuKey::Left,
            MenuKey::Right,
            MenuKey::Enter,
        ] {
            assert_eq!(key.name().parse::<MenuKey>().unwrap(), key);
        }
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "Tab".parse::<MenuKey>().unwrap_err();
        assert!(matches!(err, DropdownError::UnknownKey(ref k) if k == "Tab"));
    }
}
