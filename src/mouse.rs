//! Mouse bindings.

use crate::action::{Action, WindowCommand};
use crate::keys::{Chord, Modifier};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A pointer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    Button1,
    Button2,
    Button3,
    Button4,
    Button5,
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A drag or click bound to a modifier set plus a button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseBinding {
    /// `action` runs on every motion event; `start` runs once when the
    /// button goes down and seeds the drag origin.
    Drag {
        modifiers: Vec<Modifier>,
        button: Button,
        action: Action,
        start: Option<Action>,
    },
    Click {
        modifiers: Vec<Modifier>,
        button: Button,
        action: Action,
    },
}

impl MouseBinding {
    pub fn action(&self) -> &Action {
        match self {
            MouseBinding::Drag { action, .. } | MouseBinding::Click { action, .. } => action,
        }
    }

    pub fn chord(&self) -> Chord {
        match self {
            MouseBinding::Drag {
                modifiers, button, ..
            }
            | MouseBinding::Click {
                modifiers, button, ..
            } => Chord::new(modifiers, button.to_string()),
        }
    }
}

/// Move floating windows with button 1, resize with button 3, raise with
/// button 2.
pub fn default_mouse(modifier: Modifier) -> Vec<MouseBinding> {
    vec![
        MouseBinding::Drag {
            modifiers: vec![modifier],
            button: Button::Button1,
            action: Action::Window(WindowCommand::SetPositionFloating),
            start: Some(Action::Window(WindowCommand::GetPosition)),
        },
        MouseBinding::Drag {
            modifiers: vec![modifier],
            button: Button::Button3,
            action: Action::Window(WindowCommand::SetSizeFloating),
            start: Some(Action::Window(WindowCommand::GetSize)),
        },
        MouseBinding::Click {
            modifiers: vec![modifier],
            button: Button::Button2,
            action: Action::Window(WindowCommand::BringToFront),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::MOD;

    #[test]
    fn three_bindings_on_distinct_buttons() {
        let mouse = default_mouse(MOD);
        let chords: Vec<String> = mouse.iter().map(|m| m.chord().to_string()).collect();
        assert_eq!(chords, ["mod4+Button1", "mod4+Button3", "mod4+Button2"]);
    }

    #[test]
    fn drags_seed_their_origin() {
        let mouse = default_mouse(MOD);
        match &mouse[1] {
            MouseBinding::Drag { start, action, .. } => {
                assert_eq!(start, &Some(Action::Window(WindowCommand::GetSize)));
                assert_eq!(action, &Action::Window(WindowCommand::SetSizeFloating));
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(mouse[2].action(), &Action::Window(WindowCommand::BringToFront));
    }
}
