//! Key bindings.
//!
//! [`fixed_keys`] builds the hand-written part of the key table; the
//! per-group bindings are appended by [`groups::group_keys`](crate::groups::group_keys).

use crate::action::{Action, Direction, LayoutCommand, WindowCommand};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// An X modifier key.
///
/// Variant order is display order: chords print as `mod4+control+r`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Mod1,
    Mod2,
    Mod3,
    Mod4,
    Mod5,
    Shift,
    Lock,
    Control,
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Modifier::Shift => "shift",
            Modifier::Lock => "lock",
            Modifier::Control => "control",
            Modifier::Mod1 => "mod1",
            Modifier::Mod2 => "mod2",
            Modifier::Mod3 => "mod3",
            Modifier::Mod4 => "mod4",
            Modifier::Mod5 => "mod5",
        };
        f.write_str(name)
    }
}

/// Parse a modifier name.  Accepts the common aliases `ctrl`, `alt` and
/// `super` besides the X names.
fn parse_modifier(s: &str) -> Option<Modifier> {
    match s.trim().to_lowercase().as_str() {
        "shift" => Some(Modifier::Shift),
        "lock" => Some(Modifier::Lock),
        "control" | "ctrl" => Some(Modifier::Control),
        "mod1" | "alt" => Some(Modifier::Mod1),
        "mod2" => Some(Modifier::Mod2),
        "mod3" => Some(Modifier::Mod3),
        "mod4" | "super" => Some(Modifier::Mod4),
        "mod5" => Some(Modifier::Mod5),
        _ => None,
    }
}

impl<'de> Deserialize<'de> for Modifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_modifier(&s).ok_or_else(|| DeError::custom(format!("invalid modifier: {:?}", s)))
    }
}

/// The primary modifier used by every binding in the default table.
pub const MOD: Modifier = Modifier::Mod4;

/// A modifier set plus one key or button.
///
/// Modifiers are kept sorted and deduplicated, so two chords compare equal
/// regardless of the order their modifiers were listed in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Chord {
    pub modifiers: Vec<Modifier>,
    pub key: String,
}

impl Chord {
    pub fn new(modifiers: &[Modifier], key: impl Into<String>) -> Self {
        let mut modifiers = modifiers.to_vec();
        modifiers.sort();
        modifiers.dedup();
        Self {
            modifiers,
            key: key.into(),
        }
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for m in &self.modifiers {
            write!(f, "{}+", m)?;
        }
        f.write_str(&self.key)
    }
}

/// Error from parsing a chord such as `"mod4+shift+Left"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChordParseError {
    #[error("chord has no key: {0:?}")]
    MissingKey(String),
    #[error("unknown modifier {modifier:?} in {chord:?}")]
    Modifier { modifier: String, chord: String },
}

impl FromStr for Chord {
    type Err = ChordParseError;

    /// `+`-separated modifiers followed by the key.  The key keeps its case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts: Vec<&str> = s.split('+').map(str::trim).collect();
        let key = match parts.pop() {
            Some(k) if !k.is_empty() => k,
            _ => return Err(ChordParseError::MissingKey(s.into())),
        };
        let modifiers = parts
            .into_iter()
            .map(|m| {
                parse_modifier(m).ok_or_else(|| ChordParseError::Modifier {
                    modifier: m.into(),
                    chord: s.into(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Chord::new(&modifiers, key))
    }
}

/// One entry of the key table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    pub modifiers: Vec<Modifier>,
    /// X keysym name, e.g. `"Return"` or `"XF86AudioMute"`.
    pub key: String,
    pub action: Action,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
}

impl KeyBinding {
    pub fn new(modifiers: &[Modifier], key: impl Into<String>, action: Action) -> Self {
        Self {
            modifiers: modifiers.to_vec(),
            key: key.into(),
            action,
            desc: None,
        }
    }

    /// Attach a human-readable description.
    pub fn desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(desc.into());
        self
    }

    /// The normalized chord this binding triggers on.
    pub fn chord(&self) -> Chord {
        Chord::new(&self.modifiers, self.key.clone())
    }
}

/// Build the fixed part of the key table.
///
/// `modifier` takes the place of the primary modifier and `terminal` is the
/// command launched by `modifier+Return`.
pub fn fixed_keys(modifier: Modifier, terminal: &str) -> Vec<KeyBinding> {
    use Modifier::{Control, Shift};
    let m = modifier;
    let mut keys = Vec::with_capacity(35);

    // Focus movement.
    for d in Direction::ALL {
        let desc = match d {
            Direction::Left | Direction::Right => format!("Move focus to {}", d),
            Direction::Up | Direction::Down => format!("Move focus {}", d),
        };
        keys.push(
            KeyBinding::new(&[m], d.keysym(), Action::Layout(LayoutCommand::Focus(d))).desc(desc),
        );
    }
    keys.push(
        KeyBinding::new(&[m], "space", Action::Layout(LayoutCommand::Next))
            .desc("Move window focus to other window"),
    );

    // Moving out of range in the columns layout creates a new column.
    for d in Direction::ALL {
        let desc = match d {
            Direction::Left | Direction::Right => format!("Move window to the {}", d),
            Direction::Up | Direction::Down => format!("Move window {}", d),
        };
        keys.push(
            KeyBinding::new(&[m, Shift], d.keysym(), Action::Layout(LayoutCommand::Shuffle(d)))
                .desc(desc),
        );
    }

    // At a screen edge, growing towards the edge shrinks the window.
    for d in Direction::ALL {
        let desc = match d {
            Direction::Left | Direction::Right => format!("Grow window to the {}", d),
            Direction::Up | Direction::Down => format!("Grow window {}", d),
        };
        keys.push(
            KeyBinding::new(&[m, Control], d.keysym(), Action::Layout(LayoutCommand::Grow(d)))
                .desc(desc),
        );
    }

    keys.push(
        KeyBinding::new(&[m], "n", Action::Layout(LayoutCommand::Normalize))
            .desc("Reset all window sizes"),
    );
    keys.push(KeyBinding::new(
        &[m],
        "m",
        Action::spawn(r#"amixer -c1 sset "Auto-Mute Mode" Enabled"#),
    ));
    keys.push(KeyBinding::new(&[m], "b", Action::spawn("chromium")));

    // Media keys.
    let media = [
        ("XF86AudioMute", "amixer -c1 sset 'Master' toggle"),
        ("XF86AudioLowerVolume", "amixer -c1 sset 'Master' 5%-"),
        ("XF86AudioRaiseVolume", "amixer -c1 sset 'Master' 5%+"),
        ("XF86MonBrightnessUp", "light -A 10"),
        ("XF86MonBrightnessDown", "light -U 10"),
        ("Print", "flameshot gui"),
    ];
    for (sym, cmd) in media {
        keys.push(KeyBinding::new(&[], sym, Action::spawn(cmd)));
    }

    keys.push(
        KeyBinding::new(&[m, Shift], "Return", Action::Layout(LayoutCommand::ToggleSplit))
            .desc("Toggle between split and unsplit sides of stack"),
    );
    keys.push(KeyBinding::new(&[m], "Return", Action::spawn(terminal)).desc("Launch terminal"));
    keys.push(KeyBinding::new(&[m], "Tab", Action::NextLayout).desc("Toggle between layouts"));
    keys.push(
        KeyBinding::new(&[m], "w", Action::Window(WindowCommand::Kill)).desc("Kill focused window"),
    );
    keys.push(KeyBinding::new(&[m, Control], "r", Action::ReloadConfig).desc("Reload the config"));
    keys.push(KeyBinding::new(&[m, Control], "q", Action::Shutdown).desc("Shut down the window manager"));

    // Launchers.
    keys.push(KeyBinding::new(&[m], "r", Action::spawn("dmenu_run")));
    keys.push(KeyBinding::new(&[m], "e", Action::spawn("emote")));
    keys.push(KeyBinding::new(&[m, Control], "z", Action::spawn("zotero")));
    keys.push(KeyBinding::new(&[m, Control], "n", Action::spawn("notion-app")));
    keys.push(KeyBinding::new(&[m, Control], "m", Action::spawn("mendeley-reference-manager")));
    // Same chord as the direct reload above; `validate` reports it.
    keys.push(KeyBinding::new(
        &[m, Control],
        "r",
        Action::spawn("qtile cmd-obj -o cmd -f reload_config"),
    ));
    keys.push(KeyBinding::new(&[m, Control], "o", Action::spawn("obsidian")));

    keys
}
