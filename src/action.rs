//! Actions and the supporting vocabulary shared by every binding.
//!
//! An [`Action`] is a deferred call: building the descriptor never runs
//! anything, the host evaluates the action only when the bound chord fires.
//! [`Action::dispatch`] resolves an action against a
//! [`CommandTarget`](crate::traits::CommandTarget).
//!
//! Direction names are parsed leniently ("left", "Left", " LEFT ").

use crate::traits::CommandTarget;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Direction for focus, shuffle and grow commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All four directions in the order the key table binds them.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Down,
        Direction::Up,
    ];

    /// The X keysym for the arrow key pointing this way.
    pub fn keysym(self) -> &'static str {
        match self {
            Direction::Left => "Left",
            Direction::Right => "Right",
            Direction::Up => "Up",
            Direction::Down => "Down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// Parse a direction string (case-insensitive, surrounding whitespace ignored).
fn parse_direction(s: &str) -> Option<Direction> {
    match s.trim().to_lowercase().as_str() {
        "left" => Some(Direction::Left),
        "right" => Some(Direction::Right),
        "up" => Some(Direction::Up),
        "down" => Some(Direction::Down),
        _ => None,
    }
}

impl<'de> Deserialize<'de> for Direction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_direction(&s).ok_or_else(|| DeError::custom(format!("invalid direction: {:?}", s)))
    }
}

/// Commands delegated to whichever layout is currently active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutCommand {
    /// Move focus to the neighbouring window.
    Focus(Direction),
    /// Focus the next window in the layout's own order.
    Next,
    /// Move the focused window, creating a new column when leaving the edge.
    Shuffle(Direction),
    /// Grow the focused window; at a screen edge this shrinks it instead.
    Grow(Direction),
    /// Reset all window sizes.
    Normalize,
    /// Toggle between split and unsplit sides of the stack.
    ToggleSplit,
}

impl fmt::Display for LayoutCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutCommand::Focus(d) => write!(f, "{}", d),
            LayoutCommand::Next => write!(f, "next"),
            LayoutCommand::Shuffle(d) => write!(f, "shuffle_{}", d),
            LayoutCommand::Grow(d) => write!(f, "grow_{}", d),
            LayoutCommand::Normalize => write!(f, "normalize"),
            LayoutCommand::ToggleSplit => write!(f, "toggle_split"),
        }
    }
}

/// Commands applied to the focused window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowCommand {
    Kill,
    /// Send the window to `group`; follow it when `switch_group` is set.
    ToGroup { group: String, switch_group: bool },
    SetPositionFloating,
    SetSizeFloating,
    GetPosition,
    GetSize,
    BringToFront,
}

impl fmt::Display for WindowCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowCommand::Kill => write!(f, "kill"),
            WindowCommand::ToGroup { group, switch_group } => {
                write!(f, "togroup({}, switch_group={})", group, switch_group)
            }
            WindowCommand::SetPositionFloating => write!(f, "set_position_floating"),
            WindowCommand::SetSizeFloating => write!(f, "set_size_floating"),
            WindowCommand::GetPosition => write!(f, "get_position"),
            WindowCommand::GetSize => write!(f, "get_size"),
            WindowCommand::BringToFront => write!(f, "bring_to_front"),
        }
    }
}

/// Every deferred call a binding can carry.
///
/// Serialized with serde's externally tagged representation, so a dumped
/// descriptor reads like `{"Layout":{"Grow":"Left"}}` or `"NextLayout"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Delegate to the active layout.
    Layout(LayoutCommand),

    /// Act on the focused window.
    Window(WindowCommand),

    /// Show the named group on the current screen.
    GroupToScreen(String),

    /// Cycle to the next layout in list order.
    NextLayout,

    /// Launch a process.  The command line is split with shell-like quoting
    /// but no shell is involved.
    Spawn(String),

    /// Re-read the descriptor.
    ReloadConfig,

    /// Stop the host.
    Shutdown,
}

impl Action {
    /// Shorthand for [`Action::Spawn`].
    pub fn spawn(cmd: impl Into<String>) -> Self {
        Action::Spawn(cmd.into())
    }

    /// Evaluate the action against `target`.
    ///
    /// Nothing is retried and spawn results beyond process start are never
    /// observed.
    pub fn dispatch<T: CommandTarget + ?Sized>(&self, target: &mut T) -> Result<(), T::Error> {
        match self {
            Action::Layout(cmd) => target.layout(cmd),
            Action::Window(cmd) => target.window(cmd),
            Action::GroupToScreen(group) => target.group_to_screen(group),
            Action::NextLayout => target.next_layout(),
            Action::Spawn(cmd) => target.spawn(cmd),
            Action::ReloadConfig => target.reload_config(),
            Action::Shutdown => target.shutdown(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Layout(cmd) => write!(f, "layout.{}", cmd),
            Action::Window(cmd) => write!(f, "window.{}", cmd),
            Action::GroupToScreen(g) => write!(f, "group[{}].toscreen", g),
            Action::NextLayout => write!(f, "next_layout"),
            Action::Spawn(cmd) => write!(f, "spawn({:?})", cmd),
            Action::ReloadConfig => write!(f, "reload_config"),
            Action::Shutdown => write!(f, "shutdown"),
        }
    }
}
