//! Tiling layouts and floating-window rules.
//!
//! The layout list order is the cycle order: the first entry is what every
//! group starts with and [`Action::NextLayout`](crate::action::Action::NextLayout)
//! walks forward from there.

use crate::palette::HexColor;
use serde::{Deserialize, Serialize};

/// A tiling algorithm plus its parameters.
///
/// The arrangement itself is done by the host; this only names the
/// algorithm and carries its settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Layout {
    /// Windows stacked in columns; new columns are created on demand.
    Columns {
        margin: u32,
        /// Border colors of a focused window that shares its column.
        border_focus_stack: Vec<HexColor>,
        border_width: u32,
    },
    /// One window at a time, filling the screen.
    Max,
}

impl Layout {
    /// The name the host reports for this layout (and picks an icon by).
    pub fn name(&self) -> &'static str {
        match self {
            Layout::Columns { .. } => "columns",
            Layout::Max => "max",
        }
    }
}

/// Columns first, then max.
pub fn default_layouts() -> Vec<Layout> {
    vec![
        Layout::Columns {
            margin: 8,
            border_focus_stack: vec![
                HexColor::trusted("#d75f5f"),
                HexColor::trusted("#8f3d3d"),
            ],
            border_width: 3,
        },
        Layout::Max,
    ]
}

/// A predicate deciding whether a window floats.
///
/// Matching is exact string comparison.  A host with richer semantics
/// (regexes, substring) is free to interpret the fields its own way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Match {
    /// `WM_CLASS` (either the instance or the class part).
    WmClass(String),
    /// `_NET_WM_NAME` / `WM_NAME`.
    Title(String),
    /// `_NET_WM_WINDOW_TYPE`, lowercased without the prefix (`"dialog"`).
    WmType(String),
    /// `WM_WINDOW_ROLE`.
    Role(String),
    /// Minimum and maximum size hints are equal.
    FixedSize,
    /// Minimum and maximum aspect hints are equal.
    FixedRatio,
}

/// The window properties a [`Match`] can see.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WindowProps {
    pub wm_class: Vec<String>,
    pub title: String,
    pub wm_type: Option<String>,
    pub role: Option<String>,
    pub fixed_size: bool,
    pub fixed_ratio: bool,
}

impl Match {
    pub fn matches(&self, window: &WindowProps) -> bool {
        match self {
            Match::WmClass(c) => window.wm_class.iter().any(|wc| wc == c),
            Match::Title(t) => &window.title == t,
            Match::WmType(t) => window.wm_type.as_deref() == Some(t.as_str()),
            Match::Role(r) => window.role.as_deref() == Some(r.as_str()),
            Match::FixedSize => window.fixed_size,
            Match::FixedRatio => window.fixed_ratio,
        }
    }
}

/// The rules every host ships with: transient window types, a few well
/// known dialog classes, and windows that cannot be resized.
pub fn default_float_rules() -> Vec<Match> {
    let types = ["utility", "notification", "toolbar", "splash", "dialog"];
    let classes = [
        "file_progress",
        "confirm",
        "dialog",
        "download",
        "error",
        "notification",
        "splash",
        "toolbar",
    ];
    types
        .iter()
        .map(|t| Match::WmType(t.to_string()))
        .chain(classes.iter().map(|c| Match::WmClass(c.to_string())))
        .chain([Match::FixedSize, Match::FixedRatio])
        .collect()
}

/// The layout used for floating windows and the rules that send windows
/// there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatingLayout {
    pub float_rules: Vec<Match>,
}

impl FloatingLayout {
    /// The index of the first rule matching `window`, if any.
    pub fn first_match(&self, window: &WindowProps) -> Option<usize> {
        self.float_rules.iter().position(|r| r.matches(window))
    }

    pub fn should_float(&self, window: &WindowProps) -> bool {
        self.first_match(window).is_some()
    }
}

impl Default for FloatingLayout {
    /// The host defaults extended with gitk, ssh-askpass and GPG dialogs.
    fn default() -> Self {
        let mut float_rules = default_float_rules();
        float_rules.extend([
            Match::WmClass("confirmreset".into()), // gitk
            Match::WmClass("makebranch".into()),   // gitk
            Match::WmClass("maketag".into()),      // gitk
            Match::WmClass("ssh-askpass".into()),
            Match::Title("branchdialog".into()), // gitk
            Match::Title("pinentry".into()),     // GPG key password entry
        ]);
        Self { float_rules }
    }
}
