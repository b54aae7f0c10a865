//! The assembled configuration descriptor.
//!
//! Field names are the names a host looks up: a missing list simply leaves
//! the corresponding feature disabled.

use crate::bar::{default_screens, Screen, WidgetDefaults};
use crate::config::Config;
use crate::flags::GlobalFlags;
use crate::groups::{default_groups, group_keys, Group};
use crate::keys::{fixed_keys, KeyBinding, Modifier};
use crate::layout::{default_layouts, FloatingLayout, Layout};
use crate::mouse::{default_mouse, MouseBinding};
use crate::palette::Palette;
use crate::terminal::guess_terminal;
use log::{debug, warn};
use serde::Serialize;

/// Launched when no terminal can be detected.
pub const FALLBACK_TERMINAL: &str = "xterm";

/// Everything a host needs at startup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Descriptor {
    pub modifier: Modifier,
    pub terminal: String,
    pub keys: Vec<KeyBinding>,
    pub groups: Vec<Group>,
    pub colors: Palette,
    pub layouts: Vec<Layout>,
    pub widget_defaults: WidgetDefaults,
    pub extension_defaults: WidgetDefaults,
    pub screens: Vec<Screen>,
    pub mouse: Vec<MouseBinding>,
    pub floating_layout: FloatingLayout,
    #[serde(flatten)]
    pub flags: GlobalFlags,
}

impl Descriptor {
    /// Build the descriptor for a given primary modifier and terminal.
    ///
    /// The key list is the fixed table followed by two bindings per group.
    pub fn build(modifier: Modifier, terminal: impl Into<String>) -> Self {
        let terminal = terminal.into();
        let groups = default_groups();
        let mut keys = fixed_keys(modifier, &terminal);
        keys.extend(group_keys(&groups, modifier));

        let colors = Palette::standard();
        let screens = default_screens(&colors);
        let widget_defaults = WidgetDefaults::default();

        debug!(
            "built descriptor: {} keys, {} groups, {} screens",
            keys.len(),
            groups.len(),
            screens.len()
        );

        Self {
            modifier,
            terminal,
            keys,
            groups,
            colors,
            layouts: default_layouts(),
            extension_defaults: widget_defaults.clone(),
            widget_defaults,
            screens,
            mouse: default_mouse(modifier),
            floating_layout: FloatingLayout::default(),
            flags: GlobalFlags::default(),
        }
    }

    /// Build from user settings, detecting the terminal when none is set.
    pub fn from_config(config: &Config) -> Self {
        let terminal = match &config.terminal {
            Some(t) => t.clone(),
            None => guess_terminal(None).unwrap_or_else(|| {
                warn!("falling back to {}", FALLBACK_TERMINAL);
                FALLBACK_TERMINAL.into()
            }),
        };
        Self::build(config.modifier, terminal)
    }
}
