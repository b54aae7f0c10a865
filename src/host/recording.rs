//! A simulated [`Host`] that records what it is given.
//!
//! Runtime behavior is reduced to bookkeeping: layout commands are logged,
//! group switches move the current group, layout cycling advances an index
//! and spawns are recorded (or really launched when live spawning is on).

use crate::action::{LayoutCommand, WindowCommand};
use crate::bar::Screen;
use crate::flags::GlobalFlags;
use crate::groups::Group;
use crate::keys::{Chord, KeyBinding};
use crate::layout::{FloatingLayout, Layout, WindowProps};
use crate::mouse::MouseBinding;
use crate::spawn::{spawn, SpawnError};
use crate::traits::{CommandTarget, Host};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// What to do when a chord is bound a second time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// The later binding replaces the earlier one.
    #[default]
    LastWins,
    /// The later binding is refused with [`HostError::DuplicateChord`].
    Reject,
}

/// Errors produced by the simulated host.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("{0} is already bound")]
    DuplicateChord(Chord),
    #[error("nothing bound to {0}")]
    Unbound(Chord),
    #[error("unknown group: {0}")]
    UnknownGroup(String),
    #[error("host is shut down")]
    ShutDown,
    #[error("spawn failed: {0}")]
    Spawn(#[from] SpawnError),
}

/// Where a new window ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Floating,
    Tiled,
}

/// An in-memory window-manager host.
#[derive(Debug, Default)]
pub struct RecordingHost {
    policy: DuplicatePolicy,
    live_spawn: bool,

    keys: Vec<KeyBinding>,
    mouse: Vec<MouseBinding>,
    groups: Vec<Group>,
    layouts: Vec<Layout>,
    floating: Option<FloatingLayout>,
    screens: Vec<Screen>,
    flags: Option<GlobalFlags>,

    current_group: Option<String>,
    layout_index: HashMap<String, usize>,
    log: Vec<String>,
    spawned: Vec<String>,
    reloads: usize,
    shut_down: bool,
}

impl RecordingHost {
    pub fn new(policy: DuplicatePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Launch spawned commands for real instead of only recording them.
    pub fn with_live_spawn(mut self) -> Self {
        self.live_spawn = true;
        self
    }

    pub fn keys(&self) -> &[KeyBinding] {
        &self.keys
    }

    pub fn mouse(&self) -> &[MouseBinding] {
        &self.mouse
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn screens(&self) -> &[Screen] {
        &self.screens
    }

    pub fn flags(&self) -> Option<&GlobalFlags> {
        self.flags.as_ref()
    }

    /// Every layout and window command received, in order.
    pub fn log(&self) -> &[String] {
        &self.log
    }

    /// Every command line passed to spawn, in order.
    pub fn spawned(&self) -> &[String] {
        &self.spawned
    }

    pub fn reloads(&self) -> usize {
        self.reloads
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    pub fn current_group(&self) -> Option<&str> {
        self.current_group.as_deref()
    }

    /// Name of the active layout on the current group.
    pub fn current_layout(&self) -> Option<&'static str> {
        let group = self.current_group.as_ref()?;
        let index = self.layout_index.get(group).copied().unwrap_or(0);
        self.layouts.get(index).map(|l| l.name())
    }

    /// Fire the key binding for `chord`.
    pub fn press(&mut self, chord: &Chord) -> Result<(), HostError> {
        let action = self
            .keys
            .iter()
            .find(|k| &k.chord() == chord)
            .map(|k| k.action.clone())
            .ok_or_else(|| HostError::Unbound(chord.clone()))?;
        debug!("{} -> {}", chord, action);
        action.dispatch(self)
    }

    /// Fire the mouse binding for `chord`.  A drag runs its start action
    /// first.
    pub fn click(&mut self, chord: &Chord) -> Result<(), HostError> {
        let binding = self
            .mouse
            .iter()
            .find(|m| &m.chord() == chord)
            .cloned()
            .ok_or_else(|| HostError::Unbound(chord.clone()))?;
        if let MouseBinding::Drag {
            start: Some(start), ..
        } = &binding
        {
            start.dispatch(self)?;
        }
        binding.action().dispatch(self)
    }

    /// Decide whether a new window floats.
    pub fn place_window(&self, window: &WindowProps) -> Placement {
        match &self.floating {
            Some(f) if f.should_float(window) => Placement::Floating,
            _ => Placement::Tiled,
        }
    }

    fn ensure_running(&self) -> Result<(), HostError> {
        if self.shut_down {
            Err(HostError::ShutDown)
        } else {
            Ok(())
        }
    }

    fn ensure_group(&self, name: &str) -> Result<(), HostError> {
        if self.groups.iter().any(|g| g.name == name) {
            Ok(())
        } else {
            Err(HostError::UnknownGroup(name.into()))
        }
    }
}

impl Host for RecordingHost {
    type Error = HostError;

    fn bind_key(&mut self, binding: &KeyBinding) -> Result<(), HostError> {
        let chord = binding.chord();
        match self.keys.iter().position(|k| k.chord() == chord) {
            Some(_) if self.policy == DuplicatePolicy::Reject => {
                Err(HostError::DuplicateChord(chord))
            }
            Some(i) => {
                warn!("{} rebound, replacing {}", chord, self.keys[i].action);
                self.keys[i] = binding.clone();
                Ok(())
            }
            None => {
                self.keys.push(binding.clone());
                Ok(())
            }
        }
    }

    fn bind_mouse(&mut self, binding: &MouseBinding) -> Result<(), HostError> {
        let chord = binding.chord();
        match self.mouse.iter().position(|m| m.chord() == chord) {
            Some(_) if self.policy == DuplicatePolicy::Reject => {
                Err(HostError::DuplicateChord(chord))
            }
            Some(i) => {
                warn!("{} rebound, replacing {}", chord, self.mouse[i].action());
                self.mouse[i] = binding.clone();
                Ok(())
            }
            None => {
                self.mouse.push(binding.clone());
                Ok(())
            }
        }
    }

    fn add_group(&mut self, group: &Group) -> Result<(), HostError> {
        self.groups.push(group.clone());
        if self.current_group.is_none() {
            self.current_group = Some(group.name.clone());
        }
        Ok(())
    }

    fn set_layouts(&mut self, layouts: &[Layout], floating: &FloatingLayout) -> Result<(), HostError> {
        self.layouts = layouts.to_vec();
        self.floating = Some(floating.clone());
        self.layout_index.clear();
        Ok(())
    }

    fn add_screen(&mut self, screen: &Screen) -> Result<(), HostError> {
        self.screens.push(screen.clone());
        Ok(())
    }

    fn apply_flags(&mut self, flags: &GlobalFlags) -> Result<(), HostError> {
        info!("reporting window manager name {:?}", flags.wmname);
        self.flags = Some(flags.clone());
        Ok(())
    }

    fn clear(&mut self) {
        self.keys.clear();
        self.mouse.clear();
        self.groups.clear();
        self.layouts.clear();
        self.floating = None;
        self.screens.clear();
        self.flags = None;
        self.current_group = None;
        self.layout_index.clear();
    }
}

impl CommandTarget for RecordingHost {
    type Error = HostError;

    fn layout(&mut self, cmd: &LayoutCommand) -> Result<(), HostError> {
        self.ensure_running()?;
        self.log.push(format!("layout.{}", cmd));
        Ok(())
    }

    fn window(&mut self, cmd: &WindowCommand) -> Result<(), HostError> {
        self.ensure_running()?;
        if let WindowCommand::ToGroup { group, switch_group } = cmd {
            self.ensure_group(group)?;
            if *switch_group {
                self.current_group = Some(group.clone());
            }
        }
        self.log.push(format!("window.{}", cmd));
        Ok(())
    }

    fn group_to_screen(&mut self, group: &str) -> Result<(), HostError> {
        self.ensure_running()?;
        self.ensure_group(group)?;
        self.current_group = Some(group.into());
        Ok(())
    }

    fn next_layout(&mut self) -> Result<(), HostError> {
        self.ensure_running()?;
        if self.layouts.is_empty() {
            return Ok(());
        }
        if let Some(group) = &self.current_group {
            let n = self.layouts.len();
            let index = self.layout_index.entry(group.clone()).or_insert(0);
            *index = (*index + 1) % n;
        }
        Ok(())
    }

    fn spawn(&mut self, cmd: &str) -> Result<(), HostError> {
        self.ensure_running()?;
        self.spawned.push(cmd.into());
        if self.live_spawn {
            spawn(cmd)?;
        }
        Ok(())
    }

    fn reload_config(&mut self) -> Result<(), HostError> {
        self.ensure_running()?;
        self.reloads += 1;
        Ok(())
    }

    fn shutdown(&mut self) -> Result<(), HostError> {
        self.ensure_running()?;
        info!("shutting down");
        self.shut_down = true;
        Ok(())
    }
}
