//! Core traits that decouple the descriptor from any specific window-manager
//! host.
//!
//! A host installs a [`Descriptor`](crate::descriptor::Descriptor) through
//! the [`Host`] trait and later evaluates bound actions against a
//! [`CommandTarget`].  The [`Loader`](crate::loader::Loader) only depends on
//! these abstractions.

use crate::action::{LayoutCommand, WindowCommand};
use crate::bar::Screen;
use crate::flags::GlobalFlags;
use crate::groups::Group;
use crate::keys::KeyBinding;
use crate::layout::{FloatingLayout, Layout};
use crate::mouse::MouseBinding;

/// The registration side of a window-manager host.
///
/// An implementation might forward everything to a running window manager,
/// or it might only record calls, as [`RecordingHost`](crate::host::RecordingHost)
/// does.  Duplicate chords are a host policy: an implementation may
/// overwrite, or refuse with an error.
pub trait Host {
    /// The error type produced by this host.
    type Error: std::error::Error + Send + 'static;

    /// Install one key binding.
    fn bind_key(&mut self, binding: &KeyBinding) -> Result<(), Self::Error>;

    /// Install one mouse binding.
    fn bind_mouse(&mut self, binding: &MouseBinding) -> Result<(), Self::Error>;

    /// Register a group.
    fn add_group(&mut self, group: &Group) -> Result<(), Self::Error>;

    /// Replace the tiling layout list and the floating configuration.
    ///
    /// The first layout becomes the default for every group.
    fn set_layouts(&mut self, layouts: &[Layout], floating: &FloatingLayout)
        -> Result<(), Self::Error>;

    /// Attach a screen (and its bars) to the next output slot.
    fn add_screen(&mut self, screen: &Screen) -> Result<(), Self::Error>;

    /// Apply the global behavior flags.
    fn apply_flags(&mut self, flags: &GlobalFlags) -> Result<(), Self::Error>;

    /// Drop everything installed so far.  Called before a reload.
    fn clear(&mut self);
}

/// The runtime side of a host: what bound actions resolve against when a
/// chord fires.
///
/// [`Action::dispatch`](crate::action::Action::dispatch) maps each action
/// variant onto exactly one of these methods.
pub trait CommandTarget {
    /// The error type produced by this target.
    type Error: std::error::Error + Send + 'static;

    /// Forward a command to the active layout.
    fn layout(&mut self, cmd: &LayoutCommand) -> Result<(), Self::Error>;

    /// Apply a command to the focused window.
    fn window(&mut self, cmd: &WindowCommand) -> Result<(), Self::Error>;

    /// Show `group` on the current screen.
    fn group_to_screen(&mut self, group: &str) -> Result<(), Self::Error>;

    /// Cycle the current group to its next layout.
    fn next_layout(&mut self) -> Result<(), Self::Error>;

    /// Launch a process.  Fire-and-forget.
    fn spawn(&mut self, cmd: &str) -> Result<(), Self::Error>;

    /// Re-read the configuration.
    fn reload_config(&mut self) -> Result<(), Self::Error>;

    /// Stop the host.
    fn shutdown(&mut self) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{Action, Direction};

    //  Mock CommandTarget

    /// A test double that records every call made to it.
    #[derive(Debug, Default)]
    struct MockTarget {
        log: Vec<String>,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("mock error")]
    struct MockError;

    impl CommandTarget for MockTarget {
        type Error = MockError;

        fn layout(&mut self, cmd: &LayoutCommand) -> Result<(), MockError> {
            self.log.push(format!("layout {}", cmd));
            Ok(())
        }

        fn window(&mut self, cmd: &WindowCommand) -> Result<(), MockError> {
            self.log.push(format!("window {}", cmd));
            Ok(())
        }

        fn group_to_screen(&mut self, group: &str) -> Result<(), MockError> {
            self.log.push(format!("group {}", group));
            Ok(())
        }

        fn next_layout(&mut self) -> Result<(), MockError> {
            self.log.push("next_layout".into());
            Ok(())
        }

        fn spawn(&mut self, _cmd: &str) -> Result<(), MockError> {
            Err(MockError)
        }

        fn reload_config(&mut self) -> Result<(), MockError> {
            self.log.push("reload".into());
            Ok(())
        }

        fn shutdown(&mut self) -> Result<(), MockError> {
            self.log.push("shutdown".into());
            Ok(())
        }
    }

    #[test]
    fn dispatch_routes_each_variant() {
        let mut target = MockTarget::default();
        Action::Layout(LayoutCommand::Focus(Direction::Left))
            .dispatch(&mut target)
            .unwrap();
        Action::Window(WindowCommand::Kill).dispatch(&mut target).unwrap();
        Action::GroupToScreen("7".into()).dispatch(&mut target).unwrap();
        Action::NextLayout.dispatch(&mut target).unwrap();
        Action::ReloadConfig.dispatch(&mut target).unwrap();
        Action::Shutdown.dispatch(&mut target).unwrap();
        assert_eq!(
            target.log,
            [
                "layout left",
                "window kill",
                "group 7",
                "next_layout",
                "reload",
                "shutdown"
            ]
        );
    }

    #[test]
    fn dispatch_surfaces_target_errors() {
        let mut target = MockTarget::default();
        assert!(Action::spawn("zotero").dispatch(&mut target).is_err());
        assert!(target.log.is_empty());
    }
}
