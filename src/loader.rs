//! Installs a [`Descriptor`] into a [`Host`].
//!
//! The [`Loader`] walks the descriptor in the order a host expects it:
//! groups first (so group bindings have a target), then layouts, keys,
//! mouse bindings, screens and finally the global flags.

use crate::descriptor::Descriptor;
use crate::keys::Chord;
use crate::traits::Host;
use log::{debug, info, warn};
use std::fmt;

/// Possible errors from loading.
#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    /// The host refused a group, layout, screen or flag set.
    #[error("host error: {0}")]
    Host(String),
}

/// What a load installed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub keys: usize,
    pub mouse: usize,
    pub groups: usize,
    pub layouts: usize,
    pub screens: usize,
    /// Bindings the host refused, with the reason it gave.
    pub rejected: Vec<(Chord, String)>,
}

impl fmt::Display for LoadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (chord, reason) in &self.rejected {
            writeln!(f, "rejected {}: {}", chord, reason)?;
        }
        write!(
            f,
            "{} keys, {} mouse bindings, {} groups, {} layouts, {} screens",
            self.keys, self.mouse, self.groups, self.layouts, self.screens
        )
    }
}

/// Drives a [`Host`] through installing descriptors.
///
/// Binding refusals are logged and collected in the [`LoadReport`]; any
/// other host failure aborts the load.
///
/// ```ignore
/// let mut loader = Loader::new(RecordingHost::new(DuplicatePolicy::LastWins));
/// let report = loader.load(&Descriptor::build(MOD, "xterm"))?;
/// ```
pub struct Loader<H: Host> {
    host: H,
    loads: usize,
}

impl<H: Host> Loader<H> {
    pub fn new(host: H) -> Self {
        Self { host, loads: 0 }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    /// How many times a descriptor has been installed.
    pub fn loads(&self) -> usize {
        self.loads
    }

    /// Install `descriptor` on top of whatever the host already holds.
    pub fn load(&mut self, descriptor: &Descriptor) -> Result<LoadReport, LoaderError> {
        let mut report = LoadReport::default();
        let host_err = |e: H::Error| LoaderError::Host(e.to_string());

        for group in &descriptor.groups {
            self.host.add_group(group).map_err(host_err)?;
            report.groups += 1;
        }

        self.host
            .set_layouts(&descriptor.layouts, &descriptor.floating_layout)
            .map_err(host_err)?;
        report.layouts = descriptor.layouts.len();

        for key in &descriptor.keys {
            match self.host.bind_key(key) {
                Ok(()) => report.keys += 1,
                Err(e) => {
                    warn!("key {} not bound: {}", key.chord(), e);
                    report.rejected.push((key.chord(), e.to_string()));
                }
            }
        }

        for binding in &descriptor.mouse {
            match self.host.bind_mouse(binding) {
                Ok(()) => report.mouse += 1,
                Err(e) => {
                    warn!("mouse {} not bound: {}", binding.chord(), e);
                    report.rejected.push((binding.chord(), e.to_string()));
                }
            }
        }

        for screen in &descriptor.screens {
            self.host.add_screen(screen).map_err(host_err)?;
            report.screens += 1;
        }

        self.host.apply_flags(&descriptor.flags).map_err(host_err)?;

        self.loads += 1;
        info!("loaded {}", report);
        Ok(report)
    }

    /// Clear the host and install `descriptor` from scratch.
    pub fn reload(&mut self, descriptor: &Descriptor) -> Result<LoadReport, LoaderError> {
        debug!("reloading");
        self.host.clear();
        self.load(descriptor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::bar::Screen;
    use crate::flags::GlobalFlags;
    use crate::groups::Group;
    use crate::host::{DuplicatePolicy, Placement, RecordingHost};
    use crate::keys::{KeyBinding, Modifier, MOD};
    use crate::layout::{FloatingLayout, Layout, WindowProps};
    use crate::mouse::MouseBinding;

    fn descriptor() -> Descriptor {
        Descriptor::build(MOD, "xterm")
    }

    #[test]
    fn end_to_end_counts() {
        let mut loader = Loader::new(RecordingHost::new(DuplicatePolicy::LastWins));
        let report = loader.load(&descriptor()).unwrap();
        // 35 fixed + 2 per group; the host keeps one entry for the doubled chord.
        assert_eq!(report.keys, 35 + 18);
        assert_eq!(loader.host().keys().len(), 52);
        assert_eq!(report.screens, 1);
        assert_eq!(loader.host().screens().len(), 1);
        assert_eq!(report.groups, 9);
        assert_eq!(report.mouse, 3);
        assert!(report.rejected.is_empty());
    }

    #[test]
    fn reject_policy_reports_the_duplicate() {
        let mut loader = Loader::new(RecordingHost::new(DuplicatePolicy::Reject));
        let report = loader.load(&descriptor()).unwrap();
        assert_eq!(report.keys, 52);
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(report.rejected[0].0, Chord::new(&[MOD, Modifier::Control], "r"));
        // The direct reload action was installed first and survives.
        let mut host = loader.into_host();
        host.press(&Chord::new(&[MOD, Modifier::Control], "r")).unwrap();
        assert_eq!(host.reloads(), 1);
        assert!(host.spawned().is_empty());
    }

    #[test]
    fn report_summary() {
        let mut loader = Loader::new(RecordingHost::new(DuplicatePolicy::Reject));
        let report = loader.load(&descriptor()).unwrap();
        assert_eq!(
            report.to_string(),
            "rejected mod4+control+r: mod4+control+r is already bound\n\
             52 keys, 3 mouse bindings, 9 groups, 2 layouts, 1 screens"
        );
    }

    #[test]
    fn last_wins_keeps_the_spawned_reload() {
        let mut loader = Loader::new(RecordingHost::new(DuplicatePolicy::LastWins));
        loader.load(&descriptor()).unwrap();
        let host = loader.host_mut();
        host.press(&Chord::new(&[MOD, Modifier::Control], "r")).unwrap();
        assert_eq!(host.spawned(), ["qtile cmd-obj -o cmd -f reload_config"]);
    }

    #[test]
    fn group_keys_drive_the_host() {
        let mut loader = Loader::new(RecordingHost::new(DuplicatePolicy::LastWins));
        loader.load(&descriptor()).unwrap();
        let host = loader.host_mut();
        host.press(&Chord::new(&[MOD], "5")).unwrap();
        assert_eq!(host.current_group(), Some("5"));
        host.press(&Chord::new(&[MOD, Modifier::Shift], "8")).unwrap();
        assert_eq!(host.current_group(), Some("8"));
        host.press(&Chord::new(&[MOD], "Tab")).unwrap();
        assert_eq!(host.current_layout(), Some("max"));
        host.press(&Chord::new(&[MOD], "Return")).unwrap();
        assert_eq!(host.spawned(), ["xterm"]);
    }

    #[test]
    fn loaded_floating_rules_apply() {
        let mut loader = Loader::new(RecordingHost::new(DuplicatePolicy::LastWins));
        loader.load(&descriptor()).unwrap();
        let w = WindowProps {
            title: "pinentry".into(),
            ..Default::default()
        };
        assert_eq!(loader.host().place_window(&w), Placement::Floating);
        assert_eq!(loader.host().flags().map(|f| f.wmname.as_str()), Some("LG3D"));
    }

    #[test]
    fn reload_does_not_accumulate() {
        let mut loader = Loader::new(RecordingHost::new(DuplicatePolicy::LastWins));
        let d = descriptor();
        loader.load(&d).unwrap();
        let report = loader.reload(&d).unwrap();
        assert_eq!(report.keys, 53);
        assert_eq!(loader.host().keys().len(), 52);
        assert_eq!(loader.host().groups().len(), 9);
        assert_eq!(loader.loads(), 2);
    }

    //  Failing host

    /// A host that refuses screens.
    #[derive(Default)]
    struct NoScreens {
        keys: usize,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("no outputs")]
    struct NoOutputs;

    impl Host for NoScreens {
        type Error = NoOutputs;

        fn bind_key(&mut self, _: &KeyBinding) -> Result<(), NoOutputs> {
            self.keys += 1;
            Ok(())
        }

        fn bind_mouse(&mut self, _: &MouseBinding) -> Result<(), NoOutputs> {
            Ok(())
        }

        fn add_group(&mut self, _: &Group) -> Result<(), NoOutputs> {
            Ok(())
        }

        fn set_layouts(&mut self, _: &[Layout], _: &FloatingLayout) -> Result<(), NoOutputs> {
            Ok(())
        }

        fn add_screen(&mut self, _: &Screen) -> Result<(), NoOutputs> {
            Err(NoOutputs)
        }

        fn apply_flags(&mut self, _: &GlobalFlags) -> Result<(), NoOutputs> {
            Ok(())
        }

        fn clear(&mut self) {
            self.keys = 0;
        }
    }

    #[test]
    fn screen_failure_aborts_load() {
        let mut loader = Loader::new(NoScreens::default());
        let err = loader.load(&descriptor()).unwrap_err();
        assert_eq!(err.to_string(), "host error: no outputs");
        assert_eq!(loader.loads(), 0);
        // Bindings were already installed before the failure.
        assert_eq!(loader.host().keys, 53);
    }

    #[test]
    fn loading_never_dispatches() {
        let mut loader = Loader::new(RecordingHost::new(DuplicatePolicy::LastWins));
        loader.load(&descriptor()).unwrap();
        assert!(loader.host().spawned().is_empty());
        assert!(loader
            .host()
            .keys()
            .iter()
            .any(|k| k.action == Action::Shutdown));
    }
}
