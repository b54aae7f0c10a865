//! Structural checks over a [`Descriptor`].
//!
//! Nothing here is enforced at build time: the host decides what to do with
//! duplicates and odd layouts.  The checks exist so a descriptor can be
//! vetted before it is handed over.

use crate::action::{Action, WindowCommand};
use crate::descriptor::Descriptor;
use crate::keys::{Chord, Modifier};
use crate::layout::Layout;
use crate::palette::{Palette, PaletteError};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// The host will load this, but the result is probably not intended.
    Warning,
    /// The host will misbehave or a feature will be missing.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// One finding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Issue {
    #[error("{chord} is bound {count} times")]
    DuplicateChord { chord: Chord, count: usize },
    #[error("group {group} has {found} bindings, expected {{mod}}+{group} and {{mod, shift}}+{group}")]
    GroupBindings { group: String, found: usize },
    #[error("binding {chord} targets unknown group {group}")]
    UnknownGroup { chord: Chord, group: String },
    #[error("layout list is empty")]
    NoLayouts,
    #[error("default layout is {0}, expected columns")]
    DefaultLayout(&'static str),
    #[error("palette: {0}")]
    Palette(PaletteError),
    #[error("screen {screen} bar has {count} {kind} widgets, expected exactly one")]
    WidgetCount {
        screen: usize,
        kind: &'static str,
        count: usize,
    },
    #[error("no screens defined")]
    NoScreens,
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::DuplicateChord { .. } | Issue::DefaultLayout(_) => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

/// Run every check and return the findings in a stable order.
pub fn validate(descriptor: &Descriptor) -> Vec<Issue> {
    let mut issues = Vec::new();
    check_chords(descriptor, &mut issues);
    check_groups(descriptor, &mut issues);
    check_layouts(&descriptor.layouts, &mut issues);
    check_palette(&descriptor.colors, &mut issues);
    check_bars(descriptor, &mut issues);
    issues
}

/// Whether any finding is an [`Error`](Severity::Error).
pub fn has_errors(issues: &[Issue]) -> bool {
    issues.iter().any(|i| i.severity() == Severity::Error)
}

fn check_chords(d: &Descriptor, issues: &mut Vec<Issue>) {
    let mut counts: BTreeMap<Chord, usize> = BTreeMap::new();
    for k in &d.keys {
        *counts.entry(k.chord()).or_default() += 1;
    }
    issues.extend(
        counts
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(chord, count)| Issue::DuplicateChord { chord, count }),
    );
}

fn check_groups(d: &Descriptor, issues: &mut Vec<Issue>) {
    for g in &d.groups {
        let mine: Vec<Chord> = d
            .keys
            .iter()
            .filter(|k| targets(&k.action) == Some(&g.name))
            .map(|k| k.chord())
            .collect();
        let found = mine.len();
        let has = |mods: &[Modifier]| mine.contains(&Chord::new(mods, g.name.clone()));
        if found != 2 || !has(&[d.modifier]) || !has(&[d.modifier, Modifier::Shift]) {
            issues.push(Issue::GroupBindings {
                group: g.name.clone(),
                found,
            });
        }
    }

    for k in &d.keys {
        if let Some(group) = targets(&k.action) {
            if !d.groups.iter().any(|g| &g.name == group) {
                issues.push(Issue::UnknownGroup {
                    chord: k.chord(),
                    group: group.clone(),
                });
            }
        }
    }
}

/// The group a binding switches to or sends a window to.
fn targets(action: &Action) -> Option<&String> {
    match action {
        Action::GroupToScreen(g) => Some(g),
        Action::Window(WindowCommand::ToGroup { group, .. }) => Some(group),
        _ => None,
    }
}

fn check_layouts(layouts: &[Layout], issues: &mut Vec<Issue>) {
    match layouts.first() {
        None => issues.push(Issue::NoLayouts),
        Some(Layout::Columns { .. }) => {}
        Some(other) => issues.push(Issue::DefaultLayout(other.name())),
    }
}

fn check_palette(palette: &Palette, issues: &mut Vec<Issue>) {
    if let Err(e) = Palette::from_pairs(palette.iter().map(|(n, c)| (n, c.as_str()))) {
        issues.push(Issue::Palette(e));
    }
}

fn check_bars(d: &Descriptor, issues: &mut Vec<Issue>) {
    if d.screens.is_empty() {
        issues.push(Issue::NoScreens);
    }
    for (screen, s) in d.screens.iter().enumerate() {
        for bar in s.bars() {
            for kind in ["systray", "groupbox"] {
                let count = bar.count(kind);
                if count != 1 {
                    issues.push(Issue::WidgetCount { screen, kind, count });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bar::Widget;
    use crate::keys::{KeyBinding, MOD};

    fn descriptor() -> Descriptor {
        Descriptor::build(MOD, "xterm")
    }

    #[test]
    fn only_the_reload_duplicate_is_reported() {
        let issues = validate(&descriptor());
        assert_eq!(
            issues,
            [Issue::DuplicateChord {
                chord: Chord::new(&[MOD, Modifier::Control], "r"),
                count: 2
            }]
        );
        assert!(!has_errors(&issues));
    }

    #[test]
    fn missing_group_binding_is_an_error() {
        let mut d = descriptor();
        d.keys.retain(|k| !(k.key == "4" && k.modifiers.contains(&Modifier::Shift)));
        let issues = validate(&d);
        assert!(issues.contains(&Issue::GroupBindings {
            group: "4".into(),
            found: 1
        }));
        assert!(has_errors(&issues));
    }

    #[test]
    fn binding_to_unknown_group() {
        let mut d = descriptor();
        d.keys
            .push(KeyBinding::new(&[MOD], "0", Action::GroupToScreen("0".into())));
        assert!(validate(&d)
            .iter()
            .any(|i| matches!(i, Issue::UnknownGroup { group, .. } if group == "0")));
    }

    #[test]
    fn layout_checks() {
        let mut d = descriptor();
        d.layouts.reverse();
        assert!(validate(&d).contains(&Issue::DefaultLayout("max")));
        d.layouts.clear();
        assert!(validate(&d).contains(&Issue::NoLayouts));
    }

    #[test]
    fn second_tray_is_an_error() {
        let mut d = descriptor();
        if let Some(bar) = d.screens[0].bottom.as_mut() {
            bar.widgets.push(Widget::Systray);
        }
        let issues = validate(&d);
        assert!(issues.contains(&Issue::WidgetCount {
            screen: 0,
            kind: "systray",
            count: 2
        }));
    }

    #[test]
    fn issue_messages() {
        let i = Issue::DuplicateChord {
            chord: Chord::new(&[MOD, Modifier::Control], "r"),
            count: 2,
        };
        assert_eq!(i.to_string(), "mod4+control+r is bound 2 times");
        assert_eq!(i.severity(), Severity::Warning);
    }
}
