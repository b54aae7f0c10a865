//! Groups (workspaces) and the bindings generated for them.

use crate::action::{Action, WindowCommand};
use crate::keys::{KeyBinding, Modifier};
use serde::{Deserialize, Serialize};

/// A named workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Groups `"1"` through `"9"`.
pub fn default_groups() -> Vec<Group> {
    "123456789".chars().map(|c| Group::new(c.to_string())).collect()
}

/// Two bindings per group: `modifier+<name>` switches to the group and
/// `modifier+shift+<name>` moves the focused window there and follows it.
///
/// The key symbol is the group name itself, so names must be valid keysyms.
pub fn group_keys(groups: &[Group], modifier: Modifier) -> Vec<KeyBinding> {
    groups
        .iter()
        .flat_map(|g| {
            [
                KeyBinding::new(&[modifier], g.name.clone(), Action::GroupToScreen(g.name.clone()))
                    .desc(format!("Switch to group {}", g.name)),
                KeyBinding::new(
                    &[modifier, Modifier::Shift],
                    g.name.clone(),
                    Action::Window(WindowCommand::ToGroup {
                        group: g.name.clone(),
                        switch_group: true,
                    }),
                )
                .desc(format!("Switch to & move focused window to group {}", g.name)),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::MOD;

    #[test]
    fn nine_groups_named_by_digit() {
        let names: Vec<String> = default_groups().into_iter().map(|g| g.name).collect();
        assert_eq!(names, ["1", "2", "3", "4", "5", "6", "7", "8", "9"]);
    }

    #[test]
    fn two_bindings_per_group() {
        let groups = default_groups();
        let keys = group_keys(&groups, MOD);
        assert_eq!(keys.len(), 18);
        for g in &groups {
            let mine: Vec<&KeyBinding> = keys.iter().filter(|k| k.key == g.name).collect();
            assert_eq!(mine.len(), 2);
            assert_eq!(mine[0].modifiers, [MOD]);
            assert_eq!(mine[0].action, Action::GroupToScreen(g.name.clone()));
            assert_eq!(mine[1].modifiers, [MOD, Modifier::Shift]);
        }
    }

    #[test]
    fn descriptions_name_the_group() {
        let keys = group_keys(&[Group::new("5")], MOD);
        assert_eq!(keys[0].desc.as_deref(), Some("Switch to group 5"));
        assert_eq!(
            keys[1].desc.as_deref(),
            Some("Switch to & move focused window to group 5")
        );
    }
}
