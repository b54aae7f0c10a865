//! Terminal emulator detection.

use log::{debug, warn};
use std::ffi::OsStr;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Checked in order after any explicit preference.
const CANDIDATES: &[&str] = &[
    "roxterm",
    "sakura",
    "hyper",
    "alacritty",
    "terminator",
    "termite",
    "gnome-terminal",
    "konsole",
    "xfce4-terminal",
    "lxterminal",
    "mate-terminal",
    "kitty",
    "yakuake",
    "tilix",
    "guake",
    "eterm",
    "st",
    "urxvt",
    "wezterm",
    "xterm",
    "x-terminal-emulator",
];

/// Find a terminal emulator installed on this machine.
///
/// Tries `preference`, then `$TERMINAL`, then `foot` when running under
/// Wayland, then a fixed list of common terminals.  The first one found on
/// `$PATH` wins.
pub fn guess_terminal(preference: Option<&str>) -> Option<String> {
    let env_terminal = std::env::var("TERMINAL").ok();
    let wayland = std::env::var_os("WAYLAND_DISPLAY").is_some();
    let path = std::env::var_os("PATH").unwrap_or_default();
    guess_terminal_in(preference, env_terminal.as_deref(), wayland, &path)
}

/// [`guess_terminal`] with the environment passed in.
pub fn guess_terminal_in(
    preference: Option<&str>,
    env_terminal: Option<&str>,
    wayland: bool,
    path: &OsStr,
) -> Option<String> {
    let mut candidates: Vec<&str> = Vec::new();
    candidates.extend(preference);
    candidates.extend(env_terminal.filter(|t| !t.is_empty()));
    if wayland {
        candidates.push("foot");
    }
    candidates.extend(CANDIDATES);

    for name in candidates {
        if let Some(found) = which(name, path) {
            debug!("terminal {} found at {}", name, found.display());
            return Some(name.to_string());
        }
    }
    warn!("no terminal emulator found on PATH");
    None
}

/// Locate an executable by name on a `PATH`-style list.  Names containing a
/// slash are checked as-is.
fn which(name: &str, path: &OsStr) -> Option<PathBuf> {
    if name.contains('/') {
        let p = PathBuf::from(name);
        return is_executable(&p).then_some(p);
    }
    std::env::split_paths(path)
        .map(|dir| dir.join(name))
        .find(|p| is_executable(p))
}

fn is_executable(path: &Path) -> bool {
    std::fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Monotonic counter to generate unique directories per test.
    static TEST_ID: AtomicU32 = AtomicU32::new(0);

    /// Helper: a fresh bin directory holding the named executables.
    fn bin_dir(executables: &[&str]) -> PathBuf {
        let id = TEST_ID.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir().join(format!(
            "tilerc-test-{}-{}",
            std::process::id(),
            id
        ));
        std::fs::create_dir_all(&dir).unwrap();
        for name in executables {
            let p = dir.join(name);
            std::fs::write(&p, "#!/bin/sh\n").unwrap();
            std::fs::set_permissions(&p, std::fs::Permissions::from_mode(0o755)).unwrap();
        }
        dir
    }

    fn path_of(dir: &Path) -> OsString {
        std::env::join_paths([dir]).unwrap()
    }

    #[test]
    fn preference_wins() {
        let dir = bin_dir(&["kitty", "xterm"]);
        let found = guess_terminal_in(Some("kitty"), None, false, &path_of(&dir));
        assert_eq!(found.as_deref(), Some("kitty"));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn env_terminal_before_list() {
        let dir = bin_dir(&["alacritty", "wezterm"]);
        let found = guess_terminal_in(None, Some("wezterm"), false, &path_of(&dir));
        assert_eq!(found.as_deref(), Some("wezterm"));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_preference_falls_through() {
        let dir = bin_dir(&["xterm"]);
        let found = guess_terminal_in(Some("nonexistent-term"), None, false, &path_of(&dir));
        assert_eq!(found.as_deref(), Some("xterm"));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn foot_only_under_wayland() {
        let dir = bin_dir(&["foot", "xterm"]);
        let path = path_of(&dir);
        assert_eq!(guess_terminal_in(None, None, true, &path).as_deref(), Some("foot"));
        assert_eq!(guess_terminal_in(None, None, false, &path).as_deref(), Some("xterm"));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn non_executable_files_ignored() {
        let dir = bin_dir(&[]);
        std::fs::write(dir.join("xterm"), "").unwrap();
        assert!(guess_terminal_in(None, None, false, &path_of(&dir)).is_none());
        let _ = std::fs::remove_dir_all(&dir);
    }
}
