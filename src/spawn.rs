//! Fire-and-forget process launching for [`Action::Spawn`](crate::action::Action::Spawn).
//!
//! The command line is split the way a POSIX shell would split plain words
//! and quotes, then executed directly.  Pipes, globbing and variable
//! expansion are not supported; wrap the command in `sh -c '…'` for those.

use log::debug;
use std::process::{Command, Stdio};

/// Errors from launching a process.
#[derive(Debug, thiserror::Error)]
pub enum SpawnError {
    #[error("empty command")]
    Empty,
    #[error("unterminated quote in {0:?}")]
    UnterminatedQuote(String),
    #[error("trailing backslash in {0:?}")]
    TrailingBackslash(String),
    #[error("failed to start {program}: {source}")]
    Io {
        program: String,
        source: std::io::Error,
    },
}

/// Split `cmd` into words.
///
/// Single quotes are literal, double quotes allow `\"` and `\\`, and a
/// backslash outside quotes escapes the next character and may not end the
/// command.
pub fn split_command(cmd: &str) -> Result<Vec<String>, SpawnError> {
    let mut words = Vec::new();
    let mut word = String::new();
    let mut in_word = false;
    let mut chars = cmd.chars();

    while let Some(c) = chars.next() {
        match c {
            c if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut word));
                    in_word = false;
                }
            }
            '\'' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(c) => word.push(c),
                        None => return Err(SpawnError::UnterminatedQuote(cmd.into())),
                    }
                }
            }
            '"' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(c @ ('"' | '\\')) => word.push(c),
                            Some(c) => {
                                word.push('\\');
                                word.push(c);
                            }
                            None => return Err(SpawnError::UnterminatedQuote(cmd.into())),
                        },
                        Some(c) => word.push(c),
                        None => return Err(SpawnError::UnterminatedQuote(cmd.into())),
                    }
                }
            }
            '\\' => {
                in_word = true;
                match chars.next() {
                    Some(c) => word.push(c),
                    None => return Err(SpawnError::TrailingBackslash(cmd.into())),
                }
            }
            c => {
                in_word = true;
                word.push(c);
            }
        }
    }
    if in_word {
        words.push(word);
    }
    Ok(words)
}

/// Start `cmd` detached from our stdio and return its pid.
///
/// The child is never waited on; its exit status is not observed.
pub fn spawn(cmd: &str) -> Result<u32, SpawnError> {
    let words = split_command(cmd)?;
    let (program, args) = words.split_first().ok_or(SpawnError::Empty)?;
    let child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| SpawnError::Io {
            program: program.clone(),
            source,
        })?;
    debug!("spawned {:?} as pid {}", cmd, child.id());
    Ok(child.id())
}
