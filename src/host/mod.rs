//! Host implementations.
//!
//! [`RecordingHost`] is an in-process stand-in for a window manager: it
//! installs a descriptor through the [`Host`](crate::traits::Host) trait and
//! can replay key presses, clicks and window placement against it.

pub mod recording;

pub use recording::{DuplicatePolicy, HostError, Placement, RecordingHost};
