//! **tilerc** — a declarative configuration descriptor for a tiling window
//! manager.
//!
//! The crate builds one static [`Descriptor`](descriptor::Descriptor): key
//! and mouse bindings, nine numbered groups, the layout list and floating
//! rules, a bottom bar full of widgets, and a handful of global flags.
//! Nothing in here lays out windows or draws a bar; that is the host's job.
//!
//! # Architecture
//!
//! The crate is organised around two traits:
//!
//! * [`traits::Host`] — the registration surface a window manager offers,
//!   so the descriptor is not coupled to any specific window manager.
//! * [`traits::CommandTarget`] — what deferred [`action::Action`]s resolve
//!   against when a bound chord fires.
//!
//! [`loader::Loader`] installs a descriptor into any host, [`host`] holds an
//! in-memory recording host, and [`validate`] checks a descriptor for
//! duplicate chords, missing group bindings and malformed bars.

pub mod action;
pub mod bar;
pub mod config;
pub mod descriptor;
pub mod flags;
pub mod groups;
pub mod host;
pub mod keys;
pub mod layout;
pub mod loader;
pub mod mouse;
pub mod palette;
pub mod spawn;
pub mod terminal;
pub mod traits;
pub mod validate;
