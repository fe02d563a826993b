//! # Drawpad State
//!
//! Observable application state for Drawpad.
//!
//! Each piece of UI state lives in a [`Store`], a value container with
//! `get`/`set`/`update` and change subscriptions. [`AppState`] bundles the
//! pad, gallery and dialog state built from a loaded configuration.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod cooldown;
pub mod dialog;
pub mod gallery;
pub mod pad;
pub mod store;

pub use app::*;
pub use cooldown::*;
pub use dialog::*;
pub use gallery::*;
pub use pad::*;
pub use store::*;
