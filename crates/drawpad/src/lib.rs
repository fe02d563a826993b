//! # Drawpad
//!
//! Command line front end for Drawpad.
//!
//! Ranks exported gallery JSON, renders the web-app manifest and prints the
//! effective configuration.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod commands;

pub use cli::*;
pub use commands::*;
