//! # Drawpad Config
//!
//! Type-safe configuration management for Drawpad.
//!
//! This crate provides configuration loading (YAML plus environment
//! overrides), validation, lock-free caching, and rendering of the
//! progressive web app manifest.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cache;
pub mod defaults;
pub mod loader;
pub mod manifest;
pub mod schema;
pub mod validator;

pub use cache::*;
pub use loader::*;
pub use manifest::*;
pub use schema::*;
pub use validator::*;
