//! # Drawpad Ranking
//!
//! Monthly-best ranking for the drawing gallery.
//!
//! Drawings are bucketed by calendar month in a [`RankingZone`] and every
//! drawing whose likes equal its month's positive maximum is flagged with
//! `is_monthly_best`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod month_key;
pub mod monthly_best;

pub use drawpad_common::RankingZone;
pub use month_key::*;
pub use monthly_best::*;
