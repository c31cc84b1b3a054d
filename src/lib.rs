//! Secret-partner (Wichtel) draw: resolve a participant's code, shuffle the
//! roster with a year-seeded generator and reveal their partner.
//!
//! The draw is reproducible: anyone who knows the seed year and
//! the roster order can recompute every assignment.

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::roster_config::RosterConfig;
pub use crate::core::matching::{draw_table, drawn_names, MatchingFlow};
pub use crate::core::rng::SeededRandom;
pub use crate::core::shuffle::{find_index, shuffle, shuffle_for_year, shuffled};
pub use crate::domain::messages::Messages;
pub use crate::domain::model::{Pairing, Participant, Reveal, Roster};
pub use crate::utils::error::{Result, WichtelError};
