pub mod matching;
pub mod rng;
pub mod shuffle;

pub use crate::domain::model::{Pairing, Participant, Reveal, Roster};
pub use crate::domain::ports::{Dialog, YearSource};
pub use crate::utils::error::Result;
