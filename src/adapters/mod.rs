// Adapters layer: concrete implementations of the domain ports.

pub mod clock;
pub mod terminal;

pub use clock::{FixedYear, SystemClock};
pub use terminal::TerminalDialog;
