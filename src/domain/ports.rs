use crate::utils::error::Result;

/// The user-facing side of a session: blocking notices and a single prompt.
pub trait Dialog {
    fn notify(&mut self, message: &str) -> Result<()>;

    /// Ask for one line of text. `Ok(None)` means the user cancelled.
    fn prompt(&mut self, message: &str, default: &str) -> Result<Option<String>>;
}

/// Where the draw's seed year comes from.
pub trait YearSource {
    fn current_year(&self) -> u32;
}

