use crate::domain::ports::YearSource;
use chrono::Datelike;

/// Current year from the local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl YearSource for SystemClock {
    fn current_year(&self) -> u32 {
        // years before 1 CE never come out of the local clock
        chrono::Local::now().year().max(1) as u32
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedYear(pub u32);

impl YearSource for FixedYear {
    fn current_year(&self) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_plausible() {
        assert!(SystemClock.current_year() >= 2024);
    }

    #[test]
    fn test_fixed_year() {
        assert_eq!(FixedYear(2017).current_year(), 2017);
    }
}
