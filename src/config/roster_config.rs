use crate::domain::messages::Messages;
use crate::domain::model::{Participant, Roster};
use crate::domain::ports::YearSource;
use crate::utils::error::{Result, WichtelError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const BUILTIN_ROSTER: &str = include_str!("default_roster.toml");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    pub event: EventConfig,
    #[serde(default)]
    pub messages: Messages,
    pub participants: Vec<Participant>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventConfig {
    pub name: String,
    pub organizer: Option<String>,
    /// Pins the seed year; otherwise the current year is used.
    pub year: Option<u32>,
}

impl RosterConfig {
    /// The roster compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_ROSTER)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replace `${VAR}` with the environment value; unset variables stay verbatim.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| WichtelError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn roster(&self) -> Roster {
        self.participants.iter().cloned().collect()
    }

    pub fn organizer(&self) -> &str {
        self.event.organizer.as_deref().unwrap_or_default()
    }

    /// Seed year: explicit override, then `event.year`, then the clock.
    pub fn seed_year(&self, override_year: Option<u32>, years: &impl YearSource) -> u32 {
        override_year
            .or(self.event.year)
            .unwrap_or_else(|| years.current_year())
    }
}

impl Validate for RosterConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("event.name", &self.event.name)?;

        if let Some(year) = self.event.year {
            validation::validate_range("event.year", year, 1, 9999)?;
        }

        validation::validate_placeholder("messages.reveal", &self.messages.reveal, "{partner}")?;

        self.roster().validate()
    }
}
