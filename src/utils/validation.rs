use crate::domain::model::Roster;
use crate::utils::error::{Result, WichtelError};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(WichtelError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(WichtelError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_placeholder(field_name: &str, template: &str, placeholder: &str) -> Result<()> {
    if !template.contains(placeholder) {
        return Err(WichtelError::ConfigValidationError {
            field: field_name.to_string(),
            message: format!("Template must contain {}", placeholder),
        });
    }
    Ok(())
}

/// First value that occurs more than once.
fn first_duplicate<'a>(values: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    let mut seen = HashSet::new();
    values.into_iter().find(|value| !seen.insert(*value))
}

impl Validate for Roster {
    fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(WichtelError::RosterIntegrityError {
                message: "roster has no participants".to_string(),
            });
        }

        for (index, participant) in self.participants().iter().enumerate() {
            if participant.name.trim().is_empty() {
                return Err(WichtelError::RosterIntegrityError {
                    message: format!("participant #{} has an empty name", index + 1),
                });
            }
            if participant.code.trim().is_empty() {
                return Err(WichtelError::RosterIntegrityError {
                    message: format!("participant '{}' has an empty code", participant.name),
                });
            }
        }

        if let Some(code) = first_duplicate(self.participants().iter().map(|p| p.code.as_str())) {
            return Err(WichtelError::RosterIntegrityError {
                message: format!("code '{}' is assigned to more than one participant", code),
            });
        }

        if let Some(name) = first_duplicate(self.participants().iter().map(|p| p.name.as_str())) {
            return Err(WichtelError::RosterIntegrityError {
                message: format!("name '{}' appears more than once", name),
            });
        }

        Ok(())
    }
}
