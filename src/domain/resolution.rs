//! Value resolution: environment variable → optional remap → allow-list check.

use crate::domain::{AppError, ResolutionRule};
use crate::ports::EnvLookup;

/// Outcome of resolving one rule against the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Source variable is unset or empty; leave the property alone.
    Skip,
    /// Resolved (and possibly remapped) value.
    Value(String),
    /// Resolved value is not on the allow-list.
    Rejected { value: String, allowed: Vec<String> },
}

impl Resolution {
    /// Collapse into the value to write, if any.
    ///
    /// An empty value is never written, so it is treated like `Skip`. A value
    /// spanning several lines cannot be written as one assignment.
    pub fn into_value(self, property: &str) -> Result<Option<String>, AppError> {
        match self {
            Resolution::Skip => Ok(None),
            Resolution::Value(value) if value.is_empty() => Ok(None),
            Resolution::Value(value) if value.contains(['\n', '\r']) => {
                Err(AppError::UnwritableValue { property: property.to_string(), value })
            }
            Resolution::Value(value) => Ok(Some(value)),
            Resolution::Rejected { value, allowed } => {
                Err(AppError::ValueNotAllowed { property: property.to_string(), value, allowed })
            }
        }
    }
}

/// Resolve `rule` against `env`.
pub fn resolve(rule: &ResolutionRule, env: &impl EnvLookup) -> Resolution {
    let raw = match env.get(&rule.env) {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Resolution::Skip,
    };

    let value = rule.map_value(&raw).to_string();
    if rule.is_allowed(&value) {
        Resolution::Value(value)
    } else {
        Resolution::Rejected { value, allowed: rule.allowed.clone().unwrap_or_default() }
    }
}
