//! Computes the new content of a properties file from a rule set.
//!
//! Planning is pure: it never touches the filesystem, so a rejected value
//! aborts before anything is written.

use std::collections::HashSet;

use crate::domain::property_line::{PropertyLine, format_assignment};
use crate::domain::resolution::resolve;
use crate::domain::{AppError, ResolutionRuleSet};
use crate::ports::EnvLookup;

/// How a property ended up in the new content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// An existing line was rewritten.
    Updated,
    /// The property was missing and got appended.
    Appended,
}

/// A single property value that differs from the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyChange {
    pub property: String,
    pub value: String,
    pub kind: ChangeKind,
}

/// Outcome of planning a rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteResult {
    lines: Vec<String>,
    changes: Vec<PropertyChange>,
}

impl RewriteResult {
    /// Whether committing this result would change the file.
    pub fn is_modified(&self) -> bool {
        !self.changes.is_empty()
    }

    pub fn changes(&self) -> &[PropertyChange] {
        &self.changes
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Full file content, every line newline-terminated.
    pub fn content(&self) -> String {
        let mut content = String::with_capacity(self.lines.iter().map(|l| l.len() + 1).sum());
        for line in &self.lines {
            content.push_str(line);
            content.push('\n');
        }
        content
    }
}

/// Apply `rules` to `existing` content.
///
/// Only the first assignment of a property is considered; later duplicates are
/// copied through like any other line. A line already in canonical form for the
/// resolved value is left alone even when the value does not read back intact.
pub fn plan_rewrite(
    existing: &str,
    rules: &ResolutionRuleSet,
    env: &impl EnvLookup,
) -> Result<RewriteResult, AppError> {
    rules.validate()?;

    let mut seen: HashSet<&str> = HashSet::new();
    let mut lines = Vec::new();
    let mut changes = Vec::new();

    for raw in existing.lines() {
        let line = PropertyLine::parse(raw);
        let PropertyLine::Assignment { key, value: current, .. } = line else {
            lines.push(raw.to_string());
            continue;
        };

        let Some((property, rule)) = rules.get_key_value(key) else {
            lines.push(raw.to_string());
            continue;
        };
        if !seen.insert(property) {
            lines.push(raw.to_string());
            continue;
        }

        let Some(value) = resolve(rule, env).into_value(property)? else {
            lines.push(raw.to_string());
            continue;
        };
        let canonical = format_assignment(property, &value);
        if value == current || raw.trim() == canonical.trim() {
            lines.push(raw.to_string());
            continue;
        }
        lines.push(canonical);
        changes.push(PropertyChange {
            property: property.to_string(),
            value,
            kind: ChangeKind::Updated,
        });
    }

    for (property, rule) in rules.iter().filter(|(name, _)| !seen.contains(name)) {
        if let Some(value) = resolve(rule, env).into_value(property)? {
            lines.push(format_assignment(property, &value));
            changes.push(PropertyChange {
                property: property.to_string(),
                value,
                kind: ChangeKind::Appended,
            });
        }
    }

    Ok(RewriteResult { lines, changes })
}
