//! Resolution rules: how a property's target value is derived from the environment.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::de::Error as _;

use crate::domain::AppError;
use crate::domain::property_line::is_readable_key;

/// Policy for computing one property's value.
///
/// Definition field names are matched case-insensitively, preferring an exact
/// match, so `env`, `Env` and `ENV` all load. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RuleFields")]
pub struct ResolutionRule {
    /// Name of the environment variable supplying the raw value.
    pub env: String,
    /// Optional remapping of raw values to property values.
    pub mappings: Option<BTreeMap<String, String>>,
    /// Optional list of acceptable (post-mapping) values.
    pub allowed: Option<Vec<String>>,
}

/// Raw definition object before field names are resolved.
#[derive(Deserialize)]
#[serde(transparent)]
struct RuleFields(BTreeMap<String, serde_json::Value>);

impl RuleFields {
    fn take<T: serde::de::DeserializeOwned>(
        &mut self,
        name: &str,
    ) -> Result<Option<T>, serde_json::Error> {
        let key = match self.0.contains_key(name) {
            true => name.to_string(),
            false => match self.0.keys().find(|k| k.eq_ignore_ascii_case(name)) {
                Some(key) => key.clone(),
                None => return Ok(None),
            },
        };
        self.0.remove(&key).map(serde_json::from_value).transpose()
    }
}

impl TryFrom<RuleFields> for ResolutionRule {
    type Error = serde_json::Error;

    fn try_from(mut fields: RuleFields) -> Result<Self, Self::Error> {
        let env = fields.take("env")?.ok_or_else(|| serde_json::Error::missing_field("env"))?;
        let mappings = fields.take::<Option<_>>("mappings")?.flatten();
        let allowed = fields.take::<Option<_>>("allowed")?.flatten();
        Ok(Self { env, mappings, allowed })
    }
}

impl ResolutionRule {
    pub fn new(env: impl Into<String>) -> Self {
        Self { env: env.into(), mappings: None, allowed: None }
    }

    pub fn with_mappings(mut self, mappings: BTreeMap<String, String>) -> Self {
        self.mappings = Some(mappings);
        self
    }

    pub fn with_allowed(mut self, allowed: Vec<String>) -> Self {
        self.allowed = Some(allowed);
        self
    }

    /// Apply the value map, passing unmapped values through.
    pub fn map_value<'a>(&'a self, raw: &'a str) -> &'a str {
        self.mappings.as_ref().and_then(|m| m.get(raw)).map(String::as_str).unwrap_or(raw)
    }

    /// An absent or empty allow-list accepts everything.
    pub fn is_allowed(&self, value: &str) -> bool {
        match &self.allowed {
            Some(allowed) if !allowed.is_empty() => allowed.iter().any(|v| v == value),
            _ => true,
        }
    }
}

/// Property name to rule, one unit of rewrite work.
///
/// Ordered so that properties appended to a file land in a stable order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "BTreeMap<String, ResolutionRule>")]
pub struct ResolutionRuleSet {
    rules: BTreeMap<String, ResolutionRule>,
}

impl ResolutionRuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rule set for single-property mode.
    pub fn single(property: impl Into<String>, rule: ResolutionRule) -> Self {
        let mut set = Self::new();
        set.insert(property, rule);
        set
    }

    pub fn insert(&mut self, property: impl Into<String>, rule: ResolutionRule) {
        self.rules.insert(property.into(), rule);
    }

    pub fn get(&self, property: &str) -> Option<&ResolutionRule> {
        self.rules.get(property)
    }

    /// Look up a rule together with the set's own copy of the property name.
    pub fn get_key_value(&self, property: &str) -> Option<(&str, &ResolutionRule)> {
        self.rules.get_key_value(property).map(|(name, rule)| (name.as_str(), rule))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResolutionRule)> {
        self.rules.iter().map(|(name, rule)| (name.as_str(), rule))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Check that every property name reads back as itself once written.
    pub fn validate(&self) -> Result<(), AppError> {
        match self.rules.keys().find(|name| !is_readable_key(name)) {
            Some(name) => Err(AppError::InvalidPropertyName(name.clone())),
            None => Ok(()),
        }
    }
}

impl TryFrom<BTreeMap<String, ResolutionRule>> for ResolutionRuleSet {
    type Error = AppError;

    fn try_from(rules: BTreeMap<String, ResolutionRule>) -> Result<Self, Self::Error> {
        let set = Self { rules };
        set.validate()?;
        Ok(set)
    }
}

impl FromIterator<(String, ResolutionRule)> for ResolutionRuleSet {
    fn from_iter<I: IntoIterator<Item = (String, ResolutionRule)>>(iter: I) -> Self {
        Self { rules: iter.into_iter().collect() }
    }
}

/// Parse a `from=to` value mapping. Only the first `=` separates the two sides.
pub fn parse_mapping(raw: &str) -> Result<(String, String), AppError> {
    match raw.split_once('=') {
        Some((from, to)) if !from.is_empty() => Ok((from.to_string(), to.to_string())),
        _ => Err(AppError::InvalidMapping(raw.to_string())),
    }
}
