//! set-property: conditionally set entries in a key=value properties file from
//! environment variables.
//!
//! Lines are rewritten in place: comments, blank lines and untouched properties
//! are kept verbatim, and the file is replaced only when a value changes.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::AppContext;
pub use app::api::{
    BuildInfo, ChangeKind, PropertyChange, set_bulk_properties, set_properties_in_file,
    set_single_property,
};
pub use domain::{AppError, Resolution, ResolutionRule, ResolutionRuleSet, RewriteResult};
pub use ports::{EnvLookup, PropertiesStore};
