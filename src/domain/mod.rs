pub mod error;
pub mod property_line;
pub mod resolution;
pub mod resolution_rule;
pub mod rewrite;
pub mod version;

pub use error::AppError;
pub use property_line::PropertyLine;
pub use resolution::{Resolution, resolve};
pub use resolution_rule::{ResolutionRule, ResolutionRuleSet, parse_mapping};
pub use rewrite::{ChangeKind, PropertyChange, RewriteResult, plan_rewrite};
pub use version::BuildInfo;
