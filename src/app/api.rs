//! API Facade for the application.
//!
//! These functions read the process environment and operate on files on disk.
//! Use [`crate::app::commands::set_properties::execute`] with a custom
//! [`AppContext`] to inject other environments or stores.

use std::collections::BTreeMap;
use std::path::Path;

use crate::adapters::{FilesystemPropertiesStore, ProcessEnv, load_bulk_definitions};
use crate::app::{AppContext, commands::set_properties};
use crate::domain::{AppError, ResolutionRule, ResolutionRuleSet, RewriteResult};

pub use crate::domain::{BuildInfo, ChangeKind, PropertyChange};

/// Create an `AppContext` for a properties file.
fn create_context(
    file: &Path,
    tmp_dir: Option<&Path>,
) -> AppContext<ProcessEnv, FilesystemPropertiesStore> {
    let store = FilesystemPropertiesStore::new(file)
        .with_scratch_dir(tmp_dir.map(Path::to_path_buf));
    AppContext::new(ProcessEnv, store)
}

/// Apply `rules` to the properties file at `file`.
///
/// `tmp_dir` selects where the rewrite is staged; `None` uses the system temp
/// directory.
pub fn set_properties_in_file(
    file: &Path,
    rules: &ResolutionRuleSet,
    tmp_dir: Option<&Path>,
) -> Result<RewriteResult, AppError> {
    let ctx = create_context(file, tmp_dir);
    set_properties::execute(&ctx, rules)
}

/// Set a single property from the environment variable `env_var`.
pub fn set_single_property(
    file: &Path,
    property: &str,
    env_var: &str,
    mappings: Option<BTreeMap<String, String>>,
    allowed: Option<Vec<String>>,
    tmp_dir: Option<&Path>,
) -> Result<RewriteResult, AppError> {
    let rule = ResolutionRule { env: env_var.to_string(), mappings, allowed };
    set_properties_in_file(file, &ResolutionRuleSet::single(property, rule), tmp_dir)
}

/// Set every property described by the JSON bulk definitions file.
pub fn set_bulk_properties(
    file: &Path,
    bulk_definitions: &Path,
    tmp_dir: Option<&Path>,
) -> Result<RewriteResult, AppError> {
    let rules = load_bulk_definitions(bulk_definitions)?;
    set_properties_in_file(file, &rules, tmp_dir)
}
