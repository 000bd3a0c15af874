//! Set properties command - rewrites a properties file from a rule set.

use tracing::{debug, info};

use crate::app::AppContext;
use crate::domain::{AppError, ChangeKind, ResolutionRuleSet, RewriteResult, plan_rewrite};
use crate::ports::{EnvLookup, PropertiesStore};

/// Execute the set properties command.
///
/// Reads the current file, applies `rules`, and replaces the file only when at
/// least one property value changed. A rejected value aborts before any write.
pub fn execute<E: EnvLookup, S: PropertiesStore>(
    ctx: &AppContext<E, S>,
    rules: &ResolutionRuleSet,
) -> Result<RewriteResult, AppError> {
    let store = ctx.store();
    let existing = store.read()?.unwrap_or_default();

    let result = plan_rewrite(&existing, rules, ctx.env())?;

    if !result.is_modified() {
        debug!(path = %store.path().display(), "No property changes needed");
        return Ok(result);
    }

    for change in result.changes() {
        let verb = match change.kind {
            ChangeKind::Updated => "Setting",
            ChangeKind::Appended => "Adding",
        };
        info!("{} {} to {} in {}", verb, change.property, change.value, store.path().display());
    }

    store.replace(&result.content())?;
    Ok(result)
}
