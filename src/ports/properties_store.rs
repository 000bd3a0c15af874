use std::path::Path;

use crate::domain::AppError;

/// Storage holding the properties file being rewritten.
pub trait PropertiesStore {
    /// Location of the file, for diagnostics.
    fn path(&self) -> &Path;

    /// Current content, or `None` when the file does not exist yet.
    fn read(&self) -> Result<Option<String>, AppError>;

    /// Replace the whole content in one step.
    ///
    /// Implementations must leave the existing content untouched if staging the
    /// new content fails.
    fn replace(&self, content: &str) -> Result<(), AppError>;
}
