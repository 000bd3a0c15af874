//! Loads bulk definitions from a JSON file.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::domain::{AppError, ResolutionRuleSet};

/// Read a JSON object mapping property names to resolution rules.
pub fn load_bulk_definitions(path: &Path) -> Result<ResolutionRuleSet, AppError> {
    let file = File::open(path)
        .map_err(|source| AppError::BulkDefinitionsRead { path: path.to_path_buf(), source })?;

    serde_json::from_reader(BufReader::new(file))
        .map_err(|source| AppError::BulkDefinitionsParse { path: path.to_path_buf(), source })
}
