use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::Employee;

/// Errors that can occur when loading a roster file.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Failed to read roster file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse roster file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Roster file '{path}' lists employee id '{id}' more than once")]
    DuplicateId { path: PathBuf, id: String },
}

/// Loads a JSON array of employees.
///
/// Ids must be unique: selection is tracked by id, so duplicates would make
/// two rows indistinguishable.
pub fn load_roster(path: &Path) -> Result<Vec<Employee>, RosterError> {
    let content = fs::read_to_string(path).map_err(|e| RosterError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let roster: Vec<Employee> =
        serde_json::from_str(&content).map_err(|e| RosterError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

    let mut seen = HashSet::new();
    for employee in &roster {
        if !seen.insert(employee.id.as_str()) {
            return Err(RosterError::DuplicateId {
                path: path.to_path_buf(),
                id: employee.id.clone(),
            });
        }
    }

    tracing::debug!("Loaded {} employees from {}", roster.len(), path.display());
    Ok(roster)
}
