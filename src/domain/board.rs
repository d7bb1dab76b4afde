use crate::{
    domain::{project::ProjectStatus, validation::FormRules},
    error::{BoardError, Result},
};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fs, path::Path};

/// Configuration for a board column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub status: ProjectStatus,
}

impl Column {
    pub fn new(name: String, status: ProjectStatus) -> Self {
        Self { name, status }
    }

    /// Column named after its status, e.g. "Active"
    pub fn for_status(status: ProjectStatus) -> Self {
        Self::new(status.to_string(), status)
    }
}

/// Board configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub name: String,
    pub columns: Vec<Column>,
    pub form: FormRules,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: "Projects".to_string(),
            columns: ProjectStatus::ALL
                .iter()
                .copied()
                .map(Column::for_status)
                .collect(),
            form: FormRules::default(),
        }
    }
}

impl BoardConfig {
    /// Parses and validates a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: BoardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&contents)?;
        tracing::debug!(
            path = %path.as_ref().display(),
            columns = config.columns.len(),
            "loaded board config"
        );
        Ok(config)
    }

    /// Rejects boards without columns or with two columns for one status
    pub fn validate(&self) -> Result<()> {
        if self.columns.is_empty() {
            return Err(BoardError::ConfigError(
                "board must have at least one column".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for column in &self.columns {
            if !seen.insert(column.status) {
                return Err(BoardError::ConfigError(format!(
                    "duplicate column for status {}",
                    column.status
                )));
            }
        }
        Ok(())
    }

    /// Gets the column configuration for a status
    pub fn get_column_for_status(&self, status: ProjectStatus) -> Option<&Column> {
        self.columns.iter().find(|col| col.status == status)
    }
}
