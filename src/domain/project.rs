use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Opaque unique identifier for a project
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    /// Generates a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ProjectId {
    type Err = crate::error::BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Ids travel through drag payloads as plain text, so any non-blank
        // string is accepted verbatim.
        if s.trim().is_empty() {
            Err(crate::error::BoardError::InvalidProjectId(s.to_string()))
        } else {
            Ok(Self(s.to_string()))
        }
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Column a project lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Finished,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 2] = [ProjectStatus::Active, ProjectStatus::Finished];

    /// Lowercase form used in element ids and serialized data
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::Finished => write!(f, "Finished"),
        }
    }
}

impl FromStr for ProjectStatus {
    type Err = crate::error::BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "finished" => Ok(Self::Finished),
            _ => Err(crate::error::BoardError::InvalidStatus(s.to_string())),
        }
    }
}

/// A project on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub people: u32,
    pub status: ProjectStatus,
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Creates a new active project with a freshly generated id
    pub fn new(title: String, description: String, people: u32) -> Self {
        Self {
            id: ProjectId::generate(),
            title,
            description,
            people,
            status: ProjectStatus::Active,
            created_at: Utc::now(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == ProjectStatus::Active
    }

    /// Sets the status, returning whether it actually changed
    pub(crate) fn set_status(&mut self, status: ProjectStatus) -> bool {
        if self.status == status {
            return false;
        }
        self.status = status;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        let a = ProjectId::generate();
        let b = ProjectId::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 36);
    }

    #[test]
    fn test_project_id_parsing() {
        let id = ProjectId::from_str("0.4221").unwrap();
        assert_eq!(id.as_str(), "0.4221");

        assert!(ProjectId::from_str("").is_err());
        assert!(ProjectId::from_str("   ").is_err());
    }

    #[test]
    fn test_status_parsing_and_display() {
        assert_eq!(ProjectStatus::from_str("Active").unwrap(), ProjectStatus::Active);
        assert_eq!(
            ProjectStatus::from_str(" FINISHED ").unwrap(),
            ProjectStatus::Finished
        );
        assert!(ProjectStatus::from_str("done").is_err());

        assert_eq!(ProjectStatus::Finished.to_string(), "Finished");
        assert_eq!(ProjectStatus::Finished.as_str(), "finished");
    }

    #[test]
    fn test_new_project_is_active() {
        let project = Project::new("A".to_string(), "desc1".to_string(), 3);
        assert!(project.is_active());
        assert_eq!(project.people, 3);
    }

    #[test]
    fn test_set_status_reports_change() {
        let mut project = Project::new("A".to_string(), "desc1".to_string(), 3);
        assert!(project.set_status(ProjectStatus::Finished));
        assert!(!project.set_status(ProjectStatus::Finished));
        assert_eq!(project.status, ProjectStatus::Finished);
    }

    #[test]
    fn test_project_serialization() {
        let project = Project::new("A".to_string(), "desc1".to_string(), 2);
        let json = serde_json::to_string(&project).unwrap();

        assert!(json.contains("\"status\":\"active\""));
        assert!(json.contains(&format!("\"id\":\"{}\"", project.id)));

        let deserialized: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, project);
    }
}
