use thiserror::Error;

use crate::models::Skill;

#[derive(Error, Debug)]
pub enum CoachError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    #[error("Unknown skill: {0}")]
    UnknownSkill(String),
    #[error("Workout not found: {0}")]
    WorkoutNotFound(String),
    #[error("Progression node not found in {skill} tree: {node_id}")]
    NodeNotFound { skill: Skill, node_id: String },
    #[error("Duplicate id: {0}")]
    DuplicateId(String),
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoachError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        CoachError::Validation {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CoachError>;
