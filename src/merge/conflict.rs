use serde::{Deserialize, Serialize};

use crate::model::Status;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    TitleConflict,
    DescriptionConflict,
    StatusConflict,
}

impl std::fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TitleConflict => write!(f, "title_conflict"),
            Self::DescriptionConflict => write!(f, "description_conflict"),
            Self::StatusConflict => write!(f, "status_conflict"),
        }
    }
}

/// A disagreement surfaced for manual review. The automatic resolution in
/// `chosen_value` has already been applied to the merged record; the entry
/// only adds visibility, it never blocks the merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    pub kind: ConflictKind,
    pub task_id: String,
    pub field: String,
    pub local_value: String,
    pub remote_value: String,
    pub chosen_value: String,
    pub reason: String,
}

impl Conflict {
    pub fn title(task_id: &str, local: &str, remote: &str, chosen: &str) -> Self {
        Self {
            kind: ConflictKind::TitleConflict,
            task_id: task_id.to_string(),
            field: "title".into(),
            local_value: local.to_string(),
            remote_value: remote.to_string(),
            chosen_value: chosen.to_string(),
            reason: "titles differ".into(),
        }
    }

    pub fn description(task_id: &str, local: &str, remote: &str, chosen: &str) -> Self {
        Self {
            kind: ConflictKind::DescriptionConflict,
            task_id: task_id.to_string(),
            field: "description".into(),
            local_value: local.to_string(),
            remote_value: remote.to_string(),
            chosen_value: chosen.to_string(),
            reason: "descriptions differ".into(),
        }
    }

    pub fn status(task_id: &str, local: Status, remote: Status, chosen: Status) -> Self {
        Self {
            kind: ConflictKind::StatusConflict,
            task_id: task_id.to_string(),
            field: "status".into(),
            local_value: local.to_string(),
            remote_value: remote.to_string(),
            chosen_value: chosen.to_string(),
            reason: "significant status change".into(),
        }
    }
}
