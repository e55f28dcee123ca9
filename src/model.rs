use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "snake_case")]
#[clap(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[clap(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Todo,
    InProgress,
    Review,
    Done,
    Cancelled,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Urgent,
    ];
}

impl Status {
    pub const ALL: [Status; 5] = [
        Status::Todo,
        Status::InProgress,
        Status::Review,
        Status::Done,
        Status::Cancelled,
    ];
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
            Self::Urgent => write!(f, "urgent"),
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Todo => write!(f, "todo"),
            Self::InProgress => write!(f, "in_progress"),
            Self::Review => write!(f, "review"),
            Self::Done => write!(f, "done"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// One task record. The `id` is the sole join key when two collections
/// are merged; `updated_at` is the last-writer-wins clock.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub priority: Priority,
    pub status: Status,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Set when the task first transitions to done; retained if it later
    /// moves back out of done, so presence does not imply current status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    /// Presence marks a tombstone. All other fields are retained.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Task {
    pub fn new(title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description: String::new(),
            priority: Priority::default(),
            status: Status::default(),
            tags: BTreeSet::new(),
            due_date: None,
            created_at: now,
            updated_at: now,
            completed_at: None,
            deleted_at: None,
        }
    }

    /// Trim whitespace and drop empty tags.
    pub fn normalize(&mut self) {
        self.tags = self
            .tags
            .iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
    }

    /// Change status, stamping `completed_at` on the transition into done.
    pub fn set_status(&mut self, status: Status, now: DateTime<Utc>) {
        if status == Status::Done && self.status != Status::Done {
            self.completed_at = Some(now);
        }
        self.status = status;
        self.updated_at = now;
    }

    pub fn mark_done(&mut self, now: DateTime<Utc>) {
        self.set_status(Status::Done, now);
    }

    /// Soft-delete: set the tombstone timestamp, keep every other field.
    pub fn mark_deleted(&mut self, now: DateTime<Utc>) {
        self.deleted_at = Some(now);
        self.updated_at = now;
    }

    /// Clear the tombstone.
    pub fn restore(&mut self, now: DateTime<Utc>) {
        self.deleted_at = None;
        self.updated_at = now;
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Past its due date and not done. Tombstones are never overdue.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        if self.is_deleted() || self.status == Status::Done {
            return false;
        }
        self.due_date.is_some_and(|due| due < now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    #[test]
    fn task_round_trips_json() {
        let mut task = Task::new("Test task");
        task.description = "A description".into();
        task.tags = ["backend".to_string()].into();
        task.due_date = Some(Utc::now());

        let json = serde_json::to_string_pretty(&task).unwrap();
        let parsed: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(task, parsed);
    }

    #[test]
    fn status_and_priority_serialize_snake_case() {
        assert_eq!(
            serde_json::to_string(&Status::InProgress).unwrap(),
            r#""in_progress""#
        );
        assert_eq!(
            serde_json::to_string(&Priority::Urgent).unwrap(),
            r#""urgent""#
        );
    }

    #[test]
    fn minimal_task_omits_optional_fields() {
        let task = Task::new("Minimal");
        let json = serde_json::to_string(&task).unwrap();
        assert!(!json.contains("description"));
        assert!(!json.contains("tags"));
        assert!(!json.contains("due_date"));
        assert!(!json.contains("completed_at"));
        assert!(!json.contains("deleted_at"));
    }

    #[test]
    fn priority_ordering_is_ascending() {
        assert!(Priority::Low < Priority::Medium);
        assert!(Priority::Medium < Priority::High);
        assert!(Priority::High < Priority::Urgent);
    }

    #[test]
    fn normalize_trims_and_drops_empty_tags() {
        let mut task = Task::new("Test");
        task.tags = ["".to_string(), " ".to_string(), "  valid  ".to_string(), "keep".to_string()]
            .into();
        task.normalize();
        let expected: BTreeSet<String> = ["keep".to_string(), "valid".to_string()].into();
        assert_eq!(task.tags, expected);
    }

    #[test]
    fn done_transition_stamps_completed_at() {
        let mut task = Task::new("Finish");
        let now = Utc::now();
        task.mark_done(now);
        assert_eq!(task.status, Status::Done);
        assert_eq!(task.completed_at, Some(now));
        assert_eq!(task.updated_at, now);
    }

    #[test]
    fn leaving_done_retains_completed_at() {
        let mut task = Task::new("Finish");
        let done_at = Utc::now();
        task.mark_done(done_at);
        task.set_status(Status::Todo, done_at + TimeDelta::minutes(5));
        assert_eq!(task.status, Status::Todo);
        assert_eq!(task.completed_at, Some(done_at));
    }

    #[test]
    fn redoing_does_not_restamp_completed_at() {
        let mut task = Task::new("Finish");
        let first = Utc::now();
        task.mark_done(first);
        task.mark_done(first + TimeDelta::minutes(5));
        assert_eq!(task.completed_at, Some(first));
    }

    #[test]
    fn tombstone_retains_fields() {
        let mut task = Task::new("Keep me");
        task.tags = ["audit".to_string()].into();
        let now = Utc::now();
        task.mark_deleted(now);
        assert!(task.is_deleted());
        assert_eq!(task.title, "Keep me");
        assert!(task.tags.contains("audit"));
        assert_eq!(task.updated_at, now);
    }

    #[test]
    fn overdue_requires_past_due_and_not_done() {
        let now = Utc::now();
        let mut task = Task::new("Late");
        assert!(!task.is_overdue(now));

        task.due_date = Some(now - TimeDelta::days(1));
        assert!(task.is_overdue(now));

        task.mark_done(now);
        assert!(!task.is_overdue(now));

        task.set_status(Status::Todo, now);
        task.mark_deleted(now);
        assert!(!task.is_overdue(now));
    }
}
