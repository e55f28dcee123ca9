use std::collections::BTreeMap;

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

use crate::model::{Priority, Status, Task};

/// Aggregate view of a collection. Tombstones are excluded throughout.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Statistics {
    pub total: usize,
    pub by_status: BTreeMap<String, usize>,
    pub by_priority: BTreeMap<String, usize>,
    pub overdue: usize,
    pub completed_last_week: usize,
}

pub fn collect(tasks: &[Task], now: DateTime<Utc>) -> Statistics {
    let live: Vec<&Task> = tasks.iter().filter(|t| !t.is_deleted()).collect();

    let mut by_status: BTreeMap<String, usize> = Status::ALL
        .iter()
        .map(|s| (s.to_string(), 0))
        .collect();
    let mut by_priority: BTreeMap<String, usize> = Priority::ALL
        .iter()
        .map(|p| (p.to_string(), 0))
        .collect();

    for task in &live {
        if let Some(count) = by_status.get_mut(&task.status.to_string()) {
            *count += 1;
        }
        if let Some(count) = by_priority.get_mut(&task.priority.to_string()) {
            *count += 1;
        }
    }

    let week_ago = now - TimeDelta::days(7);
    let completed_last_week = live
        .iter()
        .filter(|t| t.completed_at.is_some_and(|c| c >= week_ago))
        .count();

    Statistics {
        total: live.len(),
        by_status,
        by_priority,
        overdue: live.iter().filter(|t| t.is_overdue(now)).count(),
        completed_last_week,
    }
}
