use crate::merge::{remote_wins, Conflict, MergeMode, StepOutcome};
use crate::model::{Status, Task};

/// Resolve status disagreement. Done is dominant and sticky: a completion
/// on either side survives regardless of clocks, carrying its
/// `completed_at` with it. All other disagreements fall back to
/// last-writer-wins with the id tie-break.
pub fn reconcile(merged: &mut Task, local: &Task, remote: &Task, mode: MergeMode) -> StepOutcome {
    let mut out = StepOutcome::default();

    if remote.status == Status::Done && local.status != Status::Done {
        merged.status = Status::Done;
        merged.completed_at = remote.completed_at;
        out.writes.local = true;
    } else if local.status == Status::Done && remote.status != Status::Done {
        // The working record already carries the local completion.
        out.writes.remote = true;
    } else if local.status != remote.status {
        if remote_wins(local, remote) {
            merged.status = remote.status;
            out.writes.local = true;
        } else {
            out.writes.remote = true;
        }
    } else if local.status == Status::Done && local.completed_at != remote.completed_at {
        // Both done but the completion stamps disagree.
        if remote_wins(local, remote) {
            merged.completed_at = remote.completed_at;
            out.writes.local = true;
        } else {
            out.writes.remote = true;
        }
    }

    if mode == MergeMode::Manual
        && local.status != remote.status
        && is_significant(local.status, remote.status)
    {
        out.conflicts.push(Conflict::status(
            &local.id,
            local.status,
            remote.status,
            merged.status,
        ));
    }

    out
}

/// A status difference is significant when either side crosses into or
/// out of done or cancelled. Lesser moves (todo vs in_progress) resolve
/// silently even in manual mode.
fn is_significant(local: Status, remote: Status) -> bool {
    (local == Status::Done) != (remote == Status::Done)
        || (local == Status::Cancelled) != (remote == Status::Cancelled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::WriteSet;
    use chrono::{TimeDelta, Utc};

    fn task(id: &str, status: Status, updated_minutes_ago: i64) -> Task {
        let mut task = Task::new("status case");
        task.id = id.to_string();
        task.status = status;
        task.updated_at = Utc::now() - TimeDelta::minutes(updated_minutes_ago);
        if status == Status::Done {
            task.completed_at = Some(task.updated_at);
        }
        task
    }

    #[test]
    fn remote_done_wins_despite_later_local_clock() {
        let local = task("t1", Status::Todo, 10);
        let remote = task("t1", Status::Done, 60);
        let mut merged = local.clone();

        let out = reconcile(&mut merged, &local, &remote, MergeMode::Auto);
        assert_eq!(merged.status, Status::Done);
        assert_eq!(merged.completed_at, remote.completed_at);
        assert!(out.writes.local);
        assert!(!out.writes.remote);
    }

    #[test]
    fn local_done_wins_despite_later_remote_clock() {
        let local = task("t1", Status::Done, 60);
        let remote = task("t1", Status::InProgress, 10);
        let mut merged = local.clone();

        let out = reconcile(&mut merged, &local, &remote, MergeMode::Auto);
        assert_eq!(merged.status, Status::Done);
        assert_eq!(merged.completed_at, local.completed_at);
        assert!(!out.writes.local);
        assert!(out.writes.remote);
    }

    #[test]
    fn non_done_difference_resolves_by_clock() {
        let local = task("t1", Status::Todo, 60);
        let remote = task("t1", Status::InProgress, 30);
        let mut merged = local.clone();

        let out = reconcile(&mut merged, &local, &remote, MergeMode::Auto);
        assert_eq!(merged.status, Status::InProgress);
        assert!(out.writes.local);
    }

    #[test]
    fn non_done_clock_tie_goes_to_greater_id() {
        let clock = Utc::now();
        let mut local = task("aaa", Status::Todo, 0);
        local.updated_at = clock;
        let mut remote = task("zzz", Status::Review, 0);
        remote.updated_at = clock;
        let mut merged = local.clone();

        let out = reconcile(&mut merged, &local, &remote, MergeMode::Auto);
        assert_eq!(merged.status, Status::Review);
        assert!(out.writes.local);
    }

    #[test]
    fn both_done_keeps_winner_completion_stamp() {
        let mut local = task("t1", Status::Done, 60);
        let mut remote = task("t1", Status::Done, 30);
        local.completed_at = Some(local.updated_at);
        remote.completed_at = Some(remote.updated_at);
        let mut merged = local.clone();

        let out = reconcile(&mut merged, &local, &remote, MergeMode::Auto);
        assert_eq!(merged.completed_at, remote.completed_at);
        assert!(out.writes.local);
    }

    #[test]
    fn identical_statuses_schedule_nothing() {
        let local = task("t1", Status::Done, 30);
        let remote = local.clone();
        let mut merged = local.clone();

        let out = reconcile(&mut merged, &local, &remote, MergeMode::Auto);
        assert_eq!(out.writes, WriteSet::default());
        assert!(out.conflicts.is_empty());
    }

    #[test]
    fn manual_mode_flags_done_crossing() {
        let local = task("t1", Status::Todo, 60);
        let remote = task("t1", Status::Done, 30);
        let mut merged = local.clone();

        let out = reconcile(&mut merged, &local, &remote, MergeMode::Manual);
        assert_eq!(out.conflicts.len(), 1);
        let conflict = &out.conflicts[0];
        assert_eq!(conflict.local_value, "todo");
        assert_eq!(conflict.remote_value, "done");
        assert_eq!(conflict.chosen_value, "done");
    }

    #[test]
    fn manual_mode_flags_cancelled_crossing() {
        let local = task("t1", Status::Cancelled, 30);
        let remote = task("t1", Status::InProgress, 60);
        let mut merged = local.clone();

        let out = reconcile(&mut merged, &local, &remote, MergeMode::Manual);
        assert_eq!(out.conflicts.len(), 1);
        assert_eq!(merged.status, Status::Cancelled);
    }

    #[test]
    fn manual_mode_stays_silent_on_minor_difference() {
        let local = task("t1", Status::Todo, 60);
        let remote = task("t1", Status::InProgress, 30);
        let mut merged = local.clone();

        let out = reconcile(&mut merged, &local, &remote, MergeMode::Manual);
        assert!(out.conflicts.is_empty());
        assert_eq!(merged.status, Status::InProgress);
    }
}
