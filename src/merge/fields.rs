use crate::merge::{Conflict, MergeMode, StepOutcome};
use crate::model::Task;

/// Copy the four basic fields from `source` into `target`.
pub(crate) fn copy_basic_fields(target: &mut Task, source: &Task) {
    target.title = source.title.clone();
    target.description = source.description.clone();
    target.priority = source.priority;
    target.due_date = source.due_date;
}

/// Resolve title/description/priority/due_date with `updated_at` as the
/// last-writer-wins clock. An exact clock tie goes to the record with the
/// lexicographically greater id, which makes the outcome independent of
/// argument order. Equal clocks on equal ids mean the records are the
/// same edit; nothing is copied and nothing is scheduled.
pub fn reconcile(merged: &mut Task, local: &Task, remote: &Task, mode: MergeMode) -> StepOutcome {
    let mut out = StepOutcome::default();

    if remote.updated_at > local.updated_at {
        copy_basic_fields(merged, remote);
        out.writes.local = true;
    } else if local.updated_at > remote.updated_at {
        out.writes.remote = true;
    } else if remote.id > local.id {
        copy_basic_fields(merged, remote);
        out.writes.local = true;
    } else if local.id > remote.id {
        out.writes.remote = true;
    }

    if mode == MergeMode::Manual {
        if local.title != remote.title {
            out.conflicts.push(Conflict::title(
                &local.id,
                &local.title,
                &remote.title,
                &merged.title,
            ));
        }
        if local.description != remote.description {
            out.conflicts.push(Conflict::description(
                &local.id,
                &local.description,
                &remote.description,
                &merged.description,
            ));
        }
    }

    out
}
