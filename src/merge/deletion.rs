use crate::merge::fields::copy_basic_fields;
use crate::merge::WriteSet;
use crate::model::Task;

/// Resolve presence/absence disagreement between two same-id records.
///
/// A tombstone on one side is a conflicting edit, not a collection
/// removal: it wins only if its deletion clock is strictly later than the
/// live side's update clock. When both sides agree on liveness there is
/// nothing to do here; when both are tombstoned the later deletion clock
/// wins the merged tombstone.
pub fn reconcile(merged: &mut Task, local: &Task, remote: &Task) -> WriteSet {
    let mut writes = WriteSet::default();
    match (local.deleted_at, remote.deleted_at) {
        (None, Some(remote_deleted)) => {
            if remote_deleted > local.updated_at {
                // Remote deletion is more recent: propagate the tombstone.
                merged.deleted_at = Some(remote_deleted);
                writes.local = true;
            }
            // Otherwise the local update outranks the deletion; the record
            // stays live and the field pass pushes it back to remote.
        }
        (Some(local_deleted), None) => {
            if local_deleted > remote.updated_at {
                // Local deletion is more recent: remote needs the tombstone.
                writes.remote = true;
            } else {
                // Remote edit outranks the deletion: resurrect with the
                // surviving side's fields.
                merged.deleted_at = None;
                copy_basic_fields(merged, remote);
                writes.local = true;
            }
        }
        (Some(local_deleted), Some(remote_deleted)) => {
            if remote_deleted > local_deleted {
                merged.deleted_at = Some(remote_deleted);
                writes.local = true;
            } else if local_deleted > remote_deleted {
                writes.remote = true;
            }
        }
        (None, None) => {}
    }
    writes
}
