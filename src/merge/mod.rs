//! Bidirectional merge of two independently-edited task collections.
//!
//! The engine is a pure function over in-memory maps: it reads no files,
//! takes no clock samples, and never mutates its inputs. Callers apply
//! the returned write-back sets to their stores afterwards.

pub mod conflict;
pub mod deletion;
pub mod fields;
pub mod status;
pub mod tags;

use std::collections::{BTreeMap, BTreeSet};

use clap::ValueEnum;

pub use conflict::{Conflict, ConflictKind};

use crate::model::Task;

/// Keyed collection shape the engine operates on.
pub type TaskMap = BTreeMap<String, Task>;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[clap(rename_all = "snake_case")]
pub enum MergeMode {
    /// Resolve everything silently.
    #[default]
    Auto,
    /// Same resolutions, but surface title/description/status
    /// disagreements as conflict entries for review.
    Manual,
}

/// Which sides need a write-back after a reconciliation step.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WriteSet {
    pub local: bool,
    pub remote: bool,
}

impl std::ops::BitOrAssign for WriteSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.local |= rhs.local;
        self.remote |= rhs.remote;
    }
}

/// Explicit result of one reconciler step: directives plus any conflict
/// entries, folded together by the orchestrator.
#[derive(Debug, Default)]
pub struct StepOutcome {
    pub writes: WriteSet,
    pub conflicts: Vec<Conflict>,
}

/// Result of reconciling one same-id pair.
#[derive(Debug)]
pub struct PairOutcome {
    pub merged: Task,
    pub writes: WriteSet,
    pub conflicts: Vec<Conflict>,
}

/// Full merge result: the unified collection, the four write-back sets,
/// and the conflicts collected in id order.
#[derive(Debug, Default)]
pub struct MergeOutcome {
    pub merged: TaskMap,
    pub create_remote: TaskMap,
    pub update_remote: TaskMap,
    pub create_local: TaskMap,
    pub update_local: TaskMap,
    pub conflicts: Vec<Conflict>,
}

impl MergeOutcome {
    /// True when neither side needs any write.
    pub fn is_converged(&self) -> bool {
        self.create_remote.is_empty()
            && self.update_remote.is_empty()
            && self.create_local.is_empty()
            && self.update_local.is_empty()
    }
}

/// Last-writer-wins comparison with the lexicographically greater id
/// breaking exact clock ties, so the outcome is independent of which
/// side a record arrived on.
pub(crate) fn remote_wins(local: &Task, remote: &Task) -> bool {
    match remote.updated_at.cmp(&local.updated_at) {
        std::cmp::Ordering::Greater => true,
        std::cmp::Ordering::Less => false,
        std::cmp::Ordering::Equal => remote.id > local.id,
    }
}

/// Merge two keyed collections.
///
/// Ids present on one side only become creations on the other; ids
/// present on both run through the reconcilers. Re-running the merge on
/// its own output is a no-op: no writes, no conflicts.
pub fn merge(local: &TaskMap, remote: &TaskMap, mode: MergeMode) -> MergeOutcome {
    let mut out = MergeOutcome::default();

    let ids: BTreeSet<&String> = local.keys().chain(remote.keys()).collect();
    for id in ids {
        match (local.get(id), remote.get(id)) {
            (Some(task), None) => {
                out.merged.insert(id.clone(), task.clone());
                out.create_remote.insert(id.clone(), task.clone());
            }
            (None, Some(task)) => {
                out.merged.insert(id.clone(), task.clone());
                out.create_local.insert(id.clone(), task.clone());
            }
            (Some(local_task), Some(remote_task)) => {
                let pair = reconcile_pair(local_task, remote_task, mode);
                if pair.writes.local {
                    out.update_local.insert(id.clone(), pair.merged.clone());
                }
                if pair.writes.remote {
                    out.update_remote.insert(id.clone(), pair.merged.clone());
                }
                out.conflicts.extend(pair.conflicts);
                out.merged.insert(id.clone(), pair.merged);
            }
            // Every id came from one of the two maps.
            (None, None) => {}
        }
    }

    out
}

/// Reconcile one same-id pair into a merged record.
///
/// Works on a deep copy of the local record. Deletion runs first and is
/// dominant: a propagated or surviving tombstone skips field and status
/// logic. Tags union regardless of deletion state, and the merged clock
/// advances to the later of the two inputs.
pub fn reconcile_pair(local: &Task, remote: &Task, mode: MergeMode) -> PairOutcome {
    let mut merged = local.clone();
    let mut writes = WriteSet::default();
    let mut conflicts = Vec::new();

    writes |= deletion::reconcile(&mut merged, local, remote);

    if !merged.is_deleted() {
        let step = fields::reconcile(&mut merged, local, remote, mode);
        writes |= step.writes;
        conflicts.extend(step.conflicts);

        let step = status::reconcile(&mut merged, local, remote, mode);
        writes |= step.writes;
        conflicts.extend(step.conflicts);
    }

    writes |= tags::reconcile(&mut merged, local, remote);

    merged.updated_at = local.updated_at.max(remote.updated_at);

    PairOutcome {
        merged,
        writes,
        conflicts,
    }
}
