use std::collections::BTreeSet;

use crate::merge::WriteSet;
use crate::model::Task;

/// Merge tags as a set union. A side is flagged exactly when the union is
/// a strict superset of its original set. Union is always silently
/// correct, so no conflict entries exist here.
pub fn reconcile(merged: &mut Task, local: &Task, remote: &Task) -> WriteSet {
    let union: BTreeSet<String> = local.tags.union(&remote.tags).cloned().collect();

    let writes = WriteSet {
        local: union != local.tags,
        remote: union != remote.tags,
    };
    merged.tags = union;
    writes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(tags: &[&str]) -> Task {
        let mut task = Task::new("tagged");
        task.tags = tags.iter().map(|t| t.to_string()).collect();
        task
    }

    #[test]
    fn union_flags_both_sides_when_both_gain() {
        let local = task(&["shopping"]);
        let remote = task(&["weekly"]);
        let mut merged = local.clone();

        let writes = reconcile(&mut merged, &local, &remote);
        let expected: BTreeSet<String> =
            ["shopping".to_string(), "weekly".to_string()].into();
        assert_eq!(merged.tags, expected);
        assert!(writes.local);
        assert!(writes.remote);
    }

    #[test]
    fn superset_side_is_not_flagged() {
        let local = task(&["shopping", "weekly"]);
        let remote = task(&["shopping"]);
        let mut merged = local.clone();

        let writes = reconcile(&mut merged, &local, &remote);
        assert_eq!(merged.tags, local.tags);
        assert!(!writes.local);
        assert!(writes.remote);
    }

    #[test]
    fn equal_sets_schedule_nothing() {
        let local = task(&["a", "b"]);
        let remote = task(&["b", "a"]);
        let mut merged = local.clone();

        let writes = reconcile(&mut merged, &local, &remote);
        assert_eq!(writes, WriteSet::default());
    }
}
