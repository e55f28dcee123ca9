use std::path::Path;

use colored::Colorize;
use serde::Serialize;

use crate::error::Result;
use crate::merge::{self, Conflict, MergeMode};
use crate::output::{self, Format};
use crate::store::files::FileStore;

#[derive(Debug, Serialize)]
struct SyncReport {
    tasks: usize,
    created_local: usize,
    updated_local: usize,
    created_remote: usize,
    updated_remote: usize,
    converged: bool,
    conflicts: Vec<Conflict>,
}

/// Reconcile this store with another copy of the task set and apply the
/// write-backs to both sides. The merge itself is pure; everything the
/// stores need to converge comes back as explicit create/update sets.
pub fn run(dir: &Path, other: &Path, mode: MergeMode, format: Format) -> Result<()> {
    let local = FileStore::open(dir)?;
    let remote = FileStore::open(other)?;

    let outcome = merge::merge(&local.load_map()?, &remote.load_map()?, mode);

    let report = SyncReport {
        tasks: outcome.merged.len(),
        created_local: local.write_all(outcome.create_local.values())?,
        updated_local: local.write_all(outcome.update_local.values())?,
        created_remote: remote.write_all(outcome.create_remote.values())?,
        updated_remote: remote.write_all(outcome.update_remote.values())?,
        converged: outcome.is_converged(),
        conflicts: outcome.conflicts,
    };

    match format {
        Format::Json => println!("{}", serde_json::to_string(&report)?),
        _ => {
            println!("synced {} tasks with {}", report.tasks, other.display());
            println!(
                "  local:  {} created, {} updated",
                report.created_local, report.updated_local
            );
            println!(
                "  remote: {} created, {} updated",
                report.created_remote, report.updated_remote
            );
            if report.conflicts.is_empty() {
                if mode == MergeMode::Manual {
                    println!("no conflicts to review");
                }
            } else {
                println!(
                    "{}",
                    format!("{} conflict(s) need review:", report.conflicts.len()).yellow()
                );
                output::print_conflicts(&report.conflicts, format)?;
            }
        }
    }
    Ok(())
}
