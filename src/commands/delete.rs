use std::path::Path;

use chrono::Utc;

use crate::error::Result;
use crate::output::{self, Format};
use crate::store::files::FileStore;

/// Soft delete: the task file stays on disk as a tombstone so a later
/// sync can weigh the deletion against edits on the other side.
pub fn run(dir: &Path, id: &str, format: Format) -> Result<()> {
    let store = FileStore::open(dir)?;
    let id = store.resolve_id(id)?;
    let mut task = store.read(&id)?;
    task.mark_deleted(Utc::now());
    store.write(&task)?;
    output::print_task(&task, format)?;
    Ok(())
}
