use std::path::Path;

use chrono::Utc;

use crate::error::Result;
use crate::output::{self, Format};
use crate::store::files::FileStore;

pub fn run(
    dir: &Path,
    id: &str,
    title: Option<String>,
    description: Option<String>,
    format: Format,
) -> Result<()> {
    let store = FileStore::open(dir)?;
    let id = store.resolve_id(id)?;
    let mut task = store.read(&id)?;

    let mut changed = false;
    if let Some(title) = title {
        task.title = title;
        changed = true;
    }
    if let Some(description) = description {
        task.description = description;
        changed = true;
    }
    if changed {
        task.updated_at = Utc::now();
        store.write(&task)?;
    }

    output::print_task(&task, format)?;
    Ok(())
}
