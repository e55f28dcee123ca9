use std::path::Path;

use chrono::Utc;

use crate::error::Result;
use crate::output::{self, Format};
use crate::store::files::FileStore;

pub fn add(dir: &Path, id: &str, tag: &str, format: Format) -> Result<()> {
    let store = FileStore::open(dir)?;
    let id = store.resolve_id(id)?;
    let mut task = store.read(&id)?;
    if task.tags.insert(tag.trim().to_string()) {
        task.normalize();
        task.updated_at = Utc::now();
        store.write(&task)?;
    }
    output::print_task(&task, format)?;
    Ok(())
}

pub fn remove(dir: &Path, id: &str, tag: &str, format: Format) -> Result<()> {
    let store = FileStore::open(dir)?;
    let id = store.resolve_id(id)?;
    let mut task = store.read(&id)?;
    if task.tags.remove(tag.trim()) {
        task.updated_at = Utc::now();
        store.write(&task)?;
    }
    output::print_task(&task, format)?;
    Ok(())
}
