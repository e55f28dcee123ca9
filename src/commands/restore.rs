use std::path::Path;

use chrono::Utc;

use crate::error::Result;
use crate::output::{self, Format};
use crate::store::files::FileStore;

pub fn run(dir: &Path, id: &str, format: Format) -> Result<()> {
    let store = FileStore::open(dir)?;
    let id = store.resolve_id(id)?;
    let mut task = store.read(&id)?;
    task.restore(Utc::now());
    store.write(&task)?;
    output::print_task(&task, format)?;
    Ok(())
}
