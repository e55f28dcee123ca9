use std::path::Path;

use chrono::Utc;

use crate::error::Result;
use crate::model::Status;
use crate::output::{self, Format};
use crate::store::files::FileStore;

pub fn run(dir: &Path, id: &str, status: Status, format: Format) -> Result<()> {
    let store = FileStore::open(dir)?;
    let id = store.resolve_id(id)?;
    let mut task = store.read(&id)?;
    task.set_status(status, Utc::now());
    store.write(&task)?;
    output::print_task(&task, format)?;
    Ok(())
}
