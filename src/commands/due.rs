use std::path::Path;

use chrono::Utc;

use crate::commands::parse_due_date;
use crate::error::Result;
use crate::output::{self, Format};
use crate::store::files::FileStore;

pub fn run(dir: &Path, id: &str, due: &str, format: Format) -> Result<()> {
    let store = FileStore::open(dir)?;
    let id = store.resolve_id(id)?;
    let due_date = parse_due_date(due)?;
    let mut task = store.read(&id)?;
    task.due_date = Some(due_date);
    task.updated_at = Utc::now();
    store.write(&task)?;
    output::print_task(&task, format)?;
    Ok(())
}
