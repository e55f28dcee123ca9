use std::path::Path;

use crate::commands::parse_due_date;
use crate::error::Result;
use crate::model::Priority;
use crate::output::{self, Format};
use crate::store::files::FileStore;

pub fn run(
    dir: &Path,
    title: String,
    description: Option<String>,
    priority: Option<Priority>,
    due: Option<String>,
    tags: Vec<String>,
    format: Format,
) -> Result<()> {
    let store = FileStore::open(dir)?;
    let due_date = due.as_deref().map(parse_due_date).transpose()?;
    let task = store.create(title, description, priority, due_date, tags)?;
    output::print_task(&task, format)?;
    Ok(())
}
