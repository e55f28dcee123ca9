use std::path::Path;

use chrono::Utc;

use crate::error::Result;
use crate::model::{Priority, Status};
use crate::output::{self, Format};
use crate::store::files::FileStore;

pub fn run(
    dir: &Path,
    status: Option<Status>,
    priority: Option<Priority>,
    tag: Option<String>,
    overdue: bool,
    deleted: bool,
    format: Format,
) -> Result<()> {
    let store = FileStore::open(dir)?;
    let mut tasks = store.list_all()?;

    if deleted {
        tasks.retain(|t| t.is_deleted());
    } else {
        tasks.retain(|t| !t.is_deleted());
    }

    if let Some(status) = status {
        tasks.retain(|t| t.status == status);
    }
    if let Some(priority) = priority {
        tasks.retain(|t| t.priority == priority);
    }
    if let Some(ref tag) = tag {
        tasks.retain(|t| t.tags.contains(tag));
    }
    if overdue {
        let now = Utc::now();
        tasks.retain(|t| t.is_overdue(now));
    }

    output::print_tasks(&tasks, format)?;
    Ok(())
}
