use std::path::Path;

use chrono::Utc;

use crate::error::Result;
use crate::output::{self, Format};
use crate::stats;
use crate::store::files::FileStore;

pub fn run(dir: &Path, format: Format) -> Result<()> {
    let store = FileStore::open(dir)?;
    let tasks = store.list_all()?;
    let summary = stats::collect(&tasks, Utc::now());
    output::print_stats(&summary, format)?;
    Ok(())
}
