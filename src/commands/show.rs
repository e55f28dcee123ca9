use std::path::Path;

use crate::error::Result;
use crate::output::{self, Format};
use crate::store::files::FileStore;

pub fn run(dir: &Path, id: &str, format: Format) -> Result<()> {
    let store = FileStore::open(dir)?;
    let id = store.resolve_id(id)?;
    let task = store.read(&id)?;
    output::print_task(&task, format)?;
    Ok(())
}
