use std::path::Path;

use crate::error::Result;
use crate::output::Format;
use crate::store::files::FileStore;

pub fn run(dir: &Path, format: Format) -> Result<()> {
    let store = FileStore::init(dir)?;
    match format {
        Format::Json => println!(
            "{}",
            serde_json::json!({ "initialized": store.root().display().to_string() })
        ),
        _ => println!("initialized {}", store.root().display()),
    }
    Ok(())
}
