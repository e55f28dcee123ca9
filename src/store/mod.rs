pub mod files;

use std::path::PathBuf;

use crate::error::{Result, TasqError};

/// Walk up from the current directory to find the .tasq root.
pub fn find_root() -> Result<PathBuf> {
    let mut dir = std::env::current_dir().map_err(TasqError::Io)?;
    loop {
        if dir.join(".tasq").exists() {
            return Ok(dir);
        }
        if !dir.pop() {
            return Err(TasqError::NotInitialized);
        }
    }
}
