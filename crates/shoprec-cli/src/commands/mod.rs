//! Subcommand implementations.

pub(crate) mod matrix;
pub(crate) mod populate;
pub(crate) mod recommend;

use crate::error::{CliError, Result};
use shoprec::store::{InMemoryStore, StoreSnapshot};
use std::path::Path;

/// Load a store from a JSON snapshot file.
pub(crate) fn load_store(path: &Path) -> Result<InMemoryStore> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.to_path_buf()));
    }
    let snapshot = StoreSnapshot::load(path)?;
    Ok(InMemoryStore::from_snapshot(snapshot)?)
}
