//! `shoprec populate`: write a seeded sample store.

use crate::error::Result;
use shoprec::synthetic::{populate, PopulateConfig};
use std::path::Path;
use tracing::info;

pub(crate) fn run(output: &Path, config: &PopulateConfig) -> Result<()> {
    let store = populate(config)?;
    store.snapshot().save(output)?;

    info!(path = %output.display(), seed = config.seed, "sample store written");
    println!(
        "Wrote {} products and {} interactions to {}",
        store.products().count(),
        store.interactions().len(),
        output.display()
    );
    Ok(())
}
