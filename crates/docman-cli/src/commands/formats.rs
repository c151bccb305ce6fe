//! Formats command implementation.

use crate::error::Result;
use crate::output::Formatter;
use docman_store::MemoryStore;

/// Execute the formats command.
pub fn execute_formats(store: &MemoryStore, formatter: &Formatter) -> Result<()> {
    let registry = store.registry();
    let bindings: Vec<(&str, &str)> = registry
        .extensions()
        .into_iter()
        .filter_map(|ext| registry.get(ext).map(|importer| (ext, importer.format_name())))
        .collect();

    println!("{}", formatter.format_extensions(&bindings)?);
    Ok(())
}
