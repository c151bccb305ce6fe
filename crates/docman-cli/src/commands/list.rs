//! List command implementation.

use crate::cli::ListArgs;
use crate::commands::import::import_files;
use crate::error::Result;
use crate::output::Formatter;
use docman_domain::{Document, DocumentStore};
use docman_store::MemoryStore;

/// Execute the list command.
pub fn execute_list(
    args: ListArgs,
    store: &mut MemoryStore,
    keep_going: bool,
    formatter: &Formatter,
) -> Result<()> {
    let summary = import_files(store, &args.files, keep_going, formatter)?;

    let documents: Vec<&Document> = store.contents().iter().collect();
    println!("{}", formatter.format_documents(&documents)?);

    summary.into_result()
}
