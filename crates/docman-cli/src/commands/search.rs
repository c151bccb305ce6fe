//! Search command implementation.

use crate::cli::SearchArgs;
use crate::commands::import::import_files;
use crate::error::Result;
use crate::output::Formatter;
use docman_domain::Query;
use docman_store::{MemoryStore, StoreError};

/// Execute the search command.
pub fn execute_search(
    args: SearchArgs,
    store: &mut MemoryStore,
    keep_going: bool,
    formatter: &Formatter,
) -> Result<()> {
    // Reject an ill-formed query before touching any file
    let query = Query::parse(&args.query).map_err(StoreError::from)?;

    let summary = import_files(store, &args.files, keep_going, formatter)?;

    let matches = store.find(&query);
    println!("{}", formatter.format_documents(&matches)?);

    summary.into_result()
}
