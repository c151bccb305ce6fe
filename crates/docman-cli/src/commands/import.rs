//! Batch import shared by the list, search and REPL commands.

use crate::error::{CliError, Result};
use crate::output::Formatter;
use docman_domain::DocumentStore;
use docman_store::MemoryStore;
use std::path::PathBuf;
use tracing::debug;

/// Outcome of importing a batch of files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportSummary {
    /// Files that produced a document
    pub imported: usize,
    /// Files that were skipped because they failed
    pub failed: usize,
}

impl ImportSummary {
    /// Turn skipped files into an error once the results have been shown.
    pub fn into_result(self) -> Result<()> {
        if self.failed == 0 {
            Ok(())
        } else {
            Err(CliError::PartialImport {
                failed: self.failed,
                total: self.imported + self.failed,
            })
        }
    }
}

/// Import files in order.
///
/// Without `keep_going` the first failure is returned and later files are not
/// attempted. With it, failures are reported on stderr and counted.
pub fn import_files(
    store: &mut MemoryStore,
    files: &[PathBuf],
    keep_going: bool,
    formatter: &Formatter,
) -> Result<ImportSummary> {
    let mut summary = ImportSummary::default();

    for path in files {
        match store.import_file(path) {
            Ok(()) => summary.imported += 1,
            Err(e) if keep_going => {
                eprintln!("{}", formatter.error(&format!("{}: {}", path.display(), e)));
                summary.failed += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }

    debug!(
        "Imported {} file(s), {} failed, {} document(s) stored",
        summary.imported,
        summary.failed,
        store.len()
    );
    Ok(summary)
}
