//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::{AttributeMap, Document};
use std::path::Path;

/// Trait for converting a raw file into attributes
///
/// Implemented by the extraction layer (docman-extractor), one type per
/// document format.
pub trait Importer {
    /// Error type for import operations
    type Error;

    /// Format tag written to the `type` attribute
    fn format_name(&self) -> &'static str;

    /// Extract attributes from the full contents of a file
    ///
    /// The returned map always carries a `type` entry. The `path` entry is
    /// left to the caller.
    fn import(&self, bytes: &[u8]) -> Result<AttributeMap, Self::Error>;
}

/// Trait for storing and retrieving documents
///
/// Implemented by the infrastructure layer (docman-store)
pub trait DocumentStore {
    /// Error type for store operations
    type Error;

    /// Import a file and append the resulting document
    ///
    /// A failed import leaves the store unchanged.
    fn import_file(&mut self, path: &Path) -> Result<(), Self::Error>;

    /// All stored documents in insertion order
    fn contents(&self) -> &[Document];

    /// Documents matching the query text, in insertion order
    fn search(&self, query: &str) -> Result<Vec<&Document>, Self::Error>;
}
