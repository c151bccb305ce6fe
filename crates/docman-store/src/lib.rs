//! Docman Storage Layer
//!
//! Implements the DocumentStore trait with an in-memory, insertion-ordered
//! collection.
//!
//! # Architecture
//!
//! - Existence and extension checks happen here, before any importer runs
//! - The importer is picked from an [`ImporterRegistry`] by file extension
//! - Each import is all-or-nothing: a failure leaves the collection untouched
//! - Nothing is persisted; documents live as long as the store
//!
//! # Examples
//!
//! ```no_run
//! use docman_domain::DocumentStore;
//! use docman_store::MemoryStore;
//! use std::path::Path;
//!
//! let mut store = MemoryStore::new();
//! store.import_file(Path::new("patient.letter")).unwrap();
//! store.import_file(Path::new("patient.report")).unwrap();
//!
//! let matches = store.search("patient:Joe,body:Diet Coke").unwrap();
//! println!("{} matching document(s)", matches.len());
//! ```

#![warn(missing_docs)]

use docman_domain::attributes::PATH;
use docman_domain::{Document, DocumentStore, Query, QueryError};
use docman_extractor::{ExtractorConfig, ExtractorError, ImporterRegistry};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// The path does not exist
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// No importer is registered for the path's extension
    #[error("Unknown file type: {0}")]
    UnknownFileType(String),

    /// The importer rejected the file contents
    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractorError),

    /// Reading the file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The search query is ill-formed
    #[error(transparent)]
    Query(#[from] QueryError),
}

/// In-memory implementation of DocumentStore
///
/// Documents are kept in import order and never modified or removed.
///
/// # Thread Safety
///
/// The store is not internally synchronized. Share it between threads only
/// behind a `Mutex` around the whole store.
pub struct MemoryStore {
    registry: ImporterRegistry,
    documents: Vec<Document>,
}

impl MemoryStore {
    /// Create an empty store with the built-in importers
    pub fn new() -> Self {
        Self::with_registry(ImporterRegistry::default())
    }

    /// Create an empty store dispatching through the given registry
    pub fn with_registry(registry: ImporterRegistry) -> Self {
        Self {
            registry,
            documents: Vec::new(),
        }
    }

    /// Create an empty store from extractor configuration
    pub fn from_config(config: &ExtractorConfig) -> Result<Self, StoreError> {
        Ok(Self::with_registry(ImporterRegistry::from_config(config)?))
    }

    /// The registry used for dispatch
    pub fn registry(&self) -> &ImporterRegistry {
        &self.registry
    }

    /// Number of stored documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether nothing has been imported yet
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Run an already-parsed query over the stored documents
    pub fn find(&self, query: &Query) -> Vec<&Document> {
        query.filter(&self.documents)
    }

    /// Extension used for dispatch: everything after the last `.` of the
    /// file name, so `.letter` dispatches as a letter. Missing or empty is an
    /// unknown type.
    fn extension_of(path: &Path) -> Result<&str, StoreError> {
        path.file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext)
            .filter(|ext| !ext.is_empty())
            .ok_or_else(|| {
                StoreError::UnknownFileType(format!(
                    "No extension found for file: {}",
                    path.display()
                ))
            })
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore for MemoryStore {
    type Error = StoreError;

    fn import_file(&mut self, path: &Path) -> Result<(), Self::Error> {
        if !path.exists() {
            return Err(StoreError::FileNotFound(path.to_path_buf()));
        }

        let extension = Self::extension_of(path)?;
        let importer = self.registry.get(extension).ok_or_else(|| {
            StoreError::UnknownFileType(format!("For file: {}", path.display()))
        })?;

        let bytes = std::fs::read(path)?;
        debug!("Read {} bytes from {}", bytes.len(), path.display());

        let mut attributes = importer.import(&bytes).map_err(|e| {
            warn!("Failed to import {}: {}", path.display(), e);
            e
        })?;
        attributes.insert(PATH, path.display().to_string());

        info!(
            "Imported {} as {} ({} attributes)",
            path.display(),
            importer.format_name(),
            attributes.len()
        );
        self.documents.push(Document::new(attributes));
        Ok(())
    }

    fn contents(&self) -> &[Document] {
        &self.documents
    }

    fn search(&self, query: &str) -> Result<Vec<&Document>, Self::Error> {
        let query = Query::parse(query)?;
        let matches = self.find(&query);

        debug!(
            "Query '{}' matched {} of {} documents",
            query,
            matches.len(),
            self.documents.len()
        );
        Ok(matches)
    }
}
