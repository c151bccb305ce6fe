//! Docman Extractor
//!
//! Converts raw files into attribute maps, one importer per document format.
//!
//! # Overview
//!
//! Text formats (letters, reports, invoices) are read line by line with
//! [`TextFile`]: a value is taken either from a single prefixed line or from a
//! block of consecutive lines ended by a stop predicate. Images are not
//! line-based; their pixel size is read from the file header.
//!
//! # Architecture
//!
//! ```text
//! bytes → ImporterRegistry (by extension) → Importer → TextFile → AttributeMap
//! ```
//!
//! # Example Usage
//!
//! ```
//! use docman_domain::Importer;
//! use docman_extractor::ImporterRegistry;
//!
//! let registry = ImporterRegistry::default();
//! let importer = registry.get("report").unwrap();
//!
//! let attributes = importer
//!     .import(b"Patient: Joe Bloggs\n\nNo new problems were noted.\n")
//!     .unwrap();
//!
//! assert_eq!(attributes.get("patient"), Some("Joe Bloggs"));
//! assert_eq!(attributes.get("body"), Some("No new problems were noted."));
//! assert_eq!(attributes.get("type"), Some("report"));
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod format;
mod importers;
mod registry;
pub mod text_file;

pub use config::{ExtractorConfig, InvoiceRules, LetterRules, ReportRules};
pub use error::ExtractorError;
pub use format::DocumentFormat;
pub use importers::{ImageImporter, InvoiceImporter, LetterImporter, ReportImporter};
pub use registry::{DynImporter, ImporterRegistry};
pub use text_file::TextFile;
