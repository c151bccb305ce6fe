//! Docman Domain Layer
//!
//! This crate contains the core data model and query logic for Docman.
//! It defines the value objects and trait interfaces the extractor, store and
//! CLI crates depend upon, and pulls in no third-party crates so that every
//! layer can use it without inheriting a dependency.
//!
//! ## Key Concepts
//!
//! - **Attribute Map**: ordered name → value mapping produced by every importer
//! - **Document**: the immutable result of one successful import
//! - **Query**: comma-separated `name:substring` clauses, ANDed together
//! - **Importer**: format-specific conversion of raw bytes into attributes
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure data model and matching logic only
//! - File access, dispatch and storage live in other crates
//! - Trait definitions for the extractor and store boundaries

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod attribute_map;
pub mod attributes;
pub mod document;
pub mod query;
pub mod traits;

// Re-exports for convenience
pub use attribute_map::AttributeMap;
pub use document::Document;
pub use query::{Clause, Query, QueryError};
pub use traits::{DocumentStore, Importer};
