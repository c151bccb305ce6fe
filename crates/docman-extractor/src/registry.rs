//! Importer registry for dispatching files by extension

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::format::DocumentFormat;
use crate::importers::{ImageImporter, InvoiceImporter, LetterImporter, ReportImporter};
use docman_domain::Importer;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// An importer behind dynamic dispatch
pub type DynImporter = dyn Importer<Error = ExtractorError> + Send + Sync;

/// Registry of importers keyed by file extension
///
/// Several extensions may share one importer (`jpg`, `jpeg` and `png` all
/// map to the image importer). Lookup is exact and case-sensitive.
pub struct ImporterRegistry {
    importers: HashMap<String, Arc<DynImporter>>,
}

impl ImporterRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            importers: HashMap::new(),
        }
    }

    /// Build a registry from validated configuration
    ///
    /// # Errors
    /// Returns [`ExtractorError::Config`] if the configuration is invalid.
    pub fn from_config(config: &ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        Ok(Self::build(config))
    }

    fn build(config: &ExtractorConfig) -> Self {
        let mut shared: HashMap<DocumentFormat, Arc<DynImporter>> = HashMap::new();
        let mut registry = Self::new();

        for (extension, format) in &config.extensions {
            let importer = shared
                .entry(*format)
                .or_insert_with(|| Self::importer_for(*format, config))
                .clone();
            registry.register_shared(extension, importer);
        }
        registry
    }

    fn importer_for(format: DocumentFormat, config: &ExtractorConfig) -> Arc<DynImporter> {
        match format {
            DocumentFormat::Letter => Arc::new(LetterImporter::new(config.letter.clone())),
            DocumentFormat::Report => Arc::new(ReportImporter::new(config.report.clone())),
            DocumentFormat::Invoice => Arc::new(InvoiceImporter::new(config.invoice.clone())),
            DocumentFormat::Image => Arc::new(ImageImporter::new()),
        }
    }

    /// Register an importer for an extension, replacing any previous one
    pub fn register<I>(&mut self, extension: &str, importer: I)
    where
        I: Importer<Error = ExtractorError> + Send + Sync + 'static,
    {
        self.register_shared(extension, Arc::new(importer));
    }

    fn register_shared(&mut self, extension: &str, importer: Arc<DynImporter>) {
        debug!("Registering '{}' importer for .{}", importer.format_name(), extension);
        self.importers.insert(extension.to_string(), importer);
    }

    /// Get the importer for an extension
    pub fn get(&self, extension: &str) -> Option<&DynImporter> {
        self.importers.get(extension).map(|importer| importer.as_ref())
    }

    /// Registered extensions, sorted
    pub fn extensions(&self) -> Vec<&str> {
        let mut extensions: Vec<&str> = self.importers.keys().map(String::as_str).collect();
        extensions.sort_unstable();
        extensions
    }

    /// Number of registered extensions
    pub fn len(&self) -> usize {
        self.importers.len()
    }

    /// Whether no extension is registered
    pub fn is_empty(&self) -> bool {
        self.importers.is_empty()
    }
}

impl Default for ImporterRegistry {
    /// Registry for the built-in formats and default extensions
    fn default() -> Self {
        Self::build(&ExtractorConfig::default())
    }
}
