//! Invoice importer

use crate::config::InvoiceRules;
use crate::error::ExtractorError;
use crate::format::DocumentFormat;
use crate::text_file::TextFile;
use docman_domain::attributes::{AMOUNT, PATIENT, TYPE};
use docman_domain::{AttributeMap, Importer};
use tracing::warn;

/// Imports invoices: a greeting line and an `Amount: ` line anywhere below
#[derive(Debug, Clone, Default)]
pub struct InvoiceImporter {
    rules: InvoiceRules,
}

impl InvoiceImporter {
    /// Create an invoice importer with custom line rules
    pub fn new(rules: InvoiceRules) -> Self {
        Self { rules }
    }
}

impl Importer for InvoiceImporter {
    type Error = ExtractorError;

    fn format_name(&self) -> &'static str {
        DocumentFormat::Invoice.as_str()
    }

    fn import(&self, bytes: &[u8]) -> Result<AttributeMap, ExtractorError> {
        let mut file = TextFile::from_bytes(bytes)?;

        file.extract_prefixed_line(&self.rules.name_prefix, PATIENT);
        if file.extract_prefixed_scan(&self.rules.amount_prefix, AMOUNT).is_none() {
            warn!("Invoice has no '{}' line", self.rules.amount_prefix);
        }

        file.set(TYPE, self.format_name());
        Ok(file.into_attributes())
    }
}
