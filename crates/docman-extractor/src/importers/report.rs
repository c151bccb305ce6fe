//! Report importer

use crate::config::ReportRules;
use crate::error::ExtractorError;
use crate::format::DocumentFormat;
use crate::text_file::{stop, TextFile};
use docman_domain::attributes::{BODY, PATIENT, TYPE};
use docman_domain::{AttributeMap, Importer};

/// Imports clinical reports: a `Patient: ` line, then free text to the end
#[derive(Debug, Clone, Default)]
pub struct ReportImporter {
    rules: ReportRules,
}

impl ReportImporter {
    /// Create a report importer with custom line rules
    pub fn new(rules: ReportRules) -> Self {
        Self { rules }
    }
}

impl Importer for ReportImporter {
    type Error = ExtractorError;

    fn format_name(&self) -> &'static str {
        DocumentFormat::Report.as_str()
    }

    fn import(&self, bytes: &[u8]) -> Result<AttributeMap, ExtractorError> {
        let mut file = TextFile::from_bytes(bytes)?;

        file.extract_prefixed_line(&self.rules.name_prefix, PATIENT);
        file.extract_block(self.rules.body_start_line, stop::never, BODY);

        file.set(TYPE, self.format_name());
        Ok(file.into_attributes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_attributes() {
        let report = "Patient: Joe Bloggs\n\
            \n\
            On 5th January 2017 I examined Joe's teeth.\n\
            We discussed his switch from drinking Coke to Diet Coke.\n\
            No new problems were noted with his teeth.\n";

        let attributes = ReportImporter::default().import(report.as_bytes()).unwrap();

        assert_eq!(attributes.get(PATIENT), Some("Joe Bloggs"));
        assert_eq!(
            attributes.get(BODY),
            Some(
                "On 5th January 2017 I examined Joe's teeth.\n\
                 We discussed his switch from drinking Coke to Diet Coke.\n\
                 No new problems were noted with his teeth."
            )
        );
        assert_eq!(attributes.get(TYPE), Some("report"));
    }

    #[test]
    fn test_empty_report() {
        let attributes = ReportImporter::default().import(b"").unwrap();
        assert_eq!(attributes.get(PATIENT), Some(""));
        assert_eq!(attributes.get(BODY), Some(""));
        assert_eq!(attributes.get(TYPE), Some("report"));
    }

    #[test]
    fn test_binary_report_is_malformed() {
        let err = ReportImporter::default().import(&[0xc3, 0x28]).unwrap_err();
        assert!(err.is_malformed_input());
    }
}
