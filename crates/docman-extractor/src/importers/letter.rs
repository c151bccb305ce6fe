//! Letter importer

use crate::config::LetterRules;
use crate::error::ExtractorError;
use crate::format::DocumentFormat;
use crate::text_file::{stop, TextFile};
use docman_domain::attributes::{ADDRESS, BODY, PATIENT, TYPE};
use docman_domain::{AttributeMap, Importer};

/// Imports patient letters
///
/// ```text
/// Dear Joe Bloggs            <- patient
///
/// 123 Fake Street            <- address (until blank line)
/// London
///
/// We are writing to you...   <- body (until "regards,")
///
/// regards,
/// ```
#[derive(Debug, Clone, Default)]
pub struct LetterImporter {
    rules: LetterRules,
}

impl LetterImporter {
    /// Create a letter importer with custom line rules
    pub fn new(rules: LetterRules) -> Self {
        Self { rules }
    }
}

impl Importer for LetterImporter {
    type Error = ExtractorError;

    fn format_name(&self) -> &'static str {
        DocumentFormat::Letter.as_str()
    }

    fn import(&self, bytes: &[u8]) -> Result<AttributeMap, ExtractorError> {
        let mut file = TextFile::from_bytes(bytes)?;

        file.extract_prefixed_line(&self.rules.name_prefix, PATIENT);

        let address_end =
            file.extract_block(self.rules.address_start_line, stop::blank_line, ADDRESS);
        file.extract_block(
            address_end + 1,
            stop::starts_with(&self.rules.sign_off_marker),
            BODY,
        );

        file.set(TYPE, self.format_name());
        Ok(file.into_attributes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LETTER: &str = "Dear Joe Bloggs

123 Fake Street
Westminster
London
United Kingdom

We are writing to you to confirm the re-scheduling of your appointment
with Dr. Avaj from 29th December 2016 to 5th January 2017.

regards,

  Dr. Avaj
  Awesome Dentist
";

    #[test]
    fn test_letter_attributes() {
        let attributes = LetterImporter::default().import(LETTER.as_bytes()).unwrap();

        assert_eq!(attributes.get(PATIENT), Some("Joe Bloggs"));
        assert_eq!(
            attributes.get(ADDRESS),
            Some("123 Fake Street\nWestminster\nLondon\nUnited Kingdom")
        );
        assert_eq!(
            attributes.get(BODY),
            Some(
                "We are writing to you to confirm the re-scheduling of your appointment\n\
                 with Dr. Avaj from 29th December 2016 to 5th January 2017."
            )
        );
        assert_eq!(attributes.get(TYPE), Some("letter"));

        let names: Vec<&str> = attributes.names().collect();
        assert_eq!(names, vec![PATIENT, ADDRESS, BODY, TYPE]);
    }

    #[test]
    fn test_letter_without_sign_off_runs_to_end() {
        let attributes = LetterImporter::default()
            .import(b"Dear Ann\n\n1 Road\n\nSee you soon.\nBye")
            .unwrap();

        assert_eq!(attributes.get(ADDRESS), Some("1 Road"));
        assert_eq!(attributes.get(BODY), Some("See you soon.\nBye"));
    }

    #[test]
    fn test_custom_sign_off() {
        let rules = LetterRules {
            sign_off_marker: "Yours".to_string(),
            ..LetterRules::default()
        };
        let attributes = LetterImporter::new(rules)
            .import(b"Dear Ann\n\n1 Road\n\nHello.\nYours sincerely,\nDr. Avaj")
            .unwrap();

        assert_eq!(attributes.get(BODY), Some("Hello."));
    }

    #[test]
    fn test_truncated_letter() {
        let attributes = LetterImporter::default().import(b"Dear Ann").unwrap();

        assert_eq!(attributes.get(PATIENT), Some("Ann"));
        assert_eq!(attributes.get(ADDRESS), Some(""));
        assert_eq!(attributes.get(BODY), Some(""));
    }
}
