//! Configuration for the Extractor

use crate::error::ExtractorError;
use crate::format::DocumentFormat;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Line rules for letters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LetterRules {
    /// Greeting stripped from line 0 to obtain the patient name
    pub name_prefix: String,

    /// First line of the address block
    pub address_start_line: usize,

    /// Line prefix that ends the body
    pub sign_off_marker: String,
}

impl Default for LetterRules {
    fn default() -> Self {
        Self {
            name_prefix: "Dear ".to_string(),
            address_start_line: 2,
            sign_off_marker: "regards,".to_string(),
        }
    }
}

/// Line rules for reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportRules {
    /// Label stripped from line 0 to obtain the patient name
    pub name_prefix: String,

    /// First line of the body, which runs to end of file
    pub body_start_line: usize,
}

impl Default for ReportRules {
    fn default() -> Self {
        Self {
            name_prefix: "Patient: ".to_string(),
            body_start_line: 2,
        }
    }
}

/// Line rules for invoices
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceRules {
    /// Greeting stripped from line 0 to obtain the patient name
    pub name_prefix: String,

    /// Label of the line holding the billed amount
    pub amount_prefix: String,
}

impl Default for InvoiceRules {
    fn default() -> Self {
        Self {
            name_prefix: "Dear ".to_string(),
            amount_prefix: "Amount: ".to_string(),
        }
    }
}

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Letter extraction rules
    pub letter: LetterRules,

    /// Report extraction rules
    pub report: ReportRules,

    /// Invoice extraction rules
    pub invoice: InvoiceRules,

    /// File extension (without the dot) → format
    pub extensions: BTreeMap<String, DocumentFormat>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        let extensions = [
            ("letter", DocumentFormat::Letter),
            ("report", DocumentFormat::Report),
            ("invoice", DocumentFormat::Invoice),
            ("jpg", DocumentFormat::Image),
            ("jpeg", DocumentFormat::Image),
            ("png", DocumentFormat::Image),
        ]
        .into_iter()
        .map(|(ext, format)| (ext.to_string(), format))
        .collect();

        Self {
            letter: LetterRules::default(),
            report: ReportRules::default(),
            invoice: InvoiceRules::default(),
            extensions,
        }
    }
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        let required = [
            ("letter.name_prefix", &self.letter.name_prefix),
            ("letter.sign_off_marker", &self.letter.sign_off_marker),
            ("report.name_prefix", &self.report.name_prefix),
            ("invoice.name_prefix", &self.invoice.name_prefix),
            ("invoice.amount_prefix", &self.invoice.amount_prefix),
        ];
        for (field, value) in required {
            if value.is_empty() {
                return Err(format!("{} must not be empty", field));
            }
        }

        if self.extensions.is_empty() {
            return Err("at least one extension must be registered".to_string());
        }
        for extension in self.extensions.keys() {
            if extension.is_empty() || extension.contains('.') {
                return Err(format!("invalid extension '{}'", extension));
            }
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        let config: ExtractorConfig = toml::from_str(toml_str)?;
        config.validate().map_err(ExtractorError::Config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ExtractorError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ExtractorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.extensions.get("letter"), Some(&DocumentFormat::Letter));
        assert_eq!(config.extensions.get("jpg"), Some(&DocumentFormat::Image));
    }

    #[test]
    fn test_empty_prefix_rejected() {
        let mut config = ExtractorConfig::default();
        config.report.name_prefix.clear();
        let err = config.validate().unwrap_err();
        assert!(err.contains("report.name_prefix"));
    }

    #[test]
    fn test_dotted_extension_rejected() {
        let mut config = ExtractorConfig::default();
        config.extensions.insert(".txt".to_string(), DocumentFormat::Report);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = ExtractorConfig::from_toml(
            r#"
            [letter]
            sign_off_marker = "Yours sincerely,"
            "#,
        )
        .unwrap();

        assert_eq!(config.letter.sign_off_marker, "Yours sincerely,");
        assert_eq!(config.letter.name_prefix, "Dear ");
        assert_eq!(config.report, ReportRules::default());
        assert_eq!(config.extensions.len(), 6);
    }

    #[test]
    fn test_invalid_toml_values_rejected() {
        let result = ExtractorConfig::from_toml(
            r#"
            [invoice]
            amount_prefix = ""
            "#,
        );
        assert!(matches!(result, Err(ExtractorError::Config(_))));

        let result = ExtractorConfig::from_toml("[extensions]\ntxt = \"spreadsheet\"\n");
        assert!(matches!(result, Err(ExtractorError::TomlParse(_))));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ExtractorConfig::default();
        let toml_str = config.to_toml().unwrap();
        let parsed = ExtractorConfig::from_toml(&toml_str).unwrap();

        assert_eq!(config, parsed);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("extractor.toml");
        std::fs::write(&path, "[extensions]\ntxt = \"report\"\n").unwrap();

        let config = ExtractorConfig::from_file(&path).unwrap();
        assert_eq!(config.extensions.len(), 1);
        assert_eq!(config.extensions.get("txt"), Some(&DocumentFormat::Report));

        assert!(matches!(
            ExtractorConfig::from_file(dir.path().join("missing.toml")),
            Err(ExtractorError::Io(_))
        ));
    }
}
