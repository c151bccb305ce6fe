//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use docman_domain::attributes::{PATH, TYPE};
use docman_domain::Document;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Longest attribute value shown in a table cell.
const MAX_VALUE_WIDTH: usize = 48;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format documents output.
    pub fn format_documents(&self, documents: &[&Document]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_documents_json(documents),
            OutputFormat::Table => Ok(self.format_documents_table(documents)),
            OutputFormat::Quiet => Ok(self.format_documents_quiet(documents)),
        }
    }

    /// Format documents as JSON.
    fn format_documents_json(&self, documents: &[&Document]) -> Result<String> {
        let json_documents: Vec<serde_json::Value> = documents
            .iter()
            .map(|document| {
                let attributes: serde_json::Map<String, serde_json::Value> = document
                    .attributes()
                    .iter()
                    .map(|(name, value)| (name.to_string(), serde_json::Value::from(value)))
                    .collect();
                serde_json::Value::Object(attributes)
            })
            .collect();

        Ok(serde_json::to_string_pretty(&json_documents)?)
    }

    /// Format documents as a table.
    fn format_documents_table(&self, documents: &[&Document]) -> String {
        if documents.is_empty() {
            return self.colorize("No documents found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "Type", "Path", "Attributes"]);

        for (idx, document) in documents.iter().enumerate() {
            let details: Vec<String> = document
                .attributes()
                .iter()
                .filter(|(name, _)| *name != PATH && *name != TYPE)
                .map(|(name, value)| format!("{}: {}", name, summarize(value)))
                .collect();

            builder.push_record([
                (idx + 1).to_string(),
                document.attribute(TYPE).unwrap_or("-").to_string(),
                document.attribute(PATH).unwrap_or("-").to_string(),
                details.join("\n"),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format documents in quiet mode (paths only).
    fn format_documents_quiet(&self, documents: &[&Document]) -> String {
        documents
            .iter()
            .map(|document| document.attribute(PATH).unwrap_or_default())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format registered extensions.
    pub fn format_extensions(&self, bindings: &[(&str, &str)]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let map: serde_json::Map<String, serde_json::Value> = bindings
                    .iter()
                    .map(|(ext, format)| (ext.to_string(), serde_json::Value::from(*format)))
                    .collect();
                Ok(serde_json::to_string_pretty(&map)?)
            }
            OutputFormat::Quiet => Ok(bindings
                .iter()
                .map(|(ext, _)| *ext)
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Extension", "Format"]);
                for (ext, format) in bindings {
                    builder.push_record([format!(".{}", ext), format.to_string()]);
                }
                let mut table = builder.build();
                table.with(Style::rounded());
                Ok(table.to_string())
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Format an import summary.
    pub fn import_result(&self, imported: usize, total: usize) -> String {
        if imported == total {
            self.success(&format!("Imported {} document(s)", imported))
        } else {
            self.warning(&format!("Imported {} of {} document(s)", imported, total))
        }
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Flatten a multi-line value into one table-friendly line.
fn summarize(value: &str) -> String {
    let flat = value.replace('\n', " ⏎ ");
    if flat.chars().count() <= MAX_VALUE_WIDTH {
        return flat;
    }
    let truncated: String = flat.chars().take(MAX_VALUE_WIDTH - 1).collect();
    format!("{}…", truncated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use docman_domain::AttributeMap;

    fn create_test_document() -> Document {
        let attributes: AttributeMap = [
            ("patient", "Joe Bloggs"),
            ("body", "We discussed his switch\nfrom drinking Coke to Diet Coke."),
            ("type", "report"),
            ("path", "samples/patient.report"),
        ]
        .into_iter()
        .collect();
        Document::new(attributes)
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let document = create_test_document();
        let output = formatter.format_documents(&[&document]).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["patient"], "Joe Bloggs");
        assert_eq!(parsed[0]["type"], "report");
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let document = create_test_document();
        let output = formatter.format_documents(&[&document, &document]).unwrap();
        assert_eq!(output, "samples/patient.report\nsamples/patient.report");
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let document = create_test_document();
        let output = formatter.format_documents(&[&document]).unwrap();
        assert!(output.contains("Attributes"));
        assert!(output.contains("patient: Joe Bloggs"));
        assert!(output.contains("samples/patient.report"));
    }

    #[test]
    fn test_empty_documents() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_documents(&[]).unwrap();
        assert!(output.contains("No documents found"));
    }

    #[test]
    fn test_summarize() {
        assert_eq!(summarize("a\nb"), "a ⏎ b");
        let long = "x".repeat(100);
        let short = summarize(&long);
        assert_eq!(short.chars().count(), MAX_VALUE_WIDTH);
        assert!(short.ends_with('…'));
    }

    #[test]
    fn test_extensions_quiet() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter
            .format_extensions(&[("letter", "letter"), ("png", "image")])
            .unwrap();
        assert_eq!(output, "letter\npng");
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.import_result(1, 2), "⚠ Imported 1 of 2 document(s)");
    }
}
