//! Supported document formats

use serde::{Deserialize, Serialize};
use std::fmt;

/// The document formats an importer exists for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    /// Patient letter: greeting, address block, body, sign-off
    Letter,
    /// Clinical report: patient line followed by free text
    Report,
    /// Invoice: greeting and an amount line
    Invoice,
    /// Raster image (x-ray, scan)
    Image,
}

impl DocumentFormat {
    /// All formats, in registration order
    pub const ALL: [DocumentFormat; 4] = [
        DocumentFormat::Letter,
        DocumentFormat::Report,
        DocumentFormat::Invoice,
        DocumentFormat::Image,
    ];

    /// Tag stored in the `type` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Letter => "letter",
            DocumentFormat::Report => "report",
            DocumentFormat::Invoice => "invoice",
            DocumentFormat::Image => "image",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
