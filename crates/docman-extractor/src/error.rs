//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur during extraction
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Reading the source failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Text document is not valid UTF-8
    #[error("Malformed text input: {0}")]
    InvalidEncoding(#[from] std::str::Utf8Error),

    /// Image container format could not be recognised
    #[error("Malformed image input: unrecognised image format")]
    UnknownImageFormat,

    /// Image header could not be decoded
    #[error("Malformed image input: {0}")]
    Image(#[from] image::ImageError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML parsing error
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl ExtractorError {
    /// Whether the failure came from the input bytes themselves
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            ExtractorError::InvalidEncoding(_)
                | ExtractorError::UnknownImageFormat
                | ExtractorError::Image(_)
        )
    }
}
