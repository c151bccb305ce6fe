//! Image importer

use crate::error::ExtractorError;
use crate::format::DocumentFormat;
use ::image::io::Reader;
use docman_domain::attributes::{HEIGHT, TYPE, WIDTH};
use docman_domain::{AttributeMap, Importer};
use std::io::Cursor;
use tracing::debug;

/// Imports raster images, recording their pixel dimensions
///
/// The container format is guessed from the magic bytes rather than the file
/// extension, and only the header is decoded.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageImporter;

impl ImageImporter {
    /// Create a new image importer
    pub fn new() -> Self {
        Self
    }
}

impl Importer for ImageImporter {
    type Error = ExtractorError;

    fn format_name(&self) -> &'static str {
        DocumentFormat::Image.as_str()
    }

    fn import(&self, bytes: &[u8]) -> Result<AttributeMap, ExtractorError> {
        let reader = Reader::new(Cursor::new(bytes)).with_guessed_format()?;
        let format = reader.format().ok_or(ExtractorError::UnknownImageFormat)?;
        let (width, height) = reader.into_dimensions()?;

        debug!("Read {:?} header: {}x{}", format, width, height);

        let mut attributes = AttributeMap::new();
        attributes.insert(WIDTH, width.to_string());
        attributes.insert(HEIGHT, height.to_string());
        attributes.insert(TYPE, self.format_name());
        Ok(attributes)
    }
}
