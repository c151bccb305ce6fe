//! One importer per document format
//!
//! Text formats are fixed pipelines over [`TextFile`](crate::TextFile)
//! calls; images read their pixel size from the file header.

mod image;
mod invoice;
mod letter;
mod report;

pub use self::image::ImageImporter;
pub use self::invoice::InvoiceImporter;
pub use self::letter::LetterImporter;
pub use self::report::ReportImporter;
