//! Well-known attribute names
//!
//! Each format populates its own subset of these; only `path` and `type`
//! are present on every document.

/// Source path of the imported file, set by the store
pub const PATH: &str = "path";

/// Format tag of the importer that produced the document
pub const TYPE: &str = "type";

/// Patient name
pub const PATIENT: &str = "patient";

/// Postal address block of a letter
pub const ADDRESS: &str = "address";

/// Free-text body of a letter or report
pub const BODY: &str = "body";

/// Billed amount of an invoice
pub const AMOUNT: &str = "amount";

/// Image width in pixels
pub const WIDTH: &str = "width";

/// Image height in pixels
pub const HEIGHT: &str = "height";
