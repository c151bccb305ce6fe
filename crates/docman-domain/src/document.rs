//! Document module - the result of one successful import

use crate::attribute_map::AttributeMap;
use crate::attributes;

/// An imported document
///
/// Wraps the attribute map produced by an importer (plus the `path` set by
/// the store). Documents are immutable once created; there is no update or
/// delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    attributes: AttributeMap,
}

impl Document {
    /// Create a document that takes ownership of the given attributes
    pub fn new(attributes: AttributeMap) -> Self {
        Self { attributes }
    }

    /// Look up an attribute by name
    ///
    /// Returns `None` if the importer never populated it.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    /// All attributes in extraction order
    pub fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    /// The format tag (`letter`, `report`, ...)
    pub fn document_type(&self) -> Option<&str> {
        self.attribute(attributes::TYPE)
    }

    /// The source path recorded at import time
    pub fn path(&self) -> Option<&str> {
        self.attribute(attributes::PATH)
    }
}

impl From<AttributeMap> for Document {
    fn from(attributes: AttributeMap) -> Self {
        Self::new(attributes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::{PATH, PATIENT, TYPE};

    #[test]
    fn test_attribute_lookup() {
        let document: Document = [(PATIENT, "Joe Bloggs"), (TYPE, "report"), (PATH, "a.report")]
            .into_iter()
            .collect::<AttributeMap>()
            .into();

        assert_eq!(document.attribute(PATIENT), Some("Joe Bloggs"));
        assert_eq!(document.document_type(), Some("report"));
        assert_eq!(document.path(), Some("a.report"));
        assert_eq!(document.attribute("width"), None);
    }
}
