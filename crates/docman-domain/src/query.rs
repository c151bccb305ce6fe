//! Query module - compact multi-field substring search
//!
//! A query is a comma-separated list of `name:substring` clauses:
//!
//! ```text
//! patient:Joe,body:Diet Coke
//! ```
//!
//! A document matches when, for every clause, the named attribute exists and
//! contains the substring (case-sensitive). There is no OR, no negation and
//! no escaping; whitespace is part of the clause and is never trimmed.

use crate::document::Document;
use std::fmt;
use std::str::FromStr;

const CLAUSE_SEPARATOR: char = ',';
const NAME_SEPARATOR: char = ':';

/// Errors raised while parsing query text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// A clause has no `:` between name and substring
    MissingSeparator {
        /// Zero-based clause index
        position: usize,
        /// The offending clause text
        clause: String,
    },

    /// A clause has more than one `:`
    ExtraSeparator {
        /// Zero-based clause index
        position: usize,
        /// The offending clause text
        clause: String,
    },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::MissingSeparator { position, clause } => write!(
                f,
                "Ill-formed query: clause {} '{}' is missing the '{}' separator",
                position + 1,
                clause,
                NAME_SEPARATOR
            ),
            QueryError::ExtraSeparator { position, clause } => write!(
                f,
                "Ill-formed query: clause {} '{}' must contain exactly one '{}'",
                position + 1,
                clause,
                NAME_SEPARATOR
            ),
        }
    }
}

impl std::error::Error for QueryError {}

/// One `name:substring` unit of a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    /// Attribute name to inspect
    pub name: String,

    /// Substring the attribute value must contain
    pub value: String,
}

impl Clause {
    /// Create a clause
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Check this clause against a document
    ///
    /// An absent attribute never matches.
    pub fn matches(&self, document: &Document) -> bool {
        document
            .attribute(&self.name)
            .is_some_and(|value| value.contains(self.value.as_str()))
    }

    fn parse(position: usize, text: &str) -> Result<Self, QueryError> {
        let mut separators = text.match_indices(NAME_SEPARATOR).map(|(idx, _)| idx);

        let split = separators.next().ok_or_else(|| QueryError::MissingSeparator {
            position,
            clause: text.to_string(),
        })?;

        if separators.next().is_some() {
            return Err(QueryError::ExtraSeparator {
                position,
                clause: text.to_string(),
            });
        }

        Ok(Self::new(&text[..split], &text[split + 1..]))
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.name, NAME_SEPARATOR, self.value)
    }
}

/// A parsed query: clauses ANDed together
///
/// The empty query has no clauses and matches every document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    clauses: Vec<Clause>,
}

impl Query {
    /// Build a query from already-structured clauses
    pub fn new(clauses: Vec<Clause>) -> Self {
        Self { clauses }
    }

    /// Parse query text
    ///
    /// # Errors
    /// Returns [`QueryError`] if any clause does not contain exactly one `:`.
    /// Nothing is matched when parsing fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use docman_domain::Query;
    ///
    /// let query = Query::parse("patient:Joe,body:Diet Coke").unwrap();
    /// assert_eq!(query.clauses().len(), 2);
    /// assert_eq!(query.clauses()[1].value, "Diet Coke");
    ///
    /// assert!(Query::parse("").unwrap().is_empty());
    /// assert!(Query::parse("patient").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, QueryError> {
        if text.is_empty() {
            return Ok(Self::default());
        }

        let clauses = text
            .split(CLAUSE_SEPARATOR)
            .enumerate()
            .map(|(position, clause)| Clause::parse(position, clause))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { clauses })
    }

    /// The parsed clauses in query order
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Whether the query has no clauses (matches everything)
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Check every clause against a document
    pub fn matches(&self, document: &Document) -> bool {
        self.clauses.iter().all(|clause| clause.matches(document))
    }

    /// Keep the matching documents, preserving their order
    pub fn filter<'a, I>(&self, documents: I) -> Vec<&'a Document>
    where
        I: IntoIterator<Item = &'a Document>,
    {
        documents
            .into_iter()
            .filter(|document| self.matches(document))
            .collect()
    }
}

impl FromStr for Query {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, clause) in self.clauses.iter().enumerate() {
            if idx > 0 {
                write!(f, "{}", CLAUSE_SEPARATOR)?;
            }
            write!(f, "{}", clause)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute_map::AttributeMap;
    use crate::attributes::{BODY, PATIENT, TYPE};

    fn document(pairs: &[(&str, &str)]) -> Document {
        Document::new(pairs.iter().copied().collect::<AttributeMap>())
    }

    fn letter() -> Document {
        document(&[
            (PATIENT, "Joe Bloggs"),
            (BODY, "We are writing to you to confirm the re-scheduling"),
            (TYPE, "letter"),
        ])
    }

    fn report() -> Document {
        document(&[
            (PATIENT, "Joe Bloggs"),
            (BODY, "We discussed his switch from drinking Coke to Diet Coke."),
            (TYPE, "report"),
        ])
    }

    #[test]
    fn test_parse_clauses() {
        let query = Query::parse("patient:Joe,body:Diet Coke").unwrap();
        assert_eq!(
            query.clauses(),
            &[Clause::new("patient", "Joe"), Clause::new("body", "Diet Coke")]
        );
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let query = Query::parse("").unwrap();
        assert!(query.is_empty());
        assert!(query.matches(&letter()));
        assert!(query.matches(&Document::new(AttributeMap::new())));
    }

    #[test]
    fn test_missing_separator() {
        let err = Query::parse("patient").unwrap_err();
        assert_eq!(
            err,
            QueryError::MissingSeparator {
                position: 0,
                clause: "patient".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_clause_is_rejected() {
        assert!(matches!(
            Query::parse("patient:Joe,,body:x"),
            Err(QueryError::MissingSeparator { position: 1, .. })
        ));
        assert!(matches!(
            Query::parse("patient:Joe,"),
            Err(QueryError::MissingSeparator { position: 1, .. })
        ));
    }

    #[test]
    fn test_extra_separator() {
        assert!(matches!(
            Query::parse("body:Diet:Coke"),
            Err(QueryError::ExtraSeparator { position: 0, .. })
        ));
    }

    #[test]
    fn test_whitespace_is_significant() {
        let query = Query::parse("patient: Joe").unwrap();
        assert_eq!(query.clauses()[0].value, " Joe");

        let query = Query::parse(" patient:Joe").unwrap();
        assert_eq!(query.clauses()[0].name, " patient");
        assert!(!query.matches(&letter()));
    }

    #[test]
    fn test_case_sensitive_substring() {
        assert!(Query::parse("patient:Bloggs").unwrap().matches(&letter()));
        assert!(!Query::parse("patient:bloggs").unwrap().matches(&letter()));
    }

    #[test]
    fn test_absent_attribute_never_matches() {
        let query = Query::parse("width:3").unwrap();
        assert!(!query.matches(&letter()));

        // Empty substring still needs the attribute to exist
        let query = Query::parse("width:").unwrap();
        assert!(!query.matches(&letter()));
        assert!(Query::parse("patient:").unwrap().matches(&letter()));
    }

    #[test]
    fn test_filter_selects_report() {
        let documents = vec![letter(), report()];
        let query = Query::parse("patient:Joe,body:Diet Coke").unwrap();

        let matches = query.filter(&documents);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].document_type(), Some("report"));
    }

    #[test]
    fn test_filter_preserves_order() {
        let documents = vec![report(), letter(), report()];
        let matches = Query::parse("patient:Joe").unwrap().filter(&documents);

        let types: Vec<_> = matches.iter().map(|d| d.document_type().unwrap()).collect();
        assert_eq!(types, vec!["report", "letter", "report"]);
    }

    #[test]
    fn test_duplicate_names_must_all_hold() {
        let query = Query::parse("body:Diet,body:switch").unwrap();
        assert!(query.matches(&report()));

        let query = Query::parse("body:Diet,body:teeth").unwrap();
        assert!(!query.matches(&report()));
    }

    #[test]
    fn test_display_reconstructs_text() {
        let text = "patient:Joe,body:Diet Coke";
        assert_eq!(Query::parse(text).unwrap().to_string(), text);
        assert_eq!("".parse::<Query>().unwrap().to_string(), "");
    }

    #[test]
    fn test_error_message() {
        let err = Query::parse("patient:Joe,body").unwrap_err();
        assert!(err.to_string().contains("clause 2 'body'"));
    }
}
