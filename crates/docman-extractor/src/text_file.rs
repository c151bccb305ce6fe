//! Line-oriented attribute extraction
//!
//! Text formats are read into a [`TextFile`] and then picked apart with two
//! primitives: a single prefixed line, or a block of consecutive lines ended
//! by a stop predicate. Block extraction returns the cursor so that a second
//! block can start right after the first.

use crate::error::ExtractorError;
use docman_domain::AttributeMap;
use tracing::debug;

/// Stop predicates for [`TextFile::extract_block`]
pub mod stop {
    /// Stop at the first empty line
    pub fn blank_line(line: &str) -> bool {
        line.is_empty()
    }

    /// Consume to end of file
    pub fn never(_line: &str) -> bool {
        false
    }

    /// Stop at the first line beginning with `marker`
    pub fn starts_with(marker: &str) -> impl Fn(&str) -> bool + '_ {
        move |line: &str| line.starts_with(marker)
    }
}

/// A text document split into lines, plus the attributes extracted so far
#[derive(Debug, Clone)]
pub struct TextFile {
    lines: Vec<String>,
    attributes: AttributeMap,
}

impl TextFile {
    /// Decode UTF-8 bytes and split them into lines
    ///
    /// # Errors
    /// Returns [`ExtractorError::InvalidEncoding`] for bytes that are not UTF-8.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ExtractorError> {
        let text = std::str::from_utf8(bytes)?;
        Ok(Self::from_text(text))
    }

    /// Split text into lines (`\n` or `\r\n` terminated)
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
            attributes: AttributeMap::new(),
        }
    }

    /// The lines of the file
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Attributes extracted so far
    pub fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    /// Store line 0 with `prefix` removed as `attribute`
    ///
    /// A first line that does not start with `prefix` is stored whole; an
    /// empty file stores the empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use docman_extractor::TextFile;
    ///
    /// let mut file = TextFile::from_text("Dear Joe Bloggs\n\n123 Fake Street\n");
    /// file.extract_prefixed_line("Dear ", "patient");
    /// assert_eq!(file.attributes().get("patient"), Some("Joe Bloggs"));
    /// ```
    pub fn extract_prefixed_line(&mut self, prefix: &str, attribute: &str) {
        let line = self.lines.first().map(String::as_str).unwrap_or("");
        let value = line.strip_prefix(prefix).unwrap_or(line).to_string();

        debug!("Extracted '{}' from line 0", attribute);
        self.attributes.insert(attribute, value);
    }

    /// Store the first line starting with `prefix`, minus the prefix
    ///
    /// Returns the index of that line. When no line matches, nothing is
    /// stored and `None` is returned.
    pub fn extract_prefixed_scan(&mut self, prefix: &str, attribute: &str) -> Option<usize> {
        let (index, value) = self
            .lines
            .iter()
            .enumerate()
            .find_map(|(idx, line)| line.strip_prefix(prefix).map(|rest| (idx, rest.to_string())))?;

        debug!("Extracted '{}' from line {}", attribute, index);
        self.attributes.insert(attribute, value);
        Some(index)
    }

    /// Store the lines from `start` up to (not including) the first line for
    /// which `stop` holds
    ///
    /// The block is joined with `\n` and trimmed. Returns the index of the
    /// stopping line, or the line count when the input ran out first (never
    /// less than `start`). A predicate that fires immediately stores the
    /// empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use docman_extractor::text_file::{stop, TextFile};
    ///
    /// let mut file = TextFile::from_text("Dear Joe\n\nLine one\nLine two\n\nBody\n");
    /// let end = file.extract_block(2, stop::blank_line, "address");
    /// assert_eq!(end, 4);
    /// assert_eq!(file.attributes().get("address"), Some("Line one\nLine two"));
    /// ```
    pub fn extract_block<P>(&mut self, start: usize, stop: P, attribute: &str) -> usize
    where
        P: Fn(&str) -> bool,
    {
        let remaining = self.lines.get(start..).unwrap_or(&[]);
        let taken = remaining
            .iter()
            .position(|line| stop(line.as_str()))
            .unwrap_or(remaining.len());

        let value = remaining[..taken].join("\n").trim().to_string();
        let end = start + taken;

        debug!(
            "Extracted '{}' from lines {}..{} ({} chars)",
            attribute,
            start,
            end,
            value.len()
        );
        self.attributes.insert(attribute, value);
        end
    }

    /// Store a fixed value
    pub fn set(&mut self, attribute: &str, value: &str) {
        self.attributes.insert(attribute, value);
    }

    /// Hand over the extracted attributes
    pub fn into_attributes(self) -> AttributeMap {
        self.attributes
    }
}
