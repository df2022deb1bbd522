//! Front matter splitting and parsing
//!
//! This module handles:
//! - Splitting a raw page buffer into a YAML block and the body
//! - Parsing the block into a `MetadataRecord`
//!
//! A front matter block exists iff the buffer's first line is exactly `---`
//! and a later line is exactly `---`. Everything between the delimiters is
//! YAML; everything after the closing delimiter is the page body.

use serde_yaml::Value;

use super::{MetadataRecord, describe_value};
use crate::error::{self, Result};

const DELIMITER: &str = "---";

/// A raw page buffer split into metadata and body
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    /// Metadata parsed from the YAML block, empty if the buffer had none
    pub data: MetadataRecord,
    /// Page content after the closing delimiter
    pub body: String,
}

impl FrontMatter {
    /// Split a raw page buffer into front matter and body
    ///
    /// `path` is used for error context only; pass
    /// [`crate::error::MEMORY_SOURCE`] for in-memory buffers.
    ///
    /// # Errors
    ///
    /// - `FrontMatterUnterminated` if an opening `---` is never closed
    /// - `FrontMatterParseFailed` if the block is not valid YAML
    /// - `FrontMatterNotAMapping` if the block parses to a scalar or sequence
    /// - `NonStringKey` if the mapping has a non-string key
    pub fn split(raw: &str, path: &str) -> Result<Self> {
        let lines: Vec<&str> = raw.lines().collect();

        if lines.first().copied() != Some(DELIMITER) {
            return Ok(Self {
                data: MetadataRecord::new(),
                body: raw.to_string(),
            });
        }

        let Some(end_idx) = lines[1..].iter().position(|line| line.eq(&DELIMITER)) else {
            return Err(error::front_matter_unterminated(path));
        };
        let end_idx = end_idx + 1;

        let block = lines[1..end_idx].join("\n");
        let data = parse_block(&block, path)?;

        // Skip empty lines between the closing delimiter and the body
        let body_lines: Vec<&str> = lines[end_idx + 1..]
            .iter()
            .skip_while(|line| line.trim().is_empty())
            .copied()
            .collect();
        let body = body_lines.join("\n");

        Ok(Self { data, body })
    }
}

/// Parse a front matter block into a metadata record
///
/// An empty or comment-only block (YAML null) yields an empty record.
fn parse_block(block: &str, path: &str) -> Result<MetadataRecord> {
    if block.trim().is_empty() {
        return Ok(MetadataRecord::new());
    }

    let value: Value = serde_yaml::from_str(block)
        .map_err(|e| error::front_matter_parse_failed(path, e.to_string()))?;

    match value {
        Value::Null => Ok(MetadataRecord::new()),
        Value::Mapping(mapping) => MetadataRecord::from_mapping(mapping, path),
        other => Err(error::front_matter_not_a_mapping(path, describe_value(&other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{MEMORY_SOURCE, PagemetaError};

    #[test]
    fn test_split_with_front_matter() {
        let raw = "---\ntitle: Hello\nlayout: post\n---\n\nBody content";
        let fm = FrontMatter::split(raw, MEMORY_SOURCE).unwrap();

        assert_eq!(fm.data.get_str("title"), Some("Hello"));
        assert_eq!(fm.data.get_str("layout"), Some("post"));
        assert_eq!(fm.body, "Body content");
    }

    #[test]
    fn test_split_without_front_matter() {
        let raw = "Just body content";
        let fm = FrontMatter::split(raw, MEMORY_SOURCE).unwrap();

        assert!(fm.data.is_empty());
        assert_eq!(fm.body, "Just body content");
    }

    #[test]
    fn test_split_empty_block() {
        let fm = FrontMatter::split("---\n---\nBody", MEMORY_SOURCE).unwrap();
        assert!(fm.data.is_empty());
        assert_eq!(fm.body, "Body");
    }

    #[test]
    fn test_split_unterminated_block() {
        let err = FrontMatter::split("---\ntitle: Hello\nBody", MEMORY_SOURCE).unwrap_err();
        assert!(matches!(err, PagemetaError::FrontMatterUnterminated { .. }));
    }

    #[test]
    fn test_split_invalid_yaml() {
        let err = FrontMatter::split("---\ntitle: [unclosed\n---\nBody", MEMORY_SOURCE).unwrap_err();
        assert!(matches!(err, PagemetaError::FrontMatterParseFailed { .. }));
    }

    #[test]
    fn test_split_non_mapping_block() {
        let err = FrontMatter::split("---\n- a\n- b\n---\nBody", MEMORY_SOURCE).unwrap_err();
        assert!(matches!(
            err,
            PagemetaError::FrontMatterNotAMapping { found: ref f, .. } if f == "sequence"
        ));
    }

    #[test]
    fn test_delimiter_inside_body_is_untouched() {
        let raw = "---\ntitle: Hello\n---\nBody\n---\nMore body";
        let fm = FrontMatter::split(raw, MEMORY_SOURCE).unwrap();
        assert_eq!(fm.body, "Body\n---\nMore body");
    }

    #[test]
    fn test_crlf_line_endings() {
        let raw = "---\r\nlayout: post\r\n---\r\nBody";
        let fm = FrontMatter::split(raw, MEMORY_SOURCE).unwrap();
        assert_eq!(fm.data.get_str("layout"), Some("post"));
        assert_eq!(fm.body, "Body");
    }
}
