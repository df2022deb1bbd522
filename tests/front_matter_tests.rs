//! Front matter splitting behavior through the public API
//!
//! Covers the split rules the native loader guarantees before any hook runs.

use pagemeta::error::MEMORY_SOURCE;
use pagemeta::{FrontMatter, FrontMatterLoader, MetadataLoader, Page, PagemetaError};

// ============================================================================
// Split rules
// ============================================================================

#[test]
fn test_no_front_matter_yields_empty_record_and_full_body() {
    let fm = FrontMatter::split("# Title\n\nProse only.", MEMORY_SOURCE).unwrap();
    assert!(fm.data.is_empty());
    assert_eq!(fm.body, "# Title\n\nProse only.");
}

#[test]
fn test_block_parses_into_record_and_body_is_preserved() {
    let raw = "---\ntitle: Hello\ntags:\n  - a\n  - b\n---\n\n# Heading\n\nBody text";
    let fm = FrontMatter::split(raw, MEMORY_SOURCE).unwrap();

    assert_eq!(fm.data.get_str("title"), Some("Hello"));
    assert_eq!(fm.data.len(), 2);
    assert_eq!(fm.body, "# Heading\n\nBody text");
}

#[test]
fn test_comment_only_block_is_empty_record() {
    let fm = FrontMatter::split("---\n# nothing here\n---\nBody", MEMORY_SOURCE).unwrap();
    assert!(fm.data.is_empty());
    assert_eq!(fm.body, "Body");
}

#[test]
fn test_delimiter_must_open_the_buffer() {
    // A blank first line means the buffer has no front matter at all
    let raw = "\n---\ntitle: Hello\n---\nBody";
    let fm = FrontMatter::split(raw, MEMORY_SOURCE).unwrap();
    assert!(fm.data.is_empty());
    assert_eq!(fm.body, raw);
}

// ============================================================================
// Failure modes
// ============================================================================

#[test]
fn test_unterminated_block_is_an_error() {
    let err = FrontMatter::split("---\ntitle: Hello", MEMORY_SOURCE).unwrap_err();
    assert!(matches!(err, PagemetaError::FrontMatterUnterminated { .. }));
}

#[test]
fn test_invalid_yaml_is_an_error() {
    let err = FrontMatter::split("---\ntitle: \"unclosed\n---\nBody", MEMORY_SOURCE).unwrap_err();
    assert!(matches!(err, PagemetaError::FrontMatterParseFailed { .. }));
}

#[test]
fn test_scalar_block_is_an_error() {
    let err = FrontMatter::split("---\njust a string\n---\nBody", MEMORY_SOURCE).unwrap_err();
    assert!(matches!(err, PagemetaError::FrontMatterNotAMapping { .. }));
}

#[test]
fn test_loader_failure_reports_the_page_path() {
    let mut page = Page::with_source("content/broken.md");
    let err = FrontMatterLoader
        .read_metadata(&mut page, "---\nnever closed")
        .unwrap_err();

    match err {
        PagemetaError::FrontMatterUnterminated { path } => {
            assert_eq!(path, "content/broken.md");
        }
        other => panic!("unexpected error: {other}"),
    }
}
