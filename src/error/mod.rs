//! Error types and handling for Pagemeta
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`front_matter`]: Front matter splitting and parsing errors
//! - [`page`]: Page loading errors
//! - [`hooks`]: Hook registration errors

pub mod front_matter;
pub mod hooks;
pub mod page;

// Re-export convenience constructors from submodules
pub use front_matter::{
    not_a_mapping as front_matter_not_a_mapping, non_string_key,
    parse_failed as front_matter_parse_failed, unterminated as front_matter_unterminated,
};
pub use hooks::duplicate as duplicate_hook;
pub use page::read_failed as page_read_failed;

use miette::Diagnostic;
use thiserror::Error;

/// Source path placeholder for pages loaded from an in-memory buffer
pub const MEMORY_SOURCE: &str = "<memory>";

/// Main error type for Pagemeta operations
#[derive(Error, Diagnostic, Debug)]
pub enum PagemetaError {
    // Page errors
    #[error("Failed to read page source: {path}")]
    #[diagnostic(code(pagemeta::page::read_failed))]
    PageReadFailed { path: String, reason: String },

    // Front matter errors
    #[error("Unterminated front matter block in: {path}")]
    #[diagnostic(
        code(pagemeta::front_matter::unterminated),
        help("A front matter block opened with '---' must be closed by a line containing only '---'")
    )]
    FrontMatterUnterminated { path: String },

    #[error("Failed to parse front matter in: {path}")]
    #[diagnostic(code(pagemeta::front_matter::parse_failed))]
    FrontMatterParseFailed { path: String, reason: String },

    #[error("Front matter in {path} is not a mapping (found {found})")]
    #[diagnostic(
        code(pagemeta::front_matter::not_a_mapping),
        help("Front matter must be a YAML mapping of string keys to values")
    )]
    FrontMatterNotAMapping { path: String, found: String },

    #[error("Front matter in {path} has a non-string key (found {found})")]
    #[diagnostic(code(pagemeta::front_matter::non_string_key))]
    NonStringKey { path: String, found: String },

    // Hook errors
    #[error("Hook '{name}' is already registered")]
    #[diagnostic(
        code(pagemeta::hooks::duplicate),
        help("Hook names must be unique within a registry")
    )]
    DuplicateHook { name: String },

    // Fallthrough errors
    #[error("IO error: {message}")]
    #[diagnostic(code(pagemeta::io_error))]
    IoError { message: String },

    #[error("YAML error: {message}")]
    #[diagnostic(code(pagemeta::yaml_error))]
    YamlError { message: String },
}

impl From<std::io::Error> for PagemetaError {
    fn from(err: std::io::Error) -> Self {
        PagemetaError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for PagemetaError {
    fn from(err: serde_yaml::Error) -> Self {
        PagemetaError::YamlError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, PagemetaError>;
