//! Front matter errors

use super::PagemetaError;

/// Creates an unterminated front matter error
pub fn unterminated(path: impl Into<String>) -> PagemetaError {
    PagemetaError::FrontMatterUnterminated { path: path.into() }
}

/// Creates a front matter parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> PagemetaError {
    PagemetaError::FrontMatterParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a non-mapping front matter error
pub fn not_a_mapping(path: impl Into<String>, found: impl Into<String>) -> PagemetaError {
    PagemetaError::FrontMatterNotAMapping {
        path: path.into(),
        found: found.into(),
    }
}

/// Creates a non-string key error
pub fn non_string_key(path: impl Into<String>, found: impl Into<String>) -> PagemetaError {
    PagemetaError::NonStringKey {
        path: path.into(),
        found: found.into(),
    }
}
