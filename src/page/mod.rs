//! Content pages and the metadata-loading capability
//!
//! A [`Page`] owns one metadata record and one content body. Loaders (see
//! [`loader`]) populate both from a raw source buffer; metadata hooks run
//! after the native load step and mutate the record in place.

pub mod loader;

pub use loader::{FrontMatterLoader, HookedLoader, MetadataLoader};

use std::path::{Path, PathBuf};

use crate::error::{self, MEMORY_SOURCE, Result};
use crate::hooks;
use crate::metadata::{LAYOUT_KEY, MetadataRecord};

/// A single content page
///
/// Created empty, then populated by a [`MetadataLoader`]. The convenience
/// constructors [`Page::from_buffer`] and [`Page::from_file`] run the
/// native front matter loader and then the process-wide hook registry, so
/// every page built through them carries the hook guarantees (notably a
/// non-blank `layout` once [`crate::install_default_hooks`] has run).
#[derive(Debug, Clone, Default)]
pub struct Page {
    source: Option<PathBuf>,
    data: MetadataRecord,
    content: String,
}

impl Page {
    /// Create an empty in-memory page
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty page associated with a source path
    pub fn with_source(path: impl Into<PathBuf>) -> Self {
        Self {
            source: Some(path.into()),
            ..Self::default()
        }
    }

    /// Load a page from a raw buffer, applying the process-wide hooks
    ///
    /// # Errors
    ///
    /// Propagates native loader failures unchanged; see
    /// [`FrontMatter::split`](crate::metadata::FrontMatter::split).
    pub fn from_buffer(raw: &str) -> Result<Self> {
        let mut page = Self::new();
        FrontMatterLoader.read_metadata(&mut page, raw)?;
        hooks::apply_global_hooks(&mut page)?;
        Ok(page)
    }

    /// Load a page from a file, applying the process-wide hooks
    ///
    /// # Errors
    ///
    /// Returns `PageReadFailed` when the file cannot be read, and
    /// propagates native loader failures unchanged.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| error::page_read_failed(path.display().to_string(), e.to_string()))?;

        let mut page = Self::with_source(path);
        FrontMatterLoader.read_metadata(&mut page, &raw)?;
        hooks::apply_global_hooks(&mut page)?;
        Ok(page)
    }

    /// Source path this page was loaded from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Source path for display and error context
    pub fn display_path(&self) -> String {
        match &self.source {
            Some(path) => path.display().to_string(),
            None => MEMORY_SOURCE.to_string(),
        }
    }

    /// The page's metadata record
    pub fn data(&self) -> &MetadataRecord {
        &self.data
    }

    /// Mutable access to the page's metadata record
    pub fn data_mut(&mut self) -> &mut MetadataRecord {
        &mut self.data
    }

    /// The page's content body (everything after the front matter)
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The page's layout name, if the metadata carries one as a string
    pub fn layout(&self) -> Option<&str> {
        self.data.get_str(LAYOUT_KEY)
    }

    /// Replace the page's record and body in one step
    ///
    /// Loaders use this so a failed load never leaves a half-populated page.
    pub(crate) fn install(&mut self, data: MetadataRecord, content: String) {
        self.data = data;
        self.content = content;
    }
}
