//! Metadata loaders
//!
//! [`MetadataLoader`] is the capability seam between pages and whatever
//! populates them. [`FrontMatterLoader`] is the native implementation;
//! [`HookedLoader`] decorates any loader with a post-read hook pass.

use crate::error::Result;
use crate::hooks::HookRegistry;
use crate::metadata::FrontMatter;
use crate::page::Page;

/// The "load metadata for this page" capability
///
/// Implementors populate the page's record and body from a raw buffer. On
/// success the record is fully replaced; on failure the page must be left
/// exactly as it was before the call.
pub trait MetadataLoader {
    /// Populate `page` from `raw`
    fn read_metadata(&self, page: &mut Page, raw: &str) -> Result<()>;
}

/// Native loader: YAML front matter into the record, remainder into the body
#[derive(Debug, Clone, Copy, Default)]
pub struct FrontMatterLoader;

impl MetadataLoader for FrontMatterLoader {
    fn read_metadata(&self, page: &mut Page, raw: &str) -> Result<()> {
        // Split first, install after: a parse failure must not touch the page
        let front_matter = FrontMatter::split(raw, &page.display_path())?;
        log::trace!(
            "read {} metadata keys from {}",
            front_matter.data.len(),
            page.display_path()
        );
        page.install(front_matter.data, front_matter.body);
        Ok(())
    }
}

/// Decorator that runs a hook registry after a successful native load
///
/// Failures from the inner loader propagate unchanged and no hook runs, so
/// the page is never left with a partially post-processed record.
#[derive(Debug)]
pub struct HookedLoader<L> {
    inner: L,
    hooks: HookRegistry,
}

impl<L: MetadataLoader> HookedLoader<L> {
    /// Wrap a loader with an explicit hook registry
    pub fn new(inner: L, hooks: HookRegistry) -> Self {
        Self { inner, hooks }
    }

    /// Wrap a loader with the builtin hook set
    ///
    /// # Errors
    ///
    /// Propagates registration failures from
    /// [`HookRegistry::register_builtins`].
    pub fn with_builtins(inner: L) -> Result<Self> {
        let mut hooks = HookRegistry::new();
        hooks.register_builtins()?;
        Ok(Self::new(inner, hooks))
    }

    /// The registry this loader applies after each read
    pub fn hooks(&self) -> &HookRegistry {
        &self.hooks
    }
}

impl<L: MetadataLoader> MetadataLoader for HookedLoader<L> {
    fn read_metadata(&self, page: &mut Page, raw: &str) -> Result<()> {
        self.inner.read_metadata(page, raw)?;
        self.hooks.apply(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PagemetaError;
    use crate::metadata::LAYOUT_KEY;

    #[test]
    fn test_native_loader_populates_page() {
        let mut page = Page::new();
        FrontMatterLoader
            .read_metadata(&mut page, "---\nlayout: post\n---\nBody")
            .unwrap();

        assert_eq!(page.layout(), Some("post"));
        assert_eq!(page.content(), "Body");
    }

    #[test]
    fn test_native_loader_failure_leaves_page_untouched() {
        let mut page = Page::new();
        page.data_mut()
            .set("title", serde_yaml::Value::String("Kept".into()));

        let err = FrontMatterLoader
            .read_metadata(&mut page, "---\ntitle: [unclosed\n---\n")
            .unwrap_err();

        assert!(matches!(err, PagemetaError::FrontMatterParseFailed { .. }));
        assert_eq!(page.data().get_str("title"), Some("Kept"));
        assert_eq!(page.content(), "");
    }

    #[test]
    fn test_hooked_loader_defaults_layout() {
        let loader = HookedLoader::with_builtins(FrontMatterLoader).unwrap();
        let mut page = Page::new();
        loader
            .read_metadata(&mut page, "---\ntitle: Hello\n---\nBody")
            .unwrap();

        assert_eq!(page.layout(), Some("default"));
        assert_eq!(page.data().get_str("title"), Some("Hello"));
    }

    #[test]
    fn test_hooked_loader_preserves_explicit_layout() {
        let loader = HookedLoader::with_builtins(FrontMatterLoader).unwrap();
        let mut page = Page::new();
        loader
            .read_metadata(&mut page, "---\nlayout: post\n---\nBody")
            .unwrap();

        assert_eq!(page.layout(), Some("post"));
    }

    #[test]
    fn test_hooked_loader_skips_hooks_on_failure() {
        let loader = HookedLoader::with_builtins(FrontMatterLoader).unwrap();
        let mut page = Page::new();

        let result = loader.read_metadata(&mut page, "---\nunterminated: true\n");

        assert!(result.is_err());
        // No default layout was applied on the error path
        assert!(!page.data().contains(LAYOUT_KEY));
    }
}
