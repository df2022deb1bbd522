//! The implicit-layout hook
//!
//! Guarantees every loaded page a non-blank `layout` metadata value by the
//! time metadata loading finishes, without altering an explicitly set
//! layout and without touching any other key.

use serde_yaml::Value;

use super::MetadataHook;
use crate::error::Result;
use crate::metadata::{DEFAULT_LAYOUT, LAYOUT_KEY, is_blank};
use crate::page::Page;

/// Assigns `layout: default` to pages whose front matter names no layout
///
/// A layout counts as "not named" when the key is absent or its value is
/// blank per [`is_blank`]. Applying the hook twice equals applying it once:
/// the second pass sees the layout already set and does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImplicitLayout;

impl MetadataHook for ImplicitLayout {
    fn name(&self) -> &str {
        "implicit-layout"
    }

    fn after_read(&self, page: &mut Page) -> Result<()> {
        let missing = page.data().get(LAYOUT_KEY).is_none_or(is_blank);
        if missing {
            log::debug!(
                "page {} names no layout, defaulting to '{DEFAULT_LAYOUT}'",
                page.display_path()
            );
            page.data_mut()
                .set(LAYOUT_KEY, Value::String(DEFAULT_LAYOUT.to_string()));
        }
        Ok(())
    }
}
