//! Pagemeta - front matter metadata loading with page hooks
//!
//! A library for loading the metadata record of static-site content pages
//! from YAML front matter, with a hook mechanism that post-processes every
//! record after the native load step. The built-in `implicit-layout` hook
//! guarantees each loaded page a non-empty `layout` value, defaulting to
//! `"default"` when the front matter omits or blanks it.
//!
//! The host generator's pipeline (template resolution, rendering, site
//! traversal, output writing) stays out of this crate: pagemeta owns only
//! the "load metadata for this page" capability and its extension point.
//!
//! # Example
//!
//! ```no_run
//! use pagemeta::{install_default_hooks, Page};
//!
//! install_default_hooks()?;
//!
//! let page = Page::from_buffer("---\ntitle: Hello\n---\nBody")?;
//! assert_eq!(page.layout(), Some("default"));
//! # Ok::<(), pagemeta::PagemetaError>(())
//! ```

pub mod error;
pub mod hooks;
pub mod metadata;
pub mod page;

pub use error::{PagemetaError, Result};
pub use hooks::{
    HookRegistry, ImplicitLayout, MetadataHook, global_hooks_installed, install_default_hooks,
};
pub use metadata::{DEFAULT_LAYOUT, FrontMatter, LAYOUT_KEY, MetadataRecord, is_blank};
pub use page::{FrontMatterLoader, HookedLoader, MetadataLoader, Page};
