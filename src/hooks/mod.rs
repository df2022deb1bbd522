//! Metadata hook system
//!
//! Hooks post-process a page's metadata record after the native load step.
//! New hooks are added by implementing the [`MetadataHook`] trait and
//! registering with a [`HookRegistry`] - either one owned by a
//! [`HookedLoader`](crate::page::HookedLoader), or the process-wide
//! registry installed once via [`install_default_hooks`].
//!
//! ## Built-in hooks
//!
//! - **implicit-layout**: guarantees every page a non-blank `layout` value
//!
//! ## Adding a new hook
//!
//! 1. Create a hook type implementing `MetadataHook`
//! 2. Register it with `HookRegistry::register`
//! 3. Apply the registry after loads, or wire it through `HookedLoader`

pub mod global;
pub mod implicit_layout;

pub use global::{global_hooks_installed, install_default_hooks};
pub(crate) use global::apply_global_hooks;
pub use implicit_layout::ImplicitLayout;

use std::sync::Arc;

use crate::error::{self, Result};
use crate::page::Page;

/// A post-read step over a page's metadata record
///
/// Hooks run strictly after the native load has populated the record.
/// They mutate the record in place and must not touch keys outside their
/// concern. Hooks are expected to be idempotent: applying one twice in
/// succession must equal applying it once.
pub trait MetadataHook: Send + Sync + std::fmt::Debug {
    /// Unique identifier for this hook (e.g., "implicit-layout")
    fn name(&self) -> &str;

    /// Post-process a freshly loaded page
    fn after_read(&self, page: &mut Page) -> Result<()>;
}

/// Registry of metadata hooks, applied in registration order
#[derive(Debug, Default)]
pub struct HookRegistry {
    hooks: Vec<Arc<dyn MetadataHook>>,
}

impl HookRegistry {
    /// Create a new empty hook registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a metadata hook
    ///
    /// # Errors
    ///
    /// Returns `PagemetaError::DuplicateHook` if a hook with the same name
    /// is already registered.
    pub fn register(&mut self, hook: Box<dyn MetadataHook>) -> Result<()> {
        let name = hook.name();
        if self.hooks.iter().any(|existing| existing.name() == name) {
            return Err(error::duplicate_hook(name));
        }
        self.hooks.push(Arc::from(hook));
        Ok(())
    }

    /// Register all built-in hooks
    ///
    /// # Errors
    ///
    /// Returns an error if any built-in hook fails to register
    /// (e.g., duplicate name from an earlier manual registration).
    pub fn register_builtins(&mut self) -> Result<()> {
        self.register(Box::new(ImplicitLayout))?;
        Ok(())
    }

    /// Apply every registered hook to a page, in registration order
    ///
    /// # Errors
    ///
    /// Propagates the first hook failure; later hooks do not run.
    pub fn apply(&self, page: &mut Page) -> Result<()> {
        for hook in &self.hooks {
            hook.after_read(page)?;
        }
        Ok(())
    }

    /// Find a registered hook by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn MetadataHook>> {
        self.hooks.iter().find(|hook| hook.name() == name).cloned()
    }

    /// Registered hook names, in registration order
    pub fn names(&self) -> Vec<&str> {
        self.hooks.iter().map(|hook| hook.name()).collect()
    }

    /// Number of registered hooks
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Whether the registry has no hooks
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}
