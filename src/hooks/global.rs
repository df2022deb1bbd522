//! Process-wide hook installation
//!
//! Hooks that should reach every page in the process are registered through
//! an explicit, one-time initialization call rather than an import-time
//! side effect:
//!
//! - [`install_default_hooks`] installs the builtin set exactly once per
//!   process; repeated calls are no-ops.
//! - The installed registry has no teardown; the process owns its lifetime.
//! - Until installation, pages load through the bare native path.

use once_cell::sync::OnceCell;

use super::HookRegistry;
use crate::error::Result;
use crate::page::Page;

static GLOBAL_HOOKS: OnceCell<HookRegistry> = OnceCell::new();

/// Install the builtin hook set process-wide
///
/// Idempotent: the first call wins, later calls (including concurrent ones)
/// return `Ok(())` without replacing the installed registry.
///
/// # Errors
///
/// Propagates registration failures from
/// [`HookRegistry::register_builtins`].
pub fn install_default_hooks() -> Result<()> {
    if GLOBAL_HOOKS.get().is_some() {
        return Ok(());
    }

    let mut registry = HookRegistry::new();
    registry.register_builtins()?;

    // A lost race means another thread finished installing first
    if GLOBAL_HOOKS.set(registry).is_ok() {
        log::debug!("installed process-wide metadata hooks");
    }
    Ok(())
}

/// Whether the process-wide hook registry has been installed
pub fn global_hooks_installed() -> bool {
    GLOBAL_HOOKS.get().is_some()
}

/// Apply the process-wide hooks to a page, if any are installed
pub(crate) fn apply_global_hooks(page: &mut Page) -> Result<()> {
    match GLOBAL_HOOKS.get() {
        Some(registry) => registry.apply(page),
        None => Ok(()),
    }
}
