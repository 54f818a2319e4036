//! Theme command implementation

use anyhow::{Context, Result};
use bookcase_core::storage::{clear_theme, load_theme, save_theme};
use bookcase_core::{CatalogConfig, Theme};

/// Print the effective theme, or save or forget one
pub fn theme(
    config: &CatalogConfig,
    requested: Option<Theme>,
    prefers_dark: bool,
    reset: bool,
) -> Result<()> {
    let store = config.preference_store();

    if reset {
        clear_theme(&store).with_context(|| {
            format!("Failed to clear preference in {}", store.path().display())
        })?;
    }

    let stored = match load_theme(&store) {
        Ok(theme) => theme,
        Err(e) => {
            tracing::warn!("Ignoring unreadable theme preference: {}", e);
            None
        }
    };

    let theme = Theme::resolve(requested, stored, prefers_dark);

    if requested.is_some() {
        save_theme(&store, theme).with_context(|| {
            format!("Failed to save preference to {}", store.path().display())
        })?;
    }

    println!("{}", theme);
    Ok(())
}
