//! Persistent theme preference, backed by `localStorage`.
//!
//! Storage can be unavailable (privacy mode, disabled cookies, quota) and
//! every failure path degrades silently: reads report no preference,
//! writes are dropped. Requires a browser environment; the native build
//! compiles to the same silent fallbacks.

use crate::state::resolver::PreferenceStore;
use crate::state::theme::{StoredPreference, Theme};

/// Key holding the literal value `dark` or `light`.
#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "darkmode-preference";

/// [`PreferenceStore`] over the browser's `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalPreferenceStore;

impl PreferenceStore for LocalPreferenceStore {
    fn get(&self) -> StoredPreference {
        #[cfg(feature = "csr")]
        {
            let raw = web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
            StoredPreference::parse(raw.as_deref())
        }
        #[cfg(not(feature = "csr"))]
        {
            StoredPreference::Unset
        }
    }

    fn set(&mut self, theme: Theme) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            {
                let _ = storage.set_item(STORAGE_KEY, theme.as_str());
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = theme;
        }
    }
}
