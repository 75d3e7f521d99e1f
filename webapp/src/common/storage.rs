use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage};

use folio_common::theme::{THEME_KEY, ThemeStore};

// local storage can be missing entirely (privacy modes, sandboxed iframes), in
// which case gloo's raw() would throw, so check before touching it
fn local_storage() -> anyhow::Result<web_sys::Storage> {
    let available = web_sys::window()
        .map(|window| matches!(window.local_storage(), Ok(Some(_))))
        .unwrap_or(false);

    if available {
        Ok(LocalStorage::raw())
    } else {
        Err(anyhow::Error::msg("local storage is not available"))
    }
}

// the theme flag is kept as a bare "dark"/"light" string rather than json
#[derive(Debug, Default)]
pub struct LocalThemeStore;

impl ThemeStore for LocalThemeStore {
    type Error = anyhow::Error;

    fn load(&self) -> anyhow::Result<Option<String>> {
        local_storage()?.get_item(THEME_KEY).map_err(|err| {
            console_error!(format!("Failed to fetch local storage {THEME_KEY}: {err:?}"));
            anyhow::Error::msg("Local storage failure, see console log")
        })
    }

    fn save(&mut self, value: &str) -> anyhow::Result<()> {
        local_storage()?.set_item(THEME_KEY, value).map_err(|err| {
            console_error!(format!("Failed to set local storage {THEME_KEY}: {err:?}"));
            anyhow::Error::msg("Local storage failure, see console log")
        })
    }
}
