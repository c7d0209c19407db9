#[cfg(target_arch = "wasm32")]
use web_sys::{Storage, Window};

#[cfg(target_arch = "wasm32")]
pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

#[cfg(target_arch = "wasm32")]
pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

/// Full-page navigation; a no-op outside the browser.
pub fn redirect(path: &str) {
    #[cfg(target_arch = "wasm32")]
    if let Ok(win) = window() {
        if win.location().set_href(path).is_err() {
            log::warn!("failed to navigate to {}", path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    log::debug!("redirect to {} skipped outside the browser", path);
}
