pub mod api;
pub mod components;
pub mod config;
pub mod models;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

/// Browser entry point: installs the panic hook and logger, resolves the
/// API base URL, then mounts the app.
pub fn run() {
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    {
        if let Err(err) = console_log::init_with_level(log::Level::Debug) {
            web_sys::console::warn_1(&format!("logger unavailable: {}", err).into());
        }
    }
    log::info!("Starting Out of Office frontend");

    leptos::spawn_local(async move {
        config::init().await;
        router::mount_app();
    });
}
