use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

impl RuntimeConfig {
    fn normalized_base_url(&self) -> Option<String> {
        self.api_base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(|url| url.trim_end_matches('/').to_string())
    }
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::RuntimeConfig;
    use wasm_bindgen::JsValue;

    fn read_global(name: &str, keys: [&str; 2]) -> Option<String> {
        let window = web_sys::window()?;
        let any = js_sys::Reflect::get(&window, &name.into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        keys.iter()
            .filter_map(|key| js_sys::Reflect::get(&any, &(*key).into()).ok())
            .find(|value| !value.is_undefined() && !value.is_null())
            .and_then(|value| value.as_string())
    }

    // window.__OOO_ENV = { API_BASE_URL } from env.js, then window.__OOO_CONFIG.
    pub fn snapshot_from_globals() -> Option<String> {
        read_global("__OOO_ENV", ["API_BASE_URL", "api_base_url"])
            .or_else(|| read_global("__OOO_CONFIG", ["api_base_url", "API_BASE_URL"]))
    }

    pub fn write_window_config(url: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let obj = js_sys::Object::new();
        let _ = js_sys::Reflect::set(&obj, &"api_base_url".into(), &JsValue::from_str(url));
        let _ = js_sys::Reflect::set(&window, &"__OOO_CONFIG".into(), &obj);
    }

    pub async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .ok_or_else(|| anyhow::anyhow!("window location unavailable"))?;
        let response = reqwest::get(format!("{}/config.json", origin)).await?;
        if !response.status().is_success() {
            anyhow::bail!("config.json returned {}", response.status());
        }
        Ok(response.json::<RuntimeConfig>().await?)
    }
}

fn cache_base_url(value: &str) -> String {
    let value = value.trim_end_matches('/').to_string();
    let _ = API_BASE_URL.set(value.clone());
    API_BASE_URL.get().cloned().unwrap_or(value)
}

#[cfg(target_arch = "wasm32")]
async fn discover_base_url() -> Option<String> {
    if let Some(existing) = browser::snapshot_from_globals() {
        return Some(existing);
    }
    match browser::fetch_runtime_config().await {
        Ok(cfg) => {
            let url = cfg.normalized_base_url()?;
            browser::write_window_config(&url);
            Some(url)
        }
        Err(err) => {
            log::warn!("runtime config unavailable, using default: {err:#}");
            None
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn discover_base_url() -> Option<String> {
    RuntimeConfig {
        api_base_url: std::env::var("OOO_API_BASE_URL").ok(),
    }
    .normalized_base_url()
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    match discover_base_url().await {
        Some(url) => cache_base_url(&url),
        None => cache_base_url(DEFAULT_API_BASE_URL),
    }
}

pub async fn init() {
    let base_url = await_api_base_url().await;
    log::info!("API base URL: {}", base_url);
}
