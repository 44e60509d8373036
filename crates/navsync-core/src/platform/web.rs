//! Browser History API backend.

use super::UrlPlatform;
use crate::error::HistoryError;
use crate::url_model::ResolvedUrl;
use wasm_bindgen::JsValue;

/// Writes through `window.history` / `window.location`.
///
/// The window is looked up per call, so constructing one never fails.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WebHistory;

fn window() -> Result<web_sys::Window, HistoryError> {
    web_sys::window().ok_or(HistoryError::NoWindow)
}

fn js_error(err: JsValue) -> HistoryError {
    HistoryError::Js(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl UrlPlatform for WebHistory {
    fn current_path(&self) -> String {
        match window().and_then(|w| w.location().pathname().map_err(js_error)) {
            Ok(path) => path,
            Err(err) => {
                tracing::warn!("cannot read location.pathname, assuming /: {}", err);
                "/".to_string()
            }
        }
    }

    fn replace_browser_url(&self, url: &ResolvedUrl) -> Result<(), HistoryError> {
        let history = window()?.history().map_err(js_error)?;
        history
            .replace_state_with_url(&JsValue::NULL, "", Some(url.as_str()))
            .map_err(js_error)
    }

    fn replace_location(&self, url: &ResolvedUrl) -> Result<(), HistoryError> {
        window()?.location().replace(url.as_str()).map_err(js_error)
    }
}
