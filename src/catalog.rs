use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::config::CATALOG_PATH;
use crate::error::LoadError;
use crate::model::Catalog;

fn js_error_message(err: &JsValue) -> String {
    err.as_string()
        .or_else(|| {
            js_sys::Reflect::get(err, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{err:?}"))
}

/// Fetches and parses the catalog document. One request, no retry.
pub async fn load() -> Result<Catalog, LoadError> {
    let window = web_sys::window().ok_or_else(|| LoadError::Request("no window".into()))?;
    let response = JsFuture::from(window.fetch_with_str(CATALOG_PATH))
        .await
        .map_err(|err| LoadError::Request(js_error_message(&err)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|err| LoadError::Request(js_error_message(&err)))?;

    if !response.ok() {
        return Err(LoadError::Request(format!(
            "HTTP {status}: {status_text}",
            status = response.status(),
            status_text = response.status_text()
        )));
    }

    let text = JsFuture::from(
        response
            .text()
            .map_err(|err| LoadError::Request(js_error_message(&err)))?,
    )
    .await
    .map_err(|err| LoadError::Request(js_error_message(&err)))?;
    let text = text.as_string().ok_or(LoadError::Body)?;

    Catalog::from_json(&text)
}
