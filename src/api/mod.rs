//! Remote Store Client
//!
//! REST bindings to the task store, organized by resource. All operations
//! return `Result<T, String>`; the caller maps a failure to its notice kind.

mod todos;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

pub use todos::*;

/// Issues one HTTP request and checks the status line.
///
/// Network failures and non-2xx responses collapse into the same error
/// string; callers do not distinguish transport failure kinds.
async fn send(method: &str, url: &str, body: Option<String>) -> Result<Response, String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    let has_body = body.is_some();
    if let Some(json) = body {
        opts.set_body(&JsValue::from_str(&json));
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(|err| format!("{err:?}"))?;
    if has_body {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|err| format!("{err:?}"))?;
    }

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|err| format!("{err:?}"))?;
    let response: Response = response.dyn_into().map_err(|err| format!("{err:?}"))?;

    if !response.ok() {
        return Err(format!("HTTP {} for {} {}", response.status(), method, url));
    }
    Ok(response)
}

/// Parses a JSON response body.
async fn parse_json<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, String> {
    let promise = response.json().map_err(|err| format!("{err:?}"))?;
    let value = JsFuture::from(promise).await.map_err(|err| format!("{err:?}"))?;
    serde_wasm_bindgen::from_value(value).map_err(|err| err.to_string())
}
