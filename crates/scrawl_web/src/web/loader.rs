//! Model loader: one fetch at startup, held for the page lifetime.
//!
//! Every failure mode here (network error, non-2xx status, non-JSON body) is
//! an explicit `Err` the caller surfaces in the UI, never a silently empty
//! model.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use scrawl::model::ModelWeights;

pub(super) async fn fetch_model(url: &str) -> Result<ModelWeights, String> {
    let window = web_sys::window().ok_or("no window".to_string())?;

    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|_| format!("fetch: request for {url} failed"))?;
    let resp = resp
        .dyn_into::<web_sys::Response>()
        .map_err(|_| "fetch: expected a Response".to_string())?;

    if !resp.ok() {
        return Err(format!("fetch: {url} returned HTTP {}", resp.status()));
    }

    let text_promise = resp.text().map_err(|_| "fetch: text() threw".to_string())?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|_| "fetch: reading body failed".to_string())?;
    let text = text
        .as_string()
        .ok_or("fetch: body is not a string".to_string())?;

    ModelWeights::from_json_str(&text).map_err(|e| format!("weights: {e}"))
}
