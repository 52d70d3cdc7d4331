//! Predictor adapter.
//!
//! The inference function lives in a separately built WASM module that
//! `index.html` loads and exposes as `window.nn`. This side treats it as a
//! pure black box: pixels and the unmodified weight document in, a sequence
//! of per-class scores out. Rejections and undecodable results come back as
//! `Err`, not as unhandled promise rejections.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use scrawl::model::ModelWeights;
use scrawl::raster::Raster;
use scrawl::score::Prediction;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = nn, js_name = predict)]
    async fn nn_predict(pixels: &[u8], model: JsValue) -> Result<JsValue, JsValue>;
}

pub(super) async fn predict(raster: &Raster, model: &ModelWeights) -> Result<Prediction, String> {
    // Hand over the document exactly as the server sent it.
    let model_js = js_sys::JSON::parse(model.raw_json())
        .map_err(|_| "weights: JSON.parse threw".to_string())?;

    let out = nn_predict(raster.as_bytes(), model_js)
        .await
        .map_err(|e| format!("predict: rejected: {}", js_error_message(&e)))?;

    let scores = decode_scores(&out)?;
    Prediction::from_scores(scores).map_err(|e| format!("predict: {e}"))
}

/// Accept either a typed `Float64Array` or a plain numeric array.
fn decode_scores(v: &JsValue) -> Result<Vec<f64>, String> {
    if let Some(arr) = v.dyn_ref::<js_sys::Float64Array>() {
        return Ok(arr.to_vec());
    }

    let arr = v
        .dyn_ref::<js_sys::Array>()
        .ok_or("predict: expected an array of scores".to_string())?;
    let mut out = Vec::with_capacity(arr.length() as usize);
    for item in arr.iter() {
        out.push(
            item.as_f64()
                .ok_or("predict: non-numeric score in result".to_string())?,
        );
    }
    Ok(out)
}

fn js_error_message(e: &JsValue) -> String {
    if let Some(s) = e.as_string() {
        return s;
    }
    if let Some(err) = e.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    "unknown error".to_string()
}
