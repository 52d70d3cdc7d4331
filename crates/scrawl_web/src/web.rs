use leptos::prelude::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;

use scrawl::model::ModelWeights;
use scrawl::score::Prediction;

use crate::ui_model::{InferencePhase, ModelStatus};

mod canvas;
mod loader;
mod predictor;
mod shell;

use shell::{Stat, ToastStack};

/// Fetched once at startup; shape belongs to the inference module.
const WEIGHTS_URL: &str = "assets/my_weights.json";

/// Drawing surface side in CSS/device pixels. Square, so the per-axis
/// downscale to 28×28 is uniform.
const DRAW_SIDE: u32 = 280;

/// Scratch canvas side: the raster the predictor consumes.
const SCRATCH_SIDE: u32 = scrawl::raster::SIDE as u32;

const BRUSH_WIDTH: f64 = 20.0;

#[derive(Clone)]
pub(crate) struct Toast {
    pub(crate) id: u64,
    pub(crate) level: ToastLevel,
    pub(crate) message: String,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum ToastLevel {
    Info,
    Success,
    Error,
}

pub fn start() {
    mount_to_body(|| view! { <App /> });
}

#[component]
fn App() -> impl IntoView {
    let (model, set_model) = signal(None::<ModelWeights>);
    let (model_status, set_model_status) = signal(ModelStatus::default());
    let (model_error, set_model_error) = signal(String::new());

    let (phase, set_phase) = signal(InferencePhase::default());
    let (last_prediction, set_last_prediction) = signal(None::<Prediction>);

    let toasts: RwSignal<Vec<Toast>> = RwSignal::new(Vec::new());
    let toast_seq = StoredValue::new(0u64);
    let push_toast = move |level: ToastLevel, message: String| {
        let id = toast_seq.with_value(|v| *v);
        toast_seq.update_value(|v| *v += 1);
        toasts.update(|ts| ts.push(Toast { id, level, message }));
    };

    let draw_ref = NodeRef::<leptos::html::Canvas>::new();
    let scratch_ref = NodeRef::<leptos::html::Canvas>::new();

    // Whether a pointer-drag stroke is in progress.
    let (stroking, set_stroking) = signal(false);

    // Blank the drawing surface once the canvas element exists.
    Effect::new(move |_| {
        if let Some(c) = draw_ref.get() {
            if let Err(e) = canvas::fill_white(&c) {
                web_sys::console::error_1(&JsValue::from_str(&e));
            }
        }
    });

    // Model load: one fetch, held for the page lifetime. Drawing works while
    // this is in flight; only the Predict button waits for it.
    spawn_local(async move {
        match loader::fetch_model(WEIGHTS_URL).await {
            Ok(m) => {
                web_sys::console::log_1(&JsValue::from_str(&format!(
                    "weights loaded from {WEIGHTS_URL} ({} bytes)",
                    m.raw_json().len()
                )));
                set_model.set(Some(m));
                set_model_status.set(ModelStatus::Ready);
            }
            Err(e) => {
                web_sys::console::error_1(&JsValue::from_str(&e));
                set_model_status.set(ModelStatus::Failed);
                set_model_error.set(e.clone());
                push_toast(ToastLevel::Error, e);
            }
        }
    });

    let on_pointer_down = move |ev: web_sys::PointerEvent| {
        let Some(c) = draw_ref.get_untracked() else {
            return;
        };
        if let Err(e) = canvas::begin_stroke(&c, ev.offset_x() as f64, ev.offset_y() as f64) {
            web_sys::console::error_1(&JsValue::from_str(&e));
            return;
        }
        set_stroking.set(true);
    };

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        if !stroking.get_untracked() {
            return;
        }
        let Some(c) = draw_ref.get_untracked() else {
            return;
        };
        if let Err(e) = canvas::extend_stroke(&c, ev.offset_x() as f64, ev.offset_y() as f64) {
            web_sys::console::error_1(&JsValue::from_str(&e));
        }
    };

    let end_stroke = move |_ev: web_sys::PointerEvent| {
        set_stroking.set(false);
    };

    let do_clear = move || {
        let mut res = Ok(());
        if let Some(c) = draw_ref.get_untracked() {
            res = canvas::fill_white(&c);
        }
        if let Some(s) = scratch_ref.get_untracked() {
            res = res.and(canvas::fill_white(&s));
        }
        if let Err(e) = res {
            push_toast(ToastLevel::Error, e);
            return;
        }
        set_last_prediction.set(None);
    };

    let do_predict = move || {
        // Overlapping predictions are serialized by dropping: a click while
        // one is in flight is ignored.
        if !phase.get_untracked().accepts_clicks() {
            return;
        }
        let Some(model) = model.get_untracked() else {
            push_toast(ToastLevel::Info, ModelStatus::Loading.label().to_string());
            return;
        };
        let (Some(src), Some(scratch)) = (draw_ref.get_untracked(), scratch_ref.get_untracked())
        else {
            push_toast(ToastLevel::Error, "canvas: element not mounted".to_string());
            return;
        };

        // Preprocess synchronously so the raster is pinned before any other
        // click can touch the scratch canvas.
        let raster = match canvas::extract_raster(&src, &scratch) {
            Ok(r) => r,
            Err(e) => {
                push_toast(ToastLevel::Error, e);
                return;
            }
        };

        set_phase.set(InferencePhase::Predicting);
        spawn_local(async move {
            match predictor::predict(&raster, &model).await {
                Ok(p) => {
                    push_toast(ToastLevel::Success, format!("Predicted digit: {}", p.digit));
                    set_last_prediction.set(Some(p));
                }
                Err(e) => {
                    web_sys::console::error_1(&JsValue::from_str(&e));
                    push_toast(ToastLevel::Error, e);
                }
            }
            set_phase.set(InferencePhase::Idle);
        });
    };

    view! {
        <main class="app">
            <h1>"scrawl"</h1>
            <p class="subtle">
                "Draw a digit, then predict. Fully in-browser: Leptos CSR + external WASM inference."
            </p>

            <section class="surfaces">
                <canvas
                    node_ref=draw_ref
                    class="draw-surface"
                    width=DRAW_SIDE
                    height=DRAW_SIDE
                    on:pointerdown=on_pointer_down
                    on:pointermove=on_pointer_move
                    on:pointerup=end_stroke
                    on:pointerleave=end_stroke
                ></canvas>
                <div class="preview">
                    <canvas
                        node_ref=scratch_ref
                        class="scratch-surface"
                        width=SCRATCH_SIDE
                        height=SCRATCH_SIDE
                    ></canvas>
                    <span class="subtle">"28×28 input"</span>
                </div>
            </section>

            <section class="controls">
                <button
                    prop:disabled=move || {
                        !model_status.get().is_ready() || !phase.get().accepts_clicks()
                    }
                    on:click=move |_| do_predict()
                >
                    "Predict"
                </button>
                <button on:click=move |_| do_clear()>"Clear"</button>
            </section>

            <section class="stats">
                <Stat label="Model" value=move || {
                    if model_status.get() == ModelStatus::Failed {
                        model_error.get()
                    } else {
                        model_status.get().label().to_string()
                    }
                } />
                <Stat label="Phase" value=move || phase.get().label().to_string() />
                <Stat label="Prediction" value=move || {
                    match last_prediction.get() {
                        Some(p) => format!("{} (score {:.3})", p.digit, p.confidence()),
                        None => "(none)".to_string(),
                    }
                } />
            </section>

            <ToastStack toasts=toasts />
        </main>
    }
}
