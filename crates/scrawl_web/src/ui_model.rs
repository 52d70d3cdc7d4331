//! UI state models that should be available on both wasm and native.
//!
//! Keeping these out of the wasm-only `web` module allows us to unit-test the
//! startup and inference lifecycles on the host.

/// Lifecycle of the weight file fetched once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelStatus {
    #[default]
    Loading,
    Ready,
    /// Startup failure: fetch error, non-2xx status, or malformed JSON.
    /// The message lives in its own signal; this stays `Copy`.
    Failed,
}

impl ModelStatus {
    pub fn label(self) -> &'static str {
        match self {
            ModelStatus::Loading => "loading weights…",
            ModelStatus::Ready => "ready",
            ModelStatus::Failed => "failed to load weights",
        }
    }

    /// Only a `Ready` model may be handed to the predictor.
    pub fn is_ready(self) -> bool {
        matches!(self, ModelStatus::Ready)
    }

    pub fn all() -> &'static [ModelStatus] {
        &[ModelStatus::Loading, ModelStatus::Ready, ModelStatus::Failed]
    }
}

/// The single meaningful transition in the app: idle → predicting → idle.
///
/// A click while `Predicting` is dropped, which is how overlapping
/// predictions are serialized (no queueing, no cancellation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InferencePhase {
    #[default]
    Idle,
    Predicting,
}

impl InferencePhase {
    pub fn label(self) -> &'static str {
        match self {
            InferencePhase::Idle => "idle",
            InferencePhase::Predicting => "predicting…",
        }
    }

    pub fn accepts_clicks(self) -> bool {
        matches!(self, InferencePhase::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_status_inventory_is_stable() {
        let all = ModelStatus::all();
        assert_eq!(all.len(), 3);

        let mut labels: Vec<&'static str> = all.iter().copied().map(ModelStatus::label).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), 3);

        for s in all {
            assert!(!s.label().trim().is_empty());
        }
    }

    #[test]
    fn only_ready_unlocks_prediction() {
        assert!(ModelStatus::Ready.is_ready());
        assert!(!ModelStatus::Loading.is_ready());
        assert!(!ModelStatus::Failed.is_ready());
    }

    #[test]
    fn overlapping_clicks_are_dropped_while_predicting() {
        assert!(InferencePhase::Idle.accepts_clicks());
        assert!(!InferencePhase::Predicting.accepts_clicks());
    }

    #[test]
    fn defaults_match_page_load_state() {
        assert_eq!(ModelStatus::default(), ModelStatus::Loading);
        assert_eq!(InferencePhase::default(), InferencePhase::Idle);
    }
}
