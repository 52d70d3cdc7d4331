//! Score sequences and argmax.
//!
//! The inference module returns one score per digit class; the reported digit
//! is the index of the largest score, first occurrence winning on ties.

use std::fmt;

use serde::Serialize;

/// Index of the largest value; first occurrence wins ties. `None` if empty.
///
/// `NaN` never beats a finite score and a finite score always displaces a
/// leading `NaN`, so an all-NaN sequence reports index 0 rather than
/// poisoning the comparison.
pub fn argmax(scores: &[f64]) -> Option<usize> {
    if scores.is_empty() {
        return None;
    }
    let mut best = 0usize;
    for (i, &s) in scores.iter().enumerate().skip(1) {
        let better = if scores[best].is_nan() {
            !s.is_nan()
        } else {
            s > scores[best]
        };
        if better {
            best = i;
        }
    }
    Some(best)
}

/// The outcome of one inference call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    /// Per-class scores exactly as returned by the inference module.
    pub scores: Vec<f64>,
    /// Argmax of `scores`.
    pub digit: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreError {
    /// The inference module returned no scores at all.
    Empty,
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreError::Empty => write!(f, "inference returned an empty score sequence"),
        }
    }
}

impl std::error::Error for ScoreError {}

impl Prediction {
    pub fn from_scores(scores: Vec<f64>) -> Result<Self, ScoreError> {
        let digit = argmax(&scores).ok_or(ScoreError::Empty)?;
        Ok(Self { scores, digit })
    }

    /// The winning score.
    pub fn confidence(&self) -> f64 {
        self.scores[self.digit]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argmax_picks_largest() {
        assert_eq!(argmax(&[0.1, 0.9, 0.05]), Some(1));
        assert_eq!(argmax(&[3.0]), Some(0));
        assert_eq!(argmax(&[-2.0, -1.0, -3.0]), Some(1));
    }

    #[test]
    fn argmax_ties_resolve_to_first_occurrence() {
        assert_eq!(argmax(&[0.2, 0.2, 0.2]), Some(0));
        assert_eq!(argmax(&[0.1, 0.5, 0.5]), Some(1));
    }

    #[test]
    fn argmax_empty_is_none() {
        assert_eq!(argmax(&[]), None);
    }

    #[test]
    fn argmax_handles_nan() {
        assert_eq!(argmax(&[0.3, f64::NAN, 0.2]), Some(0));
        assert_eq!(argmax(&[f64::NAN, f64::NAN]), Some(0));
        assert_eq!(argmax(&[f64::NAN, 0.3, 0.2]), Some(1));
        assert_eq!(argmax(&[0.1, f64::INFINITY, 0.2]), Some(1));
    }

    #[test]
    fn prediction_from_scores() {
        let p = Prediction::from_scores(vec![0.05, 0.05, 0.8, 0.1]).unwrap();
        assert_eq!(p.digit, 2);
        assert!((p.confidence() - 0.8).abs() < 1e-12);
    }

    #[test]
    fn prediction_from_empty_scores_is_an_error() {
        assert_eq!(
            Prediction::from_scores(Vec::new()).unwrap_err(),
            ScoreError::Empty
        );
    }
}
