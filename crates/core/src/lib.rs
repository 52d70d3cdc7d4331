//! # scrawl
//!
//! Host-testable core for the scrawl digit-recognition demo.
//!
//! The browser app (`scrawl_web`) draws a digit on a canvas, downscales it to
//! a 28×28 RGBA raster, and hands the raster plus a JSON weight file to an
//! external WASM inference module. Everything that does not need a browser
//! lives here: the fixed-size raster, the opaque weight document, and the
//! score/argmax logic that turns the inference output into a digit.
//!
//! ```
//! use scrawl::raster::Raster;
//! use scrawl::score::Prediction;
//!
//! let blank = Raster::blank_white();
//! assert_eq!(blank.luma(0, 0), Some(255));
//!
//! let p = Prediction::from_scores(vec![0.1, 0.9, 0.05]).unwrap();
//! assert_eq!(p.digit, 1);
//! ```

pub mod model;
pub mod raster;
pub mod score;
