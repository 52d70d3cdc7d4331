//! Drawing surface and preprocessor.
//!
//! Freehand strokes go straight onto a 2d context (round-capped black brush
//! on white). The preprocessor redraws the full-size surface into the 28×28
//! scratch canvas under a per-axis scale transform and reads the pixels back
//! as a [`Raster`]. The transform is applied inside a save/restore pair so no
//! state leaks between calls; the scratch canvas doubles as a live preview of
//! what the predictor actually sees.

use wasm_bindgen::JsCast;

use scrawl::raster::{Raster, SIDE};

use super::BRUSH_WIDTH;

fn ctx2d(canvas: &web_sys::HtmlCanvasElement) -> Result<web_sys::CanvasRenderingContext2d, String> {
    canvas
        .get_context("2d")
        .map_err(|_| "canvas: get_context threw".to_string())?
        .ok_or("canvas: missing 2d context".to_string())?
        .dyn_into::<web_sys::CanvasRenderingContext2d>()
        .map_err(|_| "canvas: context is not 2d".to_string())
}

/// Reset a canvas to blank white.
pub(super) fn fill_white(canvas: &web_sys::HtmlCanvasElement) -> Result<(), String> {
    let ctx = ctx2d(canvas)?;
    ctx.set_fill_style_str("#ffffff");
    ctx.fill_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
    Ok(())
}

/// Start a stroke at (x, y) in canvas coordinates.
pub(super) fn begin_stroke(
    canvas: &web_sys::HtmlCanvasElement,
    x: f64,
    y: f64,
) -> Result<(), String> {
    let ctx = ctx2d(canvas)?;
    ctx.set_stroke_style_str("#000000");
    ctx.set_line_width(BRUSH_WIDTH);
    ctx.set_line_cap("round");
    ctx.set_line_join("round");
    ctx.begin_path();
    ctx.move_to(x, y);
    // A dot for a click without a drag: a zero-length round-capped segment.
    ctx.line_to(x, y);
    ctx.stroke();
    Ok(())
}

/// Extend the current stroke to (x, y).
pub(super) fn extend_stroke(
    canvas: &web_sys::HtmlCanvasElement,
    x: f64,
    y: f64,
) -> Result<(), String> {
    let ctx = ctx2d(canvas)?;
    ctx.line_to(x, y);
    ctx.stroke();
    Ok(())
}

/// Redraw `src` into the 28×28 `scratch` canvas and read back the pixels.
///
/// The scale factor is 28 / source-dimension per axis, so a non-square source
/// is stretched rather than letterboxed. The drawing surface here is square;
/// if it ever stops being square this distorts digits and should be
/// revisited, not papered over.
///
/// Synchronous and idempotent for an unchanged source.
pub(super) fn extract_raster(
    src: &web_sys::HtmlCanvasElement,
    scratch: &web_sys::HtmlCanvasElement,
) -> Result<Raster, String> {
    let src_w = src.width();
    let src_h = src.height();
    if src_w == 0 || src_h == 0 {
        return Err("canvas: drawing surface has zero size".to_string());
    }

    let ctx = ctx2d(scratch)?;

    ctx.save();
    let redraw = redraw_scaled(&ctx, src, src_w, src_h);
    ctx.restore();
    redraw?;

    let image = ctx
        .get_image_data(0.0, 0.0, SIDE as f64, SIDE as f64)
        .map_err(|_| "canvas: get_image_data threw".to_string())?;

    Raster::from_rgba(image.data().0).map_err(|e| format!("canvas: {e}"))
}

fn redraw_scaled(
    ctx: &web_sys::CanvasRenderingContext2d,
    src: &web_sys::HtmlCanvasElement,
    src_w: u32,
    src_h: u32,
) -> Result<(), String> {
    ctx.clear_rect(0.0, 0.0, SIDE as f64, SIDE as f64);
    ctx.scale(SIDE as f64 / src_w as f64, SIDE as f64 / src_h as f64)
        .map_err(|_| "canvas: scale threw".to_string())?;
    ctx.draw_image_with_html_canvas_element(src, 0.0, 0.0)
        .map_err(|_| "canvas: draw_image threw".to_string())
}
