//! Escape count → colour, through a hue/saturation/value model.
//!
//! The hue is `255 · escape / max_iterations`, truncated to whole degrees. That spans
//! red through blue/violet and leaves the magenta sector (255°–360°) unused; the
//! HSV conversion itself accepts the full `[0, 360]` range.

use crate::core::data::colour::Colour;
use crate::core::data::iteration_budget::IterationBudget;
use crate::core::fractals::mandelbrot::algorithm::EscapeResult;

pub const HUE_SCALE: f64 = 255.0;
pub const SATURATION: f64 = 100.0;
pub const FULL_VALUE: f64 = 100.0;

/// Converts hue in degrees `[0, 360]` and saturation/value in percent `[0, 100]` to an
/// opaque colour. Anything outside those ranges (NaN included) yields opaque black.
#[must_use]
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> Colour {
    if !(0.0..=360.0).contains(&hue)
        || !(0.0..=100.0).contains(&saturation)
        || !(0.0..=100.0).contains(&value)
    {
        return Colour::BLACK;
    }

    let s = saturation / 100.0;
    let v = value / 100.0;
    let chroma = s * v;
    let x = chroma * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
    let m = v - chroma;

    let (r, g, b) = match hue {
        h if h < 60.0 => (chroma, x, 0.0),
        h if h < 120.0 => (x, chroma, 0.0),
        h if h < 180.0 => (0.0, chroma, x),
        h if h < 240.0 => (0.0, x, chroma),
        h if h < 300.0 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    Colour::opaque(
        ((r + m) * 255.0) as u8,
        ((g + m) * 255.0) as u8,
        ((b + m) * 255.0) as u8,
    )
}

/// Hue in whole degrees for an escape count.
#[must_use]
pub fn hue_for(escape: EscapeResult, max_iterations: IterationBudget) -> f64 {
    (HUE_SCALE * escape / f64::from(max_iterations.get())).trunc()
}

#[must_use]
pub fn colour_for(escape: EscapeResult, max_iterations: IterationBudget) -> Colour {
    // Escape counts never exceed the budget, so value is always full; the zero branch
    // only guards against callers passing counts from a larger budget.
    let value = if escape <= f64::from(max_iterations.get()) {
        FULL_VALUE
    } else {
        0.0
    };

    hsv_to_rgb(hue_for(escape, max_iterations), SATURATION, value)
}
