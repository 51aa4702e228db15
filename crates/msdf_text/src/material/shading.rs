//! MSDF coverage math
//!
//! Reference evaluation of the per-pixel shading the host's fragment
//! stage performs: median-of-three distance reconstruction, sharp
//! (derivative-based) and smooth (smoothstep) fill antialiasing, and the
//! outset/inset stroke band. The host ports these formulas to its shader
//! language; keeping them here makes them testable and pins down the
//! contract.

use nalgebra::Vector3;

use super::TextMaterialParams;

/// Half-width of the smoothstep antialiasing band in distance units
pub const SMOOTHING_HALF_WIDTH: f32 = std::f32::consts::SQRT_2 / 2.0;

/// Median of three channel values: `max(min(r,g), min(max(r,g), b))`
pub fn median3(r: f32, g: f32, b: f32) -> f32 {
    r.min(g).max(r.max(g).min(b))
}

/// Signed distance reconstructed from an MSDF texel, negative outside
/// the glyph edge
pub fn signed_distance(sample: Vector3<f32>) -> f32 {
    median3(sample.x, sample.y, sample.z) - 0.5
}

/// Hermite smoothstep, clamped to [0, 1] outside the edge interval
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Sharp fill alpha: a one-pixel antialiasing band derived from the
/// screen-space rate of change of the signed distance (`fwidth`)
pub fn fill_alpha_sharp(sd: f32, fwidth: f32) -> f32 {
    if fwidth <= 0.0 {
        // Degenerate derivative: hard step on the edge
        return if sd >= 0.0 { 1.0 } else { 0.0 };
    }
    (sd / fwidth + 0.5).clamp(0.0, 1.0)
}

/// Smooth fill alpha around the threshold, used for small font sizes
/// where the sharp variant aliases
pub fn fill_alpha_smooth(sd: f32, threshold: f32) -> f32 {
    smoothstep(
        threshold - SMOOTHING_HALF_WIDTH,
        threshold + SMOOTHING_HALF_WIDTH,
        sd,
    )
}

fn mix(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

fn blended_alpha(sd: f32, fwidth: f32, params: &TextMaterialParams) -> f32 {
    mix(
        fill_alpha_sharp(sd, fwidth),
        fill_alpha_smooth(sd, params.threshold),
        f32::from(params.is_smooth),
    )
}

/// Evaluate the full fill-plus-stroke model for one sample
///
/// Returns the final fragment color and alpha. The stroke band is the
/// product of an outset mask (distance pushed out by half the stroke
/// width) and an inset mask (pulled in by the same amount); the fragment
/// color blends from fill to stroke color by that coverage, and the final
/// alpha is `opacity x (fill + border)` clamped to [0, 1].
pub fn shade(
    sample: Vector3<f32>,
    fwidth: f32,
    params: &TextMaterialParams,
) -> (Vector3<f32>, f32) {
    let sd = signed_distance(sample);

    let fill = blended_alpha(sd, fwidth, params);

    let outset = blended_alpha(sd + params.stroke_width * 0.5, fwidth, params);
    let inset = 1.0 - blended_alpha(sd - params.stroke_width * 0.5, fwidth, params);
    let border = outset * inset;

    let color = params.color.lerp(&params.stroke_color, border);
    let alpha = (params.opacity * (fill + border)).clamp(0.0, 1.0);

    (color, alpha)
}
