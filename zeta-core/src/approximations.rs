//! Smooth approximations to π(x) and the explicit-formula correction.
//!
//! Li(x) is integrated with fixed-step midpoint quadrature, so its
//! accuracy depends only on the step size.  The oscillatory terms are
//! the leading √x·sin(γ ln x)/γ shape of each zero's contribution; they
//! make a good overlay but are not a rigorous evaluation of the
//! explicit formula, particularly for small x.

use crate::points::CurvePoint;

/// Lower limit of the offset logarithmic integral.
pub const LI_LOWER_LIMIT: f64 = 2.0;

// Fraction of a step below which a trailing remainder is treated as
// rounding noise.
const STEP_TOLERANCE: f64 = 1e-9;

/// Running integral of 1/ln t from `from` to `to`.
///
/// Each step adds `(1 / ln(mid)) · step`.  The first point is
/// `(from, 0)` and the last one sits exactly at `to`; a remainder
/// shorter than `step` is closed with one partial step.  `from` should
/// be at least 2 and `step` positive.  An empty or reversed interval
/// yields only the starting point.
pub fn logarithmic_integral(from: f64, to: f64, step: f64) -> Vec<CurvePoint> {
    let span = to - from;
    if !(span > 0.0) || !(step > 0.0) {
        return vec![CurvePoint::new(from, 0.0)];
    }

    let full_steps = (span / step + STEP_TOLERANCE).floor() as usize;
    let mut points = Vec::with_capacity(full_steps + 2);
    points.push(CurvePoint::new(from, 0.0));

    let value = (0..full_steps).fold(0.0, |value, i| {
        let mid = from + i as f64 * step + step / 2.0;
        let next = value + (1.0 / mid.ln()) * step;
        points.push(CurvePoint::new(from + (i + 1) as f64 * step, next));
        next
    });

    let covered = from + full_steps as f64 * step;
    let rest = to - covered;
    if rest > STEP_TOLERANCE * step {
        let mid = covered + rest / 2.0;
        points.push(CurvePoint::new(to, value + (1.0 / mid.ln()) * rest));
    }
    points
}

/// Li(x) = ∫₂ˣ dt / ln t as a single value.
pub fn li(x: f64, step: f64) -> f64 {
    logarithmic_integral(LI_LOWER_LIMIT, x, step)
        .last()
        .map(|p| p.y)
        .unwrap_or(0.0)
}

/// The asymptotic x / ln x.  Meaningful for x > 1.
#[inline]
pub fn x_over_ln_x(x: f64) -> f64 {
    x / x.ln()
}

/// Oscillation contributed by the zero at ordinate `gamma`:
/// −(√x / |γ|) · sin(γ ln x).
#[inline]
pub fn explicit_formula_wave(x: f64, gamma: f64) -> f64 {
    -(x.sqrt() / gamma.abs()) * (gamma * x.ln()).sin()
}

/// Combined real correction of the conjugate pair ±γ:
/// −2 · (√x / γ) · sin(γ ln x).
#[inline]
pub fn paired_wave(x: f64, gamma: f64) -> f64 {
    -2.0 * (x.sqrt() / gamma) * (gamma * x.ln()).sin()
}

/// Li(x) corrected by the paired waves of every ordinate in `gammas`,
/// summed in order.
pub fn riemann_explicit_sum(x: f64, gammas: &[f64], li_step: f64) -> f64 {
    let correction = gammas
        .iter()
        .fold(0.0, |acc, &gamma| acc + paired_wave(x, gamma));
    li(x, li_step) + correction
}
