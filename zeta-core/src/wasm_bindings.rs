//! WebAssembly bindings for zeta-core
//!
//! The browser scenes call these to get values and point sequences.
//! Structured results cross the boundary as plain JS objects through
//! `serde-wasm-bindgen`; configuration comes in the same way, so the
//! front end can pass a partial object and rely on the defaults.

use js_sys::Array;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::approximations;
use crate::complex::Complex as RustComplex;
use crate::config::{
    SamplingConfig, DEFAULT_CURVE_STEP, DEFAULT_LI_STEP, DEFAULT_MAX_N, DEFAULT_T_MAX,
    DEFAULT_T_MIN, DEFAULT_T_STEP, DEFAULT_TRIVIAL_ZERO_COUNT, DEFAULT_ZERO_COUNT,
};
use crate::curves::{PrimeCurves, ZetaCurves};
use crate::error::ParamError;
use crate::primes;
use crate::zeros::{ZeroTable, KNOWN_ZERO_ORDINATES, TRIVIAL_ZEROS};
use crate::zeta::{ZetaEvaluator, DEFAULT_ZETA_TERMS};

fn to_js_error(err: ParamError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Read a config object; `undefined`/`null` means all defaults.
fn config_from_js(config: JsValue) -> Result<SamplingConfig, JsValue> {
    let config: SamplingConfig = if config.is_undefined() || config.is_null() {
        SamplingConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config).map_err(|e| JsValue::from_str(&e.to_string()))?
    };
    config.validate().map_err(to_js_error)?;
    Ok(config)
}

/// A complex number `real + imag·i`.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug)]
pub struct Complex {
    real: f64,
    imag: f64,
}

impl From<RustComplex> for Complex {
    fn from(c: RustComplex) -> Self {
        Self { real: c.real, imag: c.imag }
    }
}

impl From<&Complex> for RustComplex {
    fn from(c: &Complex) -> RustComplex {
        RustComplex::new(c.real, c.imag)
    }
}

#[wasm_bindgen]
impl Complex {
    #[wasm_bindgen(constructor)]
    pub fn new(real: f64, imag: f64) -> Complex {
        Complex { real, imag }
    }

    #[wasm_bindgen(getter)]
    pub fn real(&self) -> f64 {
        self.real
    }

    #[wasm_bindgen(getter)]
    pub fn imag(&self) -> f64 {
        self.imag
    }

    #[wasm_bindgen]
    pub fn magnitude(&self) -> f64 {
        RustComplex::from(self).mag()
    }
}

/// Zeta evaluator with a fixed number of series terms.
#[wasm_bindgen(js_name = ZetaEvaluator)]
pub struct ZetaEvaluatorJs {
    inner: ZetaEvaluator,
}

#[wasm_bindgen(js_class = ZetaEvaluator)]
impl ZetaEvaluatorJs {
    #[wasm_bindgen(constructor)]
    pub fn new(terms: usize) -> Result<ZetaEvaluatorJs, JsValue> {
        ZetaEvaluator::new(terms)
            .map(|inner| ZetaEvaluatorJs { inner })
            .map_err(to_js_error)
    }

    #[wasm_bindgen(getter)]
    pub fn terms(&self) -> usize {
        self.inner.terms()
    }

    /// ζ(s).  NaN/∞ at s = 1.
    #[wasm_bindgen]
    pub fn evaluate(&self, s: &Complex) -> Complex {
        self.inner.evaluate(s.into()).into()
    }

    /// ζ(1/2 + it) samples as `[{ s, value }]`.
    #[wasm_bindgen]
    pub fn sample_critical_line(&self, t_min: f64, t_max: f64, t_step: f64) -> Result<JsValue, JsValue> {
        let samples = self
            .inner
            .sample_critical_line(t_min, t_max, t_step)
            .map_err(to_js_error)?;
        to_js(&samples)
    }

    /// |ζ| over a grid of the strip, row-major (rows over t).
    #[wasm_bindgen]
    pub fn sample_strip(
        &self,
        sigma_min: f64,
        sigma_max: f64,
        t_min: f64,
        t_max: f64,
        rows: usize,
        cols: usize,
    ) -> Result<Vec<f64>, JsValue> {
        self.inner
            .sample_strip((sigma_min, sigma_max), (t_min, t_max), rows, cols)
            .map(|grid| grid.iter().copied().collect())
            .map_err(to_js_error)
    }
}

/// ζ(s) with an explicit number of terms (at least 1).
#[wasm_bindgen]
pub fn zeta(s: &Complex, terms: usize) -> Result<Complex, JsValue> {
    let evaluator = ZetaEvaluator::new(terms).map_err(to_js_error)?;
    Ok(evaluator.evaluate(s.into()).into())
}

#[wasm_bindgen]
pub fn is_prime(n: u32) -> bool {
    primes::is_prime(n as u64)
}

#[wasm_bindgen]
pub fn primes_up_to(max_n: u32) -> Vec<u32> {
    primes::primes_up_to(max_n as u64)
        .into_iter()
        .map(|p| p as u32)
        .collect()
}

#[wasm_bindgen]
pub fn x_over_ln_x(x: f64) -> f64 {
    approximations::x_over_ln_x(x)
}

#[wasm_bindgen]
pub fn explicit_formula_wave(x: f64, gamma: f64) -> f64 {
    approximations::explicit_formula_wave(x, gamma)
}

#[wasm_bindgen]
pub fn riemann_explicit_sum(x: f64, gammas: Vec<f64>, li_step: f64) -> f64 {
    approximations::riemann_explicit_sum(x, &gammas, li_step)
}

/// Known zero ordinates as a JS array.
#[wasm_bindgen]
pub fn known_zero_ordinates() -> Array {
    KNOWN_ZERO_ORDINATES
        .iter()
        .map(|&g| JsValue::from_f64(g))
        .collect()
}

/// Curves for the prime scene.  `zeros` replaces the built-in ordinate
/// table when given.
#[wasm_bindgen]
pub fn prime_curves(config: JsValue, zeros: Option<Vec<f64>>) -> Result<JsValue, JsValue> {
    let config = config_from_js(config)?;
    let table = match zeros {
        Some(ordinates) => ZeroTable::from_ordinates(ordinates).map_err(to_js_error)?,
        None => ZeroTable::default(),
    };
    let curves = PrimeCurves::build(&config, &table).map_err(to_js_error)?;
    to_js(&curves)
}

/// Curves for the critical-line scene.
#[wasm_bindgen]
pub fn zeta_curves(config: JsValue) -> Result<JsValue, JsValue> {
    let config = config_from_js(config)?;
    let curves = ZetaCurves::build(&config, ZeroTable::known()).map_err(to_js_error)?;
    to_js(&curves)
}

/// Shared defaults exposed to JavaScript.
#[wasm_bindgen]
pub fn constants() -> JsValue {
    #[derive(Serialize)]
    struct Constants {
        default_zeta_terms: usize,
        default_max_n: u64,
        default_li_step: f64,
        default_curve_step: f64,
        default_t_min: f64,
        default_t_max: f64,
        default_t_step: f64,
        default_zero_count: usize,
        default_trivial_zero_count: usize,
        trivial_zeros: Vec<f64>,
    }

    let c = Constants {
        default_zeta_terms: DEFAULT_ZETA_TERMS,
        default_max_n: DEFAULT_MAX_N,
        default_li_step: DEFAULT_LI_STEP,
        default_curve_step: DEFAULT_CURVE_STEP,
        default_t_min: DEFAULT_T_MIN,
        default_t_max: DEFAULT_T_MAX,
        default_t_step: DEFAULT_T_STEP,
        default_zero_count: DEFAULT_ZERO_COUNT,
        default_trivial_zero_count: DEFAULT_TRIVIAL_ZERO_COUNT,
        trivial_zeros: TRIVIAL_ZEROS.to_vec(),
    };

    serde_wasm_bindgen::to_value(&c).unwrap_or_else(|_| JsValue::NULL)
}
