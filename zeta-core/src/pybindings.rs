//! Python bindings for zeta-core
//!
//! Exposes the same numerics to notebooks so offline plots match the
//! browser scenes exactly.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::approximations;
use crate::complex::Complex as RustComplex;
use crate::config::SamplingConfig;
use crate::curves::{PrimeCurves, ZetaCurves};
use crate::error::ParamError;
use crate::primes;
use crate::zeros::{ZeroTable, KNOWN_ZERO_ORDINATES, TRIVIAL_ZEROS};
use crate::zeta::{ZetaEvaluator, DEFAULT_ZETA_TERMS};

fn to_py_error(err: ParamError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn config_from_json(config_json: Option<&str>) -> PyResult<SamplingConfig> {
    match config_json {
        Some(json) => SamplingConfig::from_json(json).map_err(to_py_error),
        None => Ok(SamplingConfig::default()),
    }
}

/// Helper struct to expose a complex number to Python.
#[pyclass]
#[derive(Clone, Debug)]
pub struct Complex {
    #[pyo3(get)]
    pub real: f64,
    #[pyo3(get)]
    pub imag: f64,
}

impl From<RustComplex> for Complex {
    fn from(c: RustComplex) -> Self {
        Self { real: c.real, imag: c.imag }
    }
}

#[pymethods]
impl Complex {
    #[new]
    fn py_new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    fn magnitude(&self) -> f64 {
        RustComplex::new(self.real, self.imag).mag()
    }
}

/// ζ(real + imag·i) with `terms` eta-series terms.
#[pyfunction]
#[pyo3(signature = (real, imag, terms=DEFAULT_ZETA_TERMS))]
fn zeta(real: f64, imag: f64, terms: usize) -> PyResult<Complex> {
    let evaluator = ZetaEvaluator::new(terms).map_err(to_py_error)?;
    Ok(evaluator.evaluate(RustComplex::new(real, imag)).into())
}

#[pyfunction]
fn is_prime(n: u64) -> bool {
    primes::is_prime(n)
}

#[pyfunction]
fn primes_up_to(max_n: u64) -> Vec<u64> {
    primes::primes_up_to(max_n)
}

/// π(x) step outline as a list of (x, count).
#[pyfunction]
fn prime_counting_step(primes: Vec<u64>, upper_bound: f64) -> Vec<(f64, f64)> {
    crate::primes::prime_counting_step(&primes, upper_bound)
        .into_iter()
        .map(|p| (p.x, p.y))
        .collect()
}

/// Running Li integral as a list of (x, value).
#[pyfunction]
fn logarithmic_integral(lower: f64, upper: f64, step: f64) -> Vec<(f64, f64)> {
    approximations::logarithmic_integral(lower, upper, step)
        .into_iter()
        .map(|p| (p.x, p.y))
        .collect()
}

#[pyfunction]
fn x_over_ln_x(x: f64) -> f64 {
    approximations::x_over_ln_x(x)
}

#[pyfunction]
fn explicit_formula_wave(x: f64, gamma: f64) -> f64 {
    approximations::explicit_formula_wave(x, gamma)
}

#[pyfunction]
fn riemann_explicit_sum(x: f64, gammas: Vec<f64>, li_step: f64) -> f64 {
    approximations::riemann_explicit_sum(x, &gammas, li_step)
}

#[pyfunction]
fn known_zero_ordinates() -> Vec<f64> {
    KNOWN_ZERO_ORDINATES.to_vec()
}

/// Prime scene curves serialized as JSON.
#[pyfunction]
#[pyo3(signature = (config_json=None))]
fn prime_curves_json(config_json: Option<&str>) -> PyResult<String> {
    let config = config_from_json(config_json)?;
    let curves = PrimeCurves::build(&config, &ZeroTable::default()).map_err(to_py_error)?;
    serde_json::to_string(&curves).map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Critical-line scene curves serialized as JSON.
#[pyfunction]
#[pyo3(signature = (config_json=None))]
fn zeta_curves_json(config_json: Option<&str>) -> PyResult<String> {
    let config = config_from_json(config_json)?;
    let curves = ZetaCurves::build(&config, ZeroTable::known()).map_err(to_py_error)?;
    serde_json::to_string(&curves).map_err(|e| PyValueError::new_err(e.to_string()))
}

#[pymodule]
fn zeta_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("DEFAULT_ZETA_TERMS", DEFAULT_ZETA_TERMS)?;
    m.add("TRIVIAL_ZEROS", TRIVIAL_ZEROS.to_vec())?;

    m.add_class::<Complex>()?;
    m.add_function(wrap_pyfunction!(zeta, m)?)?;
    m.add_function(wrap_pyfunction!(is_prime, m)?)?;
    m.add_function(wrap_pyfunction!(primes_up_to, m)?)?;
    m.add_function(wrap_pyfunction!(prime_counting_step, m)?)?;
    m.add_function(wrap_pyfunction!(logarithmic_integral, m)?)?;
    m.add_function(wrap_pyfunction!(x_over_ln_x, m)?)?;
    m.add_function(wrap_pyfunction!(explicit_formula_wave, m)?)?;
    m.add_function(wrap_pyfunction!(riemann_explicit_sum, m)?)?;
    m.add_function(wrap_pyfunction!(known_zero_ordinates, m)?)?;
    m.add_function(wrap_pyfunction!(prime_curves_json, m)?)?;
    m.add_function(wrap_pyfunction!(zeta_curves_json, m)?)?;
    Ok(())
}
