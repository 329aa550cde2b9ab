//! Numerical core for the prime and zeta visualizations
//!
//! This crate holds every computation behind the two browser scenes;
//! the scenes themselves only plot what comes out of here.
//!
//! 1. **Complex arithmetic** – a small `Copy` complex type with the
//!    real-base power needed by Dirichlet series.
//! 2. **Zeta** – ζ(s) in and around the critical strip via the
//!    alternating eta series and the continuation
//!    ζ(s) = η(s) / (1 − 2^{1−s}).
//! 3. **Number theory** – primality, π(x), the logarithmic integral,
//!    x/ln x and the explicit-formula waves indexed by the known zeros.
//! 4. **Curves** – the point sequences each scene draws, built from a
//!    [`config::SamplingConfig`].
//!
//! All of it is pure and single-threaded.  Degenerate inputs (the
//! inverse of zero, ζ at s = 1) surface as NaN/∞ instead of errors.
//!
//! The crate exposes bindings via either WebAssembly (using
//! wasm‑bindgen) or Python (using pyo3) depending on the enabled
//! feature.

pub mod approximations;
pub mod complex;
pub mod config;
pub mod curves;
pub mod error;
pub mod points;
pub mod primes;
pub mod zeros;
pub mod zeta;

pub use complex::Complex;
pub use error::{ParamError, Result};
pub use zeta::{eta, zeta, ZetaEvaluator, ZetaSample};

#[cfg(feature = "python")]
pub mod pybindings;

#[cfg(feature = "wasm")]
pub mod wasm_bindings;
