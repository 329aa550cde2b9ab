//! Complex arithmetic
//!
//! A minimal complex value type shared by the zeta evaluator and the
//! bindings.  Values are `Copy` and every operation returns a new value.
//! Nothing here guards against degenerate inputs: the inverse of zero
//! and powers of non-positive bases produce NaN/∞, which then propagate
//! through later arithmetic.

use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// Complex number `real + imag·i`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Complex = Complex { real: 0.0, imag: 0.0 };
    pub const ONE: Complex = Complex { real: 1.0, imag: 0.0 };

    #[inline]
    pub fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }
    #[inline]
    pub fn mag(&self) -> f64 {
        self.mag_sq().sqrt()
    }
    #[inline]
    pub fn mag_sq(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }
    /// Principal argument in (-π, π].
    #[inline]
    pub fn arg(&self) -> f64 {
        self.imag.atan2(self.real)
    }
    #[inline]
    pub fn add(&self, other: Complex) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
    #[inline]
    pub fn sub(&self, other: Complex) -> Self {
        Self {
            real: self.real - other.real,
            imag: self.imag - other.imag,
        }
    }
    #[inline]
    pub fn mul(&self, other: Complex) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
    /// Multiplicative inverse `conj(z) / |z|²`.
    ///
    /// The zero value has no inverse; the result is NaN in both parts.
    #[inline]
    pub fn inverse(&self) -> Self {
        let d = self.mag_sq();
        Self {
            real: self.real / d,
            imag: -self.imag / d,
        }
    }
    #[inline]
    pub fn scale(&self, f: f64) -> Self {
        Self {
            real: self.real * f,
            imag: self.imag * f,
        }
    }
    #[inline]
    pub fn conj(&self) -> Self {
        Self {
            real: self.real,
            imag: -self.imag,
        }
    }

    /// `base^exponent` for a positive real base, computed as
    /// `exp(exponent · ln base)`.
    ///
    /// With `a = Re(e)·ln b` and `θ = Im(e)·ln b` the result is
    /// `e^a (cos θ + i sin θ)`.  Only positive bases are meaningful.
    #[inline]
    pub fn pow_real_base(base: f64, exponent: Complex) -> Self {
        let ln_base = base.ln();
        let a = exponent.real * ln_base;
        let theta = exponent.imag * ln_base;
        let r = a.exp();
        Self {
            real: r * theta.cos(),
            imag: r * theta.sin(),
        }
    }
}

impl Add for Complex {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Complex::add(&self, rhs)
    }
}

impl Sub for Complex {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Complex::sub(&self, rhs)
    }
}

impl Mul for Complex {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Complex::mul(&self, rhs)
    }
}

impl Neg for Complex {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self {
            real: -self.real,
            imag: -self.imag,
        }
    }
}

impl From<f64> for Complex {
    fn from(real: f64) -> Self {
        Self::new(real, 0.0)
    }
}
