//! Curve builders for the two scenes.
//!
//! These assemble the point sequences the renderer plots.  Everything is
//! recomputed from the configuration on each call; nothing is cached.

use serde::Serialize;

use crate::approximations::{self, logarithmic_integral, paired_wave, LI_LOWER_LIMIT};
use crate::config::SamplingConfig;
use crate::error::Result;
use crate::points::{CurvePoint, Point3};
use crate::primes::{prime_counting_step, primes_up_to};
use crate::zeros::{trivial_zeros, ZeroTable};
use crate::zeta::{grid, ZetaEvaluator};

/// Correction term of one zero ordinate sampled over the x axis.
#[derive(Clone, Debug, Serialize)]
pub struct WaveCurve {
    pub gamma: f64,
    pub points: Vec<CurvePoint>,
}

/// Everything drawn in the prime-distribution scene.
#[derive(Clone, Debug, Serialize)]
pub struct PrimeCurves {
    pub primes: Vec<u64>,
    pub counting_step: Vec<CurvePoint>,
    pub li: Vec<CurvePoint>,
    pub x_over_ln_x: Vec<CurvePoint>,
    pub waves: Vec<WaveCurve>,
    /// Li(x) plus every paired wave, on the Li sampling grid.
    pub reconstruction: Vec<CurvePoint>,
}

impl PrimeCurves {
    pub fn build(config: &SamplingConfig, zeros: &ZeroTable) -> Result<Self> {
        config.validate()?;
        let x_max = config.x_max();
        let gammas = zeros.first(config.zero_count);

        let primes = primes_up_to(config.max_n);
        let counting_step = prime_counting_step(&primes, x_max);
        let li = logarithmic_integral(LI_LOWER_LIMIT, x_max, config.li_step);

        let xs: Vec<f64> = grid(LI_LOWER_LIMIT, x_max, config.curve_step).collect();
        let x_over_ln_x = xs
            .iter()
            .map(|&x| CurvePoint::new(x, approximations::x_over_ln_x(x)))
            .collect();
        let waves = gammas
            .iter()
            .map(|&gamma| WaveCurve {
                gamma,
                points: xs
                    .iter()
                    .map(|&x| CurvePoint::new(x, paired_wave(x, gamma)))
                    .collect(),
            })
            .collect::<Vec<_>>();

        let reconstruction = li
            .iter()
            .map(|p| {
                let correction = gammas
                    .iter()
                    .fold(0.0, |acc, &gamma| acc + paired_wave(p.x, gamma));
                CurvePoint::new(p.x, p.y + correction)
            })
            .collect();

        log::debug!(
            "prime scene: {} primes <= {}, {} li samples, {} waves",
            primes.len(),
            config.max_n,
            li.len(),
            waves.len()
        );

        Ok(Self {
            primes,
            counting_step,
            li,
            x_over_ln_x,
            waves,
            reconstruction,
        })
    }
}

/// Everything drawn in the critical-line scene.
#[derive(Clone, Debug, Serialize)]
pub struct ZetaCurves {
    /// `(Re ζ, Im ζ, t)` along s = 1/2 + it.
    pub critical_line: Vec<Point3>,
    /// `(t, |ζ|)` along the same samples.
    pub magnitude: Vec<CurvePoint>,
    /// Known non-trivial zeros inside `[t_min, t_max]`, placed at the
    /// origin of the value plane: `(0, 0, γ)`.
    pub zero_markers: Vec<Point3>,
    /// Trivial zeros on the real axis: `(−2k, 0)`.
    pub trivial_zero_markers: Vec<CurvePoint>,
}

impl ZetaCurves {
    pub fn build(config: &SamplingConfig, zeros: &ZeroTable) -> Result<Self> {
        config.validate()?;
        let evaluator = ZetaEvaluator::new(config.zeta_terms)?;
        let samples = evaluator.sample_critical_line(config.t_min, config.t_max, config.t_step)?;

        let critical_line = samples
            .iter()
            .map(|z| Point3::new(z.value.real, z.value.imag, z.s.imag))
            .collect();
        let magnitude = samples
            .iter()
            .map(|z| CurvePoint::new(z.s.imag, z.magnitude()))
            .collect();
        let zero_markers = zeros
            .first(config.zero_count)
            .iter()
            .filter(|&&gamma| gamma >= config.t_min && gamma <= config.t_max)
            .map(|&gamma| Point3::new(0.0, 0.0, gamma))
            .collect::<Vec<_>>();
        let trivial_zero_markers = trivial_zeros(config.trivial_zero_count)
            .iter()
            .map(|&x| CurvePoint::new(x, 0.0))
            .collect();

        log::debug!(
            "zeta scene: {} samples on t in [{}, {}] with {} terms, {} zero markers",
            samples.len(),
            config.t_min,
            config.t_max,
            evaluator.terms(),
            zero_markers.len()
        );

        Ok(Self {
            critical_line,
            magnitude,
            zero_markers,
            trivial_zero_markers,
        })
    }
}
