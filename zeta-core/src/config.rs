//! Sampling configuration shared by the curve builders and bindings.
//!
//! Every field has a default matching the reference visualization, so a
//! partial JSON object (or `{}`) is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::error::{ensure_positive, ensure_range, ParamError, Result};
use crate::zeta::DEFAULT_ZETA_TERMS;

/// Largest integer tested for primality.
pub const DEFAULT_MAX_N: u64 = 100;
/// Quadrature step for Li(x).
pub const DEFAULT_LI_STEP: f64 = 0.1;
/// Sampling step for x/ln x, the waves and the reconstruction.
pub const DEFAULT_CURVE_STEP: f64 = 0.05;
pub const DEFAULT_T_MIN: f64 = 0.0;
pub const DEFAULT_T_MAX: f64 = 50.0;
pub const DEFAULT_T_STEP: f64 = 0.1;
/// Non-trivial zeros drawn as markers and used in the explicit sum.
pub const DEFAULT_ZERO_COUNT: usize = 10;
pub const DEFAULT_TRIVIAL_ZERO_COUNT: usize = 5;

// Resolution range the scenes were tuned for; anything outside still
// works but is either slow or visibly jagged.
const TUNED_STEP_MIN: f64 = 0.01;
const TUNED_STEP_MAX: f64 = 0.2;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    pub zeta_terms: usize,
    pub max_n: u64,
    pub li_step: f64,
    pub curve_step: f64,
    pub t_min: f64,
    pub t_max: f64,
    pub t_step: f64,
    pub zero_count: usize,
    pub trivial_zero_count: usize,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            zeta_terms: DEFAULT_ZETA_TERMS,
            max_n: DEFAULT_MAX_N,
            li_step: DEFAULT_LI_STEP,
            curve_step: DEFAULT_CURVE_STEP,
            t_min: DEFAULT_T_MIN,
            t_max: DEFAULT_T_MAX,
            t_step: DEFAULT_T_STEP,
            zero_count: DEFAULT_ZERO_COUNT,
            trivial_zero_count: DEFAULT_TRIVIAL_ZERO_COUNT,
        }
    }
}

impl SamplingConfig {
    /// Parse and validate a JSON configuration.  Missing fields take
    /// their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SamplingConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Upper end of the x axis for the prime scene.
    pub fn x_max(&self) -> f64 {
        self.max_n as f64
    }

    pub fn validate(&self) -> Result<()> {
        if self.zeta_terms == 0 {
            return Err(ParamError::ZeroTerms);
        }
        ensure_range("x", crate::approximations::LI_LOWER_LIMIT, self.x_max())?;
        ensure_range("t", self.t_min, self.t_max)?;
        for (name, step) in [
            ("li_step", self.li_step),
            ("curve_step", self.curve_step),
            ("t_step", self.t_step),
        ] {
            ensure_positive(name, step)?;
            if !(TUNED_STEP_MIN..=TUNED_STEP_MAX).contains(&step) {
                log::warn!(
                    "{} = {} is outside the tuned range [{}, {}]",
                    name,
                    step,
                    TUNED_STEP_MIN,
                    TUNED_STEP_MAX
                );
            }
        }
        Ok(())
    }
}
