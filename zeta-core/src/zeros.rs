//! Known zeros of ζ
//!
//! The ordinates are external data (published tables), not computed
//! here.  [`ZeroTable`] wraps them so callers can swap in a longer or
//! computed list.

use once_cell::sync::Lazy;

use crate::error::{ParamError, Result};

/// Imaginary parts γ of the first twenty non-trivial zeros 1/2 + iγ.
pub const KNOWN_ZERO_ORDINATES: [f64; 20] = [
    14.134725141734693,
    21.022039638771555,
    25.010857580145688,
    30.424876125859513,
    32.935061587739189,
    37.586178158825671,
    40.918719012147495,
    43.327073280914999,
    48.005150881167159,
    49.773832477672302,
    52.970321477714460,
    56.446247697063394,
    59.347044002602353,
    60.831778524609809,
    65.112544048081606,
    67.079810529494173,
    69.546401711173979,
    72.067157674481907,
    75.704690699083933,
    77.144840068874805,
];

/// Trivial zeros −2, −4, …, −20.
pub const TRIVIAL_ZEROS: [f64; 10] = [
    -2.0, -4.0, -6.0, -8.0, -10.0, -12.0, -14.0, -16.0, -18.0, -20.0,
];

static DEFAULT_TABLE: Lazy<ZeroTable> = Lazy::new(|| ZeroTable {
    ordinates: KNOWN_ZERO_ORDINATES.to_vec(),
});

/// Ascending positive ordinates of non-trivial zeros.
#[derive(Clone, Debug, PartialEq)]
pub struct ZeroTable {
    ordinates: Vec<f64>,
}

impl Default for ZeroTable {
    fn default() -> Self {
        (*DEFAULT_TABLE).clone()
    }
}

impl ZeroTable {
    /// Build a table from caller-supplied ordinates.
    pub fn from_ordinates(ordinates: Vec<f64>) -> Result<Self> {
        let mut prev = 0.0;
        for (index, &gamma) in ordinates.iter().enumerate() {
            if !gamma.is_finite() || gamma <= prev {
                return Err(ParamError::UnorderedZeros { index });
            }
            prev = gamma;
        }
        Ok(Self { ordinates })
    }

    /// The process-wide constant table.
    pub fn known() -> &'static ZeroTable {
        &DEFAULT_TABLE
    }

    pub fn ordinates(&self) -> &[f64] {
        &self.ordinates
    }

    pub fn len(&self) -> usize {
        self.ordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordinates.is_empty()
    }

    /// The first `n` ordinates (fewer if the table is shorter).
    pub fn first(&self, n: usize) -> &[f64] {
        &self.ordinates[..n.min(self.ordinates.len())]
    }

    /// Each ordinate followed by its mirror: γ₁, −γ₁, γ₂, −γ₂, …
    pub fn symmetric(&self) -> impl Iterator<Item = f64> + '_ {
        self.ordinates.iter().flat_map(|&g| [g, -g])
    }
}

/// The first `count` trivial zeros (at most the ten tabulated).
pub fn trivial_zeros(count: usize) -> &'static [f64] {
    &TRIVIAL_ZEROS[..count.min(TRIVIAL_ZEROS.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_table_is_valid() {
        let table = ZeroTable::from_ordinates(KNOWN_ZERO_ORDINATES.to_vec()).unwrap();
        assert_eq!(&table, ZeroTable::known());
    }

    #[test]
    fn rejects_unordered_and_non_positive() {
        assert_eq!(
            ZeroTable::from_ordinates(vec![21.0, 14.0]),
            Err(ParamError::UnorderedZeros { index: 1 })
        );
        assert_eq!(
            ZeroTable::from_ordinates(vec![-1.0]),
            Err(ParamError::UnorderedZeros { index: 0 })
        );
    }

    #[test]
    fn symmetric_pairs_negate() {
        let table = ZeroTable::from_ordinates(vec![1.0, 2.0]).unwrap();
        let all: Vec<f64> = table.symmetric().collect();
        assert_eq!(all, vec![1.0, -1.0, 2.0, -2.0]);
    }

    #[test]
    fn first_clamps_to_length() {
        assert_eq!(ZeroTable::default().first(100).len(), 20);
        assert_eq!(trivial_zeros(3), &[-2.0, -4.0, -6.0]);
    }
}
