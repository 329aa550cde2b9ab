//! Primes and the prime counting function π(x).

use crate::points::CurvePoint;

/// Trial division up to ⌊√n⌋.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2;
    while d <= n / d {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

/// All primes in `[0, max_n]`, ascending.
pub fn primes_up_to(max_n: u64) -> Vec<u64> {
    (0..=max_n).filter(|&n| is_prime(n)).collect()
}

/// π(x) for an ascending prime list.
pub fn prime_count(primes: &[u64], x: f64) -> usize {
    primes.partition_point(|&p| p as f64 <= x)
}

/// Step outline of π(x) on `[0, upper_bound]`.
///
/// Starts at (0, 0).  Each prime p contributes a horizontal run to
/// (p, count) and a vertical jump to (p, count + 1), so the value at p
/// already includes p.  The outline closes with a horizontal run to
/// `upper_bound`.  Primes past `upper_bound` are ignored.
pub fn prime_counting_step(primes: &[u64], upper_bound: f64) -> Vec<CurvePoint> {
    let mut points = Vec::with_capacity(primes.len() * 2 + 2);
    points.push(CurvePoint::new(0.0, 0.0));
    let count = primes
        .iter()
        .map(|&p| p as f64)
        .take_while(|&p| p <= upper_bound)
        .fold(0.0, |count, p| {
            points.push(CurvePoint::new(p, count));
            points.push(CurvePoint::new(p, count + 1.0));
            count + 1.0
        });
    points.push(CurvePoint::new(upper_bound, count));
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_cases() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(is_prime(97));
        assert!(!is_prime(91));
    }

    #[test]
    fn primes_up_to_hundred() {
        let primes = primes_up_to(100);
        assert_eq!(primes.len(), 25);
        assert_eq!(primes.first(), Some(&2));
        assert_eq!(primes.last(), Some(&97));
    }

    #[test]
    fn prime_count_reads_step_values() {
        let primes = primes_up_to(30);
        assert_eq!(prime_count(&primes, 1.9), 0);
        assert_eq!(prime_count(&primes, 2.0), 1);
        assert_eq!(prime_count(&primes, 28.5), 9);
        assert_eq!(prime_count(&primes, 29.0), 10);
    }

    #[test]
    fn empty_prime_list_is_flat() {
        let steps = prime_counting_step(&[], 10.0);
        assert_eq!(steps, vec![CurvePoint::new(0.0, 0.0), CurvePoint::new(10.0, 0.0)]);
    }
}
