use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use zeta_core::complex::Complex;

fn random_complex(rng: &mut StdRng) -> Complex {
    Complex::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0))
}

fn reference(c: Complex) -> num_complex::Complex64 {
    num_complex::Complex64::new(c.real, c.imag)
}

#[test]
fn addition_is_commutative() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let a = random_complex(&mut rng);
        let b = random_complex(&mut rng);
        assert_eq!(a.add(b), b.add(a));
    }
}

#[test]
fn product_with_inverse_is_one() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..200 {
        let a = random_complex(&mut rng);
        if a.mag() < 1e-6 {
            continue;
        }
        let p = a.mul(a.inverse());
        assert!((p.real - 1.0).abs() < 1e-12, "{:?}", a);
        assert!(p.imag.abs() < 1e-12, "{:?}", a);
    }
}

#[test]
fn arithmetic_matches_num_complex() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..100 {
        let a = random_complex(&mut rng);
        let b = random_complex(&mut rng);
        let prod = a.mul(b);
        let expected = reference(a) * reference(b);
        assert!((prod.real - expected.re).abs() < 1e-9);
        assert!((prod.imag - expected.im).abs() < 1e-9);

        let diff = a.sub(b);
        let expected = reference(a) - reference(b);
        assert_eq!((diff.real, diff.imag), (expected.re, expected.im));
    }
}

#[test]
fn real_base_power_has_expected_magnitude_and_phase() {
    let mut rng = StdRng::seed_from_u64(5);
    for n in 1..=50u32 {
        let s = Complex::new(rng.gen_range(-2.0..2.0), rng.gen_range(-30.0..30.0));
        let p = Complex::pow_real_base(n as f64, s);
        let n = n as f64;

        let expected_mag = n.powf(s.real);
        assert!((p.mag() - expected_mag).abs() < 1e-9 * expected_mag.max(1.0));

        if n > 1.0 {
            let phase = s.imag * n.ln();
            let diff = (p.arg() - phase).rem_euclid(2.0 * std::f64::consts::PI);
            let wrapped = diff.min(2.0 * std::f64::consts::PI - diff);
            assert!(wrapped < 1e-9, "n={} s={:?}", n, s);
        }

        let expected = num_complex::Complex64::new(n, 0.0).powc(reference(s));
        assert!((p.real - expected.re).abs() < 1e-8 * expected_mag.max(1.0));
        assert!((p.imag - expected.im).abs() < 1e-8 * expected_mag.max(1.0));
    }
}

#[test]
fn power_of_one_is_one() {
    let p = Complex::pow_real_base(1.0, Complex::new(0.5, 14.0));
    assert_eq!(p, Complex::ONE);
}
