use zeta_core::approximations::riemann_explicit_sum;
use zeta_core::config::SamplingConfig;
use zeta_core::curves::{PrimeCurves, ZetaCurves};
use zeta_core::zeros::ZeroTable;
use zeta_core::ParamError;

#[test]
fn prime_curves_with_defaults() {
    let config = SamplingConfig::default();
    let curves = PrimeCurves::build(&config, &ZeroTable::default()).unwrap();

    assert_eq!(curves.primes.len(), 25);
    assert_eq!(curves.counting_step.last().map(|p| p.y), Some(25.0));
    assert_eq!(curves.waves.len(), config.zero_count);
    assert_eq!(curves.reconstruction.len(), curves.li.len());
    assert_eq!(curves.x_over_ln_x.len(), curves.waves[0].points.len());
    assert!((curves.li.last().unwrap().x - 100.0).abs() < 1e-9);
}

#[test]
fn reconstruction_agrees_with_explicit_sum() {
    let config = SamplingConfig::default();
    let zeros = ZeroTable::default();
    let curves = PrimeCurves::build(&config, &zeros).unwrap();
    let last = curves.reconstruction.last().unwrap();
    let direct = riemann_explicit_sum(last.x, zeros.first(config.zero_count), config.li_step);
    assert!((last.y - direct).abs() < 1e-9);
}

#[test]
fn custom_zero_table_drives_waves() {
    let zeros = ZeroTable::from_ordinates(vec![14.134725141734693]).unwrap();
    let curves = PrimeCurves::build(&SamplingConfig::default(), &zeros).unwrap();
    assert_eq!(curves.waves.len(), 1);
    assert_eq!(curves.waves[0].gamma, 14.134725141734693);
}

#[test]
fn zeta_curves_mark_zeros_in_range() {
    let config = SamplingConfig {
        t_max: 30.0,
        zeta_terms: 100,
        ..SamplingConfig::default()
    };
    let curves = ZetaCurves::build(&config, ZeroTable::known()).unwrap();

    // 14.13, 21.02, 25.01 lie in [0, 30]
    assert_eq!(curves.zero_markers.len(), 3);
    assert_eq!(curves.trivial_zero_markers.len(), config.trivial_zero_count);
    assert_eq!(curves.critical_line.len(), curves.magnitude.len());
    assert_eq!(curves.critical_line.len(), 301);
    assert!(curves
        .critical_line
        .iter()
        .zip(curves.magnitude.iter())
        .all(|(p, m)| p.z == m.x));
}

#[test]
fn invalid_config_is_rejected_before_sampling() {
    let config = SamplingConfig {
        zeta_terms: 0,
        ..SamplingConfig::default()
    };
    assert_eq!(
        ZetaCurves::build(&config, ZeroTable::known()).err(),
        Some(ParamError::ZeroTerms)
    );
}

#[test]
fn curves_serialize_to_json() {
    let curves = PrimeCurves::build(&SamplingConfig::default(), &ZeroTable::default()).unwrap();
    let json = serde_json::to_value(&curves).unwrap();
    assert_eq!(json["primes"][0], 2);
    assert!(json["counting_step"][0]["x"].is_number());
}
