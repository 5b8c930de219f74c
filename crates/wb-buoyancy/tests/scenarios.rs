//! End-to-end work-by-buoyancy scenarios.

use wb_buoyancy::{
    BuoyancyError, BuoyancyPotential, Profile, ReferencePolicy, WorkConfig,
    buoyancy_potential_work, buoyancy_potential_work_pairwise,
};
use wb_core::units::constants::G_MPS2;
use wb_core::{Real, Tolerances, nearly_equal};

const RHO: [Real; 4] = [1027.0, 1026.5, 1025.0, 1024.0];

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

#[test]
fn reference_already_on_grid() {
    init_tracing();
    let z = [-20.0, -10.0, -5.0, 0.0];
    let wb = buoyancy_potential_work(&RHO, &z, &WorkConfig::default()).unwrap();

    assert_eq!(wb.depth, z.to_vec());
    assert_eq!(wb.len(), 4);
    assert!(!wb.inserted);
    assert_eq!(wb.work[1], 0.0);
    for (i, w) in wb.work.iter().enumerate() {
        assert!(w.is_finite(), "work[{i}] = {w}");
    }
}

#[test]
fn reference_interpolated_between_samples() {
    init_tracing();
    let z = [-20.0, -15.0, -5.0, 0.0];
    let wb = buoyancy_potential_work(&RHO, &z, &WorkConfig::default()).unwrap();

    assert_eq!(wb.depth, vec![-20.0, -15.0, -10.0, -5.0, 0.0]);
    assert_eq!(wb.depth.iter().filter(|&&d| d == -10.0).count(), 1);
    assert_eq!(wb.reference_index, 2);
    assert!(wb.inserted);
    assert!(!wb.extrapolated);
    assert!((wb.density[2] - 1025.75).abs() < 1e-12);
    assert_eq!(wb.work[2], 0.0);
    assert!(wb.work.iter().all(|w| w.is_finite()));
}

#[test]
fn reference_above_deepest_sample_strict() {
    init_tracing();
    let cfg = WorkConfig::default().with_policy(ReferencePolicy::RequireInRange);
    let err = buoyancy_potential_work(&[1025.0, 1024.0], &[-5.0, 0.0], &cfg).unwrap_err();
    assert_eq!(
        err,
        BuoyancyError::ReferenceOutOfRange {
            reference: -10.0,
            deepest: -5.0,
            shallowest: 0.0,
        }
    );
}

#[test]
fn reference_above_deepest_sample_extrapolated() {
    init_tracing();
    let wb =
        buoyancy_potential_work(&[1025.0, 1024.0], &[-5.0, 0.0], &WorkConfig::default()).unwrap();
    assert!(wb.inserted);
    assert!(wb.extrapolated);
    assert_eq!(wb.depth, vec![-10.0, -5.0, 0.0]);
    assert!((wb.density[0] - 1026.0).abs() < 1e-12);
    assert_eq!(wb.work[0], 0.0);
}

#[test]
fn missing_density_stays_local() {
    init_tracing();
    let rho = [1027.0, Real::NAN, 1025.0, 1024.0];
    let z = [-20.0, -10.0, -5.0, 0.0];
    let wb = buoyancy_potential_work(&rho, &z, &WorkConfig::default()).unwrap();

    // The reference depth itself carries the missing density.
    assert!(wb.work[1].is_nan());
    for i in [0, 2, 3] {
        assert!(wb.work[i].is_finite(), "work[{i}] = {}", wb.work[i]);
    }

    let z = [-20.0, -15.0, -10.0, 0.0];
    let rho = [1027.0, 1026.0, 1025.5, Real::NAN];
    let wb = buoyancy_potential_work(&rho, &z, &WorkConfig::default()).unwrap();
    assert!(wb.work[3].is_nan());
    assert_eq!(wb.work[2], 0.0);
    assert!(wb.work[..3].iter().all(|w| w.is_finite()));
}

#[test]
fn infinite_density_fails_on_both_paths() {
    init_tracing();
    let rho = [Real::INFINITY, 1026.5, 1025.0, 1024.0];
    let z = [-20.0, -10.0, -5.0, 0.0];
    let cfg = WorkConfig::default();
    let expected = BuoyancyError::NonFiniteDensity {
        index: 0,
        value: Real::INFINITY,
    };

    assert_eq!(
        buoyancy_potential_work(&rho, &z, &cfg).unwrap_err(),
        expected
    );
    assert_eq!(
        buoyancy_potential_work_pairwise(&rho, &z, &cfg).unwrap_err(),
        expected
    );
}

#[test]
fn rerun_on_augmented_grid_is_stable() {
    init_tracing();
    let cfg = WorkConfig::default();
    let first = buoyancy_potential_work(&RHO, &[-20.0, -15.0, -5.0, 0.0], &cfg).unwrap();
    let second = buoyancy_potential_work(&first.density, &first.depth, &cfg).unwrap();

    assert!(!second.inserted);
    assert_eq!(second.depth, first.depth);
    assert_eq!(second.work, first.work);
}

#[test]
fn displacement_integral_flips_sign_under_anchor_swap() {
    let tol = Tolerances::default();

    let two = Profile::new(&[-10.0, 0.0], &[1026.0, 1024.0]).unwrap();
    let potential = BuoyancyPotential::new(&two, G_MPS2);
    let forward = potential.displacement_integral(0, 1);
    let backward = potential.displacement_integral(1, 0);
    assert!(forward > 0.0);
    assert!(nearly_equal(forward, -backward, tol));
    // Both buoyancy and integral terms flip, so the potential is shared.
    assert!(nearly_equal(potential.at(0, 1), potential.at(1, 0), tol));

    let three = Profile::new(&[-20.0, -8.0, 0.0], &[1027.0, 1025.5, 1024.0]).unwrap();
    let potential = BuoyancyPotential::new(&three, G_MPS2);
    for a in 0..3 {
        for b in 0..3 {
            let ab = potential.displacement_integral(a, b);
            let ba = potential.displacement_integral(b, a);
            assert!(nearly_equal(ab, -ba, tol), "S[{a}->{b}] = {ab}, S[{b}->{a}] = {ba}");
        }
    }
}

#[test]
fn gravity_override_scales_work() {
    let z = [-20.0, -10.0, -5.0, 0.0];
    let earth = buoyancy_potential_work(&RHO, &z, &WorkConfig::default()).unwrap();
    let mars = buoyancy_potential_work(&RHO, &z, &WorkConfig::default().with_gravity(3.71))
        .unwrap();
    let tol = Tolerances {
        abs: 1e-9,
        rel: 1e-9,
    };
    for (e, m) in earth.work.iter().zip(&mars.work) {
        assert!(nearly_equal(e / G_MPS2, m / 3.71, tol));
    }
}

#[test]
fn custom_reference_depth() {
    let z = [-20.0, -10.0, -5.0, 0.0];
    let cfg = WorkConfig::default().with_reference_depth(-5.0);
    let wb = buoyancy_potential_work(&RHO, &z, &cfg).unwrap();
    assert_eq!(wb.reference_index, 2);
    assert_eq!(wb.reference_depth(), -5.0);
    assert_eq!(wb.work[2], 0.0);
}

#[test]
fn malformed_input_fails_fast() {
    let cfg = WorkConfig::default();
    assert!(matches!(
        buoyancy_potential_work(&RHO, &[0.0, -5.0, -10.0, -20.0], &cfg),
        Err(BuoyancyError::NonMonotonicDepth { index: 1, .. })
    ));
    assert!(matches!(
        buoyancy_potential_work(&RHO[..3], &[-20.0, -10.0, -5.0, 0.0], &cfg),
        Err(BuoyancyError::LengthMismatch {
            depth: 4,
            density: 3
        })
    ));
    assert!(matches!(
        buoyancy_potential_work(&[], &[], &cfg),
        Err(BuoyancyError::EmptyProfile)
    ));
}
