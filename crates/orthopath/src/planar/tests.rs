use super::basis::{fold_diagonal, fold_quarter};
use super::*;
use nalgebra::Vector2;
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn angle_deg(v: Vector2<f64>) -> f64 {
    v.y.atan2(v.x).to_degrees()
}

#[test]
fn folds_land_in_canonical_ranges() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let v = Vector2::new(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0));
        if v.norm() < 1e-6 {
            continue;
        }
        let q = angle_deg(fold_quarter(v));
        assert!((-1e-9..=90.0 + 1e-9).contains(&q), "quarter fold at {q}°");
        let d = angle_deg(fold_diagonal(v));
        assert!((-45.0 - 1e-9..=45.0 + 1e-9).contains(&d), "diagonal fold at {d}°");
    }
}

#[test]
fn quarter_fold_identifies_perpendicular_pairs() {
    // v and its quarter-turn rotation fold to the same ray
    let v = Vector2::new(3.0, 1.0);
    let w = Vector2::new(-v.y, v.x);
    let fv = fold_quarter(v);
    let fw = fold_quarter(w);
    assert!((angle_deg(fv) - angle_deg(fw)).abs() < 1e-12);
}

#[test]
fn inferred_basis_is_unit_and_aligned() {
    // exact rectangle rotated by 0.3 rad
    let th: f64 = 0.3;
    let u = Vector2::new(th.cos(), th.sin());
    let w = Vector2::new(-th.sin(), th.cos());
    let disps = [u * 10.0, w * 5.0, u * -10.0, w * -5.0];
    let basis = infer_basis(&disps, OrthoCfg::default()).unwrap();
    assert!((basis.vector().norm() - 1.0).abs() < 1e-12);
    for d in disps {
        let along = basis.along(d).abs();
        let across = basis.across(d).abs();
        assert!(along.min(across) < 1e-9, "displacement {d:?} off-axis");
    }
}

#[test]
fn inference_rejects_degenerate_input() {
    let cfg = OrthoCfg::default();
    assert!(infer_basis(&[], cfg).is_none());
    assert!(infer_basis(&[Vector2::zeros(), Vector2::zeros()], cfg).is_none());
    let fb = Basis::fallback();
    assert_eq!(fb.vector(), Vector2::new(1.0, 0.0));
}

#[test]
fn projection_reconstruction_roundtrip() {
    let mut rng = StdRng::seed_from_u64(21);
    for _ in 0..50 {
        let v = Vector2::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0));
        let Some(basis) = Basis::from_vector(v, OrthoCfg::default()) else {
            continue;
        };
        let p = Vector2::new(rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0));
        let q = basis.position(basis.across(p), basis.along(p));
        assert!((q - p).norm() < 1e-9);
    }
}

#[test]
fn line_offset_pins_the_other_axis() {
    let basis = Basis::fallback();
    let p = Vector2::new(3.0, 4.0);
    // along-class groups pin the across projection and vice versa
    assert_eq!(basis.line_offset(DirClass::Along, p), basis.across(p));
    assert_eq!(basis.line_offset(DirClass::Across, p), basis.along(p));
    assert_eq!(basis.across(p), -4.0);
    assert_eq!(basis.along(p), 3.0);
}

proptest! {
    #[test]
    fn prop_inferred_basis_is_unit(
        raw in proptest::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 1..40)
    ) {
        let disps: Vec<Vector2<f64>> = raw.iter().map(|&(x, y)| Vector2::new(x, y)).collect();
        if let Some(basis) = infer_basis(&disps, OrthoCfg::default()) {
            prop_assert!((basis.vector().norm() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn prop_roundtrip_is_isometric(
        (vx, vy) in (-10.0f64..10.0, -10.0f64..10.0),
        (px, py) in (-1000.0f64..1000.0, -1000.0f64..1000.0)
    ) {
        if let Some(basis) = Basis::from_vector(Vector2::new(vx, vy), OrthoCfg::default()) {
            let p = Vector2::new(px, py);
            let q = basis.position(basis.across(p), basis.along(p));
            prop_assert!((q - p).norm() < 1e-6);
        }
    }
}
