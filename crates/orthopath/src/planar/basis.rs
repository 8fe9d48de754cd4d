//! Dominant-direction inference (weighted circular folding).
//!
//! Purpose
//! - Estimate the base vector of an orthogonal grid from edge displacements
//!   alone, robust to the inherent 90° rotational and 45° reflection
//!   ambiguity of rectilinear geometry.
//!
//! Model
//! - Each displacement is scaled by its squared length, so long straight runs
//!   dominate short noisy segments quadratically, then folded into two
//!   canonical ranges: [0°, 90°) and [−45°, 45°). Both accumulated candidates
//!   are normalized and the one with the smaller total squared residual wins;
//!   a displacement is only charged for its smaller axis component, since it
//!   is assumed to want whichever axis it is closer to.

use nalgebra::Vector2;

use super::types::{Basis, OrthoCfg};

/// Reflect into the right half-plane, angle in (−90°, 90°].
#[inline]
pub(crate) fn fold_halfplane(d: Vector2<f64>) -> Vector2<f64> {
    if d.x < 0.0 {
        -d
    } else {
        d
    }
}

/// Fold into [0°, 90°): negative-y vectors are rotated a quarter turn.
#[inline]
pub(crate) fn fold_quarter(d: Vector2<f64>) -> Vector2<f64> {
    let d = fold_halfplane(d);
    if d.y < 0.0 {
        Vector2::new(-d.y, d.x)
    } else {
        d
    }
}

/// Fold into the diagonal band [−45°, 45°).
#[inline]
pub(crate) fn fold_diagonal(d: Vector2<f64>) -> Vector2<f64> {
    let d = fold_halfplane(d);
    if d.x > d.y.abs() {
        d
    } else if d.y < 0.0 {
        // from (−90°, −45°]
        Vector2::new(-d.y, d.x)
    } else {
        // from [45°, 90°]
        Vector2::new(d.y, -d.x)
    }
}

/// Total squared residual of `disps` against `basis`: per displacement, the
/// smaller of the two squared axis components.
fn residual(basis: &Basis, disps: &[Vector2<f64>]) -> f64 {
    let mut sum = 0.0;
    for &d in disps {
        let along = basis.along(d);
        let across = basis.across(d);
        sum += (along * along).min(across * across);
    }
    sum
}

/// Infer the base vector from edge displacements.
///
/// `None` when the displacement set is empty or both folded accumulations
/// are numerically zero; callers fall back to `Basis::fallback`.
pub fn infer_basis(disps: &[Vector2<f64>], cfg: OrthoCfg) -> Option<Basis> {
    let mut acc_quarter: Vector2<f64> = Vector2::zeros();
    let mut acc_diagonal: Vector2<f64> = Vector2::zeros();
    for &d in disps {
        let weighted = d * d.norm_squared();
        acc_quarter += fold_quarter(weighted);
        acc_diagonal += fold_diagonal(weighted);
    }
    let quarter = Basis::from_vector(acc_quarter, cfg);
    let diagonal = Basis::from_vector(acc_diagonal, cfg);
    match (quarter, diagonal) {
        (Some(a), Some(b)) => {
            // Strictly-greater keeps the [0°, 90°) candidate on ties.
            if residual(&a, disps) > residual(&b, disps) {
                Some(b)
            } else {
                Some(a)
            }
        }
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}
