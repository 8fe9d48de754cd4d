//! Axis-system types and tolerances.
//!
//! - `OrthoCfg`: centralizes the degenerate-norm threshold.
//! - `DirClass`: the two direction classes of the orthogonal system.
//! - `Basis`: unit base vector with axis projections and reconstruction.

use nalgebra::Vector2;

/// Numerical configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct OrthoCfg {
    /// Accumulated vectors with a norm at or below this are treated as zero
    /// during base-vector normalization.
    pub eps_base: f64,
}

impl Default for OrthoCfg {
    fn default() -> Self {
        Self { eps_base: 1e-12 }
    }
}

/// Direction class of an edge relative to the base vector.
///
/// The class names the dominant component of the edge displacement. A group
/// of one class collapses onto a line of constant *other* projection: edges
/// running along the base share an across-offset, and vice versa.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DirClass {
    /// Dominant component along the base vector; pins the across-offset.
    Along = 0,
    /// Dominant component across the base vector; pins the along-offset.
    Across = 1,
}

impl DirClass {
    /// Index into per-class arrays (`offsets`, `groups`).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Unit base vector (A, B) defining the orthogonal axis system.
///
/// Line equations in anchor-relative coordinates:
/// `A·x + B·y = along` and `B·x − A·y = across`; both are inverted at once by
/// `position` because the basis is unit length (orthonormal transform).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Basis {
    v: Vector2<f64>,
}

impl Basis {
    /// Normalize `v` into a unit basis; `None` when `v` is numerically zero.
    pub fn from_vector(v: Vector2<f64>, cfg: OrthoCfg) -> Option<Basis> {
        let norm = v.norm();
        if !norm.is_finite() || norm <= cfg.eps_base {
            return None;
        }
        Some(Basis { v: v / norm })
    }

    /// Documented fallback for degenerate networks (empty edge set, perfectly
    /// cancelling folds, coincident hint nodes): the +x unit axis.
    #[inline]
    pub fn fallback() -> Basis {
        Basis {
            v: Vector2::new(1.0, 0.0),
        }
    }

    /// The unit vector itself.
    #[inline]
    pub fn vector(&self) -> Vector2<f64> {
        self.v
    }

    /// Projection onto the base axis.
    #[inline]
    pub fn along(&self, p: Vector2<f64>) -> f64 {
        p.dot(&self.v)
    }

    /// Projection onto the perpendicular axis.
    #[inline]
    pub fn across(&self, p: Vector2<f64>) -> f64 {
        crate::cross(p, self.v)
    }

    /// The projection a group of class `class` pins to a shared constant.
    #[inline]
    pub fn line_offset(&self, class: DirClass, p: Vector2<f64>) -> f64 {
        match class {
            DirClass::Along => self.across(p),
            DirClass::Across => self.along(p),
        }
    }

    /// Rebuild a point from its two offsets; exact inverse of `along`/`across`
    /// because the basis is unit length.
    #[inline]
    pub fn position(&self, across: f64, along: f64) -> Vector2<f64> {
        Vector2::new(
            self.v.x * along + self.v.y * across,
            -self.v.x * across + self.v.y * along,
        )
    }
}
