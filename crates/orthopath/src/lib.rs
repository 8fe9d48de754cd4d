//! Orthogonalization core for planar path networks.
//!
//! Squares up way geometry against a single dominant direction: every edge
//! ends up parallel or perpendicular to one base vector, while individually
//! selected ("fixed") nodes stay exactly where they are. The crate is purely
//! planar; projecting to and from geographic coordinates is the caller's
//! concern, once per node, outside this crate.
//!
//! Pipeline (see `ortho`):
//! graph build → base-vector resolution → edge classification → same-class
//! connectivity grouping → per-group line-offset solve → position rebuild.

pub mod api;
pub mod ortho;
pub mod planar;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;
pub use planar::{Basis, DirClass, OrthoCfg};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::ortho::{
        orthogonalize, orthogonalize_with_defaults, CoordMap, NodeId, OrthoError, OrthoReport,
        Selection, Way,
    };
    pub use crate::planar::{Basis, DirClass, OrthoCfg};
    pub use nalgebra::Vector2 as Vec2;
}

/// 2-D cross product (z-component of a × b).
/// Positive for a→b counterclockwise, negative otherwise.
#[inline]
pub fn cross(a: Vec2<f64>, b: Vec2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}
