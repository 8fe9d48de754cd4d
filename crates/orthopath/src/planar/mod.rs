//! Planar axis math for orthogonalization.
//!
//! Purpose
//! - Provide the unit `Basis` (axis projections and their inverse) and the
//!   weighted-fold dominant-direction estimator, independent of any graph.
//!
//! Why this design
//! - The estimator works on bare displacement vectors, so it can be tested
//!   and reasoned about without building a node table; the graph pipeline in
//!   `ortho` feeds it edge displacements and consumes the resulting basis.

mod basis;
mod types;

pub use basis::infer_basis;
pub use types::{Basis, DirClass, OrthoCfg};

#[cfg(test)]
mod tests;
