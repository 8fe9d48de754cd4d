//! Curated API surface.
//!
//! Re-exports the pipeline entry points and the types callers need to feed
//! and read them, in one flat namespace.

// planar axis math
pub use crate::planar::{infer_basis, Basis, DirClass, OrthoCfg};
// graph pipeline
pub use crate::ortho::{
    build_graph, build_groups, classify_edges, orthogonalize, orthogonalize_with_defaults,
    resolve_basis, resolve_positions, solve_offsets, CoordMap, DirGroup, Edge, GroupArena,
    GroupId, Node, NodeId, OrthoError, OrthoReport, PathGraph, Selection, Way,
};
// synthetic networks for benches and experiments
pub use crate::ortho::rand::{noisy_grid, GridCfg};
