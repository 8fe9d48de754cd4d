//! Path-network orthogonalization pipeline.
//!
//! Purpose
//! - Build a deduplicated node/edge graph from selected ways, resolve the
//!   base vector (manual hint → two fixed nodes → geometric inference),
//!   classify edges against it, group same-class connectivity, solve
//!   per-group line offsets and rebuild planar positions.
//!
//! Why this design
//! - The phases mutate one `PathGraph` in sequence and stay individually
//!   public, so callers (and tests) can inspect intermediate state;
//!   `orthogonalize` is the one-call entry point.
//! - Everything is single-threaded and deterministic: BTreeMap-backed tables
//!   plus the selection's declared way/node order decide the anchor and all
//!   tie-breaks, so a given input always yields the same output.

mod build;
mod groups;
pub mod rand;
mod solve;
mod types;

pub use build::build_graph;
pub use groups::{build_groups, classify_edges};
pub use solve::{
    orthogonalize, orthogonalize_with_defaults, resolve_basis, resolve_positions, solve_offsets,
};
pub use types::{
    CoordMap, DirGroup, Edge, GroupArena, GroupId, Node, NodeId, OrthoError, OrthoReport,
    PathGraph, Selection, Way, BASE_HINT_KEY, BASE_HINT_VALUE,
};
