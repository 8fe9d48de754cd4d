//! Offset solving, position resolution and the pipeline entry point.
//!
//! Purpose
//! - Collapse every direction group onto one line (its C-parameter), with
//!   fixed-node authority, then rebuild planar targets from the two offsets.
//!
//! With base vector (A, B), the group lines are `A·x + B·y = along` for
//! across-class groups and `B·x − A·y = across` for along-class groups; the
//! reconstruction inverts both at once because the basis is orthonormal.

use std::collections::BTreeMap;

use nalgebra::Vector2;
use tracing::debug;

use crate::planar::{infer_basis, Basis, DirClass, OrthoCfg};

use super::build::build_graph;
use super::groups::{build_groups, classify_edges};
use super::types::{
    CoordMap, GroupArena, NodeId, OrthoError, OrthoReport, PathGraph, Selection,
};

/// Pick the base vector: manual hint, then exactly-two pinned nodes, else
/// geometric inference; the +x axis on degenerate input.
pub fn resolve_basis(
    graph: &PathGraph,
    coords: &CoordMap,
    selection: &Selection,
    cfg: OrthoCfg,
) -> Result<Basis, OrthoError> {
    if let Some(v) = graph.manual_base {
        debug!(?v, "base vector from manual hint");
        return Ok(Basis::from_vector(v, cfg).unwrap_or_else(Basis::fallback));
    }
    if let [first, second] = selection.pinned[..] {
        let v = pinned_coord(graph, coords, first)? - pinned_coord(graph, coords, second)?;
        debug!(?v, "base vector from two fixed nodes");
        return Ok(Basis::from_vector(v, cfg).unwrap_or_else(Basis::fallback));
    }
    let disps: Vec<Vector2<f64>> = graph
        .edges
        .iter()
        .map(|e| graph.nodes[&e.b].original - graph.nodes[&e.a].original)
        .collect();
    let basis = infer_basis(&disps, cfg).unwrap_or_else(Basis::fallback);
    debug!(v = ?basis.vector(), edges = disps.len(), "base vector inferred from geometry");
    Ok(basis)
}

/// Anchor-relative coordinate of a pinned node: from the node table when the
/// id is part of a way, else straight from the dependency graph.
fn pinned_coord(
    graph: &PathGraph,
    coords: &CoordMap,
    id: NodeId,
) -> Result<Vector2<f64>, OrthoError> {
    if let Some(node) = graph.nodes.get(&id) {
        return Ok(node.original);
    }
    coords
        .get(id)
        .map(|p| p - graph.anchor)
        .ok_or(OrthoError::MissingCoord(id))
}

/// Compute each group's line offset and store it on unfixed members.
///
/// Any fixed member overrides: the line sits at the fixed members' mean and
/// unfixed contributions are ignored. Fixed members never receive an offset.
pub fn solve_offsets(graph: &mut PathGraph, arena: &GroupArena, basis: &Basis) {
    for (_, group) in arena.iter() {
        let mut sum = 0.0;
        let mut count = 0usize;
        let mut fixed_sum = 0.0;
        let mut fixed_count = 0usize;
        for &m in &group.members {
            let node = &graph.nodes[&m];
            let c0 = basis.line_offset(group.class, node.original);
            sum += c0;
            count += 1;
            if node.fixed {
                fixed_sum += c0;
                fixed_count += 1;
            }
        }
        if count == 0 {
            // groups are created with two members; kept total regardless
            continue;
        }
        let offset = if fixed_count > 0 {
            fixed_sum / fixed_count as f64
        } else {
            sum / count as f64
        };
        for &m in &group.members {
            if let Some(node) = graph.nodes.get_mut(&m) {
                if !node.fixed {
                    node.offsets[group.class.index()] = Some(offset);
                }
            }
        }
    }
}

/// Rebuild targets for unfixed nodes and collect absolute updates.
///
/// A missing offset (node without edges of that class) defaults to the
/// node's own projection, leaving that axis unchanged. A node counts as
/// moved iff its target differs from its original coordinate.
pub fn resolve_positions(
    graph: &mut PathGraph,
    basis: &Basis,
) -> (BTreeMap<NodeId, Vector2<f64>>, usize) {
    let mut updates = BTreeMap::new();
    let mut moved = 0usize;
    let anchor = graph.anchor;
    for (&id, node) in graph.nodes.iter_mut() {
        if node.fixed {
            continue;
        }
        let across = node.offsets[DirClass::Along.index()]
            .unwrap_or_else(|| basis.across(node.original));
        let along = node.offsets[DirClass::Across.index()]
            .unwrap_or_else(|| basis.along(node.original));
        node.target = basis.position(across, along);
        if node.target != node.original {
            moved += 1;
            updates.insert(id, node.target + anchor);
        }
    }
    (updates, moved)
}

/// Run the full pipeline on a selection.
///
/// Degenerate inputs are informational, not errors: a selection where every
/// node is fixed yields an empty report with `movable == 0`.
pub fn orthogonalize(
    coords: &CoordMap,
    selection: &Selection,
    cfg: OrthoCfg,
) -> Result<OrthoReport, OrthoError> {
    let mut graph = build_graph(coords, selection)?;
    let pinned = selection.pinned.len();
    if graph.movable == 0 {
        debug!(pinned, "all nodes fixed, nothing to move");
        return Ok(OrthoReport {
            pinned,
            ..OrthoReport::default()
        });
    }
    let basis = resolve_basis(&graph, coords, selection, cfg)?;
    classify_edges(&mut graph, &basis);
    let arena = build_groups(&mut graph);
    debug!(
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        groups = arena.live_len(),
        "graph grouped"
    );
    solve_offsets(&mut graph, &arena, &basis);
    let (updates, moved) = resolve_positions(&mut graph, &basis);
    debug!(moved, pinned, "positions resolved");
    Ok(OrthoReport {
        updates,
        moved,
        pinned,
        movable: graph.movable,
    })
}

/// `orthogonalize` with `OrthoCfg::default()`.
pub fn orthogonalize_with_defaults(
    coords: &CoordMap,
    selection: &Selection,
) -> Result<OrthoReport, OrthoError> {
    orthogonalize(coords, selection, OrthoCfg::default())
}
