//! Graph construction: selected ways → deduplicated node table + edge list.
//!
//! The first coordinate loaded becomes the anchor and everything downstream
//! is anchor-relative. A two-node way tagged `fixme=ortho2_py_base_vector`
//! is consumed as a manual base-vector hint instead of contributing nodes or
//! edges; only the first such way counts, and its nodes can still enter the
//! table through other selected ways.

use std::collections::{BTreeMap, BTreeSet};

use nalgebra::Vector2;

use super::types::{CoordMap, Edge, Node, NodeId, OrthoError, PathGraph, Selection};

/// Build the path graph for a selection.
///
/// Edges connect consecutive nodes within one way and are dropped when both
/// endpoints are fixed (they carry no information for the solver). A node
/// appearing in several ways is entered once, on first sight.
pub fn build_graph(coords: &CoordMap, selection: &Selection) -> Result<PathGraph, OrthoError> {
    let pinned: BTreeSet<NodeId> = selection.pinned.iter().copied().collect();
    let mut nodes: BTreeMap<NodeId, Node> = BTreeMap::new();
    let mut edges: Vec<Edge> = Vec::new();
    let mut anchor: Option<Vector2<f64>> = None;
    let mut manual_base: Option<Vector2<f64>> = None;
    let mut movable = 0usize;

    for way in &selection.ways {
        let consume_hint = manual_base.is_none() && way.is_base_hint();
        let mut hint_first: Option<Vector2<f64>> = None;
        let mut prev: Option<(NodeId, bool)> = None;
        for &id in &way.refs {
            let raw = coords.get(id).ok_or(OrthoError::MissingCoord(id))?;
            let origin = *anchor.get_or_insert(raw);
            let p = raw - origin;

            if consume_hint {
                match hint_first {
                    None => hint_first = Some(p),
                    Some(first) => manual_base = Some(first - p),
                }
                continue;
            }

            let fixed = pinned.contains(&id);
            if !nodes.contains_key(&id) {
                nodes.insert(id, Node::new(p, fixed));
                if !fixed {
                    movable += 1;
                }
            }
            if let Some((prev_id, prev_fixed)) = prev {
                if !(fixed && prev_fixed) {
                    edges.push(Edge {
                        a: prev_id,
                        b: id,
                        class: None,
                    });
                }
            }
            prev = Some((id, fixed));
        }
    }

    Ok(PathGraph {
        nodes,
        edges,
        anchor: anchor.unwrap_or_else(Vector2::zeros),
        manual_base,
        movable,
    })
}
