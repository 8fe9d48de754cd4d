//! Direction classification and same-class connectivity grouping.
//!
//! Grouping is a naive union over the edge list: groups live in an arena,
//! nodes hold per-class group ids, and a merge absorbs the smaller member
//! list into the larger so surviving ids stay valid. Merges are rare enough
//! on path networks that path compression is not worth the bookkeeping.

use crate::planar::{Basis, DirClass};

use super::types::{DirGroup, GroupArena, GroupId, NodeId, PathGraph};

/// Label every edge with its direction class from ORIGINAL coordinates:
/// `Along` iff the displacement's base-axis component dominates strictly.
pub fn classify_edges(graph: &mut PathGraph, basis: &Basis) {
    let PathGraph { nodes, edges, .. } = graph;
    for e in edges.iter_mut() {
        let d = nodes[&e.b].original - nodes[&e.a].original;
        let along = basis.along(d).abs();
        let across = basis.across(d).abs();
        e.class = Some(if along > across {
            DirClass::Along
        } else {
            DirClass::Across
        });
    }
}

/// Connect nodes linked by same-class edges into direction groups.
///
/// After the pass, the class-`c` groups exactly partition the nodes incident
/// to at least one class-`c` edge.
pub fn build_groups(graph: &mut PathGraph) -> GroupArena {
    let mut arena = GroupArena::default();
    let classed: Vec<(NodeId, NodeId, DirClass)> = graph
        .edges
        .iter()
        .filter_map(|e| e.class.map(|c| (e.a, e.b, c)))
        .collect();
    for (a, b, class) in classed {
        let c = class.index();
        let ga = graph.nodes[&a].groups[c];
        let gb = graph.nodes[&b].groups[c];
        match (ga, gb) {
            (None, None) => {
                let id = arena.push(DirGroup {
                    class,
                    members: vec![a, b],
                });
                set_group(graph, a, c, id);
                set_group(graph, b, c, id);
            }
            (None, Some(id)) => join(&mut arena, graph, id, a, c),
            (Some(id), None) => join(&mut arena, graph, id, b, c),
            (Some(ga), Some(gb)) if ga == gb => {}
            (Some(ga), Some(gb)) => merge(&mut arena, graph, ga, gb, c),
        }
    }
    arena
}

fn set_group(graph: &mut PathGraph, id: NodeId, c: usize, group: GroupId) {
    if let Some(node) = graph.nodes.get_mut(&id) {
        node.groups[c] = Some(group);
    }
}

fn join(arena: &mut GroupArena, graph: &mut PathGraph, group: GroupId, id: NodeId, c: usize) {
    if let Some(g) = arena.get_mut(group) {
        g.members.push(id);
    }
    set_group(graph, id, c, group);
}

/// Absorb the smaller group into the larger; absorbed members are re-pointed
/// and appended, the absorbed slot becomes a tombstone.
fn merge(arena: &mut GroupArena, graph: &mut PathGraph, ga: GroupId, gb: GroupId, c: usize) {
    let len_a = arena.get(ga).map_or(0, |g| g.members.len());
    let len_b = arena.get(gb).map_or(0, |g| g.members.len());
    let (survivor, absorbed) = if len_b > len_a { (gb, ga) } else { (ga, gb) };
    let Some(dead) = arena.take(absorbed) else {
        return;
    };
    for &m in &dead.members {
        set_group(graph, m, c, survivor);
    }
    if let Some(g) = arena.get_mut(survivor) {
        g.members.extend(dead.members);
    }
}
