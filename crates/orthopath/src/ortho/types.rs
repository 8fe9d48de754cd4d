//! Data types for the path-network pipeline.
//!
//! Kept small and explicit to make `build`, `groups` and `solve` easy to
//! read. All coordinates past the builder are anchor-relative.

use std::collections::BTreeMap;

use nalgebra::Vector2;

use crate::planar::DirClass;

/// Stable node identifier (dataset-assigned, e.g. an OSM node id).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub i64);

/// Arena index of a direction group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GroupId(pub usize);

/// Tag key marking a two-node way as a manual base-vector hint.
pub const BASE_HINT_KEY: &str = "fixme";
/// Tag value marking a two-node way as a manual base-vector hint.
pub const BASE_HINT_VALUE: &str = "ortho2_py_base_vector";

/// Ordered node-id sequence with tags.
#[derive(Clone, Debug, Default)]
pub struct Way {
    pub refs: Vec<NodeId>,
    pub tags: BTreeMap<String, String>,
}

impl Way {
    /// Untagged way over the given raw node ids.
    pub fn from_refs<I: IntoIterator<Item = i64>>(refs: I) -> Way {
        Way {
            refs: refs.into_iter().map(NodeId).collect(),
            tags: BTreeMap::new(),
        }
    }

    /// True iff this way is a manual base-vector hint.
    pub(crate) fn is_base_hint(&self) -> bool {
        self.refs.len() == 2
            && self
                .tags
                .get(BASE_HINT_KEY)
                .is_some_and(|v| v == BASE_HINT_VALUE)
    }
}

/// The ways to orthogonalize plus individually-selected node ids.
///
/// `pinned` keeps the caller's declared order; it decides which node is
/// "first" when two pinned nodes define the base vector.
#[derive(Clone, Debug, Default)]
pub struct Selection {
    pub ways: Vec<Way>,
    pub pinned: Vec<NodeId>,
}

/// Dependency graph: planar coordinates for every referenced node id.
#[derive(Clone, Debug, Default)]
pub struct CoordMap {
    coords: BTreeMap<NodeId, Vector2<f64>>,
}

impl CoordMap {
    pub fn insert(&mut self, id: NodeId, p: Vector2<f64>) {
        self.coords.insert(id, p);
    }

    pub fn get(&self, id: NodeId) -> Option<Vector2<f64>> {
        self.coords.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
}

/// Per-node state carried through the pipeline.
#[derive(Clone, Debug)]
pub struct Node {
    /// Anchor-relative coordinate at load time, immutable afterwards.
    pub original: Vector2<f64>,
    /// Anchor-relative output coordinate, starts equal to `original`.
    pub target: Vector2<f64>,
    /// Solved line offsets per direction class; `None` = unconstrained.
    pub offsets: [Option<f64>; 2],
    /// Group handle per direction class; set iff the node is incident to at
    /// least one edge of that class.
    pub groups: [Option<GroupId>; 2],
    /// Fixed nodes never move and anchor their groups' lines.
    pub fixed: bool,
}

impl Node {
    pub(crate) fn new(original: Vector2<f64>, fixed: bool) -> Node {
        Node {
            original,
            target: original,
            offsets: [None; 2],
            groups: [None; 2],
            fixed,
        }
    }
}

/// Undirected edge between consecutive way nodes; `class` is written by the
/// direction classifier. Parallel duplicates are kept and each contributes
/// independently.
#[derive(Clone, Copy, Debug)]
pub struct Edge {
    pub a: NodeId,
    pub b: NodeId,
    pub class: Option<DirClass>,
}

/// Maximal set of nodes connected by edges of one class; collapsed onto a
/// single line by the constraint solver.
#[derive(Clone, Debug)]
pub struct DirGroup {
    pub class: DirClass,
    pub members: Vec<NodeId>,
}

/// Arena of direction groups. Merged groups leave tombstones so surviving
/// `GroupId`s stay valid.
#[derive(Clone, Debug, Default)]
pub struct GroupArena {
    slots: Vec<Option<DirGroup>>,
}

impl GroupArena {
    pub(crate) fn push(&mut self, group: DirGroup) -> GroupId {
        let id = GroupId(self.slots.len());
        self.slots.push(Some(group));
        id
    }

    pub fn get(&self, id: GroupId) -> Option<&DirGroup> {
        self.slots.get(id.0).and_then(|slot| slot.as_ref())
    }

    pub(crate) fn get_mut(&mut self, id: GroupId) -> Option<&mut DirGroup> {
        self.slots.get_mut(id.0).and_then(|slot| slot.as_mut())
    }

    pub(crate) fn take(&mut self, id: GroupId) -> Option<DirGroup> {
        self.slots.get_mut(id.0).and_then(|slot| slot.take())
    }

    /// Live groups in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (GroupId, &DirGroup)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|g| (GroupId(i), g)))
    }

    pub fn live_len(&self) -> usize {
        self.slots.iter().flatten().count()
    }
}

/// Deduplicated node table, edge list and anchor produced by the builder.
#[derive(Clone, Debug)]
pub struct PathGraph {
    pub nodes: BTreeMap<NodeId, Node>,
    pub edges: Vec<Edge>,
    /// Coordinate of the first node loaded; every node coordinate is stored
    /// relative to it to limit float magnitude.
    pub anchor: Vector2<f64>,
    /// Unnormalized manual base vector consumed from a hint way, if any.
    pub manual_base: Option<Vector2<f64>>,
    /// Number of distinct unfixed nodes.
    pub movable: usize,
}

/// Outcome of one orthogonalization run.
///
/// `updates` hold absolute (anchor-restored) coordinates for the nodes that
/// moved; `pinned` counts the selection's individually-selected ids.
#[derive(Clone, Debug, Default)]
pub struct OrthoReport {
    pub updates: BTreeMap<NodeId, Vector2<f64>>,
    pub moved: usize,
    pub pinned: usize,
    pub movable: usize,
}

impl OrthoReport {
    /// True when every selected node was fixed and nothing could move.
    pub fn all_fixed(&self) -> bool {
        self.movable == 0
    }
}

/// Fatal precondition violations. Degenerate-but-valid inputs (no movable
/// nodes, zero-length inference) are reported through `OrthoReport` instead.
#[derive(Debug, thiserror::Error)]
pub enum OrthoError {
    /// The dependency graph must resolve every referenced node id.
    #[error("no coordinate for referenced node {0:?}")]
    MissingCoord(NodeId),
}
