//! Random noisy rectilinear networks (jittered grids, replayable by seed).
//!
//! Deterministic sampler for benches and property tests: a rows×cols lattice
//! of polylines, rotated as a whole, with bounded per-node jitter. Node ids
//! are assigned row-major from 1, so tests can pin specific nodes.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{CoordMap, NodeId, Selection, Way};

/// Sampler parameters.
#[derive(Clone, Copy, Debug)]
pub struct GridCfg {
    pub cols: usize,
    pub rows: usize,
    /// Lattice pitch.
    pub spacing: f64,
    /// Max absolute per-axis jitter added to every node.
    pub jitter: f64,
    /// Rotation of the whole lattice, radians.
    pub angle: f64,
}

impl Default for GridCfg {
    fn default() -> Self {
        Self {
            cols: 4,
            rows: 3,
            spacing: 10.0,
            jitter: 0.4,
            angle: 0.3,
        }
    }
}

/// Sample a jittered grid: one way per row and one per column.
pub fn noisy_grid(cfg: &GridCfg, seed: u64) -> (CoordMap, Selection) {
    let mut rng = StdRng::seed_from_u64(seed);
    let (sin, cos) = cfg.angle.sin_cos();
    let id_at = |col: usize, row: usize| NodeId((row * cfg.cols + col) as i64 + 1);

    let mut coords = CoordMap::default();
    for row in 0..cfg.rows {
        for col in 0..cfg.cols {
            let x = col as f64 * cfg.spacing + rng.gen_range(-cfg.jitter..=cfg.jitter);
            let y = row as f64 * cfg.spacing + rng.gen_range(-cfg.jitter..=cfg.jitter);
            coords.insert(
                id_at(col, row),
                Vector2::new(cos * x - sin * y, sin * x + cos * y),
            );
        }
    }

    let mut ways = Vec::with_capacity(cfg.rows + cfg.cols);
    for row in 0..cfg.rows {
        ways.push(Way {
            refs: (0..cfg.cols).map(|col| id_at(col, row)).collect(),
            tags: Default::default(),
        });
    }
    for col in 0..cfg.cols {
        ways.push(Way {
            refs: (0..cfg.rows).map(|row| id_at(col, row)).collect(),
            tags: Default::default(),
        });
    }

    (
        coords,
        Selection {
            ways,
            pinned: Vec::new(),
        },
    )
}
