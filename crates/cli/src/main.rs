//! Orthogonalize planar path networks from a JSON document.
//!
//! Input: `{ "nodes": {id: [x, y]}, "ways": [{"refs": [...], "tags": {...}}],
//! "selected": [id, ...] }` with already-projected planar coordinates.
//! Output: `{ "updates": {id: [x, y]}, "moved": n, "fixed": m }`.
//! Projection to and from geographic coordinates is up to the caller.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use tracing_subscriber::fmt::SubscriberBuilder;

use orthopath::prelude::*;

#[derive(Parser)]
#[command(name = "orthopath")]
#[command(about = "Square up planar way geometry against a dominant direction")]
struct Cmd {
    /// Input JSON document; stdin when omitted.
    input: Option<PathBuf>,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Pretty-print the output document.
    #[arg(long)]
    pretty: bool,
}

#[derive(Deserialize)]
struct InputDoc {
    /// id → projected planar coordinate
    nodes: BTreeMap<i64, [f64; 2]>,
    #[serde(default)]
    ways: Vec<WayDoc>,
    /// Individually-selected (fixed) node ids, in selection order.
    #[serde(default)]
    selected: Vec<i64>,
}

#[derive(Deserialize)]
struct WayDoc {
    refs: Vec<i64>,
    #[serde(default)]
    tags: BTreeMap<String, String>,
}

#[derive(Serialize)]
struct OutputDoc {
    updates: BTreeMap<i64, [f64; 2]>,
    moved: usize,
    fixed: usize,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let doc = load_doc(cmd.input.as_deref())?;
    let out = process(&doc)?;
    emit(&out, cmd.out.as_deref(), cmd.pretty)
}

fn load_doc(input: Option<&Path>) -> Result<InputDoc> {
    let raw = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };
    serde_json::from_str(&raw).context("parsing input document")
}

fn process(doc: &InputDoc) -> Result<OutputDoc> {
    if doc.ways.is_empty() {
        tracing::info!("no geometry for orthogonalization");
        return Ok(OutputDoc {
            updates: BTreeMap::new(),
            moved: 0,
            fixed: doc.selected.len(),
        });
    }

    let mut coords = CoordMap::default();
    for (&id, xy) in &doc.nodes {
        coords.insert(NodeId(id), Vec2::new(xy[0], xy[1]));
    }
    let selection = Selection {
        ways: doc
            .ways
            .iter()
            .map(|w| Way {
                refs: w.refs.iter().copied().map(NodeId).collect(),
                tags: w.tags.clone(),
            })
            .collect(),
        pinned: doc.selected.iter().copied().map(NodeId).collect(),
    };

    let report = orthogonalize_with_defaults(&coords, &selection)?;
    if report.all_fixed() {
        tracing::info!(fixed = report.pinned, "all nodes fixed, nothing to move");
    } else {
        tracing::info!(moved = report.moved, fixed = report.pinned, "orthogonalized");
    }
    Ok(OutputDoc {
        updates: report
            .updates
            .iter()
            .map(|(id, p)| (id.0, [p.x, p.y]))
            .collect(),
        moved: report.moved,
        fixed: report.pinned,
    })
}

fn emit(out: &OutputDoc, path: Option<&Path>, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(out)?
    } else {
        serde_json::to_string(out)?
    };
    match path {
        Some(path) => std::fs::write(path, json)
            .with_context(|| format!("writing {}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect_doc() -> InputDoc {
        serde_json::from_str(
            r#"{
                "nodes": {
                    "1": [0.0, 0.0],
                    "2": [10.0, 0.2],
                    "3": [10.3, 5.0],
                    "4": [-0.1, 5.1]
                },
                "ways": [{"refs": [1, 2, 3, 4, 1]}],
                "selected": []
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn processes_a_rectangle_document() {
        let out = process(&rect_doc()).unwrap();
        assert_eq!(out.moved, out.updates.len());
        assert!(out.moved > 0);
        assert_eq!(out.fixed, 0);
    }

    #[test]
    fn empty_ways_short_circuit() {
        let doc: InputDoc =
            serde_json::from_str(r#"{"nodes": {}, "ways": [], "selected": [7]}"#).unwrap();
        let out = process(&doc).unwrap();
        assert!(out.updates.is_empty());
        assert_eq!(out.fixed, 1);
    }

    #[test]
    fn emits_and_reloads_through_a_file() {
        let out = process(&rect_doc()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("updates.json");
        emit(&out, Some(&path), true).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        let back: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(back["moved"], serde_json::json!(out.moved));
    }
}
