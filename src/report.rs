//! Text and JSON listings of ranked ladder cuts
//!
//! The text form prints one cut-point of the outer hull per line, y cut
//! first:
//!
//! ```text
//!    0	(R2 >   0.1000) AND (MR >    100.0)
//! ```

use crate::hull::{AxisBounds, AxisSpec, CutPoint, LadderCut, OuterHullEngine};
use anyhow::Result;
use serde::Serialize;

/// A ranked ladder cut as written by `--format json`
#[derive(Debug, Clone, Serialize)]
pub struct JsonLadderCut<'a> {
    pub rank: usize,
    pub significance: f64,
    pub outer_hull: &'a [CutPoint],
    pub raw_points: usize,
}

/// Top ladder cuts plus what a renderer needs to draw them
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport<'a> {
    pub bounds: &'a AxisBounds,
    pub axes: &'a [AxisSpec; 2],
    pub total: usize,
    pub ladder_cuts: Vec<JsonLadderCut<'a>>,
}

/// List the outer hull of `cut` as AND-ed threshold pairs
pub fn describe(cut: &LadderCut, axes: &[AxisSpec; 2]) -> String {
    let [x_axis, y_axis] = axes;
    let mut output = String::new();

    for (i, point) in cut.outer_hull().iter().enumerate() {
        output.push_str(&format!(
            "\t{:4}\t({} {} {:8.4}) AND ({} {} {:8.1})\n",
            i, y_axis.name, y_axis.direction, point.y, x_axis.name, x_axis.direction, point.x
        ));
    }

    output
}

/// Text listing of the `top` most significant ladder cuts
pub fn to_text(engine: &OuterHullEngine, top: usize) -> String {
    let mut output = String::new();

    for (rank, cut) in engine.iter().take(top).enumerate() {
        output.push_str(&format!(
            "=== ladder cut {} (Z = {:.4}, {} of {} cut-points on hull)\n",
            rank,
            cut.significance(),
            cut.outer_hull().len(),
            cut.raw_points().len()
        ));
        output.push_str(&describe(cut, engine.axes()));
    }

    output
}

/// JSON listing of the `top` most significant ladder cuts
pub fn to_json(engine: &OuterHullEngine, top: usize) -> Result<String> {
    let report = JsonReport {
        bounds: engine.bounds(),
        axes: engine.axes(),
        total: engine.size(),
        ladder_cuts: engine
            .iter()
            .take(top)
            .enumerate()
            .map(|(rank, cut)| JsonLadderCut {
                rank,
                significance: cut.significance(),
                outer_hull: cut.outer_hull(),
                raw_points: cut.raw_points().len(),
            })
            .collect(),
    };

    Ok(serde_json::to_string_pretty(&report)?)
}
