// Outer-hull reduction and ranking of 2D ladder cuts
//
// A cut-point (x, y) accepts events with (x_var DIR_x x) AND (y_var DIR_y y).
// A ladder cut is the OR of many cut-points; its outer hull is the staircase
// of cut-points whose acceptance region is not contained in another's.
//
// Pipeline:
// - LadderCut::build pairs coordinates, scans them loosest-y first and keeps
//   each point whose x threshold is strictly looser than the last kept one
// - RankedHullSet keeps the finished ladder cuts in descending significance
// - OuterHullEngine owns the configuration and the ranked set

mod config;
mod engine;
mod ladder;
mod point;
mod ranked;

pub use config::{AxisBounds, AxisSpec, EngineConfig};
pub use engine::OuterHullEngine;
pub use ladder::LadderCut;
pub use point::{CutDirection, CutPoint};
pub use ranked::RankedHullSet;

pub use crate::error::{HullError, Result};

#[cfg(test)]
mod tests;
