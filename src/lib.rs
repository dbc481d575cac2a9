//! Laddercut - outer-hull reduction and significance ranking for 2D ladder cuts
//!
//! A grid search over two discriminating variables yields many rectangular
//! cut-points. This library scores them with a signed Poisson significance,
//! reduces each OR-combination of cut-points (a ladder cut) to its
//! non-dominated staircase, and ranks the resulting hulls so the best
//! decision boundary can be picked by rank.

pub mod cli;
pub mod error;
pub mod hull;
pub mod report;
pub mod results;
pub mod significance;

pub use error::{HullError, Result};
pub use hull::{CutDirection, CutPoint, LadderCut, OuterHullEngine};
pub use significance::significance;
