use crate::error::{HullError, Result};
use crate::hull::{CutDirection, CutPoint};
use serde::Serialize;

/// One ladder cut: an OR of cut-points, reduced to its outer hull
///
/// Immutable once built. `outer_hull` is ordered by increasing y and never
/// contains a point whose acceptance region lies inside another hull point's.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LadderCut {
    significance: f64,
    outer_hull: Vec<CutPoint>,
    raw_points: Vec<CutPoint>,
}

impl LadderCut {
    /// Pair coordinates into cut-points and reduce them to the outer hull
    ///
    /// # Errors
    /// `InvalidInput` if the sequences are empty, differ in length, contain a
    /// non-finite coordinate, or the significance is NaN.
    pub fn build(
        significance: f64,
        y: &[f64],
        x: &[f64],
        x_direction: CutDirection,
        y_direction: CutDirection,
    ) -> Result<Self> {
        if y.len() != x.len() {
            return Err(HullError::InvalidInput(format!(
                "y and x must have equal length, got {} and {}",
                y.len(),
                x.len()
            )));
        }
        if y.is_empty() {
            return Err(HullError::InvalidInput(
                "a ladder cut needs at least one cut-point".to_string(),
            ));
        }
        if significance.is_nan() {
            return Err(HullError::InvalidInput(
                "significance must not be NaN".to_string(),
            ));
        }
        if let Some(i) = (0..y.len()).find(|&i| !y[i].is_finite() || !x[i].is_finite()) {
            return Err(HullError::InvalidInput(format!(
                "cut-point {} is not finite: y={} x={}",
                i, y[i], x[i]
            )));
        }

        // Adding +0.0 folds -0.0 into 0.0 so equal thresholds sort as ties
        let mut points: Vec<CutPoint> = y
            .iter()
            .zip(x)
            .map(|(&y, &x)| CutPoint::new(x + 0.0, y + 0.0))
            .collect();

        let outer_hull = outer_hull(&mut points, x_direction, y_direction);
        points.sort_by(CutPoint::cmp_yx);

        Ok(Self {
            significance,
            outer_hull,
            raw_points: points,
        })
    }

    pub fn significance(&self) -> f64 {
        self.significance
    }

    /// Non-dominated cut-points, ordered by increasing y
    pub fn outer_hull(&self) -> &[CutPoint] {
        &self.outer_hull
    }

    /// Every submitted cut-point, ordered by `(y, x)`
    pub fn raw_points(&self) -> &[CutPoint] {
        &self.raw_points
    }
}

/// Reduce `points` to the staircase of cut-points not contained in any other
///
/// Points are scanned from the loosest y threshold to the tightest (ties on
/// y broken loosest x first). A point joins the hull only when its x
/// threshold is strictly looser than the last hull point's; otherwise the
/// last hull point already accepts everything it does. Leaves `points` in
/// scan order.
pub(crate) fn outer_hull(
    points: &mut [CutPoint],
    x_direction: CutDirection,
    y_direction: CutDirection,
) -> Vec<CutPoint> {
    points.sort_by(|a, b| {
        y_direction
            .loosest_first(a.y, b.y)
            .then_with(|| x_direction.loosest_first(a.x, b.x))
    });

    let mut hull: Vec<CutPoint> = Vec::new();
    for point in points.iter() {
        if let Some(last) = hull.last() {
            if !x_direction.is_looser(point.x, last.x) {
                tracing::trace!(%point, %last, "cut-point dominated");
                continue;
            }
        }
        hull.push(*point);
    }

    // Scan order is descending y when y is cut with '<'
    if y_direction == CutDirection::LessThan {
        hull.reverse();
    }
    hull
}
