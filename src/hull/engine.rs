use crate::error::{HullError, Result};
use crate::hull::{AxisBounds, AxisSpec, CutDirection, EngineConfig, LadderCut, RankedHullSet};
use crate::results::{CutResult, Score};
use crate::significance::MIN_BACKGROUND;

/// Accumulates ladder cuts and ranks their outer hulls by significance
///
/// # Example
/// ```
/// use laddercut::hull::{AxisBounds, EngineConfig, OuterHullEngine};
///
/// let config = EngineConfig::greater_than(AxisBounds::new(0.0, 4000.0, 0.0, 1.0), "MR", "R2");
/// let mut engine = OuterHullEngine::new(config)?;
///
/// engine.add(2.5, &[0.1, 0.2, 0.3, 0.4], &[100.0, 90.0, 95.0, 80.0])?;
///
/// let best = engine.get(0).unwrap();
/// assert_eq!(best.outer_hull().len(), 3);
/// assert!(engine.get(1).is_none());
/// # Ok::<(), laddercut::HullError>(())
/// ```
#[derive(Debug, Clone)]
pub struct OuterHullEngine {
    bounds: AxisBounds,
    axes: [AxisSpec; 2],
    hulls: RankedHullSet,
}

impl OuterHullEngine {
    /// Create an engine from a validated configuration
    ///
    /// # Errors
    /// `Configuration` for inverted or non-finite bounds, or an axis list
    /// that does not hold exactly two entries.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;

        let EngineConfig { bounds, axes } = config;
        let axes: [AxisSpec; 2] = axes.try_into().map_err(|axes: Vec<AxisSpec>| {
            HullError::Configuration(format!(
                "exactly 2 cut axes are required, got {}",
                axes.len()
            ))
        })?;

        Ok(Self {
            bounds,
            axes,
            hulls: RankedHullSet::new(),
        })
    }

    /// Reduce one ladder cut using the configured directions and rank it
    ///
    /// Returns the rank the new ladder cut landed at.
    pub fn add(&mut self, significance: f64, y: &[f64], x: &[f64]) -> Result<usize> {
        let (x_direction, y_direction) = self.directions();
        self.add_with_directions(significance, y, x, x_direction, y_direction)
    }

    /// Reduce one ladder cut using explicit cut directions and rank it
    ///
    /// The reduction is completed before anything is inserted, so a rejected
    /// input leaves the ranking untouched.
    pub fn add_with_directions(
        &mut self,
        significance: f64,
        y: &[f64],
        x: &[f64],
        x_direction: CutDirection,
        y_direction: CutDirection,
    ) -> Result<usize> {
        let cut = LadderCut::build(significance, y, x, x_direction, y_direction)?;
        let hull_len = cut.outer_hull().len();
        let rank = self.hulls.insert(cut);

        tracing::debug!(
            significance,
            points = y.len(),
            hull = hull_len,
            rank,
            "ladder cut added"
        );
        Ok(rank)
    }

    /// Score a grid-search row and add its ladder cut
    ///
    /// Returns the significance used for ranking.
    pub fn add_result(&mut self, row: &CutResult) -> Result<f64> {
        let significance = row.significance();
        if let Score::Yields(yields) = row.score {
            if yields.background <= MIN_BACKGROUND {
                tracing::debug!(
                    background = yields.background,
                    "background too small, significance set to 0"
                );
            }
        }

        self.add(significance, &row.y, &row.x)?;
        Ok(significance)
    }

    /// Add every row in order, stopping at the first rejected one
    pub fn extend_results<'a, I>(&mut self, rows: I) -> Result<usize>
    where
        I: IntoIterator<Item = &'a CutResult>,
    {
        let mut added = 0;
        for row in rows {
            self.add_result(row)?;
            added += 1;
        }
        Ok(added)
    }

    /// Ladder cut at a descending-significance rank, `None` past the end
    pub fn get(&self, rank: usize) -> Option<&LadderCut> {
        self.hulls.get(rank)
    }

    pub fn best(&self) -> Option<&LadderCut> {
        self.hulls.get(0)
    }

    pub fn size(&self) -> usize {
        self.hulls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hulls.is_empty()
    }

    /// Ladder cuts in rank order
    pub fn iter(&self) -> std::slice::Iter<'_, LadderCut> {
        self.hulls.iter()
    }

    pub fn bounds(&self) -> &AxisBounds {
        &self.bounds
    }

    /// `[x, y]` axis descriptions
    pub fn axes(&self) -> &[AxisSpec; 2] {
        &self.axes
    }

    /// Configured `(x, y)` cut directions
    pub fn directions(&self) -> (CutDirection, CutDirection) {
        (self.axes[0].direction, self.axes[1].direction)
    }
}
