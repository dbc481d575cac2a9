// Engine configuration: plotting bounds and axis semantics
//
// The bounds are carried through to the renderer untouched; only the axis
// directions take part in the hull reduction.

use crate::error::{HullError, Result};
use crate::hull::CutDirection;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Axis ranges handed to the renderer for extending the first and last hull edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl AxisBounds {
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Self {
        Self {
            xmin,
            xmax,
            ymin,
            ymax,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let all_finite = [self.xmin, self.xmax, self.ymin, self.ymax]
            .iter()
            .all(|v| v.is_finite());
        if !all_finite {
            return Err(HullError::Configuration(format!(
                "axis bounds must be finite, got {:?}",
                self
            )));
        }

        if self.xmin >= self.xmax {
            return Err(HullError::Configuration(format!(
                "xmin must be < xmax, got xmin={} xmax={}",
                self.xmin, self.xmax
            )));
        }

        if self.ymin >= self.ymax {
            return Err(HullError::Configuration(format!(
                "ymin must be < ymax, got ymin={} ymax={}",
                self.ymin, self.ymax
            )));
        }

        Ok(())
    }
}

/// A cut variable and the side of its threshold that is accepted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    pub name: String,
    #[serde(default)]
    pub direction: CutDirection,
}

impl AxisSpec {
    pub fn new(name: impl Into<String>, direction: CutDirection) -> Self {
        Self {
            name: name.into(),
            direction,
        }
    }
}

/// Construction parameters for [`OuterHullEngine`](crate::hull::OuterHullEngine)
///
/// `axes[0]` describes the x variable and `axes[1]` the y variable.
///
/// # Example TOML
/// ```toml
/// [bounds]
/// xmin = 0.0
/// xmax = 4000.0
/// ymin = 0.0
/// ymax = 1.0
///
/// [[axis]]
/// name = "MR"
/// direction = ">"
///
/// [[axis]]
/// name = "R2"
/// direction = ">"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub bounds: AxisBounds,
    #[serde(rename = "axis")]
    pub axes: Vec<AxisSpec>,
}

impl EngineConfig {
    pub fn new(bounds: AxisBounds, axes: Vec<AxisSpec>) -> Self {
        Self { bounds, axes }
    }

    /// Canonical configuration: both variables cut with `>`
    pub fn greater_than(
        bounds: AxisBounds,
        x_name: impl Into<String>,
        y_name: impl Into<String>,
    ) -> Self {
        Self::new(
            bounds,
            vec![
                AxisSpec::new(x_name, CutDirection::GreaterThan),
                AxisSpec::new(y_name, CutDirection::GreaterThan),
            ],
        )
    }

    /// Parse and validate a TOML engine configuration
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML engine configuration file
    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        self.bounds.validate()?;

        if self.axes.len() != 2 {
            return Err(HullError::Configuration(format!(
                "exactly 2 cut axes are required, got {}",
                self.axes.len()
            )));
        }

        Ok(())
    }

    pub fn x_axis(&self) -> Option<&AxisSpec> {
        self.axes.first()
    }

    pub fn y_axis(&self) -> Option<&AxisSpec> {
        self.axes.get(1)
    }
}
