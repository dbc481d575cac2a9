use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Threshold pair defining a rectangular acceptance region on two variables
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CutPoint {
    pub x: f64,
    pub y: f64,
}

impl CutPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Natural `(y, x)` ordering used for the stored raw point list
    pub(crate) fn cmp_yx(&self, other: &Self) -> Ordering {
        self.y
            .total_cmp(&other.y)
            .then_with(|| self.x.total_cmp(&other.x))
    }
}

impl fmt::Display for CutPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(y={}, x={})", self.y, self.x)
    }
}

/// Side of a threshold that is accepted on one axis
///
/// `GreaterThan` accepts `value > cut`, so a lower threshold is looser.
/// `LessThan` accepts `value < cut`, so a higher threshold is looser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CutDirection {
    #[default]
    #[serde(rename = ">", alias = "gt", alias = "GT")]
    GreaterThan,
    #[serde(rename = "<", alias = "lt", alias = "LT")]
    LessThan,
}

impl CutDirection {
    /// Order two thresholds from loosest to tightest
    pub fn loosest_first(self, a: f64, b: f64) -> Ordering {
        match self {
            CutDirection::GreaterThan => a.total_cmp(&b),
            CutDirection::LessThan => b.total_cmp(&a),
        }
    }

    /// True when threshold `a` accepts strictly more than threshold `b`
    pub fn is_looser(self, a: f64, b: f64) -> bool {
        match self {
            CutDirection::GreaterThan => a < b,
            CutDirection::LessThan => a > b,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            CutDirection::GreaterThan => ">",
            CutDirection::LessThan => "<",
        }
    }
}

impl fmt::Display for CutDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for CutDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            ">" | "gt" | "GT" => Ok(CutDirection::GreaterThan),
            "<" | "lt" | "LT" => Ok(CutDirection::LessThan),
            other => Err(format!(
                "unknown cut direction '{}', expected '>' or '<'",
                other
            )),
        }
    }
}
