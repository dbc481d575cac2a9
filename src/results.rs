//! Scored ladder-cut rows produced by the grid search
//!
//! Each row carries the cut-points of one ladder cut together with either
//! the signal/background yields passing it or a precomputed significance.
//! Rows can be written compactly on the command line:
//!
//! - `S,B:Y/X,Y/X,...` yields followed by cut-points
//! - `z=VALUE:Y/X,Y/X,...` significance followed by cut-points

use crate::significance::Yields;
use anyhow::{bail, Context, Result};
use serde::Serialize;

/// How a ladder cut is scored
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Score {
    /// Yields to be converted with [`significance`](crate::significance::significance)
    Yields(Yields),
    /// Significance supplied by the caller
    Significance(f64),
}

/// One grid-search result row describing a ladder cut
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CutResult {
    pub score: Score,
    pub y: Vec<f64>,
    pub x: Vec<f64>,
}

impl CutResult {
    pub fn from_yields(count_s: f64, count_b: f64, y: Vec<f64>, x: Vec<f64>) -> Self {
        Self {
            score: Score::Yields(Yields::new(count_s, count_b)),
            y,
            x,
        }
    }

    pub fn from_significance(significance: f64, y: Vec<f64>, x: Vec<f64>) -> Self {
        Self {
            score: Score::Significance(significance),
            y,
            x,
        }
    }

    pub fn significance(&self) -> f64 {
        match self.score {
            Score::Yields(yields) => yields.significance(),
            Score::Significance(z) => z,
        }
    }

    /// Parse a row expression such as `50,10:0.1/100,0.2/90` or `z=2.5:0.1/100`
    pub fn from_expr(expr: &str) -> Result<Self> {
        let Some((score, points)) = expr.split_once(':') else {
            bail!(
                "Invalid cut expression: {}. Expected format: S,B:Y/X,... or z=VALUE:Y/X,...",
                expr
            );
        };

        let score = Self::parse_score(score.trim())?;
        let (y, x) = Self::parse_points(points)?;

        Ok(Self { score, y, x })
    }

    fn parse_score(spec: &str) -> Result<Score> {
        if let Some(value) = spec.strip_prefix("z=") {
            let z = parse_number(value, "significance")?;
            return Ok(Score::Significance(z));
        }

        let Some((s, b)) = spec.split_once(',') else {
            bail!("Invalid score: {}. Expected S,B or z=VALUE", spec);
        };
        let signal = parse_number(s, "signal count")?;
        let background = parse_number(b, "background count")?;
        if signal < 0.0 {
            bail!("Signal count must be non-negative, got {}", signal);
        }

        Ok(Score::Yields(Yields::new(signal, background)))
    }

    fn parse_points(spec: &str) -> Result<(Vec<f64>, Vec<f64>)> {
        let mut y = Vec::new();
        let mut x = Vec::new();

        for part in spec.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            let Some((py, px)) = part.split_once('/') else {
                bail!("Invalid cut-point: {}. Expected Y/X", part);
            };
            y.push(parse_number(py, "y threshold")?);
            x.push(parse_number(px, "x threshold")?);
        }

        if y.is_empty() {
            bail!("Cut expression has no cut-points");
        }

        Ok((y, x))
    }
}

fn parse_number(value: &str, what: &str) -> Result<f64> {
    let value = value.trim();
    let parsed: f64 = value
        .parse()
        .with_context(|| format!("Invalid {}: '{}'", what, value))?;
    if !parsed.is_finite() {
        bail!("Invalid {}: '{}' is not finite", what, value);
    }
    Ok(parsed)
}
