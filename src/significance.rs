//! Signed significance of a signal excess over background
//!
//! Converts a (signal, background) yield pair into an approximately Gaussian
//! "number of sigmas" using the signed square root of the Poisson profile
//! likelihood ratio:
//!
//! ```text
//! LR = (s + b) * ln((s + b) / b) - s
//! Z  = sign(2 LR) * sqrt(|2 LR|)
//! ```

use serde::Serialize;

/// Background yields at or below this value give an unreliable statistic
pub const MIN_BACKGROUND: f64 = 1.0;

/// Signal and background yields passing one cut
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Yields {
    /// Signal count (possibly weighted)
    pub signal: f64,
    /// Background count (possibly weighted)
    pub background: f64,
}

impl Yields {
    pub fn new(signal: f64, background: f64) -> Self {
        Self { signal, background }
    }

    pub fn significance(&self) -> f64 {
        significance(self.signal, self.background)
    }
}

/// Compute the signed significance for signal `s` over background `b`
///
/// Returns `0.0` whenever `b <= 1`, where the logarithm and the division
/// become numerically unstable.
///
/// # Example
/// ```
/// use laddercut::significance::significance;
///
/// assert_eq!(significance(10.0, 1.0), 0.0);
/// assert!(significance(50.0, 10.0) > 0.0);
/// ```
pub fn significance(s: f64, b: f64) -> f64 {
    if b <= MIN_BACKGROUND {
        return 0.0;
    }

    let n = s + b;
    let z = 2.0 * (n * (n / b).ln() - s);
    if z == 0.0 {
        return 0.0;
    }

    z.signum() * z.abs().sqrt()
}
