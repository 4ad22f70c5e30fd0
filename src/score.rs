//! The Score type: a similarity value pinned to [0, 1].

use std::fmt;

/// A normalized similarity value.
///
/// `0.0` means no detected overlap, `1.0` means identity or full
/// containment. Construction always clamps, so a `Score` can never leave
/// the unit interval, even when it comes out of a floating-point sum that
/// drifted slightly past a bound:
///
/// ```rust
/// use papercheck::Score;
///
/// assert_eq!(Score::new(1.000_000_1).value(), 1.0);
/// assert_eq!(Score::new(-0.2).value(), 0.0);
/// assert_eq!(Score::new(f64::NAN), Score::ZERO);
/// assert_eq!(Score::new(0.456).to_string(), "0.46");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Score(f64);

impl Score {
    /// No overlap.
    pub const ZERO: Self = Self(0.0);

    /// Full overlap.
    pub const ONE: Self = Self(1.0);

    /// Create a score, clamping into [0, 1]. NaN becomes zero.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Ratio `part / whole` as a score; zero when `whole` is zero.
    #[must_use]
    pub fn ratio(part: usize, whole: usize) -> Self {
        if whole == 0 {
            return Self::ZERO;
        }
        Self::new(part as f64 / whole as f64)
    }

    /// The raw value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl From<Score> for f64 {
    fn from(score: Score) -> Self {
        score.0
    }
}

/// Two decimal digits, the format the result file uses.
impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
