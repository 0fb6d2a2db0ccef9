use serde::Deserialize;

/// Threshold used by the period-2 bulb membership test.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BulbCheck {
    /// `(x + 1)² + y² <= 1/16`.
    #[default]
    Exact,
    /// Threshold of 0, the result of evaluating `1/16` in integer arithmetic.
    /// Only the single point `-1 + 0i` passes. Kept for output parity with
    /// renders made by older tools.
    Legacy,
}

impl BulbCheck {
    #[must_use]
    pub const fn radius_squared(self) -> f64 {
        match self {
            Self::Exact => 1.0 / 16.0,
            Self::Legacy => 0.0,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct MandelbrotParams {
    pub bulb_check: BulbCheck,
}

impl MandelbrotParams {
    #[must_use]
    pub fn new(bulb_check: BulbCheck) -> Self {
        Self { bulb_check }
    }
}
