use serde::{Deserialize, Serialize};

use crate::core::LinearScale;
use crate::error::{ChartError, ChartResult};

/// Padding and rounding controls for the rank axis.
///
/// `lower_margin` is added below the worst rank and `upper_margin` is removed
/// above the best rank (never past zero). The asymmetry keeps the curve off
/// the top edge while rank 1 stays prominent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankScaleTuning {
    pub upper_margin: f64,
    pub lower_margin: f64,
    pub nice_tick_count: usize,
}

impl Default for RankScaleTuning {
    fn default() -> Self {
        Self {
            upper_margin: 3.0,
            lower_margin: 10.0,
            nice_tick_count: 10,
        }
    }
}

impl RankScaleTuning {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.upper_margin.is_finite()
            || !self.lower_margin.is_finite()
            || self.upper_margin < 0.0
            || self.lower_margin < 0.0
        {
            return Err(ChartError::InvalidConfig(
                "rank scale margins must be finite and >= 0".to_owned(),
            ));
        }
        if self.nice_tick_count == 0 {
            return Err(ChartError::InvalidConfig(
                "rank scale nice tick count must be > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Inverted rank axis: worse ranks map toward `height`, rank 0 toward 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankScale {
    linear: LinearScale,
}

impl RankScale {
    pub fn new(
        min_rank: f64,
        max_rank: f64,
        height: f64,
        tuning: RankScaleTuning,
    ) -> ChartResult<Self> {
        let tuning = tuning.validate()?;
        if !min_rank.is_finite() || !max_rank.is_finite() || max_rank < min_rank {
            return Err(ChartError::InvalidData(
                "rank bounds must be finite and ordered".to_owned(),
            ));
        }
        if !height.is_finite() || height <= 0.0 {
            return Err(ChartError::InvalidData(
                "rank scale height must be finite and > 0".to_owned(),
            ));
        }

        let bottom = max_rank + tuning.lower_margin;
        let top = (min_rank - tuning.upper_margin).max(0.0);
        // Zero margins on a flat series would collapse the domain.
        let bottom = if bottom <= top { top + 1.0 } else { bottom };

        let linear = LinearScale::new((bottom, top), (height, 0.0))?.nice(tuning.nice_tick_count);
        Ok(Self { linear })
    }

    /// Niced domain as `(bottom_rank, top_rank)`.
    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.linear.domain()
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.linear.range().0
    }

    #[must_use]
    pub fn rank_to_pixel(self, rank: f64) -> f64 {
        self.linear.map(rank)
    }

    #[must_use]
    pub fn pixel_to_rank(self, pixel: f64) -> f64 {
        self.linear.invert(pixel)
    }

    /// Round rank values for labels and gridlines, worst rank first.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        self.linear.ticks(count)
    }
}
