use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{PlotPoint, PlotRect, RankObservation, RankScale, RankScaleTuning, TimeScale};
use crate::error::ChartResult;

/// Data bounds of one observation set. Derived per render pass, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartDomain {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub min_rank: f64,
    pub max_rank: f64,
}

impl ChartDomain {
    /// Bounds of observations already sorted by day; `None` when empty.
    #[must_use]
    pub fn from_sorted(observations: &[RankObservation]) -> Option<Self> {
        let first = observations.first()?;
        let last = observations.last()?;
        let (min_rank, max_rank) = observations.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(lo, hi), observation| (lo.min(observation.rank), hi.max(observation.rank)),
        );
        Some(Self {
            start: first.day,
            end: last.day,
            min_rank,
            max_rank,
        })
    }

    #[must_use]
    pub fn is_single_day(self) -> bool {
        self.start == self.end
    }
}

/// The x/y mapping pair for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleMapper {
    pub x: TimeScale,
    pub y: RankScale,
}

impl ScaleMapper {
    pub fn new(domain: ChartDomain, plot: PlotRect, tuning: RankScaleTuning) -> ChartResult<Self> {
        Ok(Self {
            x: TimeScale::new(domain.start, domain.end, plot.width)?,
            y: RankScale::new(domain.min_rank, domain.max_rank, plot.height, tuning)?,
        })
    }

    #[must_use]
    pub fn project(self, observation: &RankObservation) -> PlotPoint {
        PlotPoint::new(
            self.x.date_to_pixel(observation.day),
            self.y.rank_to_pixel(observation.rank),
        )
    }

    #[must_use]
    pub fn project_all(self, observations: &[RankObservation]) -> Vec<PlotPoint> {
        observations
            .iter()
            .map(|observation| self.project(observation))
            .collect()
    }
}
