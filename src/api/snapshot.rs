use serde::{Deserialize, Serialize};

use crate::core::{
    ChartDomain, MonthBand, PlotPoint, PlotRect, RankObservation, TickMark, Viewport, VoronoiCell,
};
use crate::interaction::HoverState;
use crate::render::Renderer;

use super::{DailyRankChart, RankChartLayout, RankTick};

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub viewport: Viewport,
    pub plot: PlotRect,
    pub domain: Option<ChartDomain>,
    pub rank_domain: Option<(f64, f64)>,
    pub observations: Vec<RankObservation>,
    pub points: Vec<PlotPoint>,
    pub month_bands: Vec<MonthBand>,
    pub x_ticks: Vec<TickMark>,
    pub y_ticks: Vec<RankTick>,
    /// SVG path data of the curve in plot space.
    pub curve_path: String,
    pub cells: Vec<VoronoiCell>,
    pub hover: HoverState,
}

impl EngineSnapshot {
    #[must_use]
    pub fn from_layout(layout: &RankChartLayout, hover: HoverState) -> Self {
        Self {
            viewport: layout.viewport(),
            plot: layout.plot(),
            domain: layout.domain(),
            rank_domain: layout.mapper().map(|mapper| mapper.y.domain()),
            observations: layout.observations().to_vec(),
            points: layout.points().to_vec(),
            month_bands: layout.month_bands().to_vec(),
            x_ticks: layout.x_ticks().to_vec(),
            y_ticks: layout.y_ticks().to_vec(),
            curve_path: layout.curve().to_svg(),
            cells: layout.cells().to_vec(),
            hover,
        }
    }
}

impl<R: Renderer> DailyRankChart<R> {
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot::from_layout(self.layout(), self.hover_state())
    }
}
