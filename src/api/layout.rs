use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{
    ChartDomain, ClipRect, HalfPlanePartitioner, MonthBand, PathData, PlotPoint, PlotRect,
    PointPartitioner, RankObservation, ScaleMapper, TickMark, Viewport, VoronoiCell,
    build_monotone_curve, build_tick_marks, generate_day_ticks, locate_cell, nearest_point,
    segment_month_bands, sort_by_day, validate_observations,
};
use crate::error::ChartResult;

use super::ChartConfig;

/// Labelled y-axis tick, also the position of one horizontal gridline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankTick {
    pub rank: f64,
    pub y: f64,
    pub label: String,
}

/// Complete plot-space geometry for one observation set and viewport.
///
/// All coordinates are relative to the plot rectangle's top-left corner.
/// Observation indices refer to `observations()`, which is sorted by day.
#[derive(Debug, Clone, PartialEq)]
pub struct RankChartLayout {
    viewport: Viewport,
    plot: PlotRect,
    observations: Vec<RankObservation>,
    domain: Option<ChartDomain>,
    mapper: Option<ScaleMapper>,
    points: Vec<PlotPoint>,
    month_bands: Vec<MonthBand>,
    x_ticks: Vec<TickMark>,
    y_ticks: Vec<RankTick>,
    curve: PathData,
    cells: Vec<VoronoiCell>,
}

impl RankChartLayout {
    pub fn build(
        observations: &[RankObservation],
        viewport: Viewport,
        config: &ChartConfig,
    ) -> ChartResult<Self> {
        Self::build_with_partitioner(observations, viewport, config, &HalfPlanePartitioner)
    }

    pub fn build_with_partitioner<P: PointPartitioner + ?Sized>(
        observations: &[RankObservation],
        viewport: Viewport,
        config: &ChartConfig,
        partitioner: &P,
    ) -> ChartResult<Self> {
        config.validate()?;
        validate_observations(observations)?;

        let observations = sort_by_day(observations.to_vec());
        let Some(domain) = ChartDomain::from_sorted(&observations) else {
            trace!(
                width = viewport.width,
                height = viewport.height,
                "empty rank layout"
            );
            let plot = PlotRect::clamped(viewport, config.margin)?;
            return Ok(Self::empty(viewport, plot));
        };
        let plot = PlotRect::from_viewport(viewport, config.margin)?;

        let mapper = ScaleMapper::new(domain, plot, config.rank_scale)?;
        let points = mapper.project_all(&observations);
        let month_bands = segment_month_bands(domain.start, domain.end, &mapper.x)?;
        let tick_days = generate_day_ticks(domain.start, domain.end, config.tick_interval_days)?;
        let x_ticks = build_tick_marks(&tick_days, &mapper.x, &config.tick_label_format)?;
        let y_ticks = mapper
            .y
            .ticks(config.y_tick_count)
            .into_iter()
            .map(|rank| RankTick {
                rank,
                y: mapper.y.rank_to_pixel(rank),
                label: format_rank_label(rank),
            })
            .collect();
        let curve = build_monotone_curve(&points);
        let cells = partitioner.partition(&points, ClipRect::from_plot(plot));

        trace!(
            observations = observations.len(),
            bands = month_bands.len(),
            x_ticks = x_ticks.len(),
            cells = cells.len(),
            single_day = domain.is_single_day(),
            plot_width = plot.width,
            plot_height = plot.height,
            "built rank layout"
        );

        Ok(Self {
            viewport,
            plot,
            observations,
            domain: Some(domain),
            mapper: Some(mapper),
            points,
            month_bands,
            x_ticks,
            y_ticks,
            curve,
            cells,
        })
    }

    fn empty(viewport: Viewport, plot: PlotRect) -> Self {
        Self {
            viewport,
            plot,
            observations: Vec::new(),
            domain: None,
            mapper: None,
            points: Vec::new(),
            month_bands: Vec::new(),
            x_ticks: Vec::new(),
            y_ticks: Vec::new(),
            curve: PathData::new(),
            cells: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn plot(&self) -> PlotRect {
        self.plot
    }

    #[must_use]
    pub fn observations(&self) -> &[RankObservation] {
        &self.observations
    }

    #[must_use]
    pub fn observation(&self, index: usize) -> Option<&RankObservation> {
        self.observations.get(index)
    }

    #[must_use]
    pub fn domain(&self) -> Option<ChartDomain> {
        self.domain
    }

    #[must_use]
    pub fn mapper(&self) -> Option<ScaleMapper> {
        self.mapper
    }

    #[must_use]
    pub fn points(&self) -> &[PlotPoint] {
        &self.points
    }

    #[must_use]
    pub fn month_bands(&self) -> &[MonthBand] {
        &self.month_bands
    }

    #[must_use]
    pub fn x_ticks(&self) -> &[TickMark] {
        &self.x_ticks
    }

    #[must_use]
    pub fn y_ticks(&self) -> &[RankTick] {
        &self.y_ticks
    }

    #[must_use]
    pub fn curve(&self) -> &PathData {
        &self.curve
    }

    #[must_use]
    pub fn cells(&self) -> &[VoronoiCell] {
        &self.cells
    }

    /// Observation owning a plot-space position.
    ///
    /// Positions outside the plot resolve to nothing. A position that no
    /// cell claims, e.g. one lost to polygon rounding on a shared edge, falls
    /// back to the nearest point.
    #[must_use]
    pub fn hit_test(&self, plot_x: f64, plot_y: f64) -> Option<usize> {
        if self.cells.is_empty() || !self.plot.contains(plot_x, plot_y) {
            return None;
        }
        locate_cell(&self.cells, plot_x, plot_y)
            .or_else(|| nearest_point(&self.points, plot_x, plot_y))
    }
}

/// Integer ranks print without a fractional part.
fn format_rank_label(rank: f64) -> String {
    if rank.fract() == 0.0 {
        format!("{:.0}", rank + 0.0)
    } else {
        format!("{rank}")
    }
}
