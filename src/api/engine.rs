use tracing::{debug, trace, warn};

use crate::core::{RankObservation, RawRankRecord, Viewport, ingest_records};
use crate::error::ChartResult;
use crate::interaction::HoverState;
use crate::render::{LayeredRenderFrame, Renderer};

use super::{ChartConfig, RankChartLayout, build_layered_frame};

/// Main orchestration facade consumed by host applications.
///
/// `DailyRankChart` owns the observation set, viewport and config, keeps the
/// derived layout in sync with them and resolves pointer positions to
/// observations. Every mutation either rebuilds the layout or leaves the
/// chart untouched when the rebuild fails.
pub struct DailyRankChart<R: Renderer> {
    renderer: R,
    viewport: Viewport,
    config: ChartConfig,
    observations: Vec<RankObservation>,
    layout: RankChartLayout,
    hover: HoverState,
}

impl<R: Renderer> DailyRankChart<R> {
    /// Creates an empty chart. Any viewport is accepted, including a
    /// zero-sized one, since an empty chart only draws its outer frame.
    pub fn new(renderer: R, viewport: Viewport, config: ChartConfig) -> ChartResult<Self> {
        let layout = RankChartLayout::build(&[], viewport, &config)?;
        debug!(
            width = viewport.width,
            height = viewport.height,
            "create daily rank chart"
        );
        Ok(Self {
            renderer,
            viewport,
            config,
            observations: Vec::new(),
            layout,
            hover: HoverState::default(),
        })
    }

    /// Replaces the observation set. Input order does not matter.
    pub fn set_data(&mut self, observations: Vec<RankObservation>) -> ChartResult<()> {
        let layout = RankChartLayout::build(&observations, self.viewport, &self.config)
            .inspect_err(|err| warn!(error = %err, "rejecting rank data set"))?;
        debug!(
            count = observations.len(),
            bands = layout.month_bands().len(),
            "set rank data"
        );
        self.observations = observations;
        self.replace_layout(layout);
        Ok(())
    }

    /// Parses raw records and replaces the observation set.
    pub fn set_raw_records(&mut self, records: &[RawRankRecord]) -> ChartResult<()> {
        let observations = ingest_records(records)?;
        self.set_data(observations)
    }

    /// Applies a new outer size from the host's measurement collaborator.
    pub fn resize(&mut self, viewport: Viewport) -> ChartResult<()> {
        if viewport == self.viewport {
            return Ok(());
        }
        let layout = RankChartLayout::build(&self.observations, viewport, &self.config)
            .inspect_err(|err| {
                warn!(
                    error = %err,
                    width = viewport.width,
                    height = viewport.height,
                    "rejecting resize"
                );
            })?;
        debug!(
            width = viewport.width,
            height = viewport.height,
            "resize rank chart"
        );
        self.viewport = viewport;
        self.replace_layout(layout);
        Ok(())
    }

    pub fn set_config(&mut self, config: ChartConfig) -> ChartResult<()> {
        let layout = RankChartLayout::build(&self.observations, self.viewport, &config)
            .inspect_err(|err| warn!(error = %err, "rejecting chart config"))?;
        debug!("set chart config");
        self.config = config;
        self.replace_layout(layout);
        Ok(())
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn layout(&self) -> &RankChartLayout {
        &self.layout
    }

    #[must_use]
    pub fn build_frame(&self) -> LayeredRenderFrame {
        build_layered_frame(&self.layout, &self.config)
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_frame().flatten();
        trace!(
            items = frame.items.len(),
            paths = frame.paths().count(),
            "render rank chart"
        );
        self.renderer.render(&frame)
    }

    /// Resolves a pointer position in viewport pixels to an observation.
    ///
    /// Returns the hovered observation index in `layout().observations()`.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<usize> {
        let plot_x = x - self.config.margin.left;
        let plot_y = y - self.config.margin.top;
        let hovered = self.layout.hit_test(plot_x, plot_y);

        let next = match hovered {
            Some(index) => self.resolved_hover(index, x, y),
            None => HoverState::unresolved(x, y),
        };
        if next.hovered_index != self.hover.hovered_index {
            debug!(
                previous = ?self.hover.hovered_index,
                hovered = ?next.hovered_index,
                "hover changed"
            );
        }
        self.hover = next;
        hovered
    }

    pub fn pointer_leave(&mut self) {
        if self.hover.visible {
            trace!("pointer left rank chart");
        }
        self.hover = HoverState::default();
    }

    #[must_use]
    pub fn hover_state(&self) -> HoverState {
        self.hover
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn resolved_hover(&self, index: usize, x: f64, y: f64) -> HoverState {
        let observation = self.layout.observation(index);
        let point = self.layout.points().get(index);
        HoverState {
            visible: true,
            x,
            y,
            hovered_index: Some(index),
            hovered_day: observation.map(|observation| observation.day),
            hovered_rank: observation.map(|observation| observation.rank),
            snapped_x: point.map(|point| point.x + self.config.margin.left),
            snapped_y: point.map(|point| point.y + self.config.margin.top),
        }
    }

    // Indices in the old hover state may not match the new layout.
    fn replace_layout(&mut self, layout: RankChartLayout) {
        self.layout = layout;
        self.hover = HoverState::default();
    }
}
