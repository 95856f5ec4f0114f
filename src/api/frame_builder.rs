use crate::core::BandParity;
use crate::render::{
    ChartLayerKind, ChartLayerStack, LayeredRenderFrame, LinePrimitive, PathPrimitive,
    TextHAlign, TextPrimitive,
};

use super::{ChartConfig, RankChartLayout};

// Baseline shifts matching SVG `dy` of 0.71em (top-hanging) and 0.32em
// (vertically centred) labels.
const X_LABEL_DY_EM: f64 = 0.71;
const Y_LABEL_DY_EM: f64 = 0.32;

/// Materializes a layout into drawing layers in viewport coordinates.
///
/// Layer order is fixed: month bands, gridlines, x-axis labels, y-axis
/// labels, curve, then the hit regions on top. An empty layout yields a
/// frame with no primitives.
#[must_use]
pub fn build_layered_frame(layout: &RankChartLayout, config: &ChartConfig) -> LayeredRenderFrame {
    let mut frame = LayeredRenderFrame::from_stack(layout.viewport(), ChartLayerStack::canonical());
    if layout.is_empty() {
        return frame;
    }

    let style = config.style;
    let left = config.margin.left;
    let top = config.margin.top;
    let plot = layout.plot();

    for (index, band) in layout.month_bands().iter().enumerate() {
        let fill = match BandParity::for_index(index) {
            BandParity::Odd => style.odd_band_fill,
            BandParity::Even => style.even_band_fill,
        };
        frame.push_path(
            ChartLayerKind::MonthBands,
            PathPrimitive::filled(band.rect_path(plot.height).translated(left, top), fill),
        );
    }

    for tick in layout.y_ticks() {
        let y = top + tick.y;
        frame.push_line(
            ChartLayerKind::Grid,
            LinePrimitive::new(
                left,
                y,
                left + plot.width,
                y,
                style.grid_line_width,
                style.grid_line_color,
            ),
        );
        frame.push_text(
            ChartLayerKind::YAxis,
            TextPrimitive::new(
                tick.label.clone(),
                left + style.y_label_offset_px,
                y + Y_LABEL_DY_EM * style.axis_font_size_px,
                style.axis_font_size_px,
                style.axis_text_color,
                TextHAlign::Right,
            ),
        );
    }

    let label_y = top + plot.height + style.x_tick_padding_px + X_LABEL_DY_EM * style.axis_font_size_px;
    for tick in layout.x_ticks() {
        frame.push_text(
            ChartLayerKind::XAxis,
            TextPrimitive::new(
                tick.label.clone(),
                left + tick.x,
                label_y,
                style.axis_font_size_px,
                style.axis_text_color,
                TextHAlign::Center,
            ),
        );
    }

    frame.push_path(
        ChartLayerKind::Curve,
        PathPrimitive::stroked(
            layout.curve().translated(left, top),
            style.line_color,
            style.line_width,
        ),
    );

    for cell in layout.cells().iter().filter(|cell| !cell.is_degenerate()) {
        frame.push_path(
            ChartLayerKind::PointRegions,
            PathPrimitive::filled(cell.to_path().translated(left, top), style.region_fill)
                .with_hit_region(cell.owner_index),
        );
    }

    frame
}
