use serde::{Deserialize, Serialize};

/// Drawing layers of the rank chart, bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartLayerKind {
    MonthBands,
    Grid,
    XAxis,
    YAxis,
    Curve,
    /// Transparent hit regions; topmost so they receive pointer events first.
    PointRegions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartLayerStack {
    pub layers: Vec<ChartLayerKind>,
}

impl ChartLayerStack {
    #[must_use]
    pub fn canonical() -> Self {
        Self {
            layers: vec![
                ChartLayerKind::MonthBands,
                ChartLayerKind::Grid,
                ChartLayerKind::XAxis,
                ChartLayerKind::YAxis,
                ChartLayerKind::Curve,
                ChartLayerKind::PointRegions,
            ],
        }
    }
}
