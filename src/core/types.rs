use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Outer chart size as delivered by the host's measurement collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Space reserved around the plotting rectangle for axes and labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 20.0,
            bottom: 40.0,
            left: 45.0,
        }
    }
}

impl Margin {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn validate(self) -> ChartResult<Self> {
        for (side, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "margin `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

/// Inner plotting rectangle in plot-space coordinates (origin at top-left).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotRect {
    pub width: f64,
    pub height: f64,
}

impl PlotRect {
    /// Derives `{ w = width - left - right, h = height - top - bottom }`.
    ///
    /// Fails unless both sides are strictly positive.
    pub fn from_viewport(viewport: Viewport, margin: Margin) -> ChartResult<Self> {
        let plot = Self::clamped(viewport, margin)?;
        if !viewport.is_valid() || plot.width <= 0.0 || plot.height <= 0.0 {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        Ok(plot)
    }

    /// Same derivation with each side floored at zero, for charts with
    /// nothing to plot.
    pub fn clamped(viewport: Viewport, margin: Margin) -> ChartResult<Self> {
        let margin = margin.validate()?;
        Ok(Self {
            width: (f64::from(viewport.width) - margin.left - margin.right).max(0.0),
            height: (f64::from(viewport.height) - margin.top - margin.bottom).max(0.0),
        })
    }

    #[must_use]
    pub fn area(self) -> f64 {
        self.width * self.height
    }

    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }
}

/// A position in plot space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

impl PlotPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance_squared(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
