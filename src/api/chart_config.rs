use serde::{Deserialize, Serialize};

use crate::core::day_ticks::validate_label_format;
use crate::core::{DEFAULT_TICK_INTERVAL_DAYS, DEFAULT_TICK_LABEL_FORMAT, Margin, RankScaleTuning};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Colors, stroke widths and text metrics of the rank chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub line_color: Color,
    pub line_width: f64,
    /// Fill of bands at odd positions (1st, 3rd, ...).
    pub odd_band_fill: Color,
    pub even_band_fill: Color,
    pub grid_line_color: Color,
    pub grid_line_width: f64,
    pub axis_text_color: Color,
    pub axis_font_size_px: f64,
    /// Gap between the plot bottom and the x-axis label baseline.
    pub x_tick_padding_px: f64,
    /// Horizontal offset of y-axis labels from the plot's left edge.
    pub y_label_offset_px: f64,
    /// Fill of the hit-region polygons; transparent unless debugging.
    pub region_fill: Color,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            line_color: Color::rgb8(0x1c, 0x90, 0x99),
            line_width: 2.0,
            odd_band_fill: Color::rgb8(0xf2, 0xf4, 0xf7),
            even_band_fill: Color::rgb8(0xfc, 0xfd, 0xff),
            grid_line_color: Color::rgb8(0xe1, 0xe1, 0xe1),
            grid_line_width: 1.0,
            axis_text_color: Color::rgb8(0x67, 0x67, 0x67),
            axis_font_size_px: 10.0,
            x_tick_padding_px: 8.0,
            y_label_offset_px: -9.0,
            region_fill: Color::TRANSPARENT,
        }
    }
}

impl ChartStyle {
    pub fn validate(self) -> ChartResult<Self> {
        for color in [
            self.line_color,
            self.odd_band_fill,
            self.even_band_fill,
            self.grid_line_color,
            self.axis_text_color,
            self.region_fill,
        ] {
            color
                .validate()
                .map_err(|e| ChartError::InvalidConfig(format!("invalid style color: {e}")))?;
        }
        for (name, value) in [
            ("line_width", self.line_width),
            ("grid_line_width", self.grid_line_width),
            ("axis_font_size_px", self.axis_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "style `{name}` must be finite and > 0"
                )));
            }
        }
        if !self.x_tick_padding_px.is_finite() || !self.y_label_offset_px.is_finite() {
            return Err(ChartError::InvalidConfig(
                "style label offsets must be finite".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Serializable configuration of the daily-rank chart.
///
/// Every field has a default, so a partial JSON document such as
/// `{"y_tick_count": 4}` is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default)]
    pub margin: Margin,
    #[serde(default)]
    pub rank_scale: RankScaleTuning,
    #[serde(default = "default_y_tick_count")]
    pub y_tick_count: usize,
    #[serde(default = "default_tick_interval_days")]
    pub tick_interval_days: u32,
    #[serde(default = "default_tick_label_format")]
    pub tick_label_format: String,
    #[serde(default)]
    pub style: ChartStyle,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            margin: Margin::default(),
            rank_scale: RankScaleTuning::default(),
            y_tick_count: default_y_tick_count(),
            tick_interval_days: default_tick_interval_days(),
            tick_label_format: default_tick_label_format(),
            style: ChartStyle::default(),
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn with_rank_scale(mut self, tuning: RankScaleTuning) -> Self {
        self.rank_scale = tuning;
        self
    }

    #[must_use]
    pub fn with_tick_interval_days(mut self, days: u32) -> Self {
        self.tick_interval_days = days;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.margin.validate()?;
        self.rank_scale.validate()?;
        self.style.validate()?;
        if self.tick_interval_days == 0 {
            return Err(ChartError::InvalidConfig(
                "tick interval must be at least one day".to_owned(),
            ));
        }
        validate_label_format(&self.tick_label_format)
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn default_y_tick_count() -> usize {
    5
}

fn default_tick_interval_days() -> u32 {
    DEFAULT_TICK_INTERVAL_DAYS
}

fn default_tick_label_format() -> String {
    DEFAULT_TICK_LABEL_FORMAT.to_owned()
}
