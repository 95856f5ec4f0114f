//! rank-chart: layout engine for daily-rank line charts.
//!
//! Turns `(date, rank)` observations and a viewport size into deterministic
//! plot geometry: calendar-month background bands, weekly x-axis ticks
//! anchored to the newest date, a monotone curve, and a nearest-point
//! partition of the plot used for hover hit-testing. Drawing is delegated to
//! a [`render::Renderer`] implementation.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, DailyRankChart, RankChartLayout};
pub use error::{ChartError, ChartResult};
