pub mod calendar;
pub mod day_ticks;
pub mod domain;
pub mod monotone_curve;
pub mod month_bands;
pub mod observation;
pub mod partition;
pub mod path;
pub mod rank_scale;
pub mod scale;
pub mod time_scale;
pub mod types;

pub use day_ticks::{
    DEFAULT_TICK_INTERVAL_DAYS, DEFAULT_TICK_LABEL_FORMAT, TickMark, build_tick_marks,
    format_tick_label, generate_day_ticks,
};
pub use domain::{ChartDomain, ScaleMapper};
pub use monotone_curve::build_monotone_curve;
pub use month_bands::{BandParity, MonthBand, segment_month_bands};
pub use observation::{
    RankObservation, RawRankRecord, ingest_json, ingest_records, sort_by_day,
    validate_observations,
};
pub use partition::{
    ClipRect, HalfPlanePartitioner, PointPartitioner, VoronoiCell, locate_cell, nearest_point,
};
pub use path::{PathCommand, PathData};
pub use rank_scale::{RankScale, RankScaleTuning};
pub use scale::LinearScale;
pub use time_scale::TimeScale;
pub use types::{Margin, PlotPoint, PlotRect, Viewport};
