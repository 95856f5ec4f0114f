mod chart_config;
mod engine;
mod frame_builder;
mod json_contract;
mod layout;
mod snapshot;

pub use chart_config::{ChartConfig, ChartStyle};
pub use engine::DailyRankChart;
pub use frame_builder::build_layered_frame;
pub use json_contract::{ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshotJsonContractV1};
pub use layout::{RankChartLayout, RankTick};
pub use snapshot::EngineSnapshot;
