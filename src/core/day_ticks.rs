use std::fmt::Write as _;

use chrono::format::{Item, StrftimeItems};
use chrono::{NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::core::TimeScale;
use crate::error::{ChartError, ChartResult};

pub const DEFAULT_TICK_INTERVAL_DAYS: u32 = 7;
pub const DEFAULT_TICK_LABEL_FORMAT: &str = "%b %d";

/// Labelled x-axis tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickMark {
    pub position: NaiveDate,
    pub x: f64,
    pub label: String,
}

/// Tick dates walking back from `end` in `interval_days` steps while still
/// strictly after `start`. Newest first; `start` itself is never included.
pub fn generate_day_ticks(
    start: NaiveDate,
    end: NaiveDate,
    interval_days: u32,
) -> ChartResult<Vec<NaiveDate>> {
    if interval_days == 0 {
        return Err(ChartError::InvalidConfig(
            "tick interval must be at least one day".to_owned(),
        ));
    }
    let step = TimeDelta::days(i64::from(interval_days));

    let mut ticks = Vec::new();
    let mut cur = end;
    while start < cur {
        ticks.push(cur);
        match cur.checked_sub_signed(step) {
            Some(previous) => cur = previous,
            None => break,
        }
    }
    Ok(ticks)
}

pub fn validate_label_format(format: &str) -> ChartResult<()> {
    if format.is_empty() || StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(ChartError::InvalidConfig(format!(
            "invalid tick label format `{format}`"
        )));
    }
    Ok(())
}

pub fn format_tick_label(date: NaiveDate, format: &str) -> ChartResult<String> {
    validate_label_format(format)?;
    let mut label = String::new();
    write!(label, "{}", date.format(format)).map_err(|_| {
        ChartError::InvalidConfig(format!("cannot format {date} with `{format}`"))
    })?;
    Ok(label)
}

/// Positions and labels tick dates on the time axis.
pub fn build_tick_marks(
    dates: &[NaiveDate],
    time_scale: &TimeScale,
    format: &str,
) -> ChartResult<Vec<TickMark>> {
    dates
        .iter()
        .map(|&position| {
            Ok(TickMark {
                position,
                x: time_scale.date_to_pixel(position),
                label: format_tick_label(position, format)?,
            })
        })
        .collect()
}
