use chrono::{NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::core::LinearScale;
use crate::error::{ChartError, ChartResult};

/// Calendar-date axis mapped onto `[0, width]`.
///
/// Dates are measured in whole days from `start`. When `start == end` the
/// domain widens to one day centred on the date, so the lone date lands at
/// `width / 2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    start: NaiveDate,
    end: NaiveDate,
    linear: LinearScale,
}

impl TimeScale {
    pub fn new(start: NaiveDate, end: NaiveDate, width: f64) -> ChartResult<Self> {
        if end < start {
            return Err(ChartError::InvalidData(format!(
                "time scale end {end} is before start {start}"
            )));
        }
        if !width.is_finite() || width <= 0.0 {
            return Err(ChartError::InvalidData(
                "time scale width must be finite and > 0".to_owned(),
            ));
        }

        let span_days = (end - start).num_days() as f64;
        let domain = normalize_range(0.0, span_days, 1.0);
        Ok(Self {
            start,
            end,
            linear: LinearScale::new(domain, (0.0, width))?,
        })
    }

    #[must_use]
    pub fn start(self) -> NaiveDate {
        self.start
    }

    #[must_use]
    pub fn end(self) -> NaiveDate {
        self.end
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.linear.range().1
    }

    #[must_use]
    pub fn span_days(self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Maps a date to its x position. Dates outside the domain extrapolate.
    #[must_use]
    pub fn date_to_pixel(self, date: NaiveDate) -> f64 {
        self.linear.map((date - self.start).num_days() as f64)
    }

    /// Fractional day offset from `start` under `pixel`.
    #[must_use]
    pub fn pixel_to_day_offset(self, pixel: f64) -> f64 {
        self.linear.invert(pixel)
    }

    /// Nearest calendar date under `pixel`.
    pub fn pixel_to_date(self, pixel: f64) -> ChartResult<NaiveDate> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }
        let offset = self.pixel_to_day_offset(pixel).round() as i64;
        TimeDelta::try_days(offset)
            .and_then(|delta| self.start.checked_add_signed(delta))
            .ok_or_else(|| ChartError::InvalidData("pixel maps outside calendar range".to_owned()))
    }
}

fn normalize_range(start: f64, end: f64, min_span: f64) -> (f64, f64) {
    if start == end {
        let half = min_span / 2.0;
        return (start - half, end + half);
    }
    (start.min(end), start.max(end))
}
