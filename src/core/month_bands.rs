use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::calendar::{first_day_of_next_month, last_day_of_month};
use crate::core::{PathData, TimeScale};
use crate::error::ChartResult;

/// Background band covering the part of one calendar month inside the domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthBand {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub x1: f64,
    pub x2: f64,
}

impl MonthBand {
    #[must_use]
    pub fn width(self) -> f64 {
        self.x2 - self.x1
    }

    #[must_use]
    pub fn span_days(self) -> i64 {
        (self.end - self.start).num_days()
    }

    #[must_use]
    pub fn rect_path(self, height: f64) -> PathData {
        PathData::band_rect(self.x1, self.x2, height)
    }
}

/// Alternating fill slot for a band at `index`, counted from one like
/// `:nth-child`, so the first band is odd.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BandParity {
    Odd,
    Even,
}

impl BandParity {
    #[must_use]
    pub fn for_index(index: usize) -> Self {
        if (index + 1) % 2 == 0 {
            Self::Even
        } else {
            Self::Odd
        }
    }
}

/// Splits `[start, end)` into one band per calendar month it touches.
///
/// A band whose month ends on or after `end` is cut at `end`; every other
/// band runs to the first day of the following month. `start == end` yields
/// no bands.
pub fn segment_month_bands(
    start: NaiveDate,
    end: NaiveDate,
    time_scale: &TimeScale,
) -> ChartResult<Vec<MonthBand>> {
    let mut bands = Vec::new();
    let mut cur = start;
    while cur < end {
        let next_month = first_day_of_next_month(cur)?;
        let right = if last_day_of_month(cur)? >= end {
            end
        } else {
            next_month
        };
        bands.push(MonthBand {
            start: cur,
            end: right,
            x1: time_scale.date_to_pixel(cur),
            x2: time_scale.date_to_pixel(right),
        });
        cur = next_month;
    }
    Ok(bands)
}
