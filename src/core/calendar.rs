use chrono::{Datelike, NaiveDate};

use crate::error::{ChartError, ChartResult};

/// First day of the month following `date`'s month.
pub fn first_day_of_next_month(date: NaiveDate) -> ChartResult<NaiveDate> {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| ChartError::InvalidData(format!("no month follows {date}")))
}

/// Last day of `date`'s month.
pub fn last_day_of_month(date: NaiveDate) -> ChartResult<NaiveDate> {
    first_day_of_next_month(date)?
        .pred_opt()
        .ok_or_else(|| ChartError::InvalidData(format!("no month end for {date}")))
}
