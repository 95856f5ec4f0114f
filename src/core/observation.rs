use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ChartError, ChartResult};

/// One daily ranking sample. Smaller ranks are better and plot higher.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankObservation {
    pub day: NaiveDate,
    pub rank: f64,
}

impl RankObservation {
    pub fn new(day: NaiveDate, rank: f64) -> ChartResult<Self> {
        check_rank(rank).map_err(ChartError::InvalidData)?;
        Ok(Self { day, rank })
    }
}

/// Record shape accepted from hosts before dates are parsed.
///
/// `day` is ISO `YYYY-MM-DD` text; an RFC 3339 timestamp is accepted too and
/// truncated to its calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRankRecord {
    pub day: String,
    pub rank: f64,
}

impl RawRankRecord {
    #[must_use]
    pub fn new(day: impl Into<String>, rank: f64) -> Self {
        Self {
            day: day.into(),
            rank,
        }
    }
}

/// Converts raw records into validated observations, rejecting the first
/// malformed record with its index.
pub fn ingest_records(records: &[RawRankRecord]) -> ChartResult<Vec<RankObservation>> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let day = parse_day(&record.day).map_err(|reason| {
                warn!(index, day = %record.day, "rejecting record with invalid date");
                ChartError::MalformedObservation { index, reason }
            })?;
            check_rank(record.rank).map_err(|reason| {
                warn!(index, rank = record.rank, "rejecting record with invalid rank");
                ChartError::MalformedObservation { index, reason }
            })?;
            Ok(RankObservation {
                day,
                rank: record.rank,
            })
        })
        .collect()
}

/// Parses a JSON array of `{ "day": "...", "rank": n }` records.
pub fn ingest_json(input: &str) -> ChartResult<Vec<RankObservation>> {
    let records: Vec<RawRankRecord> = serde_json::from_str(input)
        .map_err(|e| ChartError::InvalidData(format!("failed to parse rank records: {e}")))?;
    ingest_records(&records)
}

/// Re-checks observations whose fields were set directly by the caller.
pub fn validate_observations(observations: &[RankObservation]) -> ChartResult<()> {
    for (index, observation) in observations.iter().enumerate() {
        check_rank(observation.rank)
            .map_err(|reason| ChartError::MalformedObservation { index, reason })?;
    }
    Ok(())
}

/// Stable ascending sort by day; same-day observations keep input order.
#[must_use]
pub fn sort_by_day(mut observations: Vec<RankObservation>) -> Vec<RankObservation> {
    observations.sort_by_key(|observation| observation.day);
    observations
}

fn check_rank(rank: f64) -> Result<(), String> {
    if !rank.is_finite() {
        return Err("rank must be finite".to_owned());
    }
    if rank <= 0.0 {
        return Err("rank must be > 0".to_owned());
    }
    Ok(())
}

fn parse_day(text: &str) -> Result<NaiveDate, String> {
    let text = text.trim();
    if let Ok(day) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Ok(day);
    }
    DateTime::parse_from_rfc3339(text)
        .map(|time| time.date_naive())
        .map_err(|_| format!("`{text}` is not a valid calendar date"))
}
