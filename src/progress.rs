//! Harvest progress and harvest date estimates.
//!
//! Progress is the share of one crop cycle elapsed since planting. The
//! planting date is a calendar date taken at local midnight in the time
//! zone of the supplied "now".

use chrono::{DateTime, Days, Local, NaiveDate, NaiveTime, TimeZone};
use std::cmp::Reverse;
use tracing::debug;

use crate::config::HarvestConfig;
use crate::records::{parse_day_prefix, Plot};

/// One full crop cycle
pub const DEFAULT_CYCLE_DAYS: u32 = 420;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Parse the `YYYY-MM-DD` day of a date or timestamp string. Blank or
/// malformed input yields `None`.
pub fn parse_local_date(value: &str) -> Option<NaiveDate> {
    parse_day_prefix(value)
}

/// Percentage (0-100) of `cycle_days` elapsed between local midnight of
/// `start` and `now`. Unparseable dates and a zero-length cycle yield 0.
pub fn harvest_progress<Tz: TimeZone>(start: &str, cycle_days: u32, now: &DateTime<Tz>) -> u8 {
    match parse_local_date(start) {
        Some(start) => progress_since(start, cycle_days, now),
        None => {
            debug!("No usable planting date in {:?}", start);
            0
        }
    }
}

/// Harvest progress for an already parsed planting date
pub fn progress_since<Tz: TimeZone>(start: NaiveDate, cycle_days: u32, now: &DateTime<Tz>) -> u8 {
    if cycle_days == 0 {
        return 0;
    }

    let midnight = start.and_time(NaiveTime::MIN);
    let tz = now.timezone();
    // Midnight can fall inside a DST gap; read it as UTC wall time then
    let start_at = tz
        .from_local_datetime(&midnight)
        .earliest()
        .unwrap_or_else(|| tz.from_utc_datetime(&midnight));

    let elapsed_ms = now.clone().signed_duration_since(start_at).num_milliseconds() as f64;
    let elapsed_days = elapsed_ms / MILLIS_PER_DAY;
    let percent = (elapsed_days / f64::from(cycle_days) * 100.0).clamp(0.0, 100.0);

    percent.round() as u8
}

/// Harvest progress against the local wall clock
pub fn harvest_progress_now(start: &str, cycle_days: u32) -> u8 {
    harvest_progress(start, cycle_days, &Local::now())
}

/// Estimate a harvest date from the crop type. The crop name is matched
/// case-insensitively against the configured crop fragments and the longest
/// matching fragment wins (alphabetical first on a tie). Unknown crops have
/// no estimate.
pub fn estimate_harvest_date(
    start: NaiveDate,
    crop_type: Option<&str>,
    harvest: &HarvestConfig,
) -> Option<NaiveDate> {
    let crop = crop_type.unwrap_or("").to_lowercase();
    let months = harvest
        .crops
        .iter()
        .filter(|(fragment, _)| {
            let fragment = fragment.trim().to_lowercase();
            !fragment.is_empty() && crop.contains(fragment.as_str())
        })
        .min_by_key(|(fragment, _)| Reverse(fragment.trim().len()))
        .map(|(_, months)| *months)?;

    let days = u64::from(months) * u64::from(harvest.days_per_month);
    start.checked_add_days(Days::new(days))
}

/// A plot's expected harvest date: the recorded one when it parses,
/// otherwise an estimate from its planting date and crop type
pub fn expected_harvest_date(plot: &Plot, harvest: &HarvestConfig) -> Option<NaiveDate> {
    if let Some(recorded) = plot.expected_harvest_date.as_deref().and_then(parse_day_prefix) {
        return Some(recorded);
    }
    let planted = plot.planted_on().and_then(parse_day_prefix)?;
    estimate_harvest_date(planted, plot.crop_type.as_deref(), harvest)
}
