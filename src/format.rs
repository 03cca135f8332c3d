//! Human-readable formatting for durations and wall-clock timestamps.
//!
//! `format_duration` is the compact `[HHh:]MMm:SSs` form used on every
//! status line. Its unit thresholds are strict: a value of exactly one hour
//! or exactly one minute does not get that unit's segment and spills into
//! the next smaller unit (`3600s` renders as `60m:00s`, `60s` as `60s`).

use chrono::{DateTime, TimeZone};
use std::fmt::{Display, Write};
use std::time::Duration;

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;

/// Layout for the session summary timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Round a duration to the nearest whole second, halves rounding up.
pub fn round_to_secs(d: Duration) -> u64 {
    let secs = d.as_secs();
    if d.subsec_nanos() >= 500_000_000 { secs.saturating_add(1) } else { secs }
}

/// Format a duration as `[HHh:]MMm:SSs`, rounded to the nearest second.
pub fn format_duration(d: Duration) -> String {
    let mut secs = round_to_secs(d);
    let mut res = String::new();

    if secs > SECS_PER_HOUR {
        let hours = secs / SECS_PER_HOUR;
        let _ = write!(res, "{:02}h", hours);
        secs -= hours * SECS_PER_HOUR;
    }

    if secs > SECS_PER_MINUTE {
        if !res.is_empty() {
            res.push(':');
        }
        let minutes = secs / SECS_PER_MINUTE;
        let _ = write!(res, "{:02}m", minutes);
        secs -= minutes * SECS_PER_MINUTE;
    } else if !res.is_empty() {
        res.push_str(":00m");
    }

    if !res.is_empty() {
        res.push(':');
    }
    let _ = write!(res, "{:02}s", secs);
    res
}

/// Format a wall-clock instant as `YYYY/MM/DD HH:MM:SS`.
pub fn format_timestamp<Tz>(t: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    t.format(TIMESTAMP_FORMAT).to_string()
}
