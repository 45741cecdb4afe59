//! Date and time reconstruction
//!
//! Branch pages never show absolute dates for showtimes. They show relative
//! day buttons ("Today", "Monday", ...) in display order and bare `HH:MM`
//! times per row. This module turns those into calendar dates and instants,
//! using a [`Clock`] to supply today's date and the local time zone.

use chrono::{
    DateTime, Days, Duration, FixedOffset, Local, NaiveDate, NaiveDateTime, SecondsFormat,
    TimeZone, Utc,
};

use crate::types::{DayDate, TimePoint};

/// Source of the host calendar: today's date, and how local wall-clock times
/// map to instants.
pub trait Clock: Send + Sync {
    /// The current local calendar date
    fn today(&self) -> NaiveDate;

    /// Convert a local wall-clock time to an instant.
    ///
    /// Returns `None` for times that do not exist locally (e.g. inside a
    /// daylight-saving gap).
    fn to_instant(&self, local: NaiveDateTime) -> Option<DateTime<Utc>>;
}

/// Clock backed by the host's local time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn to_instant(&self, local: NaiveDateTime) -> Option<DateTime<Utc>> {
        Local
            .from_local_datetime(&local)
            .earliest()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Clock pinned to a single moment and UTC offset
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<FixedOffset>,
}

impl FixedClock {
    /// Create a clock that always reports `now`
    pub fn new(now: DateTime<FixedOffset>) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }

    fn to_instant(&self, local: NaiveDateTime) -> Option<DateTime<Utc>> {
        self.now
            .offset()
            .from_local_datetime(&local)
            .single()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Format a date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Pair each day label with a calendar date, starting with `today`.
///
/// The label at index `i` is given `today + i` days. Labels are display
/// strings and are not interpreted. No labels yields no dates.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use cineworld_core::dates::dates_from_days;
///
/// let today = NaiveDate::from_ymd_opt(2026, 1, 9).unwrap();
/// let dates = dates_from_days(&["Today", "Saturday"], today);
/// assert_eq!(dates[0].date, "2026-01-09");
/// assert_eq!(dates[1].date, "2026-01-10");
/// ```
pub fn dates_from_days<S: AsRef<str>>(days: &[S], today: NaiveDate) -> Vec<DayDate> {
    days.iter()
        .enumerate()
        .filter_map(|(index, day)| {
            let date = today.checked_add_days(Days::new(index as u64))?;
            Some(DayDate {
                day: day.as_ref().to_string(),
                date: format_date(date),
            })
        })
        .collect()
}

/// Build a time point from a `HH:MM` start time moved forward by
/// `offset_minutes`, anchored to today's date.
///
/// The label follows the wall clock, so `23:30` plus 60 minutes reads `00:30`
/// and its value falls on the next day. Unreadable times yield an empty time
/// point.
pub fn time_from_offset(start_time: &str, offset_minutes: u32, clock: &dyn Clock) -> TimePoint {
    let Some((hours, minutes)) = parse_clock_time(start_time) else {
        return TimePoint::empty();
    };

    let Some(midnight) = clock.today().and_hms_opt(0, 0, 0) else {
        return TimePoint::empty();
    };

    let total_minutes = i64::from(hours) * 60 + i64::from(minutes) + i64::from(offset_minutes);
    let Some(local) = midnight.checked_add_signed(Duration::minutes(total_minutes)) else {
        return TimePoint::empty();
    };

    let value = clock
        .to_instant(local)
        .map(|instant| instant.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_default();

    TimePoint {
        label: local.format("%H:%M").to_string(),
        value,
    }
}

/// Parse `HH:MM` (surrounding whitespace allowed) into hours and minutes.
fn parse_clock_time(text: &str) -> Option<(u32, u32)> {
    let (hours, minutes) = text.trim().split_once(':')?;

    let hours = parse_clock_part(hours)?;
    let minutes = parse_clock_part(minutes)?;

    if hours > 23 || minutes > 59 {
        return None;
    }

    Some((hours, minutes))
}

fn parse_clock_part(part: &str) -> Option<u32> {
    if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}
