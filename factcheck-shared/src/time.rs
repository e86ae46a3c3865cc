//! Relative ("3 days ago") and absolute timestamp labels.

use chrono::{DateTime, Datelike, NaiveDateTime, TimeZone};
use std::fmt;

const MINUTES_IN_DAY: i64 = 1_440;
const MINUTES_IN_ALMOST_TWO_DAYS: i64 = 2_520;
const MINUTES_IN_MONTH: i64 = 43_200;
const MINUTES_IN_TWO_MONTHS: i64 = 86_400;

/// Distance between two instants, bucketed the way people say it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeTime {
    /// Under a minute.
    LessThanAMinute,
    /// 1 to 44 minutes.
    Minutes(i64),
    /// 45 minutes up to a day, in rounded hours.
    AboutHours(i64),
    /// Up to 30 days, in rounded days.
    Days(i64),
    /// 30 to 60 days.
    AboutMonths(i64),
    /// Under a year of calendar months, in rounded 30-day months.
    Months(i64),
    /// Whole years plus up to two months.
    AboutYears(i64),
    /// Whole years plus three to eight months.
    OverYears(i64),
    /// Nine or more months into the next year.
    AlmostYears(i64),
}

impl RelativeTime {
    /// Bucket the distance between `from` and `to`, in either order.
    ///
    /// Year buckets count calendar months in `from`'s time zone.
    #[must_use]
    pub fn between<A: TimeZone, B: TimeZone>(from: &DateTime<A>, to: &DateTime<B>) -> Self {
        let to = to.with_timezone(&from.timezone());
        let (earlier, later) = if *from <= to {
            (from.naive_local(), to.naive_local())
        } else {
            (to.naive_local(), from.naive_local())
        };
        let seconds = (to.timestamp() - from.timestamp()).abs();
        #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
        let minutes = (seconds as f64 / 60.0).round() as i64;
        Self::from_minutes(minutes, calendar_months(earlier, later))
    }

    /// Distance from `at` to `now` for "… ago" labels.
    ///
    /// Instants after `now` (clock skew) count as just now.
    #[must_use]
    pub fn since<A: TimeZone, B: TimeZone>(at: &DateTime<A>, now: &DateTime<B>) -> Self {
        if at.timestamp() > now.timestamp() {
            return Self::LessThanAMinute;
        }
        Self::between(at, now)
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn from_minutes(minutes: i64, months: i64) -> Self {
        let rounded = |unit: i64| (minutes as f64 / unit as f64).round() as i64;

        if minutes < 1 {
            Self::LessThanAMinute
        } else if minutes < 45 {
            Self::Minutes(minutes)
        } else if minutes < 90 {
            Self::AboutHours(1)
        } else if minutes < MINUTES_IN_DAY {
            Self::AboutHours(rounded(60))
        } else if minutes < MINUTES_IN_ALMOST_TWO_DAYS {
            Self::Days(1)
        } else if minutes < MINUTES_IN_MONTH {
            Self::Days(rounded(MINUTES_IN_DAY))
        } else if minutes < MINUTES_IN_TWO_MONTHS {
            Self::AboutMonths(rounded(MINUTES_IN_MONTH))
        } else if months < 12 {
            Self::Months(rounded(MINUTES_IN_MONTH))
        } else {
            let years = months / 12;
            match months % 12 {
                0..3 => Self::AboutYears(years),
                3..9 => Self::OverYears(years),
                _ => Self::AlmostYears(years + 1),
            }
        }
    }

    /// The number interpolated into the label, if any.
    #[must_use]
    pub fn count(self) -> Option<i64> {
        match self {
            Self::LessThanAMinute => None,
            Self::Minutes(n)
            | Self::AboutHours(n)
            | Self::Days(n)
            | Self::AboutMonths(n)
            | Self::Months(n)
            | Self::AboutYears(n)
            | Self::OverYears(n)
            | Self::AlmostYears(n) => Some(n),
        }
    }

    /// Translation key, with `.one`/`.other` chosen by the count.
    #[must_use]
    pub fn translation_key(self) -> String {
        let stem = match self {
            Self::LessThanAMinute => return "time.less_than_a_minute".to_string(),
            Self::Minutes(_) => "time.minutes",
            Self::AboutHours(_) => "time.about_hours",
            Self::Days(_) => "time.days",
            Self::AboutMonths(_) => "time.about_months",
            Self::Months(_) => "time.months",
            Self::AboutYears(_) => "time.about_years",
            Self::OverYears(_) => "time.over_years",
            Self::AlmostYears(_) => "time.almost_years",
        };
        let plural = if self.count() == Some(1) { "one" } else { "other" };
        format!("{stem}.{plural}")
    }
}

impl fmt::Display for RelativeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (prefix, unit) = match self {
            Self::LessThanAMinute => return f.write_str("less than a minute"),
            Self::Minutes(_) => ("", "minute"),
            Self::AboutHours(_) => ("about ", "hour"),
            Self::Days(_) => ("", "day"),
            Self::AboutMonths(_) => ("about ", "month"),
            Self::Months(_) => ("", "month"),
            Self::AboutYears(_) => ("about ", "year"),
            Self::OverYears(_) => ("over ", "year"),
            Self::AlmostYears(_) => ("almost ", "year"),
        };
        let count = self.count().unwrap_or_default();
        let suffix = if count == 1 { "" } else { "s" };
        write!(f, "{prefix}{count} {unit}{suffix}")
    }
}

/// Whole calendar months from `earlier` to `later`.
fn calendar_months(earlier: NaiveDateTime, later: NaiveDateTime) -> i64 {
    let mut months = i64::from(later.year() - earlier.year()) * 12 + i64::from(later.month())
        - i64::from(earlier.month());
    if months > 0 && (later.day(), later.time()) < (earlier.day(), earlier.time()) {
        months -= 1;
    }
    months
}

/// Short date and time, e.g. `03/01/2020, 8:30 AM`.
#[must_use]
pub fn format_absolute<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    at.format("%m/%d/%Y, %-I:%M %p").to_string()
}
