//! Gregorian, Unix and Julian time conversions.
//!
//! All instants are UTC seconds since the Unix epoch as `f64`. There is no
//! timezone handling; callers convert to UTC before reaching this module.

use std::fmt;
use std::str::FromStr;

use crate::constants::{
    DAYS_PER_JULIAN_CENTURY, J2000_JULIAN_DATE, SECONDS_PER_DAY, SECONDS_PER_HOUR,
    UNIX_EPOCH_JULIAN_DATE,
};
use crate::error::{Error, Result};

/// Convert Unix seconds to a Julian date.
#[must_use]
pub fn julian_date(unix_seconds: f64) -> f64 {
    UNIX_EPOCH_JULIAN_DATE + unix_seconds / SECONDS_PER_DAY
}

/// Convert Unix seconds to Julian centuries since J2000.0.
#[must_use]
pub fn julian_century(unix_seconds: f64) -> f64 {
    (julian_date(unix_seconds) - J2000_JULIAN_DATE) / DAYS_PER_JULIAN_CENTURY
}

/// Convert a Julian date back to Unix seconds.
#[must_use]
pub fn unix_seconds_from_julian_date(julian_date: f64) -> f64 {
    (julian_date - UNIX_EPOCH_JULIAN_DATE) * SECONDS_PER_DAY
}

/// Returns the UTC time of day in decimal hours (0-24).
#[must_use]
pub fn utc_decimal_hours(unix_seconds: f64) -> f64 {
    unix_seconds.rem_euclid(SECONDS_PER_DAY) / SECONDS_PER_HOUR
}

/// A Gregorian calendar date and UTC time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
///
/// Fields are validated on construction; read them through the getters.
pub struct CivilDateTime {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
}

impl CivilDateTime {
    /// Build a date-time, validating each field.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidDateTime {
                context: "month",
                detail: format!("out of range: {month}"),
            });
        }
        let days_in_month = days_in_month(year, month);
        if !(1..=days_in_month).contains(&day) {
            return Err(Error::InvalidDateTime {
                context: "day",
                detail: format!("{day} not in 1..={days_in_month}"),
            });
        }
        if hour > 23 {
            return Err(Error::InvalidDateTime {
                context: "hour",
                detail: format!("out of range: {hour}"),
            });
        }
        if minute > 59 {
            return Err(Error::InvalidDateTime {
                context: "minute",
                detail: format!("out of range: {minute}"),
            });
        }
        if second > 59 {
            return Err(Error::InvalidDateTime {
                context: "second",
                detail: format!("out of range: {second}"),
            });
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Returns the date-time containing the given Unix instant.
    ///
    /// Fractional seconds are truncated toward the earlier whole second.
    #[must_use]
    pub fn from_unix_seconds(unix_seconds: f64) -> Self {
        let whole = unix_seconds.floor() as i64;
        let days = whole.div_euclid(86_400);
        let secs_of_day = whole.rem_euclid(86_400) as u32;
        let (year, month, day) = civil_from_days(days);
        Self {
            year,
            month,
            day,
            hour: secs_of_day / 3600,
            minute: secs_of_day % 3600 / 60,
            second: secs_of_day % 60,
        }
    }

    /// Returns Unix seconds for this date-time.
    #[must_use]
    pub fn to_unix_seconds(&self) -> f64 {
        let days = days_from_civil(self.year, self.month, self.day);
        let secs = days * 86_400
            + i64::from(self.hour) * 3600
            + i64::from(self.minute) * 60
            + i64::from(self.second);
        secs as f64
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month, 1-12.
    #[must_use]
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Day of month, starting at 1.
    #[must_use]
    pub fn day(&self) -> u32 {
        self.day
    }

    #[must_use]
    pub fn hour(&self) -> u32 {
        self.hour
    }

    #[must_use]
    pub fn minute(&self) -> u32 {
        self.minute
    }

    #[must_use]
    pub fn second(&self) -> u32 {
        self.second
    }

    /// Returns the day of year (1-366).
    #[must_use]
    pub fn day_of_year(&self) -> u32 {
        const DAYS_BEFORE_MONTH: [u32; 12] =
            [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];
        let before = DAYS_BEFORE_MONTH
            .get(self.month.saturating_sub(1) as usize)
            .copied()
            .unwrap_or(DAYS_BEFORE_MONTH[11]);
        let mut day = before + self.day;
        if is_leap_year(self.year) && self.month > 2 {
            day += 1;
        }
        day
    }
}

impl fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

impl FromStr for CivilDateTime {
    type Err = Error;

    /// Parse `YYYY-MM-DDTHH:MM:SS`, with an optional trailing `Z`.
    ///
    /// A space is accepted in place of the `T` separator.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim().trim_end_matches('Z').replace(' ', "T");
        let Some((date, time)) = s.split_once('T') else {
            return Err(Error::InvalidDateTime {
                context: "date-time",
                detail: format!("expected YYYY-MM-DDTHH:MM:SS, got '{s}'"),
            });
        };

        // A leading '-' belongs to the year, so split from the right.
        let date_parts: Vec<&str> = date.rsplitn(3, '-').collect();
        let time_parts: Vec<&str> = time.split(':').collect();
        if date_parts.len() != 3 || time_parts.len() != 3 {
            return Err(Error::InvalidDateTime {
                context: "date-time",
                detail: format!("expected YYYY-MM-DDTHH:MM:SS, got '{s}'"),
            });
        }

        let year = parse_field::<i32>(date_parts[2], "year")?;
        let month = parse_field(date_parts[1], "month")?;
        let day = parse_field(date_parts[0], "day")?;
        let hour = parse_field(time_parts[0], "hour")?;
        let minute = parse_field(time_parts[1], "minute")?;
        let second = parse_field(time_parts[2], "second")?;

        Self::new(year, month, day, hour, minute, second)
    }
}

fn parse_field<T: FromStr>(text: &str, context: &'static str) -> Result<T>
where
    T::Err: fmt::Display,
{
    text.parse::<T>().map_err(|e| Error::InvalidDateTime {
        context,
        detail: format!("'{text}': {e}"),
    })
}

/// Returns whether `year` is a Gregorian leap year.
#[must_use]
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Converts days since the Unix epoch to a Gregorian date.
///
/// Howard Hinnant's `civil_from_days`.
fn civil_from_days(days: i64) -> (i32, u32, u32) {
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = (z - era * 146_097) as u32;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146_096) / 365;
    let y = i64::from(yoe) + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = if m <= 2 { y + 1 } else { y };
    (year as i32, m, d)
}

/// Converts a Gregorian date to days since the Unix epoch.
///
/// Howard Hinnant's `days_from_civil`.
fn days_from_civil(year: i32, month: u32, day: u32) -> i64 {
    let y = i64::from(year) - i64::from(month <= 2);
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let m = i64::from(month);
    let mp = if m > 2 { m - 3 } else { m + 9 };
    let doy = (153 * mp + 2) / 5 + i64::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}
