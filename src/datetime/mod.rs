//! Zone-naive calendar value type covering 2000-01-01 through 2099-12-31.
//!
//! A [`DateTime`] is a plain field tuple. Nothing is validated at
//! construction: impossible dates such as February 31st are stored as given
//! and only reported by [`DateTime::is_valid`], which checks that the tuple
//! survives a round trip through [`DateTime::unixtime`].

use core::fmt;
use core::ops::{Add, Sub};

mod format;
mod parse;
mod span;

#[cfg(feature = "chrono")]
mod chrono_compat;

pub use format::TimestampKind;
pub use span::TimeSpan;

/// Seconds between 1970-01-01T00:00:00 and 2000-01-01T00:00:00.
pub const SECONDS_FROM_1970_TO_2000: u32 = 946_684_800;

pub(crate) const SECONDS_PER_DAY: i32 = 86_400;

/// Days in January..November. December is whatever is left of the year.
const DAYS_IN_MONTH: [u8; 11] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30];

/// Days since 2000-01-01, valid for 2000..=2099 (mod-4 leap rule).
fn date2days(y_off: u8, month: u8, day: u8) -> u32 {
    let y = y_off as u32;
    let mut days = day as u32;
    days += DAYS_IN_MONTH
        .iter()
        .take(month.saturating_sub(1) as usize)
        .map(|&d| d as u32)
        .sum::<u32>();
    if month > 2 && y % 4 == 0 {
        days += 1;
    }
    (days + 365 * y + (y + 3) / 4).wrapping_sub(1)
}

fn time2ulong(days: u32, hour: u8, minute: u8, second: u8) -> u32 {
    days.wrapping_mul(24)
        .wrapping_add(hour as u32)
        .wrapping_mul(60)
        .wrapping_add(minute as u32)
        .wrapping_mul(60)
        .wrapping_add(second as u32)
}

/// Fields are declared most significant first, so the derived ordering is
/// the chronological one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime {
    year_offset: u8,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
}

impl Default for DateTime {
    fn default() -> Self {
        Self::new(2000, 1, 1, 0, 0, 0)
    }
}

impl DateTime {
    /// Stores the fields as given. A `year` of 2000 or more is reduced to an
    /// offset, anything smaller is taken to be the offset already.
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        let year = if year >= 2000 { year - 2000 } else { year };
        Self {
            year_offset: year as u8,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Builds a DateTime from seconds since 1970-01-01T00:00:00.
    ///
    /// Counts before 2000 wrap around the 2000 offset and land far past
    /// 2099, where [`DateTime::is_valid`] rejects them.
    pub fn from_unixtime(t: u32) -> Self {
        let mut t = t.wrapping_sub(SECONDS_FROM_1970_TO_2000);
        let second = (t % 60) as u8;
        t /= 60;
        let minute = (t % 60) as u8;
        t /= 60;
        let hour = (t % 24) as u8;
        let mut days = t / 24;

        let mut year_offset = 0u8;
        let mut leap;
        loop {
            leap = year_offset % 4 == 0;
            let year_len = 365 + leap as u32;
            if days < year_len {
                break;
            }
            days -= year_len;
            year_offset += 1;
        }

        let mut month = 1u8;
        while month < 12 {
            let mut month_len = DAYS_IN_MONTH[month as usize - 1] as u32;
            if leap && month == 2 {
                month_len += 1;
            }
            if days < month_len {
                break;
            }
            days -= month_len;
            month += 1;
        }

        Self {
            year_offset,
            month,
            day: days as u8 + 1,
            hour,
            minute,
            second,
        }
    }

    /// Builds a DateTime from seconds since 2000-01-01T00:00:00.
    pub fn from_secondstime(t: u32) -> Self {
        Self::from_unixtime(t.wrapping_add(SECONDS_FROM_1970_TO_2000))
    }

    pub const fn year(&self) -> u16 {
        2000 + self.year_offset as u16
    }

    pub const fn year_offset(&self) -> u8 {
        self.year_offset
    }

    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Hour on a 12-hour clock: midnight and noon are both 12.
    pub const fn twelve_hour(&self) -> u8 {
        match self.hour {
            0 | 12 => 12,
            h if h > 12 => h - 12,
            h => h,
        }
    }

    pub const fn is_pm(&self) -> bool {
        self.hour >= 12
    }

    pub const fn minute(&self) -> u8 {
        self.minute
    }

    pub const fn second(&self) -> u8 {
        self.second
    }

    /// 0 = Sunday .. 6 = Saturday.
    pub fn day_of_the_week(&self) -> u8 {
        // 2000-01-01 was a Saturday
        (date2days(self.year_offset, self.month, self.day).wrapping_add(6) % 7) as u8
    }

    /// Seconds since 1970-01-01T00:00:00 in the same (unspecified) zone the
    /// fields are in.
    pub fn unixtime(&self) -> u32 {
        self.secondstime().wrapping_add(SECONDS_FROM_1970_TO_2000)
    }

    /// Seconds since 2000-01-01T00:00:00.
    pub fn secondstime(&self) -> u32 {
        let days = date2days(self.year_offset, self.month, self.day);
        time2ulong(days, self.hour, self.minute, self.second)
    }

    pub fn is_valid(&self) -> bool {
        if self.year_offset >= 100 {
            return false;
        }
        *self == Self::from_unixtime(self.unixtime())
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format::write_timestamp(f, self, TimestampKind::Full)
    }
}

impl Add<TimeSpan> for DateTime {
    type Output = DateTime;

    fn add(self, span: TimeSpan) -> DateTime {
        DateTime::from_unixtime(self.unixtime().wrapping_add_signed(span.total_seconds()))
    }
}

impl Sub<TimeSpan> for DateTime {
    type Output = DateTime;

    fn sub(self, span: TimeSpan) -> DateTime {
        DateTime::from_unixtime(self.unixtime().wrapping_sub(span.total_seconds() as u32))
    }
}

/// Signed distance between two instants. The caller subtracts the earlier
/// one from the later one; the other way round yields a negative span.
impl Sub<DateTime> for DateTime {
    type Output = TimeSpan;

    fn sub(self, right: DateTime) -> TimeSpan {
        TimeSpan::new(self.unixtime().wrapping_sub(right.unixtime()) as i32)
    }
}
