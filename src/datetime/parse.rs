use core::convert::Infallible;
use core::str::FromStr;

use super::DateTime;
use crate::util::conv2d;

const ISO8601_TEMPLATE: &[u8; 19] = b"2000-01-01T00:00:00";

fn at(s: &[u8], offset: usize) -> &[u8] {
    s.get(offset..).unwrap_or(&[])
}

/// `Jan`..`Dec` from the first three letters; 0 when the first letter is
/// not a month initial.
fn decode_month(s: &[u8]) -> u8 {
    let second = s.get(1).copied();
    let third = s.get(2).copied();
    match s.first() {
        Some(b'J') if second == Some(b'a') => 1,
        Some(b'J') if third == Some(b'n') => 6,
        Some(b'J') => 7,
        Some(b'F') => 2,
        Some(b'A') if third == Some(b'r') => 4,
        Some(b'A') => 8,
        Some(b'M') if third == Some(b'r') => 3,
        Some(b'M') => 5,
        Some(b'S') => 9,
        Some(b'O') => 10,
        Some(b'N') => 11,
        Some(b'D') => 12,
        _ => 0,
    }
}

impl DateTime {
    /// Parses the compiler's build-date pair, `"Mmm dd yyyy"` and `"hh:mm:ss"`.
    ///
    /// Fields sit at fixed offsets; nothing is checked, so malformed input
    /// simply produces an invalid DateTime.
    pub fn from_build_strings(date: &str, time: &str) -> Self {
        let date = date.as_bytes();
        let time = time.as_bytes();
        Self {
            year_offset: conv2d(at(date, 9)),
            month: decode_month(date),
            day: conv2d(at(date, 4)),
            hour: conv2d(time),
            minute: conv2d(at(time, 3)),
            second: conv2d(at(time, 6)),
        }
    }

    /// Parses `"YYYY-MM-DDThh:mm:ss"`.
    ///
    /// The input is laid over `"2000-01-01T00:00:00"` before decoding, so a
    /// truncated string keeps the template's values for the missing tail
    /// (`"2020-06-25"` reads as midnight) instead of being rejected.
    pub fn from_iso8601(s: &str) -> Self {
        let mut buf = *ISO8601_TEMPLATE;
        let len = buf.len().min(s.len());
        buf[..len].copy_from_slice(&s.as_bytes()[..len]);
        Self {
            year_offset: conv2d(&buf[2..]),
            month: conv2d(&buf[5..]),
            day: conv2d(&buf[8..]),
            hour: conv2d(&buf[11..]),
            minute: conv2d(&buf[14..]),
            second: conv2d(&buf[17..]),
        }
    }
}

impl FromStr for DateTime {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_iso8601(s))
    }
}
