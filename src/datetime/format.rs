use alloc::string::String;
use core::fmt::{self, Write};

use super::DateTime;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Predefined ISO 8601 layouts for [`DateTime::timestamp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimestampKind {
    /// `yyyy-mm-ddThh:mm:ss`
    #[default]
    Full,
    /// `hh:mm:ss`
    Time,
    /// `yyyy-mm-dd`
    Date,
}

#[derive(Clone, Copy)]
enum Token {
    Year4,
    Year2,
    MonthName,
    Month,
    DayName,
    Day,
    Hour,
    Minute,
    Second,
    MeridiemUpper,
    MeridiemLower,
}

/// Longer tokens come first so that `YYYY` is never read as two `YY`.
const TOKENS: [(&str, Token); 11] = [
    ("YYYY", Token::Year4),
    ("YY", Token::Year2),
    ("MMM", Token::MonthName),
    ("MM", Token::Month),
    ("DDD", Token::DayName),
    ("DD", Token::Day),
    ("hh", Token::Hour),
    ("mm", Token::Minute),
    ("ss", Token::Second),
    ("AP", Token::MeridiemUpper),
    ("ap", Token::MeridiemLower),
];

pub(super) fn write_timestamp<W: Write>(
    w: &mut W,
    dt: &DateTime,
    kind: TimestampKind,
) -> fmt::Result {
    match kind {
        TimestampKind::Time => write!(w, "{:02}:{:02}:{:02}", dt.hour, dt.minute, dt.second),
        TimestampKind::Date => write!(w, "{}-{:02}-{:02}", dt.year(), dt.month, dt.day),
        TimestampKind::Full => write!(
            w,
            "{}-{:02}-{:02}T{:02}:{:02}:{:02}",
            dt.year(),
            dt.month,
            dt.day,
            dt.hour,
            dt.minute,
            dt.second
        ),
    }
}

impl DateTime {
    /// Expands a format template.
    ///
    /// | token  | output                                   |
    /// |--------|------------------------------------------|
    /// | `YYYY` | 4-digit year                             |
    /// | `YY`   | 2-digit year                             |
    /// | `MMM`  | month name, `Jan`..`Dec`                 |
    /// | `MM`   | 2-digit month                            |
    /// | `DDD`  | weekday name, `Sun`..`Sat`               |
    /// | `DD`   | 2-digit day                              |
    /// | `hh`   | 2-digit hour, 01..12 if the template has `AP`/`ap`, else 00..23 |
    /// | `mm`   | 2-digit minute                           |
    /// | `ss`   | 2-digit second                           |
    /// | `AP`   | `AM`/`PM`                                |
    /// | `ap`   | `am`/`pm`                                |
    ///
    /// Everything else is copied through, so
    /// `"DDD, DD MMM YYYY hh:mm:ss"` gives `"Thu, 16 Apr 2020 18:34:56"`.
    pub fn format(&self, template: &str) -> String {
        let twelve_hour = template.contains("AP") || template.contains("ap");
        let hour = if twelve_hour { self.twelve_hour() } else { self.hour };

        let mut out = String::with_capacity(template.len() + 4);
        let mut rest = template;
        while let Some(c) = rest.chars().next() {
            let Some(&(text, token)) = TOKENS.iter().find(|(text, _)| rest.starts_with(text)) else {
                out.push(c);
                rest = &rest[c.len_utf8()..];
                continue;
            };
            // writing into a String cannot fail
            let _ = self.write_token(&mut out, token, hour);
            rest = &rest[text.len()..];
        }
        out
    }

    fn write_token(&self, out: &mut String, token: Token, hour: u8) -> fmt::Result {
        match token {
            Token::Year4 => write!(out, "20{:02}", self.year_offset % 100),
            Token::Year2 => write!(out, "{:02}", self.year_offset % 100),
            Token::MonthName => {
                let name = (self.month as usize)
                    .checked_sub(1)
                    .and_then(|i| MONTH_NAMES.get(i))
                    .unwrap_or(&"???");
                out.write_str(name)
            }
            Token::Month => write!(out, "{:02}", self.month),
            Token::DayName => out.write_str(DAY_NAMES[self.day_of_the_week() as usize]),
            Token::Day => write!(out, "{:02}", self.day),
            Token::Hour => write!(out, "{:02}", hour),
            Token::Minute => write!(out, "{:02}", self.minute),
            Token::Second => write!(out, "{:02}", self.second),
            Token::MeridiemUpper => out.write_str(if self.is_pm() { "PM" } else { "AM" }),
            Token::MeridiemLower => out.write_str(if self.is_pm() { "pm" } else { "am" }),
        }
    }

    pub fn timestamp(&self, kind: TimestampKind) -> String {
        let mut out = String::with_capacity(20);
        let _ = write_timestamp(&mut out, self, kind);
        out
    }
}
