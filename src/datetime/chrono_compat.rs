use anyhow::{anyhow, Error};
use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use super::DateTime;

impl TryFrom<DateTime> for NaiveDateTime {
    type Error = Error;

    fn try_from(dt: DateTime) -> Result<Self, Self::Error> {
        if dt.year_offset >= 100 {
            return Err(anyhow!("DATETIME OUT OF RANGE"));
        }
        NaiveDate::from_ymd_opt(dt.year() as i32, dt.month as u32, dt.day as u32)
            .ok_or(anyhow!("Invalid date"))?
            .and_hms_opt(dt.hour as u32, dt.minute as u32, dt.second as u32)
            .ok_or(anyhow!("Invalid time"))
    }
}

impl TryFrom<NaiveDateTime> for DateTime {
    type Error = Error;

    fn try_from(naive: NaiveDateTime) -> Result<Self, Self::Error> {
        if !(2000..2100).contains(&naive.year()) {
            return Err(anyhow!("YEAR OUT OF RANGE"));
        }
        Ok(DateTime::new(
            naive.year() as u16,
            naive.month() as u8,
            naive.day() as u8,
            naive.hour() as u8,
            naive.minute() as u8,
            naive.second() as u8,
        ))
    }
}
