use crate::datetime::DateTime;
use crate::driver::Driver;

/// Wall-clock access shared by every RTC chip driver.
///
/// Reads and writes never fail: a chip that is missing or not answering
/// yields a fixed default instead, see [`DateTime::is_valid`].
pub trait RtcDriver: Driver {
    fn rtc_read_datetime(&mut self) -> DateTime;
    fn rtc_write_datetime(&mut self, dt: &DateTime);
    fn rtc_get_timestamp_sec(&mut self) -> u32 {
        self.rtc_read_datetime().unixtime()
    }
}
