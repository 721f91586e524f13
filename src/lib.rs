#![cfg_attr(not(test), no_std)]

pub extern crate alloc;
pub use anyhow::anyhow;
pub use anyhow::Result;

pub mod datetime;
pub mod driver;
pub mod util;

pub use datetime::{DateTime, TimeSpan, TimestampKind};
pub use driver::i2c::{hal_i2c::HalI2c, I2cDriver};
pub use driver::rtc::{Rtc, RtcConfig, RtcDriver, RtcModel};
pub use driver::Driver;
