mod chip;
mod config;
mod model;
mod rtc_driver;

pub use chip::{format_registers, Rtc, REGISTER_DUMP_LEN};
pub use config::RtcConfig;
pub use model::{Field, RegisterMap, RegisterWrite, RtcModel, StatusBit};
pub use rtc_driver::RtcDriver;
