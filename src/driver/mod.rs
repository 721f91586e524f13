use crate::Result;

pub trait Driver {
    fn driver_init(&mut self) -> Result<()>;
    fn driver_deinit(&mut self) -> Result<()>;
    fn driver_dev_name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

pub mod i2c;
pub mod rtc;
