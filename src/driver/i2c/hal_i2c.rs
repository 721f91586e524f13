use embedded_hal::i2c::{Error as _, I2c};

use crate::driver::{i2c::I2cDriver, Driver};
use anyhow::{anyhow, Result};

/// Exposes any `embedded-hal` I2C bus as an [`I2cDriver`].
///
/// Probes write register pointer 0x00 instead of sending an empty write,
/// which not every `embedded-hal` implementation puts on the wire.
pub struct HalI2c<I> {
    i2c: I,
}

impl<I: I2c> HalI2c<I> {
    pub fn new(i2c: I) -> Self {
        Self { i2c }
    }

    pub fn release(self) -> I {
        self.i2c
    }
}

impl<I: I2c> Driver for HalI2c<I> {
    fn driver_init(&mut self) -> Result<()> {
        Ok(())
    }

    fn driver_deinit(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<I: I2c> I2cDriver for HalI2c<I> {
    fn i2c_write(&mut self, addr: u8, data: &[u8]) -> Result<()> {
        self.i2c
            .write(addr, data)
            .map_err(|e| anyhow!("I2C WRITE {:02x}: {:?}", addr, e.kind()))
    }

    fn i2c_read(&mut self, addr: u8, buffer: &mut [u8]) -> Result<()> {
        self.i2c
            .read(addr, buffer)
            .map_err(|e| anyhow!("I2C READ {:02x}: {:?}", addr, e.kind()))
    }

    fn i2c_write_read(&mut self, addr: u8, data: &[u8], buffer: &mut [u8]) -> Result<()> {
        self.i2c
            .write_read(addr, data, buffer)
            .map_err(|e| anyhow!("I2C WRITE_READ {:02x}: {:?}", addr, e.kind()))
    }

    fn i2c_probe(&mut self, addr: u8) -> bool {
        self.i2c.write(addr, &[0x00]).is_ok()
    }
}
