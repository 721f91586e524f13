use crate::driver::Driver;
use anyhow::Result;

/// Byte-level access to a two-wire bus using 7-bit device addresses.
///
/// One `i2c_write` is one addressed transaction (start, bytes, stop); one
/// `i2c_read` requests `buffer.len()` bytes from the device.
pub trait I2cDriver: Driver {
    fn i2c_write(&mut self, addr: u8, data: &[u8]) -> Result<()>;
    fn i2c_read(&mut self, addr: u8, buffer: &mut [u8]) -> Result<()>;

    fn i2c_write_read(&mut self, addr: u8, data: &[u8], buffer: &mut [u8]) -> Result<()> {
        self.i2c_write(addr, data)?;
        self.i2c_read(addr, buffer)
    }

    /// An empty write that only checks for an ACK. Buses that cannot send a
    /// zero-length write override this.
    fn i2c_probe(&mut self, addr: u8) -> bool {
        self.i2c_write(addr, &[]).is_ok()
    }
}

pub mod hal_i2c;
