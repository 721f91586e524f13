/// Bus addresses and the probe used to tell the two chip families apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RtcConfig {
    /// Probed first; only an M41T81 answers here.
    pub m41t81_address: u8,
    /// PCF8523 address, also the M41T81 alternate address.
    pub pcf8523_address: u8,
    pub scratch_register: u8,
    pub scratch_probe: u8,
    /// What a PCF8523 reads back from `scratch_register` after
    /// `scratch_probe` was written to it.
    pub pcf8523_scratch_echo: u8,
}

impl Default for RtcConfig {
    fn default() -> Self {
        Self {
            m41t81_address: 0x69,
            pcf8523_address: 0x68,
            scratch_register: 0x10,
            scratch_probe: 0xFF,
            pcf8523_scratch_echo: 0x07,
        }
    }
}
