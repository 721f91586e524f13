use alloc::format;
use alloc::string::String;
use core::fmt::Write;

use log::{debug, warn};

use super::{RegisterMap, RtcConfig, RtcDriver, RtcModel};
use crate::datetime::DateTime;
use crate::driver::{i2c::I2cDriver, Driver};
use anyhow::{anyhow, Result};

pub const REGISTER_DUMP_LEN: usize = 20; // 0x00..=0x13

const MAX_BURST: usize = 16;

/// M41T81 or PCF8523 RTC. Until [`Rtc::begin`] finds a chip, queries return
/// defaults and commands do nothing.
pub struct Rtc<'a, B: I2cDriver + ?Sized> {
    bus: &'a mut B,
    config: RtcConfig,
    model: RtcModel,
    address: u8,
}

impl<'a, B: I2cDriver + ?Sized> Rtc<'a, B> {
    pub fn new(bus: &'a mut B) -> Self {
        Self::with_config(bus, RtcConfig::default())
    }

    pub fn with_config(bus: &'a mut B, config: RtcConfig) -> Self {
        Self {
            bus,
            address: config.pcf8523_address,
            config,
            model: RtcModel::Unknown,
        }
    }

    // failed reads come back zeroed
    fn read_bytes(&mut self, reg: u8, buffer: &mut [u8]) {
        if let Err(e) = self.bus.i2c_write_read(self.address, &[reg], buffer) {
            warn!("RTC read {:#04x}@{:#04x}: {}", reg, self.address, e);
            buffer.fill(0);
        }
    }

    fn read_register(&mut self, reg: u8) -> u8 {
        let mut buffer = [0u8; 1];
        self.read_bytes(reg, &mut buffer);
        buffer[0]
    }

    fn burst_write(&mut self, start_reg: u8, data: &[u8]) {
        let mut buffer = [0u8; MAX_BURST + 1];
        let len = data.len().min(MAX_BURST);
        buffer[0] = start_reg;
        buffer[1..=len].copy_from_slice(&data[..len]);
        if let Err(e) = self.bus.i2c_write(self.address, &buffer[..=len]) {
            warn!("RTC write {:#04x}@{:#04x}: {}", start_reg, self.address, e);
        }
    }

    fn write_register(&mut self, reg: u8, value: u8) {
        self.burst_write(reg, &[value]);
    }

    fn map(&self) -> Option<&'static RegisterMap> {
        self.model.register_map()
    }

    pub fn begin(&mut self) -> bool {
        let cfg = self.config;
        if self.bus.i2c_probe(cfg.m41t81_address) {
            self.model = RtcModel::M41T81;
            self.address = cfg.m41t81_address;
        } else if self.bus.i2c_probe(cfg.pcf8523_address) {
            // An M41T81 on its alternate address answers here too. Only the
            // low three bits of the PCF8523 timer register are writable.
            self.address = cfg.pcf8523_address;
            self.write_register(cfg.scratch_register, cfg.scratch_probe);
            let echo = self.read_register(cfg.scratch_register);
            self.model = if echo == cfg.pcf8523_scratch_echo {
                RtcModel::PCF8523
            } else {
                RtcModel::M41T81
            };
            debug!("RTC scratch echo {:#04x}", echo);
        } else {
            self.model = RtcModel::Unknown;
            self.address = cfg.pcf8523_address;
            warn!("RTC not found");
            return false;
        }
        debug!("RTC: {}", self.model_name());
        true
    }

    pub fn model(&self) -> RtcModel {
        self.model
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    /// `"PCF8523 (68)"`, `"M41T81 (69)"` or `"unknown"`.
    pub fn model_name(&self) -> String {
        match self.model {
            RtcModel::Unknown => String::from("unknown"),
            model => format!("{} ({:02x})", model.name(), self.address),
        }
    }

    pub fn is_pcf8523(&self) -> bool {
        self.model == RtcModel::PCF8523
    }

    pub fn is_m41t81(&self) -> bool {
        self.model == RtcModel::M41T81
    }

    pub fn now(&mut self) -> DateTime {
        let Some(map) = self.map() else {
            return DateTime::default();
        };
        let mut raw = [0u8; 7];
        self.read_bytes(map.time_base, &mut raw);
        map.decode_time(&raw)
    }

    /// Sets the clock. On an M41T81 this also resets the control and alarm
    /// registers 0x08..=0x0F to their defaults.
    pub fn adjust(&mut self, dt: &DateTime) {
        let Some(map) = self.map() else {
            return;
        };
        let mut data = [0u8; MAX_BURST];
        let time = map.encode_time(dt);
        let mut len = 0;
        for &byte in map.write_prefix.iter().chain(&time).chain(map.write_suffix) {
            data[len] = byte;
            len += 1;
        }
        debug!("RTC adjust {}", dt);
        self.burst_write(map.write_base, &data[..len]);
    }

    pub fn is_running(&mut self) -> bool {
        let Some(map) = self.map() else {
            return false;
        };
        let status = self.read_register(map.halted.reg);
        !map.halted.is_all_set(status)
    }

    pub fn lost_power(&mut self) -> bool {
        let Some(map) = self.map() else {
            return false;
        };
        let status = self.read_register(map.lost_power.reg);
        map.lost_power.is_set(status)
    }

    pub fn low_battery(&mut self) -> bool {
        let Some(map) = self.map() else {
            return false;
        };
        let status = self.read_register(map.low_battery.reg);
        map.low_battery.is_set(status)
    }

    pub fn reset_lost_power(&mut self) {
        if let Some(map) = self.map() {
            self.write_register(map.clear_lost_power.reg, map.clear_lost_power.value);
        }
    }

    pub fn stop(&mut self) {
        if let Some(map) = self.map() {
            self.write_register(map.stop.reg, map.stop.value);
        }
    }

    pub fn dump_registers(&mut self) -> [u8; REGISTER_DUMP_LEN] {
        let mut regs = [0u8; REGISTER_DUMP_LEN];
        self.read_bytes(0x00, &mut regs);
        regs
    }
}

/// `"RTC: 00112233 44556677 ..."`, four registers per group.
pub fn format_registers(regs: &[u8]) -> String {
    let mut out = String::from("RTC:");
    for (i, reg) in regs.iter().enumerate() {
        if i % 4 == 0 {
            out.push(' ');
        }
        let _ = write!(out, "{:02X}", reg);
    }
    out
}

impl<B: I2cDriver + ?Sized> Driver for Rtc<'_, B> {
    fn driver_init(&mut self) -> Result<()> {
        if self.begin() {
            Ok(())
        } else {
            Err(anyhow!("RTC NOT FOUND"))
        }
    }

    fn driver_deinit(&mut self) -> Result<()> {
        self.stop();
        Ok(())
    }

    fn driver_dev_name(&self) -> &'static str {
        self.model.name()
    }
}

impl<B: I2cDriver + ?Sized> RtcDriver for Rtc<'_, B> {
    fn rtc_read_datetime(&mut self) -> DateTime {
        self.now()
    }

    fn rtc_write_datetime(&mut self, dt: &DateTime) {
        self.adjust(dt)
    }
}
