use crate::datetime::DateTime;
use crate::util::{bcd_to_dec, dec_to_bcd};

// M41T81 registers
const M41T81_REG_SECONDS: u8 = 0x01; // ST (stop) in bit 7
const M41T81_REG_HALT: u8 = 0x0C; // HT in bit 6
const M41T81_REG_FLAGS: u8 = 0x0F;

// PCF8523 registers
const PCF8523_REG_CONTROL_3: u8 = 0x02; // PM[2:0] in bits 7..5, BSF bit 3, BLF bit 2
const PCF8523_REG_SECONDS: u8 = 0x03;

const M41T81_ST: u8 = 0x80;
const M41T81_HT: u8 = 0x40;
const M41T81_BL: u8 = 0x01;
const PCF8523_STANDBY: u8 = 0xE0;
const PCF8523_BSF: u8 = 0x08;
const PCF8523_BLF: u8 = 0x04;

/// Registers 0x08..=0x0F written after the time on every M41T81 adjust:
/// OUT=1, calibration 0, no square wave, alarms off, HT cleared.
const M41T81_CONTROL_DEFAULTS: [u8; 8] = [0x80, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Second,
    Minute,
    Hour,
    Weekday,
    Day,
    Month,
    Year,
}

impl Field {
    pub const fn mask(self) -> u8 {
        match self {
            Field::Second | Field::Minute => 0x7F,
            Field::Hour | Field::Day => 0x3F,
            Field::Weekday => 0x07,
            Field::Month => 0x1F,
            Field::Year => 0xFF,
        }
    }

    fn decode(self, raw: u8) -> u8 {
        bcd_to_dec(raw & self.mask())
    }

    // weekday is always written as 0
    fn encode(self, dt: &DateTime) -> u8 {
        match self {
            Field::Second => dec_to_bcd(dt.second()),
            Field::Minute => dec_to_bcd(dt.minute()),
            Field::Hour => dec_to_bcd(dt.hour()),
            Field::Weekday => 0,
            Field::Day => dec_to_bcd(dt.day()),
            Field::Month => dec_to_bcd(dt.month()),
            Field::Year => dec_to_bcd(dt.year_offset()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBit {
    pub reg: u8,
    pub mask: u8,
}

impl StatusBit {
    pub const fn is_set(&self, value: u8) -> bool {
        value & self.mask != 0
    }

    pub const fn is_all_set(&self, value: u8) -> bool {
        value & self.mask == self.mask
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterWrite {
    pub reg: u8,
    pub value: u8,
}

/// Everything the driver needs to know about one chip family.
#[derive(Debug, PartialEq, Eq)]
pub struct RegisterMap {
    pub name: &'static str,
    pub time_base: u8,
    pub layout: [Field; 7],
    pub write_base: u8, // adjust burst start
    pub write_prefix: &'static [u8], // write_base..time_base
    pub write_suffix: &'static [u8], // after the time block
    pub halted: StatusBit, // stopped when all bits set
    pub lost_power: StatusBit,
    pub low_battery: StatusBit,
    pub clear_lost_power: RegisterWrite,
    pub stop: RegisterWrite,
}

impl RegisterMap {
    pub fn decode_time(&self, raw: &[u8; 7]) -> DateTime {
        let mut dt = [0u8; 7];
        for (field, &byte) in self.layout.iter().zip(raw) {
            dt[*field as usize] = field.decode(byte);
        }
        let [second, minute, hour, _weekday, day, month, year] = dt;
        DateTime::new(year as u16, month, day, hour, minute, second)
    }

    pub fn encode_time(&self, dt: &DateTime) -> [u8; 7] {
        self.layout.map(|field| field.encode(dt))
    }

    pub fn write_len(&self) -> usize {
        self.write_prefix.len() + self.layout.len() + self.write_suffix.len()
    }
}

static M41T81_MAP: RegisterMap = RegisterMap {
    name: "M41T81",
    time_base: M41T81_REG_SECONDS,
    layout: [
        Field::Second,
        Field::Minute,
        Field::Hour,
        Field::Weekday,
        Field::Day,
        Field::Month,
        Field::Year,
    ],
    write_base: M41T81_REG_SECONDS,
    write_prefix: &[],
    write_suffix: &M41T81_CONTROL_DEFAULTS,
    halted: StatusBit {
        reg: M41T81_REG_SECONDS,
        mask: M41T81_ST,
    },
    lost_power: StatusBit {
        reg: M41T81_REG_HALT,
        mask: M41T81_HT,
    },
    low_battery: StatusBit {
        reg: M41T81_REG_FLAGS,
        mask: M41T81_BL,
    },
    clear_lost_power: RegisterWrite {
        reg: M41T81_REG_HALT,
        value: 0x00,
    },
    stop: RegisterWrite {
        reg: M41T81_REG_SECONDS,
        value: M41T81_ST,
    },
};

static PCF8523_MAP: RegisterMap = RegisterMap {
    name: "PCF8523",
    time_base: PCF8523_REG_SECONDS,
    layout: [
        Field::Second,
        Field::Minute,
        Field::Hour,
        Field::Day,
        Field::Weekday,
        Field::Month,
        Field::Year,
    ],
    // control 3 = 0: battery switch-over in standard mode, flags cleared
    write_base: PCF8523_REG_CONTROL_3,
    write_prefix: &[0x00],
    write_suffix: &[],
    halted: StatusBit {
        reg: PCF8523_REG_CONTROL_3,
        mask: PCF8523_STANDBY,
    },
    lost_power: StatusBit {
        reg: PCF8523_REG_CONTROL_3,
        mask: PCF8523_BSF,
    },
    low_battery: StatusBit {
        reg: PCF8523_REG_CONTROL_3,
        mask: PCF8523_BLF,
    },
    clear_lost_power: RegisterWrite {
        reg: PCF8523_REG_CONTROL_3,
        value: 0x00,
    },
    stop: RegisterWrite {
        reg: PCF8523_REG_CONTROL_3,
        value: PCF8523_STANDBY,
    },
};

/// Chip family found on the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RtcModel {
    #[default]
    Unknown,
    M41T81,
    PCF8523,
}

impl RtcModel {
    pub fn register_map(self) -> Option<&'static RegisterMap> {
        match self {
            RtcModel::Unknown => None,
            RtcModel::M41T81 => Some(&M41T81_MAP),
            RtcModel::PCF8523 => Some(&PCF8523_MAP),
        }
    }

    pub fn name(self) -> &'static str {
        self.register_map().map_or("unknown", |map| map.name)
    }
}
