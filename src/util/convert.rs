//! Byte-level conversions shared by the calendar parser and the RTC register maps.

/// Decodes a packed BCD byte. Nibbles above 9 are not rejected; the chips
/// never produce them once status bits are masked off.
pub const fn bcd_to_dec(bcd: u8) -> u8 {
    bcd.wrapping_sub(6 * (bcd >> 4))
}

/// Encodes `0..=99` as packed BCD.
pub const fn dec_to_bcd(dec: u8) -> u8 {
    dec.wrapping_add(6 * (dec / 10))
}

/// Reads up to two leading ASCII digits. A non-digit (or a missing byte)
/// contributes nothing, so `" 6"` decodes as 6 and `"x"` as 0.
pub fn conv2d(p: &[u8]) -> u8 {
    let mut v = 0u8;
    if let Some(c @ b'0'..=b'9') = p.first() {
        v = c - b'0';
    }
    if let Some(c @ b'0'..=b'9') = p.get(1) {
        v = 10 * v + (c - b'0');
    }
    v
}
