//! Raw integer and bit-flag access over a save buffer.
//!
//! Callers guarantee `offset + width <= bytes.len()`; every offset in
//! this crate is derived from a layout table that detection has
//! already validated against the buffer length, so a violation is a
//! programming error and panics.

pub fn read_u16_be(bytes: &[u8], offset: usize) -> u16 {
    u16::from_be_bytes([bytes[offset], bytes[offset + 1]])
}

pub fn write_u16_be(bytes: &mut [u8], offset: usize, value: u16) {
    bytes[offset..offset + 2].copy_from_slice(&value.to_be_bytes());
}

pub fn read_u16_le(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

pub fn write_u16_le(bytes: &mut [u8], offset: usize, value: u16) {
    bytes[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
}

/// Experience points are stored as 3-byte big-endian integers.
pub fn read_u24_be(bytes: &[u8], offset: usize) -> u32 {
    ((bytes[offset] as u32) << 16) | ((bytes[offset + 1] as u32) << 8) | bytes[offset + 2] as u32
}

pub fn write_u24_be(bytes: &mut [u8], offset: usize, value: u32) {
    bytes[offset] = ((value >> 16) & 0xFF) as u8;
    bytes[offset + 1] = ((value >> 8) & 0xFF) as u8;
    bytes[offset + 2] = (value & 0xFF) as u8;
}

pub fn get_bit(value: u8, index: u8) -> bool {
    (value >> index) & 1 == 1
}

/// Clears then conditionally sets one bit at a byte offset, leaving
/// the other bits untouched.
pub fn set_flag(bytes: &mut [u8], offset: usize, bit: u8, value: bool) {
    bytes[offset] &= !(1 << bit);
    if value {
        bytes[offset] |= 1 << bit;
    }
}

pub fn get_flag(bytes: &[u8], offset: usize, bit: u8) -> bool {
    get_bit(bytes[offset], bit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u16_big_endian_round_trip() {
        let mut buf = [0u8; 4];
        write_u16_be(&mut buf, 1, 0xBEEF);
        assert_eq!(buf, [0x00, 0xBE, 0xEF, 0x00]);
        assert_eq!(read_u16_be(&buf, 1), 0xBEEF);
    }

    #[test]
    fn u16_little_endian_round_trip() {
        let mut buf = [0u8; 2];
        write_u16_le(&mut buf, 0, 0xBEEF);
        assert_eq!(buf, [0xEF, 0xBE]);
        assert_eq!(read_u16_le(&buf, 0), 0xBEEF);
    }

    #[test]
    fn u24_big_endian_round_trip() {
        let mut buf = [0u8; 3];
        write_u24_be(&mut buf, 0, 1_059_860);
        assert_eq!(read_u24_be(&buf, 0), 1_059_860);
    }

    #[test]
    fn flags_touch_only_their_bit() {
        let mut buf = [0b1010_0101u8];
        set_flag(&mut buf, 0, 1, true);
        assert_eq!(buf[0], 0b1010_0111);
        set_flag(&mut buf, 0, 2, false);
        assert_eq!(buf[0], 0b1010_0011);
        assert!(get_flag(&buf, 0, 7));
        assert!(!get_flag(&buf, 0, 6));
    }
}
