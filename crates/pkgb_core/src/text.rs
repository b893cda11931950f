//! Codec for the proprietary Game Boy text encoding used by the
//! international releases.
//!
//! Strings are fixed-width byte runs terminated by 0x50. Decoding
//! stops at the terminator or when the declared width is consumed,
//! whichever comes first; encoding truncates, optionally upper-cases,
//! and pads the remaining width with terminators. A handful of legacy
//! code points (smart quote, gender glyphs) decode to their canonical
//! Unicode equivalents.

pub const TERMINATOR: u8 = 0x50;

/// In-game trades store this single byte instead of a trainer name;
/// the game substitutes the localized "TRAINER" string at display
/// time. Surfaced here as a literal `*`.
pub const TRAINER_PLACEHOLDER: u8 = 0x5D;

fn decode_byte(byte: u8) -> Option<char> {
    match byte {
        TRAINER_PLACEHOLDER => Some('*'),
        0x7F => Some(' '),
        0x80..=0x99 => Some((b'A' + (byte - 0x80)) as char),
        0x9A => Some('('),
        0x9B => Some(')'),
        0x9C => Some(':'),
        0x9D => Some(';'),
        0x9E => Some('['),
        0x9F => Some(']'),
        0xA0..=0xB9 => Some((b'a' + (byte - 0xA0)) as char),
        0xBA => Some('é'),
        // Legacy right-quote glyph, sanitized to ASCII.
        0xE0 => Some('\''),
        0xE3 => Some('-'),
        0xE6 => Some('?'),
        0xE7 => Some('!'),
        0xE8 => Some('.'),
        0xEF => Some('♂'),
        0xF3 => Some('/'),
        0xF4 => Some(','),
        0xF5 => Some('♀'),
        0xF6..=0xFF => Some((b'0' + (byte - 0xF6)) as char),
        _ => None,
    }
}

fn encode_char(c: char) -> Option<u8> {
    match c {
        '*' => Some(TRAINER_PLACEHOLDER),
        ' ' => Some(0x7F),
        'A'..='Z' => Some(0x80 + (c as u8 - b'A')),
        '(' => Some(0x9A),
        ')' => Some(0x9B),
        ':' => Some(0x9C),
        ';' => Some(0x9D),
        '[' => Some(0x9E),
        ']' => Some(0x9F),
        'a'..='z' => Some(0xA0 + (c as u8 - b'a')),
        'é' => Some(0xBA),
        '\'' | '’' => Some(0xE0),
        '-' => Some(0xE3),
        '?' => Some(0xE6),
        '!' => Some(0xE7),
        '.' => Some(0xE8),
        '♂' => Some(0xEF),
        '/' => Some(0xF3),
        ',' => Some(0xF4),
        '♀' => Some(0xF5),
        '0'..='9' => Some(0xF6 + (c as u8 - b'0')),
        _ => None,
    }
}

/// Decodes up to `max_len` bytes, stopping at the first terminator.
/// Bytes outside the character table are skipped with a warning.
pub fn decode(bytes: &[u8], max_len: usize) -> String {
    let mut out = String::new();
    for &byte in bytes.iter().take(max_len) {
        if byte == TERMINATOR {
            break;
        }
        match decode_byte(byte) {
            Some(c) => out.push(c),
            None => tracing::warn!(byte, "skipping byte outside the text character table"),
        }
    }
    out
}

/// Encodes `value` into exactly `out_len` bytes, truncating to
/// `max_chars` characters and padding the rest with terminators.
/// Characters without a table entry are dropped. A literal leading `*`
/// encodes the whole string as the in-game-trade TRAINER placeholder.
pub fn encode(value: &str, out_len: usize, max_chars: usize, uppercase: bool) -> Vec<u8> {
    let mut out = Vec::with_capacity(out_len);

    if value.starts_with('*') {
        out.push(TRAINER_PLACEHOLDER);
    } else {
        for c in value.chars().take(max_chars) {
            let c = if uppercase {
                c.to_ascii_uppercase()
            } else {
                c
            };
            match encode_char(c) {
                Some(byte) => out.push(byte),
                None => tracing::warn!(%c, "dropping character with no text-table encoding"),
            }
            if out.len() + 1 >= out_len {
                break;
            }
        }
    }

    out.resize(out_len, TERMINATOR);
    out
}
