//! Hex formatting and parsing for UIDs, blocks and register dumps.

use std::fmt::Write;

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Upper-case hex without separators, two digits per byte.
///
/// A 16-byte block renders as 32 characters.
pub fn to_hex_upper(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.push(HEX_UPPER[(b >> 4) as usize] as char);
        out.push(HEX_UPPER[(b & 0x0F) as usize] as char);
    }
    out
}

/// Lower-case hex with one space between bytes: `de ad`.
pub fn to_hex_spaced(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Classic dump: offset, `width` hex bytes and an ASCII column per line.
pub fn hex_dump(bytes: &[u8], width: usize) -> String {
    let width = width.max(1);
    let mut out = String::new();
    for (row, chunk) in bytes.chunks(width).enumerate() {
        let _ = write!(out, "{:04x}  ", row * width);
        for i in 0..width {
            match chunk.get(i) {
                Some(b) => {
                    let _ = write!(out, "{:02x} ", b);
                }
                None => out.push_str("   "),
            }
        }
        out.push(' ');
        for &b in chunk {
            out.push(if b.is_ascii_graphic() { b as char } else { '.' });
        }
        out.push('\n');
    }
    out
}

/// Parse hex digits, ignoring whitespace and `:` separators.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    let digits: Vec<u8> = s
        .bytes()
        .filter(|c| !c.is_ascii_whitespace() && *c != b':')
        .collect();
    if digits.len() % 2 != 0 {
        return Err(format!("odd number of hex digits ({})", digits.len()));
    }
    digits
        .chunks(2)
        .map(|pair| {
            let text = std::str::from_utf8(pair).map_err(|e| e.to_string())?;
            u8::from_str_radix(text, 16).map_err(|e| format!("bad hex byte '{}': {}", text, e))
        })
        .collect()
}
