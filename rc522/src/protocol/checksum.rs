// rc522/src/protocol/checksum.rs

/// Block check character of an anticollision answer: XOR of the UID bytes.
pub fn bcc(uid_part: &[u8]) -> u8 {
    uid_part.iter().fold(0u8, |acc, &b| acc ^ b)
}

/// CRC_A (ISO/IEC 14443-3 annex B), preset 0x6363, returned low byte first
/// as it is appended on the wire.
pub fn crc_a(data: &[u8]) -> [u8; 2] {
    let crc = data.iter().fold(0x6363u16, |crc, &b| {
        let mut ch = b ^ (crc as u8);
        ch ^= ch << 4;
        let ch = ch as u16;
        (crc >> 8) ^ (ch << 8) ^ (ch << 3) ^ (ch >> 4)
    });
    crc.to_le_bytes()
}

/// Whether the last two bytes of `frame` are the CRC_A of the rest.
pub fn check_crc_a(frame: &[u8]) -> bool {
    match frame.len().checked_sub(2) {
        Some(split) => crc_a(&frame[..split]) == frame[split..],
        None => false,
    }
}
