use rc522::protocol::checksum::{bcc, check_crc_a, crc_a};

#[test]
fn crc_a_of_card_commands() {
    let cases: [(&[u8], [u8; 2]); 6] = [
        (&[0x50, 0x00], [0x57, 0xCD]),
        (&[0x30, 0x00], [0x02, 0xA8]),
        (&[0xA0, 0x04], [0x7B, 0xF7]),
        (&[0xC1, 0x05], [0x7F, 0x9A]),
        (&[0xB0, 0x06], [0xF8, 0x41]),
        (&[0x08], [0xB6, 0xDD]),
    ];
    for (data, crc) in cases {
        assert_eq!(crc_a(data), crc, "crc of {}", hex::encode(data));
    }
}

#[test]
fn check_crc_a_accepts_only_intact_frames() {
    assert!(check_crc_a(&[0x08, 0xB6, 0xDD]));
    assert!(!check_crc_a(&[0x08, 0xB6, 0xDC]));
    assert!(!check_crc_a(&[0x08, 0xDD, 0xB6]));
    assert!(!check_crc_a(&[0xB6]));
}

#[test]
fn bcc_of_uid_parts() {
    assert_eq!(bcc(&[0xDE, 0xAD, 0xBE, 0xEF]), 0x22);
    assert_eq!(bcc(&[0x88, 0x04, 0x12, 0x34]), 0x88 ^ 0x04 ^ 0x12 ^ 0x34);
    assert_eq!(bcc(&[0x00; 4]), 0x00);
}
