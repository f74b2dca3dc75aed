use proptest::prelude::*;
use rc522::protocol::{AccessConditions, SectorTrailer, access_bits, access_conditions};
use rc522::{BlockData, Error, Key};

#[test]
fn transport_configuration() -> anyhow::Result<()> {
    assert_eq!(access_bits(0b0000, 0b0000, 0b1000)?, [0xFF, 0x07, 0x80]);
    let conditions = access_conditions(&[0xFF, 0x07, 0x80])?;
    assert_eq!(conditions, AccessConditions::TRANSPORT);
    assert_eq!(conditions.groups(), [0b000, 0b000, 0b000, 0b001]);
    Ok(())
}

#[test]
fn read_only_value_sector() -> anyhow::Result<()> {
    // data blocks read/decrement only (110), trailer with key B management (011)
    let conditions = AccessConditions::from_groups([0b110, 0b110, 0b110, 0b011])?;
    let bytes = conditions.to_bytes();
    assert_eq!(access_conditions(&bytes)?.groups(), [0b110, 0b110, 0b110, 0b011]);
    Ok(())
}

#[test]
fn inconsistent_inverted_copy_rejected() {
    let mut bytes = [0xFF, 0x07, 0x80];
    bytes[0] ^= 0x01;
    assert!(matches!(
        access_conditions(&bytes),
        Err(Error::InvalidParameter(_))
    ));
}

#[test]
fn nibbles_above_four_bits_rejected() {
    assert!(access_bits(0x10, 0, 0).is_err());
    assert!(AccessConditions::from_groups([8, 0, 0, 0]).is_err());
}

#[test]
fn trailer_block_layout() -> anyhow::Result<()> {
    let trailer = SectorTrailer {
        key_a: Key::DEFAULT,
        access: AccessConditions::TRANSPORT,
        user_data: 0x69,
        key_b: Key::from_bytes([0xB0, 0xB1, 0xB2, 0xB3, 0xB4, 0xB5]),
    };
    let block = trailer.to_block();
    assert_eq!(
        hex::encode_upper(block.as_bytes()),
        "FFFFFFFFFFFFFF078069B0B1B2B3B4B5"
    );
    let parsed = SectorTrailer::from_block(&BlockData::from_bytes(*block.as_bytes()))?;
    assert_eq!(parsed.access, AccessConditions::TRANSPORT);
    assert_eq!(parsed.user_data, 0x69);
    Ok(())
}

proptest! {
    #[test]
    fn any_valid_groups_survive_encoding(groups in prop::array::uniform4(0u8..8)) {
        let conditions = AccessConditions::from_groups(groups).unwrap();
        let decoded = access_conditions(&conditions.to_bytes()).unwrap();
        prop_assert_eq!(decoded.groups(), groups);
    }

    #[test]
    fn single_bit_flip_is_detected(bit in 0usize..24) {
        let mut bytes = AccessConditions::TRANSPORT.to_bytes();
        bytes[bit / 8] ^= 1 << (bit % 8);
        prop_assert!(access_conditions(&bytes).is_err());
    }
}
