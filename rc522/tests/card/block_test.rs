#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use rc522::protocol::{AccessConditions, access_bits};
use rc522::transport::mock::CardReply;
use rc522::{BlockData, Error, Key};

#[test]
fn read_manufacturer_block() -> anyhow::Result<()> {
    let (mut device, mock) = common::authenticated_mock_device(0)?;
    let expected = fixtures::manufacturer_block();
    mock.push_reply(CardReply::bytes(expected.as_bytes()));
    let block = device.read_block(0)?;
    assert_eq!(block, expected);
    assert_eq!(block.to_hex(), "DEADBEEF220804006263646566676869");
    Ok(())
}

#[test]
fn read_with_wrong_bit_count_fails() -> anyhow::Result<()> {
    let (mut device, mock) = common::authenticated_mock_device(4)?;
    mock.push_reply(CardReply::bits(&[0x00; 16], 7));
    assert!(matches!(
        device.read_block(4),
        Err(Error::UnexpectedBitLength {
            expected: 128,
            actual: 127
        })
    ));
    Ok(())
}

#[test]
fn write_nak_in_first_phase_sends_nothing_more() -> anyhow::Result<()> {
    let (mut device, mock) = common::authenticated_mock_device(4)?;
    mock.push_reply(CardReply::nak(0x05));
    let err = device
        .write_block(4, &BlockData::from_bytes([0x77; 16]))
        .unwrap_err();
    assert!(matches!(err, Error::Nak { ack: 0x05 }));
    assert_eq!(mock.sent_frames().len(), 1);
    assert_eq!(mock.pending_replies(), 0);
    Ok(())
}

#[test]
fn write_then_read_back() -> anyhow::Result<()> {
    let (mut device, mock) = common::authenticated_mock_device(4)?;
    let data = BlockData::from_bytes(*b"hello, mifare!!\0");
    mock.push_reply(CardReply::ack());
    mock.push_reply(CardReply::ack());
    device.write_block(6, &data)?;

    mock.push_reply(CardReply::bytes(data.as_bytes()));
    assert_eq!(device.read_block(6)?.to_ascii_safe(), "hello, mifare!!.");
    Ok(())
}

#[test]
fn trailer_write_rejects_bad_access_bits() -> anyhow::Result<()> {
    let (mut device, mock) = common::authenticated_mock_device(4)?;
    let err = device
        .write_trailer(1, &Key::DEFAULT, &[0xFF, 0x07], 0x00, &Key::DEFAULT)
        .unwrap_err();
    assert!(matches!(err, Error::InvalidLength { expected: 3, actual: 2 }));
    assert!(mock.sent_frames().is_empty());

    let bits = access_bits(0b0000, 0b0000, 0b1000)?;
    mock.push_reply(CardReply::ack());
    mock.push_reply(CardReply::ack());
    device.write_trailer(1, &Key::DEFAULT, &bits, 0x69, &fixtures::sample_key())?;

    let mut trailer = vec![0u8; 16];
    trailer[6..9].copy_from_slice(&bits);
    mock.push_reply(CardReply::bytes(&trailer));
    assert_eq!(device.read_access_conditions(1)?, AccessConditions::TRANSPORT);
    Ok(())
}
