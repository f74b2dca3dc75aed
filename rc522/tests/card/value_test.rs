#[path = "../common/mod.rs"]
mod common;

use rc522::protocol::encode_value_block;
use rc522::transport::mock::CardReply;
use rc522::Error;

#[test]
fn write_increment_transfer_read() -> anyhow::Result<()> {
    common::init_logging();
    let (mut device, mock) = common::authenticated_mock_device(4)?;

    mock.push_reply(CardReply::ack());
    mock.push_reply(CardReply::ack());
    device.write_value(5, 100)?;

    // increment: ack, passive ack on the operand, then transfer ack
    mock.push_reply(CardReply::ack());
    mock.push_reply(CardReply::Silent);
    mock.push_reply(CardReply::ack());
    device.increment(5, 25)?;
    device.transfer(5)?;

    mock.push_reply(CardReply::bytes(&encode_value_block(125, 5)));
    assert_eq!(device.read_value(5)?, 125);
    Ok(())
}

#[test]
fn decrement_into_another_block() -> anyhow::Result<()> {
    let (mut device, mock) = common::authenticated_mock_device(4)?;
    for _ in 0..3 {
        mock.push_reply(CardReply::ack());
    }
    device.decrement(5, 3)?;
    device.transfer(6)?;

    let frames = mock.sent_frames();
    assert_eq!(frames[0][..2], [0xC0, 5]);
    assert_eq!(frames[1][..4], 3i32.to_le_bytes());
    assert_eq!(frames[2][..2], [0xB0, 6]);
    Ok(())
}

#[test]
fn transfer_is_single_use() -> anyhow::Result<()> {
    let (mut device, mock) = common::authenticated_mock_device(4)?;
    for _ in 0..3 {
        mock.push_reply(CardReply::ack());
    }
    device.restore(5)?;
    device.transfer(6)?;
    assert!(matches!(device.transfer(6), Err(Error::InvalidState(_))));
    Ok(())
}

#[test]
fn corrupt_value_block_detected() -> anyhow::Result<()> {
    let (mut device, mock) = common::authenticated_mock_device(4)?;
    let mut block = encode_value_block(7, 5);
    block[8] ^= 0xFF;
    mock.push_reply(CardReply::bytes(&block));
    assert!(matches!(
        device.read_value(5),
        Err(Error::CorruptValueBlock { block: 5 })
    ));
    Ok(())
}
