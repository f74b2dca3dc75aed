#[path = "../common/mod.rs"]
mod common;

use rc522::device::Register;
use rc522::transport::mock::CardReply;
use rc522::{Error, ErrorKind};

#[test]
fn bus_failure_surfaces_as_hardware_io() -> anyhow::Result<()> {
    let (mut device, mock) = common::initialized_mock_device()?;
    mock.fail_next_transfers(1);
    let err = device.read_register(Register::Version).unwrap_err();
    assert!(matches!(err, Error::HardwareIo(_)));
    assert_eq!(err.kind(), ErrorKind::HardwareIo);
    assert!(!err.is_retryable());

    // the next exchange goes through again
    assert_eq!(device.version()?, 0x92);
    Ok(())
}

#[test]
fn presence_check_propagates_bus_failure() -> anyhow::Result<()> {
    let (mut device, mock) = common::initialized_mock_device()?;
    mock.fail_next_transfers(1);
    assert!(matches!(device.is_card_present(), Err(Error::HardwareIo(_))));

    mock.push_reply(CardReply::bytes(&[0x04, 0x00]));
    assert!(device.is_card_present()?);
    Ok(())
}

#[test]
fn initialization_fails_when_reset_line_fails() {
    let (device, mock) = common::mock_device();
    mock.fail_next_transfers(1);
    assert!(matches!(device.initialize(), Err(Error::HardwareIo(_))));
}

#[test]
fn failure_mid_transceive_aborts_exchange() -> anyhow::Result<()> {
    let (mut device, mock) = common::initialized_mock_device()?;
    mock.push_reply(CardReply::bytes(&[0x04, 0x00]));
    mock.fail_next_transfers(3);
    assert!(device.request().is_err());
    assert!(mock.sent_frames().is_empty());
    Ok(())
}
