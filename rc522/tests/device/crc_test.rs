#[path = "../common/mod.rs"]
mod common;

use rc522::device::Register;
use rc522::protocol::crc_a;
use rc522::Error;
use serial_test::serial;

#[test]
fn coprocessor_matches_software_crc() -> anyhow::Result<()> {
    let (mut device, mock) = common::initialized_mock_device()?;
    let frame = [0x93, 0x70, 0xDE, 0xAD, 0xBE, 0xEF, 0x22, 0x00, 0x00];
    let crc = device.calculate_crc(&frame)?;
    assert_eq!(crc, crc_a(&frame[..7]));
    assert_eq!(mock.crc_inputs(), vec![frame[..7].to_vec()]);
    Ok(())
}

#[test]
#[serial]
fn stalled_coprocessor_times_out_without_result_reads() -> anyhow::Result<()> {
    common::init_logging();
    let (mut device, mock) = common::initialized_mock_device()?;
    mock.stall_crc(true);

    let err = device.calculate_crc(&[0x50, 0x00, 0x00, 0x00]).unwrap_err();
    assert!(matches!(err, Error::Timeout));
    assert_eq!(mock.reads_of(Register::CrcResultLsb), 0);
    assert_eq!(mock.reads_of(Register::CrcResultMsb), 0);

    mock.stall_crc(false);
    assert_eq!(device.calculate_crc(&[0x50, 0x00, 0x00, 0x00])?, [0x57, 0xCD]);
    Ok(())
}
