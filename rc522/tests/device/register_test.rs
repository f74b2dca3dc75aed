#[path = "../common/mod.rs"]
mod common;

use rc522::device::Register;
use rc522::Error;

#[test]
fn every_access_is_a_two_byte_exchange() -> anyhow::Result<()> {
    let (mut device, mock) = common::initialized_mock_device()?;
    device.write_register(Register::TReloadLo, 0x55)?;
    assert_eq!(device.read_register(Register::TReloadLo)?, 0x55);
    assert_eq!(mock.writes_to(Register::TReloadLo), vec![0x55]);
    assert_eq!(mock.reads_of(Register::TReloadLo), 1);
    Ok(())
}

#[test]
fn bit_helpers_read_modify_write() -> anyhow::Result<()> {
    let (mut device, mock) = common::initialized_mock_device()?;
    device.write_register(Register::Coll, 0x80)?;
    device.clear_bits(Register::Coll, 0x80)?;
    assert_eq!(mock.register(Register::Coll), 0x00);
    device.set_bits(Register::Coll, 0x81)?;
    assert_eq!(mock.register(Register::Coll), 0x81);
    Ok(())
}

#[test]
fn dump_lists_registers_without_popping_fifo() -> anyhow::Result<()> {
    let (mut device, mock) = common::initialized_mock_device()?;
    let dump = device.dump_registers()?;
    assert!(dump.iter().any(|(r, v)| *r == Register::TPrescaler && *v == 0x3E));
    assert_eq!(mock.reads_of(Register::FifoData), 0);
    Ok(())
}

#[test]
fn bus_failure_surfaces_as_hardware_io() -> anyhow::Result<()> {
    let (mut device, mock) = common::initialized_mock_device()?;
    mock.fail_next_transfers(1);
    let err = device.read_register(Register::Version).unwrap_err();
    assert!(matches!(err, Error::HardwareIo(_)));
    assert!(!err.is_retryable());
    Ok(())
}
