#[path = "../common/mod.rs"]
mod common;

use rc522::constants::VERSION_2_0;
use rc522::device::{DeviceBuilder, Register};
use rc522::transport::mock::MockTransport;
use rc522::transport::{ResetLine, Transport};
use rc522::AntennaGain;

#[test]
fn initialize_transitions_and_keeps_register_access() -> anyhow::Result<()> {
    common::init_logging();
    let (mut device, mock) = common::mock_device();

    // Uninitialized device already talks to the chip
    assert_eq!(device.version()?, VERSION_2_0);

    let mut initialized = device.initialize()?;
    assert_eq!(initialized.read_register(Register::TMode)?, 0x8D);
    assert!(initialized.is_antenna_enabled());
    assert_eq!(mock.reset_levels(), vec![true]);
    Ok(())
}

#[test]
fn builder_applies_configuration() -> anyhow::Result<()> {
    let mock = MockTransport::new();
    let device = DeviceBuilder::new()
        .with_transport(Box::new(mock.clone()))
        .with_reset_line(Box::new(mock.reset_line()))
        .bus_speed_hz(2_000_000)
        .antenna_gain(AntennaGain::Db38)
        .build()?;

    assert_eq!(mock.clock_hz(), Some(2_000_000));
    assert_eq!(device.antenna_gain(), AntennaGain::Db38);
    assert_eq!(mock.register(Register::RfCfg) & 0x70, 0x50);
    Ok(())
}

#[test]
fn release_returns_bus_handles() -> anyhow::Result<()> {
    let (device, mock) = common::initialized_mock_device()?;
    let (mut transport, mut reset) = device.release();
    let rx = transport.transfer(&[Register::Version.read_address(), 0])?;
    assert_eq!(rx[1], VERSION_2_0);
    reset.set_level(false)?;
    assert_eq!(mock.reset_levels(), vec![true, false]);
    Ok(())
}
