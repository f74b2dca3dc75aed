// Runs against a real reader. Set RC522_SPIDEV (e.g. /dev/spidev0.0) and
// run with `cargo test --features spidev -- --ignored`.

use rc522::prelude::*;
use rc522::transport::SpidevTransport;

fn open_reader() -> anyhow::Result<Option<Device<Initialized>>> {
    let Ok(path) = std::env::var("RC522_SPIDEV") else {
        eprintln!("RC522_SPIDEV not set; skipping");
        return Ok(None);
    };
    let transport = SpidevTransport::open(&path)?;
    let device = DeviceBuilder::new()
        .with_transport(Box::new(transport))
        .with_reset_line(Box::new(TiedHigh))
        .build()?;
    Ok(Some(device))
}

#[test]
#[ignore]
fn reader_reports_known_version() -> anyhow::Result<()> {
    let Some(mut device) = open_reader()? else {
        return Ok(());
    };
    let version = device.version()?;
    assert!(matches!(version, 0x91 | 0x92), "VersionReg {:#04x}", version);
    assert!(device.is_antenna_enabled());
    Ok(())
}

#[test]
#[ignore]
fn card_on_reader_can_be_selected() -> anyhow::Result<()> {
    let Some(mut device) = open_reader()? else {
        return Ok(());
    };
    match device.wait_for_uid(ms(100), 20)? {
        Some(uid) => {
            let sak = device.select(&uid)?;
            assert_eq!(device.session().state(), SelectionState::Selected);
            eprintln!("selected {} ({})", uid, sak.card_type());
            device.halt()?;
        }
        None => eprintln!("no card presented"),
    }
    Ok(())
}
