//! Read one block of a MIFARE Classic card on a spidev-attached MFRC522.
//!
//! Usage:
//!   cargo run --example read_block --features spidev -- /dev/spidev0.0 4

use std::time::Duration;

use rc522::prelude::*;
use rc522::protocol::decode_value_block;
use rc522::protocol::layout::sector_of;
use rc522::transport::SpidevTransport;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "/dev/spidev0.0".to_string());
    let block: u8 = match args.next() {
        Some(arg) => arg.parse()?,
        None => 4,
    };

    let transport = SpidevTransport::open(&path)?;
    let mut device = DeviceBuilder::new()
        .with_transport(Box::new(transport))
        .with_reset_line(Box::new(TiedHigh))
        .antenna_gain(AntennaGain::Db43)
        .build()?;
    println!("MFRC522 version {:#04x} on {}", device.version()?, path);

    println!("waiting for a card...");
    let uid = loop {
        if let Some(uid) = device.wait_for_uid(Duration::from_millis(200), 50)? {
            break uid;
        }
    };
    let sak = device.select(&uid)?;
    println!("card {} ({})", uid, sak.card_type());

    device.authenticate(KeyType::A, block, &Key::DEFAULT)?;
    let data = device.read_block(block)?;
    println!(
        "sector {} block {}: {}  |{}|",
        sector_of(block),
        block,
        to_hex_spaced(data.as_bytes()),
        data.to_ascii_safe()
    );
    if let Ok(value) = decode_value_block(data.as_bytes()) {
        println!("  value block: {}", value);
    }

    device.stop_crypto()?;
    device.halt()?;
    Ok(())
}
