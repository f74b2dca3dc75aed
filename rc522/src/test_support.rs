// rc522/src/test_support.rs

//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory can reuse the same chip and card scripting.
#![allow(dead_code)]

use crate::device::{Device, Initialized, Uninitialized};
use crate::protocol::checksum::bcc;
use crate::transport::mock::{CardReply, MockTransport};
use crate::types::{Key, KeyType, Uid};
use crate::Result;

/// A Device wired to a fresh simulated chip, plus a handle to that chip.
#[doc(hidden)]
pub fn mock_device() -> (Device<Uninitialized>, MockTransport) {
    let mock = MockTransport::new();
    let device = Device::new(Box::new(mock.clone()), Box::new(mock.reset_line()));
    (device, mock)
}

/// Convenience: create and initialize a Device<Initialized> backed by a
/// simulated chip. The traffic of the init sequence is cleared from the
/// log.
#[doc(hidden)]
pub fn initialized_mock_device() -> Result<(Device<Initialized>, MockTransport)> {
    let (device, mock) = mock_device();
    let device = device.initialize()?;
    mock.clear_log();
    Ok((device, mock))
}

/// Card answers for a full activation of a card with `uid`: ATQA, then per
/// cascade level the anticollision frame with BCC and the SAK.
#[doc(hidden)]
pub fn activation_replies(uid: &Uid, sak: u8) -> Vec<CardReply> {
    let mut replies = vec![CardReply::bytes(&[0x04, 0x00])];
    let parts = uid.cascade_parts();
    let last = parts.len() - 1;
    for (i, part) in parts.iter().enumerate() {
        let mut answer = part.to_vec();
        answer.push(bcc(part));
        replies.push(CardReply::bytes(&answer));
        let level_sak = if i == last { sak } else { 0x04 };
        replies.push(CardReply::with_crc(&[level_sak]));
    }
    replies
}

/// Initialized device with the card `uid` selected (SAK 0x08).
#[doc(hidden)]
pub fn selected_mock_device(uid: &[u8]) -> Result<(Device<Initialized>, MockTransport)> {
    let uid = Uid::try_from(uid)?;
    let (mut device, mock) = initialized_mock_device()?;
    let levels = uid.cascade_parts().len();
    for level in 1..=levels {
        let sak = if level == levels { 0x08 } else { 0x04 };
        mock.push_reply(CardReply::with_crc(&[sak]));
    }
    device.select(&uid)?;
    mock.clear_log();
    Ok((device, mock))
}

/// Selected card DE AD BE EF, authenticated with the default key A for
/// the sector holding `block`.
#[doc(hidden)]
pub fn authenticated_mock_device(block: u8) -> Result<(Device<Initialized>, MockTransport)> {
    let (mut device, mock) = selected_mock_device(&[0xDE, 0xAD, 0xBE, 0xEF])?;
    mock.push_reply(CardReply::Auth { accepted: true });
    device.authenticate(KeyType::A, block, &Key::DEFAULT)?;
    mock.clear_log();
    Ok((device, mock))
}
